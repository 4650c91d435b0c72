use log::LevelFilter;
use log4rs::{
    Config,
    append::{
        console::{ConsoleAppender, Target},
        rolling_file::{
            RollingFileAppender,
            policy::compound::{
                CompoundPolicy, roll::fixed_window::FixedWindowRoller, trigger::size::SizeTrigger,
            },
        },
    },
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

use crate::config::LogConfig;

const LOG_SIZE_LIMIT: u64 = 10 * 1024 * 1024; // 10 MB

const LOG_FILE_COUNT: u32 = 3;

const LOG_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} {l} {t} - {m}{n}";

/// Builds the logger configuration: stderr at Info, plus a size-rolled file
/// at Debug when a log file path is configured.
fn build_config(log_config: &LogConfig) -> Result<Config, Box<dyn std::error::Error>> {
    let stderr_level = LevelFilter::Info;
    let file_level = LevelFilter::Debug;

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
        .build();

    let mut builder = Config::builder().appender(
        Appender::builder()
            .filter(Box::new(ThresholdFilter::new(stderr_level)))
            .build("stderr", Box::new(stderr)),
    );
    let mut root = Root::builder().appender("stderr");

    if let Some(file_path) = &log_config.file_path {
        let trigger = SizeTrigger::new(LOG_SIZE_LIMIT);
        let roller =
            FixedWindowRoller::builder().build(&log_config.archive_pattern, LOG_FILE_COUNT)?;
        let policy = CompoundPolicy::new(Box::new(trigger), Box::new(roller));

        let logfile = RollingFileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(file_path, Box::new(policy))?;

        builder = builder.appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(file_level)))
                .build("logfile", Box::new(logfile)),
        );
        root = root.appender("logfile");
    }

    Ok(builder.build(root.build(LevelFilter::Debug))?)
}

pub fn init_logger(log_config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(log_config)?;
    let _handle = log4rs::init_config(config)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stderr_only_without_file() {
        let config = build_config(&LogConfig {
            file_path: None,
            archive_pattern: "unused.{}.gz".to_string(),
        })
        .unwrap();
        assert_eq!(config.appenders().len(), 1);
    }

    #[test]
    fn test_file_appender_when_path_set() {
        let dir = std::env::temp_dir().join(format!("club-server-logs-{}", std::process::id()));
        let file_path = dir.join("club.log").to_string_lossy().into_owned();
        let config = build_config(&LogConfig {
            archive_pattern: format!("{}.{{}}.gz", file_path),
            file_path: Some(file_path),
        })
        .unwrap();
        assert_eq!(config.appenders().len(), 2);
        assert_eq!(config.root().appenders().len(), 2);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn test_archive_pattern_without_placeholder_is_rejected() {
        let result = build_config(&LogConfig {
            file_path: Some(
                std::env::temp_dir()
                    .join("club-server-bad-pattern.log")
                    .to_string_lossy()
                    .into_owned(),
            ),
            archive_pattern: "no-placeholder.gz".to_string(),
        });
        assert!(result.is_err());
    }
}
