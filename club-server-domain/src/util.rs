use validator::Validate;

use crate::{ServiceError, ServiceResult};

pub fn validate_form<T: Validate>(form: &T) -> ServiceResult<()> {
    if let Err(e) = form.validate() {
        return ServiceError::bad_request(format!("Invalid form: {}", e));
    }
    Ok(())
}

/// Trims the value and treats blank text as absent.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some("   ".into())), None);
        assert_eq!(non_blank(Some(" Ada ".into())), Some("Ada".into()));
    }
}
