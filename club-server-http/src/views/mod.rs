//! Server-rendered HTML pages.
//!
//! Every page shares [`layout`], which renders the navigation bar and any
//! pending flash messages above the page content. All dynamic values are
//! escaped by maud.

mod admin;
mod forms;
mod pages;
mod performance;

pub use admin::admin;
pub use forms::{add_player, contact, login, register};
pub use pages::{about, index, teams};
pub use performance::performance;

use axum::http::StatusCode;
use club_server_domain::flash::FlashMessage;
use maud::{DOCTYPE, Markup, PreEscaped, html};

const SITE_NAME: &str = "Sports Club";

const SITE_CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1d2330; background: #f6f7fb; }
nav { display: flex; gap: 1rem; padding: 1rem 2rem; background: #14365d; }
nav a { color: #fff; text-decoration: none; }
main { max-width: 960px; margin: 2rem auto; padding: 0 1rem; }
.flash { padding: .75rem 1rem; margin-bottom: 1rem; border-radius: 4px; }
.flash-success { background: #d7f3df; }
.flash-danger { background: #f8d7da; }
.flash-warning { background: #fff3cd; }
.flash-info { background: #d9ecf7; }
form.stacked label { display: block; margin-top: .75rem; }
table { border-collapse: collapse; width: 100%; background: #fff; }
th, td { border: 1px solid #d5d9e2; padding: .5rem; text-align: left; }
"#;

pub(crate) fn layout(title: &str, flashes: &[FlashMessage], content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (SITE_NAME) }
                link rel="stylesheet" href="/static/style.css";
                style { (PreEscaped(SITE_CSS)) }
            }
            body {
                nav {
                    a href="/" { "Home" }
                    a href="/teams" { "Teams" }
                    a href="/Performance" { "Performance" }
                    a href="/register" { "Register" }
                    a href="/contact" { "Contact" }
                    a href="/about" { "About" }
                    a href="/admin" { "Admin" }
                }
                main {
                    @for flash in flashes {
                        div class={ "flash flash-" (flash.level.as_str()) } role="alert" {
                            (flash.text)
                        }
                    }
                    (content)
                }
            }
        }
    }
}

pub fn error_page(status: StatusCode, message: &str) -> Markup {
    let title = status.canonical_reason().unwrap_or("Error");
    layout(
        title,
        &[],
        html! {
            h1 { (status.as_u16()) " " (title) }
            p { (message) }
            a href="/" { "Back to the home page" }
        },
    )
}

/// Renders an optional column value, blank when missing.
fn cell<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}
