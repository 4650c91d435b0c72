use club_server_domain::flash::FlashMessage;
use maud::{Markup, html};

use super::layout;

pub fn index(flashes: &[FlashMessage]) -> Markup {
    layout(
        "Home",
        flashes,
        html! {
            h1 { "Welcome to the Sports Club" }
            p { "Train, compete and grow with teams across every sport on campus." }
            p {
                a href="/register" { "Register for a sport" }
                " or check the "
                a href="/Performance" { "player leaderboard" }
                "."
            }
        },
    )
}

pub fn teams(flashes: &[FlashMessage]) -> Markup {
    layout(
        "Teams",
        flashes,
        html! {
            h1 { "Our Teams" }
            ul {
                li { "Football" }
                li { "Cricket" }
                li { "Basketball" }
                li { "Volleyball" }
                li { "Badminton" }
            }
        },
    )
}

pub fn about(flashes: &[FlashMessage]) -> Markup {
    layout(
        "About",
        flashes,
        html! {
            h1 { "About Us" }
            p {
                "The club organises training, inter-department tournaments and "
                "friendly fixtures for students of every level."
            }
        },
    )
}
