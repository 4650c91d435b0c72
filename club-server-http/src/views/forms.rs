use club_server_domain::flash::FlashMessage;
use maud::{Markup, html};

use super::layout;

pub fn register(flashes: &[FlashMessage]) -> Markup {
    layout(
        "Register",
        flashes,
        html! {
            h1 { "Student Registration" }
            form class="stacked" method="post" action="/register" {
                label { "Full name" input type="text" name="fullname" required; }
                label {
                    "Gender"
                    select name="gender" {
                        option value="Male" { "Male" }
                        option value="Female" { "Female" }
                        option value="Other" { "Other" }
                    }
                }
                label { "Sport" input type="text" name="sport"; }
                label { "Department" input type="text" name="department"; }
                label { "Contact" input type="tel" name="contact"; }
                label { "Email" input type="email" name="email"; }
                button type="submit" { "Register" }
            }
        },
    )
}

pub fn login(flashes: &[FlashMessage]) -> Markup {
    layout(
        "Admin Login",
        flashes,
        html! {
            h1 { "Admin Login" }
            form class="stacked" method="post" action="/login" {
                label { "Username" input type="text" name="username" required; }
                label { "Password" input type="password" name="password" required; }
                button type="submit" { "Log in" }
            }
        },
    )
}

pub fn add_player(flashes: &[FlashMessage]) -> Markup {
    layout(
        "Add Player",
        flashes,
        html! {
            h1 { "Add Player" }
            form class="stacked" method="post" action="/Addplayer" {
                label { "Name" input type="text" name="name"; }
                label { "Team" input type="text" name="team"; }
                label { "Position" input type="text" name="position"; }
                label { "Matches" input type="number" name="matches" min="0"; }
                label { "Goals" input type="number" name="goals" min="0"; }
                label { "Assists" input type="number" name="assists" min="0"; }
                button type="submit" { "Save player" }
            }
        },
    )
}

pub fn contact(flashes: &[FlashMessage]) -> Markup {
    layout(
        "Contact",
        flashes,
        html! {
            h1 { "Contact Us" }
            form class="stacked" method="post" action="/contact" {
                label { "Name" input type="text" name="name"; }
                label { "Email" input type="email" name="email"; }
                label { "Message" textarea name="message" rows="5" {} }
                button type="submit" { "Send" }
            }
        },
    )
}
