use club_server_domain::{flash::FlashMessage, registration::StudentRegistration};
use maud::{Markup, html};

use super::{cell, layout};

pub fn admin(flashes: &[FlashMessage], students: &[StudentRegistration]) -> Markup {
    layout(
        "Admin",
        flashes,
        html! {
            h1 { "Registrations" }
            p { a href="/logout" { "Log out" } }
            @if students.is_empty() {
                p { "No registrations yet." }
            } @else {
                table {
                    thead {
                        tr {
                            th { "ID" } th { "Name" } th { "Gender" } th { "Sport" }
                            th { "Department" } th { "Contact" } th { "Email" } th {}
                        }
                    }
                    tbody {
                        @for student in students {
                            tr {
                                td { (student.id) }
                                td class="student-name" { (student.name) }
                                td { (cell(&student.gender)) }
                                td { (cell(&student.sport)) }
                                td { (cell(&student.department)) }
                                td { (cell(&student.contact)) }
                                td { (cell(&student.email)) }
                                td {
                                    form method="post" action={ "/delete/" (student.id) } {
                                        button type="submit" { "Delete" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}
