use club_server_domain::{flash::FlashMessage, player::RankedPlayer};
use maud::{Markup, html};

use super::{cell, layout};

pub fn performance(flashes: &[FlashMessage], players: &[RankedPlayer]) -> Markup {
    layout(
        "Performance",
        flashes,
        html! {
            h1 { "Player Performance" }
            p { a href="/Addplayer" { "Add a player" } }
            table {
                thead {
                    tr {
                        th { "Name" } th { "Team" } th { "Position" } th { "Matches" }
                        th { "Goals" } th { "Assists" } th { "Energy" }
                    }
                }
                tbody {
                    @for ranked in players {
                        @let player = &ranked.player;
                        tr {
                            td class="player-name" { (cell(&player.name)) }
                            td { (cell(&player.team)) }
                            td { (cell(&player.position)) }
                            td { (cell(&player.matches)) }
                            td { (cell(&player.goals)) }
                            td { (cell(&player.assists)) }
                            td class="energy" { (ranked.energy) }
                        }
                    }
                }
            }
        },
    )
}
