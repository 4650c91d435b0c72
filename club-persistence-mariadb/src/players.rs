use club_server_domain::{
    ServiceResult,
    player::{NewPlayer, Player, PlayerRepository},
};

use crate::{
    DatabaseResult,
    query::QueryHelper,
    row::{Row, RowExt},
};

pub struct MariaDbPlayerRepository {
    helper: QueryHelper,
}

impl MariaDbPlayerRepository {
    pub fn new(helper: QueryHelper) -> Self {
        Self { helper }
    }

    fn player_from_row(row: &Row) -> DatabaseResult<Player> {
        Ok(Player {
            id: row.int("id")?,
            name: row.opt_text("name")?,
            team: row.opt_text("team")?,
            position: row.opt_text("position")?,
            matches: row.opt_int("matches")?,
            goals: row.opt_int("goals")?,
            assists: row.opt_int("assists")?,
        })
    }
}

#[async_trait::async_trait]
impl PlayerRepository for MariaDbPlayerRepository {
    async fn create_player(&self, player: &NewPlayer) -> ServiceResult<()> {
        self.helper
            .modify(
                "INSERT INTO players (name, team, position, matches, goals, assists) VALUES (?, ?, ?, ?, ?, ?)",
                vec![
                    player.name.clone().into(),
                    player.team.clone().into(),
                    player.position.clone().into(),
                    player.matches.into(),
                    player.goals.into(),
                    player.assists.into(),
                ],
            )
            .await?;
        Ok(())
    }

    async fn get_players_by_performance(&self) -> ServiceResult<Vec<Player>> {
        let rows = self
            .helper
            .fetch(
                "SELECT * FROM players ORDER BY goals DESC, assists DESC",
                Vec::new(),
            )
            .await?;
        let players = rows
            .iter()
            .map(Self::player_from_row)
            .collect::<DatabaseResult<Vec<_>>>()?;
        Ok(players)
    }
}
