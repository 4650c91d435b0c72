use std::{cmp::Reverse, sync::Arc};

use crate::ServiceResult;

pub type PlayerId = i64;

const BASE_ENERGY: f64 = 100.0;
const MATCH_COST: f64 = 2.0;
const GOAL_BONUS: f64 = 1.0;
const ASSIST_BONUS: f64 = 0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub matches: Option<i64>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
}

impl Player {
    /// Fitness-style score, recomputed on every read and never stored.
    ///
    /// `max(0, 100 - 2*matches + goals + 0.5*assists)` truncated to an
    /// integer. Missing statistics count as zero.
    pub fn energy(&self) -> i64 {
        let matches = self.matches.unwrap_or(0) as f64;
        let goals = self.goals.unwrap_or(0) as f64;
        let assists = self.assists.unwrap_or(0) as f64;
        let raw = BASE_ENERGY - MATCH_COST * matches + GOAL_BONUS * goals + ASSIST_BONUS * assists;
        raw.max(0.0).trunc() as i64
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NewPlayer {
    pub name: Option<String>,
    pub team: Option<String>,
    pub position: Option<String>,
    pub matches: Option<i64>,
    pub goals: Option<i64>,
    pub assists: Option<i64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RankedPlayer {
    pub player: Player,
    pub energy: i64,
}

/// Orders players by goals then assists, both descending, and annotates
/// each with its energy. Players without goals or assists sort last.
pub fn rank_players(mut players: Vec<Player>) -> Vec<RankedPlayer> {
    players.sort_by_key(|p| (Reverse(p.goals), Reverse(p.assists)));
    players
        .into_iter()
        .map(|player| RankedPlayer {
            energy: player.energy(),
            player,
        })
        .collect()
}

pub type ArcPlayerRepository = Arc<Box<dyn PlayerRepository + Send + Sync + 'static>>;

#[async_trait::async_trait]
pub trait PlayerRepository {
    async fn create_player(&self, player: &NewPlayer) -> ServiceResult<()>;
    /// Players ordered by goals descending, then assists descending.
    async fn get_players_by_performance(&self) -> ServiceResult<Vec<Player>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(id: PlayerId, matches: Option<i64>, goals: Option<i64>, assists: Option<i64>) -> Player {
        Player {
            id,
            name: Some(format!("player{}", id)),
            team: Some("Falcons".into()),
            position: Some("Forward".into()),
            matches,
            goals,
            assists,
        }
    }

    #[test]
    fn test_energy() {
        assert_eq!(player(1, Some(10), Some(5), Some(4)).energy(), 87);
        assert_eq!(player(2, Some(60), Some(0), Some(0)).energy(), 0);
        assert_eq!(player(3, None, None, None).energy(), 100);
        // 100 - 2 + 0 + 0.5 = 98.5
        assert_eq!(player(4, Some(1), Some(0), Some(1)).energy(), 98);
        // 100 - 100 + 0 + 0.5 = 0.5
        assert_eq!(player(5, Some(50), None, Some(1)).energy(), 0);
    }

    #[test]
    fn test_rank_players() {
        let ranked = rank_players(vec![
            player(1, Some(3), Some(2), Some(1)),
            player(2, Some(3), None, Some(9)),
            player(3, Some(3), Some(7), Some(0)),
            player(4, Some(3), Some(2), Some(5)),
        ]);
        let ids: Vec<_> = ranked.iter().map(|r| r.player.id).collect();
        assert_eq!(ids, vec![3, 4, 1, 2]);
        assert_eq!(ranked[0].energy, 101);
    }
}
