//! Aggregate roster statistics.

use serde::{Deserialize, Serialize};

use crate::team::TeamRecord;

/// Summary figures shown above the team list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    /// Number of teams.
    pub team_count: usize,
    /// Sum of all squad sizes.
    pub total_players: u64,
    /// Mean squad size rounded half-up; 0 for an empty roster.
    pub average_players: u64,
    /// Earliest founding year; `None` for an empty roster.
    pub earliest_founded: Option<i32>,
}

/// Recompute statistics from the full collection.
#[must_use]
pub fn derive_stats(records: &[TeamRecord]) -> Stats {
    let team_count = records.len();
    let total_players: u64 = records.iter().map(|r| u64::from(r.players)).sum();

    let average_players = match u64::try_from(team_count) {
        Ok(0) | Err(_) => 0,
        Ok(n) => (2 * total_players + n) / (2 * n),
    };

    Stats {
        team_count,
        total_players,
        average_players,
        earliest_founded: records.iter().map(|r| r.founded).min(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::{League, TeamDetails, TeamId};

    fn record(id: u64, players: u32, founded: i32) -> TeamRecord {
        TeamRecord::new(
            TeamId::new(id),
            TeamDetails {
                name: format!("Team {id}"),
                coach: "Coach".to_string(),
                players,
                founded,
                league: League::Unspecified,
            },
        )
    }

    #[test]
    fn test_empty_roster() {
        let stats = derive_stats(&[]);
        assert_eq!(stats, Stats::default());
        assert!(stats.earliest_founded.is_none());
    }

    #[test]
    fn test_two_teams_round_down() {
        let stats = derive_stats(&[record(1, 25, 1927), record(2, 28, 1936)]);
        assert_eq!(stats.team_count, 2);
        assert_eq!(stats.total_players, 53);
        assert_eq!(stats.average_players, 27);
        assert_eq!(stats.earliest_founded, Some(1927));
    }

    #[test]
    fn test_half_rounds_up() {
        let stats = derive_stats(&[record(1, 1, 2000), record(2, 2, 2000)]);
        assert_eq!(stats.average_players, 2);
    }

    #[test]
    fn test_average_rounds_to_nearest() {
        // 76 / 3 = 25.33
        let stats = derive_stats(&[record(1, 25, 1927), record(2, 28, 1936), record(3, 23, 2017)]);
        assert_eq!(stats.total_players, 76);
        assert_eq!(stats.average_players, 25);

        // 8 / 3 = 2.67
        let stats = derive_stats(&[record(1, 2, 1990), record(2, 3, 1990), record(3, 3, 1990)]);
        assert_eq!(stats.average_players, 3);
    }

    #[test]
    fn test_earliest_founded_ignores_order() {
        let stats = derive_stats(&[record(1, 0, 2017), record(2, 0, 1899), record(3, 0, 1936)]);
        assert_eq!(stats.earliest_founded, Some(1899));
    }

    #[test]
    fn test_zero_players() {
        let stats = derive_stats(&[record(1, 0, 2000)]);
        assert_eq!(stats.total_players, 0);
        assert_eq!(stats.average_players, 0);
    }
}
