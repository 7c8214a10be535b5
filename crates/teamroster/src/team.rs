//! Core team record types for teamroster.
//!
//! This module defines the data structures for a single football club on the
//! roster and the fixed set of leagues a club can play in.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a team record.
///
/// Ids are handed out by an [`IdGenerator`](crate::store::IdGenerator) and
/// never change once a record exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(u64);

impl TeamId {
    /// Wrap a raw id value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw id value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// The league a team plays in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum League {
    /// Top division.
    PremierLeague,
    /// Second tier.
    FirstLeague,
    /// Third tier.
    SecondLeague,
    /// Fourth tier.
    ThirdLeague,
    /// Amateur competition.
    Amateur,
    /// No league was chosen.
    #[default]
    Unspecified,
}

impl League {
    /// The selectable leagues, in menu order. `Unspecified` is not selectable.
    pub const SELECTABLE: [League; 5] = [
        Self::PremierLeague,
        Self::FirstLeague,
        Self::SecondLeague,
        Self::ThirdLeague,
        Self::Amateur,
    ];

    /// Human-readable league name.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::PremierLeague => "Premier League",
            Self::FirstLeague => "First League",
            Self::SecondLeague => "Second League",
            Self::ThirdLeague => "Third League",
            Self::Amateur => "Amateur",
            Self::Unspecified => "Not specified",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            Self::PremierLeague => "premier-league",
            Self::FirstLeague => "first-league",
            Self::SecondLeague => "second-league",
            Self::ThirdLeague => "third-league",
            Self::Amateur => "amateur",
            Self::Unspecified => "unspecified",
        }
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returned when a league name cannot be recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown league '{0}' (expected 1-5, a league name, or 'none')")]
pub struct ParseLeagueError(String);

impl FromStr for League {
    type Err = ParseLeagueError;

    /// Accepts a display name, a slug (`premier-league`, `premier_league`),
    /// a 1-based menu index, or an empty string / `none` for `Unspecified`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        if input.is_empty() {
            return Ok(Self::Unspecified);
        }

        if let Ok(index) = input.parse::<usize>() {
            return index
                .checked_sub(1)
                .and_then(|i| Self::SELECTABLE.get(i).copied())
                .ok_or_else(|| ParseLeagueError(input.to_string()));
        }

        let normalized = input.to_lowercase().replace(['_', ' '], "-");
        if matches!(normalized.as_str(), "none" | "-" | "not-specified") {
            return Ok(Self::Unspecified);
        }

        Self::SELECTABLE
            .into_iter()
            .chain(std::iter::once(Self::Unspecified))
            .find(|league| league.slug() == normalized)
            .ok_or_else(|| ParseLeagueError(input.to_string()))
    }
}

/// The editable, already-validated fields of a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDetails {
    /// Club name, trimmed and non-empty.
    pub name: String,
    /// Head coach, trimmed and non-empty.
    pub coach: String,
    /// Squad size.
    pub players: u32,
    /// Founding year.
    pub founded: i32,
    /// League the club plays in.
    pub league: League,
}

/// A football club on the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    id: TeamId,
    /// Club name.
    pub name: String,
    /// Head coach.
    pub coach: String,
    /// Squad size.
    pub players: u32,
    /// Founding year.
    pub founded: i32,
    /// League the club plays in.
    pub league: League,
}

impl TeamRecord {
    /// Build a record from an id and validated details.
    #[must_use]
    pub fn new(id: TeamId, details: TeamDetails) -> Self {
        let TeamDetails {
            name,
            coach,
            players,
            founded,
            league,
        } = details;
        Self {
            id,
            name,
            coach,
            players,
            founded,
            league,
        }
    }

    /// The record's immutable id.
    #[must_use]
    pub fn id(&self) -> TeamId {
        self.id
    }

    /// Copy out the editable fields.
    #[must_use]
    pub fn details(&self) -> TeamDetails {
        TeamDetails {
            name: self.name.clone(),
            coach: self.coach.clone(),
            players: self.players,
            founded: self.founded,
            league: self.league,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details() -> TeamDetails {
        TeamDetails {
            name: "Dynamo Kyiv".to_string(),
            coach: "Oleksandr Shovkovskyi".to_string(),
            players: 25,
            founded: 1927,
            league: League::PremierLeague,
        }
    }

    #[test]
    fn test_team_id_display_and_parse() {
        let id: TeamId = " 17 ".parse().unwrap();
        assert_eq!(id, TeamId::new(17));
        assert_eq!(id.to_string(), "17");
        assert!("abc".parse::<TeamId>().is_err());
    }

    #[test]
    fn test_league_display() {
        assert_eq!(League::PremierLeague.to_string(), "Premier League");
        assert_eq!(League::Amateur.to_string(), "Amateur");
        assert_eq!(League::Unspecified.to_string(), "Not specified");
    }

    #[test]
    fn test_league_default_is_unspecified() {
        assert_eq!(League::default(), League::Unspecified);
    }

    #[test]
    fn test_league_parse_by_name_and_slug() {
        assert_eq!("Premier League".parse(), Ok(League::PremierLeague));
        assert_eq!("first_league".parse(), Ok(League::FirstLeague));
        assert_eq!("THIRD-LEAGUE".parse(), Ok(League::ThirdLeague));
        assert_eq!("amateur".parse(), Ok(League::Amateur));
    }

    #[test]
    fn test_league_parse_by_index() {
        assert_eq!("1".parse(), Ok(League::PremierLeague));
        assert_eq!("5".parse(), Ok(League::Amateur));
        assert!("0".parse::<League>().is_err());
        assert!("6".parse::<League>().is_err());
    }

    #[test]
    fn test_league_parse_unspecified() {
        assert_eq!("".parse(), Ok(League::Unspecified));
        assert_eq!("  ".parse(), Ok(League::Unspecified));
        assert_eq!("none".parse(), Ok(League::Unspecified));
        assert_eq!("Not specified".parse(), Ok(League::Unspecified));
    }

    #[test]
    fn test_league_parse_unknown() {
        let err = "Bundesliga".parse::<League>().unwrap_err();
        assert!(err.to_string().contains("Bundesliga"));
    }

    #[test]
    fn test_record_keeps_id_and_details() {
        let record = TeamRecord::new(TeamId::new(1), details());
        assert_eq!(record.id(), TeamId::new(1));
        assert_eq!(record.name, "Dynamo Kyiv");
        assert_eq!(record.details(), details());
    }

    #[test]
    fn test_record_serialization() {
        let record = TeamRecord::new(TeamId::new(7), details());
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["league"], "premier_league");
        assert_eq!(json["players"], 25);
    }
}
