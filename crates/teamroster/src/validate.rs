//! Field validation for submitted team forms.
//!
//! [`validate`] checks a [`TeamDraft`] in a fixed order and stops at the
//! first violated rule:
//!
//! 1. `name` must be non-empty after trimming
//! 2. `coach` must be non-empty after trimming
//! 3. `players`, when given, must be an integer `>= 0`
//! 4. `founded`, when given, must be a year in `[1800, current_year]`
//!
//! Blank numeric fields fall back to defaults: zero players, founded in the
//! current year.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::team::{League, TeamDetails};

/// Earliest accepted founding year.
pub const MIN_FOUNDED_YEAR: i32 = 1800;

/// Squad size the form suggests as an upper bound. Not enforced.
pub const MAX_PLAYERS_HINT: u32 = 50;

/// The first rule a draft violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Name was empty or whitespace.
    #[error("Team name is required!")]
    EmptyName,
    /// Coach was empty or whitespace.
    #[error("Coach name is required!")]
    EmptyCoach,
    /// Player count was not a non-negative integer.
    #[error("Player count must be a non-negative number!")]
    InvalidPlayers,
    /// Founding year was not an integer between 1800 and the current year.
    #[error("Founded year must be between 1800 and the current year!")]
    InvalidFoundedYear,
}

/// Raw, unparsed form input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamDraft {
    /// Club name as typed.
    pub name: String,
    /// Coach name as typed.
    pub coach: String,
    /// Player count as typed; may be blank.
    pub players: String,
    /// Founding year as typed; may be blank.
    pub founded: String,
    /// Selected league.
    pub league: League,
}

impl TeamDraft {
    /// Pre-populate a draft from existing details.
    #[must_use]
    pub fn from_details(details: &TeamDetails) -> Self {
        Self {
            name: details.name.clone(),
            coach: details.coach.clone(),
            players: details.players.to_string(),
            founded: details.founded.to_string(),
            league: details.league,
        }
    }
}

/// Validate a draft against `current_year`.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in check order.
pub fn validate(draft: &TeamDraft, current_year: i32) -> Result<TeamDetails, ValidationError> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let coach = draft.coach.trim();
    if coach.is_empty() {
        return Err(ValidationError::EmptyCoach);
    }

    let players = match draft.players.trim() {
        "" => 0,
        raw => raw
            .parse::<i64>()
            .ok()
            .filter(|count| *count >= 0)
            .and_then(|count| u32::try_from(count).ok())
            .ok_or(ValidationError::InvalidPlayers)?,
    };

    let founded = match draft.founded.trim() {
        "" => current_year,
        raw => raw
            .parse::<i32>()
            .ok()
            .filter(|year| (MIN_FOUNDED_YEAR..=current_year).contains(year))
            .ok_or(ValidationError::InvalidFoundedYear)?,
    };

    Ok(TeamDetails {
        name: name.to_string(),
        coach: coach.to_string(),
        players,
        founded,
        league: draft.league,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    fn draft(name: &str, coach: &str, players: &str, founded: &str) -> TeamDraft {
        TeamDraft {
            name: name.to_string(),
            coach: coach.to_string(),
            players: players.to_string(),
            founded: founded.to_string(),
            league: League::Unspecified,
        }
    }

    #[test]
    fn test_valid_draft_is_normalized() {
        let mut input = draft("  Dnipro-1 ", " Yosyp Mykhailovych", " 23 ", "2017");
        input.league = League::PremierLeague;

        let details = validate(&input, YEAR).unwrap();
        assert_eq!(details.name, "Dnipro-1");
        assert_eq!(details.coach, "Yosyp Mykhailovych");
        assert_eq!(details.players, 23);
        assert_eq!(details.founded, 2017);
        assert_eq!(details.league, League::PremierLeague);
    }

    #[test]
    fn test_blank_numbers_use_defaults() {
        let details = validate(&draft("X", "Y", "", "   "), YEAR).unwrap();
        assert_eq!(details.players, 0);
        assert_eq!(details.founded, YEAR);
        assert_eq!(details.league, League::Unspecified);
    }

    #[test]
    fn test_empty_name_wins_over_everything() {
        for name in ["", "   ", "\t\n"] {
            let result = validate(&draft(name, "", "-4", "1700"), YEAR);
            assert_eq!(result, Err(ValidationError::EmptyName));
        }
    }

    #[test]
    fn test_empty_name_with_coach() {
        assert_eq!(
            validate(&draft("", "Ted", "", ""), YEAR),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_empty_coach() {
        assert_eq!(
            validate(&draft("X", "  ", "abc", "1700"), YEAR),
            Err(ValidationError::EmptyCoach)
        );
    }

    #[test]
    fn test_invalid_players() {
        let rejected = [
            "-1",
            "abc",
            "12abc",
            "2.5",
            "99999999999",
            "99999999999999999999999",
        ];
        for players in rejected {
            assert_eq!(
                validate(&draft("X", "Y", players, "1700"), YEAR),
                Err(ValidationError::InvalidPlayers),
                "players = {players:?}"
            );
        }
    }

    #[test]
    fn test_players_above_hint_are_accepted() {
        let details = validate(&draft("X", "Y", "75", ""), YEAR).unwrap();
        assert!(details.players > MAX_PLAYERS_HINT);
    }

    #[test]
    fn test_founded_out_of_range() {
        for founded in ["1700", "1799", "2027", "3000", "year", "-1900"] {
            assert_eq!(
                validate(&draft("X", "Y", "", founded), YEAR),
                Err(ValidationError::InvalidFoundedYear),
                "founded = {founded:?}"
            );
        }
    }

    #[test]
    fn test_founded_boundaries_accepted() {
        assert_eq!(validate(&draft("X", "Y", "", "1800"), YEAR).unwrap().founded, 1800);
        assert_eq!(validate(&draft("X", "Y", "", "2026"), YEAR).unwrap().founded, 2026);
    }

    #[test]
    fn test_zero_players_accepted() {
        assert_eq!(validate(&draft("X", "Y", "0", ""), YEAR).unwrap().players, 0);
    }

    #[test]
    fn test_signed_zero_and_plus_sign_accepted() {
        assert_eq!(validate(&draft("X", "Y", "-0", ""), YEAR).unwrap().players, 0);
        assert_eq!(validate(&draft("X", "Y", "+12", ""), YEAR).unwrap().players, 12);
    }

    #[test]
    fn test_draft_from_details_round_trips_through_validate() {
        let details = TeamDetails {
            name: "Shakhtar Donetsk".to_string(),
            coach: "Arda Turan".to_string(),
            players: 28,
            founded: 1936,
            league: League::PremierLeague,
        };
        let input = TeamDraft::from_details(&details);
        assert_eq!(input.players, "28");
        assert_eq!(validate(&input, YEAR), Ok(details));
    }

    #[test]
    fn test_messages_are_distinct() {
        let messages = [
            ValidationError::EmptyName,
            ValidationError::EmptyCoach,
            ValidationError::InvalidPlayers,
            ValidationError::InvalidFoundedYear,
        ]
        .map(|err| err.to_string());

        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
