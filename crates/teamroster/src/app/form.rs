//! The create/edit team form.

use std::str::FromStr;

use crate::store::IdGenerator;
use crate::team::{League, ParseLeagueError, TeamId, TeamRecord};
use crate::validate::{validate, TeamDraft, ValidationError};

/// An editable form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Club name.
    Name,
    /// Coach name.
    Coach,
    /// Player count.
    Players,
    /// Founding year.
    Founded,
    /// League selection.
    League,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 5] = [
        Self::Name,
        Self::Coach,
        Self::Players,
        Self::Founded,
        Self::League,
    ];

    /// Label shown next to the field.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Team name *",
            Self::Coach => "Coach *",
            Self::Players => "Players",
            Self::Founded => "Founded",
            Self::League => "League",
        }
    }
}

impl FromStr for Field {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "coach" => Ok(Self::Coach),
            "players" => Ok(Self::Players),
            "founded" | "year" => Ok(Self::Founded),
            "league" => Ok(Self::League),
            _ => Err(()),
        }
    }
}

/// Form state for creating a new team or editing an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamForm {
    editing: Option<TeamId>,
    draft: TeamDraft,
}

impl TeamForm {
    /// Blank form for a new team.
    #[must_use]
    pub fn create() -> Self {
        Self {
            editing: None,
            draft: TeamDraft::default(),
        }
    }

    /// Form pre-populated from an existing record.
    #[must_use]
    pub fn edit(record: &TeamRecord) -> Self {
        Self {
            editing: Some(record.id()),
            draft: TeamDraft::from_details(&record.details()),
        }
    }

    /// Id of the record being edited, if any.
    #[must_use]
    pub fn editing(&self) -> Option<TeamId> {
        self.editing
    }

    /// Current raw field values.
    #[must_use]
    pub fn draft(&self) -> &TeamDraft {
        &self.draft
    }

    /// Form heading.
    #[must_use]
    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit team"
        } else {
            "Add new team"
        }
    }

    /// Label of the submit action.
    #[must_use]
    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Save changes"
        } else {
            "Add team"
        }
    }

    /// Raw value of a field as it would be shown in an input box.
    #[must_use]
    pub fn value(&self, field: Field) -> String {
        match field {
            Field::Name => self.draft.name.clone(),
            Field::Coach => self.draft.coach.clone(),
            Field::Players => self.draft.players.clone(),
            Field::Founded => self.draft.founded.clone(),
            Field::League => match self.draft.league {
                League::Unspecified => String::new(),
                league => league.display_name().to_string(),
            },
        }
    }

    /// Set a field from user input.
    ///
    /// # Errors
    ///
    /// Returns an error if `field` is the league and `value` names no league.
    pub fn set(&mut self, field: Field, value: &str) -> Result<(), ParseLeagueError> {
        match field {
            Field::Name => self.draft.name = value.to_string(),
            Field::Coach => self.draft.coach = value.to_string(),
            Field::Players => self.draft.players = value.to_string(),
            Field::Founded => self.draft.founded = value.to_string(),
            Field::League => self.draft.league = value.parse()?,
        }
        Ok(())
    }

    /// Validate the form and build the resulting record.
    ///
    /// A new id is drawn from `ids` only when creating and only once the
    /// draft is valid.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] in check order.
    pub fn submit(
        &self,
        ids: &mut dyn IdGenerator,
        current_year: i32,
    ) -> Result<TeamRecord, ValidationError> {
        let details = validate(&self.draft, current_year)?;
        let id = self.editing.unwrap_or_else(|| ids.next_id());
        Ok(TeamRecord::new(id, details))
    }
}
