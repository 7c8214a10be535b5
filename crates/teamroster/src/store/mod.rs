//! In-memory team roster.
//!
//! [`TeamStore`] owns the authoritative, insertion-ordered collection of
//! [`TeamRecord`]s. It is the only place records are mutated; the
//! presentation layer goes through [`TeamStore::add`], [`TeamStore::update`]
//! and [`TeamStore::remove`].

pub mod ids;
pub mod stats;

use tracing::debug;

use crate::team::{League, TeamDetails, TeamId, TeamRecord};

pub use ids::{ClockIds, IdGenerator, SequentialIds};
pub use stats::{derive_stats, Stats};

/// Ordered in-memory collection of team records.
///
/// Ids are expected to be unique; the store does not check for collisions
/// because ids come from an [`IdGenerator`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamStore {
    records: Vec<TeamRecord>,
}

impl TeamStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the three demo clubs a fresh session starts with.
    #[must_use]
    pub fn with_demo_teams() -> Self {
        Self {
            records: demo_teams(),
        }
    }

    /// The records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[TeamRecord] {
        &self.records
    }

    /// Look up a record by id.
    #[must_use]
    pub fn get(&self, id: TeamId) -> Option<&TeamRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Highest id currently in use.
    #[must_use]
    pub fn max_id(&self) -> Option<TeamId> {
        self.records.iter().map(TeamRecord::id).max()
    }

    /// Append a record.
    pub fn add(&mut self, record: TeamRecord) {
        debug!(id = %record.id(), name = %record.name, "adding team");
        self.records.push(record);
    }

    /// Replace the record with the same id.
    ///
    /// Returns `false` and leaves the store untouched if no record matches.
    pub fn update(&mut self, record: TeamRecord) -> bool {
        match self.records.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                debug!(id = %record.id(), "updating team");
                *slot = record;
                true
            }
            None => {
                debug!(id = %record.id(), "update ignored, no such team");
                false
            }
        }
    }

    /// Remove the record with the given id.
    ///
    /// Returns `false` and leaves the store untouched if no record matches.
    pub fn remove(&mut self, id: TeamId) -> bool {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);
        let removed = self.records.len() != before;
        debug!(%id, removed, "remove team");
        removed
    }
}

fn demo_teams() -> Vec<TeamRecord> {
    let team = |id, name: &str, coach: &str, players, founded| {
        TeamRecord::new(
            TeamId::new(id),
            TeamDetails {
                name: name.to_string(),
                coach: coach.to_string(),
                players,
                founded,
                league: League::PremierLeague,
            },
        )
    };

    vec![
        team(1, "Dynamo Kyiv", "Oleksandr Shovkovskyi", 25, 1927),
        team(2, "Shakhtar Donetsk", "Arda Turan", 28, 1936),
        team(3, "Dnipro-1", "Yosyp Mykhailovych", 23, 2017),
    ]
}
