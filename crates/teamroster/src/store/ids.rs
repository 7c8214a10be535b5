//! Id generation for new team records.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::team::TeamId;

/// Source of fresh, unique team ids.
///
/// Ids are unique until the `u64` range runs out; a generator that reaches
/// `u64::MAX` keeps returning it.
pub trait IdGenerator: Send {
    /// Hand out the next id, strictly greater than the previous one unless
    /// the id space is exhausted.
    fn next_id(&mut self) -> TeamId;
}

/// Which [`IdGenerator`] a session uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Monotonic counter.
    #[default]
    Sequential,
    /// Milliseconds since the Unix epoch.
    Clock,
}

impl IdStrategy {
    /// Build a generator whose ids all lie above `floor`.
    #[must_use]
    pub fn build(self, floor: Option<TeamId>) -> Box<dyn IdGenerator> {
        match self {
            Self::Sequential => Box::new(SequentialIds::after(floor)),
            Self::Clock => Box::new(ClockIds::after(floor)),
        }
    }
}

/// Monotonic counter starting at 1, or just past a given id.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Counter starting at 1.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 1 }
    }

    /// Counter starting just past `floor`.
    #[must_use]
    pub fn after(floor: Option<TeamId>) -> Self {
        Self {
            next: floor.map_or(1, |id| id.get().saturating_add(1)),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> TeamId {
        let id = TeamId::new(self.next);
        self.next = self.next.saturating_add(1);
        id
    }
}

/// Wall-clock ids, bumped so they stay strictly increasing when two records
/// are created within the same millisecond.
pub struct ClockIds {
    last: u64,
    now_millis: Box<dyn FnMut() -> u64 + Send>,
}

impl ClockIds {
    /// Ids from the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(system_millis)
    }

    /// Ids from the system clock, all above `floor`.
    #[must_use]
    pub fn after(floor: Option<TeamId>) -> Self {
        let mut ids = Self::new();
        ids.last = floor.map_or(0, TeamId::get);
        ids
    }

    /// Ids from a custom millisecond source.
    #[must_use]
    pub fn with_source(source: impl FnMut() -> u64 + Send + 'static) -> Self {
        Self {
            last: 0,
            now_millis: Box::new(source),
        }
    }
}

impl Default for ClockIds {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ClockIds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClockIds").field("last", &self.last).finish_non_exhaustive()
    }
}

impl IdGenerator for ClockIds {
    fn next_id(&mut self) -> TeamId {
        let now = (self.now_millis)();
        self.last = now.max(self.last.saturating_add(1));
        TeamId::new(self.last)
    }
}

fn system_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}
