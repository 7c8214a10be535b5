//! Presentation model.
//!
//! [`App`] is the application root: it owns the [`TeamStore`], the id
//! generator, the [`IdleMonitor`] and the notification queue, and turns
//! user [`Action`]s into store mutations. It knows nothing about terminals;
//! the [`session`](crate::session) module drives it and prints
//! [`render`] output.

pub mod command;
pub mod form;
pub mod render;

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::Error;
use crate::idle::{ActivityKind, IdleConfig, IdleEvent, IdleMonitor};
use crate::notify::{Notification, Notifier, NotifierSettings, Severity};
use crate::store::{derive_stats, IdGenerator, Stats, TeamStore};
use crate::team::TeamId;

pub use command::{parse_command, Command, ParseCommandError};
pub use form::{Field, TeamForm};

/// Shown after a team is created.
pub const TEAM_ADDED: &str = "New team added!";
/// Shown after a team is edited.
pub const TEAM_UPDATED: &str = "Team updated!";
/// Shown after a team is deleted.
pub const TEAM_DELETED: &str = "Team deleted!";

/// A user intent the presentation model reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open a blank form.
    Add,
    /// Open the form pre-populated from a team.
    Edit(TeamId),
    /// Ask for confirmation before deleting a team.
    Delete(TeamId),
    /// Answer the pending delete confirmation.
    Confirm(bool),
    /// Change a form field.
    SetField(Field, String),
    /// Validate and save the open form.
    Submit,
    /// Close the form without saving.
    Cancel,
}

/// What the user is currently looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Team list and statistics.
    Browsing,
    /// The create/edit form.
    Editing(TeamForm),
    /// Waiting for a yes/no on deleting a team.
    ConfirmingDelete {
        /// Team to delete.
        id: TeamId,
        /// Its name, for the prompt.
        name: String,
    },
}

impl Mode {
    /// Short name for prompts and logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Browsing => "list",
            Self::Editing(_) => "form",
            Self::ConfirmingDelete { .. } => "confirm",
        }
    }
}

/// Knobs for an [`App`] that do not come from the roster itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppSettings {
    /// Idle monitor settings.
    pub idle: IdleConfig,
    /// Notification queue settings.
    pub notifier: NotifierSettings,
    /// Lifetime of the idle warning.
    pub idle_warning: Duration,
    /// Upper bound for founding years.
    pub current_year: i32,
}

impl AppSettings {
    /// Settings taken from a loaded [`Config`].
    #[must_use]
    pub fn from_config(config: &Config, current_year: i32) -> Self {
        Self {
            idle: config.idle_config(),
            notifier: config.notifier_settings(),
            idle_warning: config.idle_warning_lifetime(),
            current_year,
        }
    }
}

/// The application root.
pub struct App {
    store: TeamStore,
    ids: Box<dyn IdGenerator>,
    idle: IdleMonitor,
    notifier: Notifier,
    idle_warning: Duration,
    current_year: i32,
    mode: Mode,
    time_left: u64,
}

impl App {
    /// Create an app over `store`, with the idle countdown starting at `now`.
    #[must_use]
    pub fn new(
        store: TeamStore,
        ids: Box<dyn IdGenerator>,
        settings: AppSettings,
        now: Instant,
    ) -> Self {
        let idle = IdleMonitor::new(settings.idle, now);
        let time_left = idle.remaining_secs(now);
        Self {
            store,
            ids,
            idle,
            notifier: Notifier::new(settings.notifier),
            idle_warning: settings.idle_warning,
            current_year: settings.current_year,
            mode: Mode::Browsing,
            time_left,
        }
    }

    /// The roster.
    #[must_use]
    pub fn store(&self) -> &TeamStore {
        &self.store
    }

    /// Statistics recomputed from the current roster.
    #[must_use]
    pub fn stats(&self) -> Stats {
        derive_stats(self.store.list())
    }

    /// Current view mode.
    #[must_use]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Whether the user is idle.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.idle.is_idle()
    }

    /// Seconds until idle as of the last tick.
    #[must_use]
    pub fn time_left(&self) -> u64 {
        self.time_left
    }

    /// Upper bound for founding years.
    #[must_use]
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Update the upper bound for founding years.
    pub fn set_current_year(&mut self, year: i32) {
        self.current_year = year;
    }

    /// Notification queue.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    /// Live notifications, newest first.
    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.notifier.visible()
    }

    /// Report user input.
    pub fn activity(&mut self, kind: ActivityKind, now: Instant) {
        if let Some(IdleEvent::Idle) = self.idle.poll(now) {
            self.warn_idle(now);
        }
        if let Some(IdleEvent::Active) = self.idle.activity(kind, now) {
            info!("user active again");
        }
        self.time_left = self.idle.remaining_secs(now);
    }

    /// Periodic refresh: advance the idle monitor, refresh the countdown and
    /// drop expired notifications.
    pub fn tick(&mut self, now: Instant) {
        if let Some(IdleEvent::Idle) = self.idle.poll(now) {
            self.warn_idle(now);
        }
        self.time_left = self.idle.remaining_secs(now);
        self.notifier.expire(now);
    }

    /// Apply a user action.
    ///
    /// Failures are surfaced as error notifications; successful mutations
    /// queue a success notification.
    pub fn handle(&mut self, action: Action, now: Instant) {
        match self.apply(action) {
            Ok(Some(message)) => {
                self.notifier.push(Severity::Success, message, now);
            }
            Ok(None) => {}
            Err(err) => {
                if err.is_validation_error() {
                    debug!(%err, "form rejected");
                } else {
                    warn!(%err, "action failed");
                }
                self.notifier.push(Severity::Error, err.to_string(), now);
            }
        }
    }

    fn apply(&mut self, action: Action) -> Result<Option<&'static str>, Error> {
        match (action, &mut self.mode) {
            (Action::Add, Mode::Browsing) => {
                self.mode = Mode::Editing(TeamForm::create());
            }
            (Action::Edit(id), Mode::Browsing) => {
                let record = self.store.get(id).ok_or_else(|| Error::unknown_team(id))?;
                self.mode = Mode::Editing(TeamForm::edit(record));
            }
            (Action::Delete(id), Mode::Browsing) => {
                let record = self.store.get(id).ok_or_else(|| Error::unknown_team(id))?;
                self.mode = Mode::ConfirmingDelete {
                    id,
                    name: record.name.clone(),
                };
            }
            (Action::Confirm(yes), Mode::ConfirmingDelete { id, .. }) => {
                let id = *id;
                self.mode = Mode::Browsing;
                if yes && self.store.remove(id) {
                    info!(%id, "team deleted");
                    return Ok(Some(TEAM_DELETED));
                }
            }
            (Action::SetField(field, value), Mode::Editing(form)) => {
                form.set(field, &value)?;
            }
            (Action::Submit, Mode::Editing(form)) => {
                let record = form.submit(self.ids.as_mut(), self.current_year)?;
                let id = record.id();
                let updating = form.editing().is_some();
                self.mode = Mode::Browsing;

                if !updating {
                    self.store.add(record);
                    info!(%id, "team added");
                    return Ok(Some(TEAM_ADDED));
                }
                if !self.store.update(record) {
                    return Err(Error::unknown_team(id));
                }
                info!(%id, "team updated");
                return Ok(Some(TEAM_UPDATED));
            }
            (Action::Cancel, Mode::Editing(_) | Mode::ConfirmingDelete { .. }) => {
                self.mode = Mode::Browsing;
            }
            (action, mode) => {
                debug!(?action, mode = mode.label(), "action not available");
                return Err(Error::Unavailable { mode: mode.label() });
            }
        }
        Ok(None)
    }

    fn warn_idle(&mut self, now: Instant) {
        let secs = self.idle.config().timeout.as_secs();
        warn!(secs, "user inactive");
        self.notifier.push_for(
            Severity::Warning,
            format!("You have been inactive for over {secs} seconds!"),
            self.idle_warning,
            now,
        );
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("store", &self.store)
            .field("mode", &self.mode)
            .field("idle", &self.idle)
            .field("time_left", &self.time_left)
            .finish_non_exhaustive()
    }
}
