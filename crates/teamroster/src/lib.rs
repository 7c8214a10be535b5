//! `teamroster` - A single-session football team roster manager
//!
//! The library holds the pieces of the roster: form validation, the
//! in-memory [`TeamStore`] with its derived statistics, id generation, an
//! inactivity [`IdleMonitor`], a notification queue, and the [`App`]
//! presentation model that ties them together. The `roster` binary drives
//! an [`App`] from the terminal through a [`session::Session`].
//!
//! Nothing is persisted; the roster lives only as long as the process.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod idle;
pub mod logging;
pub mod notify;
pub mod session;
pub mod store;
pub mod team;
pub mod validate;

pub use app::{Action, App, AppSettings, Mode};
pub use config::Config;
pub use error::{Error, Result};
pub use idle::{ActivityKind, IdleConfig, IdleEvent, IdleMonitor};
pub use logging::init_logging;
pub use notify::{Notification, Notifier, Severity};
pub use store::{derive_stats, IdGenerator, Stats, TeamStore};
pub use team::{League, TeamDetails, TeamId, TeamRecord};
pub use validate::{validate, TeamDraft, ValidationError};
