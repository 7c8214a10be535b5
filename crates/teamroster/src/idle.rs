//! User inactivity detection.
//!
//! [`IdleMonitor`] is a small state machine fed by its host: the host reports
//! qualifying input through [`IdleMonitor::activity`] and drives time forward
//! with [`IdleMonitor::poll`]. All methods take the current [`Instant`]
//! explicitly so the monitor never reads a clock on its own.
//!
//! ```
//! use std::time::{Duration, Instant};
//! use teamroster::idle::{ActivityKind, IdleConfig, IdleEvent, IdleMonitor};
//!
//! let start = Instant::now();
//! let mut monitor = IdleMonitor::new(IdleConfig::default(), start);
//!
//! assert_eq!(monitor.poll(start + Duration::from_secs(60)), Some(IdleEvent::Idle));
//! assert_eq!(
//!     monitor.activity(ActivityKind::Key, start + Duration::from_secs(61)),
//!     Some(IdleEvent::Active)
//! );
//! ```

use std::time::{Duration, Instant};

use tracing::{debug, trace};

/// Default inactivity threshold.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Default minimum spacing between accepted activity events.
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(500);

/// Kind of user input that counts as activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityKind {
    /// Mouse or pen movement and clicks.
    Pointer,
    /// Keyboard input.
    Key,
    /// Wheel or scrollbar input.
    Scroll,
    /// Touch screen input.
    Touch,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pointer => write!(f, "pointer"),
            Self::Key => write!(f, "key"),
            Self::Scroll => write!(f, "scroll"),
            Self::Touch => write!(f, "touch"),
        }
    }
}

/// A state change emitted by the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdleEvent {
    /// The inactivity threshold elapsed.
    Idle,
    /// Input arrived while idle.
    Active,
}

/// Configuration for an [`IdleMonitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdleConfig {
    /// How long without input before the user counts as idle.
    pub timeout: Duration,
    /// Activity events closer together than this are ignored.
    pub throttle: Duration,
}

impl Default for IdleConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_IDLE_TIMEOUT,
            throttle: DEFAULT_THROTTLE,
        }
    }
}

type Callback = Box<dyn FnMut() + Send>;

/// Tracks whether the user has gone idle.
pub struct IdleMonitor {
    config: IdleConfig,
    last_active: Instant,
    last_accepted: Option<Instant>,
    idle: bool,
    on_idle: Option<Callback>,
    on_active: Option<Callback>,
}

impl IdleMonitor {
    /// Create a monitor whose countdown starts at `now`.
    #[must_use]
    pub fn new(config: IdleConfig, now: Instant) -> Self {
        Self {
            config,
            last_active: now,
            last_accepted: None,
            idle: false,
            on_idle: None,
            on_active: None,
        }
    }

    /// Register a callback for the transition to idle.
    #[must_use]
    pub fn on_idle(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_idle = Some(Box::new(callback));
        self
    }

    /// Register a callback for the transition back to active.
    #[must_use]
    pub fn on_active(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_active = Some(Box::new(callback));
        self
    }

    /// The monitor's configuration.
    #[must_use]
    pub fn config(&self) -> IdleConfig {
        self.config
    }

    /// Whether the user is currently idle.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.idle
    }

    /// Restart the countdown at `now` without firing callbacks.
    pub fn reset(&mut self, now: Instant) {
        self.last_active = now;
        self.last_accepted = None;
        self.idle = false;
    }

    /// Advance to `now`, firing the idle callback if the threshold elapsed.
    ///
    /// Returns [`IdleEvent::Idle`] exactly once per idle period.
    pub fn poll(&mut self, now: Instant) -> Option<IdleEvent> {
        if self.idle || now.saturating_duration_since(self.last_active) < self.config.timeout {
            return None;
        }

        self.idle = true;
        debug!(timeout_ms = self.config.timeout.as_millis(), "user went idle");
        if let Some(callback) = self.on_idle.as_mut() {
            callback();
        }
        Some(IdleEvent::Idle)
    }

    /// Report qualifying input at `now`.
    ///
    /// Input within the throttle window of the previously accepted input is
    /// dropped. If the threshold had already elapsed unnoticed, the idle
    /// callback fires first, then the active callback. The return value is
    /// [`IdleEvent::Active`] when the user came back from idle.
    pub fn activity(&mut self, kind: ActivityKind, now: Instant) -> Option<IdleEvent> {
        if let Some(previous) = self.last_accepted {
            if now.saturating_duration_since(previous) < self.config.throttle {
                trace!(%kind, "activity throttled");
                return None;
            }
        }

        self.poll(now);
        self.last_accepted = Some(now);
        self.last_active = now;

        if !self.idle {
            return None;
        }

        self.idle = false;
        debug!(%kind, "user active again");
        if let Some(callback) = self.on_active.as_mut() {
            callback();
        }
        Some(IdleEvent::Active)
    }

    /// Time left until the idle threshold fires; zero once idle.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        if self.idle {
            return Duration::ZERO;
        }
        self.config
            .timeout
            .saturating_sub(now.saturating_duration_since(self.last_active))
    }

    /// [`remaining`](Self::remaining) in whole seconds, rounded up.
    #[must_use]
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let millis = self.remaining(now).as_millis();
        u64::try_from(millis.div_ceil(1000)).unwrap_or(u64::MAX)
    }
}

impl std::fmt::Debug for IdleMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdleMonitor")
            .field("config", &self.config)
            .field("last_active", &self.last_active)
            .field("idle", &self.idle)
            .finish_non_exhaustive()
    }
}
