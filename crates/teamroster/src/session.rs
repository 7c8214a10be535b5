//! Interactive terminal session.
//!
//! A [`Session`] feeds input lines to the [`App`], prints the rendered view
//! and notifications, and refreshes the idle countdown on a fixed interval.
//! Everything runs on one task: the loop `select!`s between the next input
//! line and the refresh tick, so all mutations happen inside a single
//! handler.

use std::collections::VecDeque;
use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use chrono::Datelike;
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tracing::{debug, trace};

use crate::app::{parse_command, render, App, Command};
use crate::error::Result;
use crate::idle::ActivityKind;

/// Lines buffered between the reader thread and the session.
const LINE_BUFFER: usize = 16;

/// A source of user input lines.
#[async_trait]
pub trait InputSource: Send {
    /// The next line without its terminator, or `None` once input is closed.
    ///
    /// Must be cancel safe: the session drops the future whenever the
    /// refresh tick wins the race.
    async fn next_line(&mut self) -> Result<Option<String>>;
}

/// Lines read on a dedicated thread and handed over through a channel.
///
/// Blocking reads stay off the runtime, so dropping a session that is
/// waiting for input never holds up shutdown; the reader thread is left
/// blocked until the process exits.
#[derive(Debug)]
pub struct LineSource {
    lines: mpsc::Receiver<std::io::Result<String>>,
}

impl LineSource {
    /// Lines from the process's standard input.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader thread cannot be spawned.
    pub fn stdin() -> Result<Self> {
        Self::from_reader(std::io::BufReader::new(std::io::stdin()))
    }

    /// Lines from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if the reader thread cannot be spawned.
    pub fn from_reader<R>(reader: R) -> Result<Self>
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(LINE_BUFFER);
        std::thread::Builder::new()
            .name("roster-input".to_string())
            .spawn(move || {
                for line in reader.lines() {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
            })?;
        Ok(Self { lines: rx })
    }
}

#[async_trait]
impl InputSource for LineSource {
    async fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.recv().await {
            Some(line) => Ok(Some(line?)),
            None => Ok(None),
        }
    }
}

/// A fixed list of lines, for scripted sessions.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    /// Input that yields `lines` in order and then closes.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

#[async_trait]
impl InputSource for ScriptedInput {
    async fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// Whether the session keeps going after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Wait for more input.
    Continue,
    /// The user asked to leave.
    Quit,
}

/// Drives an [`App`] from an input source, writing to `out`.
#[derive(Debug)]
pub struct Session<I, W> {
    app: App,
    input: I,
    out: W,
    refresh: Duration,
    next_unseen: u64,
}

impl<I: InputSource, W: Write> Session<I, W> {
    /// Create a session that refreshes the countdown every `refresh`.
    pub fn new(app: App, input: I, out: W, refresh: Duration) -> Self {
        Self {
            app,
            input,
            out,
            refresh,
            next_unseen: 0,
        }
    }

    /// The application being driven.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Everything written so far.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run until the user quits or input closes.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub async fn run(&mut self) -> Result<()> {
        self.draw()?;

        let mut ticker = tokio::time::interval(self.refresh);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first tick completes immediately.
        ticker.tick().await;

        loop {
            tokio::select! {
                line = self.input.next_line() => {
                    let Some(line) = line? else {
                        debug!("input closed");
                        break;
                    };
                    if self.handle_line(&line, Instant::now())? == Flow::Quit {
                        break;
                    }
                }
                _ = ticker.tick() => self.tick(Instant::now())?,
            }
        }

        debug!("session finished");
        Ok(())
    }

    /// Handle one input line received at `now`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn handle_line(&mut self, line: &str, now: Instant) -> Result<Flow> {
        trace!(line, "input");
        self.app.activity(ActivityKind::Key, now);

        let command = match parse_command(line, self.app.mode()) {
            Ok(Some(command)) => command,
            Ok(None) => {
                self.show_notifications()?;
                self.prompt()?;
                return Ok(Flow::Continue);
            }
            Err(err) => {
                writeln!(self.out, "{err}")?;
                self.prompt()?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Quit => {
                writeln!(self.out, "Goodbye. Nothing was saved.")?;
                self.out.flush()?;
                return Ok(Flow::Quit);
            }
            Command::Help => writeln!(self.out, "{}", render::help(self.app.mode()))?,
            Command::List { json: true } => {
                let json = serde_json::to_string_pretty(self.app.store().list())?;
                writeln!(self.out, "{json}")?;
            }
            Command::List { json: false } => {
                writeln!(self.out, "{}", render::team_list(self.app.store().list()))?;
            }
            Command::Stats { json: true } => {
                let json = serde_json::to_string_pretty(&self.app.stats())?;
                writeln!(self.out, "{json}")?;
            }
            Command::Stats { json: false } => {
                writeln!(self.out, "{}", render::stats_panel(&self.app.stats()))?;
            }
            Command::Show => {
                self.show_notifications()?;
                return self.draw().map(|()| Flow::Continue);
            }
            Command::Act(action) => {
                self.app.handle(action, now);
                self.show_notifications()?;
                return self.draw().map(|()| Flow::Continue);
            }
        }

        self.show_notifications()?;
        self.prompt()?;
        Ok(Flow::Continue)
    }

    /// Refresh the countdown and report anything new, such as the idle
    /// warning.
    ///
    /// # Errors
    ///
    /// Returns an error if writing output fails.
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        self.app.set_current_year(chrono::Local::now().year());
        self.app.tick(now);
        if self.show_notifications()? > 0 {
            self.prompt()?;
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<()> {
        writeln!(self.out, "\n{}\n", render::view(&self.app))?;
        self.prompt()
    }

    fn prompt(&mut self) -> Result<()> {
        write!(self.out, "{}", render::prompt(&self.app))?;
        self.out.flush()?;
        Ok(())
    }

    /// Print notifications not shown yet, oldest first.
    fn show_notifications(&mut self) -> Result<usize> {
        let mut fresh: Vec<(u64, String)> = self
            .app
            .notifications()
            .filter(|n| n.id >= self.next_unseen)
            .map(|n| (n.id, render::notification_line(n)))
            .collect();
        fresh.reverse();

        for (id, line) in &fresh {
            writeln!(self.out, "{line}")?;
            self.next_unseen = id + 1;
        }
        Ok(fresh.len())
    }
}
