//! Plain-text rendering of the presentation model.
//!
//! Every function returns a `String` without a trailing newline so the host
//! decides how to print it.

use super::form::{Field, TeamForm};
use super::{App, Mode};
use crate::notify::Notification;
use crate::store::Stats;
use crate::team::{League, TeamRecord};
use crate::validate::{MAX_PLAYERS_HINT, MIN_FOUNDED_YEAR};

/// Application title.
pub const TITLE: &str = "Football Manager";

/// Title bar with the idle countdown.
#[must_use]
pub fn header(time_left: u64, is_idle: bool) -> String {
    let mut line = format!("{TITLE} | inactive in {time_left}s");
    if is_idle {
        line.push_str(" [INACTIVE]");
    }
    line
}

/// One-line statistics panel.
#[must_use]
pub fn stats_panel(stats: &Stats) -> String {
    let oldest = stats
        .earliest_founded
        .map_or_else(|| "-".to_string(), |year| year.to_string());
    format!(
        "Teams: {} | Players: {} | Avg players: {} | Oldest team: {}",
        stats.team_count, stats.total_players, stats.average_players, oldest
    )
}

/// A single team card.
#[must_use]
pub fn team_card(team: &TeamRecord) -> String {
    [
        format!("#{} {}", team.id(), team.name),
        format!("    Coach:   {}", team.coach),
        format!("    Players: {}", team.players),
        format!("    Founded: {}", team.founded),
        format!("    [{}]", team.league),
    ]
    .join("\n")
}

/// All team cards, or the empty-state message.
#[must_use]
pub fn team_list(teams: &[TeamRecord]) -> String {
    if teams.is_empty() {
        return "No teams yet. Type 'add' to create your first team.".to_string();
    }
    teams.iter().map(team_card).collect::<Vec<_>>().join("\n\n")
}

/// The create/edit form with current values and input hints.
#[must_use]
pub fn form_view(form: &TeamForm, current_year: i32) -> String {
    let mut lines = vec![format!("== {} ==", form.title())];
    for field in Field::ALL {
        let hint = match field {
            Field::Players => format!(" (0-{MAX_PLAYERS_HINT})"),
            Field::Founded => format!(" ({MIN_FOUNDED_YEAR}-{current_year})"),
            _ => String::new(),
        };
        lines.push(format!("  {}{}: {}", field.label(), hint, form.value(field)));
    }

    let options = League::SELECTABLE
        .iter()
        .enumerate()
        .map(|(i, league)| format!("{}={}", i + 1, league))
        .collect::<Vec<_>>()
        .join(", ");
    lines.push(format!("  Leagues: {options}, none"));
    lines.push(format!(
        "  'save' to {}, 'cancel' to discard",
        form.submit_label().to_lowercase()
    ));
    lines.join("\n")
}

/// Delete confirmation prompt.
#[must_use]
pub fn confirm_prompt(name: &str) -> String {
    format!("Are you sure you want to delete team \"{name}\"? [yes/no]")
}

/// A notification as a single line.
#[must_use]
pub fn notification_line(notification: &Notification) -> String {
    format!("[{}] {}", notification.severity, notification.message)
}

/// The full view for the app's current mode.
#[must_use]
pub fn view(app: &App) -> String {
    let mut sections = vec![header(app.time_left(), app.is_idle())];
    match app.mode() {
        Mode::Browsing => {
            sections.push(stats_panel(&app.stats()));
            sections.push(team_list(app.store().list()));
        }
        Mode::Editing(form) => sections.push(form_view(form, app.current_year())),
        Mode::ConfirmingDelete { name, .. } => sections.push(confirm_prompt(name)),
    }
    sections.join("\n\n")
}

/// Input prompt showing the mode and countdown.
#[must_use]
pub fn prompt(app: &App) -> String {
    format!("roster:{} [{}s]> ", app.mode().label(), app.time_left())
}

/// Command reference for the current mode.
#[must_use]
pub fn help(mode: &Mode) -> String {
    let specific = match mode {
        Mode::Browsing => {
            "  add               open the form for a new team\n  \
               edit <id>         edit a team\n  \
               delete <id>       delete a team (asks first)"
        }
        Mode::Editing(_) => {
            "  name <value>      set the team name\n  \
               coach <value>     set the coach\n  \
               players <value>   set the player count\n  \
               founded <value>   set the founding year\n  \
               league <value>    set the league (1-5, name, or none)\n  \
               save              validate and save\n  \
               cancel            close without saving"
        }
        Mode::ConfirmingDelete { .. } => {
            "  yes               delete the team\n  \
               no                keep the team"
        }
    };
    format!(
        "{specific}\n  \
           list [--json]     show all teams\n  \
           stats [--json]    show statistics\n  \
           show              redraw the current view\n  \
           help              this text\n  \
           quit              end the session (nothing is saved)"
    )
}
