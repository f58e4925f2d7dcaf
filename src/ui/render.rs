//! Terminal rendering of a registry snapshot.
//!
//! The UI reads a snapshot from the registry; it never holds state of
//! its own beyond what it is handed here.

use crate::core::registry::RegistrySnapshot;
use crate::utils::date;
use ansi_term::Colour;
use chrono::NaiveDate;

/// Window-title line: prefix, active date, live wall clock. The clock is
/// independent of any row timer.
pub fn title(prefix: &str, day: NaiveDate) -> String {
    format!("{} - {} - {}", prefix, day.format("%Y-%m-%d"), date::now_hms())
}

/// Label for the toggle action on a row: what a toggle would do next,
/// like a Start/Stop button.
pub fn action_label(running: bool) -> &'static str {
    if running { "Stop" } else { "Start" }
}

/// Render the full snapshot as a small table.
pub fn print_snapshot(title_prefix: &str, snap: &RegistrySnapshot) {
    println!("{}", Colour::Cyan.bold().paint(title(title_prefix, snap.date)));

    if snap.edit_mode {
        println!("{}", Colour::Green.paint("[edit mode ON - names unlocked]"));
    }

    println!("  #  {:<20} {:<12} {:<10}", "name", "tag", "elapsed");
    for (i, row) in snap.rows.iter().enumerate() {
        let line = format!(
            "  {}  {:<20} {:<12} {:<10} [{}]",
            i,
            row.name,
            row.tag,
            row.elapsed,
            action_label(row.running),
        );
        if row.running {
            println!("{}", Colour::Green.paint(line));
        } else {
            println!("{}", line);
        }
    }
}

pub fn print_help() {
    println!("Commands:");
    println!("  add | +              append a row");
    println!("  name <i> <text>      rename row i (needs edit mode)");
    println!("  tag <i> <values>     set row i's tag (comma-separated values)");
    println!("  start|stop <i>       toggle row i's timer");
    println!("  edit                 toggle edit mode");
    println!("  reset                clear all rows down to one (asks y/N)");
    println!("  show | ls            print the table");
    println!("  quit | exit          save and leave");
}
