//! Interactive shell: the event loop driving the registry.
//!
//! All mutations happen on this thread. Stdin lines arrive over a
//! channel from a reader thread (which never touches state), and the
//! loop waits no longer than the next tick deadline, so scheduled ticks
//! and user commands are never interleaved mid-operation.

use crate::core::registry::TimerRegistry;
use crate::core::scheduler::{TICK_INTERVAL, TickScheduler};
use crate::core::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use crate::ui::render;
use std::io::BufRead;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::Instant;

enum Outcome {
    Continue,
    Quit,
}

pub struct Shell<S: DayStore> {
    registry: TimerRegistry<S>,
    scheduler: TickScheduler,
    title_prefix: String,
    input: Receiver<String>,
}

impl<S: DayStore> Shell<S> {
    pub fn new(registry: TimerRegistry<S>, title_prefix: &str) -> Self {
        Self {
            registry,
            scheduler: TickScheduler::new(),
            title_prefix: title_prefix.to_string(),
            input: spawn_stdin_reader(),
        }
    }

    /// Run until quit or stdin EOF, then persist once more before the
    /// store handle is dropped.
    pub fn run(mut self) -> AppResult<()> {
        render::print_snapshot(&self.title_prefix, &self.registry.snapshot());
        info("Type 'help' for the command list.");

        loop {
            match self.next_line() {
                Some(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        continue;
                    }
                    match self.handle_command(&line) {
                        Ok(Outcome::Quit) => break,
                        Ok(Outcome::Continue) => {}
                        Err(AppError::EditLocked) => {
                            warning("Names are locked. Use 'edit' to unlock them.");
                        }
                        Err(e) => error(e),
                    }
                }
                None => break, // EOF: same as quit
            }
        }

        self.registry.persist()?;
        success("Saved. Bye.");
        Ok(())
    }

    /// Wait for the next stdin line, firing due ticks while waiting.
    fn next_line(&mut self) -> Option<String> {
        loop {
            let Some(deadline) = self.scheduler.next_deadline() else {
                return self.input.recv().ok();
            };

            let now = Instant::now();
            if deadline <= now {
                self.fire_due_ticks(now);
                continue;
            }

            match self.input.recv_timeout(deadline - now) {
                Ok(line) => return Some(line),
                Err(RecvTimeoutError::Timeout) => self.fire_due_ticks(Instant::now()),
                Err(RecvTimeoutError::Disconnected) => return None,
            }
        }
    }

    /// Advance every due row and reschedule the ones still running.
    /// A stale entry for a stopped row dies here (tick returns false).
    fn fire_due_ticks(&mut self, now: Instant) {
        for index in self.scheduler.take_due(now) {
            match self.registry.tick(index) {
                Ok(true) => self.scheduler.schedule(index, TICK_INTERVAL),
                Ok(false) => {}
                Err(e) => error(e),
            }
        }
    }

    fn handle_command(&mut self, line: &str) -> AppResult<Outcome> {
        let mut parts = line.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd {
            "add" | "+" => {
                self.registry.add_row()?;
                self.show();
            }
            "name" => {
                let index = parse_index(parts.next())?;
                let text = rest_of(line, 2);
                self.registry.set_name(index, &text)?;
                self.show();
            }
            "tag" => {
                let index = parse_index(parts.next())?;
                let raw = rest_of(line, 2);
                // The split list is shown once, informationally; only
                // the raw string is kept on the row.
                let values: Vec<&str> = raw.split(',').map(str::trim).collect();
                self.registry.set_tag(index, &raw)?;
                info(format!("Tag values: {:?}", values));
                self.show();
            }
            "start" | "stop" | "toggle" => {
                let index = parse_index(parts.next())?;
                if self.registry.toggle_timer(index)? {
                    self.scheduler.schedule(index, TICK_INTERVAL);
                }
                self.show();
            }
            "edit" => {
                let on = self.registry.toggle_edit_mode()?;
                info(if on {
                    "Edit mode ON: names unlocked."
                } else {
                    "Edit mode OFF: names locked, changes saved."
                });
            }
            "reset" => {
                if self.confirm_reset() {
                    self.registry.reset()?;
                    self.scheduler.clear();
                    success("All rows cleared.");
                    self.show();
                } else {
                    info("Reset cancelled.");
                }
            }
            "show" | "ls" => self.show(),
            "help" => render::print_help(),
            "quit" | "exit" => return Ok(Outcome::Quit),
            other => warning(format!("Unknown command '{}'. Try 'help'.", other)),
        }

        Ok(Outcome::Continue)
    }

    fn show(&self) {
        render::print_snapshot(&self.title_prefix, &self.registry.snapshot());
    }

    /// Yes/no gate in front of reset; anything but an explicit yes aborts.
    fn confirm_reset(&mut self) -> bool {
        warning("Reset all rows? This cannot be undone. [y/N]");
        match self.input.recv() {
            Ok(answer) => matches!(answer.trim(), "y" | "Y" | "yes"),
            Err(_) => false,
        }
    }
}

fn parse_index(arg: Option<&str>) -> AppResult<usize> {
    let raw = arg.ok_or_else(|| AppError::Other("Missing row index".to_string()))?;
    raw.parse()
        .map_err(|_| AppError::Other(format!("Bad row index '{}'", raw)))
}

/// Everything after the first `skip` whitespace-separated words.
fn rest_of(line: &str, skip: usize) -> String {
    line.split_whitespace()
        .skip(skip)
        .collect::<Vec<_>>()
        .join(" ")
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => {
                    if tx.send(l).is_err() {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        // Dropping tx signals EOF to the loop.
    });
    rx
}
