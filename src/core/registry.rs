//! The per-row timer state machine.
//!
//! A registry owns the ordered row list for one calendar day plus the
//! global edit-mode flag. At most one row runs at a time, and every
//! state-changing operation ends in a synchronous full save through the
//! [`DayStore`].

use crate::core::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::models::elapsed::Elapsed;
use crate::models::row::Row;
use chrono::NaiveDate;

pub struct TimerRegistry<S: DayStore> {
    store: S,
    date: NaiveDate,
    rows: Vec<Row>,
    edit_mode: bool,
}

/// Read-only render state handed to the UI layer.
#[derive(Debug, Clone)]
pub struct RegistrySnapshot {
    pub date: NaiveDate,
    pub edit_mode: bool,
    pub rows: Vec<Row>,
}

impl<S: DayStore> TimerRegistry<S> {
    /// Load the rows persisted for `date`. An empty day bootstraps a
    /// single default row, persisted immediately.
    pub fn load(mut store: S, date: NaiveDate) -> AppResult<Self> {
        let mut rows = store.load_rows(&date)?;

        // Restarts always come back stopped: `running` is not persisted.
        if rows.is_empty() {
            rows.push(Row::new());
            store.save_rows(&date, &rows)?;
        }

        Ok(Self {
            store,
            date,
            rows,
            edit_mode: false,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            date: self.date,
            edit_mode: self.edit_mode,
            rows: self.rows.clone(),
        }
    }

    /// Append an empty row. Growth is unbounded.
    pub fn add_row(&mut self) -> AppResult<()> {
        self.rows.push(Row::new());
        self.persist()
    }

    /// Rename a row. Rejected while edit mode is off.
    pub fn set_name(&mut self, index: usize, name: &str) -> AppResult<()> {
        if !self.edit_mode {
            return Err(AppError::EditLocked);
        }
        let row = self
            .rows
            .get_mut(index)
            .ok_or(AppError::InvalidRow(index))?;
        row.name = name.to_string();
        self.persist()
    }

    /// Store a tag string verbatim. The caller may show the comma-split
    /// values to the user; only the raw text is kept.
    pub fn set_tag(&mut self, index: usize, raw: &str) -> AppResult<()> {
        let row = self
            .rows
            .get_mut(index)
            .ok_or(AppError::InvalidRow(index))?;
        row.tag = raw.to_string();
        self.persist()
    }

    /// Flip a row between Stopped and Running. Any other running row is
    /// stopped first, silently. Returns whether the row now runs so the
    /// caller can schedule its first tick.
    pub fn toggle_timer(&mut self, index: usize) -> AppResult<bool> {
        if index >= self.rows.len() {
            return Err(AppError::InvalidRow(index));
        }

        for (i, row) in self.rows.iter_mut().enumerate() {
            if i != index && row.running {
                row.running = false;
            }
        }

        let row = &mut self.rows[index];
        row.running = !row.running;
        let running = row.running;

        self.persist()?;
        Ok(running)
    }

    /// One-second advance for a running row. A stale tick for a row that
    /// has been stopped (or removed by reset) is a no-op; `false` tells
    /// the caller not to reschedule.
    pub fn tick(&mut self, index: usize) -> AppResult<bool> {
        let Some(row) = self.rows.get_mut(index) else {
            return Ok(false);
        };
        if !row.running {
            return Ok(false);
        }

        row.elapsed.tick();
        self.persist()?;
        Ok(true)
    }

    /// Flip edit mode; returns the new value. Leaving edit mode is the
    /// moment name edits get saved, so the flip persists like any other
    /// mutation.
    pub fn toggle_edit_mode(&mut self) -> AppResult<bool> {
        self.edit_mode = !self.edit_mode;
        self.persist()?;
        Ok(self.edit_mode)
    }

    /// Clear everything back down to a single empty row. Confirmation is
    /// the UI boundary's job; this is unconditional.
    pub fn reset(&mut self) -> AppResult<()> {
        self.rows.truncate(1);
        if self.rows.is_empty() {
            self.rows.push(Row::new());
        }

        let row = &mut self.rows[0];
        row.name.clear();
        row.tag.clear();
        row.elapsed = Elapsed::zero();
        row.running = false;

        self.persist()
    }

    /// Full save of the current row set for the active date. Also called
    /// once more on shutdown, before the store handle is dropped.
    pub fn persist(&mut self) -> AppResult<()> {
        self.store.save_rows(&self.date, &self.rows)
    }
}
