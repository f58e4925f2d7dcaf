//! One trackable entry in the day tracker.
//! Plain data, kept separate from any rendering concern.

use crate::models::elapsed::Elapsed;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Free-text label, mutable only while edit mode is on.
    pub name: String,
    /// Short label stored verbatim (entered as comma-separated values).
    pub tag: String,
    pub elapsed: Elapsed,
    pub running: bool,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }
}
