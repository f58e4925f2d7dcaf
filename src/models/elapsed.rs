//! Elapsed time value: `HH:MM:SS`, seconds/minutes wrap at 60,
//! hours unbounded. Always rendered zero-padded.

use crate::errors::{AppError, AppResult};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Elapsed {
    pub hours: u32,
    pub minutes: u8,
    pub seconds: u8,
}

impl Elapsed {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Parse an `H:M:S` string. Minutes and seconds must be below 60.
    pub fn parse(s: &str) -> AppResult<Self> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.len() != 3 {
            return Err(AppError::InvalidElapsed(s.to_string()));
        }

        let hours: u32 = parts[0]
            .parse()
            .map_err(|_| AppError::InvalidElapsed(s.to_string()))?;
        let minutes: u8 = parts[1]
            .parse()
            .map_err(|_| AppError::InvalidElapsed(s.to_string()))?;
        let seconds: u8 = parts[2]
            .parse()
            .map_err(|_| AppError::InvalidElapsed(s.to_string()))?;

        if minutes > 59 || seconds > 59 {
            return Err(AppError::InvalidElapsed(s.to_string()));
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// Parse a stored value, falling back to zero when malformed.
    /// A bad row must never panic later in tick arithmetic.
    pub fn parse_or_zero(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Advance by exactly one second, carrying into minutes and hours.
    pub fn tick(&mut self) {
        self.seconds += 1;
        if self.seconds == 60 {
            self.seconds = 0;
            self.minutes += 1;
        }
        if self.minutes == 60 {
            self.minutes = 0;
            self.hours += 1;
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
