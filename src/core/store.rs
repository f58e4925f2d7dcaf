//! Persistence seam for the registry.
//! Full-replace semantics: every save discards whatever was stored for
//! the date and writes the given rows in order.

use crate::errors::AppResult;
use crate::models::row::Row;
use chrono::NaiveDate;

pub trait DayStore {
    /// All rows recorded for `date`, in insertion order. Empty if none.
    fn load_rows(&mut self, date: &NaiveDate) -> AppResult<Vec<Row>>;

    /// Replace the full row set for `date` with `rows`.
    fn save_rows(&mut self, date: &NaiveDate, rows: &[Row]) -> AppResult<()>;
}
