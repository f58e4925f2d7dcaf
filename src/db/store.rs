//! SQLite-backed [`DayStore`].

use crate::core::store::DayStore;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::{load_rows_by_date, replace_rows_for_date};
use crate::errors::AppResult;
use crate::models::row::Row;
use chrono::NaiveDate;

pub struct SqliteDayStore {
    pool: DbPool,
}

impl SqliteDayStore {
    /// Open the database at `path`, ensuring the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl DayStore for SqliteDayStore {
    fn load_rows(&mut self, date: &NaiveDate) -> AppResult<Vec<Row>> {
        load_rows_by_date(&self.pool.conn, date)
    }

    fn save_rows(&mut self, date: &NaiveDate, rows: &[Row]) -> AppResult<()> {
        replace_rows_for_date(&mut self.pool.conn, date, rows)
    }
}
