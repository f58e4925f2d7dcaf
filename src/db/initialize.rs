use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// `id` is a surrogate key only: the application never updates by id,
/// every save is delete-all-then-insert-all for the date.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS time_keeper (
            id      INTEGER PRIMARY KEY AUTOINCREMENT,
            name    TEXT NOT NULL DEFAULT '',
            tag     TEXT NOT NULL DEFAULT '',
            elapsed TEXT NOT NULL DEFAULT '00:00:00',
            date    TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_time_keeper_date ON time_keeper(date);
        "#,
    )?;
    Ok(())
}
