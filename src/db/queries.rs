use crate::errors::AppResult;
use crate::models::elapsed::Elapsed;
use crate::models::row::Row;
use crate::ui::messages::warning;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row as SqlRow, params};

pub fn load_rows_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Vec<Row>> {
    let mut stmt = conn.prepare(
        "SELECT name, tag, elapsed FROM time_keeper
         WHERE date = ?1
         ORDER BY id ASC",
    )?;

    let date_str = date.format("%Y-%m-%d").to_string();
    let rows = stmt.query_map([date_str], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

fn map_row(row: &SqlRow) -> Result<Row> {
    let name: String = row.get("name")?;
    let tag: String = row.get("tag")?;
    let elapsed_str: String = row.get("elapsed")?;

    // Fail closed: a malformed elapsed value becomes 00:00:00 instead of
    // poisoning tick arithmetic later.
    let elapsed = match Elapsed::parse(&elapsed_str) {
        Ok(e) => e,
        Err(_) => {
            warning(format!(
                "Malformed elapsed value '{}' in store, treating as 00:00:00",
                elapsed_str
            ));
            Elapsed::zero()
        }
    };

    Ok(Row {
        name,
        tag,
        elapsed,
        running: false,
    })
}

/// Full replace of the row set for one date: delete everything recorded
/// for `date`, then insert `rows` in order. The transaction makes the
/// rewrite crash-atomic.
pub fn replace_rows_for_date(
    conn: &mut Connection,
    date: &NaiveDate,
    rows: &[Row],
) -> AppResult<()> {
    let date_str = date.format("%Y-%m-%d").to_string();

    let tx = conn.transaction()?;
    tx.execute("DELETE FROM time_keeper WHERE date = ?1", [&date_str])?;
    for row in rows {
        tx.execute(
            "INSERT INTO time_keeper (name, tag, elapsed, date)
             VALUES (?1, ?2, ?3, ?4)",
            params![row.name, row.tag, row.elapsed.to_string(), date_str],
        )?;
    }
    tx.commit()?;
    Ok(())
}
