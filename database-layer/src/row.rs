//! Lenient column decoding for rows written by earlier versions of the
//! desk software, which stored form fields without validation

use crate::error::DatabaseResult;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;

/// Text column where NULL reads as empty
pub(crate) fn text(row: &SqliteRow, column: &str) -> DatabaseResult<String> {
    let value: Option<String> = row.try_get(column)?;
    Ok(value.unwrap_or_default())
}

/// Age from a column selected as `CAST(age AS TEXT)`. Anything that is
/// not a whole non-negative number reads as unknown.
pub(crate) fn age(row: &SqliteRow, column: &str) -> DatabaseResult<Option<u32>> {
    let value: Option<String> = row.try_get(column)?;
    Ok(value.and_then(|v| v.trim().parse().ok()))
}
