//! Queries against the `rooms` table
//!
//! Admission-driven occupancy changes go through [`occupy`] and [`release`],
//! which always write `status` and `patient_id` together.

use crate::error::DatabaseResult;
use crate::models::{Room, RoomStatus, RoomType};
use sqlx::sqlite::{SqliteExecutor, SqliteRow};
use sqlx::Row;

fn room_from_row(row: &SqliteRow) -> DatabaseResult<Room> {
    let room_type: Option<String> = row.try_get("type")?;
    let status: Option<String> = row.try_get("status")?;

    Ok(Room {
        room_no: row.try_get("room_no")?,
        room_type: RoomType::from(room_type.unwrap_or_default()),
        status: status.as_deref().unwrap_or("Available").parse()?,
        patient_id: row.try_get("patient_id")?,
    })
}

pub async fn find<'e, E>(executor: E, room_no: &str) -> DatabaseResult<Option<Room>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT room_no, type, status, patient_id FROM rooms WHERE room_no = ?")
        .bind(room_no)
        .fetch_optional(executor)
        .await?;

    row.as_ref().map(room_from_row).transpose()
}

/// All rooms ordered by number
pub async fn list<'e, E>(executor: E) -> DatabaseResult<Vec<Room>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query("SELECT room_no, type, status, patient_id FROM rooms ORDER BY room_no")
        .fetch_all(executor)
        .await?;

    rows.iter().map(room_from_row).collect()
}

/// Numbers of rooms currently Available, ordered
pub async fn available_numbers<'e, E>(executor: E) -> DatabaseResult<Vec<String>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query("SELECT room_no FROM rooms WHERE status = ? ORDER BY room_no")
        .bind(RoomStatus::Available.as_str())
        .fetch_all(executor)
        .await?;

    let mut numbers = Vec::with_capacity(rows.len());
    for row in rows {
        numbers.push(row.try_get("room_no")?);
    }
    Ok(numbers)
}

/// Insert or replace a room. The stored room never has an occupant.
pub async fn upsert<'e, E>(
    executor: E,
    room_no: &str,
    room_type: &RoomType,
    status: RoomStatus,
) -> DatabaseResult<()>
where
    E: SqliteExecutor<'e>,
{
    sqlx::query(
        "INSERT OR REPLACE INTO rooms (room_no, type, status, patient_id) VALUES (?, ?, ?, NULL)",
    )
    .bind(room_no)
    .bind(room_type.as_str())
    .bind(status.as_str())
    .execute(executor)
    .await?;
    Ok(())
}

/// Change type and status. When `clear_patient` is set the occupant is
/// dropped in the same statement.
pub async fn update<'e, E>(
    executor: E,
    room_no: &str,
    room_type: &RoomType,
    status: RoomStatus,
    clear_patient: bool,
) -> DatabaseResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let sql = if clear_patient {
        "UPDATE rooms SET type = ?, status = ?, patient_id = NULL WHERE room_no = ?"
    } else {
        "UPDATE rooms SET type = ?, status = ? WHERE room_no = ?"
    };

    let result = sqlx::query(sql)
        .bind(room_type.as_str())
        .bind(status.as_str())
        .bind(room_no)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Mark an Available room Occupied by `patient_id`.
/// Returns 0 when the room is missing or not Available.
pub async fn occupy<'e, E>(executor: E, room_no: &str, patient_id: &str) -> DatabaseResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE rooms SET status = ?, patient_id = ? WHERE room_no = ? AND status = ?",
    )
    .bind(RoomStatus::Occupied.as_str())
    .bind(patient_id)
    .bind(room_no)
    .bind(RoomStatus::Available.as_str())
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

/// Return a room held by `patient_id` to Available with no occupant.
/// A room held by someone else is left untouched.
pub async fn release<'e, E>(executor: E, room_no: &str, patient_id: &str) -> DatabaseResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE rooms SET status = ?, patient_id = NULL WHERE room_no = ? AND patient_id = ?",
    )
    .bind(RoomStatus::Available.as_str())
    .bind(room_no)
    .bind(patient_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete<'e, E>(executor: E, room_no: &str) -> DatabaseResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM rooms WHERE room_no = ?")
        .bind(room_no)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn count_by_status<'e, E>(executor: E, status: RoomStatus) -> DatabaseResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT COUNT(*) AS count FROM rooms WHERE status = ?")
        .bind(status.as_str())
        .fetch_one(executor)
        .await?;
    Ok(row.try_get("count")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{LocalStore, LocalStoreConfig};
    use tempfile::TempDir;

    async fn create_test_store() -> (TempDir, LocalStore) {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(&LocalStoreConfig::at_path(dir.path().join("rooms.db")))
            .await
            .unwrap();
        (dir, store)
    }

    #[tokio::test]
    async fn test_seeded_rooms_are_listed_in_order() {
        let (_dir, store) = create_test_store().await;

        let rooms = list(store.pool()).await.unwrap();
        let numbers: Vec<&str> = rooms.iter().map(|r| r.room_no.as_str()).collect();
        assert_eq!(numbers, vec!["101", "102", "201", "202"]);
        assert_eq!(rooms[2].room_type, RoomType::Icu);
        assert!(rooms.iter().all(|r| r.status == RoomStatus::Available && r.patient_id.is_none()));
    }

    #[tokio::test]
    async fn test_occupy_only_succeeds_on_available_room() {
        let (_dir, store) = create_test_store().await;

        assert_eq!(occupy(store.pool(), "101", "P11111").await.unwrap(), 1);
        assert_eq!(occupy(store.pool(), "101", "P22222").await.unwrap(), 0);
        assert_eq!(occupy(store.pool(), "999", "P22222").await.unwrap(), 0);

        let room = find(store.pool(), "101").await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Occupied);
        assert_eq!(room.patient_id.as_deref(), Some("P11111"));

        assert_eq!(release(store.pool(), "101", "P22222").await.unwrap(), 0);
        assert_eq!(release(store.pool(), "101", "P11111").await.unwrap(), 1);
        let room = find(store.pool(), "101").await.unwrap().unwrap();
        assert_eq!(room.status, RoomStatus::Available);
        assert_eq!(room.patient_id, None);
    }

    #[tokio::test]
    async fn test_free_text_room_type_round_trips() {
        let (_dir, store) = create_test_store().await;

        upsert(store.pool(), "301", &RoomType::Other("Deluxe".into()), RoomStatus::Cleaning)
            .await
            .unwrap();
        let room = find(store.pool(), "301").await.unwrap().unwrap();
        assert_eq!(room.room_type, RoomType::Other("Deluxe".into()));
        assert_eq!(room.status, RoomStatus::Cleaning);

        assert_eq!(available_numbers(store.pool()).await.unwrap().len(), 4);
        assert_eq!(count_by_status(store.pool(), RoomStatus::Cleaning).await.unwrap(), 1);
    }
}
