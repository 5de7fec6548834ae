// Table layout and first-run seeding
use crate::error::{DatabaseError, DatabaseResult};
use crate::models::{RoomStatus, RoomType};
use sqlx::{sqlite::SqlitePool, Row};
use tracing::{debug, info};

/// Rooms inserted into an empty rooms table
pub const DEFAULT_ROOMS: [(&str, RoomType, RoomStatus); 4] = [
    ("101", RoomType::Private, RoomStatus::Available),
    ("102", RoomType::Shared, RoomStatus::Available),
    ("201", RoomType::Icu, RoomStatus::Available),
    ("202", RoomType::Shared, RoomStatus::Available),
];

/// Create missing tables. Safe to run on every open.
pub async fn initialize(pool: &SqlitePool) -> DatabaseResult<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS admission (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            patient_id TEXT UNIQUE,
            patient_name TEXT,
            age INTEGER,
            contact TEXT,
            gender TEXT,
            disease TEXT,
            admit_date TEXT,
            blood_group TEXT,
            doctor_name TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Databases created before rooms existed lack admission.room_no
    add_admission_room_column(pool).await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS nurse_treatment (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            patient_id TEXT,
            nurse_name TEXT,
            nurse_notes TEXT,
            shift TEXT,
            prescription TEXT,
            date TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS doctors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            specialization TEXT,
            contact TEXT,
            shift TEXT,
            photo_path TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS nurses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            contact TEXT,
            shift TEXT,
            photo_path TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rooms (
            room_no TEXT PRIMARY KEY,
            type TEXT,
            status TEXT,
            patient_id TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    debug!("Record store schema ready");
    Ok(())
}

async fn add_admission_room_column(pool: &SqlitePool) -> DatabaseResult<()> {
    let columns = sqlx::query("PRAGMA table_info(admission)")
        .fetch_all(pool)
        .await?;

    let mut has_room_no = false;
    for column in &columns {
        let name: String = column.try_get("name")?;
        if name == "room_no" {
            has_room_no = true;
        }
    }

    if !has_room_no {
        sqlx::query("ALTER TABLE admission ADD COLUMN room_no TEXT")
            .execute(pool)
            .await
            .map_err(|e| DatabaseError::MigrationError(e.to_string()))?;
        info!("Added admission.room_no column");
    }

    Ok(())
}

/// Insert [`DEFAULT_ROOMS`] if the rooms table is empty.
/// Returns the number of rooms inserted.
pub async fn seed_default_rooms(pool: &SqlitePool) -> DatabaseResult<u64> {
    let row = sqlx::query("SELECT COUNT(*) AS count FROM rooms")
        .fetch_one(pool)
        .await?;
    let count: i64 = row.try_get("count")?;
    if count > 0 {
        return Ok(0);
    }

    let mut tx = pool.begin().await?;
    let mut inserted = 0;
    for (room_no, room_type, status) in &DEFAULT_ROOMS {
        inserted += sqlx::query(
            "INSERT OR IGNORE INTO rooms (room_no, type, status, patient_id) VALUES (?, ?, ?, NULL)",
        )
        .bind(*room_no)
        .bind(room_type.as_str())
        .bind(status.as_str())
        .execute(&mut *tx)
        .await?
        .rows_affected();
    }
    tx.commit().await?;

    info!(rooms = inserted, "Seeded default rooms");
    Ok(inserted)
}
