//! Queries against the `admission` table
//!
//! Every function takes an executor so callers can run it directly on the
//! pool or inside a transaction (`&mut *tx`).

use crate::error::{DatabaseError, DatabaseResult};
use crate::models::{Admission, AdmissionSummary, Gender, PatientRecord};
use crate::row::{age, text};
use sqlx::sqlite::{SqliteExecutor, SqliteRow};
use sqlx::Row;
use tracing::warn;

// Legacy rows may hold free text in `age`, so it is read as text
const ADMISSION_COLUMNS: &str = "id, patient_id, patient_name, CAST(age AS TEXT) AS age, contact, \
                                 gender, disease, admit_date, blood_group, doctor_name, room_no";

fn admission_from_row(row: &SqliteRow) -> DatabaseResult<Admission> {
    let patient_id: String = row.try_get("patient_id")?;
    let gender = text(row, "gender")?;
    let gender = gender.parse().unwrap_or_else(|_| {
        warn!(patient_id = %patient_id, gender = %gender, "Unrecognized gender on stored admission");
        Gender::Other
    });

    Ok(Admission {
        id: row.try_get("id")?,
        name: text(row, "patient_name")?,
        age: age(row, "age")?,
        contact: text(row, "contact")?,
        gender,
        disease: text(row, "disease")?,
        admit_date: text(row, "admit_date")?,
        blood_group: text(row, "blood_group")?,
        doctor_name: text(row, "doctor_name")?,
        room_no: row.try_get("room_no")?,
        patient_id,
    })
}

/// Insert a new admission and return its row id
pub async fn insert<'e, E>(
    executor: E,
    patient_id: &str,
    patient: &PatientRecord,
    admit_date: &str,
    doctor_name: &str,
    room_no: Option<&str>,
) -> DatabaseResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO admission (
            patient_id, patient_name, age, contact, gender, disease,
            admit_date, blood_group, doctor_name, room_no
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(patient_id)
    .bind(&patient.name)
    .bind(i64::from(patient.age))
    .bind(&patient.contact)
    .bind(patient.gender.as_str())
    .bind(&patient.disease)
    .bind(admit_date)
    .bind(&patient.blood_group)
    .bind(doctor_name)
    .bind(room_no)
    .execute(executor)
    .await
    .map_err(|e| match e {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            DatabaseError::UniqueViolation(patient_id.to_string())
        }
        other => DatabaseError::SqlxError(other),
    })?;

    Ok(result.last_insert_rowid())
}

/// Find a live admission by its business key
pub async fn find_by_patient_id<'e, E>(
    executor: E,
    patient_id: &str,
) -> DatabaseResult<Option<Admission>>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!("SELECT {} FROM admission WHERE patient_id = ?", ADMISSION_COLUMNS);
    let row = sqlx::query(&sql)
        .bind(patient_id)
        .fetch_optional(executor)
        .await?;

    row.as_ref().map(admission_from_row).transpose()
}

pub async fn exists<'e, E>(executor: E, patient_id: &str) -> DatabaseResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT 1 FROM admission WHERE patient_id = ?")
        .bind(patient_id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// Delete an admission. Returns the number of rows removed.
pub async fn delete_by_patient_id<'e, E>(executor: E, patient_id: &str) -> DatabaseResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM admission WHERE patient_id = ?")
        .bind(patient_id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Detach every admission from `room_no`
pub async fn clear_room<'e, E>(executor: E, room_no: &str) -> DatabaseResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("UPDATE admission SET room_no = NULL WHERE room_no = ?")
        .bind(room_no)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

/// Admission list ordered by patient name
pub async fn list_summaries<'e, E>(executor: E) -> DatabaseResult<Vec<AdmissionSummary>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query(
        r#"
        SELECT patient_id, patient_name, disease, doctor_name, room_no
        FROM admission
        ORDER BY patient_name
        "#,
    )
    .fetch_all(executor)
    .await?;

    let mut summaries = Vec::with_capacity(rows.len());
    for row in rows {
        summaries.push(AdmissionSummary {
            patient_id: row.try_get("patient_id")?,
            name: text(&row, "patient_name")?,
            disease: text(&row, "disease")?,
            doctor_name: text(&row, "doctor_name")?,
            room_no: row.try_get("room_no")?,
        });
    }
    Ok(summaries)
}

pub async fn list_all<'e, E>(executor: E) -> DatabaseResult<Vec<Admission>>
where
    E: SqliteExecutor<'e>,
{
    let sql = format!("SELECT {} FROM admission ORDER BY id", ADMISSION_COLUMNS);
    let rows = sqlx::query(&sql).fetch_all(executor).await?;
    rows.iter().map(admission_from_row).collect()
}

pub async fn count<'e, E>(executor: E) -> DatabaseResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT COUNT(*) AS count FROM admission")
        .fetch_one(executor)
        .await?;
    Ok(row.try_get("count")?)
}
