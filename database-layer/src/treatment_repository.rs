//! Append-only nursing notes

use crate::error::DatabaseResult;
use crate::models::NurseTreatment;
use sqlx::sqlite::SqliteExecutor;
use sqlx::Row;

pub async fn insert<'e, E>(
    executor: E,
    patient_id: &str,
    nurse_name: &str,
    nurse_notes: &str,
    shift: &str,
    prescription: &str,
    date: &str,
) -> DatabaseResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        r#"
        INSERT INTO nurse_treatment (patient_id, nurse_name, nurse_notes, shift, prescription, date)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(patient_id)
    .bind(nurse_name)
    .bind(nurse_notes)
    .bind(shift)
    .bind(prescription)
    .bind(date)
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

/// Whether any note, including one left by a released patient, uses `patient_id`
pub async fn exists<'e, E>(executor: E, patient_id: &str) -> DatabaseResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT 1 FROM nurse_treatment WHERE patient_id = ? LIMIT 1")
        .bind(patient_id)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

/// Notes for a patient, newest first
pub async fn list_for_patient<'e, E>(executor: E, patient_id: &str) -> DatabaseResult<Vec<NurseTreatment>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query(
        r#"
        SELECT id, patient_id, nurse_name, nurse_notes, shift, prescription, date
        FROM nurse_treatment
        WHERE patient_id = ?
        ORDER BY date DESC
        "#,
    )
    .bind(patient_id)
    .fetch_all(executor)
    .await?;

    let mut treatments = Vec::with_capacity(rows.len());
    for row in rows {
        let nurse_notes: Option<String> = row.try_get("nurse_notes")?;
        let shift: Option<String> = row.try_get("shift")?;
        let prescription: Option<String> = row.try_get("prescription")?;
        treatments.push(NurseTreatment {
            id: row.try_get("id")?,
            patient_id: row.try_get("patient_id")?,
            nurse_name: row.try_get("nurse_name")?,
            nurse_notes: nurse_notes.unwrap_or_default(),
            shift: shift.unwrap_or_default(),
            prescription: prescription.unwrap_or_default(),
            date: row.try_get("date")?,
        });
    }
    Ok(treatments)
}
