//! Doctor and nurse roster queries

use crate::error::DatabaseResult;
use crate::models::{Doctor, DoctorRecord, Nurse, NurseRecord};
use crate::row::text;
use sqlx::sqlite::{SqliteExecutor, SqliteRow};
use sqlx::Row;

fn doctor_from_row(row: &SqliteRow) -> DatabaseResult<Doctor> {
    Ok(Doctor {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        specialization: text(row, "specialization")?,
        contact: text(row, "contact")?,
        shift: text(row, "shift")?,
        photo_path: row.try_get("photo_path")?,
    })
}

fn nurse_from_row(row: &SqliteRow) -> DatabaseResult<Nurse> {
    Ok(Nurse {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        contact: text(row, "contact")?,
        shift: text(row, "shift")?,
        photo_path: row.try_get("photo_path")?,
    })
}

/// Substring pattern for `LIKE ... ESCAPE '\'`. Wildcards in the filter
/// match literally.
fn like_pattern(filter: &str) -> String {
    let mut pattern = String::with_capacity(filter.len() + 2);
    pattern.push('%');
    for c in filter.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// --- Doctors ---

pub async fn insert_doctor<'e, E>(executor: E, doctor: &DoctorRecord) -> DatabaseResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "INSERT INTO doctors (name, specialization, contact, shift, photo_path) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&doctor.name)
    .bind(&doctor.specialization)
    .bind(&doctor.contact)
    .bind(&doctor.shift)
    .bind(doctor.photo_path.as_deref())
    .execute(executor)
    .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_doctor<'e, E>(executor: E, id: i64, doctor: &DoctorRecord) -> DatabaseResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE doctors SET name = ?, specialization = ?, contact = ?, shift = ?, photo_path = ? WHERE id = ?",
    )
    .bind(&doctor.name)
    .bind(&doctor.specialization)
    .bind(&doctor.contact)
    .bind(&doctor.shift)
    .bind(doctor.photo_path.as_deref())
    .bind(id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_doctor<'e, E>(executor: E, id: i64) -> DatabaseResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM doctors WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn find_doctor<'e, E>(executor: E, id: i64) -> DatabaseResult<Option<Doctor>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(
        "SELECT id, name, specialization, contact, shift, photo_path FROM doctors WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(executor)
    .await?;
    row.as_ref().map(doctor_from_row).transpose()
}

/// Doctors whose name contains `filter`, ordered by name
pub async fn list_doctors<'e, E>(executor: E, filter: &str) -> DatabaseResult<Vec<Doctor>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query(
        r#"
        SELECT id, name, specialization, contact, shift, photo_path
        FROM doctors
        WHERE name LIKE ? ESCAPE '\'
        ORDER BY name
        "#,
    )
    .bind(like_pattern(filter))
    .fetch_all(executor)
    .await?;
    rows.iter().map(doctor_from_row).collect()
}

pub async fn doctor_exists_by_name<'e, E>(executor: E, name: &str) -> DatabaseResult<bool>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT 1 FROM doctors WHERE name = ? LIMIT 1")
        .bind(name)
        .fetch_optional(executor)
        .await?;
    Ok(row.is_some())
}

pub async fn count_doctors<'e, E>(executor: E) -> DatabaseResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT COUNT(*) AS count FROM doctors")
        .fetch_one(executor)
        .await?;
    Ok(row.try_get("count")?)
}

// --- Nurses ---

pub async fn insert_nurse<'e, E>(executor: E, nurse: &NurseRecord) -> DatabaseResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let result =
        sqlx::query("INSERT INTO nurses (name, contact, shift, photo_path) VALUES (?, ?, ?, ?)")
            .bind(&nurse.name)
            .bind(&nurse.contact)
            .bind(&nurse.shift)
            .bind(nurse.photo_path.as_deref())
            .execute(executor)
            .await?;
    Ok(result.last_insert_rowid())
}

pub async fn update_nurse<'e, E>(executor: E, id: i64, nurse: &NurseRecord) -> DatabaseResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query(
        "UPDATE nurses SET name = ?, contact = ?, shift = ?, photo_path = ? WHERE id = ?",
    )
    .bind(&nurse.name)
    .bind(&nurse.contact)
    .bind(&nurse.shift)
    .bind(nurse.photo_path.as_deref())
    .bind(id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete_nurse<'e, E>(executor: E, id: i64) -> DatabaseResult<u64>
where
    E: SqliteExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM nurses WHERE id = ?")
        .bind(id)
        .execute(executor)
        .await?;
    Ok(result.rows_affected())
}

pub async fn find_nurse<'e, E>(executor: E, id: i64) -> DatabaseResult<Option<Nurse>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT id, name, contact, shift, photo_path FROM nurses WHERE id = ?")
        .bind(id)
        .fetch_optional(executor)
        .await?;
    row.as_ref().map(nurse_from_row).transpose()
}

/// Nurses whose name contains `filter`, ordered by name
pub async fn list_nurses<'e, E>(executor: E, filter: &str) -> DatabaseResult<Vec<Nurse>>
where
    E: SqliteExecutor<'e>,
{
    let rows = sqlx::query(
        r#"
        SELECT id, name, contact, shift, photo_path
        FROM nurses
        WHERE name LIKE ? ESCAPE '\'
        ORDER BY name
        "#,
    )
    .bind(like_pattern(filter))
    .fetch_all(executor)
    .await?;
    rows.iter().map(nurse_from_row).collect()
}

pub async fn count_nurses<'e, E>(executor: E) -> DatabaseResult<i64>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query("SELECT COUNT(*) AS count FROM nurses")
        .fetch_one(executor)
        .await?;
    Ok(row.try_get("count")?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::{LocalStore, LocalStoreConfig};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_doctor_name_filter_is_substring_match() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(&LocalStoreConfig::at_path(dir.path().join("staff.db")))
            .await
            .unwrap();

        for name in ["Dr. Mehta", "Dr. Rao", "Dr. Ramesh"] {
            insert_doctor(
                store.pool(),
                &DoctorRecord {
                    name: name.to_string(),
                    ..DoctorRecord::default()
                },
            )
            .await
            .unwrap();
        }

        let found = list_doctors(store.pool(), "ra").await.unwrap();
        let names: Vec<&str> = found.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Dr. Ramesh", "Dr. Rao"]);
        assert_eq!(list_doctors(store.pool(), "").await.unwrap().len(), 3);
        assert!(doctor_exists_by_name(store.pool(), "Dr. Rao").await.unwrap());
        assert!(!doctor_exists_by_name(store.pool(), "Dr. Who").await.unwrap());
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ra"), "%ra%");
        assert_eq!(like_pattern("50%_a\\b"), "%50\\%\\_a\\\\b%");
    }

    #[tokio::test]
    async fn test_wildcards_in_filter_match_literally() {
        let dir = TempDir::new().unwrap();
        let store = LocalStore::open(&LocalStoreConfig::at_path(dir.path().join("like.db")))
            .await
            .unwrap();

        for name in ["Nurse Priya", "Nurse Anu_K", "Nurse 100%"] {
            insert_nurse(
                store.pool(),
                &NurseRecord {
                    name: name.to_string(),
                    ..NurseRecord::default()
                },
            )
            .await
            .unwrap();
        }

        let names = |nurses: Vec<Nurse>| nurses.into_iter().map(|n| n.name).collect::<Vec<_>>();
        assert_eq!(names(list_nurses(store.pool(), "_").await.unwrap()), vec!["Nurse Anu_K"]);
        assert_eq!(names(list_nurses(store.pool(), "%").await.unwrap()), vec!["Nurse 100%"]);
        assert_eq!(list_nurses(store.pool(), "").await.unwrap().len(), 3);
        assert!(list_doctors(store.pool(), "_").await.unwrap().is_empty());
    }
}
