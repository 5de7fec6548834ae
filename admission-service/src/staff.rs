//! Doctor and nurse rosters

use crate::validation::{optional_text, require_text};
use database_layer::{staff_repository, Doctor, DoctorRecord, LocalStore, Nurse, NurseRecord};
use error_common::{CareError, CareResult, Entity};
use tracing::info;

#[derive(Debug, Clone)]
pub struct StaffService {
    store: LocalStore,
}

fn clean_doctor(doctor: &DoctorRecord) -> CareResult<DoctorRecord> {
    Ok(DoctorRecord {
        name: require_text("Name", &doctor.name)?,
        specialization: doctor.specialization.trim().to_string(),
        contact: doctor.contact.trim().to_string(),
        shift: doctor.shift.trim().to_string(),
        photo_path: optional_text(doctor.photo_path.as_deref()),
    })
}

fn clean_nurse(nurse: &NurseRecord) -> CareResult<NurseRecord> {
    Ok(NurseRecord {
        name: require_text("Name", &nurse.name)?,
        contact: nurse.contact.trim().to_string(),
        shift: nurse.shift.trim().to_string(),
        photo_path: optional_text(nurse.photo_path.as_deref()),
    })
}

impl StaffService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub async fn add_doctor(&self, doctor: &DoctorRecord) -> CareResult<Doctor> {
        let record = clean_doctor(doctor)?;
        let id = staff_repository::insert_doctor(self.store.pool(), &record).await?;
        info!(doctor_id = id, "Doctor added");
        Ok(Doctor {
            id,
            name: record.name,
            specialization: record.specialization,
            contact: record.contact,
            shift: record.shift,
            photo_path: record.photo_path,
        })
    }

    pub async fn update_doctor(&self, id: i64, doctor: &DoctorRecord) -> CareResult<Doctor> {
        let record = clean_doctor(doctor)?;
        if staff_repository::update_doctor(self.store.pool(), id, &record).await? == 0 {
            return Err(CareError::not_found(Entity::Doctor, id.to_string()));
        }
        info!(doctor_id = id, "Doctor updated");
        Ok(Doctor {
            id,
            name: record.name,
            specialization: record.specialization,
            contact: record.contact,
            shift: record.shift,
            photo_path: record.photo_path,
        })
    }

    pub async fn delete_doctor(&self, id: i64) -> CareResult<()> {
        if staff_repository::delete_doctor(self.store.pool(), id).await? == 0 {
            return Err(CareError::not_found(Entity::Doctor, id.to_string()));
        }
        info!(doctor_id = id, "Doctor deleted");
        Ok(())
    }

    pub async fn get_doctor(&self, id: i64) -> CareResult<Doctor> {
        staff_repository::find_doctor(self.store.pool(), id)
            .await?
            .ok_or_else(|| CareError::not_found(Entity::Doctor, id.to_string()))
    }

    /// Doctors whose name contains `filter` (case-insensitive), by name
    pub async fn list_doctors(&self, filter: &str) -> CareResult<Vec<Doctor>> {
        Ok(staff_repository::list_doctors(self.store.pool(), filter.trim()).await?)
    }

    /// Names offered on the admission form
    pub async fn doctor_names(&self) -> CareResult<Vec<String>> {
        let doctors = staff_repository::list_doctors(self.store.pool(), "").await?;
        Ok(doctors.into_iter().map(|d| d.name).collect())
    }

    pub async fn add_nurse(&self, nurse: &NurseRecord) -> CareResult<Nurse> {
        let record = clean_nurse(nurse)?;
        let id = staff_repository::insert_nurse(self.store.pool(), &record).await?;
        info!(nurse_id = id, "Nurse added");
        Ok(Nurse {
            id,
            name: record.name,
            contact: record.contact,
            shift: record.shift,
            photo_path: record.photo_path,
        })
    }

    pub async fn update_nurse(&self, id: i64, nurse: &NurseRecord) -> CareResult<Nurse> {
        let record = clean_nurse(nurse)?;
        if staff_repository::update_nurse(self.store.pool(), id, &record).await? == 0 {
            return Err(CareError::not_found(Entity::Nurse, id.to_string()));
        }
        info!(nurse_id = id, "Nurse updated");
        Ok(Nurse {
            id,
            name: record.name,
            contact: record.contact,
            shift: record.shift,
            photo_path: record.photo_path,
        })
    }

    pub async fn delete_nurse(&self, id: i64) -> CareResult<()> {
        if staff_repository::delete_nurse(self.store.pool(), id).await? == 0 {
            return Err(CareError::not_found(Entity::Nurse, id.to_string()));
        }
        info!(nurse_id = id, "Nurse deleted");
        Ok(())
    }

    pub async fn get_nurse(&self, id: i64) -> CareResult<Nurse> {
        staff_repository::find_nurse(self.store.pool(), id)
            .await?
            .ok_or_else(|| CareError::not_found(Entity::Nurse, id.to_string()))
    }

    pub async fn list_nurses(&self, filter: &str) -> CareResult<Vec<Nurse>> {
        Ok(staff_repository::list_nurses(self.store.pool(), filter.trim()).await?)
    }
}
