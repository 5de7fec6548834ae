//! Admission and release, the two operations that move a room between
//! Available and Occupied

use crate::id::{PatientIdGenerator, RandomPatientIds};
use crate::models::{AdmissionReceipt, AdmissionRequest, ReleaseReason, ReleasedPatient};
use crate::validation::require_text;
use chrono::Local;
use database_layer::{
    admission_repository, room_repository, staff_repository, treatment_repository, DatabaseError,
    LocalStore, PatientRecord, StoreTransaction,
};
use error_common::{CareError, CareResult, Entity};
use logger_redacted::redacted_debug;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Note written for a nurse chosen on the admission form
pub const ADMISSION_NURSE_NOTE: &str = "Assigned on admission";

const ADMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdmissionPolicy {
    /// Candidate ids drawn before giving up with a duplicate id error
    pub max_id_attempts: u32,
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        Self { max_id_attempts: 16 }
    }
}

#[derive(Clone)]
pub struct AdmissionService {
    store: LocalStore,
    policy: AdmissionPolicy,
    ids: Arc<dyn PatientIdGenerator>,
}

impl AdmissionService {
    pub fn new(store: LocalStore) -> Self {
        Self {
            store,
            policy: AdmissionPolicy::default(),
            ids: Arc::new(RandomPatientIds),
        }
    }

    pub fn with_policy(mut self, policy: AdmissionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn PatientIdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    /// Admit a patient into an Available room.
    ///
    /// The admission row, the room occupancy and the optional nurse note are
    /// written in one transaction; any failure leaves none of them applied.
    pub async fn admit(&self, request: &AdmissionRequest) -> CareResult<AdmissionReceipt> {
        let patient = validated_patient(&request.patient)?;
        let doctor_name = require_text("Doctor", &request.doctor_name)?;
        let room_no = require_text("Room", &request.room_no)?;

        let mut tx = self.store.begin().await?;

        if !staff_repository::doctor_exists_by_name(&mut *tx, &doctor_name).await? {
            warn!(doctor = %doctor_name, "Admission rejected: unknown doctor");
            return Err(CareError::validation(format!("Unknown doctor: {}", doctor_name)));
        }

        self.ensure_room_available(&mut tx, &room_no).await?;

        let nurse_name = match request.nurse_id {
            Some(nurse_id) => match staff_repository::find_nurse(&mut *tx, nurse_id).await? {
                Some(nurse) => Some(nurse.name),
                None => return Err(CareError::not_found(Entity::Nurse, nurse_id.to_string())),
            },
            None => None,
        };

        let patient_id = self.allocate_patient_id(&mut tx).await?;
        let admit_date = Local::now().format(ADMIT_DATE_FORMAT).to_string();

        admission_repository::insert(
            &mut *tx,
            &patient_id,
            &patient,
            &admit_date,
            &doctor_name,
            Some(&room_no),
        )
        .await?;

        if room_repository::occupy(&mut *tx, &room_no, &patient_id).await? == 0 {
            return Err(CareError::validation(format!("Room {} is not available", room_no)));
        }

        if let Some(nurse_name) = &nurse_name {
            treatment_repository::insert(
                &mut *tx,
                &patient_id,
                nurse_name,
                ADMISSION_NURSE_NOTE,
                "",
                "",
                &admit_date,
            )
            .await?;
        }

        tx.commit().await.map_err(DatabaseError::from)?;

        info!(patient_id = %patient_id, room_no = %room_no, doctor = %doctor_name, "Patient admitted");
        redacted_debug!("Admission {} contact {}", patient_id, patient.contact);

        Ok(AdmissionReceipt {
            patient_id,
            admit_date,
            room_no,
        })
    }

    /// Remove a patient's admission and free the room they held.
    ///
    /// Returns `None` without touching any room when the patient is unknown.
    pub async fn release_patient(
        &self,
        patient_id: &str,
        reason: ReleaseReason,
    ) -> CareResult<Option<ReleasedPatient>> {
        let patient_id = patient_id.trim();
        let mut tx = self.store.begin().await?;

        let Some(admission) = admission_repository::find_by_patient_id(&mut *tx, patient_id).await?
        else {
            debug!(patient_id = %patient_id, "Release skipped: no such admission");
            return Ok(None);
        };

        if let Some(room_no) = &admission.room_no {
            let freed = room_repository::release(&mut *tx, room_no, &admission.patient_id).await?;
            if freed == 0 {
                warn!(patient_id = %patient_id, room_no = %room_no, "Admission room was not held by the patient");
            }
        }

        admission_repository::delete_by_patient_id(&mut *tx, &admission.patient_id).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        info!(patient_id = %admission.patient_id, reason = %reason, "Patient released");

        Ok(Some(ReleasedPatient {
            patient_id: admission.patient_id,
            room_no: admission.room_no,
            reason,
        }))
    }

    async fn ensure_room_available(
        &self,
        tx: &mut StoreTransaction<'static>,
        room_no: &str,
    ) -> CareResult<()> {
        let available = room_repository::available_numbers(&mut **tx).await?;
        if available.iter().any(|r| r == room_no) {
            return Ok(());
        }

        warn!(room_no = %room_no, "Admission rejected: room not available");
        if available.is_empty() {
            Err(CareError::validation("No rooms available"))
        } else {
            Err(CareError::validation(format!("Room {} is not available", room_no)))
        }
    }

    async fn allocate_patient_id(&self, tx: &mut StoreTransaction<'static>) -> CareResult<String> {
        let mut candidate = self.ids.next_id();
        for attempt in 1..=self.policy.max_id_attempts.max(1) {
            if attempt > 1 {
                candidate = self.ids.next_id();
            }
            // Notes outlive their admission, so a released patient's id stays taken
            let taken = admission_repository::exists(&mut **tx, &candidate).await?
                || treatment_repository::exists(&mut **tx, &candidate).await?;
            if !taken {
                return Ok(candidate);
            }
            debug!(candidate = %candidate, attempt, "Patient id collision");
        }

        warn!(attempts = self.policy.max_id_attempts, "Patient id space exhausted");
        Err(CareError::DuplicateId(candidate))
    }
}

fn validated_patient(patient: &PatientRecord) -> CareResult<PatientRecord> {
    Ok(PatientRecord {
        name: require_text("Name", &patient.name)?,
        age: patient.age,
        contact: require_text("Contact", &patient.contact)?,
        gender: patient.gender,
        disease: require_text("Disease", &patient.disease)?,
        blood_group: require_text("Blood group", &patient.blood_group)?,
    })
}
