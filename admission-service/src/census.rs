//! Read-only views over the ward: dashboard counters, patient and room
//! lists, and the occupancy consistency scan

use crate::models::{CensusSummary, ConsistencyViolation, PatientDetails};
use database_layer::{
    admission_repository, room_repository, staff_repository, treatment_repository, Admission,
    AdmissionSummary, LocalStore, Room, RoomStatus,
};
use error_common::{CareError, CareResult, Entity};
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct CensusService {
    store: LocalStore,
}

impl CensusService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    pub async fn dashboard(&self) -> CareResult<CensusSummary> {
        let pool = self.store.pool();
        Ok(CensusSummary {
            admitted_patients: admission_repository::count(pool).await?,
            doctors: staff_repository::count_doctors(pool).await?,
            nurses: staff_repository::count_nurses(pool).await?,
            rooms_available: room_repository::count_by_status(pool, RoomStatus::Available).await?,
            rooms_occupied: room_repository::count_by_status(pool, RoomStatus::Occupied).await?,
        })
    }

    /// Admitted patients ordered by name
    pub async fn list_admissions(&self) -> CareResult<Vec<AdmissionSummary>> {
        Ok(admission_repository::list_summaries(self.store.pool()).await?)
    }

    pub async fn patient_details(&self, patient_id: &str) -> CareResult<PatientDetails> {
        let patient_id = patient_id.trim();
        let admission = admission_repository::find_by_patient_id(self.store.pool(), patient_id)
            .await?
            .ok_or_else(|| CareError::not_found(Entity::Patient, patient_id))?;
        let treatments =
            treatment_repository::list_for_patient(self.store.pool(), patient_id).await?;

        Ok(PatientDetails {
            admission,
            treatments,
        })
    }

    pub async fn list_rooms(&self) -> CareResult<Vec<Room>> {
        Ok(room_repository::list(self.store.pool()).await?)
    }

    pub async fn available_rooms(&self) -> CareResult<Vec<String>> {
        Ok(room_repository::available_numbers(self.store.pool()).await?)
    }

    /// Every breach of the room/admission occupancy rules, rooms first
    pub async fn check_consistency(&self) -> CareResult<Vec<ConsistencyViolation>> {
        let rooms = room_repository::list(self.store.pool()).await?;
        let admissions = admission_repository::list_all(self.store.pool()).await?;

        let violations = find_violations(&rooms, &admissions);
        if violations.is_empty() {
            debug!(rooms = rooms.len(), admissions = admissions.len(), "Occupancy consistent");
        } else {
            warn!(count = violations.len(), "Occupancy inconsistencies found");
        }
        Ok(violations)
    }
}

fn find_violations(rooms: &[Room], admissions: &[Admission]) -> Vec<ConsistencyViolation> {
    let by_patient: HashMap<&str, &Admission> =
        admissions.iter().map(|a| (a.patient_id.as_str(), a)).collect();
    let by_room: HashMap<&str, &Room> = rooms.iter().map(|r| (r.room_no.as_str(), r)).collect();

    let mut violations = Vec::new();

    for room in rooms {
        let occupied = room.status == RoomStatus::Occupied;
        let Some(patient_id) = room.patient_id.as_deref() else {
            if occupied {
                violations.push(ConsistencyViolation::OccupiedWithoutPatient {
                    room_no: room.room_no.clone(),
                });
            }
            continue;
        };

        if !occupied {
            violations.push(ConsistencyViolation::PatientInUnoccupiedRoom {
                room_no: room.room_no.clone(),
                patient_id: patient_id.to_string(),
            });
        }

        match by_patient.get(patient_id) {
            None => violations.push(ConsistencyViolation::OccupantNotAdmitted {
                room_no: room.room_no.clone(),
                patient_id: patient_id.to_string(),
            }),
            Some(admission) if admission.room_no.as_deref() != Some(room.room_no.as_str()) => {
                violations.push(ConsistencyViolation::OccupantAdmittedElsewhere {
                    room_no: room.room_no.clone(),
                    patient_id: patient_id.to_string(),
                    admitted_room: admission.room_no.clone(),
                })
            }
            Some(_) => {}
        }
    }

    for admission in admissions {
        let Some(room_no) = admission.room_no.as_deref() else {
            continue;
        };
        match by_room.get(room_no) {
            None => violations.push(ConsistencyViolation::AdmissionRoomMissing {
                patient_id: admission.patient_id.clone(),
                room_no: room_no.to_string(),
            }),
            Some(room) if room.patient_id.as_deref() != Some(admission.patient_id.as_str()) => {
                violations.push(ConsistencyViolation::AdmissionRoomNotHeld {
                    patient_id: admission.patient_id.clone(),
                    room_no: room_no.to_string(),
                    room_patient: room.patient_id.clone(),
                })
            }
            Some(_) => {}
        }
    }

    violations
}
