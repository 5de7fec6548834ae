use database_layer::{Admission, NurseTreatment, PatientRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Admission form as submitted by the shell
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmissionRequest {
    pub patient: PatientRecord,
    pub doctor_name: String,
    pub room_no: String,
    /// Nurse assigned at admission, if any
    pub nurse_id: Option<i64>,
}

/// Result of a successful admission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionReceipt {
    pub patient_id: String,
    pub admit_date: String,
    pub room_no: String,
}

/// Why a patient record is being removed. Both reasons release the room
/// identically; only the reported message differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseReason {
    Discharged,
    Deleted,
}

impl ReleaseReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseReason::Discharged => "discharged",
            ReleaseReason::Deleted => "deleted",
        }
    }
}

impl fmt::Display for ReleaseReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleasedPatient {
    pub patient_id: String,
    /// Room freed by the release, if the patient held one
    pub room_no: Option<String>,
    pub reason: ReleaseReason,
}

impl ReleasedPatient {
    /// Message for the shell
    pub fn message(&self) -> String {
        match self.reason {
            ReleaseReason::Discharged => {
                format!("Patient {} discharged and room freed.", self.patient_id)
            }
            ReleaseReason::Deleted => {
                format!("Admission record for {} deleted.", self.patient_id)
            }
        }
    }
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusSummary {
    pub admitted_patients: i64,
    pub doctors: i64,
    pub nurses: i64,
    pub rooms_available: i64,
    pub rooms_occupied: i64,
}

/// Full admission with its nursing notes, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientDetails {
    pub admission: Admission,
    pub treatments: Vec<NurseTreatment>,
}

/// A breach of the room/admission occupancy rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConsistencyViolation {
    /// Room is Occupied but names no patient
    OccupiedWithoutPatient { room_no: String },
    /// Room names a patient but is not Occupied
    PatientInUnoccupiedRoom { room_no: String, patient_id: String },
    /// Room names a patient with no live admission
    OccupantNotAdmitted { room_no: String, patient_id: String },
    /// Room names a patient whose admission points at another room
    OccupantAdmittedElsewhere {
        room_no: String,
        patient_id: String,
        admitted_room: Option<String>,
    },
    /// Admission points at a room that does not exist
    AdmissionRoomMissing { patient_id: String, room_no: String },
    /// Admission points at a room held by someone else, or by nobody
    AdmissionRoomNotHeld {
        patient_id: String,
        room_no: String,
        room_patient: Option<String>,
    },
}

impl fmt::Display for ConsistencyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConsistencyViolation::OccupiedWithoutPatient { room_no } => {
                write!(f, "room {} is Occupied without a patient", room_no)
            }
            ConsistencyViolation::PatientInUnoccupiedRoom { room_no, patient_id } => {
                write!(f, "room {} holds {} but is not Occupied", room_no, patient_id)
            }
            ConsistencyViolation::OccupantNotAdmitted { room_no, patient_id } => {
                write!(f, "room {} holds {} who is not admitted", room_no, patient_id)
            }
            ConsistencyViolation::OccupantAdmittedElsewhere {
                room_no,
                patient_id,
                admitted_room,
            } => write!(
                f,
                "room {} holds {} whose admission is for room {}",
                room_no,
                patient_id,
                admitted_room.as_deref().unwrap_or("none")
            ),
            ConsistencyViolation::AdmissionRoomMissing { patient_id, room_no } => {
                write!(f, "{} is admitted to missing room {}", patient_id, room_no)
            }
            ConsistencyViolation::AdmissionRoomNotHeld {
                patient_id,
                room_no,
                room_patient,
            } => write!(
                f,
                "{} is admitted to room {} held by {}",
                patient_id,
                room_no,
                room_patient.as_deref().unwrap_or("nobody")
            ),
        }
    }
}
