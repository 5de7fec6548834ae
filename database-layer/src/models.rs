// Record store models
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DatabaseError;

/// Patient gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
        }
    }
}

impl FromStr for Gender {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(DatabaseError::Decode(format!("Unknown gender: {}", s))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room occupancy status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    Available,
    Occupied,
    /// Only reachable through a manual room edit
    Cleaning,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Available => "Available",
            RoomStatus::Occupied => "Occupied",
            RoomStatus::Cleaning => "Cleaning",
        }
    }
}

impl FromStr for RoomStatus {
    type Err = DatabaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "available" => Ok(RoomStatus::Available),
            "occupied" => Ok(RoomStatus::Occupied),
            "cleaning" => Ok(RoomStatus::Cleaning),
            _ => Err(DatabaseError::Decode(format!("Unknown room status: {}", s))),
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Room price tier. Unrecognized text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomType {
    Private,
    Shared,
    Icu,
    General,
    Other(String),
}

impl RoomType {
    pub fn as_str(&self) -> &str {
        match self {
            RoomType::Private => "Private",
            RoomType::Shared => "Shared",
            RoomType::Icu => "ICU",
            RoomType::General => "General",
            RoomType::Other(text) => text,
        }
    }
}

impl From<&str> for RoomType {
    /// Blank text means `General`
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "" | "general" => RoomType::General,
            "private" => RoomType::Private,
            "shared" => RoomType::Shared,
            "icu" => RoomType::Icu,
            _ => RoomType::Other(trimmed.to_string()),
        }
    }
}

impl From<String> for RoomType {
    fn from(s: String) -> Self {
        RoomType::from(s.as_str())
    }
}

impl From<RoomType> for String {
    fn from(room_type: RoomType) -> Self {
        room_type.as_str().to_string()
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Patient fields collected at admission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub age: u32,
    pub contact: String,
    pub gender: Gender,
    pub disease: String,
    pub blood_group: String,
}

/// Live admission row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    pub id: i64,
    pub patient_id: String,
    pub name: String,
    /// `None` when a legacy row holds something other than a number
    pub age: Option<u32>,
    pub contact: String,
    pub gender: Gender,
    pub disease: String,
    /// `YYYY-MM-DD HH:MM`, local time
    pub admit_date: String,
    pub blood_group: String,
    pub doctor_name: String,
    pub room_no: Option<String>,
}

/// Admission list entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdmissionSummary {
    pub patient_id: String,
    pub name: String,
    pub disease: String,
    pub doctor_name: String,
    pub room_no: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub room_no: String,
    pub room_type: RoomType,
    pub status: RoomStatus,
    pub patient_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub contact: String,
    pub shift: String,
    pub photo_path: Option<String>,
}

/// Doctor fields for insert and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub name: String,
    pub specialization: String,
    pub contact: String,
    pub shift: String,
    pub photo_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Nurse {
    pub id: i64,
    pub name: String,
    pub contact: String,
    pub shift: String,
    pub photo_path: Option<String>,
}

/// Nurse fields for insert and update
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NurseRecord {
    pub name: String,
    pub contact: String,
    pub shift: String,
    pub photo_path: Option<String>,
}

/// Append-only nursing note attached to a patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NurseTreatment {
    pub id: i64,
    pub patient_id: String,
    pub nurse_name: String,
    pub nurse_notes: String,
    pub shift: String,
    pub prescription: String,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_type_parsing() {
        assert_eq!(RoomType::from("ICU"), RoomType::Icu);
        assert_eq!(RoomType::from("icu"), RoomType::Icu);
        assert_eq!(RoomType::from(" Private "), RoomType::Private);
        assert_eq!(RoomType::from(""), RoomType::General);
        assert_eq!(RoomType::from("Deluxe"), RoomType::Other("Deluxe".to_string()));
        assert_eq!(RoomType::Other("Deluxe".to_string()).as_str(), "Deluxe");
    }

    #[test]
    fn test_status_and_gender_parsing() {
        assert_eq!("Occupied".parse::<RoomStatus>().unwrap(), RoomStatus::Occupied);
        assert_eq!("cleaning".parse::<RoomStatus>().unwrap(), RoomStatus::Cleaning);
        assert!("Closed".parse::<RoomStatus>().is_err());
        assert_eq!("female".parse::<Gender>().unwrap(), Gender::Female);
        assert!("unknown".parse::<Gender>().is_err());
    }

    #[test]
    fn test_room_type_serializes_as_text() {
        let json = serde_json::to_string(&RoomType::Icu).unwrap();
        assert_eq!(json, "\"ICU\"");
        let back: RoomType = serde_json::from_str("\"Suite\"").unwrap();
        assert_eq!(back, RoomType::Other("Suite".to_string()));
    }
}
