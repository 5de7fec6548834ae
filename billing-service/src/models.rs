use database_layer::RoomType;
use serde::{Deserialize, Serialize};

/// Daily rates and flat fees, in whole rupees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeSchedule {
    pub private_room: i64,
    pub shared_room: i64,
    pub icu_room: i64,
    pub general_room: i64,
    /// Any other room type, or no room at all
    pub default_room: i64,
    pub doctor_fee: i64,
    pub nursing_fee: i64,
    pub service_fee: i64,
}

impl Default for FeeSchedule {
    fn default() -> Self {
        Self {
            private_room: 2500,
            shared_room: 1500,
            icu_room: 5000,
            general_room: 1000,
            default_room: 1200,
            doctor_fee: 700,
            nursing_fee: 400,
            service_fee: 200,
        }
    }
}

impl FeeSchedule {
    pub fn room_rate(&self, room_type: Option<&RoomType>) -> i64 {
        match room_type {
            Some(RoomType::Private) => self.private_room,
            Some(RoomType::Shared) => self.shared_room,
            Some(RoomType::Icu) => self.icu_room,
            Some(RoomType::General) => self.general_room,
            Some(RoomType::Other(_)) | None => self.default_room,
        }
    }
}

/// Itemized bill for one admission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillBreakdown {
    pub patient_id: String,
    pub name: String,
    pub disease: String,
    pub admit_date: String,
    pub doctor_name: String,
    pub room_no: Option<String>,
    /// `None` when the patient has no room or the room no longer exists
    pub room_type: Option<RoomType>,
    pub room_cost: i64,
    pub doctor_fee: i64,
    pub nursing_fee: i64,
    pub service_fee: i64,
    /// Sum of surcharges applied so far
    pub surcharge: i64,
    pub total: i64,
}

impl BillBreakdown {
    /// Charges before any surcharge
    pub fn base_total(&self) -> i64 {
        self.room_cost + self.doctor_fee + self.nursing_fee + self.service_fee
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_room_rates() {
        let fees = FeeSchedule::default();
        assert_eq!(fees.room_rate(Some(&RoomType::Private)), 2500);
        assert_eq!(fees.room_rate(Some(&RoomType::Shared)), 1500);
        assert_eq!(fees.room_rate(Some(&RoomType::Icu)), 5000);
        assert_eq!(fees.room_rate(Some(&RoomType::General)), 1000);
        assert_eq!(fees.room_rate(Some(&RoomType::Other("Deluxe".into()))), 1200);
        assert_eq!(fees.room_rate(None), 1200);
    }

    #[test]
    fn test_partial_schedule_keeps_defaults() {
        let fees: FeeSchedule = serde_json::from_str(r#"{"icu_room": 6000}"#).unwrap();
        assert_eq!(fees.icu_room, 6000);
        assert_eq!(fees.doctor_fee, 700);
    }
}
