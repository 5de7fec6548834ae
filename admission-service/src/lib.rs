//! Admission and room consistency services
//!
//! Keeps the `admission` and `rooms` tables in agreement:
//! - a room is `Occupied` exactly when its `patient_id` names a live
//!   admission whose `room_no` is that room
//! - admitting occupies one room, releasing a patient frees it, and both
//!   happen in one transaction with the admission row change
//!
//! Also hosts the doctor/nurse rosters and the read-only census queries the
//! presentation shell renders.

pub mod census;
pub mod id;
pub mod models;
pub mod rooms;
pub mod service;
pub mod staff;
pub mod validation;

pub use census::*;
pub use id::*;
pub use models::*;
pub use rooms::*;
pub use service::*;
pub use staff::*;

use database_layer::LocalStore;

/// All ward services sharing one store handle
pub struct WardServices {
    pub admissions: AdmissionService,
    pub rooms: RoomService,
    pub staff: StaffService,
    pub census: CensusService,
}

impl WardServices {
    pub fn new(store: LocalStore, policy: AdmissionPolicy) -> Self {
        Self {
            admissions: AdmissionService::new(store.clone()).with_policy(policy),
            rooms: RoomService::new(store.clone()),
            staff: StaffService::new(store.clone()),
            census: CensusService::new(store),
        }
    }
}
