//! Manual room maintenance
//!
//! Rooms only become Occupied through admission. The operations here keep
//! that rule: they never create an occupant, and taking a room out of
//! Occupied also detaches the admission that pointed at it.

use crate::validation::require_text;
use database_layer::{admission_repository, room_repository, DatabaseError, LocalStore, Room, RoomStatus, RoomType};
use error_common::{CareError, CareResult, Entity};
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct RoomService {
    store: LocalStore,
}

impl RoomService {
    pub fn new(store: LocalStore) -> Self {
        Self { store }
    }

    /// Insert or replace a room. Blank type means General.
    pub async fn add_room(&self, room_no: &str, room_type: &str, status: RoomStatus) -> CareResult<Room> {
        let room_no = require_text("Room number", room_no)?;
        if status == RoomStatus::Occupied {
            return Err(CareError::validation(
                "Rooms become Occupied only through admission",
            ));
        }
        let room_type = RoomType::from(room_type);

        let mut tx = self.store.begin().await?;
        if let Some(existing) = room_repository::find(&mut *tx, &room_no).await? {
            if existing.status == RoomStatus::Occupied {
                warn!(room_no = %room_no, "Refusing to replace occupied room");
                return Err(CareError::RoomOccupied(room_no));
            }
        }
        room_repository::upsert(&mut *tx, &room_no, &room_type, status).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        info!(room_no = %room_no, room_type = %room_type, status = %status, "Room saved");
        Ok(Room {
            room_no,
            room_type,
            status,
            patient_id: None,
        })
    }

    /// Change a room's type and status.
    ///
    /// Moving an Occupied room to another status detaches its occupant's
    /// admission in the same transaction.
    pub async fn edit_room(&self, room_no: &str, room_type: &str, status: RoomStatus) -> CareResult<Room> {
        let room_no = room_no.trim();
        let room_type = RoomType::from(room_type);

        let mut tx = self.store.begin().await?;
        let current = room_repository::find(&mut *tx, room_no)
            .await?
            .ok_or_else(|| CareError::not_found(Entity::Room, room_no))?;

        let was_occupied = current.status == RoomStatus::Occupied;
        if status == RoomStatus::Occupied && !was_occupied {
            return Err(CareError::validation(
                "Rooms become Occupied only through admission",
            ));
        }

        let vacating = was_occupied && status != RoomStatus::Occupied;
        if vacating {
            let detached = admission_repository::clear_room(&mut *tx, room_no).await?;
            warn!(room_no = %room_no, detached, "Occupied room vacated by manual edit");
        }

        let clear_patient = vacating || status == RoomStatus::Available;
        room_repository::update(&mut *tx, room_no, &room_type, status, clear_patient).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        info!(room_no = %room_no, room_type = %room_type, status = %status, "Room updated");
        Ok(Room {
            room_no: current.room_no,
            room_type,
            status,
            patient_id: if clear_patient { None } else { current.patient_id },
        })
    }

    pub async fn delete_room(&self, room_no: &str) -> CareResult<()> {
        let room_no = room_no.trim();
        let mut tx = self.store.begin().await?;

        let room = room_repository::find(&mut *tx, room_no)
            .await?
            .ok_or_else(|| CareError::not_found(Entity::Room, room_no))?;
        if room.status == RoomStatus::Occupied {
            warn!(room_no = %room_no, "Refusing to delete occupied room");
            return Err(CareError::RoomOccupied(room.room_no));
        }

        room_repository::delete(&mut *tx, room_no).await?;
        tx.commit().await.map_err(DatabaseError::from)?;

        info!(room_no = %room_no, "Room deleted");
        Ok(())
    }
}
