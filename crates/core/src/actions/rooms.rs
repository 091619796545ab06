//! Room occupancy actions.
//!
//! Rooms are seeded, never created or deleted through the API. The one
//! mutation is the occupancy update, which always sets `isOccupied`,
//! `patientId` and `patientName` together: an occupant is named by patient id
//! and the display name is resolved from the patient collection, so the
//! denormalized copy cannot be set independently of the reference.

use std::sync::Arc;

use crate::error::{ActionError, ActionResult};
use crate::models::Room;
use crate::store::Store;

/// Service for room operations.
#[derive(Clone)]
pub struct RoomService {
    store: Arc<Store>,
}

impl RoomService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Room> {
        self.store.rooms.all()
    }

    pub fn get(&self, id: &str) -> Option<Room> {
        self.store.rooms.find(id)
    }

    /// Sets a room's occupancy.
    ///
    /// With `Some(patient_id)` the room becomes occupied and both occupant
    /// fields are filled from the referenced patient. With `None` the room
    /// becomes vacant and both occupant fields are cleared.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NotFound` if the room id is absent and
    /// `ActionError::DanglingReference` if the occupant patient id does not
    /// resolve.
    pub fn set_occupancy(&self, room_id: &str, occupant: Option<&str>) -> ActionResult<Room> {
        let mut room = self
            .store
            .rooms
            .find(room_id)
            .ok_or(ActionError::NotFound {
                entity: "room",
                id: room_id.to_string(),
            })?;

        match occupant {
            Some(patient_id) => {
                let patient =
                    self.store
                        .patients
                        .find(patient_id)
                        .ok_or(ActionError::DanglingReference {
                            entity: "patient",
                            id: patient_id.to_string(),
                        })?;
                room.is_occupied = true;
                room.patient_id = Some(patient.id);
                room.patient_name = Some(patient.name);
            }
            None => {
                room.is_occupied = false;
                room.patient_id = None;
                room.patient_name = None;
            }
        }

        let stored = self.store.rooms.replace(room)?;
        tracing::info!(
            room_id = %stored.id,
            is_occupied = stored.is_occupied,
            "updated room occupancy"
        );
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> RoomService {
        RoomService::new(Arc::new(Store::seeded()))
    }

    #[test]
    fn occupying_a_room_sets_all_three_fields_together() {
        let service = service();
        let room = service
            .set_occupancy("R202B", Some("P005"))
            .expect("occupancy update succeeds");

        assert!(room.is_occupied);
        assert_eq!(room.patient_id.as_deref(), Some("P005"));
        assert_eq!(room.patient_name.as_deref(), Some("Edward Scissorhands"));
    }

    #[test]
    fn vacating_a_room_clears_all_three_fields_together() {
        let service = service();
        let room = service
            .set_occupancy("R101A", None)
            .expect("occupancy update succeeds");

        assert!(!room.is_occupied);
        assert!(room.patient_id.is_none());
        assert!(room.patient_name.is_none());
    }

    #[test]
    fn occupying_with_an_unknown_patient_is_rejected() {
        let service = service();
        let err = service
            .set_occupancy("R202B", Some("P999"))
            .expect_err("expected dangling reference");
        assert!(matches!(
            err,
            ActionError::DanglingReference { entity: "patient", .. }
        ));

        // The room is untouched on failure.
        let room = service.get("R202B").expect("room present");
        assert!(!room.is_occupied);
    }

    #[test]
    fn unknown_room_is_not_found() {
        let err = service()
            .set_occupancy("R999", None)
            .expect_err("expected NotFound");
        assert!(matches!(err, ActionError::NotFound { entity: "room", .. }));
    }
}
