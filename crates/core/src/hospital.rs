//! Hospital service and related composition.
//!
//! This module provides the main entry point for record operations,
//! bundling the per-entity action services around one shared store.

use std::sync::Arc;

use crate::actions::{AppointmentService, DoctorService, PatientService, RoomService};
use crate::store::Store;

/// Pure record operations over one shared store - no API concerns.
#[derive(Clone)]
pub struct HospitalService {
    pub patients: PatientService,
    pub doctors: DoctorService,
    pub appointments: AppointmentService,
    pub rooms: RoomService,
}

impl HospitalService {
    /// Creates a service bundle over the given store.
    ///
    /// The store is constructed once at process start and handed in here;
    /// services never reach for ambient global state.
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            patients: PatientService::new(store.clone()),
            doctors: DoctorService::new(store.clone()),
            appointments: AppointmentService::new(store.clone()),
            rooms: RoomService::new(store),
        }
    }

    /// Convenience constructor over a freshly seeded store.
    pub fn seeded() -> Self {
        Self::new(Arc::new(Store::seeded()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn services_share_one_store() {
        let hospital = HospitalService::seeded();

        // A delete through the appointment service is visible through the
        // patient service's derived view.
        hospital.appointments.delete("A001").expect("delete succeeds");
        let alice = hospital.patients.get("P001").expect("seeded patient");
        assert!(alice.appointments.iter().all(|a| a.id != "A001"));
    }
}
