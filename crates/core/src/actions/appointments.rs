//! Appointment mutation actions.
//!
//! Appointment creation resolves the referenced patient and doctor before
//! inserting, denormalizing their names at creation time and refusing
//! dangling references outright.

use std::sync::Arc;

use crate::actions::fresh_id;
use crate::error::{ActionError, ActionResult};
use crate::models::{Appointment, NewAppointment};
use crate::store::Store;
use crate::validation;

/// Service for appointment CRUD operations.
#[derive(Clone)]
pub struct AppointmentService {
    store: Arc<Store>,
}

impl AppointmentService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Appointment> {
        self.store.appointments.all()
    }

    pub fn get(&self, id: &str) -> Option<Appointment> {
        self.store.appointments.find(id)
    }

    /// Creates an appointment with a fresh id.
    ///
    /// `patientName` and `doctorName` are copied from the referenced records
    /// at creation time.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidInput` on shape failures and
    /// `ActionError::DanglingReference` if `patientId` or `doctorId` does not
    /// resolve to an existing record.
    pub fn add(&self, input: NewAppointment) -> ActionResult<Appointment> {
        validation::validate_new_appointment(&input)?;

        let patient =
            self.store
                .patients
                .find(&input.patient_id)
                .ok_or(ActionError::DanglingReference {
                    entity: "patient",
                    id: input.patient_id.clone(),
                })?;
        let doctor =
            self.store
                .doctors
                .find(&input.doctor_id)
                .ok_or(ActionError::DanglingReference {
                    entity: "doctor",
                    id: input.doctor_id.clone(),
                })?;

        let appointment = Appointment {
            id: fresh_id('A'),
            patient_id: patient.id,
            patient_name: patient.name,
            doctor_id: doctor.id,
            doctor_name: doctor.name,
            date_time: input.date_time,
            kind: input.kind,
            status: input.status,
            notes: input.notes,
        };

        self.store.appointments.insert(appointment.clone());
        tracing::info!(
            appointment_id = %appointment.id,
            patient_id = %appointment.patient_id,
            doctor_id = %appointment.doctor_id,
            "created appointment"
        );
        Ok(appointment)
    }

    /// Replaces the stored appointment record wholesale. The submitted record
    /// is stored exactly as given, including its denormalized name copies.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NotFound` if the id is absent.
    pub fn update(&self, appointment: Appointment) -> ActionResult<Appointment> {
        let stored = self.store.appointments.replace(appointment)?;
        tracing::info!(appointment_id = %stored.id, "updated appointment");
        Ok(stored)
    }

    /// Deletes an appointment. Derived patient and doctor views reflect the
    /// removal immediately since they are recomputed on read.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NotFound` if the id is absent.
    pub fn delete(&self, id: &str) -> ActionResult<()> {
        self.store.appointments.remove(id)?;
        tracing::info!(appointment_id = %id, "deleted appointment");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AppointmentStatus;
    use chrono::Utc;

    fn seeded() -> (Arc<Store>, AppointmentService) {
        let store = Arc::new(Store::seeded());
        let service = AppointmentService::new(store.clone());
        (store, service)
    }

    fn new_appointment(patient_id: &str, doctor_id: &str) -> NewAppointment {
        NewAppointment {
            patient_id: patient_id.into(),
            doctor_id: doctor_id.into(),
            date_time: Utc::now(),
            kind: "Consultation".into(),
            status: AppointmentStatus::Scheduled,
            notes: None,
        }
    }

    #[test]
    fn add_denormalizes_names_from_the_referenced_records() {
        let (_, service) = seeded();
        let created = service
            .add(new_appointment("P005", "D001"))
            .expect("create succeeds");

        assert_eq!(created.patient_name, "Edward Scissorhands");
        assert_eq!(created.doctor_name, "Dr. Eleanor Rigby");
        assert!(created.id.starts_with('A'));
    }

    #[test]
    fn add_rejects_a_dangling_patient_reference() {
        let (store, service) = seeded();
        let before = store.appointments.len();

        let err = service
            .add(new_appointment("P999", "D001"))
            .expect_err("expected dangling reference");
        assert!(matches!(
            err,
            ActionError::DanglingReference { entity: "patient", .. }
        ));
        assert_eq!(store.appointments.len(), before);
    }

    #[test]
    fn add_rejects_a_dangling_doctor_reference() {
        let (_, service) = seeded();
        let err = service
            .add(new_appointment("P001", "D999"))
            .expect_err("expected dangling reference");
        assert!(matches!(
            err,
            ActionError::DanglingReference { entity: "doctor", .. }
        ));
    }

    #[test]
    fn delete_removes_from_global_and_derived_views() {
        let (store, service) = seeded();

        service.delete("A002").expect("delete succeeds");

        assert!(service.get("A002").is_none());
        assert!(store
            .appointments_for_patient("P002")
            .iter()
            .all(|a| a.id != "A002"));
        assert!(store
            .schedule_for_doctor("D004")
            .iter()
            .all(|a| a.id != "A002"));
    }

    #[test]
    fn derived_views_follow_appointment_updates() {
        let (store, service) = seeded();

        // Move A003 from Charlie (P003) to Edward (P005).
        let mut moved = service.get("A003").expect("seeded appointment");
        moved.patient_id = "P005".into();
        moved.patient_name = "Edward Scissorhands".into();
        service.update(moved).expect("update succeeds");

        assert!(store.appointments_for_patient("P003").is_empty());
        assert!(store
            .appointments_for_patient("P005")
            .iter()
            .any(|a| a.id == "A003"));
    }

    #[test]
    fn update_is_a_full_replace() {
        let (_, service) = seeded();
        let mut appointment = service.get("A004").expect("seeded appointment");
        appointment.status = AppointmentStatus::Cancelled;
        appointment.notes = None;

        let stored = service.update(appointment.clone()).expect("update succeeds");
        assert_eq!(stored, appointment);
        assert_eq!(service.get("A004").expect("present"), appointment);
    }

    #[test]
    fn update_unknown_id_fails_and_changes_nothing() {
        let (_, service) = seeded();
        let before = service.list();

        let mut ghost = before[0].clone();
        ghost.id = "A999".into();
        assert!(service.update(ghost).is_err());
        assert_eq!(service.list(), before);
    }
}
