//! Patient mutation actions.

use std::sync::Arc;

use crate::actions::fresh_id;
use crate::error::ActionResult;
use crate::models::{NewPatient, Patient, PatientDetail};
use crate::store::Store;
use crate::validation;

/// Service for patient CRUD operations.
#[derive(Clone)]
pub struct PatientService {
    store: Arc<Store>,
}

impl PatientService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Lists all patients in insertion order.
    pub fn list(&self) -> Vec<Patient> {
        self.store.patients.all()
    }

    /// Returns a patient together with its freshly computed appointment list.
    pub fn get(&self, id: &str) -> Option<PatientDetail> {
        let patient = self.store.patients.find(id)?;
        let appointments = self.store.appointments_for_patient(id);
        Some(PatientDetail {
            patient,
            appointments,
        })
    }

    /// Creates a patient with a fresh id and a deterministic avatar seed.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidInput` if the input fails shape validation.
    pub fn add(&self, input: NewPatient) -> ActionResult<Patient> {
        validation::validate_new_patient(&input)?;

        let id = fresh_id('P');
        let patient = Patient {
            avatar_url: Some(format!("https://picsum.photos/seed/{id}/80/80")),
            id,
            name: input.name,
            date_of_birth: input.date_of_birth,
            admission_date: input.admission_date,
            urgency: input.urgency,
            is_flagged: input.is_flagged,
            room_number: input.room_number,
            diagnosis: input.diagnosis,
            notes: input.notes,
        };

        self.store.patients.insert(patient.clone());
        tracing::info!(patient_id = %patient.id, "created patient");
        Ok(patient)
    }

    /// Replaces the stored patient record wholesale. No field merging.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidInput` on shape failures and
    /// `ActionError::NotFound` if the id is absent.
    pub fn update(&self, patient: Patient) -> ActionResult<Patient> {
        validation::validate_patient(&patient)?;
        let stored = self.store.patients.replace(patient)?;
        tracing::info!(patient_id = %stored.id, "updated patient");
        Ok(stored)
    }

    /// Deletes a patient record.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NotFound` if the id is absent.
    pub fn delete(&self, id: &str) -> ActionResult<()> {
        self.store.patients.remove(id)?;
        tracing::info!(patient_id = %id, "deleted patient");
        Ok(())
    }
}
