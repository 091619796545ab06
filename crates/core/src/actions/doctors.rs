//! Doctor mutation actions.

use std::sync::Arc;

use crate::actions::fresh_id;
use crate::error::ActionResult;
use crate::models::{Doctor, DoctorDetail, NewDoctor};
use crate::store::Store;
use crate::validation;

/// Service for doctor CRUD operations.
#[derive(Clone)]
pub struct DoctorService {
    store: Arc<Store>,
}

impl DoctorService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<Doctor> {
        self.store.doctors.all()
    }

    /// Returns a doctor together with its freshly computed schedule.
    pub fn get(&self, id: &str) -> Option<DoctorDetail> {
        let doctor = self.store.doctors.find(id)?;
        let schedule = self.store.schedule_for_doctor(id);
        Some(DoctorDetail { doctor, schedule })
    }

    /// Creates a doctor with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::InvalidInput` if the input fails shape validation.
    pub fn add(&self, input: NewDoctor) -> ActionResult<Doctor> {
        validation::validate_new_doctor(&input)?;

        let id = fresh_id('D');
        let doctor = Doctor {
            avatar_url: Some(format!("https://picsum.photos/seed/{id}/80/80")),
            id,
            name: input.name,
            specialty: input.specialty,
        };

        self.store.doctors.insert(doctor.clone());
        tracing::info!(doctor_id = %doctor.id, "created doctor");
        Ok(doctor)
    }

    /// Replaces the stored doctor record wholesale.
    ///
    /// Note that a rename does not reconcile the denormalized `doctorName`
    /// copies on existing appointments; those reflect the name at creation
    /// time.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NotFound` if the id is absent.
    pub fn update(&self, doctor: Doctor) -> ActionResult<Doctor> {
        let stored = self.store.doctors.replace(doctor)?;
        tracing::info!(doctor_id = %stored.id, "updated doctor");
        Ok(stored)
    }

    /// Deletes a doctor record.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NotFound` if the id is absent.
    pub fn delete(&self, id: &str) -> ActionResult<()> {
        self.store.doctors.remove(id)?;
        tracing::info!(doctor_id = %id, "deleted doctor");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActionError;

    fn service() -> DoctorService {
        DoctorService::new(Arc::new(Store::seeded()))
    }

    #[test]
    fn add_returns_a_fresh_doctor() {
        let service = service();
        let created = service
            .add(NewDoctor {
                name: "Dr. New".into(),
                specialty: "Radiology".into(),
            })
            .expect("create succeeds");

        assert!(created.id.starts_with('D'));
        assert_eq!(service.list().len(), 5);
        assert!(service.get(&created.id).expect("present").schedule.is_empty());
    }

    #[test]
    fn get_includes_the_derived_schedule() {
        let detail = service().get("D004").expect("seeded doctor");
        assert_eq!(detail.schedule.len(), 3);
        assert!(detail.schedule.iter().all(|a| a.doctor_id == "D004"));
    }

    #[test]
    fn update_unknown_id_fails_and_changes_nothing() {
        let service = service();
        let before = service.list();

        let mut ghost = before[0].clone();
        ghost.id = "D999".into();
        let err = service.update(ghost).expect_err("expected NotFound");
        assert!(matches!(err, ActionError::NotFound { entity: "doctor", .. }));
        assert_eq!(service.list(), before);
    }

    #[test]
    fn delete_then_get_returns_none() {
        let service = service();
        service.delete("D002").expect("delete succeeds");
        assert!(service.get("D002").is_none());
    }
}
