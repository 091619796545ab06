//! Input validation for mutation actions.
//!
//! Create and update inputs are shape-checked at the action boundary before
//! touching the store: required text fields must be non-empty and free-text
//! fields are bounded to keep pathological inputs out. Business rules
//! (double-booking, room capacity, and the like) are deliberately not checked
//! here.

use meditrack_types::NonEmptyText;

use crate::error::{ActionError, ActionResult};
use crate::models::{NewAppointment, NewDoctor, NewPatient, Patient};

/// Upper bound for names, specialties and appointment categories.
pub const MAX_NAME_LEN: usize = 120;

/// Upper bound for free-text fields (diagnosis, notes).
pub const MAX_TEXT_LEN: usize = 4_000;

fn require_text(field: &'static str, value: &str, max_len: usize) -> ActionResult<()> {
    NonEmptyText::bounded(value, max_len)
        .map(|_| ())
        .map_err(|e| ActionError::InvalidInput(format!("{field}: {e}")))
}

fn check_optional_text(field: &'static str, value: Option<&str>) -> ActionResult<()> {
    match value {
        Some(text) if text.chars().count() > MAX_TEXT_LEN => Err(ActionError::InvalidInput(
            format!("{field} exceeds maximum length of {MAX_TEXT_LEN} characters"),
        )),
        _ => Ok(()),
    }
}

pub fn validate_new_patient(input: &NewPatient) -> ActionResult<()> {
    require_text("name", &input.name, MAX_NAME_LEN)?;
    check_optional_text("diagnosis", input.diagnosis.as_deref())?;
    check_optional_text("notes", input.notes.as_deref())
}

/// Validates a full patient record submitted for replacement.
pub fn validate_patient(patient: &Patient) -> ActionResult<()> {
    require_text("id", &patient.id, MAX_NAME_LEN)?;
    require_text("name", &patient.name, MAX_NAME_LEN)?;
    check_optional_text("diagnosis", patient.diagnosis.as_deref())?;
    check_optional_text("notes", patient.notes.as_deref())
}

pub fn validate_new_doctor(input: &NewDoctor) -> ActionResult<()> {
    require_text("name", &input.name, MAX_NAME_LEN)?;
    require_text("specialty", &input.specialty, MAX_NAME_LEN)
}

pub fn validate_new_appointment(input: &NewAppointment) -> ActionResult<()> {
    require_text("patientId", &input.patient_id, MAX_NAME_LEN)?;
    require_text("doctorId", &input.doctor_id, MAX_NAME_LEN)?;
    require_text("type", &input.kind, MAX_NAME_LEN)?;
    check_optional_text("notes", input.notes.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentStatus, Urgency};
    use chrono::{NaiveDate, Utc};

    fn new_patient(name: &str) -> NewPatient {
        NewPatient {
            name: name.into(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).expect("valid date"),
            admission_date: NaiveDate::from_ymd_opt(2024, 7, 5).expect("valid date"),
            urgency: Urgency::Low,
            is_flagged: false,
            room_number: None,
            diagnosis: None,
            notes: None,
        }
    }

    #[test]
    fn accepts_a_minimal_patient() {
        validate_new_patient(&new_patient("Zoe")).expect("expected validation to succeed");
    }

    #[test]
    fn rejects_blank_patient_name() {
        let err = validate_new_patient(&new_patient("   ")).expect_err("expected failure");
        assert!(matches!(err, ActionError::InvalidInput(_)));
    }

    #[test]
    fn rejects_overlong_notes() {
        let mut input = new_patient("Zoe");
        input.notes = Some("x".repeat(MAX_TEXT_LEN + 1));
        assert!(validate_new_patient(&input).is_err());
    }

    #[test]
    fn rejects_blank_appointment_category() {
        let input = NewAppointment {
            patient_id: "P001".into(),
            doctor_id: "D001".into(),
            date_time: Utc::now(),
            kind: "".into(),
            status: AppointmentStatus::Scheduled,
            notes: None,
        };
        assert!(validate_new_appointment(&input).is_err());
    }

    #[test]
    fn rejects_blank_doctor_specialty() {
        let input = NewDoctor {
            name: "Dr. New".into(),
            specialty: " ".into(),
        };
        assert!(validate_new_doctor(&input).is_err());
    }
}
