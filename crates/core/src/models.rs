//! Entity models for the MediTrack record store.
//!
//! All records serialize with camelCase wire names matching the seed dataset
//! (`dateOfBirth`, `isFlagged`, `patientId`, ...). Optional fields are omitted
//! from JSON when absent.
//!
//! A patient's appointment list and a doctor's schedule are *derived views*:
//! they are never stored on the record itself, only recomputed from the
//! canonical appointment collection at read time (see [`crate::store::Store`]).
//! The detail DTOs in this module carry those computed views to callers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::store::Keyed;

/// Patient triage priority.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Urgency {
    High,
    Medium,
    Low,
}

impl std::str::FromStr for Urgency {
    type Err = crate::ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "High" => Ok(Urgency::High),
            "Medium" => Ok(Urgency::Medium),
            "Low" => Ok(Urgency::Low),
            other => Err(crate::ActionError::InvalidInput(format!(
                "urgency must be High, Medium or Low (got {other:?})"
            ))),
        }
    }
}

/// Lifecycle state of an appointment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum AppointmentStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl Default for AppointmentStatus {
    fn default() -> Self {
        AppointmentStatus::Scheduled
    }
}

/// A patient record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub admission_date: NaiveDate,
    pub urgency: Urgency,
    pub is_flagged: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// A doctor record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// An appointment linking one patient and one doctor.
///
/// `patient_name` and `doctor_name` are denormalized copies resolved from the
/// referenced records when the appointment is created.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    pub patient_id: String,
    pub patient_name: String,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date_time: DateTime<Utc>,
    /// Free-text category, e.g. "Consultation" or "Surgery".
    #[serde(rename = "type")]
    pub kind: String,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A hospital room.
///
/// `is_occupied`, `patient_id` and `patient_name` are kept mutually
/// consistent: a vacant room never carries occupant fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: String,
    pub room_number: String,
    pub is_occupied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    /// Property tags, e.g. `["ICU", "Private"]`.
    pub properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Keyed for Patient {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for Doctor {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Keyed for Room {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Input for creating a patient. The id, avatar and derived appointment list
/// are assigned server-side.
#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub admission_date: NaiveDate,
    pub urgency: Urgency,
    #[serde(default)]
    pub is_flagged: bool,
    #[serde(default)]
    pub room_number: Option<String>,
    #[serde(default)]
    pub diagnosis: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Input for creating a doctor.
#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctor {
    pub name: String,
    pub specialty: String,
}

/// Input for creating an appointment.
///
/// Carries references only; the denormalized `patientName`/`doctorName`
/// copies are resolved from the store at creation time.
#[derive(Clone, Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: String,
    pub doctor_id: String,
    pub date_time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

/// A patient together with its freshly computed appointment list.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatientDetail {
    #[serde(flatten)]
    pub patient: Patient,
    pub appointments: Vec<Appointment>,
}

/// A doctor together with its freshly computed schedule.
#[derive(Clone, Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DoctorDetail {
    #[serde(flatten)]
    pub doctor: Doctor,
    pub schedule: Vec<Appointment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patient_serializes_with_camel_case_wire_names() {
        let patient = Patient {
            id: "P001".into(),
            name: "Alice Wonderland".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 15).expect("valid date"),
            admission_date: NaiveDate::from_ymd_opt(2024, 7, 1).expect("valid date"),
            urgency: Urgency::High,
            is_flagged: true,
            room_number: Some("101A".into()),
            diagnosis: None,
            notes: None,
            avatar_url: None,
        };

        let json = serde_json::to_value(&patient).expect("serialize");
        assert_eq!(json["dateOfBirth"], "1990-05-15");
        assert_eq!(json["isFlagged"], true);
        assert_eq!(json["roomNumber"], "101A");
        // Absent optionals are omitted entirely, matching the original dataset.
        assert!(json.get("diagnosis").is_none());
    }

    #[test]
    fn appointment_kind_uses_type_wire_name() {
        let json = serde_json::json!({
            "patientId": "P001",
            "doctorId": "D003",
            "dateTime": "2024-07-10T09:00:00Z",
            "type": "Surgical Consultation"
        });

        let input: NewAppointment = serde_json::from_value(json).expect("deserialize");
        assert_eq!(input.kind, "Surgical Consultation");
        assert_eq!(input.status, AppointmentStatus::Scheduled);
    }

    #[test]
    fn new_patient_defaults_flag_to_false() {
        let json = serde_json::json!({
            "name": "Zoe",
            "dateOfBirth": "2000-01-01",
            "admissionDate": "2024-07-05",
            "urgency": "Low"
        });

        let input: NewPatient = serde_json::from_value(json).expect("deserialize");
        assert!(!input.is_flagged);
    }

    #[test]
    fn urgency_parses_from_display_strings() {
        assert_eq!("High".parse::<Urgency>().expect("parses"), Urgency::High);
        assert!("urgent".parse::<Urgency>().is_err());
    }
}
