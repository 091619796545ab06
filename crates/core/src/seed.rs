//! The fixed seed dataset.
//!
//! Every process start reseeds the store with the same literal records:
//! 5 patients, 4 doctors, 6 rooms and 6 appointments, cross-linked by id.
//! Appointment instants are expressed relative to the current time so the
//! dataset always contains a mix of past and upcoming appointments.
//!
//! Derived views are never materialised here; patient appointment lists and
//! doctor schedules are always computed from the appointment collection on
//! read.

use chrono::{Days, NaiveDate, Utc};

use crate::models::{Appointment, AppointmentStatus, Doctor, Patient, Room, Urgency};
use crate::store::{Collection, Store};

// All inputs are literal constants, so failure here is a programming error.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid seed date literal")
}

fn avatar(seed: &str) -> Option<String> {
    Some(format!("https://picsum.photos/seed/{seed}/80/80"))
}

fn room_image(seed: &str) -> Option<String> {
    Some(format!("https://picsum.photos/seed/{seed}/400/300"))
}

fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: "P001".into(),
            name: "Alice Wonderland".into(),
            date_of_birth: date(1990, 5, 15),
            admission_date: date(2024, 7, 1),
            urgency: Urgency::High,
            is_flagged: true,
            room_number: Some("101A".into()),
            diagnosis: Some("Acute Appendicitis".into()),
            notes: Some(
                "Patient presented with severe abdominal pain. History of mild asthma. \
                 Needs urgent surgical consultation."
                    .into(),
            ),
            avatar_url: avatar("alice"),
        },
        Patient {
            id: "P002".into(),
            name: "Bob The Builder".into(),
            date_of_birth: date(1985, 8, 20),
            admission_date: date(2024, 7, 2),
            urgency: Urgency::Medium,
            is_flagged: false,
            room_number: Some("102B".into()),
            diagnosis: Some("Common Cold".into()),
            notes: Some("Mild fever and cough. Prescribed rest and fluids.".into()),
            avatar_url: avatar("bob"),
        },
        Patient {
            id: "P003".into(),
            name: "Charlie Brown".into(),
            date_of_birth: date(2005, 1, 10),
            admission_date: date(2024, 6, 28),
            urgency: Urgency::Low,
            is_flagged: false,
            room_number: Some("103C".into()),
            diagnosis: Some("Routine Checkup".into()),
            notes: Some("Annual physical examination. All vitals normal.".into()),
            avatar_url: avatar("charlie"),
        },
        Patient {
            id: "P004".into(),
            name: "Diana Prince".into(),
            date_of_birth: date(1978, 11, 3),
            admission_date: date(2024, 7, 3),
            urgency: Urgency::High,
            is_flagged: true,
            room_number: Some("201A (ICU)".into()),
            diagnosis: Some("Cardiac Arrhythmia".into()),
            notes: Some(
                "Patient experienced sudden palpitations. ECG shows irregularities. \
                 Monitoring in ICU."
                    .into(),
            ),
            avatar_url: avatar("diana"),
        },
        Patient {
            id: "P005".into(),
            name: "Edward Scissorhands".into(),
            date_of_birth: date(1992, 3, 25),
            admission_date: date(2024, 7, 4),
            urgency: Urgency::Medium,
            is_flagged: false,
            room_number: None,
            diagnosis: Some("Minor Lacerations".into()),
            notes: Some(
                "Small cuts on hands. Cleaned and dressed. Tetanus shot administered.".into(),
            ),
            avatar_url: avatar("edward"),
        },
    ]
}

fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "D001".into(),
            name: "Dr. Eleanor Rigby".into(),
            specialty: "Cardiology".into(),
            avatar_url: avatar("drrigby"),
        },
        Doctor {
            id: "D002".into(),
            name: "Dr. Gregory House".into(),
            specialty: "Diagnostics".into(),
            avatar_url: avatar("drhouse"),
        },
        Doctor {
            id: "D003".into(),
            name: "Dr. Meredith Grey".into(),
            specialty: "General Surgery".into(),
            avatar_url: avatar("drgrey"),
        },
        Doctor {
            id: "D004".into(),
            name: "Dr. John Watson".into(),
            specialty: "General Practice".into(),
            avatar_url: avatar("drwatson"),
        },
    ]
}

fn seed_rooms() -> Vec<Room> {
    vec![
        Room {
            id: "R101A".into(),
            room_number: "101A".into(),
            is_occupied: true,
            patient_id: Some("P001".into()),
            patient_name: Some("Alice Wonderland".into()),
            properties: vec!["Private".into(), "Oxygen".into()],
            image_url: room_image("room101A"),
        },
        Room {
            id: "R102B".into(),
            room_number: "102B".into(),
            is_occupied: true,
            patient_id: Some("P002".into()),
            patient_name: Some("Bob The Builder".into()),
            properties: vec!["Semi-Private".into(), "TV".into()],
            image_url: room_image("room102B"),
        },
        Room {
            id: "R103C".into(),
            room_number: "103C".into(),
            is_occupied: true,
            patient_id: Some("P003".into()),
            patient_name: Some("Charlie Brown".into()),
            properties: vec!["Ward".into(), "Window".into()],
            image_url: room_image("room103C"),
        },
        Room {
            id: "R201A".into(),
            room_number: "201A (ICU)".into(),
            is_occupied: true,
            patient_id: Some("P004".into()),
            patient_name: Some("Diana Prince".into()),
            properties: vec!["ICU".into(), "Ventilator".into(), "Monitor".into()],
            image_url: room_image("room201A"),
        },
        Room {
            id: "R202B".into(),
            room_number: "202B".into(),
            is_occupied: false,
            patient_id: None,
            patient_name: None,
            properties: vec!["Private".into(), "Balcony".into()],
            image_url: room_image("room202B"),
        },
        Room {
            id: "R203C".into(),
            room_number: "203C (Isolation)".into(),
            is_occupied: false,
            patient_id: None,
            patient_name: None,
            properties: vec!["Isolation".into(), "Negative Pressure".into()],
            image_url: room_image("room203C"),
        },
    ]
}

fn seed_appointments() -> Vec<Appointment> {
    let now = Utc::now();
    let days_ahead = |days: u64| now.checked_add_days(Days::new(days)).unwrap_or(now);
    let days_ago = |days: u64| now.checked_sub_days(Days::new(days)).unwrap_or(now);

    vec![
        Appointment {
            id: "A001".into(),
            patient_id: "P001".into(),
            patient_name: "Alice Wonderland".into(),
            doctor_id: "D003".into(),
            doctor_name: "Dr. Meredith Grey".into(),
            date_time: days_ahead(2),
            kind: "Surgical Consultation".into(),
            status: AppointmentStatus::Scheduled,
            notes: Some("Pre-surgery assessment for appendectomy.".into()),
        },
        Appointment {
            id: "A002".into(),
            patient_id: "P002".into(),
            patient_name: "Bob The Builder".into(),
            doctor_id: "D004".into(),
            doctor_name: "Dr. John Watson".into(),
            date_time: days_ago(1),
            kind: "Follow-up".into(),
            status: AppointmentStatus::Completed,
            notes: Some("Patient recovering well. Symptoms subsided.".into()),
        },
        Appointment {
            id: "A003".into(),
            patient_id: "P003".into(),
            patient_name: "Charlie Brown".into(),
            doctor_id: "D004".into(),
            doctor_name: "Dr. John Watson".into(),
            date_time: days_ahead(5),
            kind: "Routine Checkup".into(),
            status: AppointmentStatus::Scheduled,
            notes: None,
        },
        Appointment {
            id: "A004".into(),
            patient_id: "P004".into(),
            patient_name: "Diana Prince".into(),
            doctor_id: "D001".into(),
            doctor_name: "Dr. Eleanor Rigby".into(),
            date_time: days_ahead(1),
            kind: "Cardiology Review".into(),
            status: AppointmentStatus::Scheduled,
            notes: Some("Review ECG results and adjust medication if needed.".into()),
        },
        Appointment {
            id: "A005".into(),
            patient_id: "P001".into(),
            patient_name: "Alice Wonderland".into(),
            doctor_id: "D004".into(),
            doctor_name: "Dr. John Watson".into(),
            date_time: days_ago(7),
            kind: "Initial Consultation".into(),
            status: AppointmentStatus::Completed,
            notes: Some("Initial check for abdominal pain.".into()),
        },
        Appointment {
            id: "A006".into(),
            patient_id: "P005".into(),
            patient_name: "Edward Scissorhands".into(),
            doctor_id: "D003".into(),
            doctor_name: "Dr. Meredith Grey".into(),
            date_time: days_ahead(3),
            kind: "Wound Care".into(),
            status: AppointmentStatus::Scheduled,
            notes: Some("Check healing of lacerations.".into()),
        },
    ]
}

/// Builds a store populated with the fixed seed dataset.
pub fn seeded_store() -> Store {
    Store {
        patients: Collection::with_items("patient", seed_patients()),
        doctors: Collection::with_items("doctor", seed_doctors()),
        appointments: Collection::with_items("appointment", seed_appointments()),
        rooms: Collection::with_items("room", seed_rooms()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_counts_match_the_dataset() {
        let store = seeded_store();
        assert_eq!(store.patients.len(), 5);
        assert_eq!(store.doctors.len(), 4);
        assert_eq!(store.rooms.len(), 6);
        assert_eq!(store.appointments.len(), 6);
    }

    #[test]
    fn every_appointment_reference_resolves() {
        let store = seeded_store();
        for appointment in store.appointments.all() {
            let patient = store
                .patients
                .find(&appointment.patient_id)
                .expect("seed appointment references an existing patient");
            let doctor = store
                .doctors
                .find(&appointment.doctor_id)
                .expect("seed appointment references an existing doctor");
            assert_eq!(appointment.patient_name, patient.name);
            assert_eq!(appointment.doctor_name, doctor.name);
        }
    }

    #[test]
    fn room_occupancy_fields_are_mutually_consistent() {
        let store = seeded_store();
        for room in store.rooms.all() {
            if room.is_occupied {
                let patient_id = room.patient_id.as_deref().expect("occupied room has patient id");
                let patient = store
                    .patients
                    .find(patient_id)
                    .expect("occupant exists in patient collection");
                assert_eq!(room.patient_name.as_deref(), Some(patient.name.as_str()));
            } else {
                assert!(room.patient_id.is_none());
                assert!(room.patient_name.is_none());
            }
        }
    }

    #[test]
    fn derived_views_are_populated_from_the_canonical_collection() {
        let store = seeded_store();
        let alice = store.appointments_for_patient("P001");
        assert_eq!(alice.len(), 2);
        let watson = store.schedule_for_doctor("D004");
        assert_eq!(watson.len(), 3);
    }
}
