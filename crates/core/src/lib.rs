//! # MediTrack Core
//!
//! Core business logic for the MediTrack Lite hospital management system.
//!
//! This crate contains pure data operations over an in-memory record store:
//! - Patient, doctor, appointment and room collections with linear-scan lookup
//! - Mutation actions with shape validation at the boundary
//! - Derived views (patient appointment lists, doctor schedules) recomputed
//!   from the canonical appointment collection on every read
//! - The fixed seed dataset loaded at process start
//!
//! **No API concerns**: HTTP servers, serial wire envelopes beyond the record
//! shapes, and the summarization provider client live in the `meditrack-run`
//! binary and the `meditrack-ai` crate.

pub mod actions;
pub mod error;
pub mod hospital;
pub mod models;
pub mod seed;
pub mod store;
pub mod validation;

pub use actions::{AppointmentService, DoctorService, PatientService, RoomService};
pub use error::{ActionError, ActionResult};
pub use hospital::HospitalService;
pub use models::{
    Appointment, AppointmentStatus, Doctor, DoctorDetail, NewAppointment, NewDoctor, NewPatient,
    Patient, PatientDetail, Room, Urgency,
};
pub use store::{Collection, Keyed, Store};

pub use meditrack_types::NonEmptyText;
