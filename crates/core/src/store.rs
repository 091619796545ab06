//! The in-memory record store.
//!
//! MediTrack holds all records in process-wide memory: four collections
//! (patients, doctors, appointments, rooms) behind one [`Store`] constructed
//! once at startup and shared via `Arc`. Restarting the process resets the
//! data to the fixed seed dataset.
//!
//! Each collection is a plain `Vec` behind its own `RwLock`; lookups are
//! linear scans, which is all this data scale needs. There are no
//! cross-collection transactions: two callers racing on the same id get
//! last-writer-wins semantics.
//!
//! ## Derived views
//!
//! A patient's appointment list and a doctor's schedule are recomputed by
//! filtering the canonical appointment collection on every read, never cached
//! on the owning record. This keeps the views correct across appointment
//! updates and deletes without reconciliation bookkeeping.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{ActionError, ActionResult};
use crate::models::{Appointment, Doctor, Patient, Room};

/// Records that can be stored in a [`Collection`], keyed by a unique string id.
pub trait Keyed {
    fn id(&self) -> &str;
}

/// A named, lock-guarded collection of records.
pub struct Collection<T> {
    entity: &'static str,
    items: RwLock<Vec<T>>,
}

impl<T: Keyed + Clone> Collection<T> {
    /// Creates an empty collection. `entity` names the record type in errors.
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Creates a collection pre-populated with `items`.
    pub fn with_items(entity: &'static str, items: Vec<T>) -> Self {
        Self {
            entity,
            items: RwLock::new(items),
        }
    }

    /// The entity name used in NotFound errors, e.g. `"patient"`.
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    // A poisoned lock means another request panicked mid-write. The data is
    // plain records with no multi-step invariants inside one collection, so
    // recovering the guard is safe and keeps the store available.
    fn read(&self) -> RwLockReadGuard<'_, Vec<T>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<T>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the record with the given id, if present.
    pub fn find(&self, id: &str) -> Option<T> {
        self.read().iter().find(|r| r.id() == id).cloned()
    }

    /// Whether a record with the given id is present.
    pub fn contains(&self, id: &str) -> bool {
        self.read().iter().any(|r| r.id() == id)
    }

    /// Appends a record. The caller supplies a fresh id.
    pub fn insert(&self, record: T) {
        self.write().push(record);
    }

    /// Overwrites the stored record whose id matches `record.id()`.
    ///
    /// Full-record replace: no partial-field merge happens.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NotFound` if no record carries that id; the
    /// collection is left unchanged.
    pub fn replace(&self, record: T) -> ActionResult<T> {
        let mut items = self.write();
        match items.iter_mut().find(|r| r.id() == record.id()) {
            Some(slot) => {
                *slot = record.clone();
                Ok(record)
            }
            None => Err(ActionError::NotFound {
                entity: self.entity,
                id: record.id().to_string(),
            }),
        }
    }

    /// Removes and returns the record with the given id.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::NotFound` if the id is absent; the collection is
    /// left unchanged.
    pub fn remove(&self, id: &str) -> ActionResult<T> {
        let mut items = self.write();
        match items.iter().position(|r| r.id() == id) {
            Some(index) => Ok(items.remove(index)),
            None => Err(ActionError::NotFound {
                entity: self.entity,
                id: id.to_string(),
            }),
        }
    }

    /// Returns a snapshot of all records in insertion order.
    pub fn all(&self) -> Vec<T> {
        self.read().clone()
    }

    /// Returns a snapshot of the records matching `predicate`.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.read().iter().filter(|r| predicate(r)).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
}

/// The four record collections, owned together and shared via `Arc`.
pub struct Store {
    pub patients: Collection<Patient>,
    pub doctors: Collection<Doctor>,
    pub appointments: Collection<Appointment>,
    pub rooms: Collection<Room>,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self {
            patients: Collection::new("patient"),
            doctors: Collection::new("doctor"),
            appointments: Collection::new("appointment"),
            rooms: Collection::new("room"),
        }
    }

    /// Creates a store populated with the fixed seed dataset.
    pub fn seeded() -> Self {
        crate::seed::seeded_store()
    }

    /// Computes a patient's appointment list by filtering the canonical
    /// appointment collection.
    pub fn appointments_for_patient(&self, patient_id: &str) -> Vec<Appointment> {
        self.appointments.filter(|a| a.patient_id == patient_id)
    }

    /// Computes a doctor's schedule by filtering the canonical appointment
    /// collection.
    pub fn schedule_for_doctor(&self, doctor_id: &str) -> Vec<Appointment> {
        self.appointments.filter(|a| a.doctor_id == doctor_id)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
