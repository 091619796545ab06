//! Mutation actions over the record store.
//!
//! One small service per entity type, each holding a shared handle to the
//! [`Store`](crate::store::Store). Every action validates its input shape,
//! generates an id when creating, performs the store operation and returns
//! the resulting record or an [`ActionError`](crate::ActionError). Failures
//! are local to a single invocation; nothing is retried and nothing is fatal
//! to the process.

pub mod appointments;
pub mod doctors;
pub mod patients;
pub mod rooms;

pub use appointments::AppointmentService;
pub use doctors::DoctorService;
pub use patients::PatientService;
pub use rooms::RoomService;

use uuid::Uuid;

/// Generates a fresh record id: the entity prefix letter followed by a
/// 32-hex v4 UUID. Collisions with existing ids are not possible in practice,
/// unlike the random three-digit ids of earlier datasets.
pub(crate) fn fresh_id(prefix: char) -> String {
    format!("{prefix}{}", Uuid::new_v4().simple())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_carry_the_prefix_and_are_unique() {
        let a = fresh_id('P');
        let b = fresh_id('P');
        assert!(a.starts_with('P'));
        assert_eq!(a.len(), 33);
        assert_ne!(a, b);
    }
}
