//! Process-lifetime instance identifier.

use std::fmt;

use uuid::Uuid;

/// Opaque, globally-unique token identifying one process run.
///
/// Generated exactly once at startup and immutable for the process lifetime.
/// Used only for display — there is no persistence and no uniqueness
/// guarantee across processes beyond what a random (version 4) UUID gives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Canonical lowercase hyphenated form, e.g.
        // 3fa85f64-5717-4562-b3fc-2c963f66afa6
        self.0.fmt(f)
    }
}
