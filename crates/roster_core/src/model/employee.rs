//! Employee domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = Uuid;

/// One employee record, owned by exactly one company roster.
///
/// `salary` is caller-supplied and deliberately unconstrained: zero and
/// negative values are stored as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable global ID, never reused for another employee.
    pub id: EmployeeId,
    /// Unique within the owning company only, exact-match comparison.
    pub name: String,
    /// Plain numeric value, no domain constraint.
    pub salary: f64,
}

impl Employee {
    /// Creates an employee with a generated stable ID.
    pub fn new(name: impl Into<String>, salary: f64) -> Self {
        Self::with_id(Uuid::new_v4(), name, salary)
    }

    /// Creates an employee with a caller-provided stable ID.
    ///
    /// Used by tests and import-style callers where identity already exists.
    pub fn with_id(id: EmployeeId, name: impl Into<String>, salary: f64) -> Self {
        Self {
            id,
            name: name.into(),
            salary,
        }
    }
}
