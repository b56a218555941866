//! Company domain model.
//!
//! # Responsibility
//! - Define the company record and its exclusively-owned employee roster.
//! - Provide pure lookup helpers the repository uses to enforce uniqueness.
//!
//! # Invariants
//! - `id` is stable and never reused for another company.
//! - `employees` preserves insertion order; removal keeps the remainder's
//!   relative order.
//! - Employee records are never shared between companies; moving one would be
//!   remove-then-add, never in-place reparenting.

use crate::model::employee::{Employee, EmployeeId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one company record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type CompanyId = Uuid;

/// One company record together with its owned employee roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// Stable global ID used for lookup and external routing.
    pub id: CompanyId,
    /// Unique across all stored companies, exact-match comparison.
    pub name: String,
    /// Insertion-ordered roster, owned exclusively by this company.
    pub employees: Vec<Employee>,
}

impl Company {
    /// Creates a company with a generated stable ID and an empty roster.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name)
    }

    /// Creates a company with a caller-provided stable ID.
    ///
    /// Used by tests and import-style callers where identity already exists.
    pub fn with_id(id: CompanyId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            employees: Vec::new(),
        }
    }

    /// Finds an employee by exact name match.
    pub fn employee_named(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.name == name)
    }

    /// Finds the roster position of an employee by ID.
    pub fn employee_position(&self, id: EmployeeId) -> Option<usize> {
        self.employees.iter().position(|employee| employee.id == id)
    }

    /// Returns the current roster size.
    pub fn headcount(&self) -> usize {
        self.employees.len()
    }
}
