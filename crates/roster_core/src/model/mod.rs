//! Domain model for the company/employee roster.
//!
//! # Responsibility
//! - Define the canonical records managed by the repository layer.
//! - Keep employee records strictly nested inside their owning company.
//!
//! # Invariants
//! - Every record is identified by a stable uuid assigned at creation.
//! - An employee never exists outside a company's roster.

pub mod company;
pub mod employee;
