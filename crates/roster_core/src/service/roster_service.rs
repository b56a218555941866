//! Roster use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for callers such as an HTTP layer.
//! - Delegate storage to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository uniqueness/identity contracts.
//! - Service layer remains storage-agnostic.

use crate::model::company::{Company, CompanyId};
use crate::model::employee::{Employee, EmployeeId};
use crate::repo::company_repo::{CompanyRepository, PageQuery, RepoResult};

/// Use-case service wrapper for roster operations.
pub struct RosterService<R: CompanyRepository> {
    repo: R,
}

/// Request model for adding one employee to a company.
#[derive(Debug, Clone, PartialEq)]
pub struct AddEmployeeRequest {
    /// Employee name, unique within the target company.
    pub name: String,
    /// Caller-supplied salary, stored without constraint.
    pub salary: f64,
}

impl<R: CompanyRepository> RosterService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates a company with a fresh identity.
    ///
    /// Returns `DuplicateCompanyName` unchanged when the name is taken.
    pub fn create_company(&self, name: &str) -> RepoResult<Company> {
        self.repo.create_company(name)
    }

    /// Gets one company by stable ID.
    pub fn get_company(&self, id: CompanyId) -> RepoResult<Company> {
        self.repo.get_company(id)
    }

    /// Lists all companies in insertion order.
    pub fn list_companies(&self) -> RepoResult<Vec<Company>> {
        self.repo.list_companies()
    }

    /// Lists one page of companies.
    ///
    /// # Contract
    /// - `query.page_index` is 1-based.
    /// - Pages past the end are empty, never an error.
    pub fn page_companies(&self, query: &PageQuery) -> RepoResult<Vec<Company>> {
        self.repo.page_companies(query)
    }

    /// Renames an existing company; ID and roster are unaffected.
    pub fn rename_company(&self, id: CompanyId, new_name: &str) -> RepoResult<Company> {
        self.repo.rename_company(id, new_name)
    }

    /// Clears the whole store, nested rosters included. Idempotent.
    pub fn reset(&self) -> RepoResult<()> {
        self.repo.reset()
    }

    /// Adds one employee to the company's roster.
    ///
    /// # Contract
    /// - An unknown company fails with `CompanyNotFound` before the roster
    ///   is consulted.
    /// - A name already on that roster fails with `DuplicateEmployeeName`.
    pub fn add_employee(
        &self,
        company_id: CompanyId,
        request: &AddEmployeeRequest,
    ) -> RepoResult<Employee> {
        self.repo
            .add_employee(company_id, &request.name, request.salary)
    }

    /// Lists one company's roster in insertion order.
    pub fn list_employees(&self, company_id: CompanyId) -> RepoResult<Vec<Employee>> {
        self.repo.list_employees(company_id)
    }

    /// Removes one employee from the company's roster.
    pub fn remove_employee(
        &self,
        company_id: CompanyId,
        employee_id: EmployeeId,
    ) -> RepoResult<()> {
        self.repo.remove_employee(company_id, employee_id)
    }
}
