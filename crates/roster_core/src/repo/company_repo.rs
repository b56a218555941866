//! Company repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and paging APIs over the company sequence.
//! - Enforce name uniqueness: global for companies, per-company for
//!   employees.
//!
//! # Invariants
//! - The company sequence preserves insertion order; paging never reorders.
//! - Identity is assigned exactly once, at creation, and never changes.
//! - Check-then-append and locate-then-mutate: a failed operation has made
//!   no change.

use crate::model::company::{Company, CompanyId};
use crate::model::employee::{Employee, EmployeeId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

pub type RepoResult<T> = Result<T, RepoError>;

/// Semantic error for repository operations.
///
/// Every variant is a recoverable caller-facing condition; none is fatal and
/// none is retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// A company with this exact name is already stored.
    DuplicateCompanyName(String),
    /// The target company already has an employee with this exact name.
    DuplicateEmployeeName { company: CompanyId, name: String },
    /// No stored company has this ID.
    CompanyNotFound(CompanyId),
    /// The company exists but has no employee with this ID.
    EmployeeNotFound {
        company: CompanyId,
        employee: EmployeeId,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCompanyName(name) => {
                write!(f, "company name already in use: {name}")
            }
            Self::DuplicateEmployeeName { company, name } => {
                write!(f, "employee name already in use in company {company}: {name}")
            }
            Self::CompanyNotFound(id) => write!(f, "company not found: {id}"),
            Self::EmployeeNotFound { company, employee } => {
                write!(f, "employee not found in company {company}: {employee}")
            }
        }
    }
}

impl Error for RepoError {}

/// Selects one page of the company sequence.
///
/// `page_index` is 1-based. Both values must be positive; the caller is
/// responsible for falling back to the unpaged listing when either is
/// omitted. Degenerate inputs select an empty page rather than erroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// Maximum number of companies in the page.
    pub page_size: u32,
    /// 1-based page number.
    pub page_index: u32,
}

/// Repository interface for company and nested employee operations.
pub trait CompanyRepository {
    /// Creates one company with a fresh identity and an empty roster.
    fn create_company(&self, name: &str) -> RepoResult<Company>;
    /// Loads one company by ID.
    fn get_company(&self, id: CompanyId) -> RepoResult<Company>;
    /// Lists all companies in insertion order.
    fn list_companies(&self) -> RepoResult<Vec<Company>>;
    /// Lists one page of companies; out-of-range pages are empty, not errors.
    fn page_companies(&self, query: &PageQuery) -> RepoResult<Vec<Company>>;
    /// Replaces one company's name in place, keeping ID and roster.
    fn rename_company(&self, id: CompanyId, new_name: &str) -> RepoResult<Company>;
    /// Clears every company and, with them, every nested employee.
    fn reset(&self) -> RepoResult<()>;
    /// Appends one employee to a company's roster.
    fn add_employee(&self, company_id: CompanyId, name: &str, salary: f64)
        -> RepoResult<Employee>;
    /// Lists one company's roster in insertion order.
    fn list_employees(&self, company_id: CompanyId) -> RepoResult<Vec<Employee>>;
    /// Removes one employee, preserving the remainder's relative order.
    fn remove_employee(&self, company_id: CompanyId, employee_id: EmployeeId) -> RepoResult<()>;
}

/// In-memory company repository.
///
/// State lives behind one reader/writer lock per store instance: reads share
/// the lock, mutations take it exclusively. The store starts empty and holds
/// nothing outside process memory.
#[derive(Debug, Default)]
pub struct InMemoryCompanyRepository {
    companies: RwLock<Vec<Company>>,
}

impl InMemoryCompanyRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // A poisoned lock still holds coherent data: no operation can panic with
    // a mutation half-applied, so the guard is recovered instead of bubbling
    // the poison to every caller.
    fn read_guard(&self) -> RwLockReadGuard<'_, Vec<Company>> {
        self.companies.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, Vec<Company>> {
        self.companies
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl CompanyRepository for InMemoryCompanyRepository {
    fn create_company(&self, name: &str) -> RepoResult<Company> {
        let mut companies = self.write_guard();
        if companies.iter().any(|company| company.name == name) {
            return Err(RepoError::DuplicateCompanyName(name.to_string()));
        }

        let company = Company::new(name);
        companies.push(company.clone());
        debug!(
            "event=company_created module=repo status=ok company={} total={}",
            company.id,
            companies.len()
        );
        Ok(company)
    }

    fn get_company(&self, id: CompanyId) -> RepoResult<Company> {
        self.read_guard()
            .iter()
            .find(|company| company.id == id)
            .cloned()
            .ok_or(RepoError::CompanyNotFound(id))
    }

    fn list_companies(&self) -> RepoResult<Vec<Company>> {
        Ok(self.read_guard().clone())
    }

    fn page_companies(&self, query: &PageQuery) -> RepoResult<Vec<Company>> {
        let companies = self.read_guard();
        Ok(page_slice(&companies, query).to_vec())
    }

    fn rename_company(&self, id: CompanyId, new_name: &str) -> RepoResult<Company> {
        let mut companies = self.write_guard();
        let position = companies
            .iter()
            .position(|company| company.id == id)
            .ok_or(RepoError::CompanyNotFound(id))?;

        // Renaming a company to its current name is a no-op success; only a
        // collision with a different company violates the uniqueness
        // invariant.
        if companies
            .iter()
            .any(|company| company.id != id && company.name == new_name)
        {
            return Err(RepoError::DuplicateCompanyName(new_name.to_string()));
        }

        companies[position].name = new_name.to_string();
        debug!("event=company_renamed module=repo status=ok company={id}");
        Ok(companies[position].clone())
    }

    fn reset(&self) -> RepoResult<()> {
        let mut companies = self.write_guard();
        let cleared = companies.len();
        companies.clear();
        debug!("event=store_reset module=repo status=ok cleared={cleared}");
        Ok(())
    }

    fn add_employee(
        &self,
        company_id: CompanyId,
        name: &str,
        salary: f64,
    ) -> RepoResult<Employee> {
        let mut companies = self.write_guard();
        let company = companies
            .iter_mut()
            .find(|company| company.id == company_id)
            .ok_or(RepoError::CompanyNotFound(company_id))?;

        if company.employee_named(name).is_some() {
            return Err(RepoError::DuplicateEmployeeName {
                company: company_id,
                name: name.to_string(),
            });
        }

        let employee = Employee::new(name, salary);
        company.employees.push(employee.clone());
        debug!(
            "event=employee_added module=repo status=ok company={} employee={} headcount={}",
            company_id,
            employee.id,
            company.headcount()
        );
        Ok(employee)
    }

    fn list_employees(&self, company_id: CompanyId) -> RepoResult<Vec<Employee>> {
        self.read_guard()
            .iter()
            .find(|company| company.id == company_id)
            .map(|company| company.employees.clone())
            .ok_or(RepoError::CompanyNotFound(company_id))
    }

    fn remove_employee(&self, company_id: CompanyId, employee_id: EmployeeId) -> RepoResult<()> {
        let mut companies = self.write_guard();
        let company = companies
            .iter_mut()
            .find(|company| company.id == company_id)
            .ok_or(RepoError::CompanyNotFound(company_id))?;

        let position =
            company
                .employee_position(employee_id)
                .ok_or(RepoError::EmployeeNotFound {
                    company: company_id,
                    employee: employee_id,
                })?;
        company.employees.remove(position);
        debug!(
            "event=employee_removed module=repo status=ok company={} employee={} headcount={}",
            company_id,
            employee_id,
            company.headcount()
        );
        Ok(())
    }
}

/// Selects `[start, end)` for a 1-based page, clamped to the sequence.
///
/// `start = (page_index - 1) * page_size`; a `start` at or past the end is a
/// paging boundary, not a missing resource, and yields the empty slice.
/// Arithmetic saturates so no `u32` input can overflow the index math.
fn page_slice<'a>(companies: &'a [Company], query: &PageQuery) -> &'a [Company] {
    if query.page_size == 0 || query.page_index == 0 {
        return &[];
    }

    let size = query.page_size as usize;
    let start = (query.page_index as usize - 1).saturating_mul(size);
    if start >= companies.len() {
        return &[];
    }

    let end = start.saturating_add(size).min(companies.len());
    &companies[start..end]
}
