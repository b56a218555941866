//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `roster_core` linkage.
//! - Drive one in-memory store end to end with deterministic output.

use roster_core::{
    AddEmployeeRequest, InMemoryCompanyRepository, PageQuery, RepoError, RosterService,
};

fn main() {
    if let Err(err) = run() {
        eprintln!("roster_cli error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), RepoError> {
    println!("roster_core ping={}", roster_core::ping());
    println!("roster_core version={}", roster_core::core_version());

    let service = RosterService::new(InMemoryCompanyRepository::new());

    let acme = service.create_company("Acme")?;
    let globex = service.create_company("Globex")?;
    service.add_employee(
        acme.id,
        &AddEmployeeRequest {
            name: "Ada".to_string(),
            salary: 5200.0,
        },
    )?;
    let bob = service.add_employee(
        acme.id,
        &AddEmployeeRequest {
            name: "Bob".to_string(),
            salary: 4100.0,
        },
    )?;

    for company in service.list_companies()? {
        println!(
            "company name={} headcount={}",
            company.name,
            company.employees.len()
        );
    }

    let first_page = service.page_companies(&PageQuery {
        page_size: 1,
        page_index: 1,
    })?;
    println!("page size=1 index=1 -> {} company", first_page.len());

    service.remove_employee(acme.id, bob.id)?;
    println!(
        "after removal headcount={}",
        service.list_employees(acme.id)?.len()
    );

    service.reset()?;
    println!("after reset companies={}", service.list_companies()?.len());
    println!(
        "after reset lookup found={}",
        service.get_company(globex.id).is_ok()
    );

    Ok(())
}
