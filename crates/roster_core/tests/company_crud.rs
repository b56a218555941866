use roster_core::{
    CompanyRepository, InMemoryCompanyRepository, RepoError, RosterService,
};
use uuid::Uuid;

#[test]
fn create_and_get_roundtrip() {
    let repo = InMemoryCompanyRepository::new();

    let created = repo.create_company("Acme").unwrap();
    assert!(!created.id.is_nil());
    assert_eq!(created.name, "Acme");
    assert!(created.employees.is_empty());

    let loaded = repo.get_company(created.id).unwrap();
    assert_eq!(loaded, created);
}

#[test]
fn create_preserves_call_order_and_count() {
    let repo = InMemoryCompanyRepository::new();

    let names = ["Acme", "Globex", "Initech", "Umbrella"];
    for name in names {
        repo.create_company(name).unwrap();
    }

    let all = repo.list_companies().unwrap();
    assert_eq!(all.len(), names.len());
    let listed: Vec<&str> = all.iter().map(|company| company.name.as_str()).collect();
    assert_eq!(listed, names);
}

#[test]
fn duplicate_create_fails_and_leaves_store_unchanged() {
    let repo = InMemoryCompanyRepository::new();
    repo.create_company("Acme").unwrap();

    let err = repo.create_company("Acme").unwrap_err();
    assert!(matches!(err, RepoError::DuplicateCompanyName(name) if name == "Acme"));
    assert_eq!(repo.list_companies().unwrap().len(), 1);
}

#[test]
fn name_comparison_is_exact_without_normalization() {
    let repo = InMemoryCompanyRepository::new();
    repo.create_company("Acme").unwrap();

    // Case and whitespace variants are distinct names.
    repo.create_company("acme").unwrap();
    repo.create_company("Acme ").unwrap();
    assert_eq!(repo.list_companies().unwrap().len(), 3);
}

#[test]
fn get_unknown_company_returns_not_found() {
    let repo = InMemoryCompanyRepository::new();
    let missing = Uuid::new_v4();

    let err = repo.get_company(missing).unwrap_err();
    assert!(matches!(err, RepoError::CompanyNotFound(id) if id == missing));
}

#[test]
fn rename_changes_only_the_target_name() {
    let repo = InMemoryCompanyRepository::new();
    let acme = repo.create_company("Acme").unwrap();
    let globex = repo.create_company("Globex").unwrap();
    repo.add_employee(acme.id, "Ada", 5200.0).unwrap();

    let renamed = repo.rename_company(acme.id, "Acme Corp").unwrap();
    assert_eq!(renamed.id, acme.id);
    assert_eq!(renamed.name, "Acme Corp");
    assert_eq!(renamed.employees.len(), 1);

    let loaded = repo.get_company(acme.id).unwrap();
    assert_eq!(loaded.name, "Acme Corp");
    assert_eq!(loaded.employees.len(), 1);

    let untouched = repo.get_company(globex.id).unwrap();
    assert_eq!(untouched.name, "Globex");
}

#[test]
fn rename_unknown_company_returns_not_found_and_changes_nothing() {
    let repo = InMemoryCompanyRepository::new();
    repo.create_company("Acme").unwrap();
    let missing = Uuid::new_v4();

    let err = repo.rename_company(missing, "Phantom").unwrap_err();
    assert!(matches!(err, RepoError::CompanyNotFound(id) if id == missing));

    let all = repo.list_companies().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Acme");
}

#[test]
fn rename_collision_with_other_company_fails() {
    let repo = InMemoryCompanyRepository::new();
    let acme = repo.create_company("Acme").unwrap();
    repo.create_company("Globex").unwrap();

    let err = repo.rename_company(acme.id, "Globex").unwrap_err();
    assert!(matches!(err, RepoError::DuplicateCompanyName(name) if name == "Globex"));
    assert_eq!(repo.get_company(acme.id).unwrap().name, "Acme");
}

#[test]
fn rename_to_current_name_succeeds() {
    let repo = InMemoryCompanyRepository::new();
    let acme = repo.create_company("Acme").unwrap();

    let renamed = repo.rename_company(acme.id, "Acme").unwrap();
    assert_eq!(renamed.name, "Acme");
}

#[test]
fn reset_clears_store_and_invalidates_previous_ids() {
    let repo = InMemoryCompanyRepository::new();
    let acme = repo.create_company("Acme").unwrap();
    repo.add_employee(acme.id, "Ada", 5200.0).unwrap();

    repo.reset().unwrap();
    assert!(repo.list_companies().unwrap().is_empty());

    let err = repo.get_company(acme.id).unwrap_err();
    assert!(matches!(err, RepoError::CompanyNotFound(id) if id == acme.id));
}

#[test]
fn reset_twice_is_idempotent() {
    let repo = InMemoryCompanyRepository::new();
    repo.create_company("Acme").unwrap();

    repo.reset().unwrap();
    repo.reset().unwrap();
    assert!(repo.list_companies().unwrap().is_empty());

    // A fresh create works after any number of resets.
    repo.create_company("Acme").unwrap();
    assert_eq!(repo.list_companies().unwrap().len(), 1);
}

#[test]
fn service_wraps_repository_calls() {
    let service = RosterService::new(InMemoryCompanyRepository::new());

    let created = service.create_company("Acme").unwrap();
    let fetched = service.get_company(created.id).unwrap();
    assert_eq!(fetched.name, "Acme");

    let renamed = service.rename_company(created.id, "Acme Corp").unwrap();
    assert_eq!(renamed.name, "Acme Corp");

    service.reset().unwrap();
    assert!(service.list_companies().unwrap().is_empty());
}
