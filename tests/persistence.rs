//! Persistence round trips through the file-backed store, including the
//! restart/hydration path and the cascade-delete scenario.

use chrono::NaiveDate;
use hrtrack::model::{
    EmergencyContact, EmployeeFields, EmployeeStatus, PerformanceRatings, RecordId, ReviewFields,
    ReviewType,
};
use hrtrack::state::HrStore;
use hrtrack::store::fs::FileStore;
use std::path::Path;

fn employee(first: &str, last: &str, department: &str) -> EmployeeFields {
    EmployeeFields {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", first.to_lowercase()),
        phone: "555-0100".to_string(),
        position: "SWE".to_string(),
        department: department.to_string(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 8),
        salary: "100000".to_string(),
        status: EmployeeStatus::Active,
        emergency_contact: EmergencyContact::default(),
    }
}

fn review(employee_id: RecordId) -> ReviewFields {
    ReviewFields {
        employee_id,
        review_date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        review_type: ReviewType::Probation,
        overall_rating: 4,
        performance: PerformanceRatings::default(),
        goals: String::new(),
        achievements: String::new(),
        areas_for_improvement: String::new(),
        comments: String::new(),
        reviewer_id: "HR Manager".to_string(),
        next_review_date: None,
    }
}

fn open(root: &Path) -> HrStore<FileStore> {
    HrStore::open(FileStore::new(root.to_path_buf()))
}

#[test]
fn collections_survive_a_restart_in_order() {
    let dir = tempfile::tempdir().unwrap();

    let mut hr = open(dir.path());
    hr.add_employee(employee("Alice", "First", "Eng")).unwrap();
    hr.add_employee(employee("Bob", "Second", "Sales")).unwrap();
    hr.add_employee(employee("Cara", "Third", "Eng")).unwrap();
    let saved = hr.employees().to_vec();
    drop(hr);

    let reopened = open(dir.path());
    assert_eq!(reopened.employees(), saved.as_slice());
    assert_eq!(reopened.employees()[0].first_name, "Alice");
    assert_eq!(reopened.employees()[2].first_name, "Cara");
}

#[test]
fn add_then_delete_scenario_cascades_across_restarts() {
    let dir = tempfile::tempdir().unwrap();

    let mut hr = open(dir.path());
    let jane = hr.add_employee(employee("Jane", "Doe", "Eng")).unwrap();
    assert_eq!(hr.employees().len(), 1);
    assert_eq!(hr.employee_name(&jane.id), "Jane Doe");
    hr.add_review(review(jane.id.clone())).unwrap();
    drop(hr);

    // The review referencing Jane is gone after the cascade, even through a
    // restart between the add and the delete.
    let mut hr = open(dir.path());
    assert_eq!(hr.reviews().len(), 1);
    let summary = hr.delete_employee(&jane.id).unwrap();
    assert!(summary.employee_removed);
    assert_eq!(summary.reviews_removed, 1);
    drop(hr);

    let hr = open(dir.path());
    assert!(hr.employees().is_empty());
    assert!(hr.reviews().is_empty());
}

#[test]
fn persisted_payloads_use_the_fixed_keys() {
    let dir = tempfile::tempdir().unwrap();

    let mut hr = open(dir.path());
    let jane = hr.add_employee(employee("Jane", "Doe", "Eng")).unwrap();
    hr.add_review(review(jane.id)).unwrap();

    assert!(dir.path().join("hr-employees.json").exists());
    assert!(dir.path().join("hr-reviews.json").exists());

    let payload = std::fs::read_to_string(dir.path().join("hr-employees.json")).unwrap();
    assert!(payload.contains("\"firstName\": \"Jane\""));
}

#[test]
fn corrupt_collection_file_fails_open_to_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("hr-employees.json"), "corrupt{{{").unwrap();

    let mut hr = open(dir.path());
    assert!(hr.employees().is_empty());

    // The store stays usable and the next save repairs the file.
    hr.add_employee(employee("Jane", "Doe", "Eng")).unwrap();
    drop(hr);
    assert_eq!(open(dir.path()).employees().len(), 1);
}
