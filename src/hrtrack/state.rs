//! # Domain State
//!
//! [`HrStore`] is the in-memory owner of the four record collections. It is
//! the only writer to the [`StateStore`]: every mutation re-serializes the
//! affected collection(s) and saves them synchronously, so the persisted
//! state always mirrors memory.
//!
//! Hydration fails open: a missing or unparseable payload initializes that
//! collection empty rather than aborting startup.

use crate::error::Result;
use crate::model::{
    Document, DocumentFields, Employee, EmployeeFields, Incident, IncidentFields, RecordId,
    Review, ReviewFields,
};
use crate::store::{Collection, StateStore};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Counts of records removed by a cascade delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    pub employee_removed: bool,
    pub reviews_removed: usize,
    pub documents_removed: usize,
    pub incidents_removed: usize,
}

/// The in-memory holder of the four collections, generic over the
/// persistence backend.
pub struct HrStore<S: StateStore> {
    store: S,
    employees: Vec<Employee>,
    reviews: Vec<Review>,
    documents: Vec<Document>,
    incidents: Vec<Incident>,
}

fn hydrate<T: DeserializeOwned, S: StateStore>(store: &S, collection: Collection) -> Vec<T> {
    // Read or parse failure means "no data" here, never a fatal error.
    match store.load(collection) {
        Ok(Some(payload)) => serde_json::from_str(&payload).unwrap_or_default(),
        _ => Vec::new(),
    }
}

impl<S: StateStore> HrStore<S> {
    /// Open the store, hydrating all four collections from the backend.
    pub fn open(store: S) -> Self {
        let employees = hydrate(&store, Collection::Employees);
        let reviews = hydrate(&store, Collection::Reviews);
        let documents = hydrate(&store, Collection::Documents);
        let incidents = hydrate(&store, Collection::Incidents);
        Self {
            store,
            employees,
            reviews,
            documents,
            incidents,
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    fn persist<T: Serialize>(store: &mut S, collection: Collection, records: &[T]) -> Result<()> {
        let payload = serde_json::to_string_pretty(records)?;
        store.save(collection, &payload)
    }

    pub fn add_employee(&mut self, fields: EmployeeFields) -> Result<Employee> {
        let employee = Employee::new(fields);
        self.employees.push(employee.clone());
        Self::persist(&mut self.store, Collection::Employees, &self.employees)?;
        Ok(employee)
    }

    /// Full-record replace by id. Returns `false` (leaving state untouched)
    /// when no employee carries the given id.
    pub fn update_employee(&mut self, updated: Employee) -> Result<bool> {
        let Some(slot) = self.employees.iter_mut().find(|e| e.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated;
        Self::persist(&mut self.store, Collection::Employees, &self.employees)?;
        Ok(true)
    }

    /// Remove the employee and every review, document, and incident that
    /// references it. All four collections are persisted so the backend never
    /// observes a half-applied cascade between calls.
    pub fn delete_employee(&mut self, id: &RecordId) -> Result<CascadeSummary> {
        let before = self.employees.len();
        self.employees.retain(|e| &e.id != id);
        if self.employees.len() == before {
            return Ok(CascadeSummary::default());
        }

        let reviews_before = self.reviews.len();
        let documents_before = self.documents.len();
        let incidents_before = self.incidents.len();
        self.reviews.retain(|r| &r.employee_id != id);
        self.documents.retain(|d| &d.employee_id != id);
        self.incidents.retain(|i| &i.employee_id != id);

        Self::persist(&mut self.store, Collection::Employees, &self.employees)?;
        Self::persist(&mut self.store, Collection::Reviews, &self.reviews)?;
        Self::persist(&mut self.store, Collection::Documents, &self.documents)?;
        Self::persist(&mut self.store, Collection::Incidents, &self.incidents)?;

        Ok(CascadeSummary {
            employee_removed: true,
            reviews_removed: reviews_before - self.reviews.len(),
            documents_removed: documents_before - self.documents.len(),
            incidents_removed: incidents_before - self.incidents.len(),
        })
    }

    pub fn add_review(&mut self, fields: ReviewFields) -> Result<Review> {
        let review = Review::new(fields);
        self.reviews.push(review.clone());
        Self::persist(&mut self.store, Collection::Reviews, &self.reviews)?;
        Ok(review)
    }

    pub fn add_document(&mut self, fields: DocumentFields) -> Result<Document> {
        let document = Document::new(fields);
        self.documents.push(document.clone());
        Self::persist(&mut self.store, Collection::Documents, &self.documents)?;
        Ok(document)
    }

    pub fn add_incident(&mut self, fields: IncidentFields) -> Result<Incident> {
        let incident = Incident::new(fields);
        self.incidents.push(incident.clone());
        Self::persist(&mut self.store, Collection::Incidents, &self.incidents)?;
        Ok(incident)
    }

    /// Display name for cross-referencing in list views; falls back to a
    /// sentinel when the id does not resolve.
    pub fn employee_name(&self, id: &RecordId) -> String {
        self.employees
            .iter()
            .find(|e| &e.id == id)
            .map(|e| e.full_name())
            .unwrap_or_else(|| "Unknown Employee".to_string())
    }

    /// Case-insensitive substring match over name, position, and department.
    /// An empty term matches everything, in insertion order.
    pub fn filter_employees(&self, term: &str) -> Vec<&Employee> {
        let term = term.to_lowercase();
        self.employees
            .iter()
            .filter(|e| {
                format!(
                    "{} {} {} {}",
                    e.first_name, e.last_name, e.position, e.department
                )
                .to_lowercase()
                .contains(&term)
            })
            .collect()
    }
}

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{EmergencyContact, EmployeeStatus, PerformanceRatings, ReviewType};
    use crate::store::memory::InMemoryStore;
    use chrono::NaiveDate;

    pub fn employee_fields(first: &str, last: &str) -> EmployeeFields {
        EmployeeFields {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: format!("{}@example.com", first.to_lowercase()),
            phone: "555-0100".to_string(),
            position: "Engineer".to_string(),
            department: "Engineering".to_string(),
            start_date: NaiveDate::from_ymd_opt(2023, 6, 1),
            salary: "90000".to_string(),
            status: EmployeeStatus::Active,
            emergency_contact: EmergencyContact::default(),
        }
    }

    pub fn review_fields(employee_id: RecordId) -> ReviewFields {
        ReviewFields {
            employee_id,
            review_date: NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(),
            review_type: ReviewType::Annual,
            overall_rating: 4,
            performance: PerformanceRatings::default(),
            goals: "Ship the Q2 release".to_string(),
            achievements: "Led the migration".to_string(),
            areas_for_improvement: String::new(),
            comments: String::new(),
            reviewer_id: "HR Manager".to_string(),
            next_review_date: None,
        }
    }

    pub fn incident_fields(employee_id: RecordId) -> IncidentFields {
        IncidentFields {
            employee_id,
            incident_date: NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            incident_type: crate::model::IncidentType::Attendance,
            severity: crate::model::Severity::Low,
            description: "Late arrival".to_string(),
            action_taken: "Verbal reminder".to_string(),
            status: crate::model::IncidentStatus::Open,
            reported_by: "HR Manager".to_string(),
            witnesses: String::new(),
            follow_up_date: None,
        }
    }

    pub fn document_fields(employee_id: RecordId) -> DocumentFields {
        DocumentFields {
            employee_id,
            file_name: "contract.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            category: crate::model::DocumentCategory::Contract,
            description: "Signed contract".to_string(),
            file_data: "data:application/pdf;base64,Zm9v".to_string(),
        }
    }

    pub fn empty_store() -> HrStore<InMemoryStore> {
        HrStore::open(InMemoryStore::new())
    }

    pub fn store_with_employees(names: &[(&str, &str)]) -> HrStore<InMemoryStore> {
        let mut hr = empty_store();
        for (first, last) in names {
            hr.add_employee(employee_fields(first, last)).unwrap();
        }
        hr
    }
}
