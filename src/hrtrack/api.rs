//! # API Facade
//!
//! A thin facade over the command layer — the single entry point for every
//! hrtrack operation regardless of the UI driving it. The facade dispatches,
//! it does not decide: business logic lives in `commands/*.rs`, persistence
//! in `state.rs` and `store/`. No stdout, no stderr, no process exits.
//!
//! `HrApi<S: StateStore>` is generic over the storage backend:
//! - Production: `HrApi<FileStore>`
//! - Testing: `HrApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::ingest::DocumentFile;
use crate::model::{DocumentCategory, Employee, EmployeeFields, IncidentFields, RecordId, ReviewFields};
use crate::state::HrStore;
use crate::store::StateStore;
use std::path::{Path, PathBuf};

pub struct HrApi<S: StateStore> {
    hr: HrStore<S>,
    data_dir: PathBuf,
}

impl<S: StateStore> HrApi<S> {
    /// Hydrates the domain state from the backend.
    pub fn open(store: S, data_dir: PathBuf) -> Self {
        Self {
            hr: HrStore::open(store),
            data_dir,
        }
    }

    pub fn add_employee(&mut self, fields: EmployeeFields) -> Result<CmdResult> {
        commands::employees::add(&mut self.hr, fields)
    }

    pub fn update_employee(&mut self, employee: Employee) -> Result<CmdResult> {
        commands::employees::update(&mut self.hr, employee)
    }

    pub fn delete_employee(&mut self, id: &RecordId) -> Result<CmdResult> {
        commands::employees::delete(&mut self.hr, id)
    }

    pub fn list_employees(&self, search: Option<&str>) -> Result<CmdResult> {
        commands::employees::list(&self.hr, search)
    }

    /// Lookup used by the CLI's edit flow to pre-fill unchanged fields.
    pub fn employee(&self, id: &RecordId) -> Option<Employee> {
        self.hr.employees().iter().find(|e| &e.id == id).cloned()
    }

    pub fn add_review(&mut self, fields: ReviewFields) -> Result<CmdResult> {
        commands::reviews::add(&mut self.hr, fields)
    }

    pub fn list_reviews(&self) -> Result<CmdResult> {
        commands::reviews::list(&self.hr)
    }

    pub fn add_document(
        &mut self,
        employee_id: RecordId,
        category: DocumentCategory,
        description: String,
        file: DocumentFile,
    ) -> Result<CmdResult> {
        commands::documents::add(&mut self.hr, employee_id, category, description, file)
    }

    pub fn list_documents(&self) -> Result<CmdResult> {
        commands::documents::list(&self.hr)
    }

    pub fn save_document(&self, id: &RecordId, out: Option<PathBuf>) -> Result<CmdResult> {
        commands::documents::save(&self.hr, id, out)
    }

    pub fn report_incident(&mut self, fields: IncidentFields) -> Result<CmdResult> {
        commands::incidents::report(&mut self.hr, fields)
    }

    pub fn list_incidents(&self) -> Result<CmdResult> {
        commands::incidents::list(&self.hr)
    }

    pub fn dashboard(&self) -> Result<CmdResult> {
        commands::dashboard::run(&self.hr)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn init(&self) -> Result<CmdResult> {
        commands::init::run(&self.data_dir)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{
    CmdMessage, CmdResult, DashboardSummary, DocumentListing, IncidentListing, MessageLevel,
    ReviewListing,
};
