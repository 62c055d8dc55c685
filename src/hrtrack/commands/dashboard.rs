use crate::commands::{CmdResult, DashboardSummary};
use crate::error::Result;
use crate::model::{DocumentCategory, EmployeeStatus, IncidentStatus, Severity};
use crate::state::HrStore;
use crate::store::StateStore;
use chrono::{Datelike, Utc};

pub fn run<S: StateStore>(hr: &HrStore<S>) -> Result<CmdResult> {
    let this_year = Utc::now().year();

    let summary = DashboardSummary {
        total_employees: hr.employees().len(),
        active_employees: hr
            .employees()
            .iter()
            .filter(|e| e.status == EmployeeStatus::Active)
            .count(),
        total_reviews: hr.reviews().len(),
        reviews_this_year: hr
            .reviews()
            .iter()
            .filter(|r| r.review_date.year() == this_year)
            .count(),
        total_documents: hr.documents().len(),
        medical_documents: hr
            .documents()
            .iter()
            .filter(|d| d.category == DocumentCategory::Medical)
            .count(),
        open_incidents: hr
            .incidents()
            .iter()
            .filter(|i| {
                matches!(i.status, IncidentStatus::Open | IncidentStatus::InProgress)
            })
            .count(),
        high_priority_incidents: hr
            .incidents()
            .iter()
            .filter(|i| matches!(i.severity, Severity::High | Severity::Critical))
            .count(),
    };

    Ok(CmdResult::default().with_dashboard(summary))
}
