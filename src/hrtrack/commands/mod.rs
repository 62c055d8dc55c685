use crate::config::HrConfig;
use crate::model::{Document, Employee, Incident, Review};

pub mod config;
pub mod dashboard;
pub mod documents;
pub mod employees;
pub mod incidents;
pub mod init;
pub mod reviews;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A review paired with the resolved employee name for display.
#[derive(Debug, Clone)]
pub struct ReviewListing {
    pub review: Review,
    pub employee_name: String,
}

#[derive(Debug, Clone)]
pub struct DocumentListing {
    pub document: Document,
    pub employee_name: String,
}

#[derive(Debug, Clone)]
pub struct IncidentListing {
    pub incident: Incident,
    pub employee_name: String,
}

/// Headline counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub total_employees: usize,
    pub active_employees: usize,
    pub total_reviews: usize,
    pub reviews_this_year: usize,
    pub total_documents: usize,
    pub medical_documents: usize,
    pub open_incidents: usize,
    pub high_priority_incidents: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub employees: Vec<Employee>,
    pub reviews: Vec<ReviewListing>,
    pub documents: Vec<DocumentListing>,
    pub incidents: Vec<IncidentListing>,
    pub dashboard: Option<DashboardSummary>,
    pub config: Option<HrConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_employees(mut self, employees: Vec<Employee>) -> Self {
        self.employees = employees;
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<ReviewListing>) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn with_documents(mut self, documents: Vec<DocumentListing>) -> Self {
        self.documents = documents;
        self
    }

    pub fn with_incidents(mut self, incidents: Vec<IncidentListing>) -> Self {
        self.incidents = incidents;
        self
    }

    pub fn with_dashboard(mut self, summary: DashboardSummary) -> Self {
        self.dashboard = Some(summary);
        self
    }

    pub fn with_config(mut self, config: HrConfig) -> Self {
        self.config = Some(config);
        self
    }
}
