use chrono::{NaiveDate, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifier for any HR record.
///
/// Tokens are derived from the creation time (unix milliseconds) plus a
/// process-wide sequence number, so ids created in the same session are
/// unique and sort in creation order. There is no cross-session uniqueness
/// guarantee; the store is single-user and never synced.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

static RECORD_SEQ: AtomicU64 = AtomicU64::new(0);

impl RecordId {
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis();
        let seq = RECORD_SEQ.fetch_add(1, Ordering::Relaxed);
        Self(format!("{}-{:04}", millis, seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum EmployeeStatus {
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeStatus::Active => write!(f, "Active"),
            EmployeeStatus::Inactive => write!(f, "Inactive"),
            EmployeeStatus::OnLeave => write!(f, "On Leave"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub start_date: Option<NaiveDate>,
    pub salary: String,
    pub status: EmployeeStatus,
    pub emergency_contact: EmergencyContact,
}

/// Everything an [`Employee`] carries except the generated id — the
/// pre-validated field set handed over by the caller.
#[derive(Debug, Clone)]
pub struct EmployeeFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub department: String,
    pub start_date: Option<NaiveDate>,
    pub salary: String,
    pub status: EmployeeStatus,
    pub emergency_contact: EmergencyContact,
}

impl Employee {
    pub fn new(fields: EmployeeFields) -> Self {
        Self {
            id: RecordId::generate(),
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            position: fields.position,
            department: fields.department,
            start_date: fields.start_date,
            salary: fields.salary,
            status: fields.status,
            emergency_contact: fields.emergency_contact,
        }
    }

    /// Display name used when cross-referencing from dependent records.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum ReviewType {
    Annual,
    #[serde(rename = "Mid-Year")]
    MidYear,
    Probation,
    #[serde(rename = "90-Day")]
    #[value(name = "90-day")]
    NinetyDay,
}

impl fmt::Display for ReviewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReviewType::Annual => write!(f, "Annual"),
            ReviewType::MidYear => write!(f, "Mid-Year"),
            ReviewType::Probation => write!(f, "Probation"),
            ReviewType::NinetyDay => write!(f, "90-Day"),
        }
    }
}

/// Five-dimension rating block on a review. Values are nominally 1-5 but the
/// store does not enforce the range; callers own validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceRatings {
    pub quality: u8,
    pub productivity: u8,
    pub communication: u8,
    pub teamwork: u8,
    pub leadership: u8,
}

impl Default for PerformanceRatings {
    fn default() -> Self {
        Self {
            quality: 3,
            productivity: 3,
            communication: 3,
            teamwork: 3,
            leadership: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub review_date: NaiveDate,
    pub review_type: ReviewType,
    pub overall_rating: u8,
    pub performance: PerformanceRatings,
    pub goals: String,
    pub achievements: String,
    pub areas_for_improvement: String,
    pub comments: String,
    pub reviewer_id: String,
    pub next_review_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct ReviewFields {
    pub employee_id: RecordId,
    pub review_date: NaiveDate,
    pub review_type: ReviewType,
    pub overall_rating: u8,
    pub performance: PerformanceRatings,
    pub goals: String,
    pub achievements: String,
    pub areas_for_improvement: String,
    pub comments: String,
    pub reviewer_id: String,
    pub next_review_date: Option<NaiveDate>,
}

impl Review {
    pub fn new(fields: ReviewFields) -> Self {
        Self {
            id: RecordId::generate(),
            employee_id: fields.employee_id,
            review_date: fields.review_date,
            review_type: fields.review_type,
            overall_rating: fields.overall_rating,
            performance: fields.performance,
            goals: fields.goals,
            achievements: fields.achievements,
            areas_for_improvement: fields.areas_for_improvement,
            comments: fields.comments,
            reviewer_id: fields.reviewer_id,
            next_review_date: fields.next_review_date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum DocumentCategory {
    Medical,
    Contract,
    Certificate,
    Performance,
    Personal,
    Other,
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DocumentCategory::Medical => "Medical",
            DocumentCategory::Contract => "Contract",
            DocumentCategory::Certificate => "Certificate",
            DocumentCategory::Performance => "Performance",
            DocumentCategory::Personal => "Personal",
            DocumentCategory::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub file_name: String,
    pub file_type: String,
    pub category: DocumentCategory,
    pub upload_date: NaiveDate,
    pub description: String,
    /// Data URL (`data:<mime>;base64,<payload>`) holding the file content.
    pub file_data: String,
}

#[derive(Debug, Clone)]
pub struct DocumentFields {
    pub employee_id: RecordId,
    pub file_name: String,
    pub file_type: String,
    pub category: DocumentCategory,
    pub description: String,
    pub file_data: String,
}

impl Document {
    /// The upload date is stamped here, at creation time.
    pub fn new(fields: DocumentFields) -> Self {
        Self {
            id: RecordId::generate(),
            employee_id: fields.employee_id,
            file_name: fields.file_name,
            file_type: fields.file_type,
            category: fields.category,
            upload_date: Utc::now().date_naive(),
            description: fields.description,
            file_data: fields.file_data,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum IncidentType {
    Disciplinary,
    Safety,
    Harassment,
    Attendance,
    Performance,
    Other,
}

impl fmt::Display for IncidentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IncidentType::Disciplinary => "Disciplinary",
            IncidentType::Safety => "Safety",
            IncidentType::Harassment => "Harassment",
            IncidentType::Attendance => "Attendance",
            IncidentType::Performance => "Performance",
            IncidentType::Other => "Other",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Severity::Low => "Low",
            Severity::Medium => "Medium",
            Severity::High => "High",
            Severity::Critical => "Critical",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum IncidentStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl fmt::Display for IncidentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IncidentStatus::Open => write!(f, "Open"),
            IncidentStatus::InProgress => write!(f, "In Progress"),
            IncidentStatus::Resolved => write!(f, "Resolved"),
            IncidentStatus::Closed => write!(f, "Closed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    pub id: RecordId,
    pub employee_id: RecordId,
    pub incident_date: NaiveDate,
    pub incident_type: IncidentType,
    pub severity: Severity,
    pub description: String,
    pub action_taken: String,
    pub status: IncidentStatus,
    pub reported_by: String,
    pub witnesses: String,
    pub follow_up_date: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct IncidentFields {
    pub employee_id: RecordId,
    pub incident_date: NaiveDate,
    pub incident_type: IncidentType,
    pub severity: Severity,
    pub description: String,
    pub action_taken: String,
    pub status: IncidentStatus,
    pub reported_by: String,
    pub witnesses: String,
    pub follow_up_date: Option<NaiveDate>,
}

impl Incident {
    pub fn new(fields: IncidentFields) -> Self {
        Self {
            id: RecordId::generate(),
            employee_id: fields.employee_id,
            incident_date: fields.incident_date,
            incident_type: fields.incident_type,
            severity: fields.severity,
            description: fields.description,
            action_taken: fields.action_taken,
            status: fields.status,
            reported_by: fields.reported_by,
            witnesses: fields.witnesses,
            follow_up_date: fields.follow_up_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> EmployeeFields {
        EmployeeFields {
            first_name: "Jane".into(),
            last_name: "Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
            position: "SWE".into(),
            department: "Eng".into(),
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
            salary: "95000".into(),
            status: EmployeeStatus::Active,
            emergency_contact: EmergencyContact::default(),
        }
    }

    #[test]
    fn generated_ids_are_unique() {
        let ids: Vec<RecordId> = (0..1000).map(|_| RecordId::generate()).collect();
        let mut deduped: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn full_name_joins_first_and_last() {
        let employee = Employee::new(sample_fields());
        assert_eq!(employee.full_name(), "Jane Doe");
    }

    #[test]
    fn employee_serializes_with_original_field_names() {
        let mut employee = Employee::new(sample_fields());
        employee.status = EmployeeStatus::OnLeave;
        let json = serde_json::to_string(&employee).unwrap();

        assert!(json.contains("\"firstName\":\"Jane\""));
        assert!(json.contains("\"emergencyContact\""));
        assert!(json.contains("\"startDate\":\"2024-03-01\""));
        assert!(json.contains("\"status\":\"On Leave\""));
    }

    #[test]
    fn enum_variants_round_trip_through_serde() {
        let json = serde_json::to_string(&ReviewType::NinetyDay).unwrap();
        assert_eq!(json, "\"90-Day\"");
        let back: ReviewType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ReviewType::NinetyDay);

        let json = serde_json::to_string(&IncidentStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");
    }

    #[test]
    fn document_stamps_upload_date_at_creation() {
        let doc = Document::new(DocumentFields {
            employee_id: RecordId::generate(),
            file_name: "contract.pdf".into(),
            file_type: "application/pdf".into(),
            category: DocumentCategory::Contract,
            description: "Signed contract".into(),
            file_data: "data:application/pdf;base64,".into(),
        });
        assert_eq!(doc.upload_date, Utc::now().date_naive());
    }
}
