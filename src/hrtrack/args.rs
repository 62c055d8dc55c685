use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use hrtrack::model::{
    DocumentCategory, EmployeeStatus, IncidentStatus, IncidentType, ReviewType, Severity,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "hrtrack")]
#[command(about = "Local-first HR record keeper for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage the employee roster
    #[command(subcommand, alias = "emp")]
    Employee(EmployeeCmd),

    /// Record and list performance reviews
    #[command(subcommand, alias = "rev")]
    Review(ReviewCmd),

    /// Attach and list employee documents
    #[command(subcommand)]
    Doc(DocCmd),

    /// Report and list incidents
    #[command(subcommand, alias = "inc")]
    Incident(IncidentCmd),

    /// Headline counts across all collections
    #[command(alias = "dash")]
    Dashboard,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., reviewer)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Initialize the store directory
    Init,
}

#[derive(Subcommand, Debug)]
pub enum EmployeeCmd {
    /// Add an employee to the roster
    Add {
        #[arg(long)]
        first_name: String,

        #[arg(long)]
        last_name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,

        #[arg(long)]
        position: String,

        #[arg(long)]
        department: String,

        /// Start date (YYYY-MM-DD)
        #[arg(long)]
        start_date: Option<NaiveDate>,

        #[arg(long, default_value = "")]
        salary: String,

        #[arg(long, value_enum, default_value_t = EmployeeStatus::Active)]
        status: EmployeeStatus,

        /// Emergency contact name
        #[arg(long, default_value = "")]
        emergency_name: String,

        /// Emergency contact phone
        #[arg(long, default_value = "")]
        emergency_phone: String,

        /// Emergency contact relationship
        #[arg(long, default_value = "")]
        emergency_relationship: String,
    },

    /// Update an employee (unset flags keep their current value)
    Update {
        /// Record id of the employee
        id: String,

        #[arg(long)]
        first_name: Option<String>,

        #[arg(long)]
        last_name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        position: Option<String>,

        #[arg(long)]
        department: Option<String>,

        #[arg(long)]
        start_date: Option<NaiveDate>,

        #[arg(long)]
        salary: Option<String>,

        #[arg(long, value_enum)]
        status: Option<EmployeeStatus>,

        #[arg(long)]
        emergency_name: Option<String>,

        #[arg(long)]
        emergency_phone: Option<String>,

        #[arg(long)]
        emergency_relationship: Option<String>,
    },

    /// Delete an employee and every record referencing it
    #[command(alias = "rm")]
    Delete {
        /// Record id of the employee
        id: String,
    },

    /// List employees
    #[command(alias = "ls")]
    List {
        /// Filter by name, position, or department substring
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum ReviewCmd {
    /// Record a performance review
    Add {
        /// Record id of the employee under review
        #[arg(long)]
        employee: String,

        /// Review date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long = "type", value_enum, default_value_t = ReviewType::Annual)]
        review_type: ReviewType,

        /// Overall rating (1-5 scale)
        #[arg(long, default_value_t = 3)]
        rating: u8,

        #[arg(long, default_value_t = 3)]
        quality: u8,

        #[arg(long, default_value_t = 3)]
        productivity: u8,

        #[arg(long, default_value_t = 3)]
        communication: u8,

        #[arg(long, default_value_t = 3)]
        teamwork: u8,

        #[arg(long, default_value_t = 3)]
        leadership: u8,

        #[arg(long, default_value = "")]
        goals: String,

        #[arg(long, default_value = "")]
        achievements: String,

        #[arg(long, default_value = "")]
        improvements: String,

        #[arg(long, default_value = "")]
        comments: String,

        /// Reviewer attribution (defaults to the configured reviewer)
        #[arg(long)]
        reviewer: Option<String>,

        /// Next review date
        #[arg(long)]
        next_review: Option<NaiveDate>,
    },

    /// List reviews
    #[command(alias = "ls")]
    List,
}

#[derive(Subcommand, Debug)]
pub enum DocCmd {
    /// Read a file and attach it to an employee
    Upload {
        /// Path to the file to attach
        file: PathBuf,

        /// Record id of the employee
        #[arg(long)]
        employee: String,

        #[arg(long, value_enum, default_value_t = DocumentCategory::Other)]
        category: DocumentCategory,

        /// Brief description of the document
        #[arg(long, default_value = "")]
        description: String,
    },

    /// List documents
    #[command(alias = "ls")]
    List,

    /// Decode a stored document back to a file
    Save {
        /// Record id of the document
        id: String,

        /// Target path (defaults to the original file name)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum IncidentCmd {
    /// Report an incident
    Report {
        /// Record id of the employee involved
        #[arg(long)]
        employee: String,

        /// Incident date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long = "type", value_enum, default_value_t = IncidentType::Other)]
        incident_type: IncidentType,

        #[arg(long, value_enum, default_value_t = Severity::Medium)]
        severity: Severity,

        #[arg(long, value_enum, default_value_t = IncidentStatus::Open)]
        status: IncidentStatus,

        #[arg(long)]
        description: String,

        /// Action already taken, if any
        #[arg(long, default_value = "")]
        action: String,

        #[arg(long, default_value = "")]
        witnesses: String,

        /// Reporter attribution (defaults to the configured reviewer)
        #[arg(long)]
        reported_by: Option<String>,

        /// Follow-up date
        #[arg(long)]
        follow_up: Option<NaiveDate>,
    },

    /// List incidents
    #[command(alias = "ls")]
    List,
}
