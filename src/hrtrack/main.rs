use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use hrtrack::api::{
    CmdMessage, ConfigAction, DashboardSummary, DocumentListing, HrApi, IncidentListing,
    MessageLevel, ReviewListing,
};
use hrtrack::config::HrConfig;
use hrtrack::error::{HrError, Result};
use hrtrack::ingest;
use hrtrack::model::{
    EmergencyContact, Employee, EmployeeFields, EmployeeStatus, IncidentFields, IncidentStatus,
    PerformanceRatings, RecordId, ReviewFields, Severity,
};
use hrtrack::store::fs::FileStore;
use std::sync::mpsc;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands, DocCmd, EmployeeCmd, IncidentCmd, ReviewCmd};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: HrApi<FileStore>,
    reviewer: String,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Commands::Employee(cmd) => handle_employee(&mut ctx, cmd),
        Commands::Review(cmd) => handle_review(&mut ctx, cmd),
        Commands::Doc(cmd) => handle_doc(&mut ctx, cmd),
        Commands::Incident(cmd) => handle_incident(&mut ctx, cmd),
        Commands::Dashboard => handle_dashboard(&ctx),
        Commands::Config { key, value } => handle_config(&ctx, key, value),
        Commands::Init => handle_init(&ctx),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "hrtrack", "hrtrack")
            .ok_or_else(|| HrError::Store("Could not determine data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = HrConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(data_dir.clone());

    Ok(AppContext {
        api: HrApi::open(store, data_dir),
        reviewer: config.reviewer,
    })
}

fn handle_employee(ctx: &mut AppContext, cmd: EmployeeCmd) -> Result<()> {
    match cmd {
        EmployeeCmd::Add {
            first_name,
            last_name,
            email,
            phone,
            position,
            department,
            start_date,
            salary,
            status,
            emergency_name,
            emergency_phone,
            emergency_relationship,
        } => {
            let result = ctx.api.add_employee(EmployeeFields {
                first_name,
                last_name,
                email,
                phone,
                position,
                department,
                start_date,
                salary,
                status,
                emergency_contact: EmergencyContact {
                    name: emergency_name,
                    phone: emergency_phone,
                    relationship: emergency_relationship,
                },
            })?;
            print_messages(&result.messages);
        }
        EmployeeCmd::Update {
            id,
            first_name,
            last_name,
            email,
            phone,
            position,
            department,
            start_date,
            salary,
            status,
            emergency_name,
            emergency_phone,
            emergency_relationship,
        } => {
            let id = RecordId::from(id);
            let Some(mut employee) = ctx.api.employee(&id) else {
                print_messages(&[CmdMessage::warning(format!("No employee with id {}", id))]);
                return Ok(());
            };

            apply(&mut employee.first_name, first_name);
            apply(&mut employee.last_name, last_name);
            apply(&mut employee.email, email);
            apply(&mut employee.phone, phone);
            apply(&mut employee.position, position);
            apply(&mut employee.department, department);
            apply(&mut employee.salary, salary);
            apply(&mut employee.emergency_contact.name, emergency_name);
            apply(&mut employee.emergency_contact.phone, emergency_phone);
            apply(
                &mut employee.emergency_contact.relationship,
                emergency_relationship,
            );
            if let Some(date) = start_date {
                employee.start_date = Some(date);
            }
            if let Some(status) = status {
                employee.status = status;
            }

            let result = ctx.api.update_employee(employee)?;
            print_messages(&result.messages);
        }
        EmployeeCmd::Delete { id } => {
            let result = ctx.api.delete_employee(&RecordId::from(id))?;
            print_messages(&result.messages);
        }
        EmployeeCmd::List { search } => {
            let result = ctx.api.list_employees(search.as_deref())?;
            print_employees(&result.employees);
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_review(ctx: &mut AppContext, cmd: ReviewCmd) -> Result<()> {
    match cmd {
        ReviewCmd::Add {
            employee,
            date,
            review_type,
            rating,
            quality,
            productivity,
            communication,
            teamwork,
            leadership,
            goals,
            achievements,
            improvements,
            comments,
            reviewer,
            next_review,
        } => {
            let result = ctx.api.add_review(ReviewFields {
                employee_id: RecordId::from(employee),
                review_date: date.unwrap_or_else(|| Utc::now().date_naive()),
                review_type,
                overall_rating: rating,
                performance: PerformanceRatings {
                    quality,
                    productivity,
                    communication,
                    teamwork,
                    leadership,
                },
                goals,
                achievements,
                areas_for_improvement: improvements,
                comments,
                reviewer_id: reviewer.unwrap_or_else(|| ctx.reviewer.clone()),
                next_review_date: next_review,
            })?;
            print_messages(&result.messages);
        }
        ReviewCmd::List => {
            let result = ctx.api.list_reviews()?;
            print_reviews(&result.reviews);
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_doc(ctx: &mut AppContext, cmd: DocCmd) -> Result<()> {
    match cmd {
        DocCmd::Upload {
            file,
            employee,
            category,
            description,
        } => {
            // The read runs on a worker thread; completion hands the encoded
            // file back and enqueues the single add_document call.
            let (tx, rx) = mpsc::channel();
            let _worker = ingest::spawn_read(file, move |outcome| {
                let _ = tx.send(outcome);
            });
            let document = rx
                .recv()
                .map_err(|_| HrError::Document("File read worker disappeared".to_string()))??;

            let result =
                ctx.api
                    .add_document(RecordId::from(employee), category, description, document)?;
            print_messages(&result.messages);
        }
        DocCmd::List => {
            let result = ctx.api.list_documents()?;
            print_documents(&result.documents);
            print_messages(&result.messages);
        }
        DocCmd::Save { id, out } => {
            let result = ctx.api.save_document(&RecordId::from(id), out)?;
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_incident(ctx: &mut AppContext, cmd: IncidentCmd) -> Result<()> {
    match cmd {
        IncidentCmd::Report {
            employee,
            date,
            incident_type,
            severity,
            status,
            description,
            action,
            witnesses,
            reported_by,
            follow_up,
        } => {
            let result = ctx.api.report_incident(IncidentFields {
                employee_id: RecordId::from(employee),
                incident_date: date.unwrap_or_else(|| Utc::now().date_naive()),
                incident_type,
                severity,
                description,
                action_taken: action,
                status,
                reported_by: reported_by.unwrap_or_else(|| ctx.reviewer.clone()),
                witnesses,
                follow_up_date: follow_up,
            })?;
            print_messages(&result.messages);
        }
        IncidentCmd::List => {
            let result = ctx.api.list_incidents()?;
            print_incidents(&result.incidents);
            print_messages(&result.messages);
        }
    }
    Ok(())
}

fn handle_dashboard(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.dashboard()?;
    if let Some(summary) = result.dashboard {
        print_dashboard(&summary);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some("reviewer"), None) => ConfigAction::ShowKey("reviewer".to_string()),
        (Some("reviewer"), Some(v)) => ConfigAction::SetReviewer(v),
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
            return Ok(());
        }
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        println!("reviewer = {}", config.reviewer);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn apply(slot: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *slot = value;
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const NAME_WIDTH: usize = 22;
const POSITION_WIDTH: usize = 20;
const DEPARTMENT_WIDTH: usize = 16;

fn print_employees(employees: &[Employee]) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }

    for employee in employees {
        let status = match employee.status {
            EmployeeStatus::Active => employee.status.to_string().green(),
            EmployeeStatus::OnLeave => employee.status.to_string().yellow(),
            EmployeeStatus::Inactive => employee.status.to_string().red(),
        };
        println!(
            "  {}  {}  {}  {}  {}",
            employee.id.to_string().dimmed(),
            column(&employee.full_name(), NAME_WIDTH).bold(),
            column(&employee.position, POSITION_WIDTH),
            column(&employee.department, DEPARTMENT_WIDTH),
            status
        );
    }
}

fn print_reviews(reviews: &[ReviewListing]) {
    if reviews.is_empty() {
        println!("No reviews found.");
        return;
    }

    for listing in reviews {
        let review = &listing.review;
        println!(
            "  {}  {}  {}  {} Review  {}",
            review.id.to_string().dimmed(),
            review.review_date,
            column(&listing.employee_name, NAME_WIDTH).bold(),
            review.review_type,
            format!("{}/5", review.overall_rating).yellow()
        );
        if !review.achievements.is_empty() {
            println!("      {}", review.achievements.dimmed());
        }
    }
}

fn print_documents(documents: &[DocumentListing]) {
    if documents.is_empty() {
        println!("No documents found.");
        return;
    }

    for listing in documents {
        let document = &listing.document;
        println!(
            "  {}  {}  {} • {} • {}",
            document.id.to_string().dimmed(),
            column(&document.file_name, NAME_WIDTH).bold(),
            listing.employee_name,
            document.category,
            document.upload_date
        );
        if !document.description.is_empty() {
            println!("      {}", document.description.dimmed());
        }
    }
}

fn print_incidents(incidents: &[IncidentListing]) {
    if incidents.is_empty() {
        println!("No incidents found.");
        return;
    }

    for listing in incidents {
        let incident = &listing.incident;
        let severity = match incident.severity {
            Severity::Critical | Severity::High => incident.severity.to_string().red(),
            Severity::Medium => incident.severity.to_string().yellow(),
            Severity::Low => incident.severity.to_string().green(),
        };
        let status = match incident.status {
            IncidentStatus::Open => incident.status.to_string().red(),
            IncidentStatus::InProgress => incident.status.to_string().yellow(),
            IncidentStatus::Resolved => incident.status.to_string().blue(),
            IncidentStatus::Closed => incident.status.to_string().green(),
        };
        println!(
            "  {}  {}  {}  {}  {} [{}]",
            incident.id.to_string().dimmed(),
            incident.incident_date,
            column(&listing.employee_name, NAME_WIDTH).bold(),
            incident.incident_type,
            severity,
            status
        );
        if !incident.description.is_empty() {
            println!("      {}", incident.description.dimmed());
        }
    }
}

fn print_dashboard(summary: &DashboardSummary) {
    println!("{}", "Employees".bold());
    println!(
        "  {} total, {} active",
        summary.total_employees, summary.active_employees
    );
    println!("{}", "Reviews".bold());
    println!(
        "  {} total, {} this year",
        summary.total_reviews, summary.reviews_this_year
    );
    println!("{}", "Documents".bold());
    println!(
        "  {} total, {} medical",
        summary.total_documents, summary.medical_documents
    );
    println!("{}", "Incidents".bold());
    println!(
        "  {} open, {} high priority",
        summary.open_incidents, summary.high_priority_incidents
    );
}

fn column(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
