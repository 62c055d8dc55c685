use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Employee, EmployeeFields, RecordId};
use crate::state::HrStore;
use crate::store::StateStore;

pub fn add<S: StateStore>(hr: &mut HrStore<S>, fields: EmployeeFields) -> Result<CmdResult> {
    let employee = hr.add_employee(fields)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee added ({}): {}",
        employee.id,
        employee.full_name()
    )));
    result.employees.push(employee);
    Ok(result)
}

/// Full-record replace. A miss is reported as a warning, not an error — the
/// collection is left untouched.
pub fn update<S: StateStore>(hr: &mut HrStore<S>, employee: Employee) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let name = employee.full_name();
    let id = employee.id.clone();

    if hr.update_employee(employee)? {
        result.add_message(CmdMessage::success(format!(
            "Employee updated ({}): {}",
            id, name
        )));
    } else {
        result.add_message(CmdMessage::warning(format!("No employee with id {}", id)));
    }
    Ok(result)
}

pub fn delete<S: StateStore>(hr: &mut HrStore<S>, id: &RecordId) -> Result<CmdResult> {
    let name = hr.employee_name(id);
    let summary = hr.delete_employee(id)?;
    let mut result = CmdResult::default();

    if summary.employee_removed {
        result.add_message(CmdMessage::success(format!(
            "Employee deleted ({}): {}",
            id, name
        )));
        let dependents =
            summary.reviews_removed + summary.documents_removed + summary.incidents_removed;
        if dependents > 0 {
            result.add_message(CmdMessage::info(format!(
                "Removed {} review(s), {} document(s), {} incident(s)",
                summary.reviews_removed, summary.documents_removed, summary.incidents_removed
            )));
        }
    } else {
        result.add_message(CmdMessage::warning(format!("No employee with id {}", id)));
    }
    Ok(result)
}

pub fn list<S: StateStore>(hr: &HrStore<S>, search: Option<&str>) -> Result<CmdResult> {
    let listed: Vec<Employee> = hr
        .filter_employees(search.unwrap_or(""))
        .into_iter()
        .cloned()
        .collect();
    Ok(CmdResult::default().with_employees(listed))
}
