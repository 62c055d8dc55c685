use crate::commands::{CmdMessage, CmdResult, IncidentListing};
use crate::error::Result;
use crate::model::IncidentFields;
use crate::state::HrStore;
use crate::store::StateStore;

/// Record an incident. Incidents are append-only; status updates would be
/// new reports in this model.
pub fn report<S: StateStore>(hr: &mut HrStore<S>, fields: IncidentFields) -> Result<CmdResult> {
    let incident = hr.add_incident(fields)?;
    let employee_name = hr.employee_name(&incident.employee_id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} incident reported for {} (severity: {})",
        incident.incident_type, employee_name, incident.severity
    )));
    result.incidents.push(IncidentListing {
        incident,
        employee_name,
    });
    Ok(result)
}

pub fn list<S: StateStore>(hr: &HrStore<S>) -> Result<CmdResult> {
    let listed = hr
        .incidents()
        .iter()
        .map(|incident| IncidentListing {
            incident: incident.clone(),
            employee_name: hr.employee_name(&incident.employee_id),
        })
        .collect();
    Ok(CmdResult::default().with_incidents(listed))
}
