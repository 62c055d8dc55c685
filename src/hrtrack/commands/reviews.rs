use crate::commands::{CmdMessage, CmdResult, ReviewListing};
use crate::error::Result;
use crate::model::ReviewFields;
use crate::state::HrStore;
use crate::store::StateStore;

/// Append a review. Reviews are an append-only log; there is no update or
/// delete. The employee reference is by convention only and is not checked.
pub fn add<S: StateStore>(hr: &mut HrStore<S>, fields: ReviewFields) -> Result<CmdResult> {
    let review = hr.add_review(fields)?;
    let employee_name = hr.employee_name(&review.employee_id);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "{} review recorded for {} ({}/5)",
        review.review_type, employee_name, review.overall_rating
    )));
    result.reviews.push(ReviewListing {
        review,
        employee_name,
    });
    Ok(result)
}

pub fn list<S: StateStore>(hr: &HrStore<S>) -> Result<CmdResult> {
    let listed = hr
        .reviews()
        .iter()
        .map(|review| ReviewListing {
            review: review.clone(),
            employee_name: hr.employee_name(&review.employee_id),
        })
        .collect();
    Ok(CmdResult::default().with_reviews(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::fixtures::{review_fields, store_with_employees};

    #[test]
    fn add_resolves_employee_name() {
        let mut hr = store_with_employees(&[("Jane", "Doe")]);
        let id = hr.employees()[0].id.clone();
        let result = add(&mut hr, review_fields(id)).unwrap();
        assert_eq!(result.reviews[0].employee_name, "Jane Doe");
        assert!(result.messages[0].content.contains("Annual review"));
    }

    #[test]
    fn listing_dangling_reference_uses_sentinel_name() {
        let mut hr = store_with_employees(&[]);
        add(&mut hr, review_fields("orphan".into())).unwrap();
        let result = list(&hr).unwrap();
        assert_eq!(result.reviews.len(), 1);
        assert_eq!(result.reviews[0].employee_name, "Unknown Employee");
    }
}
