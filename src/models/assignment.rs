use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Default status applied when an assignment is created without one.
pub const DEFAULT_ASSIGNMENT_STATUS: &str = "Active";

/// Assignment model: one driver-truck pairing over a time interval.
///
/// `end_date` is NULL while the assignment is ongoing. Status is free text
/// ("Active" / "Completed" by convention); there is no guarded transition.
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Assignment {
    pub id: i32,
    pub start_date: DateTime,
    pub end_date: Option<DateTime>,
    pub status: String,
    pub driver_id: i32,
    pub truck_id: i32,
}

/// NewAssignment model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::assignments)]
pub struct NewAssignment {
    pub start_date: DateTime,
    pub end_date: Option<DateTime>,
    pub status: String,
    pub driver_id: i32,
    pub truck_id: i32,
}

/// UpdateAssignment model for partial updates.
///
/// `end_date: Some(None)` clears the end date, reopening the assignment.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::assignments)]
pub struct UpdateAssignment {
    pub start_date: Option<DateTime>,
    pub end_date: Option<Option<DateTime>>,
    pub status: Option<String>,
    pub driver_id: Option<i32>,
    pub truck_id: Option<i32>,
}

impl UpdateAssignment {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_none()
            && self.end_date.is_none()
            && self.status.is_none()
            && self.driver_id.is_none()
            && self.truck_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_changeset() {
        assert!(UpdateAssignment::default().is_empty());

        let update = UpdateAssignment {
            status: Some("Completed".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
