use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Driver model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::drivers)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Driver {
    pub id: i32,
    pub name: String,
    pub license_number: String,
    pub contact_info: String,
    /// Advisory pointer to the truck the driver currently operates. Not kept
    /// in sync with assignment rows; see DESIGN.md.
    pub assigned_truck_id: Option<i32>,
    pub created_at: DateTime,
}

/// NewDriver model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::drivers)]
pub struct NewDriver {
    pub name: String,
    pub license_number: String,
    pub contact_info: String,
    pub assigned_truck_id: Option<i32>,
}

/// UpdateDriver model for partial updates.
///
/// Outer `None` leaves the column untouched; `Some(None)` on the nullable
/// pointer clears it.
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::drivers)]
pub struct UpdateDriver {
    pub name: Option<String>,
    pub license_number: Option<String>,
    pub contact_info: Option<String>,
    pub assigned_truck_id: Option<Option<i32>>,
}

impl UpdateDriver {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.license_number.is_none()
            && self.contact_info.is_none()
            && self.assigned_truck_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_changeset() {
        assert!(UpdateDriver::default().is_empty());

        let update = UpdateDriver {
            name: Some("Jane Doe".to_string()),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }

    #[test]
    fn test_clearing_pointer_is_not_empty() {
        let update = UpdateDriver {
            assigned_truck_id: Some(None),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
