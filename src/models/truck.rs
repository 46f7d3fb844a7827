use diesel::prelude::*;
use jiff_diesel::DateTime;

/// Default status applied when a truck is created without one.
pub const DEFAULT_TRUCK_STATUS: &str = "Available";

/// Truck model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::trucks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Truck {
    pub id: i32,
    pub plate_number: String,
    pub model: String,
    /// Free text by convention: Available / In Use / Maintenance.
    pub status: String,
    /// Advisory pointer, not synchronized with assignments. See DESIGN.md.
    pub current_driver_id: Option<i32>,
    pub created_at: DateTime,
}

/// NewTruck model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::trucks)]
pub struct NewTruck {
    pub plate_number: String,
    pub model: String,
    pub status: String,
    pub current_driver_id: Option<i32>,
}

/// UpdateTruck model for partial updates
#[derive(Debug, AsChangeset, Clone, Default)]
#[diesel(table_name = crate::schema::trucks)]
pub struct UpdateTruck {
    pub plate_number: Option<String>,
    pub model: Option<String>,
    pub status: Option<String>,
    pub current_driver_id: Option<Option<i32>>,
}

impl UpdateTruck {
    pub fn is_empty(&self) -> bool {
        self.plate_number.is_none()
            && self.model.is_none()
            && self.status.is_none()
            && self.current_driver_id.is_none()
    }
}
