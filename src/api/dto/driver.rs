//! Driver-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::double_option;
use crate::models::{Driver, NewDriver, UpdateDriver};
use crate::utils::datetime::format_datetime;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new driver.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, message = "Missing required field: name"))]
    pub name: String,
    #[validate(length(min = 1, message = "Missing required field: license_number"))]
    pub license_number: String,
    #[validate(length(min = 1, message = "Missing required field: contact_info"))]
    pub contact_info: String,
    pub assigned_truck_id: Option<i32>,
}

impl CreateDriverRequest {
    /// Converts the request DTO into a NewDriver model for insertion.
    pub fn into_new_driver(self) -> NewDriver {
        NewDriver {
            name: self.name,
            license_number: self.license_number,
            contact_info: self.contact_info,
            assigned_truck_id: self.assigned_truck_id,
        }
    }
}

/// Request body for partially updating a driver.
///
/// Absent fields are left untouched; `assigned_truck_id: null` clears the
/// pointer.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateDriverRequest {
    pub name: Option<String>,
    pub license_number: Option<String>,
    pub contact_info: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub assigned_truck_id: Option<Option<i32>>,
}

impl UpdateDriverRequest {
    /// Converts the request DTO into an UpdateDriver changeset.
    pub fn into_update_driver(self) -> UpdateDriver {
        UpdateDriver {
            name: self.name,
            license_number: self.license_number,
            contact_info: self.contact_info,
            assigned_truck_id: self.assigned_truck_id,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for driver data.
#[derive(Debug, Serialize)]
pub struct DriverResponse {
    pub id: i32,
    pub name: String,
    pub license_number: String,
    pub contact_info: String,
    pub assigned_truck_id: Option<i32>,
    pub created_at: String,
}

impl From<Driver> for DriverResponse {
    fn from(driver: Driver) -> Self {
        Self {
            id: driver.id,
            name: driver.name,
            license_number: driver.license_number,
            contact_info: driver.contact_info,
            assigned_truck_id: driver.assigned_truck_id,
            created_at: format_datetime(driver.created_at.to_jiff()),
        }
    }
}
