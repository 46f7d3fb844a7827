//! Truck-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::double_option;
use crate::models::{DEFAULT_TRUCK_STATUS, NewTruck, Truck, UpdateTruck};
use crate::utils::datetime::format_datetime;

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new truck.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTruckRequest {
    #[validate(length(min = 1, message = "Missing required field: plate_number"))]
    pub plate_number: String,
    #[validate(length(min = 1, message = "Missing required field: model"))]
    pub model: String,
    /// Optional; absent means "Available".
    pub status: Option<String>,
    pub current_driver_id: Option<i32>,
}

impl CreateTruckRequest {
    /// Converts the request DTO into a NewTruck model for insertion.
    pub fn into_new_truck(self) -> NewTruck {
        NewTruck {
            plate_number: self.plate_number,
            model: self.model,
            status: self
                .status
                .unwrap_or_else(|| DEFAULT_TRUCK_STATUS.to_string()),
            current_driver_id: self.current_driver_id,
        }
    }
}

/// Request body for partially updating a truck.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateTruckRequest {
    pub plate_number: Option<String>,
    pub model: Option<String>,
    pub status: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub current_driver_id: Option<Option<i32>>,
}

impl UpdateTruckRequest {
    /// Converts the request DTO into an UpdateTruck changeset.
    pub fn into_update_truck(self) -> UpdateTruck {
        UpdateTruck {
            plate_number: self.plate_number,
            model: self.model,
            status: self.status,
            current_driver_id: self.current_driver_id,
        }
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for truck data.
#[derive(Debug, Serialize)]
pub struct TruckResponse {
    pub id: i32,
    pub plate_number: String,
    pub model: String,
    pub status: String,
    pub current_driver_id: Option<i32>,
    pub created_at: String,
}

impl From<Truck> for TruckResponse {
    fn from(truck: Truck) -> Self {
        Self {
            id: truck.id,
            plate_number: truck.plate_number,
            model: truck.model,
            status: truck.status,
            current_driver_id: truck.current_driver_id,
            created_at: format_datetime(truck.created_at.to_jiff()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_defaults_status() {
        let request = CreateTruckRequest {
            plate_number: "ABC-123".to_string(),
            model: "Volvo FH16".to_string(),
            status: None,
            current_driver_id: None,
        };
        let new_truck = request.into_new_truck();
        assert_eq!(new_truck.status, "Available");
    }

    #[test]
    fn test_create_keeps_explicit_status() {
        let request = CreateTruckRequest {
            plate_number: "ABC-123".to_string(),
            model: "Volvo FH16".to_string(),
            status: Some("Maintenance".to_string()),
            current_driver_id: None,
        };
        assert_eq!(request.into_new_truck().status, "Maintenance");
    }

    #[test]
    fn test_create_requires_plate_number() {
        let request = CreateTruckRequest {
            plate_number: String::new(),
            model: "Volvo FH16".to_string(),
            status: None,
            current_driver_id: None,
        };
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("plate_number"));
    }
}
