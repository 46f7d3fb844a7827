//! Assignment-related DTOs for API requests and responses.
//!
//! Assignment timestamps cross the wire as text; conversion into changesets
//! is fallible because the date strings must parse.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::double_option;
use crate::error::AppResult;
use crate::models::{Assignment, DEFAULT_ASSIGNMENT_STATUS, NewAssignment, UpdateAssignment};
use crate::utils::datetime::{format_datetime, parse_datetime};

// ============================================================================
// Request DTOs
// ============================================================================

/// Request body for creating a new assignment.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAssignmentRequest {
    #[validate(length(min = 1, message = "Missing required field: start_date"))]
    pub start_date: String,
    /// Optional; absent or empty means the assignment is ongoing.
    pub end_date: Option<String>,
    /// Optional; absent means "Active".
    pub status: Option<String>,
    pub driver_id: i32,
    pub truck_id: i32,
}

impl CreateAssignmentRequest {
    /// Converts the request DTO into a NewAssignment model, parsing dates.
    pub fn into_new_assignment(self) -> AppResult<NewAssignment> {
        let start_date = parse_datetime("start_date", &self.start_date)?;

        let end_date = match self.end_date.as_deref() {
            Some(value) if !value.is_empty() => Some(parse_datetime("end_date", value)?),
            _ => None,
        };

        Ok(NewAssignment {
            start_date: start_date.into(),
            end_date: end_date.map(Into::into),
            status: self
                .status
                .unwrap_or_else(|| DEFAULT_ASSIGNMENT_STATUS.to_string()),
            driver_id: self.driver_id,
            truck_id: self.truck_id,
        })
    }
}

/// Request body for partially updating an assignment.
///
/// `end_date` distinguishes three cases: absent leaves it untouched, `null`
/// or an empty string clears it (reopening the assignment), and a timestamp
/// string sets it.
#[derive(Debug, Deserialize, Validate, Default)]
pub struct UpdateAssignmentRequest {
    pub start_date: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<String>>,
    pub status: Option<String>,
    pub driver_id: Option<i32>,
    pub truck_id: Option<i32>,
}

impl UpdateAssignmentRequest {
    /// Converts the request DTO into an UpdateAssignment changeset, parsing
    /// any supplied dates.
    pub fn into_update_assignment(self) -> AppResult<UpdateAssignment> {
        let start_date = match self.start_date.as_deref() {
            Some(value) => Some(parse_datetime("start_date", value)?.into()),
            None => None,
        };

        let end_date = match self.end_date {
            None => None,
            Some(None) => Some(None),
            Some(Some(value)) if value.is_empty() => Some(None),
            Some(Some(value)) => Some(Some(parse_datetime("end_date", &value)?.into())),
        };

        Ok(UpdateAssignment {
            start_date,
            end_date,
            status: self.status,
            driver_id: self.driver_id,
            truck_id: self.truck_id,
        })
    }
}

// ============================================================================
// Response DTOs
// ============================================================================

/// Response body for assignment data.
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub id: i32,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: String,
    pub driver_id: i32,
    pub truck_id: i32,
}

impl From<Assignment> for AssignmentResponse {
    fn from(assignment: Assignment) -> Self {
        Self {
            id: assignment.id,
            start_date: format_datetime(assignment.start_date.to_jiff()),
            end_date: assignment.end_date.map(|dt| format_datetime(dt.to_jiff())),
            status: assignment.status,
            driver_id: assignment.driver_id,
            truck_id: assignment.truck_id,
        }
    }
}
