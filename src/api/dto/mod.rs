//! Data Transfer Objects for API requests and responses.

mod assignment;
mod auth;
mod driver;
mod error;
mod truck;

pub use assignment::{AssignmentResponse, CreateAssignmentRequest, UpdateAssignmentRequest};
pub use auth::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
pub use driver::{CreateDriverRequest, DriverResponse, UpdateDriverRequest};
pub use error::{ErrorResponse, duplicate_message, not_found_message};
pub use truck::{CreateTruckRequest, TruckResponse, UpdateTruckRequest};

use serde::{Deserialize, Deserializer, Serialize};

/// Plain success message body, used by delete and logout endpoints.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Absent fields stay `None` (serde default); a present field, including
/// `null`, becomes `Some(...)`. Used with `#[serde(default, deserialize_with
/// = "double_option")]` on nullable update fields.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
