use std::fmt;
use std::str::FromStr;

use diesel::prelude::*;
use jiff_diesel::DateTime;
use serde::{Deserialize, Serialize};

/// Roles recognized by the authorization guard.
///
/// Stored in the database as plain text ("Admin" / "Fleet Manager") to stay
/// compatible with rows seeded by earlier iterations of the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Admin,
    FleetManager,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::FleetManager => "Fleet Manager",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::FleetManager
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Admin" => Ok(Role::Admin),
            "Fleet Manager" => Ok(Role::FleetManager),
            other => Err(format!(
                "Unknown role '{}'. Valid roles are: Admin, Fleet Manager",
                other
            )),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User model for reading from database
#[derive(Debug, Queryable, Selectable, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime,
}

impl User {
    /// Parses the stored role string. Unknown values fall back to the
    /// least-privileged role rather than locking the account out entirely.
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or_default()
    }
}

/// NewUser model for inserting new records
#[derive(Debug, Insertable, Clone)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}
