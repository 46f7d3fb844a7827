//! HTTP request handlers grouped by resource.

pub mod assignments;
pub mod auth;
pub mod drivers;
pub mod health;
pub mod trucks;
