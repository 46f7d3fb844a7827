pub mod datetime;
pub mod password;
pub mod validate;
