//! Server-side session management.
//!
//! Sessions are held in-process; the client only carries an opaque cookie
//! token. Restarting the server therefore logs everyone out, which is
//! acceptable for this deployment (single instance, one trusted origin).

mod store;

pub use store::{SessionData, SessionStore};

/// Name of the session cookie issued on login.
pub const SESSION_COOKIE: &str = "fleet_session";
