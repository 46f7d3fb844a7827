//! API layer: DTOs, handlers, middleware, and router wiring.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
