//! Repository layer for data access operations.
//!
//! Provides async CRUD operations for all domain entities.

mod assignment_repo;
mod driver_repo;
mod truck_repo;
mod user_repo;

pub use assignment_repo::AssignmentRepository;
pub use driver_repo::DriverRepository;
pub use truck_repo::TruckRepository;
pub use user_repo::UserRepository;

use crate::db::AsyncDbPool;

/// Aggregates all repositories for convenient access.
///
/// Since `AsyncDbPool` uses `Arc` internally, cloning is cheap.
#[derive(Clone)]
pub struct Repositories {
    pub users: UserRepository,
    pub drivers: DriverRepository,
    pub trucks: TruckRepository,
    pub assignments: AssignmentRepository,
}

impl Repositories {
    /// Creates a new Repositories instance with all repositories initialized.
    pub fn new(pool: AsyncDbPool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            trucks: TruckRepository::new(pool.clone()),
            assignments: AssignmentRepository::new(pool),
        }
    }
}
