//! Service layer for business logic operations.
//!
//! Services encapsulate business rules and coordinate between
//! repositories and handlers.

mod assignment_service;
mod auth_service;
mod driver_service;
mod truck_service;

pub use assignment_service::AssignmentService;
pub use auth_service::AuthService;
pub use driver_service::DriverService;
pub use truck_service::TruckService;

use crate::repositories::Repositories;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since underlying pools use `Arc` internally.
#[derive(Clone)]
pub struct Services {
    pub auth: AuthService,
    pub drivers: DriverService,
    pub trucks: TruckService,
    pub assignments: AssignmentService,
}

impl Services {
    /// Creates a new Services instance from Repositories.
    pub fn new(repos: Repositories) -> Self {
        Self {
            auth: AuthService::new(repos.users),
            drivers: DriverService::new(repos.drivers.clone()),
            trucks: TruckService::new(repos.trucks.clone()),
            assignments: AssignmentService::new(repos.assignments, repos.drivers, repos.trucks),
        }
    }
}

/// Shared plumbing for the database-backed service tests.
///
/// Tests call [`test_support::database_services`] and return early when
/// `FLEETMAN_TEST_DATABASE_URL` is unset, so the suite stays green without a
/// database while CI with one gets full coverage.
#[cfg(test)]
pub(crate) mod test_support {
    use tokio::sync::OnceCell;

    use super::Services;
    use crate::config::DatabaseConfig;
    use crate::db::{apply_migrations, establish_async_connection_pool};
    use crate::repositories::Repositories;

    static MIGRATIONS_APPLIED: OnceCell<()> = OnceCell::const_new();

    /// Services wired to the test database, or `None` when none is configured.
    pub(crate) async fn database_services() -> Option<Services> {
        let url = std::env::var("FLEETMAN_TEST_DATABASE_URL").ok()?;

        MIGRATIONS_APPLIED
            .get_or_init(|| async {
                apply_migrations(&url)
                    .await
                    .expect("test database migrations should apply");
            })
            .await;

        let config = DatabaseConfig {
            url,
            max_connections: 2,
            ..Default::default()
        };
        let pool = establish_async_connection_pool(&config)
            .await
            .expect("test database pool should build");

        Some(Services::new(Repositories::new(pool)))
    }

    /// Unique suffix so concurrent tests never collide on unique columns.
    pub(crate) fn unique_tag() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }
}
