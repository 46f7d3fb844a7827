//! Embedded migration execution.
//!
//! diesel_migrations' MigrationHarness runs on a synchronous connection, so
//! each entry point hops onto the blocking pool with a dedicated connection.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::MigrationHarness;

use crate::db::MIGRATIONS;
use crate::error::{AppError, AppResult};

fn establish(database_url: &str) -> AppResult<PgConnection> {
    PgConnection::establish(database_url).map_err(|e| AppError::Database {
        operation: "establish connection for migrations".to_string(),
        source: anyhow::anyhow!("Connection error: {}", e),
    })
}

/// Runs all pending migrations, returning the names of those applied.
pub async fn apply_migrations(database_url: &str) -> AppResult<Vec<String>> {
    let database_url = database_url.to_string();
    tokio::task::spawn_blocking(move || {
        let mut conn = establish(&database_url)?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "run pending migrations".to_string(),
                source: anyhow::anyhow!("Migration error: {}", e),
            })?;
        Ok(applied.iter().map(|m| m.to_string()).collect())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}

/// Lists pending migrations without applying them.
pub async fn pending_migrations(database_url: &str) -> AppResult<Vec<String>> {
    let database_url = database_url.to_string();
    tokio::task::spawn_blocking(move || {
        let mut conn = establish(&database_url)?;
        let pending = conn
            .pending_migrations(MIGRATIONS)
            .map_err(|e| AppError::Database {
                operation: "check pending migrations".to_string(),
                source: anyhow::anyhow!("Migration error: {}", e),
            })?;
        Ok(pending.iter().map(|m| m.name().to_string()).collect())
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}

/// Reverts the last `steps` applied migrations.
pub async fn revert_migrations(database_url: &str, steps: u32) -> AppResult<usize> {
    if steps == 0 {
        return Err(AppError::validation(
            "rollback_steps",
            "Number of rollback steps must be greater than 0",
        ));
    }

    let database_url = database_url.to_string();
    tokio::task::spawn_blocking(move || {
        let mut conn = establish(&database_url)?;

        let applied = conn
            .applied_migrations()
            .map_err(|e| AppError::Database {
                operation: "get applied migrations".to_string(),
                source: anyhow::anyhow!("Migration error: {}", e),
            })?;

        if applied.len() < steps as usize {
            return Err(AppError::validation(
                "rollback_steps",
                format!(
                    "Cannot rollback {} migrations - only {} applied migrations available",
                    steps,
                    applied.len()
                ),
            ));
        }

        let mut reverted = 0;
        for _ in 0..steps {
            conn.revert_last_migration(MIGRATIONS)
                .map_err(|e| AppError::Database {
                    operation: "revert migration".to_string(),
                    source: anyhow::anyhow!("Migration rollback error: {}", e),
                })?;
            reverted += 1;
        }

        Ok(reverted)
    })
    .await
    .map_err(|e| AppError::Internal {
        source: anyhow::Error::from(e),
    })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_zero_rollback_steps_rejected() {
        let result = revert_migrations("postgres://localhost/fleetman_test", 0).await;
        match result {
            Err(AppError::Validation { field, reason }) => {
                assert_eq!(field, "rollback_steps");
                assert!(reason.contains("greater than 0"));
            }
            other => panic!("Expected validation error, got: {:?}", other),
        }
    }
}
