//! Health check handler.
//!
//! The check goes straight to the connection pool rather than through the
//! service layer, so it reports database connectivity even when the domain
//! code is idle.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use crate::state::AppState;

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseHealth,
}

/// Database connectivity portion of the health check.
#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub status: &'static str,
    pub message: String,
    pub response_time_ms: u64,
}

/// GET /health - Health check with database ping
///
/// Returns 200 with `status: "ok"` when a pooled connection answers a
/// trivial query, 503 with `status: "degraded"` otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let database = check_database(&state).await;
    let healthy = database.status == "connected";

    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" },
        version: crate::pkg_version(),
        database,
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

/// Checks database connectivity by running `SELECT 1` on a pooled connection.
async fn check_database(state: &AppState) -> DatabaseHealth {
    use diesel_async::RunQueryDsl;

    let start = std::time::Instant::now();

    match state.db_pool.get().await {
        Ok(mut conn) => match diesel::sql_query("SELECT 1").execute(&mut conn).await {
            Ok(_) => DatabaseHealth {
                status: "connected",
                message: "Connected".to_string(),
                response_time_ms: start.elapsed().as_millis() as u64,
            },
            Err(e) => DatabaseHealth {
                status: "unavailable",
                message: format!("Query failed: {}", e),
                response_time_ms: start.elapsed().as_millis() as u64,
            },
        },
        Err(e) => DatabaseHealth {
            status: "unavailable",
            message: format!("Connection failed: {}", e),
            response_time_ms: start.elapsed().as_millis() as u64,
        },
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use diesel_async::AsyncPgConnection;
    use diesel_async::pooled_connection::AsyncDieselConnectionManager;
    use diesel_async::pooled_connection::bb8::Pool;

    use super::*;
    use crate::config::CorsConfig;
    use crate::session::SessionStore;

    /// State over a lazy pool pointing at nothing; `get()` fails after the
    /// short timeout instead of the 30-second default.
    fn unreachable_state() -> AppState {
        let manager = AsyncDieselConnectionManager::<AsyncPgConnection>::new(
            "postgres://localhost:1/fleetman_unreachable",
        );
        let pool = Pool::builder()
            .connection_timeout(Duration::from_millis(250))
            .build_unchecked(manager);
        AppState::new(pool, SessionStore::new(3600), CorsConfig::default())
    }

    #[tokio::test]
    async fn test_unreachable_database_reports_degraded() {
        let (status, Json(body)) = health(State(unreachable_state())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body.status, "degraded");
        assert_eq!(body.database.status, "unavailable");
        assert!(!body.version.is_empty());
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok",
            version: "0.1.0",
            database: DatabaseHealth {
                status: "connected",
                message: "Connected".to_string(),
                response_time_ms: 5,
            },
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["database"]["status"], "connected");
    }
}
