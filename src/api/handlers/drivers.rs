//! Driver CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{CreateDriverRequest, DriverResponse, MessageResponse, UpdateDriverRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates driver-related routes.
///
/// Routes:
/// - GET /        - List all drivers
/// - POST /       - Create a new driver
/// - GET /{id}    - Get driver by ID
/// - PUT /{id}    - Partially update driver by ID
/// - DELETE /{id} - Delete driver by ID
pub fn driver_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_drivers).post(create_driver))
        .route(
            "/{id}",
            get(get_driver).put(update_driver).delete(delete_driver),
        )
}

/// GET /drivers - List all drivers
async fn list_drivers(
    State(state): State<AppState>,
) -> Result<Json<Vec<DriverResponse>>, AppError> {
    let drivers = state.services.drivers.list_drivers().await?;
    let responses: Vec<DriverResponse> = drivers.into_iter().map(DriverResponse::from).collect();
    Ok(Json(responses))
}

/// GET /drivers/{id} - Get driver by ID
async fn get_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<DriverResponse>, AppError> {
    let driver = state.services.drivers.get_driver(id).await?;
    Ok(Json(DriverResponse::from(driver)))
}

/// POST /drivers - Create new driver
///
/// Returns 201 Created with the created driver data.
async fn create_driver(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDriverRequest>,
) -> Result<(StatusCode, Json<DriverResponse>), AppError> {
    let driver = state
        .services
        .drivers
        .create_driver(payload.into_new_driver())
        .await?;
    Ok((StatusCode::CREATED, Json(DriverResponse::from(driver))))
}

/// PUT /drivers/{id} - Partially update driver
///
/// Only the fields present in the body are applied.
async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateDriverRequest>,
) -> Result<Json<DriverResponse>, AppError> {
    let driver = state
        .services
        .drivers
        .update_driver(id, payload.into_update_driver())
        .await?;
    Ok(Json(DriverResponse::from(driver)))
}

/// DELETE /drivers/{id} - Delete driver
///
/// Cascades to the driver's assignments.
async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    state.services.drivers.delete_driver(id).await?;
    Ok(Json(MessageResponse::new("Driver deleted successfully")))
}
