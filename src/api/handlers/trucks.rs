//! Truck CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{CreateTruckRequest, MessageResponse, TruckResponse, UpdateTruckRequest};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates truck-related routes.
///
/// Routes:
/// - GET /        - List all trucks
/// - POST /       - Create a new truck
/// - GET /{id}    - Get truck by ID
/// - PUT /{id}    - Partially update truck by ID
/// - DELETE /{id} - Delete truck by ID
pub fn truck_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_trucks).post(create_truck))
        .route(
            "/{id}",
            get(get_truck).put(update_truck).delete(delete_truck),
        )
}

/// GET /trucks - List all trucks
async fn list_trucks(State(state): State<AppState>) -> Result<Json<Vec<TruckResponse>>, AppError> {
    let trucks = state.services.trucks.list_trucks().await?;
    let responses: Vec<TruckResponse> = trucks.into_iter().map(TruckResponse::from).collect();
    Ok(Json(responses))
}

/// GET /trucks/{id} - Get truck by ID
async fn get_truck(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<TruckResponse>, AppError> {
    let truck = state.services.trucks.get_truck(id).await?;
    Ok(Json(TruckResponse::from(truck)))
}

/// POST /trucks - Create new truck
///
/// Status defaults to "Available" when omitted. Returns 201 Created.
async fn create_truck(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateTruckRequest>,
) -> Result<(StatusCode, Json<TruckResponse>), AppError> {
    let truck = state
        .services
        .trucks
        .create_truck(payload.into_new_truck())
        .await?;
    Ok((StatusCode::CREATED, Json(TruckResponse::from(truck))))
}

/// PUT /trucks/{id} - Partially update truck
async fn update_truck(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateTruckRequest>,
) -> Result<Json<TruckResponse>, AppError> {
    let truck = state
        .services
        .trucks
        .update_truck(id, payload.into_update_truck())
        .await?;
    Ok(Json(TruckResponse::from(truck)))
}

/// DELETE /trucks/{id} - Delete truck
///
/// Cascades to the truck's assignments.
async fn delete_truck(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    state.services.trucks.delete_truck(id).await?;
    Ok(Json(MessageResponse::new("Truck deleted successfully")))
}
