//! Assignment CRUD request handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

use crate::api::dto::{
    AssignmentResponse, CreateAssignmentRequest, MessageResponse, UpdateAssignmentRequest,
};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// Creates assignment-related routes.
///
/// Routes:
/// - GET /        - List all assignments
/// - POST /       - Create a new assignment
/// - GET /{id}    - Get assignment by ID
/// - PATCH /{id}  - Partially update assignment by ID
/// - DELETE /{id} - Delete assignment by ID
pub fn assignment_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assignments).post(create_assignment))
        .route(
            "/{id}",
            get(get_assignment)
                .patch(update_assignment)
                .delete(delete_assignment),
        )
}

/// GET /assignments - List all assignments
async fn list_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssignmentResponse>>, AppError> {
    let assignments = state.services.assignments.list_assignments().await?;
    let responses: Vec<AssignmentResponse> = assignments
        .into_iter()
        .map(AssignmentResponse::from)
        .collect();
    Ok(Json(responses))
}

/// GET /assignments/{id} - Get assignment by ID
async fn get_assignment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<AssignmentResponse>, AppError> {
    let assignment = state.services.assignments.get_assignment(id).await?;
    Ok(Json(AssignmentResponse::from(assignment)))
}

/// POST /assignments - Create new assignment
///
/// Dates arrive as "YYYY-MM-DD HH:MM:SS" strings; the referenced driver and
/// truck must exist. Returns 201 Created.
async fn create_assignment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAssignmentRequest>,
) -> Result<(StatusCode, Json<AssignmentResponse>), AppError> {
    let new_assignment = payload.into_new_assignment()?;
    let assignment = state
        .services
        .assignments
        .create_assignment(new_assignment)
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(AssignmentResponse::from(assignment)),
    ))
}

/// PATCH /assignments/{id} - Partially update assignment
async fn update_assignment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAssignmentRequest>,
) -> Result<Json<AssignmentResponse>, AppError> {
    let update_data = payload.into_update_assignment()?;
    let assignment = state
        .services
        .assignments
        .update_assignment(id, update_data)
        .await?;
    Ok(Json(AssignmentResponse::from(assignment)))
}

/// DELETE /assignments/{id} - Delete assignment
async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MessageResponse>, AppError> {
    state.services.assignments.delete_assignment(id).await?;
    Ok(Json(MessageResponse::new("Assignment deleted successfully")))
}
