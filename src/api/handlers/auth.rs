//! Authentication handlers: register, login, logout.

use axum::extract::{Extension, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::dto::{LoginRequest, LoginResponse, MessageResponse, RegisterRequest, UserResponse};
use crate::api::middleware::SessionToken;
use crate::error::AppError;
use crate::session::SESSION_COOKIE;
use crate::state::AppState;
use crate::utils::validate::ValidatedJson;

/// POST /register - Create a new account
///
/// Returns 201 with the created user; 409 when username or email is taken.
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = state
        .services
        .auth
        .register(
            &payload.username,
            &payload.email,
            &payload.password,
            payload.role.as_deref(),
        )
        .await?;

    tracing::info!(user_id = user.id, username = %user.username, "Account registered");
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// POST /login - Establish a session
///
/// On success, issues the session cookie and returns the user. Unknown
/// username yields 404; wrong password yields 401.
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Response, AppError> {
    let user = state
        .services
        .auth
        .login(&payload.username, &payload.password)
        .await?;

    let role = user.role();
    let token = state.sessions.create(user.id, &user.username, role);

    tracing::info!(user_id = user.id, username = %user.username, "Login successful");

    let mut response = Json(LoginResponse {
        message: "Login successful".to_string(),
        user: UserResponse::from(user),
    })
    .into_response();
    response
        .headers_mut()
        .insert(header::SET_COOKIE, session_cookie(&token)?);

    Ok(response)
}

/// POST /logout - Revoke the current session
///
/// Reaching this handler requires a valid session; the guard returns 401
/// otherwise. The cookie is expired client-side as well.
pub async fn logout(
    State(state): State<AppState>,
    Extension(token): Extension<SessionToken>,
) -> Result<Response, AppError> {
    state.sessions.remove(&token.0);

    let mut response = Json(MessageResponse::new("Logged out successfully")).into_response();
    response
        .headers_mut()
        .insert(header::SET_COOKIE, expired_session_cookie()?);

    Ok(response)
}

fn session_cookie(token: &str) -> Result<header::HeaderValue, AppError> {
    header::HeaderValue::from_str(&format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax",
        SESSION_COOKIE, token
    ))
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to build session cookie: {}", e),
    })
}

fn expired_session_cookie() -> Result<header::HeaderValue, AppError> {
    header::HeaderValue::from_str(&format!(
        "{}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0",
        SESSION_COOKIE
    ))
    .map_err(|e| AppError::Internal {
        source: anyhow::anyhow!("Failed to build session cookie: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_cookie_attributes() {
        let value = session_cookie("abc123").unwrap();
        let cookie = value.to_str().unwrap();
        assert!(cookie.starts_with("fleet_session=abc123;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn test_expired_cookie_clears_value() {
        let value = expired_session_cookie().unwrap();
        let cookie = value.to_str().unwrap();
        assert!(cookie.starts_with("fleet_session=;"));
        assert!(cookie.contains("Max-Age=0"));
    }
}
