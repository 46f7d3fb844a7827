//! Session authentication and role-guard middleware.
//!
//! `session_middleware` resolves the session cookie into a `CurrentUser`
//! extension; the role guards run after it and only inspect that extension.

use axum::extract::{Request, State};
use axum::http::header::COOKIE;
use axum::middleware::Next;
use axum::response::Response;

use crate::error::AppError;
use crate::models::Role;
use crate::session::SESSION_COOKIE;
use crate::state::AppState;

/// Authenticated identity extracted from the session store.
#[derive(Clone, Debug)]
pub struct CurrentUser {
    pub user_id: i32,
    pub username: String,
    pub role: Role,
}

/// Raw session token, kept in extensions so logout can revoke it.
#[derive(Clone, Debug)]
pub struct SessionToken(pub String);

/// Pulls the session cookie value out of the Cookie header, if any.
fn extract_session_token(request: &Request) -> Option<String> {
    let header = request.headers().get(COOKIE)?.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Requires a valid session.
///
/// On success, stores `CurrentUser` and `SessionToken` in request extensions
/// for downstream guards and handlers. Expired sessions are evicted by the
/// store lookup and treated the same as missing ones.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_session_token(&request)
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    let session = state
        .sessions
        .get(&token)
        .ok_or_else(|| AppError::unauthorized("Session expired or invalid"))?;

    request.extensions_mut().insert(CurrentUser {
        user_id: session.user_id,
        username: session.username,
        role: session.role,
    });
    request.extensions_mut().insert(SessionToken(token));

    Ok(next.run(request).await)
}

/// Requires the Admin role. Must run after `session_middleware`.
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    require_role(&request, &[Role::Admin])?;
    Ok(next.run(request).await)
}

/// Requires Admin or Fleet Manager. Must run after `session_middleware`.
pub async fn require_fleet_access(request: Request, next: Next) -> Result<Response, AppError> {
    require_role(&request, &[Role::Admin, Role::FleetManager])?;
    Ok(next.run(request).await)
}

fn require_role(request: &Request, allowed: &[Role]) -> Result<(), AppError> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(|| AppError::unauthorized("Authentication required"))?;

    if !allowed.contains(&user.role) {
        return Err(AppError::forbidden("Insufficient role for this operation"));
    }
    Ok(())
}
