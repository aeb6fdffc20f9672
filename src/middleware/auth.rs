use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use base64::Engine;

use crate::error::ApiError;
use crate::AppState;

/// Authenticated caller identity extracted from HTTP Basic credentials
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub username: String,
}

/// Basic authentication middleware that verifies credentials against the user
/// directory and injects the caller identity into the request.
///
/// Every failure mode is a uniform 401, for any verb, before a handler ever
/// sees the request.
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let (username, password) =
        extract_basic_credentials(&headers).map_err(ApiError::unauthorized)?;

    if !state.users.verify(&username, &password) {
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    request.extensions_mut().insert(AuthUser { username });

    Ok(next.run(request).await)
}

/// Extract the username and password from an `Authorization: Basic` header
fn extract_basic_credentials(headers: &HeaderMap) -> Result<(String, String), String> {
    let auth_header = headers
        .get("authorization")
        .ok_or_else(|| "Missing Authorization header".to_string())?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| "Invalid Authorization header format".to_string())?;

    let encoded = auth_str
        .strip_prefix("Basic ")
        .ok_or_else(|| "Authorization header must use Basic scheme".to_string())?;

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(encoded.trim())
        .map_err(|_| "Invalid base64 in Authorization header".to_string())?;

    let decoded =
        String::from_utf8(decoded).map_err(|_| "Credentials are not valid UTF-8".to_string())?;

    match decoded.split_once(':') {
        Some((username, password)) => Ok((username.to_string(), password.to_string())),
        None => Err("Credentials must be in username:password form".to_string()),
    }
}
