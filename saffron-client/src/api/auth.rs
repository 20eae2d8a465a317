//! Session endpoints (owned by the external auth provider)

use crate::{ClientResult, HttpClient};
use serde::{Deserialize, Serialize};
use shared::models::User;
use tracing::info;

/// Sign-in request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Sign-up request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Session payload: the authenticated user plus its token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData {
    pub token: String,
    pub user: User,
}

/// Sign in with email and password
pub async fn sign_in(client: &HttpClient, email: &str, password: &str) -> ClientResult<SessionData> {
    let request = SignInRequest {
        email: email.to_string(),
        password: password.to_string(),
    };
    let session: SessionData = client.post("auth/sign-in", &request).await?;
    info!(user_id = %session.user.id, "signed in");
    Ok(session)
}

/// Create an account
pub async fn sign_up(client: &HttpClient, request: &SignUpRequest) -> ClientResult<SessionData> {
    client.post("auth/sign-up", request).await
}

/// Sign out, invalidating the server-side session
pub async fn sign_out(client: &mut HttpClient) -> ClientResult<()> {
    client.post_unit("auth/sign-out", &serde_json::json!({})).await?;
    client.clear_token();
    Ok(())
}

/// Fetch the current session, if any
pub async fn session(client: &HttpClient) -> ClientResult<SessionData> {
    client.get("auth/get-session").await
}
