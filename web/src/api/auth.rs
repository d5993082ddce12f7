//! Login and logout passthrough. The portal never mints tokens itself; it
//! forwards credentials and hands the backend's bearer token to the client.

use shared_types::{LoginRequest, LoginResponse, LogoutResponse};

use super::{endpoint, http_client, ApiError};

pub async fn login(credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let response = http_client()
        .post(endpoint("/login"))
        .header(reqwest::header::ACCEPT, "application/json")
        .json(credentials)
        .send()
        .await?;

    if response.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ApiError::Backend("Invalid email or password.".to_string()));
    }
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<LoginResponse>().await?)
}

pub async fn logout(token: &str) -> Result<LogoutResponse, ApiError> {
    let response = http_client()
        .post(endpoint("/logout"))
        .header(reqwest::header::ACCEPT, "application/json")
        .bearer_auth(token)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response.json::<LogoutResponse>().await?)
}
