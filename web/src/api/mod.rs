//! HTTP client for the remote admission backend. Server-side only: the
//! WASM client reaches these through the `#[server]` functions in
//! `crate::server`.

#[cfg(feature = "ssr")]
pub mod admission;
#[cfg(feature = "ssr")]
pub mod applicant;
#[cfg(feature = "ssr")]
pub mod auth;
#[cfg(feature = "ssr")]
pub mod catalog;

#[cfg(feature = "ssr")]
pub use plumbing::{api_base_url, http_client, ApiError};
#[cfg(feature = "ssr")]
pub(crate) use plumbing::{endpoint, get_data, get_data_or_default};

#[cfg(feature = "ssr")]
mod plumbing {
    use std::sync::OnceLock;

    use serde::de::DeserializeOwned;
    use shared_types::{ApiResponse, ApiStatus};
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ApiError {
        #[error("request to the admission backend failed: {0}")]
        Transport(#[from] reqwest::Error),
        #[error("admission backend returned HTTP {0}")]
        Status(reqwest::StatusCode),
        #[error("admission backend rejected the request: {0}")]
        Backend(String),
        #[error("admission backend response was malformed: {0}")]
        Malformed(String),
    }

    static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

    pub fn http_client() -> &'static reqwest::Client {
        HTTP_CLIENT.get_or_init(reqwest::Client::new)
    }

    pub fn api_base_url() -> String {
        std::env::var("ADMISSION_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000/api".to_string())
    }

    pub(crate) fn endpoint(path: &str) -> String {
        format!("{}{}", api_base_url(), path)
    }

    /// GET an `{status, message?, data}` endpoint and unwrap the envelope.
    pub(crate) async fn get_data<T: DeserializeOwned>(
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let envelope = get_envelope::<T>(path, token).await?;
        match envelope.status {
            ApiStatus::Success => envelope
                .data
                .ok_or_else(|| ApiError::Malformed(format!("{path}: success without data"))),
            ApiStatus::Error => Err(ApiError::Backend(
                envelope
                    .message
                    .unwrap_or_else(|| "unspecified backend error".to_string()),
            )),
        }
    }

    /// Same as [`get_data`] but for endpoints where a successful response
    /// may simply omit `data` (meaning an empty collection).
    pub(crate) async fn get_data_or_default<T: DeserializeOwned + Default>(
        path: &str,
        token: Option<&str>,
    ) -> Result<T, ApiError> {
        let envelope = get_envelope::<T>(path, token).await?;
        match envelope.status {
            ApiStatus::Success => Ok(envelope.data.unwrap_or_default()),
            ApiStatus::Error => Err(ApiError::Backend(
                envelope
                    .message
                    .unwrap_or_else(|| "unspecified backend error".to_string()),
            )),
        }
    }

    async fn get_envelope<T: DeserializeOwned>(
        path: &str,
        token: Option<&str>,
    ) -> Result<ApiResponse<T>, ApiError> {
        let mut request = http_client()
            .get(endpoint(path))
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json::<ApiResponse<T>>().await?)
    }
}
