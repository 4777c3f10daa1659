//! HTTP API Client
//!
//! Functions for communicating with the ERP REST API. Authenticated calls
//! attach a `Bearer` token; any non-2xx response is treated uniformly as a
//! failure with the server-provided message where one exists.

use gloo_net::http::{Request, Response};
use serde_json::Value;

use crate::modules::Module;
use crate::session::{RegistrationForm, UserInfo};
use crate::state::global::{Activity, DashboardStats, PipelineSeries, RevenueSeries};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("erp_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Set the API base URL in local storage
pub fn set_api_base(url: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item("erp_api_url", url);
        }
    }
}

// ============ Errors ============

/// Client error taxonomy. Validation errors originate before any network
/// call; auth errors carry the server message when the body provides one.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Auth(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Error body shape used by the backend (`{"detail": "..."}`)
#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
}

/// Extract the server message from a failed response, with a fallback.
async fn error_message(response: Response, fallback: &str) -> String {
    response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.detail)
        .unwrap_or_else(|| fallback.to_string())
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub user: UserInfo,
}

// ============ Auth ============

/// Log in with username and password.
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[derive(serde::Serialize)]
    struct LoginRequest<'a> {
        username: &'a str,
        password: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/auth/login", api_base))
        .json(&LoginRequest { username, password })
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Auth(
            error_message(response, "Login failed").await,
        ));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Create a new account. Does not log in.
pub async fn register(form: &RegistrationForm) -> Result<(), ApiError> {
    #[derive(serde::Serialize)]
    struct RegisterRequest<'a> {
        username: &'a str,
        email: &'a str,
        full_name: &'a str,
        password: &'a str,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/api/auth/register", api_base))
        .json(&RegisterRequest {
            username: &form.username,
            email: &form.email,
            full_name: &form.full_name,
            password: &form.password,
        })
        .map_err(|e| ApiError::Parse(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Auth(
            error_message(response, "Registration failed").await,
        ));
    }

    Ok(())
}

/// Probe whether a token is still valid. Fail-closed: any non-2xx response
/// or transport failure counts as invalid.
pub async fn verify_session(token: &str) -> bool {
    let api_base = get_api_base();

    match authed_get(&format!("{}/api/auth/me", api_base), token).await {
        Ok(response) => response.ok(),
        Err(_) => false,
    }
}

// ============ Dashboard ============

/// Fetch the aggregate stats payload
pub async fn fetch_stats(token: &str) -> Result<DashboardStats, ApiError> {
    fetch_authed_json(&format!("{}/api/dashboard/stats", get_api_base()), token).await
}

/// Fetch the revenue chart series
pub async fn fetch_revenue_series(token: &str) -> Result<RevenueSeries, ApiError> {
    fetch_authed_json(
        &format!("{}/api/dashboard/charts/revenue", get_api_base()),
        token,
    )
    .await
}

/// Fetch the sales pipeline chart series
pub async fn fetch_pipeline_series(token: &str) -> Result<PipelineSeries, ApiError> {
    fetch_authed_json(
        &format!("{}/api/dashboard/charts/sales-pipeline", get_api_base()),
        token,
    )
    .await
}

/// Fetch the recent-activity feed
pub async fn fetch_recent_activities(token: &str) -> Result<Vec<Activity>, ApiError> {
    fetch_authed_json(
        &format!("{}/api/dashboard/recent-activities", get_api_base()),
        token,
    )
    .await
}

// ============ Modules ============

/// Fetch the record list for one business module.
pub async fn fetch_module_records(token: &str, module: Module) -> Result<Vec<Value>, ApiError> {
    let descriptor = module.descriptor();
    let url = format!(
        "{}/api/{}/{}",
        get_api_base(),
        module.slug(),
        descriptor.endpoint
    );

    let payload: Value = fetch_authed_json(&url, token).await?;
    Ok(records_from_payload(module, &payload))
}

/// Pull the record array out of a module payload; anything unexpected
/// degrades to an empty list rather than an error.
fn records_from_payload(module: Module, payload: &Value) -> Vec<Value> {
    payload
        .get(module.descriptor().records_key)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

// ============ Helpers ============

async fn authed_get(url: &str, token: &str) -> Result<Response, ApiError> {
    Request::get(url)
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

async fn fetch_authed_json<T: serde::de::DeserializeOwned>(
    url: &str,
    token: &str,
) -> Result<T, ApiError> {
    let response = authed_get(url, token).await?;

    if !response.ok() {
        return Err(ApiError::Auth(
            error_message(response, "Request failed").await,
        ));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_extracted_by_module_key() {
        let payload = json!({ "leads": [{ "id": 1 }, { "id": 2 }] });
        assert_eq!(records_from_payload(Module::Crm, &payload).len(), 2);
    }

    #[test]
    fn missing_records_key_degrades_to_empty() {
        let payload = json!({ "unexpected": true });
        assert!(records_from_payload(Module::Inventory, &payload).is_empty());

        let payload = json!({ "products": "not an array" });
        assert!(records_from_payload(Module::Inventory, &payload).is_empty());
    }

    #[test]
    fn error_display_is_user_facing() {
        assert_eq!(
            ApiError::Validation("Please fill in all fields".to_string()).to_string(),
            "Please fill in all fields"
        );
        assert_eq!(
            ApiError::Network("connection refused".to_string()).to_string(),
            "Network error: connection refused"
        );
    }
}
