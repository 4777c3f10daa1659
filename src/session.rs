//! Session Handling
//!
//! Authenticated-user context and its local-storage persistence. A session
//! either exists with a non-empty bearer token or does not exist at all;
//! there is no partial state.

use serde::{Deserialize, Serialize};

use crate::api::ApiError;

/// Local storage key for the bearer token
pub const TOKEN_KEY: &str = "access_token";
/// Local storage key for the serialized user info
pub const USER_KEY: &str = "user_info";

/// User details returned by the backend on login
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
}

/// Authenticated session: opaque bearer token plus user info
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    token: String,
    pub user: UserInfo,
}

impl Session {
    /// Create a session. Empty tokens are rejected so a `Session` value
    /// always carries a usable credential.
    pub fn new(token: String, user: UserInfo) -> Option<Session> {
        if token.is_empty() {
            None
        } else {
            Some(Session { token, user })
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Name shown in the navigation bar
    pub fn display_name(&self) -> String {
        self.user
            .full_name
            .clone()
            .or_else(|| self.user.username.clone())
            .unwrap_or_else(|| "User".to_string())
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the persisted session, if any.
///
/// A stored token with unreadable user info still yields a session (user
/// fields default to empty); a missing or empty token yields `None`.
pub fn load_session() -> Option<Session> {
    let storage = local_storage()?;
    let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
    let user = storage
        .get_item(USER_KEY)
        .ok()
        .flatten()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default();
    Session::new(token, user)
}

/// Persist the session under both storage keys
pub fn store_session(session: &Session) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, session.token());
        if let Ok(raw) = serde_json::to_string(&session.user) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }
}

/// Remove both persisted keys. Safe to call when nothing is stored.
pub fn clear_session() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(USER_KEY);
    }
}

/// Pre-flight login check; failures never reach the network.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ApiError> {
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Please enter both username and password".to_string(),
        ));
    }
    Ok(())
}

/// Registration form fields as typed by the user
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Pre-flight registration check; failures never reach the network.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.username.is_empty()
            || self.email.is_empty()
            || self.full_name.is_empty()
            || self.password.is_empty()
        {
            return Err(ApiError::Validation(
                "Please fill in all fields".to_string(),
            ));
        }
        if self.password != self.confirm_password {
            return Err(ApiError::Validation("Passwords do not match".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_contract_uses_two_keys() {
        // Logout clears exactly these two keys; removing an absent key is a
        // no-op, which is what makes logout idempotent.
        assert_eq!(TOKEN_KEY, "access_token");
        assert_eq!(USER_KEY, "user_info");
        assert_ne!(TOKEN_KEY, USER_KEY);
    }

    #[test]
    fn empty_token_yields_no_session() {
        assert_eq!(Session::new(String::new(), UserInfo::default()), None);
    }

    #[test]
    fn display_name_falls_back() {
        let session = Session::new(
            "tok".to_string(),
            UserInfo {
                username: Some("ada".to_string()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(session.display_name(), "ada");

        let session = Session::new("tok".to_string(), UserInfo::default()).unwrap();
        assert_eq!(session.display_name(), "User");
    }

    #[test]
    fn credentials_require_both_fields() {
        assert!(validate_credentials("", "").is_err());
        assert!(validate_credentials("admin", "").is_err());
        assert!(validate_credentials("", "secret").is_err());
        assert!(validate_credentials("admin", "secret").is_ok());
    }

    #[test]
    fn registration_requires_all_fields() {
        let form = RegistrationForm {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };
        assert!(form.validate().is_ok());

        let missing = RegistrationForm {
            email: String::new(),
            ..form.clone()
        };
        assert!(missing.validate().is_err());
    }

    #[test]
    fn registration_rejects_mismatched_passwords() {
        let form = RegistrationForm {
            username: "ada".to_string(),
            email: "ada@example.com".to_string(),
            full_name: "Ada Lovelace".to_string(),
            password: "secret".to_string(),
            confirm_password: "different".to_string(),
        };
        let err = form.validate().unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
