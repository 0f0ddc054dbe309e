//! Sessions and authentication
//!
//! The demo login flow over an injected credential store: per-field
//! validation, credential lookup, an optional second factor for flagged
//! accounts, and a session payload written through the storage adapter.
//! No network is involved; a real identity backend would replace the
//! credential store behind the same surface.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::storage::{StorageAdapter, StorageError};

/// Storage key for the serialized session payload.
pub const SESSION_KEY: &str = "user_session";

/// Verification code accepted for accounts flagged for MFA in the demo
/// credential set.
pub const DEMO_MFA_CODE: &str = "123456";

// =============================================================================
// Credentials
// =============================================================================

/// One account in the injected credential set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub password: String,
    pub role: String,
    #[serde(default)]
    pub requires_mfa: bool,
}

/// Credential set keyed by lowercased email.
#[derive(Debug, Clone, Default)]
pub struct CredentialStore {
    entries: HashMap<String, CredentialRecord>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, email: impl AsRef<str>, record: CredentialRecord) {
        self.entries
            .insert(email.as_ref().to_lowercase(), record);
    }

    pub fn lookup(&self, email: &str) -> Option<&CredentialRecord> {
        self.entries.get(&email.to_lowercase())
    }

    /// The demo accounts shipped with the dashboard.
    pub fn demo() -> Self {
        let mut store = Self::new();
        store.insert(
            "admin@investwise.com",
            CredentialRecord {
                password: "Admin@123".to_string(),
                role: "administrator".to_string(),
                requires_mfa: false,
            },
        );
        store.insert(
            "advisor@investwise.com",
            CredentialRecord {
                password: "Advisor@123".to_string(),
                role: "advisor".to_string(),
                requires_mfa: true,
            },
        );
        store.insert(
            "client@investwise.com",
            CredentialRecord {
                password: "Client@123".to_string(),
                role: "client".to_string(),
                requires_mfa: false,
            },
        );
        store
    }
}

// =============================================================================
// Validation
// =============================================================================

/// Per-field validation failures, reported together like the form does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort,
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::EmailRequired => "Email address is required",
            ValidationError::EmailInvalid => "Please enter a valid email address",
            ValidationError::PasswordRequired => "Password is required",
            ValidationError::PasswordTooShort => "Password must be at least 6 characters",
        }
    }
}

/// Validate login form fields. Returns every failure at once so the
/// caller can annotate each field.
pub fn validate_credentials(email: &str, password: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if email.is_empty() {
        errors.push(ValidationError::EmailRequired);
    } else if !is_plausible_email(email) {
        errors.push(ValidationError::EmailInvalid);
    }

    if password.is_empty() {
        errors.push(ValidationError::PasswordRequired);
    } else if password.len() < 6 {
        errors.push(ValidationError::PasswordTooShort);
    }

    errors
}

/// Shape check only: something@something.something, no whitespace.
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

// =============================================================================
// Session
// =============================================================================

/// The authenticated session payload persisted through the adapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    pub role: String,
    pub login_time: NaiveDateTime,
    pub remember_me: bool,
}

/// Result of a login attempt that did not fail.
#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    /// Authenticated; the session has been persisted.
    Success(Session),
    /// Credentials are valid but the account needs a verification code.
    MfaRequired,
}

/// Authentication failures.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed")]
    Validation(Vec<ValidationError>),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("invalid verification code")]
    InvalidMfaCode,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

// =============================================================================
// Session Manager
// =============================================================================

/// Login, logout and current-session access over injected credentials
/// and storage.
pub struct SessionManager {
    credentials: CredentialStore,
    storage: Arc<dyn StorageAdapter>,
}

impl SessionManager {
    pub fn new(credentials: CredentialStore, storage: Arc<dyn StorageAdapter>) -> Self {
        Self {
            credentials,
            storage,
        }
    }

    /// Attempt a login. Accounts flagged for MFA return `MfaRequired`
    /// until called again with a code; the login time is injected so the
    /// flow stays deterministic.
    pub fn login(
        &self,
        email: &str,
        password: &str,
        remember_me: bool,
        mfa_code: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<LoginOutcome, AuthError> {
        let errors = validate_credentials(email, password);
        if !errors.is_empty() {
            return Err(AuthError::Validation(errors));
        }

        let record = match self.credentials.lookup(email) {
            Some(record) if record.password == password => record,
            _ => {
                warn!(email = %email.to_lowercase(), "rejected login attempt");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if record.requires_mfa {
            match mfa_code {
                None => return Ok(LoginOutcome::MfaRequired),
                Some(code) if code != DEMO_MFA_CODE => {
                    warn!(email = %email.to_lowercase(), "rejected verification code");
                    return Err(AuthError::InvalidMfaCode);
                }
                Some(_) => {}
            }
        }

        let session = Session {
            email: email.to_lowercase(),
            role: record.role.clone(),
            login_time: now,
            remember_me,
        };
        let payload = serde_json::to_string(&session).map_err(StorageError::from)?;
        self.storage.set(SESSION_KEY, &payload)?;
        info!(email = %session.email, role = %session.role, "session opened");
        Ok(LoginOutcome::Success(session))
    }

    /// The persisted session, if one exists and parses.
    pub fn current_session(&self) -> Result<Option<Session>, AuthError> {
        let Some(payload) = self.storage.get(SESSION_KEY)? else {
            return Ok(None);
        };
        let session = serde_json::from_str(&payload).map_err(StorageError::from)?;
        Ok(Some(session))
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.current_session(), Ok(Some(_)))
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        self.storage.remove(SESSION_KEY)?;
        info!("session closed");
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
