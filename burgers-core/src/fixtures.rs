//! Fresh identifiers for test data.
//!
//! Every scenario registers its own accounts in a backend shared with other
//! test runs, so emails and names are randomized per call.

use crate::types::{UserCreateRequest, UserLoginRequest};
use uuid::Uuid;

pub const DEFAULT_PASSWORD: &str = "Qwerty231";
pub const DEFAULT_NAME: &str = "test";
pub const EMAIL_DOMAIN: &str = "ya.ru";

/// A previously unused email address.
pub fn unique_email() -> String {
    format!("{}@{}", Uuid::new_v4(), EMAIL_DOMAIN)
}

/// A bare random login, not shaped like an email.
pub fn unique_login() -> String {
    Uuid::new_v4().to_string()
}

pub fn unique_name() -> String {
    Uuid::new_v4().to_string()
}

pub fn unique_password() -> String {
    Uuid::new_v4().to_string()
}

impl UserCreateRequest {
    /// Request for a brand-new account with the default password and name.
    pub fn random() -> Self {
        Self::new(unique_email(), DEFAULT_PASSWORD, DEFAULT_NAME)
    }

    /// Profile change to a fresh email, password and name.
    pub fn random_change() -> Self {
        Self::new(unique_email(), unique_password(), unique_name())
    }
}

impl UserLoginRequest {
    /// Credentials that match no registered account.
    pub fn unknown() -> Self {
        Self::new(unique_login(), DEFAULT_PASSWORD)
    }
}
