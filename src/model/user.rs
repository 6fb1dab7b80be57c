use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::input::{ValidationError, PASSWORD_MIN_CHARS, USER_NAME_MAX_CHARS};

/// A registered user as returned by the API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UserDto {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Registration request body
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct RegisterDto {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Login request body
#[derive(Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for RegisterDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterDto")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for LoginDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginDto")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl RegisterDto {
    /// Checks field constraints and returns the trimmed name and normalized email.
    pub fn validate(&self) -> Result<(String, String), ValidationError> {
        let name = self.name.trim();
        let name_len = name.chars().count();
        if name_len == 0 || name_len > USER_NAME_MAX_CHARS {
            return Err(ValidationError::UserName);
        }

        let email = normalize_email(&self.email)?;

        if self.password.chars().count() < PASSWORD_MIN_CHARS {
            return Err(ValidationError::Password);
        }

        Ok((name.to_string(), email))
    }
}

/// Trims and lower-cases an email address after a basic shape check.
///
/// Requires a non-empty local part and a domain containing a dot that neither starts
/// nor ends the domain.
pub fn normalize_email(raw: &str) -> Result<String, ValidationError> {
    let email = raw.trim().to_lowercase();
    let invalid = || ValidationError::Email(raw.to_string());

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;

    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');

    if local.is_empty() || !domain_ok || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    Ok(email)
}
