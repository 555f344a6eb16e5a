//! Authentication primitives such as login credentials.
//!
//! Callers construct credentials through the validating constructor before a
//! shell or service talks to the directory port, keeping raw form input out
//! of the domain.

use std::fmt;

use zeroize::Zeroizing;

use super::Role;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Email was missing or blank.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials consumed by the session store.
///
/// ## Invariants
/// - `email` must not be blank, but is otherwise stored verbatim — the
///   directory comparison is case-sensitive with no normalization, so no
///   trimming or lowercasing happens here.
/// - `password` is required to be non-empty and retains caller-provided
///   whitespace for the same reason. It is held in zeroizing storage.
/// - `role` is the account kind the caller claims; a directory entry only
///   matches when its role agrees.
///
/// # Examples
/// ```
/// use foodbridge::domain::{LoginCredentials, Role};
///
/// let creds = LoginCredentials::try_from_parts("contact@bellavista.com", "demo123", Role::Donor)
///     .expect("valid credentials");
/// assert_eq!(creds.email(), "contact@bellavista.com");
/// assert_eq!(creds.role(), Role::Donor);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: String,
    password: Zeroizing<String>,
    role: Role,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs and the
    /// requested role.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Self, LoginValidationError> {
        if email.trim().is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            email: email.to_owned(),
            password: Zeroizing::new(password.to_owned()),
            role,
        })
    }

    /// Email string used for the directory lookup, exactly as provided.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password string provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Account kind the caller claims.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }
}
