//! Domain-level error types for session operations.
//!
//! The only modelled business failure is a credential mismatch; it is
//! recovered at the call site and never escalates. Directory-port failures
//! are wrapped so callers can distinguish "wrong credentials" from "could
//! not ask".

use thiserror::Error;

use super::ports::DirectoryError;

/// Failures surfaced by session-store operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// No directory entry matches the submitted email, password, and role.
    #[error("invalid credentials")]
    InvalidCredentials,
    /// The identity directory could not be consulted.
    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Convenient result alias for session operations.
///
/// # Examples
/// ```
/// use foodbridge::domain::{AuthError, AuthResult};
///
/// fn check() -> AuthResult<()> {
///     Err(AuthError::InvalidCredentials)
/// }
/// assert!(check().is_err());
/// ```
pub type AuthResult<T> = Result<T, AuthError>;
