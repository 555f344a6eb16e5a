//! Domain ports defining the edges of the hexagon.
//!
//! The session store never owns credential data; it asks an
//! [`IdentityDirectory`] adapter. The port exposes a strongly typed error so
//! adapters map their failures into predictable variants instead of leaking
//! transport detail into the domain.

use async_trait::async_trait;
use thiserror::Error;
use zeroize::Zeroizing;

use super::{Identity, LoginCredentials};

/// Errors surfaced by identity-directory adapters.
///
/// The in-memory adapter never fails; the variant exists so test doubles and
/// future adapters have a defined path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// Directory backend is unreachable or refused the lookup.
    #[error("identity directory unavailable: {message}")]
    Unavailable {
        /// Human-readable description of why the backend was unavailable.
        message: String,
    },
}

impl DirectoryError {
    /// Helper for unavailable-backend failures.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Validation errors returned by [`DirectoryRecord::try_new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryRecordError {
    /// Record email is empty once trimmed.
    #[error("directory record email must not be empty")]
    EmptyEmail,
    /// Record password is empty.
    #[error("directory record password must not be empty")]
    EmptyPassword,
}

/// One directory entry: an identity plus the password that unlocks it.
///
/// This is the only place a password lives. Redaction is structural —
/// [`DirectoryRecord::identity`] hands back the account without it, and the
/// password itself sits in zeroizing storage.
///
/// ## Invariants
/// - `email` (via the identity) is non-empty; directories additionally
///   enforce uniqueness across their records.
/// - `password` is non-empty and compared verbatim.
#[derive(Debug, Clone)]
pub struct DirectoryRecord {
    identity: Identity,
    password: Zeroizing<String>,
}

impl DirectoryRecord {
    /// Build a record, rejecting structurally empty credentials.
    pub fn try_new(
        identity: Identity,
        password: impl Into<String>,
    ) -> Result<Self, DirectoryRecordError> {
        if identity.email().trim().is_empty() {
            return Err(DirectoryRecordError::EmptyEmail);
        }
        let password = password.into();
        if password.is_empty() {
            return Err(DirectoryRecordError::EmptyPassword);
        }

        Ok(Self {
            identity,
            password: Zeroizing::new(password),
        })
    }

    /// The account behind this entry, with the password stripped.
    #[must_use]
    pub const fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Login key used for uniqueness checks.
    #[must_use]
    pub fn email(&self) -> &str {
        self.identity.email()
    }

    /// Whether the submitted credentials match this entry exactly.
    ///
    /// All three components — email, password, and role — must agree.
    /// Comparison is case-sensitive with no normalization.
    #[must_use]
    pub fn matches(&self, credentials: &LoginCredentials) -> bool {
        self.identity.email() == credentials.email()
            && self.password.as_str() == credentials.password()
            && self.identity.role() == credentials.role()
    }
}

/// Directory port consulted by the session store.
#[async_trait]
pub trait IdentityDirectory: Send + Sync {
    /// Resolve credentials to the redacted identity of the matching entry.
    ///
    /// Returns `Ok(None)` when no entry matches all three credential
    /// components — the caller decides whether that is an error.
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Identity>, DirectoryError>;
}
