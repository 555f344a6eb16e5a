//! Domain primitives and services.
//!
//! Purpose: define the strongly typed session-and-routing core — account
//! identities, validated login credentials, the session store, and the view
//! router. Types are immutable where the model demands it (a role never
//! changes after creation) and document their invariants in Rustdoc.
//!
//! Public surface:
//! - [`Identity`] — authenticated organization account.
//! - [`LoginCredentials`] — validated login payload.
//! - [`SessionStore`] — the single identity slot and its three operations.
//! - [`IdentityDirectory`] — the directory port driven adapters implement.
//! - [`Tab`] / [`View`] — the closed view-routing vocabulary.

pub mod auth;
pub mod error;
pub mod identity;
pub mod ports;
pub mod role;
pub mod session;
pub mod view;

pub use self::auth::{LoginCredentials, LoginValidationError};
pub use self::error::{AuthError, AuthResult};
pub use self::identity::{Identity, IdentityBuilder, IdentityId, IdentityIdError, Location};
pub use self::ports::{DirectoryError, DirectoryRecord, DirectoryRecordError, IdentityDirectory};
pub use self::role::Role;
pub use self::session::{RegistrationRequest, SessionStore};
pub use self::view::{Tab, View};
