//! FoodBridge application core.
//!
//! Models the session/authentication context and role-based view routing of
//! the FoodBridge food-donation matching application. Every data source is
//! an in-memory fixture: credentials resolve against a fixed directory, and
//! state lives only as long as the process.
//!
//! The crate is arranged as a small hexagon:
//!
//! - [`domain`] — identities, credentials, the session store, and the view
//!   router, plus the [`domain::IdentityDirectory`] port the session store
//!   depends on abstractly.
//! - [`outbound`] — the in-memory directory adapter standing in for the
//!   absent backend.
//! - [`shell`] — the composition root owning one session store and one view
//!   selection, exposing the logged-out/logged-in state machine.

pub mod domain;
pub mod outbound;
pub mod shell;

pub use shell::AppShell;
