//! Driven adapters implementing the domain ports.
//!
//! Only one adapter exists in this scope: the in-memory credential
//! directory under [`directory`]. Future backends (a real identity service,
//! say) would sit alongside it and implement the same port.

pub mod directory;

pub use directory::{DirectorySeedError, InMemoryDirectory};
