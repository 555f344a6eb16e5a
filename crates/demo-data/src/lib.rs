//! Deterministic demo organization records for the FoodBridge credential
//! directory.
//!
//! This crate holds the fixed accounts a demo deployment authenticates
//! against. It is deliberately independent of the application's domain types
//! so the seed data can be consumed by adapters and tests without circular
//! dependencies; records are plain serde types using the camelCase naming of
//! the directory contract.
//!
//! # Example
//!
//! ```
//! use demo_data::{DemoRole, demo_organizations};
//!
//! let records = demo_organizations();
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].role, DemoRole::Donor);
//! assert_eq!(records[0].email, "contact@bellavista.com");
//! ```

mod records;

pub use records::{
    DemoLocation, DemoOrganization, DemoRole, RecordsError, demo_organizations, from_json,
};
