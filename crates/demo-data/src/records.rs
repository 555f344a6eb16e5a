//! Seed record types and the built-in demo accounts.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading seed records from JSON.
#[derive(Debug, Error)]
pub enum RecordsError {
    /// The JSON payload could not be parsed into seed records.
    #[error("invalid seed records: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Account kind of a seed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DemoRole {
    /// Organization offering surplus food.
    Donor,
    /// Organization receiving donations.
    Recipient,
}

/// Free-text address plus coordinates of a seed organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct DemoLocation {
    /// Street address shown to the other party.
    pub address: String,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
}

/// One directory seed entry: an organization account plus its demo password.
///
/// Field names mirror the directory contract; the whole record serializes in
/// camelCase. The password travels with the seed only — consumers are
/// expected to strip it before exposing the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct DemoOrganization {
    /// Stable identifier, a UUID string.
    pub id: String,
    /// Display name of the organization.
    pub name: String,
    /// Login key, unique across the seed set.
    pub email: String,
    /// Demo password, compared verbatim at login.
    pub password: String,
    /// Account kind, matched against the requested role at login.
    pub role: DemoRole,
    /// Organization label shown alongside the name.
    pub organization: String,
    /// Contact phone number.
    pub phone: String,
    /// Pickup or delivery location.
    pub location: DemoLocation,
    /// Whether the account passed verification.
    pub verified: bool,
    /// Aggregate rating out of five.
    pub rating: f64,
    /// Total donations given (meaningful for donors).
    pub total_donations: u32,
    /// Total items received (meaningful for recipients).
    pub total_received: u32,
}

/// Parse seed records from a JSON array.
///
/// # Errors
///
/// Returns [`RecordsError::Parse`] when the payload is not a well-formed
/// array of seed records.
///
/// # Example
///
/// ```
/// use demo_data::from_json;
///
/// let records = from_json(r#"[]"#).expect("empty seed set parses");
/// assert!(records.is_empty());
/// ```
pub fn from_json(json: &str) -> Result<Vec<DemoOrganization>, RecordsError> {
    Ok(serde_json::from_str(json)?)
}

/// The built-in demo accounts: one donor restaurant and one recipient
/// orphanage, both answering to the password `demo123`.
#[must_use]
pub fn demo_organizations() -> Vec<DemoOrganization> {
    vec![
        DemoOrganization {
            id: "9b2f41c8-33a5-4b0f-8c5e-6a1d27e4f9a1".to_owned(),
            name: "Bella Vista Restaurant".to_owned(),
            email: "contact@bellavista.com".to_owned(),
            password: "demo123".to_owned(),
            role: DemoRole::Donor,
            organization: "Bella Vista Restaurant".to_owned(),
            phone: "+1 (555) 123-4567".to_owned(),
            location: DemoLocation {
                address: "123 Main St, Downtown".to_owned(),
                lat: 40.7128,
                lng: -74.0060,
            },
            verified: true,
            rating: 4.8,
            total_donations: 156,
            total_received: 0,
        },
        DemoOrganization {
            id: "c4d81e72-95b3-4f6a-a1e0-48f30b9c7d02".to_owned(),
            name: "Sunshine Orphanage".to_owned(),
            email: "admin@sunshineorphanage.org".to_owned(),
            password: "demo123".to_owned(),
            role: DemoRole::Recipient,
            organization: "Sunshine Orphanage".to_owned(),
            phone: "+1 (555) 987-6543".to_owned(),
            location: DemoLocation {
                address: "456 Hope Street, Eastside".to_owned(),
                lat: 40.7589,
                lng: -73.9851,
            },
            verified: true,
            rating: 4.9,
            total_donations: 0,
            total_received: 89,
        },
    ]
}
