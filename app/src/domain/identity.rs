//! Identity data model for organization accounts.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Role;

/// Validation errors returned by [`IdentityId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityIdError {
    /// Identifier was empty.
    Empty,
    /// Identifier was not a valid UUID.
    Invalid,
}

impl fmt::Display for IdentityIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identity id must not be empty"),
            Self::Invalid => write!(f, "identity id must be a valid UUID"),
        }
    }
}

impl std::error::Error for IdentityIdError {}

/// Stable account identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdentityId(Uuid);

impl IdentityId {
    /// Validate and construct an [`IdentityId`] from string input.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, IdentityIdError> {
        let raw = raw.as_ref();
        if raw.is_empty() {
            return Err(IdentityIdError::Empty);
        }
        let parsed = Uuid::parse_str(raw).map_err(|_| IdentityIdError::Invalid)?;
        Ok(Self(parsed))
    }

    /// Generate a fresh random identifier, unique per call.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for IdentityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Free-text address plus coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Location {
    address: String,
    lat: f64,
    lng: f64,
}

impl Location {
    /// Build a location from an address and decimal-degree coordinates.
    pub fn new(address: impl Into<String>, lat: f64, lng: f64) -> Self {
        Self {
            address: address.into(),
            lat,
            lng,
        }
    }

    /// The registration default: an empty address at the coordinate origin.
    #[must_use]
    pub const fn origin() -> Self {
        Self {
            address: String::new(),
            lat: 0.0,
            lng: 0.0,
        }
    }

    /// Street address shown to the other party.
    #[must_use]
    pub fn address(&self) -> &str {
        self.address.as_str()
    }

    /// Latitude in decimal degrees.
    #[must_use]
    pub const fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    #[must_use]
    pub const fn lng(&self) -> f64 {
        self.lng
    }
}

/// Authenticated organization account.
///
/// ## Invariants
/// - `role` is immutable after creation; there is no setter.
/// - `rating`, `total_donations`, and `total_received` are read-only display
///   fields in this scope — nothing here recomputes them.
///
/// The aggregate never carries a password; directory entries hold one
/// alongside an `Identity` and strip it before the identity leaves the
/// directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
pub struct Identity {
    id: IdentityId,
    name: String,
    email: String,
    role: Role,
    organization: String,
    phone: String,
    location: Location,
    verified: bool,
    rating: f64,
    total_donations: u32,
    total_received: u32,
}

impl Identity {
    /// Start building an identity. The builder's defaults are exactly the
    /// registration defaults: empty strings, the origin location, unverified,
    /// zero rating and counters.
    #[must_use]
    pub fn builder(id: IdentityId, role: Role) -> IdentityBuilder {
        IdentityBuilder {
            id,
            role,
            name: String::new(),
            email: String::new(),
            organization: String::new(),
            phone: String::new(),
            location: Location::origin(),
            verified: false,
            rating: 0.0,
            total_donations: 0,
            total_received: 0,
        }
    }

    /// Stable account identifier.
    #[must_use]
    pub const fn id(&self) -> &IdentityId {
        &self.id
    }

    /// Display name of the organization.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Login key, compared verbatim against directory entries.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Account kind, fixed at creation.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Organization label shown alongside the name.
    #[must_use]
    pub fn organization(&self) -> &str {
        self.organization.as_str()
    }

    /// Contact phone number.
    #[must_use]
    pub fn phone(&self) -> &str {
        self.phone.as_str()
    }

    /// Pickup or delivery location.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// Whether the account passed verification.
    #[must_use]
    pub const fn verified(&self) -> bool {
        self.verified
    }

    /// Aggregate rating out of five.
    #[must_use]
    pub const fn rating(&self) -> f64 {
        self.rating
    }

    /// Total donations given; meaningful for donor accounts.
    #[must_use]
    pub const fn total_donations(&self) -> u32 {
        self.total_donations
    }

    /// Total items received; meaningful for recipient accounts.
    #[must_use]
    pub const fn total_received(&self) -> u32 {
        self.total_received
    }
}

/// Builder for [`Identity`] whose defaults mirror registration.
#[derive(Debug, Clone)]
pub struct IdentityBuilder {
    id: IdentityId,
    role: Role,
    name: String,
    email: String,
    organization: String,
    phone: String,
    location: Location,
    verified: bool,
    rating: f64,
    total_donations: u32,
    total_received: u32,
}

impl IdentityBuilder {
    /// Set the display name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the login email.
    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the organization label.
    #[must_use]
    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    /// Set the contact phone number.
    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Set the location.
    #[must_use]
    pub fn location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Mark the account as verified or not.
    #[must_use]
    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = verified;
        self
    }

    /// Set the aggregate rating.
    #[must_use]
    pub fn rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the donations-given counter.
    #[must_use]
    pub fn total_donations(mut self, total_donations: u32) -> Self {
        self.total_donations = total_donations;
        self
    }

    /// Set the items-received counter.
    #[must_use]
    pub fn total_received(mut self, total_received: u32) -> Self {
        self.total_received = total_received;
        self
    }

    /// Finish building the identity.
    #[must_use]
    pub fn build(self) -> Identity {
        let Self {
            id,
            role,
            name,
            email,
            organization,
            phone,
            location,
            verified,
            rating,
            total_donations,
            total_received,
        } = self;
        Identity {
            id,
            name,
            email,
            role,
            organization,
            phone,
            location,
            verified,
            rating,
            total_donations,
            total_received,
        }
    }
}

#[cfg(test)]
mod tests;
