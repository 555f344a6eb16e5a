//! In-memory identity directory adapter.
//!
//! The fixed record list stands in for the absent backend service. An
//! optional simulated lookup latency mimics the network round-trip the real
//! thing would pay; it defaults to zero so tests run without timers.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;
use tokio::time;

use crate::domain::{
    DirectoryError, DirectoryRecord, Identity, IdentityDirectory, LoginCredentials,
};

/// Errors raised while building a directory from seed records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectorySeedError {
    /// Two records share a login email.
    #[error("duplicate directory email: {email}")]
    DuplicateEmail {
        /// The login email shared by more than one record.
        email: String,
    },
    /// A seed record failed domain validation.
    #[error("invalid seed record: {message}")]
    InvalidRecord {
        /// Description of why the seed record was rejected.
        message: String,
    },
}

impl DirectorySeedError {
    /// Helper for duplicate-email failures.
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
        }
    }

    /// Helper for records that fail domain validation.
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }
}

/// Fixed-list adapter for the [`IdentityDirectory`] port.
#[derive(Debug)]
pub struct InMemoryDirectory {
    records: Vec<DirectoryRecord>,
    lookup_latency: Duration,
}

impl InMemoryDirectory {
    /// Build a directory over the given records, enforcing the directory
    /// invariant that emails are unique.
    pub fn new(records: Vec<DirectoryRecord>) -> Result<Self, DirectorySeedError> {
        let mut seen = HashSet::new();
        for entry in &records {
            if !seen.insert(entry.email().to_owned()) {
                return Err(DirectorySeedError::duplicate_email(entry.email()));
            }
        }

        Ok(Self {
            records,
            lookup_latency: Duration::ZERO,
        })
    }

    /// Simulate a network round-trip of the given duration on each lookup.
    #[must_use]
    pub fn with_lookup_latency(mut self, latency: Duration) -> Self {
        self.lookup_latency = latency;
        self
    }

    /// Number of seeded records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the directory holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(feature = "demo-data")]
impl InMemoryDirectory {
    /// Directory seeded with the built-in demo organizations.
    ///
    /// # Errors
    ///
    /// Returns [`DirectorySeedError`] when a seed record violates a domain
    /// invariant; the shipped seed set converts cleanly.
    pub fn demo() -> Result<Self, DirectorySeedError> {
        let records = demo_data::demo_organizations()
            .iter()
            .map(DirectoryRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(records)
    }
}

#[cfg(feature = "demo-data")]
impl TryFrom<&demo_data::DemoOrganization> for DirectoryRecord {
    type Error = DirectorySeedError;

    fn try_from(seed: &demo_data::DemoOrganization) -> Result<Self, Self::Error> {
        use crate::domain::{IdentityId, Location, Role};

        let id = IdentityId::new(&seed.id).map_err(|err| {
            DirectorySeedError::invalid_record(format!("{email}: {err}", email = seed.email))
        })?;
        let role = match seed.role {
            demo_data::DemoRole::Donor => Role::Donor,
            demo_data::DemoRole::Recipient => Role::Recipient,
        };
        let identity = Identity::builder(id, role)
            .name(seed.name.clone())
            .email(seed.email.clone())
            .organization(seed.organization.clone())
            .phone(seed.phone.clone())
            .location(Location::new(
                seed.location.address.clone(),
                seed.location.lat,
                seed.location.lng,
            ))
            .verified(seed.verified)
            .rating(seed.rating)
            .total_donations(seed.total_donations)
            .total_received(seed.total_received)
            .build();

        Self::try_new(identity, seed.password.clone())
            .map_err(|err| DirectorySeedError::invalid_record(err.to_string()))
    }
}

#[async_trait]
impl IdentityDirectory for InMemoryDirectory {
    async fn authenticate(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<Identity>, DirectoryError> {
        if !self.lookup_latency.is_zero() {
            time::sleep(self.lookup_latency).await;
        }

        Ok(self
            .records
            .iter()
            .find(|record| record.matches(credentials))
            .map(|record| record.identity().clone()))
    }
}
