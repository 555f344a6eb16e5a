//! Account roles for donor and recipient organizations.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two mutually exclusive account kinds, fixed at creation.
///
/// The directory contract spells roles as the lowercase strings `donor` and
/// `recipient`; serde follows suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Organization offering surplus food.
    Donor,
    /// Organization receiving donations.
    Recipient,
}

impl Role {
    /// Stable identifier used by the credential directory.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Donor => "donor",
            Self::Recipient => "recipient",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Role::Donor, "donor")]
    #[case(Role::Recipient, "recipient")]
    fn roles_use_directory_spelling(#[case] role: Role, #[case] expected: &str) {
        assert_eq!(role.as_str(), expected);
        assert_eq!(role.to_string(), expected);
        let json = serde_json::to_string(&role).expect("role serializes");
        assert_eq!(json, format!("\"{expected}\""));
    }

    #[rstest]
    fn roles_round_trip_through_serde() {
        let parsed: Role = serde_json::from_str("\"recipient\"").expect("role parses");
        assert_eq!(parsed, Role::Recipient);
    }
}
