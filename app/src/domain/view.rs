//! View routing: tabs, views, and the role-aware resolution between them.
//!
//! Tabs and views are closed enums so the router is total — adding a role or
//! a tab is a compile-time-visible change everywhere it matters. Raw tab
//! identifiers from the outside world parse into `Option<Tab>`; unknown
//! identifiers take the dashboard fallback, which is an explicit catch-all,
//! not an error.

use serde::{Deserialize, Serialize};

use super::Role;

/// Named content region selectable from the side navigation.
///
/// Identifiers use the kebab-case spelling of the navigation contract
/// (`add-food`, `dashboard`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    /// Role-polymorphic landing view.
    Dashboard,
    /// Donor: list a new donation.
    AddFood,
    /// Recipient: browse available food.
    Browse,
    /// Donor: incoming donation requests.
    Requests,
    /// Donor: donation analytics.
    Analytics,
    /// Recipient: raise an emergency request.
    Emergency,
    /// Recipient: items already received.
    Received,
    /// Recipient: leave feedback on donations.
    Feedback,
    /// Account settings, offered to both roles.
    Settings,
}

impl Tab {
    /// Parse a raw tab identifier; unknown identifiers yield `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "dashboard" => Some(Self::Dashboard),
            "add-food" => Some(Self::AddFood),
            "browse" => Some(Self::Browse),
            "requests" => Some(Self::Requests),
            "analytics" => Some(Self::Analytics),
            "emergency" => Some(Self::Emergency),
            "received" => Some(Self::Received),
            "feedback" => Some(Self::Feedback),
            "settings" => Some(Self::Settings),
            _ => None,
        }
    }

    /// Stable identifier of this tab.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::AddFood => "add-food",
            Self::Browse => "browse",
            Self::Requests => "requests",
            Self::Analytics => "analytics",
            Self::Emergency => "emergency",
            Self::Received => "received",
            Self::Feedback => "feedback",
            Self::Settings => "settings",
        }
    }

    /// Tabs offered in navigation for the given role.
    ///
    /// The tab-to-view mapping itself is role-independent; this set only
    /// decides what navigation shows.
    #[must_use]
    pub const fn available_to(role: Role) -> &'static [Self] {
        match role {
            Role::Donor => &[
                Self::Dashboard,
                Self::AddFood,
                Self::Requests,
                Self::Analytics,
                Self::Settings,
            ],
            Role::Recipient => &[
                Self::Dashboard,
                Self::Browse,
                Self::Emergency,
                Self::Received,
                Self::Feedback,
                Self::Settings,
            ],
        }
    }
}

/// Content region rendered for the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Combined login/registration form — the only view while logged out.
    CredentialEntry,
    /// Donor landing view.
    DonorDashboard,
    /// Recipient landing view.
    RecipientDashboard,
    /// Donation listing form.
    AddFood,
    /// Available-food browser.
    BrowseFood,
    /// Incoming request list.
    Requests,
    /// Donation analytics.
    Analytics,
    /// Emergency request form.
    EmergencyRequest,
    /// Received-items history.
    ReceivedItems,
    /// Feedback forms and history.
    Feedback,
    /// Account settings.
    Settings,
}

/// Resolve a known tab for the given role.
///
/// The mapping is role-independent for every tab except [`Tab::Dashboard`],
/// which resolves to the donor- or recipient-oriented dashboard depending
/// solely on the active role.
#[must_use]
pub const fn resolve(role: Role, tab: Tab) -> View {
    match tab {
        Tab::Dashboard => match role {
            Role::Donor => View::DonorDashboard,
            Role::Recipient => View::RecipientDashboard,
        },
        Tab::AddFood => View::AddFood,
        Tab::Browse => View::BrowseFood,
        Tab::Requests => View::Requests,
        Tab::Analytics => View::Analytics,
        Tab::Emergency => View::EmergencyRequest,
        Tab::Received => View::ReceivedItems,
        Tab::Feedback => View::Feedback,
        Tab::Settings => View::Settings,
    }
}

/// Resolve a raw tab identifier, falling back to the role-appropriate
/// dashboard when the identifier matches no known tab.
#[must_use]
pub fn resolve_id(role: Role, raw: &str) -> View {
    match Tab::parse(raw) {
        Some(tab) => resolve(role, tab),
        None => resolve(role, Tab::Dashboard),
    }
}
