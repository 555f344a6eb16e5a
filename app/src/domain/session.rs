//! Session store owning the single authenticated-identity slot.
//!
//! The store is an explicitly owned object — constructed at application
//! start, injectable into tests — not ambient global state. At most one
//! identity is active at a time; absence of one is the distinguishable
//! logged-out state. Only three operations mutate the slot: [`login`],
//! [`register`], and [`logout`].
//!
//! [`login`]: SessionStore::login
//! [`register`]: SessionStore::register
//! [`logout`]: SessionStore::logout

use std::sync::Arc;

use tracing::{info, warn};
use zeroize::Zeroizing;

use super::{
    AuthError, AuthResult, Identity, IdentityDirectory, IdentityId, Location, LoginCredentials,
    Role,
};

/// Registration payload: a partial identity plus the required password.
///
/// The password is discarded on registration — never stored, never checked
/// for strength — but it is required, so it is captured in zeroizing storage
/// until the operation drops it. Every other field is optional and falls
/// back to the registration default.
#[derive(Debug)]
pub struct RegistrationRequest {
    password: Zeroizing<String>,
    name: Option<String>,
    email: Option<String>,
    organization: Option<String>,
    phone: Option<String>,
    role: Option<Role>,
    location: Option<Location>,
}

impl RegistrationRequest {
    /// Start a registration with the required password.
    pub fn new(password: impl Into<String>) -> Self {
        Self {
            password: Zeroizing::new(password.into()),
            name: None,
            email: None,
            organization: None,
            phone: None,
            role: None,
            location: None,
        }
    }

    /// Provide a display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Provide a login email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Provide an organization label.
    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    /// Provide a contact phone number.
    #[must_use]
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Choose the account role; omitted roles default to donor.
    #[must_use]
    pub const fn with_role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    /// Provide a location.
    #[must_use]
    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }
}

/// The single slot holding at most one authenticated [`Identity`].
///
/// The loading flag is advisory — it drives caller-side disablement while an
/// operation is in flight and is released on every exit path. It is not a
/// lock; overlapping operations are out of scope by design.
pub struct SessionStore<D> {
    directory: Arc<D>,
    current: Option<Identity>,
    loading: bool,
}

impl<D> SessionStore<D> {
    /// Create a logged-out store over the given directory.
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            directory,
            current: None,
            loading: false,
        }
    }

    /// The active identity, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    /// Whether an identity is active.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// Whether an operation is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Synthesize a fresh identity from the request and make it the active
    /// session unconditionally.
    ///
    /// There is no failure path: no uniqueness check against the directory
    /// and no duplicate-email rejection. The permissive behaviour is
    /// deliberate and kept as-is. The identifier is freshly generated per
    /// call; unspecified fields take the registration defaults (empty
    /// strings, donor role, origin location, unverified, zero rating and
    /// counters).
    pub fn register(&mut self, request: RegistrationRequest) -> &Identity {
        self.loading = true;
        let RegistrationRequest {
            password,
            name,
            email,
            organization,
            phone,
            role,
            location,
        } = request;
        // The password is discarded, never stored.
        drop(password);

        let role = role.unwrap_or(Role::Donor);
        let mut builder = Identity::builder(IdentityId::random(), role);
        if let Some(name) = name {
            builder = builder.name(name);
        }
        if let Some(email) = email {
            builder = builder.email(email);
        }
        if let Some(organization) = organization {
            builder = builder.organization(organization);
        }
        if let Some(phone) = phone {
            builder = builder.phone(phone);
        }
        if let Some(location) = location {
            builder = builder.location(location);
        }
        let identity = builder.build();

        info!(id = %identity.id(), role = role.as_str(), "registered new account");
        self.loading = false;
        self.current.insert(identity)
    }

    /// Clear the slot unconditionally. No confirmation, no error conditions.
    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            info!(id = %identity.id(), "logged out");
        }
    }
}

impl<D: IdentityDirectory> SessionStore<D> {
    /// Resolve the credentials against the directory and, on an exact
    /// three-way match, make the redacted identity the active session.
    ///
    /// On no match the session is left unchanged and
    /// [`AuthError::InvalidCredentials`] is returned. The loading flag is
    /// set for the operation's duration and released on all exit paths,
    /// success or failure.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] when no directory entry matches;
    /// [`AuthError::Directory`] when the directory could not be consulted.
    pub async fn login(&mut self, credentials: &LoginCredentials) -> AuthResult<()> {
        self.loading = true;
        let outcome = self.directory.authenticate(credentials).await;
        self.loading = false;

        match outcome {
            Ok(Some(identity)) => {
                info!(
                    id = %identity.id(),
                    role = identity.role().as_str(),
                    "login succeeded"
                );
                self.current = Some(identity);
                Ok(())
            }
            Ok(None) => {
                warn!(email = credentials.email(), "login rejected");
                Err(AuthError::InvalidCredentials)
            }
            Err(error) => {
                warn!(error = %error, "login aborted: directory unavailable");
                Err(AuthError::Directory(error))
            }
        }
    }
}
