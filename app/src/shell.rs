//! Application shell: the composition root for session and view state.
//!
//! The shell owns one [`SessionStore`] and one view selection (active tab
//! plus the side-navigation flag for narrow viewports) and exposes the
//! application's state machine:
//!
//! ```text
//! Unauthenticated ──login/register──▶ Authenticated(role, tab)
//! Authenticated ──logout──▶ Unauthenticated
//! Authenticated(role, tabA) ──select tab──▶ Authenticated(role, tabB)
//! ```
//!
//! While logged out the only reachable view is the credential-entry form,
//! regardless of tab state. Entering the authenticated state always lands on
//! the dashboard tab with navigation closed; leaving it drops the selection,
//! so a later login starts fresh.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{
    AuthResult, Identity, IdentityDirectory, LoginCredentials, RegistrationRequest, SessionStore,
    Tab, View, view,
};

/// Composition root owning the session store and the view selection.
///
/// Constructed at application start and owned by the caller; tests build
/// their own over whatever directory double they need.
pub struct AppShell<D> {
    session: SessionStore<D>,
    active_tab: Tab,
    nav_open: bool,
}

impl<D> AppShell<D> {
    /// Create a logged-out shell over the given directory.
    pub fn new(directory: Arc<D>) -> Self {
        Self {
            session: SessionStore::new(directory),
            active_tab: Tab::Dashboard,
            nav_open: false,
        }
    }

    /// The active identity, if any.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        self.session.current()
    }

    /// Whether an identity is active.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Whether a session operation is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.session.is_loading()
    }

    /// The currently selected tab.
    #[must_use]
    pub const fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// Whether the side navigation is open on narrow viewports.
    #[must_use]
    pub const fn navigation_open(&self) -> bool {
        self.nav_open
    }

    /// The content region visible in the current state.
    ///
    /// Logged out, this is always the credential-entry form; logged in, the
    /// active tab resolves through the view router for the session's role.
    #[must_use]
    pub fn visible_view(&self) -> View {
        match self.identity() {
            None => View::CredentialEntry,
            Some(identity) => view::resolve(identity.role(), self.active_tab),
        }
    }

    /// Tabs navigation offers for the session's role; empty while logged
    /// out.
    #[must_use]
    pub fn navigation_tabs(&self) -> &'static [Tab] {
        self.identity()
            .map_or(&[], |identity| Tab::available_to(identity.role()))
    }

    /// Select a tab. Selecting also closes the side navigation, matching
    /// how narrow-viewport navigation dismisses itself.
    ///
    /// Tab selection is a transition of the authenticated state only; while
    /// logged out this is a no-op.
    pub fn select_tab(&mut self, tab: Tab) {
        if !self.is_authenticated() {
            return;
        }
        debug!(tab = tab.id(), "tab selected");
        self.active_tab = tab;
        self.nav_open = false;
    }

    /// Select a tab by raw identifier; unknown identifiers fall back to the
    /// dashboard.
    pub fn select_tab_id(&mut self, raw: &str) {
        self.select_tab(Tab::parse(raw).unwrap_or(Tab::Dashboard));
    }

    /// Toggle the side navigation. A no-op while logged out — the
    /// credential-entry view has no navigation.
    pub fn toggle_navigation(&mut self) {
        if self.is_authenticated() {
            self.nav_open = !self.nav_open;
        }
    }

    /// Close the side navigation.
    pub fn close_navigation(&mut self) {
        self.nav_open = false;
    }

    /// Register a new account and enter the authenticated state at the
    /// default view. Always succeeds; see [`SessionStore::register`] for the
    /// defaulting and permissive-duplicate semantics.
    pub fn register(&mut self, request: RegistrationRequest) {
        self.session.register(request);
        self.enter_default_view();
    }

    /// Log out and return to the credential-entry state. Unconditional; the
    /// tab selection is dropped with the session.
    pub fn logout(&mut self) {
        self.session.logout();
        self.enter_default_view();
    }

    fn enter_default_view(&mut self) {
        self.active_tab = Tab::Dashboard;
        self.nav_open = false;
    }
}

impl<D: IdentityDirectory> AppShell<D> {
    /// Log in against the directory and enter the authenticated state at
    /// the default view.
    ///
    /// # Errors
    ///
    /// Propagates [`SessionStore::login`] failures; the shell state is
    /// unchanged on failure.
    pub async fn login(&mut self, credentials: &LoginCredentials) -> AuthResult<()> {
        self.session.login(credentials).await?;
        self.enter_default_view();
        Ok(())
    }
}
