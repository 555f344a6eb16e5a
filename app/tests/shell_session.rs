//! End-to-end behaviour of the session store and view routing over the
//! built-in demo directory.

use std::sync::Arc;

use foodbridge::AppShell;
use foodbridge::domain::{AuthError, LoginCredentials, RegistrationRequest, Role, Tab, View};
use foodbridge::outbound::InMemoryDirectory;
use rstest::rstest;
use rstest_bdd_macros::given;

#[given("a shell over the demo directory")]
fn demo_shell() -> AppShell<InMemoryDirectory> {
    let directory = InMemoryDirectory::demo().expect("demo seeds convert cleanly");
    AppShell::new(Arc::new(directory))
}

async fn credentials_submitted(
    shell: &mut AppShell<InMemoryDirectory>,
    email: &str,
    password: &str,
    role: Role,
) -> Result<(), AuthError> {
    let credentials =
        LoginCredentials::try_from_parts(email, password, role).expect("well-formed credentials");
    shell.login(&credentials).await
}

fn role_dashboard_visible(shell: &AppShell<InMemoryDirectory>, expected: View) {
    assert_eq!(shell.visible_view(), expected);
    assert!(!shell.is_loading());
}

#[rstest]
#[case("contact@bellavista.com", Role::Donor, View::DonorDashboard)]
#[case("admin@sunshineorphanage.org", Role::Recipient, View::RecipientDashboard)]
#[tokio::test]
async fn every_demo_account_can_sign_in(
    #[case] email: &str,
    #[case] role: Role,
    #[case] expected: View,
) {
    let mut shell = demo_shell();
    credentials_submitted(&mut shell, email, "demo123", role)
        .await
        .expect("directory entry matches");
    role_dashboard_visible(&shell, expected);

    let identity = shell.identity().expect("session is active");
    assert_eq!(identity.email(), email);
    assert_eq!(identity.role(), role);
    assert!(identity.verified());
}

#[rstest]
#[case("contact@bellavista.com", "wrong", Role::Donor)]
#[case("contact@bellavista.com", "demo123", Role::Recipient)]
#[case("nobody@example.com", "demo123", Role::Donor)]
#[tokio::test]
async fn non_matching_triples_are_rejected(
    #[case] email: &str,
    #[case] password: &str,
    #[case] role: Role,
) {
    let mut shell = demo_shell();
    let err = credentials_submitted(&mut shell, email, password, role)
        .await
        .expect_err("no directory entry matches all three components");
    assert_eq!(err, AuthError::InvalidCredentials);
    assert_eq!(shell.visible_view(), View::CredentialEntry);
    assert!(!shell.is_loading());
}

#[rstest]
#[tokio::test]
async fn signing_out_returns_every_tab_to_the_credential_form() {
    let mut shell = demo_shell();
    credentials_submitted(
        &mut shell,
        "contact@bellavista.com",
        "demo123",
        Role::Donor,
    )
    .await
    .expect("demo donor signs in");
    shell.select_tab(Tab::Analytics);

    shell.logout();
    for raw in ["dashboard", "analytics", "settings", "not-a-tab"] {
        shell.select_tab_id(raw);
        assert_eq!(shell.visible_view(), View::CredentialEntry);
    }
}

#[rstest]
fn registration_defaults_to_the_donor_role() {
    let mut shell = demo_shell();
    shell.register(RegistrationRequest::new("demo123").with_name("Harvest Kitchen"));
    let identity = shell.identity().expect("registration activates a session");
    assert_eq!(identity.role(), Role::Donor);
    assert_eq!(shell.visible_view(), View::DonorDashboard);
}

#[rstest]
fn registration_accepts_an_email_already_in_the_directory() {
    // Duplicate-email registration is deliberately permissive: the store
    // never consults the directory and always succeeds.
    let mut shell = demo_shell();
    shell.register(
        RegistrationRequest::new("demo123")
            .with_email("contact@bellavista.com")
            .with_role(Role::Recipient),
    );
    let identity = shell.identity().expect("registration activates a session");
    assert_eq!(identity.email(), "contact@bellavista.com");
    assert_eq!(identity.role(), Role::Recipient);
}
