//! Demo entry-point: boots the application shell over the built-in demo
//! directory and walks a scripted session, logging each transition.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use foodbridge::AppShell;
use foodbridge::domain::{LoginCredentials, Role, Tab};
use foodbridge::outbound::InMemoryDirectory;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let directory = InMemoryDirectory::demo()?.with_lookup_latency(Duration::from_millis(400));
    let mut shell = AppShell::new(Arc::new(directory));
    info!(view = ?shell.visible_view(), "shell started");

    let credentials =
        LoginCredentials::try_from_parts("contact@bellavista.com", "demo123", Role::Donor)?;
    shell.login(&credentials).await?;
    info!(view = ?shell.visible_view(), tabs = ?shell.navigation_tabs(), "signed in");

    shell.select_tab(Tab::Analytics);
    info!(view = ?shell.visible_view(), "switched tab");

    shell.select_tab_id("not-a-tab");
    info!(view = ?shell.visible_view(), "unknown tab fell back to the dashboard");

    shell.logout();
    info!(view = ?shell.visible_view(), "signed out");

    Ok(())
}
