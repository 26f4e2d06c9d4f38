//! Verification runner
//!
//! Drives the browser session through the fixed flow: login, then for each
//! target screen navigate, assert its heading, pause for animations, and
//! capture a full-page screenshot. Fails fast on the first missing element;
//! the only tolerated absence is the order list having no edit buttons.

pub mod screens;

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::core::{Config, Result};
use crate::session::{Locator, Session};

pub use screens::{screen_plan, ScreenCheck};

use screens::{
    EDIT_BUTTON, EDIT_MODAL_HEADING, EDIT_MODAL_SCREENSHOT, LOGIN_BUTTON, ORDERS_NAV,
    PASSWORD_PLACEHOLDER,
};

/// Run the whole verification flow against the configured target
///
/// The browser session is closed on every exit path; the first step failure
/// aborts the run and propagates.
pub async fn run(config: &Config) -> Result<()> {
    config.validate()?;
    ensure_output_dir(&config.output.dir)?;

    let session = Session::launch(config).await?;
    let outcome = drive(&session, config).await;

    if let Err(e) = session.close().await {
        warn!(error = %e, "failed to close browser session");
    }

    outcome
}

async fn drive(session: &Session, config: &Config) -> Result<()> {
    login(session, config).await?;

    for screen in screen_plan() {
        verify_screen(session, config, &screen).await?;

        if screen.edit_modal_host && config.checks.edit_modal {
            verify_edit_modal(session, config).await?;
        }
    }

    Ok(())
}

/// Log in through the localized login screen
///
/// The application root redirects unauthenticated visitors to the login
/// screen, asserted by the password field's placeholder becoming visible.
async fn login(session: &Session, config: &Config) -> Result<()> {
    println!("🔐 Logging in at {}...", config.target.base_url);
    session.goto(&config.target.base_url).await?;

    let password_field = Locator::placeholder(PASSWORD_PLACEHOLDER);
    session.wait_visible(&password_field).await?;
    session.fill(&password_field, &config.target.password).await?;
    session.click(&Locator::button(LOGIN_BUTTON)).await?;

    // A visible orders nav button marks a completed login.
    session.wait_visible(&Locator::button(ORDERS_NAV)).await?;
    println!("✅ Login successful.");
    Ok(())
}

/// Navigate to one screen, assert its heading, and capture evidence
async fn verify_screen(session: &Session, config: &Config, screen: &ScreenCheck) -> Result<()> {
    println!("📋 Verifying {} screen...", screen.title);

    session.click(&Locator::button(screen.nav_label)).await?;
    session.wait_visible(&Locator::heading(screen.heading)).await?;
    session.settle().await;

    let path = config.output.dir.join(screen.screenshot);
    session.screenshot(&path).await?;
    println!("📸 {} captured.", path.display());
    Ok(())
}

/// Optional sub-step: open the first order's edit modal and capture it
///
/// Zero edit buttons is an expected alternate path, not a failure.
async fn verify_edit_modal(session: &Session, config: &Config) -> Result<()> {
    let edit_button = Locator::button(EDIT_BUTTON);
    if session.count_visible(&edit_button).await? == 0 {
        println!("ℹ️  no orders to edit");
        return Ok(());
    }

    println!("📋 Verifying edit-order modal...");
    session.click(&edit_button).await?;
    session
        .wait_visible(&Locator::heading(EDIT_MODAL_HEADING))
        .await?;
    session.settle().await;

    let path = config.output.dir.join(EDIT_MODAL_SCREENSHOT);
    session.screenshot(&path).await?;
    println!("📸 {} captured.", path.display());
    Ok(())
}

fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)?;
    Ok(())
}
