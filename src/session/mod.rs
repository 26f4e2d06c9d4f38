//! Browser session management
//!
//! Owns a Chromium instance driven over CDP, its event-handler task, and the
//! single page the verification flow runs in. The session is created at run
//! start and must be closed on every exit path, including early failure.

pub mod locator;

use std::future::Future;
use std::path::Path;
use std::time::Duration;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::CaptureScreenshotFormat;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use futures::StreamExt;
use tokio::task::JoinHandle;
use tokio::time::{sleep, Instant};
use tracing::{debug, warn};

use crate::core::{Config, Result, VerishotError};

pub use locator::Locator;

/// How often visibility probes re-run while waiting
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// An ephemeral browser + page handle
///
/// Exclusively owned by the runner for the lifetime of one verification run.
pub struct Session {
    browser: Browser,
    page: Page,
    handler_task: JoinHandle<()>,
    wait_timeout: Duration,
    poll_interval: Duration,
    settle_pause: Duration,
}

impl Session {
    /// Launch a Chromium instance and open a single blank page
    pub async fn launch(config: &Config) -> Result<Self> {
        let mut builder = BrowserConfig::builder()
            .window_size(config.browser.width, config.browser.height);

        if !config.browser.headless {
            builder = builder.with_head();
        }

        let browser_config = builder.build().map_err(VerishotError::Browser)?;

        debug!(headless = config.browser.headless, "launching browser");
        let (browser, mut handler) = Browser::launch(browser_config).await?;

        // Drain CDP events until the browser goes away.
        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let page = browser.new_page("about:blank").await?;

        Ok(Self {
            browser,
            page,
            handler_task,
            wait_timeout: Duration::from_millis(config.browser.wait_timeout_ms),
            poll_interval: DEFAULT_POLL_INTERVAL,
            settle_pause: Duration::from_millis(config.browser.settle_ms),
        })
    }

    /// Navigate the page and wait for the load to finish
    pub async fn goto(&self, url: &str) -> Result<()> {
        debug!(url = %url, "navigating");
        self.page.goto(url).await?;
        self.page.wait_for_navigation().await?;
        Ok(())
    }

    /// Block until the element is visible, bounded by the configured timeout
    pub async fn wait_visible(&self, locator: &Locator) -> Result<()> {
        debug!(target = %locator, "waiting for visibility");
        let js = locator.visible_js();
        let js_ref = js.as_str();
        let page = &self.page;

        wait_until(
            self.wait_timeout,
            self.poll_interval,
            &locator.to_string(),
            move || async move {
                let visible: bool = page.evaluate(js_ref).await?.into_value()?;
                Ok(visible)
            },
        )
        .await
    }

    /// Click the first visible element matching the locator
    pub async fn click(&self, locator: &Locator) -> Result<()> {
        debug!(target = %locator, "clicking");
        if self.eval_bool(&locator.click_js()).await? {
            Ok(())
        } else {
            Err(VerishotError::ElementNotFound(locator.to_string()))
        }
    }

    /// Fill the first visible element matching the locator
    pub async fn fill(&self, locator: &Locator, value: &str) -> Result<()> {
        debug!(target = %locator, "filling");
        if self.eval_bool(&locator.fill_js(value)).await? {
            Ok(())
        } else {
            Err(VerishotError::ElementNotFound(locator.to_string()))
        }
    }

    /// Count the visible elements matching the locator
    pub async fn count_visible(&self, locator: &Locator) -> Result<u32> {
        let count: u32 = self
            .page
            .evaluate(locator.count_js())
            .await?
            .into_value()?;
        Ok(count)
    }

    /// Fixed pause so screen-transition animations settle before capture
    pub async fn settle(&self) {
        sleep(self.settle_pause).await;
    }

    /// Capture a full-page PNG screenshot to the given path
    pub async fn screenshot(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "capturing screenshot");
        self.page
            .save_screenshot(
                ScreenshotParams::builder()
                    .format(CaptureScreenshotFormat::Png)
                    .full_page(true)
                    .build(),
                path,
            )
            .await?;
        Ok(())
    }

    /// Close the browser and drain the handler task
    pub async fn close(mut self) -> Result<()> {
        debug!("closing browser");
        self.browser.close().await?;
        if let Err(e) = self.browser.wait().await {
            warn!(error = %e, "browser did not exit cleanly");
        }
        self.handler_task.abort();
        Ok(())
    }

    async fn eval_bool(&self, js: &str) -> Result<bool> {
        let value: bool = self.page.evaluate(js).await?.into_value()?;
        Ok(value)
    }
}

/// Poll `probe` until it returns true or `timeout` elapses
///
/// Probe errors propagate immediately; elapsing the window yields a
/// [`VerishotError::Timeout`] naming `what`.
async fn wait_until<F, Fut>(
    timeout: Duration,
    poll_interval: Duration,
    what: &str,
    mut probe: F,
) -> Result<()>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let deadline = Instant::now() + timeout;
    loop {
        if probe().await? {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(VerishotError::timeout(what, timeout.as_millis() as u64));
        }
        sleep(poll_interval).await;
    }
}
