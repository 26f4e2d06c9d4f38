//! End-to-end verification flow tests
//!
//! Runs the full flow against a static stub of the orders dashboard served on
//! a local port. Tests that launch a browser require a Chromium install and
//! are marked #[ignore].

use std::net::SocketAddr;
use std::path::Path;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use verishot::{runner, Config, VerishotError};

const APP_HTML: &str = include_str!("fixtures/app.html");
const APP_NO_ORDERS_HTML: &str = include_str!("fixtures/app_no_orders.html");
const NO_LOGIN_HTML: &str = include_str!("fixtures/no_login.html");

/// Serve one fixed HTML document for every request on an ephemeral port
async fn spawn_stub_app(body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub app");
    let addr = listener.local_addr().expect("stub app addr");

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;

                let response = format!(
                    "HTTP/1.1 200 OK\r\n\
                     Content-Type: text/html; charset=utf-8\r\n\
                     Content-Length: {}\r\n\
                     Connection: close\r\n\r\n{}",
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    addr
}

fn test_config(addr: SocketAddr, output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.target.base_url = format!("http://{}", addr);
    config.output.dir = output_dir.to_path_buf();
    config.browser.wait_timeout_ms = 5_000;
    config.browser.settle_ms = 100;
    config
}

fn assert_screenshot(dir: &Path, name: &str) {
    let path = dir.join(name);
    assert!(path.is_file(), "missing screenshot {}", path.display());
    let len = std::fs::metadata(&path).unwrap().len();
    assert!(len > 0, "empty screenshot {}", path.display());
}

#[tokio::test]
async fn test_stub_app_serves_login_screen() {
    let addr = spawn_stub_app(APP_HTML).await;

    let mut stream = TcpStream::connect(addr).await.expect("connect to stub");
    stream
        .write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .expect("send request");

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.expect("read response");
    let response = String::from_utf8_lossy(&response);

    assert!(response.starts_with("HTTP/1.1 200 OK"));
    assert!(response.contains("كلمة المرور"));
    assert!(response.contains("دخول"));
}

#[tokio::test]
#[ignore] // Requires a Chromium install
async fn test_full_flow_captures_all_screenshots() {
    let addr = spawn_stub_app(APP_HTML).await;
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(addr, tmp.path());

    runner::run(&config).await.expect("verification run failed");

    assert_screenshot(tmp.path(), "settings_page.png");
    assert_screenshot(tmp.path(), "order_list_page.png");
    assert_screenshot(tmp.path(), "add_order_page.png");
    assert_screenshot(tmp.path(), "analytics_page.png");
    assert_screenshot(tmp.path(), "edit_order_modal.png");
}

#[tokio::test]
#[ignore] // Requires a Chromium install
async fn test_edit_modal_skipped_when_disabled() {
    let addr = spawn_stub_app(APP_HTML).await;
    let tmp = tempfile::tempdir().unwrap();
    let mut config = test_config(addr, tmp.path());
    config.checks.edit_modal = false;

    runner::run(&config).await.expect("verification run failed");

    assert_screenshot(tmp.path(), "settings_page.png");
    assert_screenshot(tmp.path(), "analytics_page.png");
    assert!(!tmp.path().join("edit_order_modal.png").exists());
}

#[tokio::test]
#[ignore] // Requires a Chromium install
async fn test_no_orders_still_verifies_remaining_screens() {
    let addr = spawn_stub_app(APP_NO_ORDERS_HTML).await;
    let tmp = tempfile::tempdir().unwrap();
    let config = test_config(addr, tmp.path());

    runner::run(&config).await.expect("verification run failed");

    // All four screens captured, but no modal screenshot.
    assert_screenshot(tmp.path(), "settings_page.png");
    assert_screenshot(tmp.path(), "order_list_page.png");
    assert_screenshot(tmp.path(), "add_order_page.png");
    assert_screenshot(tmp.path(), "analytics_page.png");
    assert!(!tmp.path().join("edit_order_modal.png").exists());
}

#[tokio::test]
#[ignore] // Requires a Chromium install
async fn test_missing_login_screen_fails_before_any_screenshot() {
    let addr = spawn_stub_app(NO_LOGIN_HTML).await;
    let tmp = tempfile::tempdir().unwrap();
    let mut config = test_config(addr, tmp.path());
    config.browser.wait_timeout_ms = 1_000;

    let result = runner::run(&config).await;

    match result {
        Err(VerishotError::Timeout { what, .. }) => {
            assert!(what.contains("كلمة المرور"));
        }
        other => panic!("expected login wait timeout, got {:?}", other.err()),
    }

    let entries: Vec<_> = std::fs::read_dir(tmp.path()).unwrap().collect();
    assert!(entries.is_empty(), "no screenshots expected on login failure");
}

#[tokio::test]
#[ignore] // Requires a Chromium install
async fn test_rerun_overwrites_previous_screenshots() {
    let addr = spawn_stub_app(APP_HTML).await;
    let tmp = tempfile::tempdir().unwrap();
    let mut config = test_config(addr, tmp.path());
    config.checks.edit_modal = false;

    runner::run(&config).await.expect("first run failed");
    let first = std::fs::metadata(tmp.path().join("settings_page.png"))
        .unwrap()
        .modified()
        .unwrap();

    runner::run(&config).await.expect("second run failed");
    let second = std::fs::metadata(tmp.path().join("settings_page.png"))
        .unwrap()
        .modified()
        .unwrap();

    assert!(second >= first);
    let count = std::fs::read_dir(tmp.path()).unwrap().count();
    assert_eq!(count, 4, "reruns overwrite rather than accumulate");
}
