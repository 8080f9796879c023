//! Application state tests
//!
//! Tests for the App-level flows: boot splash, simulated sends, clipboard
//! feedback and theme persistence.

use folio::clipboard::{ClipboardBackend, ClipboardError, ClipboardSink};
use folio::content::Profile;
use folio::ui::app::{FocusPane, ShowcaseTab, AWAITING_SEND};
use folio::ui::config::Config;
use folio::ui::App;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;

/// Clipboard that records every write
#[derive(Clone, Default)]
struct RecordingClipboard {
    writes: Arc<Mutex<Vec<String>>>,
}

impl ClipboardSink for RecordingClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes
            .lock()
            .expect("clipboard lock")
            .push(text.to_string());
        Ok(())
    }
}

/// Clipboard that always refuses, like a browser without permission
struct DeniedClipboard;

impl ClipboardSink for DeniedClipboard {
    fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::WriteError)
    }
}

fn instant_config() -> Config {
    Config {
        boot_delay_ms: 0,
        ..Config::default()
    }
}

fn create_test_app(clipboard: Box<dyn ClipboardSink>) -> App {
    App::new(Profile::builtin(), instant_config(), clipboard).expect("built-in profile is valid")
}

#[tokio::test(start_paused = true)]
async fn test_boot_splash_lifts_after_delay() {
    let config = Config {
        boot_delay_ms: 900,
        ..Config::default()
    };
    let app = App::new(Profile::builtin(), config, Box::new(DeniedClipboard)).expect("valid");
    assert!(app.is_booting());

    tokio::time::sleep(Duration::from_millis(899)).await;
    assert!(app.is_booting());

    tokio::time::sleep(Duration::from_millis(2)).await;
    assert!(!app.is_booting());
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_during_boot_cancels_flip() {
    let config = Config {
        boot_delay_ms: 900,
        ..Config::default()
    };
    let mut app = App::new(Profile::builtin(), config, Box::new(DeniedClipboard)).expect("valid");
    app.shutdown();

    tokio::time::sleep(Duration::from_secs(2)).await;
    assert!(app.is_booting());
}

#[tokio::test]
async fn test_send_shows_canned_response() {
    let mut app = create_test_app(Box::new(DeniedClipboard));
    assert_eq!(app.response_status(), AWAITING_SEND);
    assert!(app.response_body().is_none());

    app.send_active_request();
    assert_eq!(app.response_status(), "200 OK");
    let body = app.response_body().expect("body visible after send");
    assert_eq!(body.first().map(String::as_str), Some("{"));
}

#[tokio::test]
async fn test_selecting_other_request_hides_response() {
    let mut app = create_test_app(Box::new(DeniedClipboard));
    app.send_active_request();

    assert!(app.select_request("focus"));
    assert_eq!(app.response_status(), AWAITING_SEND);

    app.send_active_request();
    assert_eq!(app.response_status(), "202 Accepted");
}

#[tokio::test]
async fn test_select_command_by_id() {
    let mut app = create_test_app(Box::new(DeniedClipboard));
    assert!(app.select_command("contact"));
    assert_eq!(app.active_command().id, "contact");
    assert!(!app.select_command("missing"));
    assert_eq!(app.active_command().id, "contact");
}

#[tokio::test(start_paused = true)]
async fn test_copy_curl_shows_feedback_then_resets() {
    let clipboard = RecordingClipboard::default();
    let writes = Arc::clone(&clipboard.writes);
    let mut app = create_test_app(Box::new(clipboard));
    assert_eq!(app.copy_label(), "Copy cURL");

    assert!(app.copy_active_curl());
    assert_eq!(app.copy_label(), "Copied!");
    assert_eq!(
        writes.lock().expect("clipboard lock").as_slice(),
        [app.active_request().curl.clone()]
    );

    tokio::time::sleep(Duration::from_millis(1_501)).await;
    assert_eq!(app.copy_label(), "Copy cURL");
}

#[tokio::test]
async fn test_copy_denied_leaves_state_untouched() {
    let mut app = create_test_app(Box::new(DeniedClipboard));
    app.send_active_request();

    assert!(!app.copy_active_curl());
    assert_eq!(app.copy_label(), "Copy cURL");
    assert_eq!(app.response_status(), "200 OK");
    assert_eq!(app.active_request().id, "profile");
}

#[tokio::test]
async fn test_select_index_follows_focus() {
    let mut app = create_test_app(Box::new(DeniedClipboard));
    app.select_index(2);
    assert_eq!(app.active_command().id, "status");

    app.focus = FocusPane::Api;
    app.select_index(1);
    assert_eq!(app.active_request().id, "focus");

    app.focus = FocusPane::Showcase;
    app.select_index(1);
    assert_eq!(app.active_tab(), ShowcaseTab::Profile);

    // Out of range is ignored
    app.select_index(8);
    assert_eq!(app.active_tab(), ShowcaseTab::Profile);
}

#[tokio::test]
async fn test_cycle_theme_persists_to_config_file() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("config.json");
    let mut app = create_test_app(Box::new(DeniedClipboard)).with_config_path(path.clone());

    app.cycle_theme();

    let saved = Config::load_from(&path).expect("config saved");
    assert_eq!(saved.theme, app.theme.name);
}

#[tokio::test]
async fn test_cycle_theme_does_not_persist_session_overrides() {
    let temp_dir = TempDir::new().expect("create temp dir");
    let path = temp_dir.path().join("config.json");
    Config::default().save_to(&path).expect("seed config");

    // The session runs with --no-boot-delay and --clipboard osc52
    let session = Config {
        boot_delay_ms: 0,
        clipboard: ClipboardBackend::Osc52,
        ..Config::load_from(&path).expect("load seed")
    };
    let mut app = App::new(Profile::builtin(), session, Box::new(DeniedClipboard))
        .expect("built-in profile is valid")
        .with_config_path(path.clone());

    app.cycle_theme();

    let saved = Config::load_from(&path).expect("config saved");
    assert_eq!(saved.theme, app.theme.name);
    assert_eq!(saved.boot_delay_ms, 900);
    assert_eq!(saved.clipboard, ClipboardBackend::Auto);
    assert_eq!(app.config().boot_delay_ms, 0);
}
