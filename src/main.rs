//! # Folio CLI Entry Point
//!
//! This is the main entry point for the Folio TUI application.
//!
//! ## Overview
//!
//! Folio presents a résumé as a terminal UI: a simulated shell with canned
//! commands, an API playground that "sends" canned requests, and a showcase
//! of projects and skills.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in profile
//! folio
//!
//! # Custom profile and theme
//! folio --profile ./me.json --theme Nord
//!
//! # Print the active profile as JSON and exit
//! folio --dump-profile
//! ```
//!
//! ## Key Bindings
//!
//! - `q` / `Q` / `Ctrl+C` - Quit
//! - `Tab` / `Shift+Tab` - Switch pane
//! - `←→` / `↑↓` / `hjkl` - Previous / next item in the focused pane
//! - `1`-`9` - Jump to an item
//! - `s` / `Enter` - Send the active API request
//! - `c` / `y` - Copy the active cURL command
//! - `[` / `]` - Toggle the showcase tab
//! - `t` - Cycle theme
//! - `?` - Show/hide help

use folio::clipboard::{self, ClipboardBackend};
use folio::content::Profile;
use folio::logging;
use folio::ui::{self, config::Config, theme::Theme, App};

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

/// Trait for reading terminal events (allows dependency injection for testing)
trait EventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Production event reader that uses crossterm's event polling + read
struct CrosstermEventReader;

impl EventReader for CrosstermEventReader {
    fn read_event(&mut self, timeout: Duration) -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll for events")? {
            Ok(Some(
                event::read().context("Failed to read keyboard event")?,
            ))
        } else {
            Ok(None)
        }
    }
}

/// Folio - a terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A résumé you can poke at from the terminal", long_about = None)]
struct Args {
    /// Load résumé content from a JSON file instead of the built-in profile
    #[arg(short, long, value_name = "FILE")]
    profile: Option<PathBuf>,

    /// Print the active profile as JSON and exit
    #[arg(long)]
    dump_profile: bool,

    /// Theme to use for this session (overrides the config file)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Clipboard backend for copying cURL commands
    #[arg(long, value_enum)]
    clipboard: Option<ClipboardBackend>,

    /// Skip the boot splash
    #[arg(long)]
    no_boot_delay: bool,

    /// Write the trace log to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up panic hook to ensure terminal is restored on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_application(args);

    let _ = panic::take_hook();

    result
}

fn load_profile(path: Option<&PathBuf>) -> Result<Profile> {
    match path {
        Some(path) => Profile::load_from(path),
        None => Ok(Profile::builtin()),
    }
}

/// Merge command-line overrides into the persisted configuration.
fn effective_config(args: &Args, mut config: Config) -> Result<Config> {
    if let Some(name) = &args.theme {
        let Some(theme) = Theme::by_name(name) else {
            let available: Vec<&str> = Theme::all().iter().map(|t| t.name).collect();
            bail!(
                "Unknown theme: {}. Available themes: {}",
                name,
                available.join(", ")
            );
        };
        config.theme = theme.name.to_string();
    }
    if let Some(backend) = args.clipboard {
        config.clipboard = backend;
    }
    if args.no_boot_delay {
        config.boot_delay_ms = 0;
    }
    Ok(config)
}

fn run_application(args: Args) -> Result<()> {
    let profile = load_profile(args.profile.as_ref())?;

    if args.dump_profile {
        println!("{}", profile.to_json_pretty()?);
        return Ok(());
    }

    let config = effective_config(&args, Config::load())?;

    if let Some(path) = logging::init_logging(args.log_file) {
        tracing::info!(log = %path.display(), theme = %config.theme, "folio starting");
    }

    let clipboard = clipboard::sink_for(config.clipboard);
    let mut app = App::new(profile, config, clipboard).context("Invalid profile content")?;
    if let Some(path) = Config::default_path() {
        app = app.with_config_path(path);
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode for terminal")?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    // Run the app and ensure cleanup happens even on error
    let mut event_reader = CrosstermEventReader;
    let run_result = run_app(&mut terminal, &mut app, &mut event_reader);

    app.shutdown();

    // Restore terminal (always runs, even if run_app failed)
    let cleanup_result = cleanup_terminal(&mut terminal);

    // Return the first error that occurred, or Ok if both succeeded
    run_result?;
    cleanup_result?;

    tracing::info!("folio exited");
    Ok(())
}

/// Clean up terminal state
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;

    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;

    terminal.show_cursor().context("Failed to show cursor")?;

    Ok(())
}

/// Draw and dispatch keys until the app quits.
///
/// Blocks the calling thread in `event::poll`. The boot and copy timers are
/// tokio tasks, so they need the multi-threaded runtime's worker threads to
/// fire while this loop waits for input.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    event_reader: &mut dyn EventReader,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal
            .draw(|f| ui::render(f, app))
            .context("Failed to draw terminal UI")?;

        // Faster polling while something animates (boot gauge, copy indicator)
        let poll_timeout = if app.is_booting() || app.copy_feedback.is_copied() {
            Duration::from_millis(33)
        } else {
            Duration::from_millis(100)
        };

        let event = match event_reader.read_event(poll_timeout)? {
            Some(e) => e,
            None => continue,
        };

        if let Event::Key(key) = event {
            ui::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use folio::clipboard::{ClipboardError, ClipboardSink};
    use ratatui::backend::TestBackend;
    use std::collections::VecDeque;

    /// Mock event reader for testing that returns a predetermined sequence of events
    struct MockEventReader {
        events: VecDeque<Event>,
    }

    impl MockEventReader {
        fn new(events: Vec<Event>) -> Self {
            Self {
                events: VecDeque::from(events),
            }
        }
    }

    impl EventReader for MockEventReader {
        fn read_event(&mut self, _timeout: Duration) -> Result<Option<Event>> {
            Ok(self.events.pop_front())
        }
    }

    struct NoClipboard;

    impl ClipboardSink for NoClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::SystemUnavailable)
        }
    }

    fn key_event(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn args() -> Args {
        Args {
            profile: None,
            dump_profile: false,
            theme: None,
            clipboard: None,
            no_boot_delay: false,
            log_file: None,
        }
    }

    #[test]
    fn test_mock_event_reader() {
        let mut reader = MockEventReader::new(vec![key_event(KeyCode::Char('a'))]);

        assert!(matches!(
            reader.read_event(Duration::from_millis(10)),
            Ok(Some(Event::Key(KeyEvent {
                code: KeyCode::Char('a'),
                ..
            })))
        ));
        assert!(matches!(
            reader.read_event(Duration::from_millis(10)),
            Ok(None)
        ));
    }

    #[test]
    fn test_crossterm_event_reader_type() {
        let _reader: Box<dyn EventReader> = Box::new(CrosstermEventReader);
    }

    #[test]
    fn test_effective_config_overrides() {
        let args = Args {
            theme: Some("nord".to_string()),
            clipboard: Some(ClipboardBackend::Osc52),
            no_boot_delay: true,
            ..args()
        };

        let config = effective_config(&args, Config::default()).expect("valid overrides");
        assert_eq!(config.theme, "Nord");
        assert_eq!(config.clipboard, ClipboardBackend::Osc52);
        assert_eq!(config.boot_delay_ms, 0);
    }

    #[test]
    fn test_effective_config_rejects_unknown_theme() {
        let args = Args {
            theme: Some("Neon Dreams".to_string()),
            ..args()
        };

        let err = effective_config(&args, Config::default()).expect_err("unknown theme");
        assert!(err.to_string().contains("Unknown theme: Neon Dreams"));
    }

    #[test]
    fn test_effective_config_keeps_persisted_values() {
        let persisted = Config {
            theme: "Dracula".to_string(),
            ..Config::default()
        };
        let config = effective_config(&args(), persisted.clone()).expect("no overrides");
        assert_eq!(config, persisted);
    }

    #[test]
    fn test_run_application_missing_profile() {
        let args = Args {
            profile: Some(PathBuf::from("/nonexistent/profile.json")),
            ..args()
        };

        let result = run_application(args);
        let err_msg = format!("{:?}", result.expect_err("missing profile"));
        assert!(err_msg.contains("Failed to read profile file"));
    }

    #[tokio::test]
    async fn test_run_app_quits_on_q() {
        let config = Config {
            boot_delay_ms: 0,
            ..Config::default()
        };
        let mut app =
            App::new(Profile::builtin(), config, Box::new(NoClipboard)).expect("valid profile");
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).expect("test terminal");
        let mut reader = MockEventReader::new(vec![
            key_event(KeyCode::Tab),
            key_event(KeyCode::Char('s')),
            key_event(KeyCode::Char('q')),
        ]);

        run_app(&mut terminal, &mut app, &mut reader).expect("run_app");

        assert!(app.should_quit);
        assert_eq!(app.response_status(), "200 OK");
    }

    #[tokio::test]
    async fn test_theme_change_keeps_cli_overrides_out_of_config_file() {
        let temp_dir = tempfile::TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("config.json");
        Config::default().save_to(&path).expect("seed config");

        let args = Args {
            clipboard: Some(ClipboardBackend::Osc52),
            no_boot_delay: true,
            ..args()
        };
        let config = effective_config(&args, Config::load_from(&path).expect("load"))
            .expect("valid overrides");
        let mut app = App::new(Profile::builtin(), config, Box::new(NoClipboard))
            .expect("valid profile")
            .with_config_path(path.clone());

        app.cycle_theme();

        let saved = Config::load_from(&path).expect("reload");
        assert_eq!(
            saved,
            Config {
                theme: app.theme.name.to_string(),
                ..Config::default()
            }
        );
    }
}
