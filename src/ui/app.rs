use std::path::PathBuf;

use crate::clipboard::{copy_with_feedback, ClipboardSink};
use crate::content::{ApiRequest, Profile, TerminalCommand};
use crate::selection::{ConfirmableSelection, SelectableItem, Selection, SelectionError};
use crate::timer::{CopyFeedback, ReadyFlag};
use crate::ui::config::Config;
use crate::ui::theme::Theme;

/// Shown in the response panel until the active request is sent.
pub const AWAITING_SEND: &str = "Awaiting send";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Terminal,
    Api,
    Showcase,
}

impl FocusPane {
    pub fn next(self) -> Self {
        match self {
            FocusPane::Terminal => FocusPane::Api,
            FocusPane::Api => FocusPane::Showcase,
            FocusPane::Showcase => FocusPane::Terminal,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            FocusPane::Terminal => FocusPane::Showcase,
            FocusPane::Api => FocusPane::Terminal,
            FocusPane::Showcase => FocusPane::Api,
        }
    }
}

/// The two content views of the showcase panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseTab {
    Projects,
    Profile,
}

impl ShowcaseTab {
    pub const ALL: [ShowcaseTab; 2] = [ShowcaseTab::Projects, ShowcaseTab::Profile];
}

impl SelectableItem for ShowcaseTab {
    fn id(&self) -> &str {
        match self {
            ShowcaseTab::Projects => "projects",
            ShowcaseTab::Profile => "profile",
        }
    }

    fn label(&self) -> &str {
        match self {
            ShowcaseTab::Projects => "Projects",
            ShowcaseTab::Profile => "Profile",
        }
    }
}

pub struct App {
    pub profile: Profile,
    pub terminal: Selection<TerminalCommand>,
    pub api: ConfirmableSelection<ApiRequest>,
    pub showcase: Selection<ShowcaseTab>,
    pub showcase_scroll: u16,
    pub focus: FocusPane,
    pub boot: ReadyFlag,
    pub copy_feedback: CopyFeedback,
    pub theme: Theme,
    pub show_help: bool,
    pub should_quit: bool,
    clipboard: Box<dyn ClipboardSink>,
    config: Config,
    config_path: Option<PathBuf>,
}

impl App {
    /// Build the UI state. The boot splash starts counting down immediately,
    /// so this must run inside the tokio runtime unless the boot delay is
    /// zero.
    pub fn new(
        profile: Profile,
        config: Config,
        clipboard: Box<dyn ClipboardSink>,
    ) -> Result<Self, SelectionError> {
        let terminal = Selection::new(profile.terminal_commands.clone())?;
        let api = ConfirmableSelection::new(profile.api_requests.clone())?;
        let showcase = Selection::new(ShowcaseTab::ALL.to_vec())?;
        let theme = Theme::by_name(&config.theme)
            .unwrap_or_else(Theme::default_theme)
            .clone();

        Ok(Self {
            profile,
            terminal,
            api,
            showcase,
            showcase_scroll: 0,
            focus: FocusPane::Terminal,
            boot: ReadyFlag::arm(config.boot_delay()),
            copy_feedback: CopyFeedback::new(config.copy_feedback()),
            theme,
            show_help: false,
            should_quit: false,
            clipboard,
            config,
            config_path: None,
        })
    }

    /// Persist theme changes to `path` instead of keeping them in memory only.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_booting(&self) -> bool {
        !self.boot.is_ready()
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn toggle_focus_back(&mut self) {
        self.focus = self.focus.previous();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn select_next(&mut self) {
        match self.focus {
            FocusPane::Terminal => {
                self.terminal.next();
            }
            FocusPane::Api => {
                self.api.next();
            }
            FocusPane::Showcase => self.toggle_showcase_tab(),
        }
    }

    pub fn select_previous(&mut self) {
        match self.focus {
            FocusPane::Terminal => {
                self.terminal.previous();
            }
            FocusPane::Api => {
                self.api.previous();
            }
            FocusPane::Showcase => {
                if self.showcase.previous() {
                    self.showcase_scroll = 0;
                }
            }
        }
    }

    /// Number-key shortcut: select the item at `index` in the focused pane.
    pub fn select_index(&mut self, index: usize) {
        match self.focus {
            FocusPane::Terminal => {
                self.terminal.select_index(index);
            }
            FocusPane::Api => {
                self.api.select_index(index);
            }
            FocusPane::Showcase => {
                if self.showcase.select_index(index) {
                    self.showcase_scroll = 0;
                }
            }
        }
    }

    pub fn select_command(&mut self, id: &str) -> bool {
        self.terminal.select(id)
    }

    pub fn select_request(&mut self, id: &str) -> bool {
        self.api.select(id)
    }

    /// Simulate sending the active request; its canned response becomes
    /// visible.
    pub fn send_active_request(&mut self) {
        self.api.confirm_active();
    }

    /// Copy the active request's cURL command. Returns whether it worked.
    pub fn copy_active_curl(&mut self) -> bool {
        let curl = self.api.active().curl.clone();
        copy_with_feedback(self.clipboard.as_mut(), &curl, &mut self.copy_feedback)
    }

    pub fn toggle_showcase_tab(&mut self) {
        if self.showcase.next() {
            self.showcase_scroll = 0;
        }
    }

    pub fn scroll_showcase_down(&mut self) {
        self.showcase_scroll = self.showcase_scroll.saturating_add(1);
    }

    pub fn scroll_showcase_up(&mut self) {
        self.showcase_scroll = self.showcase_scroll.saturating_sub(1);
    }

    pub fn active_command(&self) -> &TerminalCommand {
        self.terminal.active()
    }

    pub fn active_request(&self) -> &ApiRequest {
        self.api.active()
    }

    pub fn active_tab(&self) -> ShowcaseTab {
        *self.showcase.active()
    }

    /// Status shown in the response header.
    pub fn response_status(&self) -> &str {
        match self.api.confirmed_active() {
            Some(request) => &request.response.status,
            None => AWAITING_SEND,
        }
    }

    /// Body lines of the simulated response, once the active request is sent.
    pub fn response_body(&self) -> Option<&[String]> {
        self.api
            .confirmed_active()
            .map(|request| request.response.body.as_slice())
    }

    pub fn copy_label(&self) -> &'static str {
        if self.copy_feedback.is_copied() {
            "Copied!"
        } else {
            "Copy cURL"
        }
    }

    /// Switch to the next built-in theme and persist the choice.
    pub fn cycle_theme(&mut self) {
        let next = Theme::next_after(self.theme.name);
        self.theme = next.clone();
        self.config.theme = next.name.to_string();
        tracing::info!(theme = next.name, "theme changed");

        if let Some(path) = &self.config_path {
            if let Err(e) = Config::save_theme(path, next.name) {
                tracing::warn!(error = %e, "failed to persist theme");
            }
        }
    }

    /// Stop pending timers. Called when the UI is torn down.
    pub fn shutdown(&mut self) {
        self.boot.cancel();
        self.copy_feedback.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardError;

    struct NoClipboard;

    impl ClipboardSink for NoClipboard {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::SystemUnavailable)
        }
    }

    fn instant_config() -> Config {
        Config {
            boot_delay_ms: 0,
            ..Config::default()
        }
    }

    fn app() -> App {
        App::new(Profile::builtin(), instant_config(), Box::new(NoClipboard))
            .expect("built-in profile is valid")
    }

    #[test]
    fn test_focus_cycle() {
        let mut app = app();
        assert_eq!(app.focus, FocusPane::Terminal);
        app.toggle_focus();
        assert_eq!(app.focus, FocusPane::Api);
        app.toggle_focus();
        assert_eq!(app.focus, FocusPane::Showcase);
        app.toggle_focus_back();
        assert_eq!(app.focus, FocusPane::Api);
    }

    #[test]
    fn test_showcase_tab_toggle_resets_scroll() {
        let mut app = app();
        app.scroll_showcase_down();
        app.scroll_showcase_down();
        assert_eq!(app.showcase_scroll, 2);

        app.toggle_showcase_tab();
        assert_eq!(app.active_tab(), ShowcaseTab::Profile);
        assert_eq!(app.showcase_scroll, 0);

        app.toggle_showcase_tab();
        assert_eq!(app.active_tab(), ShowcaseTab::Projects);
    }

    #[test]
    fn test_scroll_up_saturates() {
        let mut app = app();
        app.scroll_showcase_up();
        assert_eq!(app.showcase_scroll, 0);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let config = Config {
            theme: "Solar Flare".to_string(),
            ..instant_config()
        };
        let app = App::new(Profile::builtin(), config, Box::new(NoClipboard)).expect("valid");
        assert_eq!(app.theme.name, "Sky");
    }

    #[test]
    fn test_new_rejects_profile_without_requests() {
        let mut profile = Profile::builtin();
        profile.api_requests.clear();
        let result = App::new(profile, instant_config(), Box::new(NoClipboard));
        assert!(matches!(result, Err(SelectionError::Empty)));
    }

    #[test]
    fn test_cycle_theme_without_path_stays_in_memory() {
        let mut app = app();
        app.cycle_theme();
        assert_eq!(app.theme.name, "Catppuccin Mocha");
        assert_eq!(app.config().theme, "Catppuccin Mocha");
    }
}
