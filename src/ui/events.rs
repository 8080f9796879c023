//! Key handling for the Folio TUI.
//!
//! Every interaction maps a key press onto an [`App`] operation. The rules,
//! in priority order:
//!
//! 1. `q`, `Q` and `Ctrl+C` always quit
//! 2. while the boot splash is up, nothing else is handled
//! 3. while the help modal is open, only `?` / `Esc` (close) are handled
//! 4. global keys (`Tab`, `?`, `t`, `[`/`]`)
//! 5. keys of the focused pane

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, FocusPane};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    let is_ctrl_c =
        key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if is_ctrl_c || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.quit();
        return;
    }

    if app.is_booting() {
        return;
    }

    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
            app.toggle_help();
        }
        return;
    }

    match key.code {
        KeyCode::Tab => app.toggle_focus(),
        KeyCode::BackTab => app.toggle_focus_back(),
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('t') => app.cycle_theme(),
        KeyCode::Char('[') | KeyCode::Char(']') => app.toggle_showcase_tab(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.select_index(index);
        }
        _ => match app.focus {
            FocusPane::Terminal => handle_terminal_key(app, key.code),
            FocusPane::Api => handle_api_key(app, key.code),
            FocusPane::Showcase => handle_showcase_key(app, key.code),
        },
    }
}

fn handle_terminal_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
            app.select_next();
        }
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.select_previous();
        }
        _ => {}
    }
}

fn handle_api_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
            app.select_next();
        }
        KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
            app.select_previous();
        }
        KeyCode::Enter | KeyCode::Char('s') => app.send_active_request(),
        KeyCode::Char('c') | KeyCode::Char('y') => {
            app.copy_active_curl();
        }
        _ => {}
    }
}

fn handle_showcase_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Left | KeyCode::Right | KeyCode::Char('h') | KeyCode::Char('l') => {
            app.toggle_showcase_tab();
        }
        KeyCode::Enter => app.toggle_showcase_tab(),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_showcase_down(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_showcase_up(),
        _ => {}
    }
}
