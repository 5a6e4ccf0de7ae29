//! Keyboard input dispatch: overlays, then global keys, then panel keys.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Overlay, Panel};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::Welcome => {
            app.overlay = Overlay::None;
            // Let the dismissing key through when it opens a file.
            if key.code != KeyCode::Char('o') {
                return;
            }
        }
        Overlay::ErrorHistory => {
            handle_error_overlay(app, key);
            return;
        }
        Overlay::OpenFile => {
            handle_open_file_overlay(app, key);
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys (always available).
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(panel) = Panel::from_index(c as usize - '1' as usize) {
                app.active_panel = panel;
            }
            return;
        }
        KeyCode::Char('o') => {
            app.path_input = app
                .source
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default();
            app.overlay = Overlay::OpenFile;
            return;
        }
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.active_panel = app.active_panel.prev();
            } else {
                app.active_panel = app.active_panel.next();
            }
            return;
        }
        KeyCode::BackTab => {
            app.active_panel = app.active_panel.prev();
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Data => handle_data_key(app, key),
        Panel::Benchmark | Panel::Trend => {} // display only
        Panel::Help => handle_help_key(app, key),
    }
}

fn handle_error_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('e') => {
            app.overlay = Overlay::None;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            if app.error_scroll + 1 < app.error_history.len() {
                app.error_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.error_scroll = app.error_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_open_file_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.overlay = Overlay::None;
            app.path_input.clear();
        }
        KeyCode::Enter => {
            let path = app.path_input.trim().to_string();
            app.path_input.clear();
            app.overlay = Overlay::None;
            if path.is_empty() {
                app.set_warning("No path given");
            } else {
                app.load_table(PathBuf::from(path));
            }
        }
        KeyCode::Backspace => {
            app.path_input.pop();
        }
        KeyCode::Char(c) => {
            app.path_input.push(c);
        }
        _ => {}
    }
}

fn handle_data_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.next_company(),
        KeyCode::Char('k') | KeyCode::Up => app.prev_company(),
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Char(']') => app.next_year(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('[') => app.prev_year(),
        KeyCode::Char('t') => app.toggle_trend(),
        KeyCode::Char('c') => {
            if app.toggles.show_trend {
                app.toggle_also_current();
            } else {
                app.set_warning("Current-year analysis is always shown while the trend is off");
            }
        }
        KeyCode::Char('r') => app.reload(),
        _ => {}
    }
}

fn handle_help_key(app: &mut AppState, key: KeyEvent) {
    if key.code == KeyCode::Char('e') {
        app.error_scroll = 0;
        app.overlay = Overlay::ErrorHistory;
    }
}
