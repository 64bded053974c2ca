use crate::app::AppState;
use crate::domain::{SheetFocus, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Notices last until the next key press
    app.clear_notice();

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::ReminderSheet => handle_sheet_mode(app, key),
        UiMode::Chooser => handle_chooser_mode(app, key),
    }
}

/// Handle keys on the home screen
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.move_selection_down();
            Ok(false)
        }

        // Tap the check toggle; on the welcome screen Enter is the reminder button
        KeyCode::Char(' ') => {
            app.toggle_selected();
            Ok(false)
        }
        KeyCode::Enter => {
            if app.checklist.is_empty() {
                app.open_reminder_sheet();
            } else {
                app.toggle_selected();
            }
            Ok(false)
        }

        // Floating "+" action
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('+') => {
            app.open_reminder_sheet();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys while the reminder sheet is open
fn handle_sheet_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Checkmark
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.confirm_reminder();
        return Ok(false);
    }

    if app.reminder_sheet.is_none() {
        app.close_reminder_sheet();
        return Ok(false);
    }
    let Some(sheet) = app.reminder_sheet.as_mut() else {
        return Ok(false);
    };

    match key.code {
        // Close (xmark) discards the draft
        KeyCode::Esc => app.close_reminder_sheet(),

        KeyCode::Tab | KeyCode::Down => sheet.focus_next(),
        KeyCode::BackTab | KeyCode::Up => sheet.focus_prev(),

        KeyCode::Enter => match sheet.focus {
            SheetFocus::Name => sheet.focus_next(),
            SheetFocus::Choice(_) => app.open_focused_chooser(),
        },

        KeyCode::Backspace => sheet.name_backspace(),

        KeyCode::Char(c) => match sheet.focus {
            SheetFocus::Name => sheet.name_push(c),
            SheetFocus::Choice(_) if c == ' ' => app.open_focused_chooser(),
            SheetFocus::Choice(_) => {}
        },

        _ => {}
    }
    Ok(false)
}

/// Handle keys while a chooser is open on top of the sheet
fn handle_chooser_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(sheet) = app.reminder_sheet.as_mut() {
                sheet.chooser_up();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(sheet) = app.reminder_sheet.as_mut() {
                sheet.chooser_down();
            }
        }

        KeyCode::Enter | KeyCode::Char(' ') => app.choose_highlighted(),

        // Direct pick: 1 is the first option
        KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
            let index = c as usize - '1' as usize;
            let in_range = app
                .reminder_sheet
                .as_ref()
                .and_then(|sheet| sheet.active_field())
                .is_some_and(|field| index < field.option_count());
            if in_range {
                app.choose(index);
            }
        }

        KeyCode::Esc => app.cancel_chooser(),

        _ => {}
    }
    Ok(false)
}
