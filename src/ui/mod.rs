pub mod chooser;
pub mod keybindings;
pub mod layout;
pub mod list_pane;
pub mod reminder_sheet;
pub mod styles;
pub mod welcome_pane;
pub mod widgets;

use crate::app::AppState;
use crate::domain::UiMode;
use chooser::render_chooser;
use keybindings::{render_footer, render_keybindings};
use layout::create_layout;
use list_pane::render_list_pane;
use ratatui::Frame;
use reminder_sheet::render_reminder_sheet;
use welcome_pane::render_welcome_pane;

/// Main render function - draws the entire UI from the current state
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.keybindings_area);

    // Home screen
    if app.checklist.is_empty() {
        render_welcome_pane(f, app, layout.content_area);
    } else {
        render_list_pane(f, app, layout.content_area);
    }

    render_footer(f, app, layout.footer_area);

    // Reminder sheet over the home screen
    if app.reminder_sheet.is_some() {
        render_reminder_sheet(f, app, size);
    }

    // Chooser over the sheet
    if app.ui_mode == UiMode::Chooser {
        render_chooser(f, app, size);
    }
}
