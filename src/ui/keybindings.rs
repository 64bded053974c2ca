use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::{hint_style, notice_style, GREEN_TINT};
use crate::ui::widgets::{circle_button, Icon};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the keybindings hint bar for the current mode
pub fn render_keybindings(f: &mut Frame, app: &AppState, area: Rect) {
    let hints = match app.ui_mode {
        UiMode::Normal if app.checklist.is_empty() => Line::from(vec![
            Span::raw(" Enter set reminder   "),
            Span::raw("a add   "),
            Span::raw("q quit"),
        ]),
        UiMode::Normal => Line::from(vec![
            Span::raw(" ↑/↓ select   "),
            Span::raw("Space/Enter water   "),
            Span::raw("a/+ add reminder   "),
            Span::raw("q quit"),
        ]),
        UiMode::ReminderSheet => Line::from(vec![
            Span::raw(" Tab/↑↓ move   "),
            Span::raw("Enter choose   "),
            Span::raw("Ctrl+S save   "),
            Span::raw("Esc close"),
        ]),
        UiMode::Chooser => Line::from(vec![
            Span::raw(" ↑/↓ highlight   "),
            Span::raw("Enter pick   "),
            Span::raw("1-9 pick   "),
            Span::raw("Esc cancel"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

/// Render the footer: notice on the left, floating add button on the right
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let plus = circle_button(Icon::Plus, Some(GREEN_TINT), app.use_emoji);
    let plus_width = plus.width() as u16 + 1;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(plus_width)])
        .split(area);

    if let Some(notice) = &app.notice {
        let line = Line::from(Span::styled(format!(" {}", notice), notice_style()));
        f.render_widget(Paragraph::new(line), chunks[0]);
    }

    f.render_widget(Paragraph::new(Line::from(plus)), chunks[1]);
}
