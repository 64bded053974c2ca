use crate::app::AppState;
use crate::domain::{ReminderField, ReminderSheet, SheetFocus};
use crate::ui::{
    layout::{create_modal_area, create_sheet_layout, SHEET_BODY_HEIGHT},
    styles::{hint_style, modal_bg_style, modal_title_style, GREEN_TINT},
    widgets::{circle_button, group_block, text_field, value_row, Icon},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const SHEET_TITLE: &str = "Set Reminder";

fn field_icon(field: ReminderField) -> Icon {
    match field {
        ReminderField::Room => Icon::Location,
        ReminderField::Light => Icon::Sun,
        ReminderField::WaterDays | ReminderField::WaterAmount => Icon::Drop,
    }
}

/// Render the reminder sheet as a modal over the home screen
pub fn render_reminder_sheet(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(sheet) = &app.reminder_sheet else {
        return;
    };
    let use_emoji = app.use_emoji;

    let modal_area = create_modal_area(area, SHEET_BODY_HEIGHT + 2);
    f.render_widget(Clear, modal_area);

    let outer = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .style(modal_bg_style());
    let inner = outer.inner(modal_area);
    f.render_widget(outer, modal_area);

    let layout = create_sheet_layout(inner);

    f.render_widget(Paragraph::new(top_bar(inner.width, use_emoji)), layout.top_bar_area);

    let name_field = text_field(
        Some("Plant Name"),
        &sheet.draft.name,
        None,
        sheet.focus == SheetFocus::Name && !sheet.is_chooser_open(),
        use_emoji,
    );
    f.render_widget(name_field, layout.name_area);

    render_group(
        f,
        sheet,
        [ReminderField::Room, ReminderField::Light],
        layout.place_group_area,
        use_emoji,
    );
    render_group(
        f,
        sheet,
        [ReminderField::WaterDays, ReminderField::WaterAmount],
        layout.water_group_area,
        use_emoji,
    );

    let hints = Line::from(Span::styled(
        "Tab/↑↓ move  ·  Enter choose  ·  Ctrl+S save  ·  Esc close",
        hint_style(),
    ));
    f.render_widget(Paragraph::new(hints), layout.hint_area);
}

/// `( ✕ )      Set Reminder      ( ✓ )`
fn top_bar(width: u16, use_emoji: bool) -> Line<'static> {
    let close = circle_button(Icon::Close, None, use_emoji);
    let confirm = circle_button(Icon::Confirm, Some(GREEN_TINT), use_emoji);

    let used = close.width() + confirm.width() + SHEET_TITLE.len();
    let gap = (width as usize).saturating_sub(used);
    let left_gap = gap / 2;
    let right_gap = gap - left_gap;

    Line::from(vec![
        close,
        Span::raw(" ".repeat(left_gap)),
        Span::styled(SHEET_TITLE, modal_title_style()),
        Span::raw(" ".repeat(right_gap)),
        confirm,
    ])
}

/// Two choice rows in one rounded group, divider after the first
fn render_group(
    f: &mut Frame,
    sheet: &ReminderSheet,
    fields: [ReminderField; 2],
    area: Rect,
    use_emoji: bool,
) {
    let block = group_block();
    let inner = block.inner(area);

    let mut lines = Vec::new();
    for (idx, field) in fields.iter().enumerate() {
        let focused = sheet.focus == SheetFocus::Choice(*field);
        lines.extend(value_row(
            field.title(),
            field_icon(*field),
            sheet.draft.value_label(*field),
            inner.width,
            idx == 0,
            focused,
            use_emoji,
        ));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_bar_spans_width() {
        let line = top_bar(40, false);
        assert_eq!(line.width(), 40);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("( x )"));
        assert!(text.ends_with("( ok )"));
        assert!(text.contains(SHEET_TITLE));
    }

    #[test]
    fn test_field_icons() {
        assert_eq!(field_icon(ReminderField::Room), Icon::Location);
        assert_eq!(field_icon(ReminderField::Light), Icon::Sun);
        assert_eq!(field_icon(ReminderField::WaterAmount), Icon::Drop);
    }
}
