use crate::app::AppState;
use crate::domain::ChooserState;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style, muted_style, selected_style},
    widgets::Icon,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

/// Render the open chooser: the field's options followed by Cancel
pub fn render_chooser(f: &mut Frame, app: &AppState, area: Rect) {
    let Some(sheet) = &app.reminder_sheet else {
        return;
    };
    let ChooserState::Selecting { field, highlighted } = sheet.chooser else {
        return;
    };

    let options = field.option_labels();
    let current = sheet.draft.value_label(field);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    for (idx, label) in options.iter().enumerate() {
        let mut spans = vec![
            Span::styled(format!("  [{}] ", idx + 1), modal_title_style()),
            Span::raw(label.to_string()),
        ];
        if *label == current {
            spans.push(Span::styled(
                format!("  {}", Icon::Confirm.glyph(app.use_emoji)),
                muted_style(),
            ));
        }
        let line = Line::from(spans);
        lines.push(if idx == highlighted {
            highlight(line)
        } else {
            line
        });
    }

    lines.push(Line::raw(""));
    let cancel = Line::from(vec![
        Span::styled("  [Esc] ", modal_title_style()),
        Span::raw("Cancel"),
    ]);
    lines.push(if highlighted == options.len() {
        highlight(cancel)
    } else {
        cancel
    });

    // Options, Cancel, two spacer rows and the border
    let height = options.len() as u16 + 5;
    let modal_area = create_modal_area(area, height);
    f.render_widget(Clear, modal_area);

    let title = format!(" Select an option: {} ", field.title());
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(Span::styled(title, modal_title_style()))
            .style(modal_bg_style()),
    );

    f.render_widget(paragraph, modal_area);
}

fn highlight(line: Line<'static>) -> Line<'static> {
    Line::from(
        line.spans
            .into_iter()
            .map(|s| Span::styled(s.content, s.style.patch(selected_style())))
            .collect::<Vec<_>>(),
    )
}
