use crate::app::AppState;
use crate::ui::styles::{button_style, hint_style, muted_style, plant_style, title_style};
use crate::ui::widgets::{group_block, Icon};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

const PLANT_ART: [&str; 6] = [
    r"   \  |  /   ",
    r"   -\ | /-   ",
    r"     \|/     ",
    r"  .-------.  ",
    r"   \     /   ",
    r"    '---'    ",
];

/// Render the empty-state home screen shown when there are no plants yet
pub fn render_welcome_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let title = format!(" My Plants {} ", Icon::Plant.glyph(app.use_emoji));
    let block = group_block().title(Span::styled(title, title_style()));

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    for row in PLANT_ART {
        lines.push(Line::from(Span::styled(row, plant_style())));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Start your plant journey!", title_style())));
    lines.push(Line::raw(""));
    let pot = if app.use_emoji { "🪴" } else { "" };
    lines.push(Line::from(Span::styled(
        format!(
            "Now all your plants will be in one place and we will help you take care of them :){}",
            pot
        ),
        muted_style(),
    )));
    lines.push(Line::raw(""));
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("   Set Plant Reminder   ", button_style())));
    lines.push(Line::from(Span::styled("Enter", hint_style())));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
