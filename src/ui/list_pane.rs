use crate::app::AppState;
use crate::domain::PlantRecord;
use crate::ui::layout::create_checklist_layout;
use crate::ui::styles::{
    checked_style, default_style, gauge_style, muted_style, selected_style, sun_badge_style,
    title_style, unchecked_style, water_badge_style,
};
use crate::ui::widgets::{group_block, tag_badge, Icon};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span, Text},
    widgets::{Gauge, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the "My Plants" checklist: status line, progress gauge and plant rows
pub fn render_list_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let date = Local::now().format("%a %b %d");
    let title = format!(" My Plants {} ({}) ", Icon::Plant.glyph(app.use_emoji), date);
    let block = group_block().title(Span::styled(title, title_style()));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = create_checklist_layout(inner);

    let status = Paragraph::new(Line::from(Span::styled(app.status_text(), title_style())));
    f.render_widget(status, layout.status_area);

    let pct = app.percent_checked();
    let gauge = Gauge::default()
        .gauge_style(gauge_style())
        .percent(pct.round().clamp(0.0, 100.0) as u16)
        .label(format!("{:.0}%", pct));
    f.render_widget(gauge, layout.gauge_area);

    let items: Vec<ListItem> = app
        .checklist
        .plants()
        .iter()
        .map(|plant| ListItem::new(plant_row(plant, layout.list_area.width, app.use_emoji)))
        .collect();

    let list = List::new(items).highlight_style(selected_style());
    let mut state = ListState::default().with_selected(Some(app.selected_index));
    f.render_stateful_widget(list, layout.list_area, &mut state);
}

/// One plant: location line, check toggle with name, care badges, rule
fn plant_row(plant: &PlantRecord, width: u16, use_emoji: bool) -> Text<'static> {
    let (check_icon, check_style) = if plant.is_checked {
        (Icon::Checked, checked_style())
    } else {
        (Icon::Unchecked, unchecked_style())
    };

    let location = Line::from(vec![
        Span::raw("  "),
        Span::styled(
            format!("{} {}", Icon::Location.glyph(use_emoji), plant.location),
            muted_style(),
        ),
    ]);

    let name = Line::from(vec![
        Span::raw("  "),
        Span::styled(check_icon.glyph(use_emoji), check_style),
        Span::raw(" "),
        Span::styled(plant.name.clone(), default_style()),
    ]);

    let badges = Line::from(vec![
        Span::raw("      "),
        tag_badge(Icon::Sun, plant.sunlight.label(), sun_badge_style(), use_emoji),
        Span::raw("  "),
        tag_badge(Icon::Drop, plant.water_amount.label(), water_badge_style(), use_emoji),
    ]);

    let rule = Line::from(Span::styled(
        "─".repeat(width as usize),
        muted_style(),
    ));

    Text::from(vec![location, name, badges, rule])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Room;

    fn text_of(text: &Text) -> Vec<String> {
        text.lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_plant_row() {
        let plant = PlantRecord::in_room("Monstera", Room::Kitchen);
        let lines = text_of(&plant_row(&plant, 20, false));

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "  @ in Kitchen");
        assert_eq!(lines[1], "  [ ] Monstera");
        assert!(lines[2].contains("o Full Sun"));
        assert!(lines[2].contains("~ 20–50 ml"));
    }

    #[test]
    fn test_checked_plant_row() {
        let plant = PlantRecord::in_room("Pothos", Room::Bedroom).checked(true);
        let lines = text_of(&plant_row(&plant, 20, false));
        assert_eq!(lines[1], "  [x] Pothos");
    }
}
