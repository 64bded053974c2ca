use ratatui::style::{Color, Modifier, Style};

/// Tint of the confirm button, the floating action and the gauge
pub const GREEN_TINT: Color = Color::Green;

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .bg(Color::DarkGray)
        .add_modifier(Modifier::BOLD)
}

/// Focused sheet row style
pub fn focused_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes and headers
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Border style for rounded groups
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Secondary text (locations, values, subtitles)
pub fn muted_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Row dividers and chevrons
pub fn divider_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Modal background style
pub fn modal_bg_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::White)
}

/// Modal title style
pub fn modal_title_style() -> Style {
    Style::default()
        .fg(Color::LightGreen)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Footer notice style
pub fn notice_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Checked toggle
pub fn checked_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Unchecked toggle
pub fn unchecked_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Sunlight tag badge
pub fn sun_badge_style() -> Style {
    Style::default().fg(Color::Yellow).bg(Color::Rgb(60, 55, 20))
}

/// Water amount tag badge
pub fn water_badge_style() -> Style {
    Style::default().fg(Color::LightBlue).bg(Color::Rgb(20, 35, 60))
}

/// Plant art color
pub fn plant_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Progress gauge style
pub fn gauge_style() -> Style {
    Style::default().fg(GREEN_TINT).bg(Color::DarkGray)
}

/// Primary call-to-action button
pub fn button_style() -> Style {
    Style::default()
        .fg(Color::White)
        .bg(Color::Rgb(40, 110, 60))
        .add_modifier(Modifier::BOLD)
}
