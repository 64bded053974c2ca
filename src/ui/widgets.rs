//! Stateless presentational building blocks shared by the screens.
//!
//! Everything here turns plain inputs into ratatui widgets or lines; none of
//! it holds state.

use crate::ui::styles::{
    border_style, default_style, divider_style, focused_style, muted_style, title_style,
};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Icons used across the UI, with emoji and ASCII renderings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Plant,
    Location,
    Sun,
    Drop,
    Checked,
    Unchecked,
    Close,
    Confirm,
    Plus,
    Chevron,
}

impl Icon {
    pub fn glyph(&self, use_emoji: bool) -> &'static str {
        if use_emoji {
            match self {
                Icon::Plant => "🌱",
                Icon::Location => "📍",
                Icon::Sun => "🌞",
                Icon::Drop => "💧",
                Icon::Checked => "✅",
                Icon::Unchecked => "⚪",
                Icon::Close => "✕",
                Icon::Confirm => "✓",
                Icon::Plus => "+",
                Icon::Chevron => "▾",
            }
        } else {
            match self {
                Icon::Plant => "*",
                Icon::Location => "@",
                Icon::Sun => "o",
                Icon::Drop => "~",
                Icon::Checked => "[x]",
                Icon::Unchecked => "[ ]",
                Icon::Close => "x",
                Icon::Confirm => "ok",
                Icon::Plus => "+",
                Icon::Chevron => "v",
            }
        }
    }
}

/// Rounded container used to group rows
pub fn group_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style())
}

/// Round icon button, e.g. `( ✕ )`, optionally tinted
pub fn circle_button(icon: Icon, tint: Option<Color>, use_emoji: bool) -> Span<'static> {
    let style = match tint {
        Some(color) => Style::default().fg(color),
        None => default_style(),
    };
    Span::styled(format!("( {} )", icon.glyph(use_emoji)), style)
}

/// Single-line text field inside a rounded box, with optional title and icon
pub fn text_field(
    title: Option<&str>,
    value: &str,
    icon: Option<Icon>,
    focused: bool,
    use_emoji: bool,
) -> Paragraph<'static> {
    let mut spans = Vec::new();
    if let Some(title) = title {
        spans.push(Span::styled(format!("{}  ", title), title_style()));
    }
    if let Some(icon) = icon {
        spans.push(Span::styled(format!("{} ", icon.glyph(use_emoji)), muted_style()));
    }
    spans.push(Span::styled(value.to_string(), default_style()));
    if focused {
        spans.push(Span::styled("█", default_style()));
    }

    let block = if focused {
        group_block().border_style(focused_style())
    } else {
        group_block()
    };

    Paragraph::new(Line::from(spans)).block(block)
}

/// Row with icon and title on the left, current value and chevron on the right.
/// With `show_divider` a thin rule follows the row.
pub fn value_row(
    title: &str,
    icon: Icon,
    value: &str,
    width: u16,
    show_divider: bool,
    focused: bool,
    use_emoji: bool,
) -> Vec<Line<'static>> {
    let left = Line::from(vec![
        Span::raw(" "),
        Span::styled(format!("{} ", icon.glyph(use_emoji)), muted_style()),
        Span::styled(title.to_string(), default_style()),
    ]);
    let right = Line::from(vec![
        Span::styled(value.to_string(), muted_style()),
        Span::raw(" "),
        Span::styled(Icon::Chevron.glyph(use_emoji), divider_style()),
        Span::raw(" "),
    ]);

    let pad = (width as usize).saturating_sub(left.width() + right.width());
    let mut spans = left.spans;
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(right.spans);

    let row = if focused {
        Line::from(
            spans
                .into_iter()
                .map(|s| Span::styled(s.content, s.style.patch(focused_style())))
                .collect::<Vec<_>>(),
        )
    } else {
        Line::from(spans)
    };

    let mut lines = vec![row];
    if show_divider {
        // Indented past the icon column
        let rule = "─".repeat((width as usize).saturating_sub(4));
        lines.push(Line::from(vec![
            Span::raw("    "),
            Span::styled(rule, divider_style()),
        ]));
    }
    lines
}

/// Small tag badge such as ` 🌞 Full Sun `
pub fn tag_badge(icon: Icon, label: &str, style: Style, use_emoji: bool) -> Span<'static> {
    Span::styled(format!(" {} {} ", icon.glyph(use_emoji), label), style)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_icon_ascii_fallback() {
        assert_eq!(Icon::Checked.glyph(false), "[x]");
        assert_eq!(Icon::Unchecked.glyph(false), "[ ]");
        assert_eq!(Icon::Plant.glyph(true), "🌱");
    }

    #[test]
    fn test_circle_button() {
        let span = circle_button(Icon::Confirm, Some(Color::Green), false);
        assert_eq!(span.content, "( ok )");
        assert_eq!(span.style.fg, Some(Color::Green));

        let plain = circle_button(Icon::Close, None, true);
        assert_eq!(plain.content, "( ✕ )");
    }

    #[test]
    fn test_value_row_fills_width() {
        let lines = value_row("Room", Icon::Location, "Bedroom", 40, false, false, false);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].width(), 40);

        let text = line_text(&lines[0]);
        assert!(text.starts_with(" @ Room"));
        assert!(text.ends_with("Bedroom v "));
    }

    #[test]
    fn test_value_row_divider() {
        let lines = value_row("Light", Icon::Sun, "Full Sun", 30, true, false, false);
        assert_eq!(lines.len(), 2);
        assert!(line_text(&lines[1]).contains("──"));
    }

    #[test]
    fn test_value_row_narrow_does_not_panic() {
        let lines = value_row("Watering Days", Icon::Drop, "Every 2 weeks", 5, true, true, true);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_tag_badge() {
        let badge = tag_badge(Icon::Drop, "20–50 ml", Style::default(), false);
        assert_eq!(badge.content, " ~ 20–50 ml ");
    }
}
