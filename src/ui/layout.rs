use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Home screen layout
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub content_area: Rect,
    pub footer_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Content: checklist or welcome screen
/// - Footer: notice on the left, floating "+" action on the right (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    MainLayout {
        keybindings_area: chunks[0],
        content_area: chunks[1],
        footer_area: chunks[2],
    }
}

/// Areas inside the checklist block
pub struct ChecklistLayout {
    pub status_area: Rect,
    pub gauge_area: Rect,
    pub list_area: Rect,
}

pub fn create_checklist_layout(inner: Rect) -> ChecklistLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status text
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1), // Spacer
            Constraint::Min(0),    // Plant rows
        ])
        .split(inner);

    ChecklistLayout {
        status_area: chunks[0],
        gauge_area: chunks[1],
        list_area: chunks[3],
    }
}

/// Areas inside the reminder sheet
pub struct SheetLayout {
    pub top_bar_area: Rect,
    pub name_area: Rect,
    pub place_group_area: Rect,
    pub water_group_area: Rect,
    pub hint_area: Rect,
}

/// Rows needed by the sheet body (without the outer border)
pub const SHEET_BODY_HEIGHT: u16 = 16;

pub fn create_sheet_layout(inner: Rect) -> SheetLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // xmark · title · checkmark
            Constraint::Length(1), // Spacer
            Constraint::Length(3), // Plant name field
            Constraint::Length(5), // Room / Light group
            Constraint::Length(5), // Watering group
            Constraint::Min(1),    // Hints
        ])
        .split(inner);

    SheetLayout {
        top_bar_area: chunks[0],
        name_area: chunks[2],
        place_group_area: chunks[3],
        water_group_area: chunks[4],
        hint_area: chunks[5],
    }
}

/// Create a centered modal area of the given height, clamped to the screen
pub fn create_modal_area(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let band = Rect::new(area.x, area.y + (area.height - height) / 2, area.width, height);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(band);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);
        let layout = create_layout(area);

        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.footer_area.height, 1);
        assert_eq!(layout.content_area.height, 48);
        assert_eq!(layout.footer_area.y, 49);
    }

    #[test]
    fn test_checklist_layout() {
        let layout = create_checklist_layout(Rect::new(1, 1, 80, 20));
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.gauge_area.y, 2);
        assert_eq!(layout.list_area.y, 4);
        assert_eq!(layout.list_area.height, 17);
    }

    #[test]
    fn test_sheet_layout_fits_body() {
        let layout = create_sheet_layout(Rect::new(0, 0, 60, SHEET_BODY_HEIGHT));
        assert_eq!(layout.name_area.height, 3);
        assert_eq!(layout.place_group_area.height, 5);
        assert_eq!(layout.water_group_area.height, 5);
        assert!(layout.hint_area.height >= 1);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area, 16);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 16);
        assert_eq!(modal.y, 17);

        // Taller than the screen: clamped
        let small = Rect::new(0, 0, 100, 10);
        assert_eq!(create_modal_area(small, 16).height, 10);
    }
}
