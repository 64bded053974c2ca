use crate::config::{Config, ReminderDefaults};
use crate::domain::{
    Checklist, ConfirmOutcome, PlantRecord, ReminderField, ReminderSheet, SheetFocus, UiMode,
};
use tracing::{debug, info};

/// Notice shown when the reminder checkmark is pressed
pub const CONFIRM_NOT_WIRED_NOTICE: &str = "Saving reminders is not available yet, nothing was stored";

/// Main application state for one screen session
pub struct AppState {
    pub checklist: Checklist,
    pub selected_index: usize,
    pub ui_mode: UiMode,
    pub reminder_sheet: Option<ReminderSheet>,
    pub reminder_defaults: ReminderDefaults,
    pub use_emoji: bool,
    /// One-line message in the footer, cleared by the next key press
    pub notice: Option<String>,
}

impl AppState {
    pub fn new(plants: Vec<PlantRecord>, config: &Config) -> Self {
        Self {
            checklist: Checklist::new(plants),
            selected_index: 0,
            ui_mode: UiMode::Normal,
            reminder_sheet: None,
            reminder_defaults: config.reminder_defaults,
            use_emoji: config.use_emoji,
            notice: None,
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.checklist.len() {
            self.selected_index += 1;
        }
    }

    /// Tap the check toggle of the selected plant
    pub fn toggle_selected(&mut self) {
        if self.checklist.toggle(self.selected_index) {
            if let Some(plant) = self.checklist.get(self.selected_index) {
                debug!(plant = %plant.name, checked = plant.is_checked, "toggled plant");
            }
        }
    }

    /// Percentage of watered plants for the progress gauge
    pub fn percent_checked(&self) -> f64 {
        self.checklist.percent_checked()
    }

    pub fn status_text(&self) -> String {
        self.checklist.status_text()
    }

    /// Open the reminder sheet with a fresh draft
    pub fn open_reminder_sheet(&mut self) {
        self.reminder_sheet = Some(ReminderSheet::new(self.reminder_defaults.draft()));
        self.ui_mode = UiMode::ReminderSheet;
        debug!("opened reminder sheet");
    }

    /// Close the sheet and discard its draft
    pub fn close_reminder_sheet(&mut self) {
        self.reminder_sheet = None;
        self.ui_mode = UiMode::Normal;
        debug!("closed reminder sheet, draft discarded");
    }

    /// Open the chooser for `field`, replacing any open chooser
    pub fn open_chooser(&mut self, field: ReminderField) {
        if let Some(sheet) = &mut self.reminder_sheet {
            sheet.open_chooser(field);
        }
        self.sync_mode();
    }

    /// Open the chooser of the focused sheet row
    pub fn open_focused_chooser(&mut self) {
        if let Some(SheetFocus::Choice(field)) = self.reminder_sheet.as_ref().map(|s| s.focus) {
            self.open_chooser(field);
        }
    }

    /// Pick entry `index` in the open chooser
    pub fn choose(&mut self, index: usize) {
        if let Some(sheet) = &mut self.reminder_sheet {
            let field = sheet.active_field();
            if sheet.choose(index) {
                if let Some(field) = field {
                    debug!(field = field.title(), value = sheet.draft.value_label(field), "chose option");
                }
            }
        }
        self.sync_mode();
    }

    pub fn choose_highlighted(&mut self) {
        if let Some(sheet) = &mut self.reminder_sheet {
            sheet.choose_highlighted();
        }
        self.sync_mode();
    }

    pub fn cancel_chooser(&mut self) {
        if let Some(sheet) = &mut self.reminder_sheet {
            sheet.cancel_chooser();
        }
        self.sync_mode();
    }

    /// The sheet's checkmark. Surfaces that reminders are not stored yet.
    pub fn confirm_reminder(&mut self) {
        if let Some(sheet) = &self.reminder_sheet {
            match sheet.confirm() {
                ConfirmOutcome::NotWired => {
                    info!(draft = ?sheet.draft, "reminder confirm requested, no reminder store wired");
                    self.notice = Some(CONFIRM_NOT_WIRED_NOTICE.to_string());
                }
            }
        }
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    fn sync_mode(&mut self) {
        self.ui_mode = match &self.reminder_sheet {
            Some(sheet) if sheet.is_chooser_open() => UiMode::Chooser,
            Some(_) => UiMode::ReminderSheet,
            None => UiMode::Normal,
        };
    }
}
