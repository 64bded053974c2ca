use super::enums::{Light, ReminderField, Room, WaterAmount, WaterDays};

/// The unsaved configuration of a new watering reminder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReminderDraft {
    pub name: String,
    pub room: Room,
    pub light: Light,
    pub water_days: WaterDays,
    pub water_amount: WaterAmount,
}

impl ReminderDraft {
    /// Display label of the current value of a field
    pub fn value_label(&self, field: ReminderField) -> &'static str {
        match field {
            ReminderField::Room => self.room.label(),
            ReminderField::Light => self.light.label(),
            ReminderField::WaterDays => self.water_days.label(),
            ReminderField::WaterAmount => self.water_amount.label(),
        }
    }

    /// Position of the current value in the field's option list
    pub fn selected_index(&self, field: ReminderField) -> usize {
        let pos = match field {
            ReminderField::Room => Room::all().iter().position(|r| *r == self.room),
            ReminderField::Light => Light::all().iter().position(|l| *l == self.light),
            ReminderField::WaterDays => {
                WaterDays::all().iter().position(|d| *d == self.water_days)
            }
            ReminderField::WaterAmount => {
                WaterAmount::all().iter().position(|a| *a == self.water_amount)
            }
        };
        pos.unwrap_or(0)
    }

    /// Set `field` to its option at `index`. Out-of-range indices leave the draft untouched.
    pub fn apply(&mut self, field: ReminderField, index: usize) -> bool {
        let applied = match field {
            ReminderField::Room => Room::all().get(index).map(|v| self.room = *v),
            ReminderField::Light => Light::all().get(index).map(|v| self.light = *v),
            ReminderField::WaterDays => WaterDays::all().get(index).map(|v| self.water_days = *v),
            ReminderField::WaterAmount => {
                WaterAmount::all().get(index).map(|v| self.water_amount = *v)
            }
        };
        applied.is_some()
    }
}

/// Which chooser, if any, is open on top of the sheet.
/// A single variant makes "at most one chooser open" hold by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChooserState {
    #[default]
    Closed,
    Selecting {
        field: ReminderField,
        /// Highlighted entry; `field.option_count()` is the Cancel entry
        highlighted: usize,
    },
}

/// Row of the sheet that has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetFocus {
    Name,
    Choice(ReminderField),
}

impl SheetFocus {
    const ORDER: [SheetFocus; 5] = [
        SheetFocus::Name,
        SheetFocus::Choice(ReminderField::Room),
        SheetFocus::Choice(ReminderField::Light),
        SheetFocus::Choice(ReminderField::WaterDays),
        SheetFocus::Choice(ReminderField::WaterAmount),
    ];

    fn position(&self) -> usize {
        Self::ORDER.iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }
}

/// Result of pressing the sheet's checkmark
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// No reminder store exists; the draft was neither saved nor scheduled
    NotWired,
}

/// State of an open reminder sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderSheet {
    pub draft: ReminderDraft,
    pub focus: SheetFocus,
    pub chooser: ChooserState,
}

impl ReminderSheet {
    pub fn new(draft: ReminderDraft) -> Self {
        Self {
            draft,
            focus: SheetFocus::Name,
            chooser: ChooserState::Closed,
        }
    }

    pub fn is_chooser_open(&self) -> bool {
        self.chooser != ChooserState::Closed
    }

    /// Field whose chooser is open
    pub fn active_field(&self) -> Option<ReminderField> {
        match self.chooser {
            ChooserState::Selecting { field, .. } => Some(field),
            ChooserState::Closed => None,
        }
    }

    /// Open the chooser for `field`, replacing any chooser already open
    pub fn open_chooser(&mut self, field: ReminderField) {
        self.focus = SheetFocus::Choice(field);
        self.chooser = ChooserState::Selecting {
            field,
            highlighted: self.draft.selected_index(field),
        };
    }

    pub fn chooser_up(&mut self) {
        if let ChooserState::Selecting { highlighted, .. } = &mut self.chooser {
            if *highlighted > 0 {
                *highlighted -= 1;
            }
        }
    }

    pub fn chooser_down(&mut self) {
        if let ChooserState::Selecting { field, highlighted } = &mut self.chooser {
            // The Cancel entry sits right after the last option
            if *highlighted < field.option_count() {
                *highlighted += 1;
            }
        }
    }

    /// Pick entry `index` of the open chooser and close it.
    /// The entry after the last option is Cancel. Returns true if the draft changed.
    pub fn choose(&mut self, index: usize) -> bool {
        let ChooserState::Selecting { field, .. } = self.chooser else {
            return false;
        };
        if index > field.option_count() {
            return false;
        }
        let changed = self.draft.apply(field, index);
        self.chooser = ChooserState::Closed;
        changed
    }

    pub fn choose_highlighted(&mut self) -> bool {
        match self.chooser {
            ChooserState::Selecting { highlighted, .. } => self.choose(highlighted),
            ChooserState::Closed => false,
        }
    }

    /// Close the chooser without touching the draft
    pub fn cancel_chooser(&mut self) {
        self.chooser = ChooserState::Closed;
    }

    pub fn focus_next(&mut self) {
        if !self.is_chooser_open() {
            self.focus = self.focus.next();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.is_chooser_open() {
            self.focus = self.focus.prev();
        }
    }

    /// Type into the name field (only while it has focus)
    pub fn name_push(&mut self, c: char) {
        if self.focus == SheetFocus::Name && !self.is_chooser_open() {
            self.draft.name.push(c);
        }
    }

    pub fn name_backspace(&mut self) {
        if self.focus == SheetFocus::Name && !self.is_chooser_open() {
            self.draft.name.pop();
        }
    }

    /// The checkmark action. Reminders are not stored anywhere yet.
    pub fn confirm(&self) -> ConfirmOutcome {
        ConfirmOutcome::NotWired
    }
}
