pub mod checklist;
pub mod enums;
pub mod plant;
pub mod reminder;

pub use checklist::Checklist;
pub use enums::{Light, ReminderField, Room, UiMode, WaterAmount, WaterDays};
pub use plant::{sample_plants, PlantRecord};
pub use reminder::{ChooserState, ConfirmOutcome, ReminderDraft, ReminderSheet, SheetFocus};
