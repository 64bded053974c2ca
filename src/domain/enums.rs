use serde::{Deserialize, Serialize};

/// Room a plant (or a reminder) lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Room {
    #[default]
    Bedroom,
    LivingRoom,
    Balcony,
    Kitchen,
    Bathroom,
}

impl Room {
    /// Display label shown in rows and choosers
    pub fn label(&self) -> &'static str {
        match self {
            Room::Bedroom => "Bedroom",
            Room::LivingRoom => "Living Room",
            Room::Balcony => "Balcony",
            Room::Kitchen => "Kitchen",
            Room::Bathroom => "Bathroom",
        }
    }

    /// Get all rooms in chooser order
    pub fn all() -> &'static [Room] {
        &[
            Room::Bedroom,
            Room::LivingRoom,
            Room::Balcony,
            Room::Kitchen,
            Room::Bathroom,
        ]
    }
}

/// Light level a plant needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Light {
    #[default]
    FullSun,
    PartialShade,
    LowLight,
}

impl Light {
    pub fn label(&self) -> &'static str {
        match self {
            Light::FullSun => "Full Sun",
            Light::PartialShade => "Partial Shade",
            Light::LowLight => "Low Light",
        }
    }

    pub fn all() -> &'static [Light] {
        &[Light::FullSun, Light::PartialShade, Light::LowLight]
    }
}

/// Watering interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterDays {
    #[default]
    EveryDay,
    #[serde(rename = "every_2_days")]
    Every2Days,
    #[serde(rename = "every_3_days")]
    Every3Days,
    OnceAWeek,
    #[serde(rename = "every_10_days")]
    Every10Days,
    #[serde(rename = "every_2_weeks")]
    Every2Weeks,
}

impl WaterDays {
    pub fn label(&self) -> &'static str {
        match self {
            WaterDays::EveryDay => "Every Day",
            WaterDays::Every2Days => "Every 2 Days",
            WaterDays::Every3Days => "Every 3 Days",
            WaterDays::OnceAWeek => "Once a week",
            WaterDays::Every10Days => "Every 10 Days",
            WaterDays::Every2Weeks => "Every 2 weeks",
        }
    }

    /// Number of days between two waterings
    pub fn interval_days(&self) -> u32 {
        match self {
            WaterDays::EveryDay => 1,
            WaterDays::Every2Days => 2,
            WaterDays::Every3Days => 3,
            WaterDays::OnceAWeek => 7,
            WaterDays::Every10Days => 10,
            WaterDays::Every2Weeks => 14,
        }
    }

    pub fn all() -> &'static [WaterDays] {
        &[
            WaterDays::EveryDay,
            WaterDays::Every2Days,
            WaterDays::Every3Days,
            WaterDays::OnceAWeek,
            WaterDays::Every10Days,
            WaterDays::Every2Weeks,
        ]
    }
}

/// Amount of water per watering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterAmount {
    #[default]
    #[serde(rename = "20_50_ml")]
    Ml20To50,
    #[serde(rename = "50_100_ml")]
    Ml50To100,
    #[serde(rename = "100_200_ml")]
    Ml100To200,
    #[serde(rename = "200_300_ml")]
    Ml200To300,
}

impl WaterAmount {
    pub fn label(&self) -> &'static str {
        match self {
            WaterAmount::Ml20To50 => "20–50 ml",
            WaterAmount::Ml50To100 => "50–100 ml",
            WaterAmount::Ml100To200 => "100–200 ml",
            WaterAmount::Ml200To300 => "200–300 ml",
        }
    }

    pub fn all() -> &'static [WaterAmount] {
        &[
            WaterAmount::Ml20To50,
            WaterAmount::Ml50To100,
            WaterAmount::Ml100To200,
            WaterAmount::Ml200To300,
        ]
    }
}

/// One of the enumerated fields of the reminder sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReminderField {
    Room,
    Light,
    WaterDays,
    WaterAmount,
}

impl ReminderField {
    /// Row title in the reminder sheet
    pub fn title(&self) -> &'static str {
        match self {
            ReminderField::Room => "Room",
            ReminderField::Light => "Light",
            ReminderField::WaterDays => "Watering Days",
            ReminderField::WaterAmount => "Water",
        }
    }

    /// Labels of every option this field can take, in chooser order
    pub fn option_labels(&self) -> Vec<&'static str> {
        match self {
            ReminderField::Room => Room::all().iter().map(Room::label).collect(),
            ReminderField::Light => Light::all().iter().map(Light::label).collect(),
            ReminderField::WaterDays => WaterDays::all().iter().map(WaterDays::label).collect(),
            ReminderField::WaterAmount => {
                WaterAmount::all().iter().map(WaterAmount::label).collect()
            }
        }
    }

    /// Number of options (not counting the chooser's Cancel entry)
    pub fn option_count(&self) -> usize {
        match self {
            ReminderField::Room => Room::all().len(),
            ReminderField::Light => Light::all().len(),
            ReminderField::WaterDays => WaterDays::all().len(),
            ReminderField::WaterAmount => WaterAmount::all().len(),
        }
    }

    pub fn all() -> &'static [ReminderField] {
        &[
            ReminderField::Room,
            ReminderField::Light,
            ReminderField::WaterDays,
            ReminderField::WaterAmount,
        ]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Home screen: checklist or welcome screen
    Normal,
    /// Reminder sheet is open, no chooser
    ReminderSheet,
    /// Reminder sheet is open with a chooser on top
    Chooser,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_option_labels_match_chooser_order() {
        assert_eq!(
            ReminderField::Room.option_labels(),
            vec!["Bedroom", "Living Room", "Balcony", "Kitchen", "Bathroom"]
        );
        assert_eq!(
            ReminderField::Light.option_labels(),
            vec!["Full Sun", "Partial Shade", "Low Light"]
        );
        assert_eq!(
            ReminderField::WaterAmount.option_labels(),
            vec!["20–50 ml", "50–100 ml", "100–200 ml", "200–300 ml"]
        );
    }

    #[test]
    fn test_option_count() {
        for field in ReminderField::all() {
            assert_eq!(field.option_count(), field.option_labels().len());
        }
        assert_eq!(ReminderField::WaterDays.option_count(), 6);
    }

    #[test]
    fn test_water_days_interval() {
        let days: Vec<u32> = WaterDays::all().iter().map(|d| d.interval_days()).collect();
        assert_eq!(days, vec![1, 2, 3, 7, 10, 14]);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Room::default(), Room::Bedroom);
        assert_eq!(Light::default(), Light::FullSun);
        assert_eq!(WaterDays::default(), WaterDays::EveryDay);
        assert_eq!(WaterAmount::default(), WaterAmount::Ml20To50);
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&Room::LivingRoom).unwrap();
        assert_eq!(json, "\"living_room\"");
        let parsed: WaterDays = serde_json::from_str("\"once_a_week\"").unwrap();
        assert_eq!(parsed, WaterDays::OnceAWeek);
        let parsed: WaterDays = serde_json::from_str("\"every_2_weeks\"").unwrap();
        assert_eq!(parsed, WaterDays::Every2Weeks);
        let amount: WaterAmount = serde_json::from_str("\"100_200_ml\"").unwrap();
        assert_eq!(amount, WaterAmount::Ml100To200);
    }
}
