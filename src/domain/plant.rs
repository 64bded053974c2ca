use super::enums::{Light, Room, WaterAmount};
use uuid::Uuid;

/// A tracked plant with its watering status and care tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantRecord {
    pub id: Uuid,
    pub name: String,
    /// Free-form location line, e.g. "in Kitchen"
    pub location: String,
    /// Watered today
    pub is_checked: bool,
    pub sunlight: Light,
    pub water_amount: WaterAmount,
}

impl PlantRecord {
    /// Create an unchecked plant with default care tags
    pub fn new(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            location: location.into(),
            is_checked: false,
            sunlight: Light::default(),
            water_amount: WaterAmount::default(),
        }
    }

    /// Create a plant placed in one of the known rooms
    pub fn in_room(name: impl Into<String>, room: Room) -> Self {
        Self::new(name, format!("in {}", room.label()))
    }

    pub fn checked(mut self, is_checked: bool) -> Self {
        self.is_checked = is_checked;
        self
    }

    /// Flip the watered flag
    pub fn toggle(&mut self) {
        self.is_checked = !self.is_checked;
    }
}

/// The garden shown at startup
pub fn sample_plants() -> Vec<PlantRecord> {
    vec![
        PlantRecord::in_room("Monstera", Room::Kitchen),
        PlantRecord::in_room("Pothos", Room::Bedroom).checked(true),
        PlantRecord::in_room("Orchid", Room::LivingRoom),
        PlantRecord::in_room("Spider", Room::Kitchen).checked(true),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_plant_defaults() {
        let plant = PlantRecord::new("Fern", "on the shelf");
        assert_eq!(plant.name, "Fern");
        assert_eq!(plant.location, "on the shelf");
        assert!(!plant.is_checked);
        assert_eq!(plant.sunlight, Light::FullSun);
        assert_eq!(plant.water_amount, WaterAmount::Ml20To50);
    }

    #[test]
    fn test_in_room_location() {
        let plant = PlantRecord::in_room("Orchid", Room::LivingRoom);
        assert_eq!(plant.location, "in Living Room");
    }

    #[test]
    fn test_toggle() {
        let mut plant = PlantRecord::new("Fern", "in Bathroom");
        plant.toggle();
        assert!(plant.is_checked);
        plant.toggle();
        assert!(!plant.is_checked);
    }

    #[test]
    fn test_sample_plants() {
        let plants = sample_plants();
        let names: Vec<&str> = plants.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Monstera", "Pothos", "Orchid", "Spider"]);

        let checked: Vec<bool> = plants.iter().map(|p| p.is_checked).collect();
        assert_eq!(checked, vec![false, true, false, true]);

        // Ids are unique
        assert_ne!(plants[0].id, plants[3].id);
    }
}
