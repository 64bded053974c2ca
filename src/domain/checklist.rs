use super::plant::PlantRecord;

/// Status line when nothing has been watered yet
pub const WAITING_MESSAGE: &str = "Your plants are waiting for a sip 💦";
/// Status line when exactly one plant has been watered
pub const SINGLE_MESSAGE: &str = "1 of your plants feels loved today ✨";
/// Status line when every plant has been watered
pub const ALL_HAPPY_MESSAGE: &str = "All your plants are happy today 🌸";

/// Ordered, in-memory list of plants for today's watering round
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Checklist {
    plants: Vec<PlantRecord>,
}

impl Checklist {
    pub fn new(plants: Vec<PlantRecord>) -> Self {
        Self { plants }
    }

    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlantRecord> {
        self.plants.get(index)
    }

    /// Flip the watered flag of a single plant.
    /// Returns false (and changes nothing) when the index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.plants.get_mut(index) {
            Some(plant) => {
                plant.toggle();
                true
            }
            None => false,
        }
    }

    pub fn checked_count(&self) -> usize {
        self.plants.iter().filter(|p| p.is_checked).count()
    }

    /// Percentage of watered plants in [0, 100]; 0 for an empty list
    pub fn percent_checked(&self) -> f64 {
        if self.plants.is_empty() {
            return 0.0;
        }
        let pct = self.checked_count() as f64 / self.plants.len() as f64 * 100.0;
        pct.clamp(0.0, 100.0)
    }

    pub fn status_text(&self) -> String {
        status_text(self.checked_count(), self.plants.len())
    }
}

/// Pick the status line for `checked` out of `total` plants.
/// Arms are tried in order: 0, 1, all, then the counted message.
pub fn status_text(checked: usize, total: usize) -> String {
    match checked {
        0 => WAITING_MESSAGE.to_string(),
        1 => SINGLE_MESSAGE.to_string(),
        n if n == total => ALL_HAPPY_MESSAGE.to_string(),
        n => format!("{} of your plants feel loved today ✨", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::plant::sample_plants;
    use pretty_assertions::assert_eq;

    fn checklist_with(checked: &[bool]) -> Checklist {
        let plants = checked
            .iter()
            .enumerate()
            .map(|(i, &c)| PlantRecord::new(format!("Plant {}", i), "in Kitchen").checked(c))
            .collect();
        Checklist::new(plants)
    }

    #[test]
    fn test_percent_checked() {
        assert_eq!(checklist_with(&[true, false, false, false]).percent_checked(), 25.0);
        assert_eq!(checklist_with(&[true, true]).percent_checked(), 100.0);
        assert_eq!(checklist_with(&[false, false, false]).percent_checked(), 0.0);

        let third = checklist_with(&[true, false, false]).percent_checked();
        assert!((third - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_percent_checked_empty() {
        let empty = Checklist::default();
        let pct = empty.percent_checked();
        assert_eq!(pct, 0.0);
        assert!(!pct.is_nan());
    }

    #[test]
    fn test_percent_in_range_for_all_mixes() {
        for total in 1..=6usize {
            for checked in 0..=total {
                let flags: Vec<bool> = (0..total).map(|i| i < checked).collect();
                let pct = checklist_with(&flags).percent_checked();
                let expected = 100.0 * checked as f64 / total as f64;
                assert!((pct - expected).abs() < 1e-9);
                assert!((0.0..=100.0).contains(&pct));
            }
        }
    }

    #[test]
    fn test_toggle_only_touches_one_plant() {
        let mut checklist = Checklist::new(sample_plants());
        let before = checklist.clone();

        assert!(checklist.toggle(2));

        assert!(checklist.get(2).unwrap().is_checked);
        for (i, (after, orig)) in checklist.plants().iter().zip(before.plants()).enumerate() {
            if i != 2 {
                assert_eq!(after, orig);
            }
        }
        let toggled = checklist.get(2).unwrap();
        let orig = before.get(2).unwrap();
        assert_eq!(toggled.id, orig.id);
        assert_eq!(toggled.name, orig.name);
        assert_eq!(toggled.sunlight, orig.sunlight);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut checklist = Checklist::new(sample_plants());
        let before = checklist.clone();
        assert!(!checklist.toggle(10));
        assert_eq!(checklist, before);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(status_text(0, 4), WAITING_MESSAGE);
        assert_eq!(status_text(1, 4), SINGLE_MESSAGE);
        assert_eq!(status_text(4, 4), ALL_HAPPY_MESSAGE);
        assert_eq!(status_text(2, 4), "2 of your plants feel loved today ✨");
        assert_eq!(status_text(3, 4), "3 of your plants feel loved today ✨");
    }

    #[test]
    fn test_status_text_tie_breaks() {
        // Empty list: the zero arm wins over "all"
        assert_eq!(status_text(0, 0), WAITING_MESSAGE);
        // Single plant watered: the singular arm wins over "all"
        assert_eq!(status_text(1, 1), SINGLE_MESSAGE);
        assert_eq!(status_text(2, 2), ALL_HAPPY_MESSAGE);
    }

    #[test]
    fn test_sample_status() {
        let checklist = Checklist::new(sample_plants());
        assert_eq!(checklist.checked_count(), 2);
        assert_eq!(checklist.percent_checked(), 50.0);
        assert_eq!(checklist.status_text(), "2 of your plants feel loved today ✨");
    }
}
