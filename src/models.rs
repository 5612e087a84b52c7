use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

/// Difficulty rating shown on every class card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Category {
    Cardio,
    Strength,
    Yoga,
    Dance,
    Functional,
}

impl FromStr for Category {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "Cardio" => Ok(Category::Cardio),
            "Strength" => Ok(Category::Strength),
            "Yoga" => Ok(Category::Yoga),
            "Dance" => Ok(Category::Dance),
            "Functional" => Ok(Category::Functional),
            other => Err(format!("Unknown category: {other}")),
        }
    }
}

/// Schedule filter; `All` passes every class through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl<'de> Deserialize<'de> for CategoryFilter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw == "All" {
            return Ok(CategoryFilter::All);
        }
        let category = raw.parse::<Category>().map_err(serde::de::Error::custom)?;
        Ok(CategoryFilter::Only(category))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct GymClass {
    pub id: String,
    pub name: String,
    pub instructor: String,
    /// Display string shown on the schedule, e.g. "18:00".
    pub time: String,
    pub duration_min: u32,
    pub capacity: u32,
    pub enrolled: u32,
    pub level: Level,
    pub category: Category,
    pub is_registered: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Registered,
    Unregistered,
    ClassFull,
}

impl GymClass {
    pub fn spots_left(&self) -> u32 {
        self.capacity - self.enrolled
    }

    /// Flips the current member's seat on this class.
    ///
    /// Registering on a full class is a no-op; unregistering is always
    /// allowed, even when the class is only full because of the member's
    /// own seat. `0 <= enrolled <= capacity` holds after every call.
    pub fn toggle_registration(&mut self) -> ToggleOutcome {
        if self.is_registered {
            self.is_registered = false;
            self.enrolled -= 1;
            ToggleOutcome::Unregistered
        } else if self.enrolled >= self.capacity {
            ToggleOutcome::ClassFull
        } else {
            self.is_registered = true;
            self.enrolled += 1;
            ToggleOutcome::Registered
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(enrolled: u32, capacity: u32, is_registered: bool) -> GymClass {
        GymClass {
            id: "1".to_string(),
            name: "HIIT".to_string(),
            instructor: "Anna N.".to_string(),
            time: "18:00".to_string(),
            duration_min: 45,
            capacity,
            enrolled,
            level: Level::Intermediate,
            category: Category::Cardio,
            is_registered,
        }
    }

    #[test]
    fn test_toggle_registers_when_seats_free() {
        let mut c = class(15, 20, false);
        assert_eq!(c.toggle_registration(), ToggleOutcome::Registered);
        assert_eq!(c.enrolled, 16);
        assert!(c.is_registered);
    }

    #[test]
    fn test_toggle_full_class_is_noop() {
        let mut c = class(20, 20, false);
        assert_eq!(c.toggle_registration(), ToggleOutcome::ClassFull);
        assert_eq!(c.enrolled, 20);
        assert!(!c.is_registered);
    }

    #[test]
    fn test_toggle_unregisters_even_at_capacity() {
        let mut c = class(20, 20, true);
        assert_eq!(c.toggle_registration(), ToggleOutcome::Unregistered);
        assert_eq!(c.enrolled, 19);
        assert!(!c.is_registered);
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let mut c = class(8, 12, false);
        let before = c.clone();
        c.toggle_registration();
        c.toggle_registration();
        assert_eq!(c, before);
    }

    #[test]
    fn test_enrollment_invariant_over_toggle_sequence() {
        let mut c = class(11, 12, false);
        for _ in 0..25 {
            c.toggle_registration();
            assert!(c.enrolled <= c.capacity);
        }
    }

    #[test]
    fn test_spots_left() {
        assert_eq!(class(15, 20, false).spots_left(), 5);
        assert_eq!(class(20, 20, false).spots_left(), 0);
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("Yoga".parse::<Category>().unwrap(), Category::Yoga);
        assert!("Pilates".parse::<Category>().is_err());
    }

    #[test]
    fn test_filter_matches() {
        assert!(CategoryFilter::All.matches(Category::Dance));
        assert!(CategoryFilter::Only(Category::Yoga).matches(Category::Yoga));
        assert!(!CategoryFilter::Only(Category::Yoga).matches(Category::Cardio));
    }
}
