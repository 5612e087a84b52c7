use thiserror::Error;
use tokio::sync::RwLock;
use tracing::info;

use crate::models::{Category, CategoryFilter, GymClass, Level, ToggleOutcome};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("No class with id {0}")]
    UnknownClass(String),
}

/// In-memory class list for the running session. Single-writer model: the
/// only mutation is the registration toggle, and state resets on restart.
pub struct ClassRegistry {
    classes: RwLock<Vec<GymClass>>,
}

impl ClassRegistry {
    pub fn new(classes: Vec<GymClass>) -> Self {
        Self {
            classes: RwLock::new(classes),
        }
    }

    pub fn with_sample_classes() -> Self {
        Self::new(sample_classes())
    }

    /// Projection of the class list through a category filter, preserving
    /// insertion order.
    pub async fn schedule(&self, filter: CategoryFilter) -> Vec<GymClass> {
        let classes = self.classes.read().await;
        classes
            .iter()
            .filter(|class| filter.matches(class.category))
            .cloned()
            .collect()
    }

    pub async fn toggle_registration(
        &self,
        class_id: &str,
    ) -> Result<(ToggleOutcome, GymClass), RegistryError> {
        let mut classes = self.classes.write().await;
        let class = classes
            .iter_mut()
            .find(|class| class.id == class_id)
            .ok_or_else(|| RegistryError::UnknownClass(class_id.to_string()))?;

        let outcome = class.toggle_registration();
        info!(
            class_id,
            name = %class.name,
            enrolled = class.enrolled,
            capacity = class.capacity,
            ?outcome,
            "registration toggled"
        );
        Ok((outcome, class.clone()))
    }
}

/// Fixed demo schedule seeded at startup; every category is represented.
pub fn sample_classes() -> Vec<GymClass> {
    vec![
        GymClass {
            id: "1".to_string(),
            name: "HIIT".to_string(),
            instructor: "Anna N.".to_string(),
            time: "18:00".to_string(),
            duration_min: 45,
            capacity: 20,
            enrolled: 15,
            level: Level::Intermediate,
            category: Category::Cardio,
            is_registered: false,
        },
        GymClass {
            id: "2".to_string(),
            name: "Yoga Flow".to_string(),
            instructor: "Maria W.".to_string(),
            time: "10:00".to_string(),
            duration_min: 60,
            capacity: 15,
            enrolled: 12,
            level: Level::Beginner,
            category: Category::Yoga,
            is_registered: true,
        },
        GymClass {
            id: "3".to_string(),
            name: "Strength Basics".to_string(),
            instructor: "Marcin L.".to_string(),
            time: "16:00".to_string(),
            duration_min: 60,
            capacity: 12,
            enrolled: 8,
            level: Level::Advanced,
            category: Category::Strength,
            is_registered: false,
        },
        GymClass {
            id: "4".to_string(),
            name: "Zumba".to_string(),
            instructor: "Kasia P.".to_string(),
            time: "19:00".to_string(),
            duration_min: 50,
            capacity: 25,
            enrolled: 21,
            level: Level::Beginner,
            category: Category::Dance,
            is_registered: false,
        },
        GymClass {
            id: "5".to_string(),
            name: "Kettlebell Circuit".to_string(),
            instructor: "Tomek S.".to_string(),
            time: "07:00".to_string(),
            duration_min: 45,
            capacity: 10,
            enrolled: 10,
            level: Level::Intermediate,
            category: Category::Functional,
            is_registered: false,
        },
    ]
}
