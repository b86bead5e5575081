use derive_more::{Deref, Display};

use crate::{ExerciseKind, LoggingType, MovementPattern};

#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TemplateID(String);

impl From<&str> for TemplateID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for TemplateID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Placeholder for one exercise of a workout, filled during plan generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSlot {
    pub slot_id: &'static str,
    pub movement_pattern: MovementPattern,
    pub kind: ExerciseKind,
    pub target_sets: u32,
    pub target_reps: &'static str,
    pub logging_type: LoggingType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSkeleton {
    pub day: &'static str,
    pub name: &'static str,
    pub core: &'static [WorkoutSlot],
    pub accessories: &'static [WorkoutSlot],
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub days_per_week: u32,
    pub image: &'static str,
    pub skeletons: &'static [WorkoutSkeleton],
}

impl WorkoutTemplate {
    #[must_use]
    pub fn id(&self) -> TemplateID {
        TemplateID::from(self.id)
    }

    pub fn slots(&self) -> impl Iterator<Item = &WorkoutSlot> {
        self.skeletons
            .iter()
            .flat_map(|s| s.core.iter().chain(s.accessories.iter()))
    }
}

/// Read-only list of workout templates, in presentation order.
#[derive(Debug, Clone, Default)]
pub struct TemplateCatalog {
    templates: Vec<WorkoutTemplate>,
}

impl TemplateCatalog {
    pub fn new(templates: impl IntoIterator<Item = WorkoutTemplate>) -> Self {
        Self {
            templates: templates.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&WorkoutTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    #[must_use]
    pub fn all(&self) -> &[WorkoutTemplate] {
        &self.templates
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    static CORE: [WorkoutSlot; 1] = [WorkoutSlot {
        slot_id: "press",
        movement_pattern: MovementPattern::HorizontalPress,
        kind: ExerciseKind::Compound,
        target_sets: 3,
        target_reps: "6-10",
        logging_type: LoggingType::WeightReps,
    }];

    static ACCESSORIES: [WorkoutSlot; 1] = [WorkoutSlot {
        slot_id: "plank",
        movement_pattern: MovementPattern::Core,
        kind: ExerciseKind::Isolation,
        target_sets: 2,
        target_reps: "45-60s",
        logging_type: LoggingType::Timed,
    }];

    static SKELETONS: [WorkoutSkeleton; 1] = [WorkoutSkeleton {
        day: "day_1",
        name: "Day 1",
        core: &CORE,
        accessories: &ACCESSORIES,
    }];

    fn template(id: &'static str) -> WorkoutTemplate {
        WorkoutTemplate {
            id,
            name: "A",
            description: "B",
            days_per_week: 3,
            image: "",
            skeletons: &SKELETONS,
        }
    }

    #[test]
    fn test_template_catalog_get() {
        let catalog = TemplateCatalog::new([template("a"), template("b")]);
        assert_eq!(catalog.get("b"), Some(&template("b")));
        assert_eq!(catalog.get("c"), None);
        assert_eq!(
            catalog.all().iter().map(|t| t.id).collect::<Vec<_>>(),
            vec!["a", "b"]
        );
    }

    #[test]
    fn test_template_slots() {
        assert_eq!(
            template("a").slots().map(|s| s.slot_id).collect::<Vec<_>>(),
            vec!["press", "plank"]
        );
        assert_eq!(template("a").id(), TemplateID::from("a"));
    }
}
