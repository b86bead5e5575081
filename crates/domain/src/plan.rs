use std::{collections::BTreeMap, slice::Iter};

use derive_more::{AsRef, Deref, Display};
use strum::EnumString;
use uuid::Uuid;

use crate::{ExerciseID, LoggingType, Property, TemplateID, WorkoutTemplate};

#[derive(Deref, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanID(Uuid);

impl PlanID {
    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq)]
pub struct PlanName(String);

impl PlanName {
    pub const MAX_LENGTH: usize = 64;

    pub fn new(name: &str) -> Result<Self, PlanNameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(PlanNameError::Empty);
        }

        let len = trimmed_name.chars().count();

        if len > Self::MAX_LENGTH {
            return Err(PlanNameError::TooLong(len));
        }

        Ok(Self(trimmed_name.to_string()))
    }

    /// Default name of a plan, shortened to `MAX_LENGTH` characters.
    #[must_use]
    pub fn for_template(template: &WorkoutTemplate) -> Self {
        let name = format!("My {}", template.name.trim());
        Self(name.chars().take(Self::MAX_LENGTH).collect::<String>().trim_end().to_string())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanNameError {
    #[error("Plan name must not be empty")]
    Empty,
    #[error("Plan name must be 64 characters or fewer ({0} > 64)")]
    TooLong(usize),
}

/// Session length chosen by the user, controlling the number of accessories per workout.
#[derive(EnumString, Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Volume {
    Short,
    #[default]
    Standard,
    Long,
}

impl Volume {
    #[must_use]
    pub const fn accessory_count(self) -> usize {
        match self {
            Volume::Short => 1,
            Volume::Standard => 2,
            Volume::Long => 4,
        }
    }

    /// Unrecognised values map to the default volume.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

impl From<Option<&str>> for Volume {
    fn from(value: Option<&str>) -> Self {
        value.map(Volume::parse_or_default).unwrap_or_default()
    }
}

impl Property for Volume {
    fn iter() -> Iter<'static, Volume> {
        static VOLUME: [Volume; 3] = [Volume::Short, Volume::Standard, Volume::Long];
        VOLUME.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Volume::Short => "Short",
            Volume::Standard => "Standard",
            Volume::Long => "Long",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedExercise {
    pub exercise_id: ExerciseID,
    pub sets: u32,
    pub reps: String,
    pub logging_type: LoggingType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWorkoutDay {
    pub name: String,
    pub exercises: Vec<GeneratedExercise>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingLevel {
    pub level: u32,
    pub name: String,
    pub description: String,
    pub days: BTreeMap<String, GeneratedWorkoutDay>,
}

impl TrainingLevel {
    /// Exercises used on any day of the level, in day order and without duplicates.
    #[must_use]
    pub fn exercise_ids(&self) -> Vec<ExerciseID> {
        let mut result: Vec<ExerciseID> = Vec::new();
        for exercise in self.days.values().flat_map(|d| d.exercises.iter()) {
            if !result.contains(&exercise.exercise_id) {
                result.push(exercise.exercise_id.clone());
            }
        }
        result
    }

    pub fn exercises(&self) -> impl Iterator<Item = &GeneratedExercise> {
        self.days.values().flat_map(|d| d.exercises.iter())
    }
}

/// A concrete training plan derived from a workout template.
///
/// Levels are only ever appended. The level at index `i` always has the number `i + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlan {
    pub id: PlanID,
    pub name: PlanName,
    pub description: String,
    pub image: String,
    pub template_id: TemplateID,
    pub levels: Vec<TrainingLevel>,
}

impl GeneratedPlan {
    #[must_use]
    pub fn next_level_number(&self) -> u32 {
        u32::try_from(self.levels.len()).map_or(u32::MAX, |n| n.saturating_add(1))
    }

    #[must_use]
    pub fn latest_level(&self) -> Option<&TrainingLevel> {
        self.levels.last()
    }

    pub fn push_level(&mut self, level: TrainingLevel) -> Result<(), LevelError> {
        let expected = self.next_level_number();

        if level.level != expected {
            return Err(LevelError::OutOfSequence {
                expected,
                actual: level.level,
            });
        }

        self.levels.push(level);
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("no active plan")]
    NoActivePlan,
    #[error("level {actual} does not follow the latest level (expected {expected})")]
    OutOfSequence { expected: u32, actual: u32 },
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(id: &str, sets: u32) -> GeneratedExercise {
        GeneratedExercise {
            exercise_id: id.into(),
            sets,
            reps: String::from("8-12"),
            logging_type: LoggingType::WeightReps,
        }
    }

    fn level(level: u32) -> TrainingLevel {
        TrainingLevel {
            level,
            name: format!("Level {level}"),
            description: String::new(),
            days: BTreeMap::from([
                (
                    String::from("day_1"),
                    GeneratedWorkoutDay {
                        name: String::from("A"),
                        exercises: vec![exercise("push_up", 3), exercise("plank", 2)],
                    },
                ),
                (
                    String::from("day_2"),
                    GeneratedWorkoutDay {
                        name: String::from("B"),
                        exercises: vec![exercise("inverted_row", 3), exercise("plank", 2)],
                    },
                ),
            ]),
        }
    }

    fn plan() -> GeneratedPlan {
        GeneratedPlan {
            id: 1.into(),
            name: PlanName::new("A").unwrap(),
            description: String::from("B"),
            image: String::new(),
            template_id: "full_body".into(),
            levels: vec![level(1)],
        }
    }

    #[rstest]
    #[case("Plan", Ok(PlanName("Plan".to_string())))]
    #[case("  My Plan  ", Ok(PlanName("My Plan".to_string())))]
    #[case("", Err(PlanNameError::Empty))]
    #[case("   ", Err(PlanNameError::Empty))]
    #[case::max_length(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Ok(PlanName("A".repeat(64)))
    )]
    #[case::too_long(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        Err(PlanNameError::TooLong(65))
    )]
    #[case::multibyte(
        "ÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜÜ",
        Ok(PlanName("Ü".repeat(64)))
    )]
    fn test_plan_name_new(#[case] name: &str, #[case] expected: Result<PlanName, PlanNameError>) {
        assert_eq!(PlanName::new(name), expected);
    }

    #[rstest]
    #[case::short("Full Body", "My Full Body")]
    #[case::padded("  Full Body  ", "My Full Body")]
    #[case::max_length(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        "My AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
    )]
    #[case::too_long(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA",
        "My AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
    )]
    #[case::cut_at_space(
        "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA BBBB",
        "My AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA"
    )]
    fn test_plan_name_for_template(#[case] template_name: &'static str, #[case] expected: &str) {
        let name = PlanName::for_template(&WorkoutTemplate {
            id: "test",
            name: template_name,
            description: "",
            days_per_week: 3,
            image: "",
            skeletons: &[],
        });

        assert_eq!(name.to_string(), expected);
        assert_eq!(PlanName::new(&name.to_string()), Ok(name));
    }

    #[rstest]
    #[case("short", Volume::Short)]
    #[case("standard", Volume::Standard)]
    #[case("long", Volume::Long)]
    #[case("Long", Volume::Long)]
    #[case(" short ", Volume::Short)]
    #[case("extreme", Volume::Standard)]
    #[case("", Volume::Standard)]
    fn test_volume_parse_or_default(#[case] value: &str, #[case] expected: Volume) {
        assert_eq!(Volume::parse_or_default(value), expected);
    }

    #[rstest]
    #[case(Volume::Short, 1)]
    #[case(Volume::Standard, 2)]
    #[case(Volume::Long, 4)]
    fn test_volume_accessory_count(#[case] volume: Volume, #[case] expected: usize) {
        assert_eq!(volume.accessory_count(), expected);
    }

    #[test]
    fn test_volume_missing() {
        assert_eq!(Volume::from(None::<&str>), Volume::Standard);
        assert_eq!(Volume::from(Some("short")), Volume::Short);
    }

    #[test]
    fn test_training_level_exercise_ids() {
        assert_eq!(
            level(1).exercise_ids(),
            vec![
                ExerciseID::from("push_up"),
                ExerciseID::from("plank"),
                ExerciseID::from("inverted_row")
            ]
        );
        assert_eq!(level(1).exercises().count(), 4);
    }

    #[test]
    fn test_generated_plan_push_level() {
        let mut plan = plan();
        assert_eq!(plan.next_level_number(), 2);

        assert_eq!(
            plan.push_level(level(3)),
            Err(LevelError::OutOfSequence {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(plan.levels.len(), 1);

        assert_eq!(plan.push_level(level(2)), Ok(()));
        assert_eq!(
            plan.levels.iter().map(|l| l.level).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(plan.latest_level(), Some(&level(2)));
        assert_eq!(plan.next_level_number(), 3);
    }

    #[test]
    fn test_plan_id_nil() {
        assert!(PlanID::nil().is_nil());
        assert_eq!(PlanID::nil(), PlanID::default());
        assert!(!plan().id.is_nil());
    }
}
