//! Serializable representations of the persisted domain objects.
//!
//! Equipment and logging types are stored by their tag names so that stored documents stay
//! readable and independent of the enum layout.

use std::collections::BTreeMap;

use repforge_domain as domain;
use uuid::Uuid;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub available_equipment: Vec<String>,
    pub active_generated_plan: Option<GeneratedPlan>,
    pub current_level_index: usize,
    pub block_duration_weeks: u32,
    pub completed_workout_count: u32,
    pub target_workout_count: u32,
}

impl From<domain::Profile> for Profile {
    fn from(value: domain::Profile) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Profile> for Profile {
    fn from(value: &domain::Profile) -> Self {
        Self {
            available_equipment: value
                .available_equipment
                .iter()
                .map(|e| e.as_ref().to_string())
                .collect(),
            active_generated_plan: value.active_generated_plan.as_ref().map(GeneratedPlan::from),
            current_level_index: value.current_level_index,
            block_duration_weeks: value.block_duration_weeks,
            completed_workout_count: value.completed_workout_count,
            target_workout_count: value.target_workout_count,
        }
    }
}

impl TryFrom<Profile> for domain::Profile {
    type Error = RecordError;

    fn try_from(value: Profile) -> Result<Self, Self::Error> {
        let active_generated_plan = value
            .active_generated_plan
            .map(domain::GeneratedPlan::try_from)
            .transpose()?;

        if active_generated_plan
            .as_ref()
            .is_some_and(|plan| value.current_level_index >= plan.levels.len())
        {
            return Err(RecordError::InvalidLevelIndex(value.current_level_index));
        }

        Ok(Self {
            available_equipment: value
                .available_equipment
                .into_iter()
                .map(|e| {
                    e.parse::<domain::Equipment>()
                        .map_err(|_| RecordError::InvalidEquipment(e))
                })
                .collect::<Result<_, _>>()?,
            active_generated_plan,
            current_level_index: value.current_level_index,
            block_duration_weeks: value.block_duration_weeks,
            completed_workout_count: value.completed_workout_count,
            target_workout_count: value.target_workout_count,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPlan {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub image: String,
    pub template_id: String,
    pub levels: Vec<TrainingLevel>,
}

impl From<&domain::GeneratedPlan> for GeneratedPlan {
    fn from(value: &domain::GeneratedPlan) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            description: value.description.clone(),
            image: value.image.clone(),
            template_id: value.template_id.to_string(),
            levels: value.levels.iter().map(TrainingLevel::from).collect(),
        }
    }
}

impl TryFrom<GeneratedPlan> for domain::GeneratedPlan {
    type Error = RecordError;

    fn try_from(value: GeneratedPlan) -> Result<Self, Self::Error> {
        let mut plan = Self {
            id: value.id.into(),
            name: domain::PlanName::new(&value.name)?,
            description: value.description,
            image: value.image,
            template_id: value.template_id.into(),
            levels: Vec::with_capacity(value.levels.len()),
        };

        for level in value.levels {
            plan.push_level(domain::TrainingLevel::try_from(level)?)?;
        }

        Ok(plan)
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TrainingLevel {
    pub level: u32,
    pub name: String,
    pub description: String,
    pub days: BTreeMap<String, GeneratedWorkoutDay>,
}

impl From<&domain::TrainingLevel> for TrainingLevel {
    fn from(value: &domain::TrainingLevel) -> Self {
        Self {
            level: value.level,
            name: value.name.clone(),
            description: value.description.clone(),
            days: value
                .days
                .iter()
                .map(|(label, day)| (label.clone(), GeneratedWorkoutDay::from(day)))
                .collect(),
        }
    }
}

impl TryFrom<TrainingLevel> for domain::TrainingLevel {
    type Error = RecordError;

    fn try_from(value: TrainingLevel) -> Result<Self, Self::Error> {
        Ok(Self {
            level: value.level,
            name: value.name,
            description: value.description,
            days: value
                .days
                .into_iter()
                .map(|(label, day)| {
                    domain::GeneratedWorkoutDay::try_from(day).map(|day| (label, day))
                })
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedWorkoutDay {
    pub name: String,
    pub exercises: Vec<GeneratedExercise>,
}

impl From<&domain::GeneratedWorkoutDay> for GeneratedWorkoutDay {
    fn from(value: &domain::GeneratedWorkoutDay) -> Self {
        Self {
            name: value.name.clone(),
            exercises: value.exercises.iter().map(GeneratedExercise::from).collect(),
        }
    }
}

impl TryFrom<GeneratedWorkoutDay> for domain::GeneratedWorkoutDay {
    type Error = RecordError;

    fn try_from(value: GeneratedWorkoutDay) -> Result<Self, Self::Error> {
        Ok(Self {
            name: value.name,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::GeneratedExercise::try_from)
                .collect::<Result<_, _>>()?,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GeneratedExercise {
    pub exercise_id: String,
    pub sets: u32,
    pub reps: String,
    pub logging_type: String,
}

impl From<&domain::GeneratedExercise> for GeneratedExercise {
    fn from(value: &domain::GeneratedExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            sets: value.sets,
            reps: value.reps.clone(),
            logging_type: value.logging_type.as_ref().to_string(),
        }
    }
}

impl TryFrom<GeneratedExercise> for domain::GeneratedExercise {
    type Error = RecordError;

    fn try_from(value: GeneratedExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            logging_type: value
                .logging_type
                .parse()
                .map_err(|_| RecordError::InvalidLoggingType(value.logging_type.clone()))?,
            exercise_id: value.exercise_id.into(),
            sets: value.sets,
            reps: value.reps,
        })
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    InvalidName(#[from] domain::PlanNameError),
    #[error(transparent)]
    InvalidLevel(#[from] domain::LevelError),
    #[error("invalid level index: {0}")]
    InvalidLevelIndex(usize),
    #[error("invalid equipment: {0}")]
    InvalidEquipment(String),
    #[error("invalid logging type: {0}")]
    InvalidLoggingType(String),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::{LEVEL, LEVEL_2, PLAN, PROFILE};

    use super::*;

    #[test]
    fn test_profile_try_from() {
        assert_eq!(
            domain::Profile::try_from(Profile::from(PROFILE.clone())),
            Ok(PROFILE.clone())
        );
    }

    #[test]
    fn test_profile_try_from_default() {
        assert_eq!(
            domain::Profile::try_from(Profile::from(domain::Profile::default())),
            Ok(domain::Profile::default())
        );
    }

    #[test]
    fn test_profile_serde() {
        let obj = Profile::from(PROFILE.clone());
        let serialized = json!(obj);

        assert_eq!(
            serialized["available_equipment"],
            json!(["bodyweight", "dumbbell", "pull_up_bar"])
        );
        assert_eq!(
            serialized["active_generated_plan"]["levels"][0]["days"]["day_1"]["exercises"][0]
                ["logging_type"],
            json!("reps_only_with_optional_weight")
        );

        let deserialized: Profile = serde_json::from_value(serialized).unwrap();
        assert_eq!(deserialized, obj);
    }

    #[rstest]
    #[case("")]
    #[case("treadmill")]
    #[case("Dumbbell")]
    fn test_profile_try_from_invalid_equipment(#[case] equipment: &str) {
        let mut obj = Profile::from(PROFILE.clone());
        obj.available_equipment.push(equipment.to_string());

        assert_eq!(
            domain::Profile::try_from(obj),
            Err(RecordError::InvalidEquipment(equipment.to_string()))
        );
    }

    #[test]
    fn test_profile_try_from_invalid_level_index() {
        let mut obj = Profile::from(PROFILE.clone());
        obj.current_level_index = 2;

        assert_eq!(
            domain::Profile::try_from(obj),
            Err(RecordError::InvalidLevelIndex(2))
        );
    }

    #[test]
    fn test_generated_plan_try_from() {
        assert_eq!(
            domain::GeneratedPlan::try_from(GeneratedPlan::from(&*PLAN)),
            Ok(PLAN.clone())
        );
    }

    #[test]
    fn test_generated_plan_try_from_invalid_name() {
        let mut obj = GeneratedPlan::from(&*PLAN);
        obj.name = String::from("  ");

        assert_eq!(
            domain::GeneratedPlan::try_from(obj),
            Err(RecordError::InvalidName(domain::PlanNameError::Empty))
        );
    }

    #[test]
    fn test_generated_plan_try_from_levels_out_of_sequence() {
        let mut obj = GeneratedPlan::from(&*PLAN);
        obj.levels.reverse();

        assert_eq!(
            domain::GeneratedPlan::try_from(obj),
            Err(RecordError::InvalidLevel(
                domain::LevelError::OutOfSequence {
                    expected: 1,
                    actual: 2
                }
            ))
        );
    }

    #[rstest]
    #[case(&*LEVEL)]
    #[case(&*LEVEL_2)]
    fn test_training_level_try_from(#[case] level: &domain::TrainingLevel) {
        assert_eq!(
            domain::TrainingLevel::try_from(TrainingLevel::from(level)),
            Ok(level.clone())
        );
    }

    #[rstest]
    #[case("weight_reps", domain::LoggingType::WeightReps)]
    #[case("reps_only", domain::LoggingType::RepsOnly)]
    #[case(
        "reps_only_with_optional_weight",
        domain::LoggingType::RepsOnlyWithOptionalWeight
    )]
    #[case("timed", domain::LoggingType::Timed)]
    fn test_generated_exercise_logging_type(
        #[case] tag: &str,
        #[case] logging_type: domain::LoggingType,
    ) {
        let exercise = domain::GeneratedExercise {
            exercise_id: "plank".into(),
            sets: 2,
            reps: String::from("30-60s"),
            logging_type,
        };

        assert_eq!(GeneratedExercise::from(&exercise).logging_type, tag);
        assert_eq!(
            domain::GeneratedExercise::try_from(GeneratedExercise::from(&exercise)),
            Ok(exercise)
        );
    }

    #[test]
    fn test_generated_exercise_try_from_invalid_logging_type() {
        assert_eq!(
            domain::GeneratedExercise::try_from(GeneratedExercise {
                exercise_id: String::from("plank"),
                sets: 2,
                reps: String::from("30-60s"),
                logging_type: String::from("distance"),
            }),
            Err(RecordError::InvalidLoggingType(String::from("distance")))
        );
    }
}
