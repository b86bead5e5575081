use std::collections::BTreeSet;

use rand::Rng;

use crate::{
    Equipment, GeneratedPlan, GenerationError, LevelError, PlanRequest, ReadError,
    TrainingLevel, UpdateError,
};

#[allow(async_fn_in_trait)]
pub trait PlanService {
    async fn get_profile(&self) -> Result<Profile, ReadError>;
    async fn replace_profile(&self, profile: Profile) -> Result<Profile, UpdateError>;

    /// Generates a plan and makes it the active plan of the profile.
    async fn start_plan<G: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        rng: &mut G,
    ) -> Result<Profile, PlanServiceError>;

    async fn record_completed_workout(&self) -> Result<Profile, PlanServiceError>;

    /// Generates the next level of the active plan and continues training with it.
    ///
    /// The exercises of the current level are avoided where the catalog offers alternatives.
    async fn advance_level<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
    ) -> Result<Profile, PlanServiceError>;
}

#[derive(thiserror::Error, Debug)]
pub enum PlanServiceError {
    #[error("no active plan")]
    NoActivePlan,
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error(transparent)]
    Update(#[from] UpdateError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
    #[error(transparent)]
    Level(#[from] LevelError),
}

#[allow(async_fn_in_trait)]
pub trait ProfileRepository {
    async fn read_profile(&self) -> Result<Profile, ReadError>;
    async fn write_profile(&self, profile: Profile) -> Result<Profile, UpdateError>;
}

/// Persisted user state: available equipment, the active plan and the progress within the
/// current training block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub available_equipment: BTreeSet<Equipment>,
    pub active_generated_plan: Option<GeneratedPlan>,
    pub current_level_index: usize,
    pub block_duration_weeks: u32,
    pub completed_workout_count: u32,
    pub target_workout_count: u32,
}

impl Profile {
    pub const DEFAULT_BLOCK_DURATION_WEEKS: u32 = 4;

    pub fn start_plan(&mut self, plan: GeneratedPlan, days_per_week: u32) {
        self.active_generated_plan = Some(plan);
        self.current_level_index = 0;
        self.completed_workout_count = 0;
        self.target_workout_count = days_per_week.saturating_mul(self.block_duration_weeks);
    }

    pub fn record_completed_workout(&mut self) {
        self.completed_workout_count = self.completed_workout_count.saturating_add(1);
    }

    #[must_use]
    pub fn is_block_complete(&self) -> bool {
        self.target_workout_count > 0 && self.completed_workout_count >= self.target_workout_count
    }

    #[must_use]
    pub fn current_level(&self) -> Option<&TrainingLevel> {
        self.active_generated_plan
            .as_ref()
            .and_then(|plan| plan.levels.get(self.current_level_index))
    }

    /// Appends the level to the active plan and starts a new block with it.
    pub fn advance_to_level(&mut self, level: TrainingLevel) -> Result<(), LevelError> {
        let plan = self
            .active_generated_plan
            .as_mut()
            .ok_or(LevelError::NoActivePlan)?;

        plan.push_level(level)?;
        self.current_level_index = plan.levels.len() - 1;
        self.completed_workout_count = 0;
        Ok(())
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            available_equipment: BTreeSet::from([Equipment::Bodyweight]),
            active_generated_plan: None,
            current_level_index: 0,
            block_duration_weeks: Self::DEFAULT_BLOCK_DURATION_WEEKS,
            completed_workout_count: 0,
            target_workout_count: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{PlanName, TemplateID};

    fn level(level: u32) -> TrainingLevel {
        TrainingLevel {
            level,
            name: format!("Level {level}"),
            description: String::new(),
            days: BTreeMap::new(),
        }
    }

    fn plan() -> GeneratedPlan {
        GeneratedPlan {
            id: 1.into(),
            name: PlanName::new("A").unwrap(),
            description: String::new(),
            image: String::new(),
            template_id: TemplateID::from("full_body"),
            levels: vec![level(1)],
        }
    }

    #[test]
    fn test_profile_default() {
        let profile = Profile::default();

        assert_eq!(
            profile.available_equipment,
            BTreeSet::from([Equipment::Bodyweight])
        );
        assert_eq!(profile.active_generated_plan, None);
        assert_eq!(profile.current_level_index, 0);
        assert_eq!(profile.block_duration_weeks, 4);
        assert_eq!(profile.current_level(), None);
        assert!(!profile.is_block_complete());
    }

    #[test]
    fn test_profile_start_plan() {
        let mut profile = Profile {
            current_level_index: 2,
            completed_workout_count: 5,
            ..Profile::default()
        };

        profile.start_plan(plan(), 3);

        assert_eq!(profile.active_generated_plan, Some(plan()));
        assert_eq!(profile.current_level_index, 0);
        assert_eq!(profile.completed_workout_count, 0);
        assert_eq!(profile.target_workout_count, 12);
        assert_eq!(profile.current_level(), Some(&level(1)));
    }

    #[rstest]
    #[case(0, 0, false)]
    #[case(0, 12, false)]
    #[case(11, 12, false)]
    #[case(12, 12, true)]
    #[case(13, 12, true)]
    fn test_profile_is_block_complete(
        #[case] completed_workout_count: u32,
        #[case] target_workout_count: u32,
        #[case] expected: bool,
    ) {
        assert_eq!(
            Profile {
                completed_workout_count,
                target_workout_count,
                ..Profile::default()
            }
            .is_block_complete(),
            expected
        );
    }

    #[test]
    fn test_profile_record_completed_workout() {
        let mut profile = Profile::default();
        profile.start_plan(plan(), 1);

        for _ in 0..3 {
            profile.record_completed_workout();
        }

        assert_eq!(profile.completed_workout_count, 3);
        assert!(!profile.is_block_complete());

        profile.record_completed_workout();

        assert!(profile.is_block_complete());
    }

    #[test]
    fn test_profile_advance_to_level() {
        let mut profile = Profile::default();
        profile.start_plan(plan(), 2);
        profile.completed_workout_count = 8;

        assert_eq!(profile.advance_to_level(level(2)), Ok(()));
        assert_eq!(profile.current_level_index, 1);
        assert_eq!(profile.completed_workout_count, 0);
        assert_eq!(profile.target_workout_count, 8);
        assert_eq!(profile.current_level(), Some(&level(2)));
    }

    #[test]
    fn test_profile_advance_to_level_out_of_sequence() {
        let mut profile = Profile::default();
        profile.start_plan(plan(), 2);
        profile.completed_workout_count = 8;

        assert_eq!(
            profile.advance_to_level(level(3)),
            Err(LevelError::OutOfSequence {
                expected: 2,
                actual: 3
            })
        );
        assert_eq!(profile.current_level_index, 0);
        assert_eq!(profile.completed_workout_count, 8);
    }

    #[test]
    fn test_profile_advance_to_level_without_plan() {
        assert_eq!(
            Profile::default().advance_to_level(level(2)),
            Err(LevelError::NoActivePlan)
        );
    }
}
