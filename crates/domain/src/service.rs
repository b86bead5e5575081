use log::{debug, error};
use rand::Rng;

use crate::{
    GenerationError, PlanGenerator, PlanRequest, PlanService, PlanServiceError, Profile,
    ProfileRepository, ReadError, TrainingLevel, UpdateError,
};

pub struct Service<'a, R> {
    repository: R,
    generator: PlanGenerator<'a>,
}

impl<R> Service<'static, R>
where
    R: ProfileRepository,
{
    pub fn new(repository: R) -> Self {
        Self::with_generator(repository, PlanGenerator::default())
    }
}

impl<'a, R> Service<'a, R>
where
    R: ProfileRepository,
{
    pub fn with_generator(repository: R, generator: PlanGenerator<'a>) -> Self {
        Self {
            repository,
            generator,
        }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ProfileRepository> PlanService for Service<'_, R> {
    async fn get_profile(&self) -> Result<Profile, ReadError> {
        log_on_error!(self.repository.read_profile(), ReadError, "get", "profile")
    }

    async fn replace_profile(&self, profile: Profile) -> Result<Profile, UpdateError> {
        log_on_error!(
            self.repository.write_profile(profile),
            UpdateError,
            "replace",
            "profile"
        )
    }

    async fn start_plan<G: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        rng: &mut G,
    ) -> Result<Profile, PlanServiceError> {
        let mut profile = self.get_profile().await?;
        let template = self
            .generator
            .template(&request.template_id)
            .ok_or_else(|| GenerationError::TemplateNotFound(request.template_id.clone()))
            .inspect_err(|err| error!("failed to start plan: {err}"))?;
        let plan = self.generator.generate_plan(request, rng)?;

        debug!("starting plan {} based on {}", plan.name, template.id);

        profile.available_equipment.clone_from(&request.equipment);
        profile.start_plan(plan, template.days_per_week);
        Ok(self.replace_profile(profile).await?)
    }

    async fn record_completed_workout(&self) -> Result<Profile, PlanServiceError> {
        let mut profile = self.get_profile().await?;
        if profile.active_generated_plan.is_none() {
            return Err(PlanServiceError::NoActivePlan);
        }
        profile.record_completed_workout();
        Ok(self.replace_profile(profile).await?)
    }

    async fn advance_level<G: Rng + ?Sized>(
        &self,
        rng: &mut G,
    ) -> Result<Profile, PlanServiceError> {
        let mut profile = self.get_profile().await?;
        let Some(plan) = &profile.active_generated_plan else {
            return Err(PlanServiceError::NoActivePlan);
        };
        let previous_level_exercise_ids = profile
            .current_level()
            .map(TrainingLevel::exercise_ids)
            .unwrap_or_default();
        let level = self
            .generator
            .generate_next_level(
                plan,
                &profile.available_equipment,
                &previous_level_exercise_ids,
                rng,
            )
            .inspect_err(|err| error!("failed to advance level: {err}"))?;

        debug!("advancing to level {}", level.level);

        profile.advance_to_level(level)?;
        Ok(self.replace_profile(profile).await?)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::BTreeSet};

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::{Equipment, StorageError, TemplateID, Volume};

    #[derive(Default)]
    struct FakeRepository {
        profile: RefCell<Option<Profile>>,
        disconnected: bool,
    }

    impl ProfileRepository for FakeRepository {
        async fn read_profile(&self) -> Result<Profile, ReadError> {
            if self.disconnected {
                return Err(StorageError::NoConnection.into());
            }
            Ok(self.profile.borrow().clone().unwrap_or_default())
        }

        async fn write_profile(&self, profile: Profile) -> Result<Profile, UpdateError> {
            if self.disconnected {
                return Err(StorageError::NoConnection.into());
            }
            *self.profile.borrow_mut() = Some(profile.clone());
            Ok(profile)
        }
    }

    fn request() -> PlanRequest {
        PlanRequest::new(
            "full_body",
            [Equipment::Bodyweight, Equipment::Dumbbell],
            Volume::Standard,
        )
    }

    #[test]
    fn test_get_profile() {
        let service = Service::new(FakeRepository::default());

        assert_eq!(block_on(service.get_profile()).unwrap(), Profile::default());
    }

    #[test]
    fn test_get_profile_no_connection() {
        let service = Service::new(FakeRepository {
            disconnected: true,
            ..FakeRepository::default()
        });

        assert!(matches!(
            block_on(service.get_profile()),
            Err(ReadError::Storage(StorageError::NoConnection))
        ));
        assert!(matches!(
            block_on(service.start_plan(&request(), &mut StdRng::seed_from_u64(0))),
            Err(PlanServiceError::Read(ReadError::Storage(
                StorageError::NoConnection
            )))
        ));
    }

    #[test]
    fn test_start_plan() {
        let service = Service::new(FakeRepository::default());

        let profile =
            block_on(service.start_plan(&request(), &mut StdRng::seed_from_u64(0))).unwrap();

        let plan = profile.active_generated_plan.as_ref().unwrap();
        assert_eq!(plan.template_id, TemplateID::from("full_body"));
        assert_eq!(plan.levels.len(), 1);
        assert_eq!(
            profile.available_equipment,
            BTreeSet::from([Equipment::Bodyweight, Equipment::Dumbbell])
        );
        assert_eq!(profile.current_level_index, 0);
        assert_eq!(profile.completed_workout_count, 0);
        assert_eq!(profile.target_workout_count, 12);
        assert_eq!(service.repository.profile.borrow().as_ref(), Some(&profile));
    }

    #[test]
    fn test_start_plan_template_not_found() {
        let service = Service::new(FakeRepository::default());

        assert!(matches!(
            block_on(service.start_plan(
                &PlanRequest::new("unknown", [Equipment::Bodyweight], Volume::Short),
                &mut StdRng::seed_from_u64(0)
            )),
            Err(PlanServiceError::Generation(
                GenerationError::TemplateNotFound(_)
            ))
        ));
        assert_eq!(*service.repository.profile.borrow(), None);
    }

    #[test]
    fn test_record_completed_workout() {
        let service = Service::new(FakeRepository::default());
        block_on(service.start_plan(&request(), &mut StdRng::seed_from_u64(0))).unwrap();

        block_on(service.record_completed_workout()).unwrap();
        let profile = block_on(service.record_completed_workout()).unwrap();

        assert_eq!(profile.completed_workout_count, 2);
        assert_eq!(
            block_on(service.get_profile())
                .unwrap()
                .completed_workout_count,
            2
        );
    }

    #[test]
    fn test_record_completed_workout_without_plan() {
        let service = Service::new(FakeRepository::default());

        assert!(matches!(
            block_on(service.record_completed_workout()),
            Err(PlanServiceError::NoActivePlan)
        ));
    }

    #[test]
    fn test_advance_level() {
        let service = Service::new(FakeRepository::default());
        let mut rng = StdRng::seed_from_u64(1);
        block_on(service.start_plan(&request(), &mut rng)).unwrap();
        for _ in 0..12 {
            block_on(service.record_completed_workout()).unwrap();
        }
        assert!(block_on(service.get_profile()).unwrap().is_block_complete());

        let profile = block_on(service.advance_level(&mut rng)).unwrap();

        let plan = profile.active_generated_plan.as_ref().unwrap();
        assert_eq!(plan.levels.len(), 2);
        assert_eq!(plan.levels[1].level, 2);
        assert_eq!(plan.levels[1].name, "Custom Level 2");
        assert_eq!(profile.current_level_index, 1);
        assert_eq!(profile.current_level(), Some(&plan.levels[1]));
        assert_eq!(profile.completed_workout_count, 0);
        assert!(!profile.is_block_complete());
        assert_eq!(service.repository.profile.borrow().as_ref(), Some(&profile));

        let profile = block_on(service.advance_level(&mut rng)).unwrap();

        assert_eq!(
            profile
                .active_generated_plan
                .unwrap()
                .levels
                .iter()
                .map(|l| l.level)
                .collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        assert_eq!(profile.current_level_index, 2);
    }

    #[test]
    fn test_advance_level_without_plan() {
        let service = Service::new(FakeRepository::default());

        assert!(matches!(
            block_on(service.advance_level(&mut StdRng::seed_from_u64(0))),
            Err(PlanServiceError::NoActivePlan)
        ));
    }

    #[test]
    fn test_advance_level_inconsistent_plan() {
        let service = Service::new(FakeRepository::default());
        block_on(service.start_plan(&request(), &mut StdRng::seed_from_u64(0))).unwrap();
        let mut profile = block_on(service.get_profile()).unwrap();
        if let Some(plan) = profile.active_generated_plan.as_mut() {
            plan.template_id = TemplateID::from("unknown");
        }
        block_on(service.replace_profile(profile)).unwrap();

        assert!(matches!(
            block_on(service.advance_level(&mut StdRng::seed_from_u64(0))),
            Err(PlanServiceError::Generation(
                GenerationError::TemplateNotFound(_)
            ))
        ));
    }
}
