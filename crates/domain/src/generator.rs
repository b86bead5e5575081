//! Procedural plan generation.
//!
//! Every slot of a workout template is filled with a random exercise that matches the slot's
//! movement pattern and kind and that can be performed with the available equipment. Exercises
//! listed as excluded are avoided as long as another candidate exists.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, warn};
use rand::{Rng, seq::SliceRandom};
use uuid::Builder;

use crate::{
    Equipment, ExerciseCatalog, ExerciseID, GeneratedExercise, GeneratedPlan,
    GeneratedWorkoutDay, GenerationError, PlanID, PlanName, Property, TemplateCatalog,
    TemplateID, TrainingLevel, Volume, WorkoutSkeleton, WorkoutSlot, WorkoutTemplate, catalog,
};

/// Number of sets added to every exercise of a progressed level.
pub const PROGRESSION_SET_INCREMENT: u32 = 1;
/// Number of accessories per workout of a progressed level.
pub const PROGRESSION_ACCESSORY_COUNT: usize = Volume::Standard.accessory_count() + 1;

const PROGRESSION_DESCRIPTION: &str =
    "New exercise variations with one additional set per exercise. Keep up the good work!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanRequest {
    pub template_id: TemplateID,
    pub equipment: BTreeSet<Equipment>,
    pub volume: Volume,
    pub excluded: BTreeSet<ExerciseID>,
    pub name: Option<PlanName>,
}

impl PlanRequest {
    pub fn new(
        template_id: impl Into<TemplateID>,
        equipment: impl IntoIterator<Item = Equipment>,
        volume: Volume,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            equipment: equipment.into_iter().collect(),
            volume,
            excluded: BTreeSet::new(),
            name: None,
        }
    }

    #[must_use]
    pub fn with_excluded(mut self, excluded: impl IntoIterator<Item = ExerciseID>) -> Self {
        self.excluded = excluded.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: PlanName) -> Self {
        self.name = Some(name);
        self
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlanGenerator<'a> {
    exercises: &'a ExerciseCatalog,
    templates: &'a TemplateCatalog,
}

impl Default for PlanGenerator<'static> {
    fn default() -> Self {
        Self::new(catalog::exercises(), catalog::templates())
    }
}

impl<'a> PlanGenerator<'a> {
    #[must_use]
    pub fn new(exercises: &'a ExerciseCatalog, templates: &'a TemplateCatalog) -> Self {
        Self {
            exercises,
            templates,
        }
    }

    #[must_use]
    pub fn exercises(&self) -> &'a ExerciseCatalog {
        self.exercises
    }

    #[must_use]
    pub fn template(&self, id: &str) -> Option<&'a WorkoutTemplate> {
        self.templates.get(id)
    }

    /// Selects a random exercise for the slot.
    ///
    /// Excluded exercises are only chosen if every feasible candidate is excluded. Returns `None`
    /// if no exercise matches the slot with the available equipment.
    pub fn resolve_slot<R: Rng + ?Sized>(
        &self,
        slot: &WorkoutSlot,
        equipment: &BTreeSet<Equipment>,
        excluded: &BTreeSet<ExerciseID>,
        rng: &mut R,
    ) -> Option<ExerciseID> {
        let feasible = self
            .exercises
            .by_movement_pattern(slot.movement_pattern)
            .into_iter()
            .filter(|e| e.kind == slot.kind && e.is_feasible(equipment))
            .collect::<Vec<_>>();
        let preferred = feasible
            .iter()
            .copied()
            .filter(|e| !excluded.contains(e.id))
            .collect::<Vec<_>>();

        let candidates = if preferred.is_empty() {
            if !feasible.is_empty() {
                debug!(
                    "all candidates for slot {} are excluded, repeating an exercise",
                    slot.slot_id
                );
            }
            feasible
        } else {
            preferred
        };

        candidates.choose(rng).map(|e| e.id())
    }

    /// Resolves every slot of the pool and returns a random subset of at most `count` exercises.
    pub fn select_accessories<R: Rng + ?Sized>(
        &self,
        pool: &[WorkoutSlot],
        equipment: &BTreeSet<Equipment>,
        excluded: &BTreeSet<ExerciseID>,
        count: usize,
        rng: &mut R,
    ) -> Vec<GeneratedExercise> {
        let mut resolved = Vec::with_capacity(pool.len());

        for slot in pool {
            match self.resolve_slot(slot, equipment, excluded, &mut *rng) {
                Some(exercise_id) => resolved.push(generated_exercise(slot, exercise_id, 0)),
                None => debug!("no candidate for accessory slot {}", slot.slot_id),
            }
        }

        resolved.shuffle(rng);
        resolved.truncate(count);
        resolved
    }

    pub fn generate_plan<R: Rng + ?Sized>(
        &self,
        request: &PlanRequest,
        rng: &mut R,
    ) -> Result<GeneratedPlan, GenerationError> {
        let template = self
            .template(&request.template_id)
            .ok_or_else(|| GenerationError::TemplateNotFound(request.template_id.clone()))?;
        let accessory_count = request.volume.accessory_count();
        let id = random_plan_id(&mut *rng);
        let days = self.assemble_days(
            template,
            &request.equipment,
            &request.excluded,
            0,
            accessory_count,
            rng,
        );

        Ok(GeneratedPlan {
            id,
            name: request
                .name
                .clone()
                .unwrap_or_else(|| PlanName::for_template(template)),
            description: format!(
                "{} sessions with up to {accessory_count} {} per workout. {}",
                request.volume.name(),
                if accessory_count == 1 {
                    "accessory"
                } else {
                    "accessories"
                },
                template.description
            ),
            image: template.image.to_string(),
            template_id: template.id(),
            levels: vec![TrainingLevel {
                level: 1,
                name: String::from("Level 1"),
                description: template.description.to_string(),
                days,
            }],
        })
    }

    /// Creates the level following the latest level of the plan.
    ///
    /// The plan itself is not modified, appending the returned level is up to the caller.
    pub fn generate_next_level<R: Rng + ?Sized>(
        &self,
        plan: &GeneratedPlan,
        equipment: &BTreeSet<Equipment>,
        previous_level_exercise_ids: &[ExerciseID],
        rng: &mut R,
    ) -> Result<TrainingLevel, GenerationError> {
        let template = self
            .template(&plan.template_id)
            .ok_or_else(|| GenerationError::TemplateNotFound(plan.template_id.clone()))?;
        let excluded = previous_level_exercise_ids
            .iter()
            .cloned()
            .collect::<BTreeSet<_>>();
        let level = plan.next_level_number();

        Ok(TrainingLevel {
            level,
            name: format!("Custom Level {level}"),
            description: PROGRESSION_DESCRIPTION.to_string(),
            days: self.assemble_days(
                template,
                equipment,
                &excluded,
                PROGRESSION_SET_INCREMENT,
                PROGRESSION_ACCESSORY_COUNT,
                rng,
            ),
        })
    }

    fn assemble_days<R: Rng + ?Sized>(
        &self,
        template: &WorkoutTemplate,
        equipment: &BTreeSet<Equipment>,
        excluded: &BTreeSet<ExerciseID>,
        set_increment: u32,
        accessory_count: usize,
        rng: &mut R,
    ) -> BTreeMap<String, GeneratedWorkoutDay> {
        let mut days = BTreeMap::new();

        for skeleton in template.skeletons {
            let mut exercises =
                self.resolve_core(skeleton, equipment, excluded, set_increment, &mut *rng);
            let accessories = self.select_accessories(
                skeleton.accessories,
                equipment,
                excluded,
                accessory_count,
                &mut *rng,
            );
            exercises.extend(accessories.into_iter().map(|mut accessory| {
                accessory.sets += set_increment;
                accessory
            }));
            days.insert(
                skeleton.day.to_string(),
                GeneratedWorkoutDay {
                    name: skeleton.name.to_string(),
                    exercises,
                },
            );
        }

        days
    }

    fn resolve_core<R: Rng + ?Sized>(
        &self,
        skeleton: &WorkoutSkeleton,
        equipment: &BTreeSet<Equipment>,
        excluded: &BTreeSet<ExerciseID>,
        set_increment: u32,
        rng: &mut R,
    ) -> Vec<GeneratedExercise> {
        let mut exercises = Vec::with_capacity(skeleton.core.len());

        for slot in skeleton.core {
            match self.resolve_slot(slot, equipment, excluded, &mut *rng) {
                Some(exercise_id) => {
                    exercises.push(generated_exercise(slot, exercise_id, set_increment));
                }
                None => warn!(
                    "skipping slot {} of {}: no exercise matches the available equipment",
                    slot.slot_id, skeleton.name
                ),
            }
        }

        exercises
    }
}

fn generated_exercise(
    slot: &WorkoutSlot,
    exercise_id: ExerciseID,
    set_increment: u32,
) -> GeneratedExercise {
    GeneratedExercise {
        exercise_id,
        sets: slot.target_sets + set_increment,
        reps: slot.target_reps.to_string(),
        logging_type: slot.logging_type,
    }
}

fn random_plan_id<R: Rng + ?Sized>(rng: &mut R) -> PlanID {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    Builder::from_random_bytes(bytes).into_uuid().into()
}
