use std::{
    borrow::Borrow,
    collections::{BTreeMap, BTreeSet},
    slice::Iter,
};

use derive_more::{Deref, Display};
use strum::{AsRefStr, EnumString};

use crate::Property;

#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Borrow<str> for ExerciseID {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Catalog entry describing a single exercise.
///
/// The equipment list states what is *required*: an exercise is only feasible if every listed
/// tag is available. Bodyweight exercises require exactly [`Equipment::Bodyweight`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub primary_muscle: Muscle,
    pub secondary_muscles: &'static [Muscle],
    pub equipment: &'static [Equipment],
    pub movement_pattern: MovementPattern,
    pub kind: ExerciseKind,
    pub alternatives: Vec<&'static str>,
    pub description: &'static str,
}

impl ExerciseDefinition {
    #[must_use]
    pub fn id(&self) -> ExerciseID {
        ExerciseID::from(self.id)
    }

    #[must_use]
    pub fn is_feasible(&self, available_equipment: &BTreeSet<Equipment>) -> bool {
        self.equipment
            .iter()
            .all(|equipment| available_equipment.contains(equipment))
    }
}

/// Read-only lookup table of exercise definitions, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: BTreeMap<&'static str, ExerciseDefinition>,
}

impl ExerciseCatalog {
    pub fn new(exercises: impl IntoIterator<Item = ExerciseDefinition>) -> Self {
        Self {
            exercises: exercises.into_iter().map(|e| (e.id, e)).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ExerciseDefinition> {
        self.exercises.get(id)
    }

    #[must_use]
    pub fn by_movement_pattern(&self, pattern: MovementPattern) -> Vec<&ExerciseDefinition> {
        self.exercises
            .values()
            .filter(|e| e.movement_pattern == pattern)
            .collect()
    }

    #[must_use]
    pub fn all_equipment_tags(&self) -> BTreeSet<Equipment> {
        self.exercises
            .values()
            .flat_map(|e| e.equipment.iter().copied())
            .collect()
    }

    /// Unknown alternative ids are skipped.
    #[must_use]
    pub fn alternatives(&self, id: &str) -> Vec<&ExerciseDefinition> {
        self.get(id)
            .map(|exercise| {
                exercise
                    .alternatives
                    .iter()
                    .filter_map(|alternative| self.get(alternative))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExerciseDefinition> {
        self.exercises.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "snake_case")]
pub enum Muscle {
    Neck,
    Pecs,
    Traps,
    Lats,
    FrontDelts,
    SideDelts,
    RearDelts,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    Obliques,
    ErectorSpinae,
    Glutes,
    Quads,
    Hamstrings,
    Adductors,
    Calves,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 18] = [
            Muscle::Neck,
            Muscle::Pecs,
            Muscle::Traps,
            Muscle::Lats,
            Muscle::FrontDelts,
            Muscle::SideDelts,
            Muscle::RearDelts,
            Muscle::Biceps,
            Muscle::Triceps,
            Muscle::Forearms,
            Muscle::Abs,
            Muscle::Obliques,
            Muscle::ErectorSpinae,
            Muscle::Glutes,
            Muscle::Quads,
            Muscle::Hamstrings,
            Muscle::Adductors,
            Muscle::Calves,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Neck => "Neck",
            Muscle::Pecs => "Pecs",
            Muscle::Traps => "Traps",
            Muscle::Lats => "Lats",
            Muscle::FrontDelts => "Front Delts",
            Muscle::SideDelts => "Side Delts",
            Muscle::RearDelts => "Rear Delts",
            Muscle::Biceps => "Biceps",
            Muscle::Triceps => "Triceps",
            Muscle::Forearms => "Forearms",
            Muscle::Abs => "Abs",
            Muscle::Obliques => "Obliques",
            Muscle::ErectorSpinae => "Erector Spinae",
            Muscle::Glutes => "Glutes",
            Muscle::Quads => "Quads",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Adductors => "Adductors",
            Muscle::Calves => "Calves",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    Bodyweight,
    Barbell,
    Bench,
    Box,
    Cable,
    Dumbbell,
    Kettlebell,
    Machine,
    ParallelBars,
    PullUpBar,
    ResistanceBand,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 11] = [
            Equipment::Bodyweight,
            Equipment::Barbell,
            Equipment::Bench,
            Equipment::Box,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::ParallelBars,
            Equipment::PullUpBar,
            Equipment::ResistanceBand,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Barbell => "Barbell",
            Equipment::Bench => "Bench",
            Equipment::Box => "Box",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::ParallelBars => "Parallel Bars",
            Equipment::PullUpBar => "Pull Up Bar",
            Equipment::ResistanceBand => "Resistance Band",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "snake_case")]
pub enum MovementPattern {
    HorizontalPress,
    VerticalPress,
    HorizontalPull,
    VerticalPull,
    Squat,
    Hinge,
    Lunge,
    Core,
    ChestFly,
    LateralRaise,
    RearDelt,
    ElbowFlexion,
    ElbowExtension,
    KneeExtension,
    KneeFlexion,
    CalfRaise,
}

impl Property for MovementPattern {
    fn iter() -> Iter<'static, MovementPattern> {
        static MOVEMENT_PATTERNS: [MovementPattern; 16] = [
            MovementPattern::HorizontalPress,
            MovementPattern::VerticalPress,
            MovementPattern::HorizontalPull,
            MovementPattern::VerticalPull,
            MovementPattern::Squat,
            MovementPattern::Hinge,
            MovementPattern::Lunge,
            MovementPattern::Core,
            MovementPattern::ChestFly,
            MovementPattern::LateralRaise,
            MovementPattern::RearDelt,
            MovementPattern::ElbowFlexion,
            MovementPattern::ElbowExtension,
            MovementPattern::KneeExtension,
            MovementPattern::KneeFlexion,
            MovementPattern::CalfRaise,
        ];
        MOVEMENT_PATTERNS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MovementPattern::HorizontalPress => "Horizontal Press",
            MovementPattern::VerticalPress => "Vertical Press",
            MovementPattern::HorizontalPull => "Horizontal Pull",
            MovementPattern::VerticalPull => "Vertical Pull",
            MovementPattern::Squat => "Squat",
            MovementPattern::Hinge => "Hinge",
            MovementPattern::Lunge => "Lunge",
            MovementPattern::Core => "Core",
            MovementPattern::ChestFly => "Chest Fly",
            MovementPattern::LateralRaise => "Lateral Raise",
            MovementPattern::RearDelt => "Rear Delt",
            MovementPattern::ElbowFlexion => "Elbow Flexion",
            MovementPattern::ElbowExtension => "Elbow Extension",
            MovementPattern::KneeExtension => "Knee Extension",
            MovementPattern::KneeFlexion => "Knee Flexion",
            MovementPattern::CalfRaise => "Calf Raise",
        }
    }
}

#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[strum(serialize_all = "snake_case")]
pub enum ExerciseKind {
    Compound,
    Isolation,
}

impl Property for ExerciseKind {
    fn iter() -> Iter<'static, ExerciseKind> {
        static EXERCISE_KINDS: [ExerciseKind; 2] = [ExerciseKind::Compound, ExerciseKind::Isolation];
        EXERCISE_KINDS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            ExerciseKind::Compound => "Compound",
            ExerciseKind::Isolation => "Isolation",
        }
    }
}

/// Determines which values are recorded for each set of an exercise.
#[derive(AsRefStr, EnumString, Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case")]
pub enum LoggingType {
    WeightReps,
    RepsOnly,
    RepsOnlyWithOptionalWeight,
    Timed,
}
