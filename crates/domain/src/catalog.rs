//! Built-in exercise and template catalogs.
//!
//! Both tables are constructed once on first access and never modified afterwards.

use crate::{
    Equipment, ExerciseCatalog, ExerciseDefinition, ExerciseKind, LoggingType, MovementPattern,
    Muscle, TemplateCatalog, WorkoutSkeleton, WorkoutSlot, WorkoutTemplate,
};

use ExerciseKind::{Compound, Isolation};
use LoggingType::{RepsOnly, RepsOnlyWithOptionalWeight, Timed, WeightReps};
use MovementPattern as P;

#[must_use]
pub fn exercises() -> &'static ExerciseCatalog {
    &EXERCISES
}

#[must_use]
pub fn templates() -> &'static TemplateCatalog {
    &TEMPLATES
}

struct BaseExercise {
    id: &'static str,
    name: &'static str,
    primary_muscle: Muscle,
    secondary_muscles: &'static [Muscle],
    equipment: &'static [Equipment],
    movement_pattern: MovementPattern,
    kind: ExerciseKind,
    description: &'static str,
    variants: &'static [ExerciseVariant],
}

#[cfg_attr(test, derive(Debug, PartialEq))]
struct ExerciseVariant {
    id: &'static str,
    name: &'static str,
    primary_muscle: Option<Muscle>,
    secondary_muscles: Option<&'static [Muscle]>,
    equipment: Option<&'static [Equipment]>,
    kind: Option<ExerciseKind>,
    description: Option<&'static str>,
}

impl ExerciseVariant {
    const fn default() -> Self {
        Self {
            id: "",
            name: "",
            primary_muscle: None,
            secondary_muscles: None,
            equipment: None,
            kind: None,
            description: None,
        }
    }
}

impl BaseExercise {
    fn family(&self) -> Vec<&'static str> {
        std::iter::once(self.id)
            .chain(self.variants.iter().map(|v| v.id))
            .collect()
    }

    fn definitions(&self) -> Vec<ExerciseDefinition> {
        let family = self.family();
        let alternatives = |id: &'static str| {
            family
                .iter()
                .copied()
                .filter(|f| *f != id)
                .collect::<Vec<_>>()
        };
        std::iter::once(ExerciseDefinition {
            id: self.id,
            name: self.name,
            primary_muscle: self.primary_muscle,
            secondary_muscles: self.secondary_muscles,
            equipment: self.equipment,
            movement_pattern: self.movement_pattern,
            kind: self.kind,
            alternatives: alternatives(self.id),
            description: self.description,
        })
        .chain(self.variants.iter().map(|v| ExerciseDefinition {
            id: v.id,
            name: v.name,
            primary_muscle: v.primary_muscle.unwrap_or(self.primary_muscle),
            secondary_muscles: v.secondary_muscles.unwrap_or(self.secondary_muscles),
            equipment: v.equipment.unwrap_or(self.equipment),
            movement_pattern: self.movement_pattern,
            kind: v.kind.unwrap_or(self.kind),
            alternatives: alternatives(v.id),
            description: v.description.unwrap_or(self.description),
        }))
        .collect()
    }
}

static EXERCISES: std::sync::LazyLock<ExerciseCatalog> = std::sync::LazyLock::new(|| {
    ExerciseCatalog::new(
        EXERCISE_VARIANTS
            .iter()
            .flat_map(BaseExercise::definitions),
    )
});

static TEMPLATES: std::sync::LazyLock<TemplateCatalog> =
    std::sync::LazyLock::new(|| TemplateCatalog::new(TEMPLATE_LIST.iter().cloned()));

const EXERCISE_VARIANTS: [BaseExercise; 30] = [
    BaseExercise {
        id: "band_pull_apart",
        name: "Band Pull Apart",
        primary_muscle: Muscle::RearDelts,
        secondary_muscles: &[Muscle::Traps],
        equipment: &[Equipment::ResistanceBand],
        movement_pattern: MovementPattern::RearDelt,
        kind: ExerciseKind::Isolation,
        description: "Keep the arms straight and pull the band to the chest by squeezing the shoulder blades.",
        variants: &[
            ExerciseVariant {
                id: "face_pull",
                name: "Face Pull",
                equipment: Some(&[Equipment::Cable]),
                description: Some("Pull the rope towards the forehead with the elbows high."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "prone_y_raise",
                name: "Prone Y Raise",
                equipment: Some(&[Equipment::Bodyweight]),
                description: Some("Lie face down and raise the arms into a Y without shrugging."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "reverse_dumbbell_fly",
                name: "Reverse Dumbbell Fly",
                equipment: Some(&[Equipment::Dumbbell]),
                description: Some("Hinge forward and open the arms out to the sides."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "barbell_back_squat",
        name: "Barbell Back Squat",
        primary_muscle: Muscle::Quads,
        secondary_muscles: &[Muscle::Glutes, Muscle::Adductors, Muscle::ErectorSpinae],
        equipment: &[Equipment::Barbell],
        movement_pattern: MovementPattern::Squat,
        kind: ExerciseKind::Compound,
        description: "Brace the trunk and sit down between the hips until the thighs are at least parallel.",
        variants: &[
            ExerciseVariant {
                id: "barbell_front_squat",
                name: "Barbell Front Squat",
                description: Some("Keep the elbows high and the torso upright."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "dumbbell_goblet_squat",
                name: "Dumbbell Goblet Squat",
                equipment: Some(&[Equipment::Dumbbell]),
                description: Some("Hold one dumbbell at the chest and squat between the knees."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "kettlebell_goblet_squat",
                name: "Kettlebell Goblet Squat",
                equipment: Some(&[Equipment::Kettlebell]),
                description: Some("Hold the kettlebell by the horns and squat between the knees."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "leg_press",
                name: "Leg Press",
                equipment: Some(&[Equipment::Machine]),
                secondary_muscles: Some(&[Muscle::Glutes, Muscle::Adductors]),
                description: Some("Lower the sled under control without letting the lower back round."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "barbell_bench_press",
        name: "Barbell Bench Press",
        primary_muscle: Muscle::Pecs,
        secondary_muscles: &[Muscle::FrontDelts, Muscle::Triceps],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        movement_pattern: MovementPattern::HorizontalPress,
        kind: ExerciseKind::Compound,
        description: "Lower the bar to the lower chest with the shoulder blades pinched together.",
        variants: &[
            ExerciseVariant {
                id: "dumbbell_bench_press",
                name: "Dumbbell Bench Press",
                equipment: Some(&[Equipment::Dumbbell, Equipment::Bench]),
                description: Some("Lower the dumbbells to chest level and press them back together."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "dumbbell_floor_press",
                name: "Dumbbell Floor Press",
                equipment: Some(&[Equipment::Dumbbell]),
                description: Some("Press from the floor and pause when the upper arms touch the ground."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "machine_chest_press",
                name: "Machine Chest Press",
                equipment: Some(&[Equipment::Machine]),
                description: Some("Set the handles at mid-chest height."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "barbell_curl",
        name: "Barbell Curl",
        primary_muscle: Muscle::Biceps,
        secondary_muscles: &[Muscle::Forearms],
        equipment: &[Equipment::Barbell],
        movement_pattern: MovementPattern::ElbowFlexion,
        kind: ExerciseKind::Isolation,
        description: "Curl the bar without swinging the torso.",
        variants: &[
            ExerciseVariant {
                id: "band_curl",
                name: "Band Curl",
                equipment: Some(&[Equipment::ResistanceBand]),
                description: Some("Stand on the band and curl with the elbows pinned to the sides."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "cable_curl",
                name: "Cable Curl",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "dumbbell_curl",
                name: "Dumbbell Curl",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "dumbbell_hammer_curl",
                name: "Dumbbell Hammer Curl",
                equipment: Some(&[Equipment::Dumbbell]),
                description: Some("Curl with the palms facing each other."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "barbell_deadlift",
        name: "Barbell Deadlift",
        primary_muscle: Muscle::Hamstrings,
        secondary_muscles: &[Muscle::Glutes, Muscle::ErectorSpinae, Muscle::Traps],
        equipment: &[Equipment::Barbell],
        movement_pattern: MovementPattern::Hinge,
        kind: ExerciseKind::Compound,
        description: "Push the floor away and keep the bar close to the legs.",
        variants: &[
            ExerciseVariant {
                id: "barbell_romanian_deadlift",
                name: "Barbell Romanian Deadlift",
                description: Some("Push the hips back with soft knees until the hamstrings are stretched."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "dumbbell_romanian_deadlift",
                name: "Dumbbell Romanian Deadlift",
                equipment: Some(&[Equipment::Dumbbell]),
                description: Some("Push the hips back with soft knees until the hamstrings are stretched."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "kettlebell_swing",
                name: "Kettlebell Swing",
                equipment: Some(&[Equipment::Kettlebell]),
                primary_muscle: Some(Muscle::Glutes),
                secondary_muscles: Some(&[Muscle::Hamstrings, Muscle::ErectorSpinae]),
                description: Some("Snap the hips forward and let the bell float to chest height."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "barbell_overhead_press",
        name: "Barbell Overhead Press",
        primary_muscle: Muscle::FrontDelts,
        secondary_muscles: &[Muscle::SideDelts, Muscle::Triceps],
        equipment: &[Equipment::Barbell],
        movement_pattern: MovementPattern::VerticalPress,
        kind: ExerciseKind::Compound,
        description: "Squeeze the glutes and press the bar in a straight line over the mid-foot.",
        variants: &[
            ExerciseVariant {
                id: "band_overhead_press",
                name: "Band Overhead Press",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "dumbbell_shoulder_press",
                name: "Dumbbell Shoulder Press",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "kettlebell_press",
                name: "Kettlebell Press",
                equipment: Some(&[Equipment::Kettlebell]),
                description: Some("Press one bell at a time from the rack position."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "machine_shoulder_press",
                name: "Machine Shoulder Press",
                equipment: Some(&[Equipment::Machine]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "barbell_row",
        name: "Barbell Row",
        primary_muscle: Muscle::Lats,
        secondary_muscles: &[Muscle::Traps, Muscle::RearDelts, Muscle::Biceps],
        equipment: &[Equipment::Barbell],
        movement_pattern: MovementPattern::HorizontalPull,
        kind: ExerciseKind::Compound,
        description: "Hinge to roughly 45 degrees and row the bar to the lower ribs.",
        variants: &[
            ExerciseVariant {
                id: "band_row",
                name: "Band Row",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "machine_row",
                name: "Machine Row",
                equipment: Some(&[Equipment::Machine]),
                description: Some("Keep the chest on the pad and drive the elbows back."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "one_arm_dumbbell_row",
                name: "One-Arm Dumbbell Row",
                equipment: Some(&[Equipment::Dumbbell, Equipment::Bench]),
                description: Some("Support one hand and knee on the bench and row to the hip."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "seated_cable_row",
                name: "Seated Cable Row",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "bench_dip",
        name: "Bench Dip",
        primary_muscle: Muscle::Triceps,
        secondary_muscles: &[Muscle::FrontDelts],
        equipment: &[Equipment::Bench],
        movement_pattern: MovementPattern::ElbowExtension,
        kind: ExerciseKind::Isolation,
        description: "Keep the hips close to the bench and bend the elbows to 90 degrees.",
        variants: &[],
    },
    BaseExercise {
        id: "bodyweight_squat",
        name: "Bodyweight Squat",
        primary_muscle: Muscle::Quads,
        secondary_muscles: &[Muscle::Glutes, Muscle::Adductors],
        equipment: &[Equipment::Bodyweight],
        movement_pattern: MovementPattern::Squat,
        kind: ExerciseKind::Compound,
        description: "Sit down between the hips with the heels planted.",
        variants: &[
            ExerciseVariant {
                id: "jump_squat",
                name: "Jump Squat",
                description: Some("Land softly and go straight into the next repetition."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "tempo_squat",
                name: "Tempo Squat",
                description: Some("Take three seconds on the way down and pause at the bottom."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "cable_crunch",
        name: "Cable Crunch",
        primary_muscle: Muscle::Abs,
        secondary_muscles: &[],
        equipment: &[Equipment::Cable],
        movement_pattern: MovementPattern::Core,
        kind: ExerciseKind::Isolation,
        description: "Kneel and curl the ribs towards the hips.",
        variants: &[],
    },
    BaseExercise {
        id: "chin_up",
        name: "Chin Up",
        primary_muscle: Muscle::Lats,
        secondary_muscles: &[Muscle::Biceps, Muscle::RearDelts],
        equipment: &[Equipment::PullUpBar],
        movement_pattern: MovementPattern::VerticalPull,
        kind: ExerciseKind::Compound,
        description: "Pull with the palms facing you until the chin clears the bar.",
        variants: &[
            ExerciseVariant {
                id: "band_assisted_pull_up",
                name: "Band Assisted Pull Up",
                equipment: Some(&[Equipment::PullUpBar, Equipment::ResistanceBand]),
                description: Some("Loop a band over the bar and place a knee or foot in it."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "pull_up",
                name: "Pull Up",
                description: Some("Pull with the palms facing away until the chin clears the bar."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "dead_bug",
        name: "Dead Bug",
        primary_muscle: Muscle::Abs,
        secondary_muscles: &[],
        equipment: &[Equipment::Bodyweight],
        movement_pattern: MovementPattern::Core,
        kind: ExerciseKind::Isolation,
        description: "Press the lower back into the floor while extending opposite arm and leg.",
        variants: &[],
    },
    BaseExercise {
        id: "dumbbell_fly",
        name: "Dumbbell Fly",
        primary_muscle: Muscle::Pecs,
        secondary_muscles: &[Muscle::FrontDelts],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        movement_pattern: MovementPattern::ChestFly,
        kind: ExerciseKind::Isolation,
        description: "Open the arms in a wide arc with a slight bend in the elbows.",
        variants: &[
            ExerciseVariant {
                id: "band_chest_fly",
                name: "Band Chest Fly",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "cable_fly",
                name: "Cable Fly",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "machine_fly",
                name: "Machine Fly",
                equipment: Some(&[Equipment::Machine]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "dumbbell_lateral_raise",
        name: "Dumbbell Lateral Raise",
        primary_muscle: Muscle::SideDelts,
        secondary_muscles: &[Muscle::Traps],
        equipment: &[Equipment::Dumbbell],
        movement_pattern: MovementPattern::LateralRaise,
        kind: ExerciseKind::Isolation,
        description: "Raise the arms to shoulder height leading with the elbows.",
        variants: &[
            ExerciseVariant {
                id: "band_lateral_raise",
                name: "Band Lateral Raise",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "cable_lateral_raise",
                name: "Cable Lateral Raise",
                equipment: Some(&[Equipment::Cable]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "farmers_carry",
        name: "Farmer's Carry",
        primary_muscle: Muscle::Forearms,
        secondary_muscles: &[Muscle::Traps, Muscle::Obliques],
        equipment: &[Equipment::Dumbbell],
        movement_pattern: MovementPattern::Core,
        kind: ExerciseKind::Compound,
        description: "Walk tall with heavy weights in both hands.",
        variants: &[ExerciseVariant {
            id: "kettlebell_suitcase_carry",
            name: "Kettlebell Suitcase Carry",
            equipment: Some(&[Equipment::Kettlebell]),
            description: Some("Carry one bell on one side without leaning."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "glute_bridge",
        name: "Glute Bridge",
        primary_muscle: Muscle::Glutes,
        secondary_muscles: &[Muscle::Hamstrings],
        equipment: &[Equipment::Bodyweight],
        movement_pattern: MovementPattern::Hinge,
        kind: ExerciseKind::Compound,
        description: "Drive through the heels and lock out the hips without arching the lower back.",
        variants: &[
            ExerciseVariant {
                id: "barbell_hip_thrust",
                name: "Barbell Hip Thrust",
                equipment: Some(&[Equipment::Barbell, Equipment::Bench]),
                description: Some("Rest the upper back on the bench and pause at the top."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "single_leg_glute_bridge",
                name: "Single Leg Glute Bridge",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "hanging_knee_raise",
        name: "Hanging Knee Raise",
        primary_muscle: Muscle::Abs,
        secondary_muscles: &[Muscle::Forearms],
        equipment: &[Equipment::PullUpBar],
        movement_pattern: MovementPattern::Core,
        kind: ExerciseKind::Isolation,
        description: "Curl the pelvis up instead of only lifting the knees.",
        variants: &[],
    },
    BaseExercise {
        id: "inverted_row",
        name: "Inverted Row",
        primary_muscle: Muscle::Lats,
        secondary_muscles: &[Muscle::Traps, Muscle::RearDelts, Muscle::Biceps],
        equipment: &[Equipment::Bodyweight],
        movement_pattern: MovementPattern::HorizontalPull,
        kind: ExerciseKind::Compound,
        description: "Hang under a sturdy table or low bar and pull the chest up to it.",
        variants: &[],
    },
    BaseExercise {
        id: "lat_pulldown",
        name: "Lat Pulldown",
        primary_muscle: Muscle::Lats,
        secondary_muscles: &[Muscle::Biceps, Muscle::RearDelts],
        equipment: &[Equipment::Cable],
        movement_pattern: MovementPattern::VerticalPull,
        kind: ExerciseKind::Compound,
        description: "Pull the bar to the upper chest and control it on the way up.",
        variants: &[ExerciseVariant {
            id: "band_lat_pulldown",
            name: "Band Lat Pulldown",
            equipment: Some(&[Equipment::ResistanceBand]),
            description: Some("Anchor the band overhead and pull the elbows down to the ribs."),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "leg_extension",
        name: "Leg Extension",
        primary_muscle: Muscle::Quads,
        secondary_muscles: &[],
        equipment: &[Equipment::Machine],
        movement_pattern: MovementPattern::KneeExtension,
        kind: ExerciseKind::Isolation,
        description: "Pause briefly with the knees fully extended.",
        variants: &[ExerciseVariant {
            id: "band_leg_extension",
            name: "Band Leg Extension",
            equipment: Some(&[Equipment::ResistanceBand]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "lying_leg_curl",
        name: "Lying Leg Curl",
        primary_muscle: Muscle::Hamstrings,
        secondary_muscles: &[Muscle::Calves],
        equipment: &[Equipment::Machine],
        movement_pattern: MovementPattern::KneeFlexion,
        kind: ExerciseKind::Isolation,
        description: "Keep the hips pressed into the pad.",
        variants: &[
            ExerciseVariant {
                id: "band_leg_curl",
                name: "Band Leg Curl",
                equipment: Some(&[Equipment::ResistanceBand]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "nordic_curl",
                name: "Nordic Curl",
                equipment: Some(&[Equipment::Bodyweight]),
                description: Some("Anchor the heels and lower the torso as slowly as possible."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "overhead_dumbbell_triceps_extension",
        name: "Overhead Dumbbell Triceps Extension",
        primary_muscle: Muscle::Triceps,
        secondary_muscles: &[],
        equipment: &[Equipment::Dumbbell],
        movement_pattern: MovementPattern::ElbowExtension,
        kind: ExerciseKind::Isolation,
        description: "Lower the dumbbell behind the head with the elbows pointing up.",
        variants: &[
            ExerciseVariant {
                id: "band_triceps_pushdown",
                name: "Band Triceps Pushdown",
                equipment: Some(&[Equipment::ResistanceBand]),
                description: Some("Keep the elbows at the sides and fully extend the arms."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "cable_triceps_pushdown",
                name: "Cable Triceps Pushdown",
                equipment: Some(&[Equipment::Cable]),
                description: Some("Keep the elbows at the sides and fully extend the arms."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "pallof_press",
        name: "Pallof Press",
        primary_muscle: Muscle::Obliques,
        secondary_muscles: &[Muscle::Abs],
        equipment: &[Equipment::ResistanceBand],
        movement_pattern: MovementPattern::Core,
        kind: ExerciseKind::Isolation,
        description: "Press the band straight out and resist the rotation.",
        variants: &[ExerciseVariant {
            id: "cable_pallof_press",
            name: "Cable Pallof Press",
            equipment: Some(&[Equipment::Cable]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "parallel_bar_dip",
        name: "Parallel Bar Dip",
        primary_muscle: Muscle::Pecs,
        secondary_muscles: &[Muscle::Triceps, Muscle::FrontDelts],
        equipment: &[Equipment::ParallelBars],
        movement_pattern: MovementPattern::HorizontalPress,
        kind: ExerciseKind::Compound,
        description: "Lean slightly forward and lower until the shoulders are below the elbows.",
        variants: &[],
    },
    BaseExercise {
        id: "pike_push_up",
        name: "Pike Push Up",
        primary_muscle: Muscle::FrontDelts,
        secondary_muscles: &[Muscle::Triceps, Muscle::SideDelts],
        equipment: &[Equipment::Bodyweight],
        movement_pattern: MovementPattern::VerticalPress,
        kind: ExerciseKind::Compound,
        description: "Keep the hips high and lower the head in front of the hands.",
        variants: &[],
    },
    BaseExercise {
        id: "plank",
        name: "Plank",
        primary_muscle: Muscle::Abs,
        secondary_muscles: &[Muscle::Obliques],
        equipment: &[Equipment::Bodyweight],
        movement_pattern: MovementPattern::Core,
        kind: ExerciseKind::Isolation,
        description: "Hold a straight line from head to heels with the glutes squeezed.",
        variants: &[ExerciseVariant {
            id: "side_plank",
            name: "Side Plank",
            primary_muscle: Some(Muscle::Obliques),
            secondary_muscles: Some(&[Muscle::Abs]),
            ..ExerciseVariant::default()
        }],
    },
    BaseExercise {
        id: "push_up",
        name: "Push Up",
        primary_muscle: Muscle::Pecs,
        secondary_muscles: &[Muscle::FrontDelts, Muscle::Triceps],
        equipment: &[Equipment::Bodyweight],
        movement_pattern: MovementPattern::HorizontalPress,
        kind: ExerciseKind::Compound,
        description: "Keep the body rigid and touch the chest to the floor.",
        variants: &[
            ExerciseVariant {
                id: "decline_push_up",
                name: "Decline Push Up",
                description: Some("Elevate the feet to shift the load towards the upper chest."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "incline_push_up",
                name: "Incline Push Up",
                description: Some("Place the hands on a raised surface to reduce the load."),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "reverse_lunge",
        name: "Reverse Lunge",
        primary_muscle: Muscle::Quads,
        secondary_muscles: &[Muscle::Glutes, Muscle::Adductors],
        equipment: &[Equipment::Bodyweight],
        movement_pattern: MovementPattern::Lunge,
        kind: ExerciseKind::Compound,
        description: "Step back and lower the rear knee towards the floor.",
        variants: &[
            ExerciseVariant {
                id: "bulgarian_split_squat",
                name: "Bulgarian Split Squat",
                equipment: Some(&[Equipment::Bench]),
                description: Some("Rest the rear foot on the bench and drop straight down."),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "dumbbell_reverse_lunge",
                name: "Dumbbell Reverse Lunge",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "walking_lunge",
                name: "Walking Lunge",
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "standing_calf_raise",
        name: "Standing Calf Raise",
        primary_muscle: Muscle::Calves,
        secondary_muscles: &[],
        equipment: &[Equipment::Bodyweight],
        movement_pattern: MovementPattern::CalfRaise,
        kind: ExerciseKind::Isolation,
        description: "Pause at the top and lower the heels below the step.",
        variants: &[
            ExerciseVariant {
                id: "dumbbell_calf_raise",
                name: "Dumbbell Calf Raise",
                equipment: Some(&[Equipment::Dumbbell]),
                ..ExerciseVariant::default()
            },
            ExerciseVariant {
                id: "machine_calf_raise",
                name: "Machine Calf Raise",
                equipment: Some(&[Equipment::Machine]),
                ..ExerciseVariant::default()
            },
        ],
    },
    BaseExercise {
        id: "step_up",
        name: "Step Up",
        primary_muscle: Muscle::Quads,
        secondary_muscles: &[Muscle::Glutes, Muscle::Hamstrings],
        equipment: &[Equipment::Box],
        movement_pattern: MovementPattern::Lunge,
        kind: ExerciseKind::Compound,
        description: "Drive through the front foot without pushing off the back leg.",
        variants: &[ExerciseVariant {
            id: "dumbbell_step_up",
            name: "Dumbbell Step Up",
            equipment: Some(&[Equipment::Box, Equipment::Dumbbell]),
            ..ExerciseVariant::default()
        }],
    },
];

const fn slot(
    slot_id: &'static str,
    movement_pattern: MovementPattern,
    kind: ExerciseKind,
    target_sets: u32,
    target_reps: &'static str,
    logging_type: LoggingType,
) -> WorkoutSlot {
    WorkoutSlot {
        slot_id,
        movement_pattern,
        kind,
        target_sets,
        target_reps,
        logging_type,
    }
}

const TEMPLATE_LIST: [WorkoutTemplate; 4] = [
    WorkoutTemplate {
        id: "full_body",
        name: "Full Body",
        description: "Two alternating full body sessions covering every major movement pattern.",
        days_per_week: 3,
        image: "images/templates/full_body.webp",
        skeletons: &[
            WorkoutSkeleton {
                day: "day_1",
                name: "Full Body A",
                core: &[
                    slot("squat", P::Squat, Compound, 3, "6-10", WeightReps),
                    slot("press", P::HorizontalPress, Compound, 3, "6-10", WeightReps),
                    slot("row", P::HorizontalPull, Compound, 3, "8-12", WeightReps),
                ],
                accessories: &[
                    slot("lateral_raise", P::LateralRaise, Isolation, 2, "12-15", WeightReps),
                    slot("curl", P::ElbowFlexion, Isolation, 2, "10-15", WeightReps),
                    slot("core", P::Core, Isolation, 2, "45-60s", Timed),
                    slot("calves", P::CalfRaise, Isolation, 2, "12-20", RepsOnlyWithOptionalWeight),
                    slot("triceps", P::ElbowExtension, Isolation, 2, "10-15", WeightReps),
                ],
            },
            WorkoutSkeleton {
                day: "day_2",
                name: "Full Body B",
                core: &[
                    slot("hinge", P::Hinge, Compound, 3, "6-10", WeightReps),
                    slot("overhead_press", P::VerticalPress, Compound, 3, "6-10", WeightReps),
                    slot("pull", P::VerticalPull, Compound, 3, "AMRAP", RepsOnlyWithOptionalWeight),
                ],
                accessories: &[
                    slot("lunge", P::Lunge, Compound, 2, "8-12", RepsOnlyWithOptionalWeight),
                    slot("rear_delt", P::RearDelt, Isolation, 2, "15-20", RepsOnly),
                    slot("hamstrings", P::KneeFlexion, Isolation, 2, "10-15", WeightReps),
                    slot("core", P::Core, Isolation, 2, "10-15", RepsOnly),
                    slot("chest_fly", P::ChestFly, Isolation, 2, "12-15", WeightReps),
                ],
            },
        ],
    },
    WorkoutTemplate {
        id: "upper_lower",
        name: "Upper / Lower",
        description: "Four sessions per week alternating between upper and lower body.",
        days_per_week: 4,
        image: "images/templates/upper_lower.webp",
        skeletons: &[
            WorkoutSkeleton {
                day: "day_1",
                name: "Upper A",
                core: &[
                    slot("press", P::HorizontalPress, Compound, 4, "5-8", WeightReps),
                    slot("row", P::HorizontalPull, Compound, 4, "6-10", WeightReps),
                    slot("overhead_press", P::VerticalPress, Compound, 3, "8-12", WeightReps),
                ],
                accessories: &[
                    slot("lateral_raise", P::LateralRaise, Isolation, 3, "12-15", WeightReps),
                    slot("curl", P::ElbowFlexion, Isolation, 3, "10-12", WeightReps),
                    slot("triceps", P::ElbowExtension, Isolation, 3, "10-12", WeightReps),
                    slot("rear_delt", P::RearDelt, Isolation, 2, "15-20", WeightReps),
                ],
            },
            WorkoutSkeleton {
                day: "day_2",
                name: "Lower A",
                core: &[
                    slot("squat", P::Squat, Compound, 4, "5-8", WeightReps),
                    slot("hinge", P::Hinge, Compound, 3, "8-10", WeightReps),
                ],
                accessories: &[
                    slot("lunge", P::Lunge, Compound, 3, "8-12", RepsOnlyWithOptionalWeight),
                    slot("quads", P::KneeExtension, Isolation, 3, "12-15", WeightReps),
                    slot("calves", P::CalfRaise, Isolation, 3, "12-20", RepsOnlyWithOptionalWeight),
                    slot("core", P::Core, Isolation, 3, "30-45s", Timed),
                ],
            },
            WorkoutSkeleton {
                day: "day_3",
                name: "Upper B",
                core: &[
                    slot("pull", P::VerticalPull, Compound, 4, "6-10", RepsOnlyWithOptionalWeight),
                    slot("press", P::HorizontalPress, Compound, 3, "8-12", WeightReps),
                    slot("row", P::HorizontalPull, Compound, 3, "10-12", WeightReps),
                ],
                accessories: &[
                    slot("chest_fly", P::ChestFly, Isolation, 3, "12-15", WeightReps),
                    slot("curl", P::ElbowFlexion, Isolation, 3, "12-15", WeightReps),
                    slot("triceps", P::ElbowExtension, Isolation, 3, "12-15", WeightReps),
                    slot("carry", P::Core, Compound, 3, "30-40s", Timed),
                ],
            },
            WorkoutSkeleton {
                day: "day_4",
                name: "Lower B",
                core: &[
                    slot("hinge", P::Hinge, Compound, 4, "5-8", WeightReps),
                    slot("squat", P::Squat, Compound, 3, "10-12", WeightReps),
                ],
                accessories: &[
                    slot("hamstrings", P::KneeFlexion, Isolation, 3, "10-12", WeightReps),
                    slot("lunge", P::Lunge, Compound, 3, "10-12", RepsOnlyWithOptionalWeight),
                    slot("calves", P::CalfRaise, Isolation, 3, "15-20", RepsOnlyWithOptionalWeight),
                    slot("core", P::Core, Isolation, 3, "10-15", RepsOnly),
                ],
            },
        ],
    },
    WorkoutTemplate {
        id: "push_pull_legs",
        name: "Push / Pull / Legs",
        description: "Each session focuses on pushing, pulling or leg movements.",
        days_per_week: 3,
        image: "images/templates/push_pull_legs.webp",
        skeletons: &[
            WorkoutSkeleton {
                day: "day_1",
                name: "Push",
                core: &[
                    slot("press", P::HorizontalPress, Compound, 4, "6-10", WeightReps),
                    slot("overhead_press", P::VerticalPress, Compound, 3, "8-12", WeightReps),
                ],
                accessories: &[
                    slot("chest_fly", P::ChestFly, Isolation, 3, "12-15", WeightReps),
                    slot("lateral_raise", P::LateralRaise, Isolation, 3, "12-20", WeightReps),
                    slot("triceps", P::ElbowExtension, Isolation, 3, "10-15", WeightReps),
                ],
            },
            WorkoutSkeleton {
                day: "day_2",
                name: "Pull",
                core: &[
                    slot("pull", P::VerticalPull, Compound, 4, "6-10", RepsOnlyWithOptionalWeight),
                    slot("row", P::HorizontalPull, Compound, 3, "8-12", WeightReps),
                ],
                accessories: &[
                    slot("rear_delt", P::RearDelt, Isolation, 3, "15-20", WeightReps),
                    slot("curl", P::ElbowFlexion, Isolation, 3, "10-15", WeightReps),
                    slot("core", P::Core, Isolation, 3, "10-15", RepsOnly),
                ],
            },
            WorkoutSkeleton {
                day: "day_3",
                name: "Legs",
                core: &[
                    slot("squat", P::Squat, Compound, 4, "6-10", WeightReps),
                    slot("hinge", P::Hinge, Compound, 3, "8-10", WeightReps),
                ],
                accessories: &[
                    slot("lunge", P::Lunge, Compound, 3, "10-12", RepsOnlyWithOptionalWeight),
                    slot("quads", P::KneeExtension, Isolation, 3, "12-15", WeightReps),
                    slot("hamstrings", P::KneeFlexion, Isolation, 3, "10-15", WeightReps),
                    slot("calves", P::CalfRaise, Isolation, 3, "12-20", RepsOnlyWithOptionalWeight),
                ],
            },
        ],
    },
    WorkoutTemplate {
        id: "bodyweight",
        name: "Bodyweight Anywhere",
        description: "Full body sessions that need nothing but the floor and a sturdy table.",
        days_per_week: 3,
        image: "images/templates/bodyweight.webp",
        skeletons: &[WorkoutSkeleton {
            day: "day_1",
            name: "Full Body",
            core: &[
                slot("squat", P::Squat, Compound, 3, "15-20", RepsOnly),
                slot("press", P::HorizontalPress, Compound, 3, "AMRAP", RepsOnly),
                slot("row", P::HorizontalPull, Compound, 3, "8-15", RepsOnly),
                slot("overhead_press", P::VerticalPress, Compound, 3, "6-12", RepsOnly),
            ],
            accessories: &[
                slot("lunge", P::Lunge, Compound, 2, "10-15", RepsOnly),
                slot("hinge", P::Hinge, Compound, 2, "12-20", RepsOnly),
                slot("core", P::Core, Isolation, 2, "45-60s", Timed),
                slot("calves", P::CalfRaise, Isolation, 2, "15-25", RepsOnly),
                slot("rear_delt", P::RearDelt, Isolation, 2, "12-15", RepsOnly),
            ],
        }],
    },
];
