use std::{collections::HashSet, slice::Iter};

use log::{debug, warn};

use crate::{
    Difficulty, Equipment, Exercise, ExerciseID, GenderBias, MovementPattern, Muscle, Name,
    Property, Source,
};

/// Seed template expanded into one exercise per equipment and variant.
#[derive(Debug, Clone, PartialEq)]
pub struct BaseMovement {
    pub name: String,
    pub pattern: MovementPattern,
    pub primary_muscle: Muscle,
    pub secondary_muscles: Vec<Muscle>,
    pub valid_equipment: Vec<Equipment>,
    pub base_difficulty: u8,
    pub gender_bias: GenderBias,
    pub capabilities: Vec<Capability>,
}

impl BaseMovement {
    /// Capabilities are inferred from the name until set explicitly.
    #[must_use]
    pub fn new(
        name: &str,
        pattern: MovementPattern,
        primary_muscle: Muscle,
        valid_equipment: Vec<Equipment>,
    ) -> Self {
        Self {
            name: name.to_string(),
            pattern,
            primary_muscle,
            secondary_muscles: vec![],
            valid_equipment,
            base_difficulty: Difficulty::default().value(),
            gender_bias: GenderBias::Unisex,
            capabilities: Capability::infer(name),
        }
    }

    #[must_use]
    pub fn with_secondary_muscles(mut self, muscles: Vec<Muscle>) -> Self {
        self.secondary_muscles = muscles;
        self
    }

    #[must_use]
    pub fn with_capabilities(mut self, capabilities: Vec<Capability>) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use]
    pub fn with_base_difficulty(mut self, base_difficulty: u8) -> Self {
        self.base_difficulty = base_difficulty;
        self
    }

    #[must_use]
    pub fn with_gender_bias(mut self, gender_bias: GenderBias) -> Self {
        self.gender_bias = gender_bias;
        self
    }

    /// Variants generated for the given equipment, starting with the standard one.
    #[must_use]
    pub fn variants(&self, equipment: Equipment) -> Vec<Variant> {
        let mut variants = vec![Variant::Standard];
        for capability in &self.capabilities {
            for variant in capability.variants() {
                if !variants.contains(variant) {
                    variants.push(*variant);
                }
            }
        }
        for variant in equipment_variants(equipment) {
            if !variants.contains(variant) {
                variants.push(*variant);
            }
        }
        variants
    }

    fn exercise(&self, name: Name, equipment: Equipment, variant: Variant) -> Exercise {
        Exercise {
            id: ExerciseID::derive(name.as_str()),
            name,
            primary_muscle: self.primary_muscle,
            secondary_muscles: self.secondary_muscles.clone(),
            equipment: vec![equipment],
            movement_pattern: self.pattern,
            difficulty: Difficulty::from_modifiers(
                self.base_difficulty,
                equipment.difficulty_modifier(),
                variant.difficulty_modifier(),
            ),
            gender_bias: self.gender_bias,
            image: None,
            source: Source::Generated,
        }
    }
}

/// Explicit eligibility of a base movement for a group of variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Capability {
    Grip,
    Stance,
    CurlStyle,
}

impl Capability {
    #[must_use]
    pub fn variants(self) -> &'static [Variant] {
        match self {
            Capability::Grip => &[Variant::WideGrip, Variant::CloseGrip],
            Capability::Stance => &[Variant::SumoStance, Variant::Pause],
            Capability::CurlStyle => &[Variant::Hammer, Variant::Preacher],
        }
    }

    /// Capabilities implied by keywords in a movement name.
    #[must_use]
    pub fn infer(name: &str) -> Vec<Capability> {
        let name = name.to_lowercase();
        let mut capabilities = vec![];
        if name.contains("press") || name.contains("row") {
            capabilities.push(Capability::Grip);
        }
        if name.contains("squat") || name.contains("deadlift") {
            capabilities.push(Capability::Stance);
        }
        if name.contains("curl") {
            capabilities.push(Capability::CurlStyle);
        }
        capabilities
    }
}

fn equipment_variants(equipment: Equipment) -> &'static [Variant] {
    match equipment {
        Equipment::Dumbbell => &[Variant::Unilateral, Variant::Alternating],
        _ => &[],
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Variant {
    Standard,
    WideGrip,
    CloseGrip,
    SumoStance,
    Pause,
    Unilateral,
    Alternating,
    Hammer,
    Preacher,
}

impl Property for Variant {
    fn iter() -> Iter<'static, Variant> {
        static VARIANTS: [Variant; 9] = [
            Variant::Standard,
            Variant::WideGrip,
            Variant::CloseGrip,
            Variant::SumoStance,
            Variant::Pause,
            Variant::Unilateral,
            Variant::Alternating,
            Variant::Hammer,
            Variant::Preacher,
        ];
        VARIANTS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Variant::Standard => "Standard",
            Variant::WideGrip => "Wide Grip",
            Variant::CloseGrip => "Close Grip",
            Variant::SumoStance => "Sumo Stance",
            Variant::Pause => "Pause",
            Variant::Unilateral => "Unilateral",
            Variant::Alternating => "Alternating",
            Variant::Hammer => "Hammer",
            Variant::Preacher => "Preacher",
        }
    }
}

impl Variant {
    #[must_use]
    pub fn difficulty_modifier(self) -> i8 {
        match self {
            Variant::Standard | Variant::SumoStance | Variant::Hammer => 0,
            Variant::WideGrip | Variant::CloseGrip | Variant::Alternating | Variant::Preacher => 1,
            Variant::Pause | Variant::Unilateral => 2,
        }
    }

    #[must_use]
    pub fn display_name(self, equipment: Equipment, movement: &str) -> String {
        match self {
            Variant::Standard => format!("{} {movement}", equipment.name()),
            _ => format!("{} {movement} ({})", equipment.name(), self.name()),
        }
    }
}

/// Expands every base movement over its equipment and variants.
///
/// The output order follows the input order, then equipment order, then
/// variant order. Repeated identifiers keep their first occurrence.
#[must_use]
pub fn expand_exercises(movements: &[BaseMovement]) -> Vec<Exercise> {
    let mut ids = HashSet::new();
    let mut exercises = vec![];

    for movement in movements {
        let movement_name = movement.name.trim();
        if movement_name.is_empty() {
            warn!("skipped base movement without name");
            continue;
        }

        for equipment in &movement.valid_equipment {
            for variant in movement.variants(*equipment) {
                let name = match Name::new(&variant.display_name(*equipment, movement_name)) {
                    Ok(name) => name,
                    Err(err) => {
                        warn!("skipped {movement_name} variant: {err}");
                        continue;
                    }
                };
                let exercise = movement.exercise(name, *equipment, variant);
                if ids.insert(exercise.id.clone()) {
                    exercises.push(exercise);
                } else {
                    debug!("skipped duplicate generated exercise {}", exercise.id);
                }
            }
        }
    }

    exercises
}

struct MovementRow {
    name: &'static str,
    pattern: MovementPattern,
    primary: Muscle,
    secondary: &'static [Muscle],
    equipment: &'static [Equipment],
    difficulty: u8,
    gender_bias: GenderBias,
    capabilities: &'static [Capability],
}

impl From<&MovementRow> for BaseMovement {
    fn from(value: &MovementRow) -> Self {
        BaseMovement::new(
            value.name,
            value.pattern,
            value.primary,
            value.equipment.to_vec(),
        )
        .with_secondary_muscles(value.secondary.to_vec())
        .with_capabilities(value.capabilities.to_vec())
        .with_base_difficulty(value.difficulty)
        .with_gender_bias(value.gender_bias)
    }
}

/// Built-in seed set of base movements.
#[must_use]
pub fn base_movements() -> Vec<BaseMovement> {
    BASE_MOVEMENTS.iter().map(BaseMovement::from).collect()
}

const BASE_MOVEMENTS: [MovementRow; 20] = [
    MovementRow {
        name: "Bench Press",
        pattern: MovementPattern::PushHorizontal,
        primary: Muscle::Chest,
        secondary: &[Muscle::Triceps, Muscle::Shoulders],
        equipment: &[
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::SmithMachine,
        ],
        difficulty: 5,
        gender_bias: GenderBias::Male,
        capabilities: &[Capability::Grip],
    },
    MovementRow {
        name: "Biceps Curl",
        pattern: MovementPattern::Isolation,
        primary: Muscle::Biceps,
        secondary: &[Muscle::Forearms],
        equipment: &[
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Cable,
            Equipment::ResistanceBand,
        ],
        difficulty: 2,
        gender_bias: GenderBias::Unisex,
        capabilities: &[Capability::CurlStyle],
    },
    MovementRow {
        name: "Bulgarian Split Squat",
        pattern: MovementPattern::Lunge,
        primary: Muscle::Quadriceps,
        secondary: &[Muscle::Glutes, Muscle::Hamstrings],
        equipment: &[Equipment::Dumbbell, Equipment::Barbell, Equipment::SmithMachine],
        difficulty: 6,
        gender_bias: GenderBias::Female,
        capabilities: &[],
    },
    MovementRow {
        name: "Calf Raise",
        pattern: MovementPattern::Isolation,
        primary: Muscle::Calves,
        secondary: &[],
        equipment: &[Equipment::Machine, Equipment::Dumbbell, Equipment::SmithMachine],
        difficulty: 2,
        gender_bias: GenderBias::Unisex,
        capabilities: &[],
    },
    MovementRow {
        name: "Chest Fly",
        pattern: MovementPattern::Isolation,
        primary: Muscle::Chest,
        secondary: &[Muscle::Shoulders],
        equipment: &[Equipment::Dumbbell, Equipment::Cable, Equipment::Machine],
        difficulty: 3,
        gender_bias: GenderBias::Unisex,
        capabilities: &[],
    },
    MovementRow {
        name: "Crunch",
        pattern: MovementPattern::Isolation,
        primary: Muscle::Abs,
        secondary: &[Muscle::Obliques],
        equipment: &[Equipment::Bodyweight, Equipment::Cable, Equipment::Machine],
        difficulty: 2,
        gender_bias: GenderBias::Unisex,
        capabilities: &[],
    },
    MovementRow {
        name: "Deadlift",
        pattern: MovementPattern::Hinge,
        primary: Muscle::Hamstrings,
        secondary: &[Muscle::Glutes, Muscle::LowerBack, Muscle::Traps],
        equipment: &[
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::TrapBar,
            Equipment::Kettlebell,
        ],
        difficulty: 6,
        gender_bias: GenderBias::Unisex,
        capabilities: &[Capability::Stance],
    },
    MovementRow {
        name: "Farmer's Carry",
        pattern: MovementPattern::Carry,
        primary: Muscle::Forearms,
        secondary: &[Muscle::Traps, Muscle::Abs],
        equipment: &[Equipment::Dumbbell, Equipment::Kettlebell, Equipment::TrapBar],
        difficulty: 4,
        gender_bias: GenderBias::Unisex,
        capabilities: &[],
    },
    MovementRow {
        name: "Glute Kickback",
        pattern: MovementPattern::Isolation,
        primary: Muscle::Glutes,
        secondary: &[Muscle::Hamstrings],
        equipment: &[Equipment::Cable, Equipment::ResistanceBand, Equipment::Machine],
        difficulty: 2,
        gender_bias: GenderBias::Female,
        capabilities: &[],
    },
    MovementRow {
        name: "Good Morning",
        pattern: MovementPattern::Hinge,
        primary: Muscle::Hamstrings,
        secondary: &[Muscle::LowerBack, Muscle::Glutes],
        equipment: &[Equipment::Barbell, Equipment::ResistanceBand],
        difficulty: 5,
        gender_bias: GenderBias::Unisex,
        capabilities: &[],
    },
    MovementRow {
        name: "Hip Abduction",
        pattern: MovementPattern::Isolation,
        primary: Muscle::Abductors,
        secondary: &[Muscle::Glutes],
        equipment: &[Equipment::Machine, Equipment::Cable, Equipment::ResistanceBand],
        difficulty: 2,
        gender_bias: GenderBias::Female,
        capabilities: &[],
    },
    MovementRow {
        name: "Hip Thrust",
        pattern: MovementPattern::Hinge,
        primary: Muscle::Glutes,
        secondary: &[Muscle::Hamstrings],
        equipment: &[Equipment::Barbell, Equipment::Machine, Equipment::SmithMachine],
        difficulty: 4,
        gender_bias: GenderBias::Female,
        capabilities: &[],
    },
    MovementRow {
        name: "Lat Pulldown",
        pattern: MovementPattern::PullVertical,
        primary: Muscle::Lats,
        secondary: &[Muscle::Biceps, Muscle::Back],
        equipment: &[Equipment::Cable, Equipment::Machine, Equipment::ResistanceBand],
        difficulty: 3,
        gender_bias: GenderBias::Unisex,
        capabilities: &[Capability::Grip],
    },
    MovementRow {
        name: "Lateral Raise",
        pattern: MovementPattern::Isolation,
        primary: Muscle::Shoulders,
        secondary: &[Muscle::Traps],
        equipment: &[Equipment::Dumbbell, Equipment::Cable, Equipment::ResistanceBand],
        difficulty: 2,
        gender_bias: GenderBias::Unisex,
        capabilities: &[],
    },
    MovementRow {
        name: "Lunge",
        pattern: MovementPattern::Lunge,
        primary: Muscle::Quadriceps,
        secondary: &[Muscle::Glutes, Muscle::Hamstrings],
        equipment: &[Equipment::Bodyweight, Equipment::Dumbbell, Equipment::Barbell],
        difficulty: 4,
        gender_bias: GenderBias::Unisex,
        capabilities: &[],
    },
    MovementRow {
        name: "Overhead Press",
        pattern: MovementPattern::PushVertical,
        primary: Muscle::Shoulders,
        secondary: &[Muscle::Triceps, Muscle::Traps],
        equipment: &[Equipment::Barbell, Equipment::Dumbbell, Equipment::Kettlebell],
        difficulty: 5,
        gender_bias: GenderBias::Unisex,
        capabilities: &[Capability::Grip],
    },
    MovementRow {
        name: "Romanian Deadlift",
        pattern: MovementPattern::Hinge,
        primary: Muscle::Hamstrings,
        secondary: &[Muscle::Glutes, Muscle::LowerBack],
        equipment: &[Equipment::Barbell, Equipment::Dumbbell, Equipment::Kettlebell],
        difficulty: 5,
        gender_bias: GenderBias::Female,
        capabilities: &[],
    },
    MovementRow {
        name: "Row",
        pattern: MovementPattern::PullHorizontal,
        primary: Muscle::Back,
        secondary: &[Muscle::Lats, Muscle::Biceps],
        equipment: &[
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Cable,
            Equipment::Machine,
        ],
        difficulty: 4,
        gender_bias: GenderBias::Unisex,
        capabilities: &[Capability::Grip],
    },
    MovementRow {
        name: "Squat",
        pattern: MovementPattern::Squat,
        primary: Muscle::Quadriceps,
        secondary: &[Muscle::Glutes, Muscle::Hamstrings],
        equipment: &[
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::SmithMachine,
        ],
        difficulty: 5,
        gender_bias: GenderBias::Unisex,
        capabilities: &[Capability::Stance],
    },
    MovementRow {
        name: "Triceps Extension",
        pattern: MovementPattern::Isolation,
        primary: Muscle::Triceps,
        secondary: &[],
        equipment: &[Equipment::Dumbbell, Equipment::Cable],
        difficulty: 2,
        gender_bias: GenderBias::Unisex,
        capabilities: &[],
    },
];
