use std::collections::BTreeMap;

use log::{debug, warn};

use crate::{
    Difficulty, Equipment, Exercise, ExerciseFilter, ExerciseID, GenderBias, MovementPattern,
    Muscle, Name, Property, Source,
};

/// Compact comparison key: lower-case, alphanumerics only.
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Name without its parenthesized variant annotation.
#[must_use]
pub fn strip_variant(raw: &str) -> &str {
    match raw.find('(') {
        Some(idx) => raw[..idx].trim_end(),
        None => raw.trim_end(),
    }
}

/// Exercise data in the shape of one of the supported input tables.
#[derive(Debug, Clone, PartialEq)]
pub enum RawExerciseInput {
    Table(TableExercise),
    Generated(Exercise),
    ThirdParty(ThirdPartyExercise),
    Csv(CsvExercise),
}

impl RawExerciseInput {
    #[must_use]
    pub fn source(&self) -> Source {
        match self {
            RawExerciseInput::Table(_) => Source::HandAuthored,
            RawExerciseInput::Generated(_) => Source::Generated,
            RawExerciseInput::ThirdParty(_) => Source::ThirdParty,
            RawExerciseInput::Csv(_) => Source::Csv,
        }
    }

    /// Returns `None` if the input has no usable name.
    #[must_use]
    pub fn to_exercise(&self) -> Option<Exercise> {
        match self {
            RawExerciseInput::Table(raw) => from_table(raw),
            RawExerciseInput::Generated(exercise) => Some(exercise.clone()),
            RawExerciseInput::ThirdParty(raw) => from_third_party(raw),
            RawExerciseInput::Csv(raw) => from_csv(raw),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TableExercise {
    pub id: Option<String>,
    pub name: Option<String>,
    pub primary_muscle: Option<String>,
    pub secondary_muscles: Vec<String>,
    pub equipment: Vec<String>,
    pub movement_pattern: Option<String>,
    pub difficulty: Option<u8>,
    pub gender_bias: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ThirdPartyExercise {
    pub id: Option<String>,
    pub name: Option<String>,
    pub level: Option<String>,
    pub equipment: Option<String>,
    pub primary_muscles: Vec<String>,
    pub secondary_muscles: Vec<String>,
    pub images: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct CsvExercise {
    pub name: Option<String>,
    pub muscle: Option<String>,
    pub secondary_muscles: Option<String>,
    pub equipment: Option<String>,
    pub difficulty: Option<String>,
    pub gender: Option<String>,
    pub image: Option<String>,
}

fn from_table(raw: &TableExercise) -> Option<Exercise> {
    let name = parse_name(raw.name.as_deref(), Source::HandAuthored)?;
    let primary_muscle = primary_muscle(raw.primary_muscle.as_deref());

    Some(Exercise {
        id: derive_id(raw.id.as_deref(), &name),
        movement_pattern: raw
            .movement_pattern
            .as_deref()
            .and_then(MovementPattern::parse)
            .unwrap_or_else(|| MovementPattern::infer(name.as_str())),
        secondary_muscles: secondary_muscles(raw.secondary_muscles.iter(), primary_muscle),
        equipment: equipment(raw.equipment.iter()),
        difficulty: raw
            .difficulty
            .and_then(|d| Difficulty::new(d).ok())
            .unwrap_or_default(),
        gender_bias: raw
            .gender_bias
            .as_deref()
            .map(GenderBias::parse)
            .unwrap_or_default(),
        image: non_empty(raw.image.as_deref()),
        source: Source::HandAuthored,
        primary_muscle,
        name,
    })
}

fn from_third_party(raw: &ThirdPartyExercise) -> Option<Exercise> {
    let name = parse_name(raw.name.as_deref(), Source::ThirdParty)?;
    let mut primaries = raw.primary_muscles.iter();
    let primary_muscle = primary_muscle(primaries.next().map(String::as_str));

    Some(Exercise {
        id: derive_id(raw.id.as_deref(), &name),
        movement_pattern: MovementPattern::infer(name.as_str()),
        secondary_muscles: secondary_muscles(
            primaries.chain(raw.secondary_muscles.iter()),
            primary_muscle,
        ),
        equipment: equipment(raw.equipment.iter()),
        difficulty: level_difficulty(raw.level.as_deref()),
        gender_bias: GenderBias::Unisex,
        image: non_empty(raw.images.first().map(String::as_str)),
        source: Source::ThirdParty,
        primary_muscle,
        name,
    })
}

fn from_csv(raw: &CsvExercise) -> Option<Exercise> {
    let name = parse_name(raw.name.as_deref(), Source::Csv)?;
    let primary_muscle = primary_muscle(raw.muscle.as_deref());

    Some(Exercise {
        id: derive_id(None, &name),
        movement_pattern: MovementPattern::infer(name.as_str()),
        secondary_muscles: secondary_muscles(
            split_list(raw.secondary_muscles.as_deref()).iter(),
            primary_muscle,
        ),
        equipment: equipment(split_list(raw.equipment.as_deref()).iter()),
        difficulty: raw
            .difficulty
            .as_deref()
            .and_then(|d| d.trim().parse::<u8>().ok())
            .and_then(|d| Difficulty::new(d).ok())
            .unwrap_or_default(),
        gender_bias: raw
            .gender
            .as_deref()
            .map(GenderBias::parse)
            .unwrap_or_default(),
        image: non_empty(raw.image.as_deref()),
        source: Source::Csv,
        primary_muscle,
        name,
    })
}

fn parse_name(raw: Option<&str>, source: Source) -> Option<Name> {
    match raw.map(Name::new) {
        Some(Ok(name)) => Some(name),
        Some(Err(err)) => {
            warn!("dropped {} exercise: {err}", source.name());
            None
        }
        None => {
            warn!("dropped {} exercise without name", source.name());
            None
        }
    }
}

fn derive_id(raw_id: Option<&str>, name: &Name) -> ExerciseID {
    let id = raw_id
        .map(ExerciseID::derive)
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| ExerciseID::derive(name.as_str()));

    if id.is_empty() {
        ExerciseID::derive("exercise")
    } else {
        id
    }
}

fn primary_muscle(raw: Option<&str>) -> Muscle {
    match raw {
        Some(raw) => Muscle::parse(raw).unwrap_or_else(|| {
            debug!("unknown muscle \"{raw}\"");
            Muscle::FullBody
        }),
        None => Muscle::FullBody,
    }
}

fn secondary_muscles<'a>(raw: impl Iterator<Item = &'a String>, primary: Muscle) -> Vec<Muscle> {
    let mut muscles = vec![];

    for r in raw {
        match Muscle::parse(r) {
            Some(muscle) if muscle != primary && !muscles.contains(&muscle) => {
                muscles.push(muscle);
            }
            Some(_) => {}
            None => debug!("unknown muscle \"{r}\""),
        }
    }

    muscles
}

fn equipment<'a>(raw: impl Iterator<Item = &'a String>) -> Vec<Equipment> {
    let mut equipment = vec![];

    for r in raw {
        match Equipment::parse(r) {
            Some(e) if !equipment.contains(&e) => equipment.push(e),
            Some(_) => {}
            None => debug!("unknown equipment \"{r}\""),
        }
    }

    if equipment.is_empty() {
        equipment.push(Equipment::Bodyweight);
    }

    equipment
}

fn level_difficulty(level: Option<&str>) -> Difficulty {
    let value = match level.map(normalize_name).as_deref() {
        Some("beginner") => 3,
        Some("intermediate") => 5,
        Some("expert" | "advanced") => 8,
        _ => return Difficulty::default(),
    };
    Difficulty::new(value).unwrap_or_default()
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split([';', '|', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Maps every input into an [`Exercise`] and collects them in input order.
///
/// Inputs without a name are dropped. Overlapping records are kept; colliding
/// identifiers get a numeric suffix.
#[must_use]
pub fn build_catalog(sources: &[RawExerciseInput]) -> Catalog {
    let mut catalog = Catalog::default();

    for raw in sources {
        if let Some(exercise) = raw.to_exercise() {
            catalog.push(exercise);
        }
    }

    debug!(
        "built catalog of {} exercises from {} inputs",
        catalog.len(),
        sources.len()
    );

    catalog
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    exercises: Vec<Exercise>,
    index: BTreeMap<ExerciseID, usize>,
}

impl Catalog {
    fn push(&mut self, mut exercise: Exercise) {
        if self.index.contains_key(&exercise.id) {
            let base = exercise.id.clone();
            let mut n = 2;
            while self.index.contains_key(&base.with_suffix(n)) {
                n += 1;
            }
            debug!("renamed duplicate exercise ID {base} to {base}-{n}");
            exercise.id = base.with_suffix(n);
        }
        self.index.insert(exercise.id.clone(), self.exercises.len());
        self.exercises.push(exercise);
    }

    #[must_use]
    pub fn get(&self, id: &ExerciseID) -> Option<&Exercise> {
        self.index.get(id).map(|idx| &self.exercises[*idx])
    }

    #[must_use]
    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Exercise> {
        self.exercises.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    #[must_use]
    pub fn by_muscle(&self, muscle: Muscle) -> Vec<&Exercise> {
        self.iter().filter(|e| e.targets(muscle)).collect()
    }

    #[must_use]
    pub fn by_equipment(&self, equipment: Equipment) -> Vec<&Exercise> {
        self.iter().filter(|e| e.uses(equipment)).collect()
    }

    #[must_use]
    pub fn filter(&self, filter: &ExerciseFilter) -> Vec<&Exercise> {
        filter.exercises(self.iter())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Exercise;
    type IntoIter = std::slice::Iter<'a, Exercise>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Exercise> for Catalog {
    fn from_iter<T: IntoIterator<Item = Exercise>>(iter: T) -> Self {
        let mut catalog = Catalog::default();
        for exercise in iter {
            catalog.push(exercise);
        }
        catalog
    }
}

struct TableRow {
    name: &'static str,
    primary: &'static str,
    secondary: &'static [&'static str],
    equipment: &'static [&'static str],
    difficulty: u8,
    gender: &'static str,
    image: Option<&'static str>,
}

impl From<&TableRow> for TableExercise {
    fn from(value: &TableRow) -> Self {
        TableExercise {
            id: None,
            name: Some(value.name.to_string()),
            primary_muscle: Some(value.primary.to_string()),
            secondary_muscles: value.secondary.iter().map(ToString::to_string).collect(),
            equipment: value.equipment.iter().map(ToString::to_string).collect(),
            movement_pattern: None,
            difficulty: Some(value.difficulty),
            gender_bias: Some(value.gender.to_string()),
            image: value.image.map(str::to_string),
        }
    }
}

/// Built-in hand-authored exercise table.
#[must_use]
pub fn hand_authored() -> Vec<RawExerciseInput> {
    HAND_AUTHORED
        .iter()
        .map(|row| RawExerciseInput::Table(row.into()))
        .collect()
}

const HAND_AUTHORED: [TableRow; 22] = [
    TableRow {
        name: "Cable Kickback",
        primary: "Glutes",
        secondary: &["Hamstrings"],
        equipment: &["Cable"],
        difficulty: 3,
        gender: "female",
        image: Some("images/exercises/cable-kickback.jpg"),
    },
    TableRow {
        name: "Chin Up",
        primary: "Lats",
        secondary: &["Biceps", "Back"],
        equipment: &["Pull Up Bar"],
        difficulty: 6,
        gender: "male",
        image: None,
    },
    TableRow {
        name: "Donkey Kick",
        primary: "Glutes",
        secondary: &["Hamstrings"],
        equipment: &["Bodyweight"],
        difficulty: 2,
        gender: "female",
        image: Some("images/exercises/donkey-kick.jpg"),
    },
    TableRow {
        name: "Face Pull",
        primary: "Shoulders",
        secondary: &["Traps", "Back"],
        equipment: &["Cable"],
        difficulty: 3,
        gender: "unisex",
        image: None,
    },
    TableRow {
        name: "Farmer's Carry",
        primary: "Forearms",
        secondary: &["Traps", "Abs"],
        equipment: &["Dumbbell", "Kettlebell"],
        difficulty: 4,
        gender: "unisex",
        image: None,
    },
    TableRow {
        name: "Fire Hydrant",
        primary: "Abductors",
        secondary: &["Glutes"],
        equipment: &["Bodyweight"],
        difficulty: 2,
        gender: "female",
        image: None,
    },
    TableRow {
        name: "Glute Bridge",
        primary: "Glutes",
        secondary: &["Hamstrings", "Lower Back"],
        equipment: &["Bodyweight"],
        difficulty: 2,
        gender: "female",
        image: Some("images/exercises/glute-bridge.jpg"),
    },
    TableRow {
        name: "Hanging Leg Raise",
        primary: "Abs",
        secondary: &["Obliques", "Forearms"],
        equipment: &["Pull Up Bar"],
        difficulty: 6,
        gender: "unisex",
        image: None,
    },
    TableRow {
        name: "Hip Abduction Machine",
        primary: "Abductors",
        secondary: &["Glutes"],
        equipment: &["Machine"],
        difficulty: 2,
        gender: "female",
        image: None,
    },
    TableRow {
        name: "Hip Thrust",
        primary: "Glutes",
        secondary: &["Hamstrings", "Quadriceps"],
        equipment: &["Barbell"],
        difficulty: 5,
        gender: "female",
        image: Some("images/exercises/hip-thrust.jpg"),
    },
    TableRow {
        name: "Kettlebell Swing",
        primary: "Glutes",
        secondary: &["Hamstrings", "Lower Back", "Shoulders"],
        equipment: &["Kettlebell"],
        difficulty: 5,
        gender: "unisex",
        image: None,
    },
    TableRow {
        name: "Lateral Raise",
        primary: "Shoulders",
        secondary: &["Traps"],
        equipment: &["Dumbbell"],
        difficulty: 3,
        gender: "unisex",
        image: Some("images/exercises/lateral-raise.jpg"),
    },
    TableRow {
        name: "Mountain Climber",
        primary: "Full Body",
        secondary: &["Abs", "Shoulders"],
        equipment: &["Bodyweight"],
        difficulty: 3,
        gender: "unisex",
        image: None,
    },
    TableRow {
        name: "Parallel Bar Dip",
        primary: "Triceps",
        secondary: &["Chest", "Shoulders"],
        equipment: &["Bodyweight"],
        difficulty: 6,
        gender: "male",
        image: None,
    },
    TableRow {
        name: "Plank",
        primary: "Abs",
        secondary: &["Obliques", "Shoulders"],
        equipment: &["Bodyweight"],
        difficulty: 2,
        gender: "unisex",
        image: Some("images/exercises/plank.jpg"),
    },
    TableRow {
        name: "Pull Up",
        primary: "Lats",
        secondary: &["Biceps", "Back"],
        equipment: &["Pull Up Bar"],
        difficulty: 7,
        gender: "male",
        image: Some("images/exercises/pull-up.jpg"),
    },
    TableRow {
        name: "Push Up",
        primary: "Chest",
        secondary: &["Triceps", "Shoulders"],
        equipment: &["Bodyweight"],
        difficulty: 3,
        gender: "unisex",
        image: Some("images/exercises/push-up.jpg"),
    },
    TableRow {
        name: "Russian Twist",
        primary: "Obliques",
        secondary: &["Abs"],
        equipment: &["Bodyweight"],
        difficulty: 3,
        gender: "unisex",
        image: None,
    },
    TableRow {
        name: "Standing Calf Raise",
        primary: "Calves",
        secondary: &[],
        equipment: &["Machine", "Bodyweight"],
        difficulty: 2,
        gender: "unisex",
        image: None,
    },
    TableRow {
        name: "Sumo Squat",
        primary: "Adductors",
        secondary: &["Glutes", "Quadriceps"],
        equipment: &["Kettlebell", "Dumbbell"],
        difficulty: 3,
        gender: "female",
        image: None,
    },
    TableRow {
        name: "Walking Lunge",
        primary: "Quadriceps",
        secondary: &["Glutes", "Hamstrings"],
        equipment: &["Bodyweight", "Dumbbell"],
        difficulty: 4,
        gender: "unisex",
        image: Some("images/exercises/walking-lunge.jpg"),
    },
    TableRow {
        name: "Weighted Decline Sit Up",
        primary: "Abs",
        secondary: &["Obliques"],
        equipment: &["Dumbbell"],
        difficulty: 5,
        gender: "male",
        image: None,
    },
];
