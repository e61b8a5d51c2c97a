use std::{collections::HashSet, slice::Iter};

use derive_more::{AsRef, Deref, Display};

use crate::{Name, normalize_name};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    pub primary_muscle: Muscle,
    pub secondary_muscles: Vec<Muscle>,
    pub equipment: Vec<Equipment>,
    pub movement_pattern: MovementPattern,
    pub difficulty: Difficulty,
    pub gender_bias: GenderBias,
    pub image: Option<String>,
    pub source: Source,
}

impl Exercise {
    pub fn muscles(&self) -> impl Iterator<Item = Muscle> + '_ {
        std::iter::once(self.primary_muscle).chain(self.secondary_muscles.iter().copied())
    }

    #[must_use]
    pub fn targets(&self, muscle: Muscle) -> bool {
        self.muscles().any(|m| m == muscle)
    }

    #[must_use]
    pub fn uses(&self, equipment: Equipment) -> bool {
        self.equipment.contains(&equipment)
    }
}

/// Stable identifier of a catalog record.
///
/// Identifiers are lowercase slugs, so the same input text always yields the
/// same identifier.
#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(String);

impl ExerciseID {
    #[must_use]
    pub fn derive(text: &str) -> Self {
        Self(slugify(text))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub(crate) fn with_suffix(&self, n: usize) -> Self {
        Self(format!("{}-{n}", self.0))
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self::derive(value)
    }
}

pub(crate) fn slugify(text: &str) -> String {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Default for Difficulty {
    fn default() -> Self {
        Self(5)
    }
}

impl Difficulty {
    pub const MIN: Difficulty = Difficulty(1);
    pub const MAX: Difficulty = Difficulty(10);

    pub fn new(value: u8) -> Result<Self, DifficultyError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(DifficultyError::OutOfRange(value));
        }

        Ok(Self(value))
    }

    /// Sum of a base value and its modifiers, clamped to 1..=10.
    #[must_use]
    pub fn from_modifiers(base: u8, equipment: i8, variant: i8) -> Self {
        let raw = i16::from(base) + i16::from(equipment) + i16::from(variant);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(raw.clamp(i16::from(Self::MIN.0), i16::from(Self::MAX.0)) as u8)
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DifficultyError {
    #[error("Difficulty must be in the range 1 to 10 ({0})")]
    OutOfRange(u8),
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Muscle {
    Chest,
    Back,
    Lats,
    Traps,
    Shoulders,
    Biceps,
    Triceps,
    Forearms,
    Abs,
    Obliques,
    LowerBack,
    Glutes,
    Quadriceps,
    Hamstrings,
    Adductors,
    Abductors,
    Calves,
    FullBody,
}

impl Property for Muscle {
    fn iter() -> Iter<'static, Muscle> {
        static MUSCLES: [Muscle; 18] = [
            Muscle::Chest,
            Muscle::Back,
            Muscle::Lats,
            Muscle::Traps,
            Muscle::Shoulders,
            Muscle::Biceps,
            Muscle::Triceps,
            Muscle::Forearms,
            Muscle::Abs,
            Muscle::Obliques,
            Muscle::LowerBack,
            Muscle::Glutes,
            Muscle::Quadriceps,
            Muscle::Hamstrings,
            Muscle::Adductors,
            Muscle::Abductors,
            Muscle::Calves,
            Muscle::FullBody,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Muscle::Chest => "Chest",
            Muscle::Back => "Back",
            Muscle::Lats => "Lats",
            Muscle::Traps => "Traps",
            Muscle::Shoulders => "Shoulders",
            Muscle::Biceps => "Biceps",
            Muscle::Triceps => "Triceps",
            Muscle::Forearms => "Forearms",
            Muscle::Abs => "Abs",
            Muscle::Obliques => "Obliques",
            Muscle::LowerBack => "Lower Back",
            Muscle::Glutes => "Glutes",
            Muscle::Quadriceps => "Quadriceps",
            Muscle::Hamstrings => "Hamstrings",
            Muscle::Adductors => "Adductors",
            Muscle::Abductors => "Abductors",
            Muscle::Calves => "Calves",
            Muscle::FullBody => "Full Body",
        }
    }
}

impl Muscle {
    /// Accepts display names and the aliases used by external catalogs.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Muscle> {
        let key = normalize_name(raw);

        if key.is_empty() {
            return None;
        }

        if let Some(muscle) = Muscle::iter().find(|m| normalize_name(m.name()) == key) {
            return Some(*muscle);
        }

        match key.as_str() {
            "pecs" | "pectorals" | "pectoralis" => Some(Muscle::Chest),
            "middleback" | "upperback" => Some(Muscle::Back),
            "lat" | "latissimusdorsi" => Some(Muscle::Lats),
            "trap" | "trapezius" => Some(Muscle::Traps),
            "shoulder" | "delts" | "deltoids" => Some(Muscle::Shoulders),
            "bicep" => Some(Muscle::Biceps),
            "tricep" => Some(Muscle::Triceps),
            "forearm" => Some(Muscle::Forearms),
            "abdominals" | "core" => Some(Muscle::Abs),
            "oblique" => Some(Muscle::Obliques),
            "erectorspinae" => Some(Muscle::LowerBack),
            "glute" | "gluteus" | "buttocks" => Some(Muscle::Glutes),
            "quads" | "quad" => Some(Muscle::Quadriceps),
            "hamstring" => Some(Muscle::Hamstrings),
            "adductor" | "innerthighs" => Some(Muscle::Adductors),
            "abductor" | "outerthighs" => Some(Muscle::Abductors),
            "calf" => Some(Muscle::Calves),
            "totalbody" | "wholebody" => Some(Muscle::FullBody),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    Barbell,
    Bodyweight,
    Cable,
    Dumbbell,
    Kettlebell,
    Machine,
    ResistanceBand,
    SmithMachine,
    TrapBar,
    PullUpBar,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 10] = [
            Equipment::Barbell,
            Equipment::Bodyweight,
            Equipment::Cable,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::Machine,
            Equipment::ResistanceBand,
            Equipment::SmithMachine,
            Equipment::TrapBar,
            Equipment::PullUpBar,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::Barbell => "Barbell",
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Cable => "Cable",
            Equipment::Dumbbell => "Dumbbell",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Machine => "Machine",
            Equipment::ResistanceBand => "Resistance Band",
            Equipment::SmithMachine => "Smith Machine",
            Equipment::TrapBar => "Trap Bar",
            Equipment::PullUpBar => "Pull Up Bar",
        }
    }
}

impl Equipment {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Equipment> {
        let key = normalize_name(raw);

        if key.is_empty() {
            return None;
        }

        if let Some(equipment) = Equipment::iter().find(|e| normalize_name(e.name()) == key) {
            return Some(*equipment);
        }

        match key.as_str() {
            "barbells" | "ezbar" | "ezcurlbar" => Some(Equipment::Barbell),
            "bodyonly" | "body" | "none" | "noequipment" => Some(Equipment::Bodyweight),
            "cables" => Some(Equipment::Cable),
            "dumbbells" => Some(Equipment::Dumbbell),
            "kettlebells" => Some(Equipment::Kettlebell),
            "machines" | "leveragemachine" => Some(Equipment::Machine),
            "band" | "bands" | "resistancebands" => Some(Equipment::ResistanceBand),
            "smith" => Some(Equipment::SmithMachine),
            "hexbar" => Some(Equipment::TrapBar),
            "pullupbars" | "chinupbar" => Some(Equipment::PullUpBar),
            _ => None,
        }
    }

    #[must_use]
    pub fn difficulty_modifier(self) -> i8 {
        match self {
            Equipment::Barbell | Equipment::PullUpBar => 2,
            Equipment::Dumbbell | Equipment::Kettlebell | Equipment::TrapBar => 1,
            Equipment::Bodyweight | Equipment::Cable | Equipment::SmithMachine => 0,
            Equipment::Machine | Equipment::ResistanceBand => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MovementPattern {
    Squat,
    Hinge,
    Lunge,
    PushHorizontal,
    PushVertical,
    PullHorizontal,
    PullVertical,
    Isolation,
    Carry,
}

impl Property for MovementPattern {
    fn iter() -> Iter<'static, MovementPattern> {
        static PATTERNS: [MovementPattern; 9] = [
            MovementPattern::Squat,
            MovementPattern::Hinge,
            MovementPattern::Lunge,
            MovementPattern::PushHorizontal,
            MovementPattern::PushVertical,
            MovementPattern::PullHorizontal,
            MovementPattern::PullVertical,
            MovementPattern::Isolation,
            MovementPattern::Carry,
        ];
        PATTERNS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MovementPattern::Squat => "Squat",
            MovementPattern::Hinge => "Hinge",
            MovementPattern::Lunge => "Lunge",
            MovementPattern::PushHorizontal => "Horizontal Push",
            MovementPattern::PushVertical => "Vertical Push",
            MovementPattern::PullHorizontal => "Horizontal Pull",
            MovementPattern::PullVertical => "Vertical Pull",
            MovementPattern::Isolation => "Isolation",
            MovementPattern::Carry => "Carry",
        }
    }
}

impl MovementPattern {
    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            MovementPattern::Squat => "squat",
            MovementPattern::Hinge => "hinge",
            MovementPattern::Lunge => "lunge",
            MovementPattern::PushHorizontal => "push-horizontal",
            MovementPattern::PushVertical => "push-vertical",
            MovementPattern::PullHorizontal => "pull-horizontal",
            MovementPattern::PullVertical => "pull-vertical",
            MovementPattern::Isolation => "isolation",
            MovementPattern::Carry => "carry",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<MovementPattern> {
        let key = normalize_name(raw);
        MovementPattern::iter()
            .find(|p| normalize_name(p.tag()) == key || normalize_name(p.name()) == key)
            .copied()
    }

    /// Derives a pattern from keywords in an exercise name.
    #[must_use]
    pub fn infer(name: &str) -> MovementPattern {
        let words = format!(" {} ", slugify(name).replace('-', " "));
        let has = |keywords: &[&str]| {
            keywords.iter().any(|k| {
                words.contains(&format!(" {k} ")) || words.contains(&format!(" {k}s "))
            })
        };

        if has(&["carry", "farmer", "walk"]) {
            MovementPattern::Carry
        } else if has(&["lunge", "split squat", "step up"]) {
            MovementPattern::Lunge
        } else if has(&["squat", "leg press"]) {
            MovementPattern::Squat
        } else if has(&[
            "deadlift",
            "rdl",
            "hinge",
            "good morning",
            "swing",
            "hip thrust",
            "bridge",
        ]) {
            MovementPattern::Hinge
        } else if has(&["pull up", "pullup", "chin up", "pulldown", "pull down"]) {
            MovementPattern::PullVertical
        } else if has(&["row"]) {
            MovementPattern::PullHorizontal
        } else if has(&["overhead", "shoulder press", "military", "arnold", "push press"]) {
            MovementPattern::PushVertical
        } else if has(&["bench", "push up", "pushup", "chest press", "dip"]) {
            MovementPattern::PushHorizontal
        } else {
            MovementPattern::Isolation
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum GenderBias {
    Female,
    Male,
    #[default]
    Unisex,
}

impl Property for GenderBias {
    fn iter() -> Iter<'static, GenderBias> {
        static BIAS: [GenderBias; 3] = [GenderBias::Female, GenderBias::Male, GenderBias::Unisex];
        BIAS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            GenderBias::Female => "Female",
            GenderBias::Male => "Male",
            GenderBias::Unisex => "Unisex",
        }
    }
}

impl GenderBias {
    /// Unknown values fall back to unisex.
    #[must_use]
    pub fn parse(raw: &str) -> GenderBias {
        match normalize_name(raw).as_str() {
            "female" | "f" | "woman" | "women" => GenderBias::Female,
            "male" | "m" | "man" | "men" => GenderBias::Male,
            _ => GenderBias::Unisex,
        }
    }

    /// Whether content curated for `self` suits a user with bias `other`.
    #[must_use]
    pub fn is_compatible(self, other: GenderBias) -> bool {
        self == other || self == GenderBias::Unisex || other == GenderBias::Unisex
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Source {
    HandAuthored,
    Generated,
    ThirdParty,
    Csv,
}

impl Property for Source {
    fn iter() -> Iter<'static, Source> {
        static SOURCES: [Source; 4] = [
            Source::HandAuthored,
            Source::Generated,
            Source::ThirdParty,
            Source::Csv,
        ];
        SOURCES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Source::HandAuthored => "Hand-Authored",
            Source::Generated => "Generated",
            Source::ThirdParty => "Third-Party",
            Source::Csv => "CSV",
        }
    }
}

#[derive(Default, PartialEq)]
pub struct ExerciseFilter {
    pub name: String,
    pub muscles: HashSet<Muscle>,
    pub equipment: HashSet<Equipment>,
    pub patterns: HashSet<MovementPattern>,
    pub sources: HashSet<Source>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(
        &self,
        exercises: impl Iterator<Item = &'a Exercise>,
    ) -> Vec<&'a Exercise> {
        exercises
            .filter(|e| {
                e.name
                    .as_str()
                    .to_lowercase()
                    .contains(self.name.to_lowercase().trim())
                    && (self.muscles.is_empty() || self.muscles.iter().all(|m| e.targets(*m)))
                    && (self.equipment.is_empty() || self.equipment.iter().any(|eq| e.uses(*eq)))
                    && (self.patterns.is_empty() || self.patterns.contains(&e.movement_pattern))
                    && (self.sources.is_empty() || self.sources.contains(&e.source))
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.trim().is_empty()
            && self.muscles.is_empty()
            && self.equipment.is_empty()
            && self.patterns.is_empty()
            && self.sources.is_empty()
    }

    #[must_use]
    pub fn muscle_list(&self) -> Vec<(Muscle, bool)> {
        Muscle::iter_filter()
            .map(|m| (*m, self.muscles.contains(m)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn equipment_list(&self) -> Vec<(Equipment, bool)> {
        Equipment::iter_filter()
            .map(|e| (*e, self.equipment.contains(e)))
            .collect::<Vec<_>>()
    }

    #[must_use]
    pub fn pattern_list(&self) -> Vec<(MovementPattern, bool)> {
        MovementPattern::iter_filter()
            .map(|p| (*p, self.patterns.contains(p)))
            .collect::<Vec<_>>()
    }

    pub fn toggle_muscle(&mut self, muscle: Muscle) {
        if !self.muscles.remove(&muscle) {
            self.muscles.insert(muscle);
        }
    }

    pub fn toggle_equipment(&mut self, equipment: Equipment) {
        if !self.equipment.remove(&equipment) {
            self.equipment.insert(equipment);
        }
    }

    pub fn toggle_pattern(&mut self, pattern: MovementPattern) {
        if !self.patterns.remove(&pattern) {
            self.patterns.insert(pattern);
        }
    }

    pub fn toggle_source(&mut self, source: Source) {
        if !self.sources.remove(&source) {
            self.sources.insert(source);
        }
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn iter_filter() -> Iter<'static, Self> {
        Self::iter()
    }
    fn name(self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(name: &str, primary_muscle: Muscle, equipment: &[Equipment]) -> Exercise {
        Exercise {
            id: ExerciseID::derive(name),
            name: Name::new(name).unwrap(),
            primary_muscle,
            secondary_muscles: vec![],
            equipment: equipment.to_vec(),
            movement_pattern: MovementPattern::infer(name),
            difficulty: Difficulty::default(),
            gender_bias: GenderBias::Unisex,
            image: None,
            source: Source::HandAuthored,
        }
    }

    #[rstest]
    #[case("Barbell Squat (Sumo Stance)", "barbell-squat-sumo-stance")]
    #[case("  Pull-Up  ", "pull-up")]
    #[case("Romanian_Deadlift", "romanian-deadlift")]
    #[case("", "")]
    fn test_exercise_id_derive(#[case] text: &str, #[case] expected: &str) {
        assert_eq!(ExerciseID::derive(text).as_str(), expected);
    }

    #[test]
    fn test_exercise_id_with_suffix() {
        assert_eq!(
            ExerciseID::derive("Squat").with_suffix(2),
            ExerciseID::derive("squat 2")
        );
    }

    #[rstest]
    #[case(8, 3, 2, 10)]
    #[case(1, -1, 0, 1)]
    #[case(2, -1, -1, 1)]
    #[case(4, 2, 1, 7)]
    #[case(10, 0, 0, 10)]
    fn test_difficulty_from_modifiers(
        #[case] base: u8,
        #[case] equipment: i8,
        #[case] variant: i8,
        #[case] expected: u8,
    ) {
        assert_eq!(
            Difficulty::from_modifiers(base, equipment, variant).value(),
            expected
        );
    }

    #[rstest]
    #[case(0, Err(DifficultyError::OutOfRange(0)))]
    #[case(1, Ok(Difficulty(1)))]
    #[case(10, Ok(Difficulty(10)))]
    #[case(11, Err(DifficultyError::OutOfRange(11)))]
    fn test_difficulty_new(#[case] value: u8, #[case] expected: Result<Difficulty, DifficultyError>) {
        assert_eq!(Difficulty::new(value), expected);
    }

    #[rstest]
    #[case("Glutes", Some(Muscle::Glutes))]
    #[case("quads", Some(Muscle::Quadriceps))]
    #[case("Lower Back", Some(Muscle::LowerBack))]
    #[case("lower_back", Some(Muscle::LowerBack))]
    #[case("middle back", Some(Muscle::Back))]
    #[case("Full Body", Some(Muscle::FullBody))]
    #[case("Glutez", None)]
    #[case("", None)]
    fn test_muscle_parse(#[case] raw: &str, #[case] expected: Option<Muscle>) {
        assert_eq!(Muscle::parse(raw), expected);
    }

    #[test]
    fn test_muscle_name() {
        let mut names = HashSet::new();

        for muscle in Muscle::iter() {
            let name = muscle.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));
            assert_eq!(Muscle::parse(name), Some(*muscle));

            names.insert(name);
        }
    }

    #[rstest]
    #[case("Dumbbell", Some(Equipment::Dumbbell))]
    #[case("dumbbells", Some(Equipment::Dumbbell))]
    #[case("body only", Some(Equipment::Bodyweight))]
    #[case("e-z curl bar", Some(Equipment::Barbell))]
    #[case("Smith Machine", Some(Equipment::SmithMachine))]
    #[case("foam roll", None)]
    fn test_equipment_parse(#[case] raw: &str, #[case] expected: Option<Equipment>) {
        assert_eq!(Equipment::parse(raw), expected);
    }

    #[test]
    fn test_equipment_name() {
        let mut names = HashSet::new();

        for equipment in Equipment::iter() {
            let name = equipment.name();

            assert!(!name.is_empty());
            assert!(!names.contains(name));
            assert_eq!(Equipment::parse(name), Some(*equipment));

            names.insert(name);
        }
    }

    #[test]
    fn test_movement_pattern_parse() {
        for pattern in MovementPattern::iter() {
            assert_eq!(MovementPattern::parse(pattern.tag()), Some(*pattern));
            assert_eq!(MovementPattern::parse(pattern.name()), Some(*pattern));
        }

        assert_eq!(MovementPattern::parse("twist"), None);
    }

    #[rstest]
    #[case("Barbell Back Squat", MovementPattern::Squat)]
    #[case("Dumbbell Bulgarian Split Squat", MovementPattern::Lunge)]
    #[case("Walking Lunges", MovementPattern::Lunge)]
    #[case("Romanian Deadlift", MovementPattern::Hinge)]
    #[case("Barbell Hip Thrust", MovementPattern::Hinge)]
    #[case("Pull-Up", MovementPattern::PullVertical)]
    #[case("Lat Pulldown", MovementPattern::PullVertical)]
    #[case("Seated Cable Row", MovementPattern::PullHorizontal)]
    #[case("Overhead Press", MovementPattern::PushVertical)]
    #[case("Incline Bench Press", MovementPattern::PushHorizontal)]
    #[case("Push-Ups", MovementPattern::PushHorizontal)]
    #[case("Farmer's Carry", MovementPattern::Carry)]
    #[case("Hammer Curl", MovementPattern::Isolation)]
    #[case("Narrow Stance Calf Raise", MovementPattern::Isolation)]
    fn test_movement_pattern_infer(#[case] name: &str, #[case] expected: MovementPattern) {
        assert_eq!(MovementPattern::infer(name), expected);
    }

    #[rstest]
    #[case("female", GenderBias::Female)]
    #[case("Women", GenderBias::Female)]
    #[case("MALE", GenderBias::Male)]
    #[case("unisex", GenderBias::Unisex)]
    #[case("", GenderBias::Unisex)]
    fn test_gender_bias_parse(#[case] raw: &str, #[case] expected: GenderBias) {
        assert_eq!(GenderBias::parse(raw), expected);
    }

    #[rstest]
    #[case(GenderBias::Female, GenderBias::Female, true)]
    #[case(GenderBias::Female, GenderBias::Male, false)]
    #[case(GenderBias::Unisex, GenderBias::Male, true)]
    #[case(GenderBias::Male, GenderBias::Unisex, true)]
    fn test_gender_bias_is_compatible(
        #[case] bias: GenderBias,
        #[case] other: GenderBias,
        #[case] expected: bool,
    ) {
        assert_eq!(bias.is_compatible(other), expected);
    }

    #[test]
    fn test_source_name() {
        let mut names = HashSet::new();

        for source in Source::iter() {
            assert!(names.insert(source.name()));
        }
    }

    #[test]
    fn test_exercise_muscles() {
        let mut e = exercise("Hip Thrust", Muscle::Glutes, &[Equipment::Barbell]);
        e.secondary_muscles = vec![Muscle::Hamstrings];

        assert_eq!(
            e.muscles().collect::<Vec<_>>(),
            vec![Muscle::Glutes, Muscle::Hamstrings]
        );
        assert!(e.targets(Muscle::Hamstrings));
        assert!(!e.targets(Muscle::Chest));
        assert!(e.uses(Equipment::Barbell));
        assert!(!e.uses(Equipment::Cable));
    }

    #[rstest]
    #[case::name_lower_case(
        ExerciseFilter { name: "squat".into(), ..ExerciseFilter::default() },
        &["Barbell Squat"]
    )]
    #[case::name_upper_case(
        ExerciseFilter { name: "SQUAT".into(), ..ExerciseFilter::default() },
        &["Barbell Squat"]
    )]
    #[case::muscles(
        ExerciseFilter { muscles: [Muscle::Chest].into(), ..ExerciseFilter::default() },
        &["Push Up", "Cable Fly"]
    )]
    #[case::equipment(
        ExerciseFilter { equipment: [Equipment::Cable, Equipment::Barbell].into(), ..ExerciseFilter::default() },
        &["Barbell Squat", "Cable Fly"]
    )]
    #[case::patterns(
        ExerciseFilter { patterns: [MovementPattern::PushHorizontal].into(), ..ExerciseFilter::default() },
        &["Push Up"]
    )]
    #[case::none(
        ExerciseFilter { name: "row".into(), muscles: [Muscle::Chest].into(), ..ExerciseFilter::default() },
        &[]
    )]
    fn test_exercise_filter_exercises(#[case] filter: ExerciseFilter, #[case] expected: &[&str]) {
        let exercises = [
            exercise("Barbell Squat", Muscle::Quadriceps, &[Equipment::Barbell]),
            exercise("Push Up", Muscle::Chest, &[Equipment::Bodyweight]),
            exercise("Cable Fly", Muscle::Chest, &[Equipment::Cable]),
        ];

        assert_eq!(
            filter
                .exercises(exercises.iter())
                .iter()
                .map(|e| e.name.as_str())
                .collect::<Vec<_>>(),
            expected
        );
    }

    #[test]
    fn test_exercise_filter_is_empty() {
        assert!(ExerciseFilter::default().is_empty());
        assert!(
            !ExerciseFilter {
                name: "squat".into(),
                ..ExerciseFilter::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_exercise_filter_toggle_muscle() {
        let mut filter = ExerciseFilter::default();

        assert!(filter.muscle_list().iter().map(|(_, b)| b).all(|b| !b));

        filter.toggle_muscle(Muscle::Glutes);

        assert!(filter.muscle_list().contains(&(Muscle::Glutes, true)));
        assert!(
            filter
                .muscle_list()
                .into_iter()
                .filter(|(m, _)| *m != Muscle::Glutes)
                .map(|(_, b)| b)
                .all(|b| !b)
        );

        filter.toggle_muscle(Muscle::Glutes);

        assert!(filter.muscle_list().iter().map(|(_, b)| b).all(|b| !b));
    }

    #[test]
    fn test_exercise_filter_toggle_equipment() {
        let mut filter = ExerciseFilter::default();

        filter.toggle_equipment(Equipment::Kettlebell);

        assert!(
            filter
                .equipment_list()
                .contains(&(Equipment::Kettlebell, true))
        );

        filter.toggle_equipment(Equipment::Kettlebell);

        assert!(filter.equipment_list().iter().map(|(_, b)| b).all(|b| !b));
    }

    #[test]
    fn test_exercise_filter_toggle_pattern_and_source() {
        let mut filter = ExerciseFilter::default();

        filter.toggle_pattern(MovementPattern::Carry);
        filter.toggle_source(Source::Csv);

        assert!(filter.pattern_list().contains(&(MovementPattern::Carry, true)));
        assert!(filter.sources.contains(&Source::Csv));

        filter.toggle_pattern(MovementPattern::Carry);
        filter.toggle_source(Source::Csv);

        assert!(filter.is_empty());
    }
}
