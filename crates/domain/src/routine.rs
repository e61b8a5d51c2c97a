use std::{fmt, slice::Iter};

use derive_more::{AsRef, Deref, Display};
use log::{debug, warn};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::{
    Catalog, Exercise, GenderBias, MatchHints, Muscle, Name, Property, Settings, exercise::slugify,
    normalize_name, resolve,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Routine {
    pub id: RoutineID,
    pub name: Name,
    pub gender_bias: GenderBias,
    pub goal: Goal,
    pub duration_minutes: u32,
    pub calories: u32,
    pub steps: Vec<RoutineStep>,
}

impl Routine {
    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.steps.iter().map(|s| s.sets).sum()
    }

    /// Pairs every step with the exercise it refers to, if any.
    #[must_use]
    pub fn hydrate<'a>(
        &'a self,
        exercises: &'a [Exercise],
        hints: &MatchHints,
    ) -> Vec<(&'a RoutineStep, Option<&'a Exercise>)> {
        self.steps
            .iter()
            .map(|step| (step, resolve(&step.exercise_name, exercises, hints)))
            .collect()
    }
}

#[derive(AsRef, Deref, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RoutineID(String);

impl RoutineID {
    #[must_use]
    pub fn derive(text: &str) -> Self {
        Self(slugify(text))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineStep {
    /// Free-text reference to an exercise.
    pub exercise_name: String,
    pub sets: u32,
    pub reps: Reps,
    pub rest_seconds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reps {
    Count(u32),
    Text(String),
}

impl fmt::Display for Reps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reps::Count(count) => write!(f, "{count}"),
            Reps::Text(text) => write!(f, "{text}"),
        }
    }
}

impl From<u32> for Reps {
    fn from(value: u32) -> Self {
        Reps::Count(value)
    }
}

impl From<&str> for Reps {
    fn from(value: &str) -> Self {
        match value.trim().parse::<u32>() {
            Ok(count) => Reps::Count(count),
            Err(_) => Reps::Text(value.trim().to_string()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Goal {
    Strength,
    Hypertrophy,
    Toning,
    FatLoss,
    Endurance,
}

impl Property for Goal {
    fn iter() -> Iter<'static, Goal> {
        static GOALS: [Goal; 5] = [
            Goal::Strength,
            Goal::Hypertrophy,
            Goal::Toning,
            Goal::FatLoss,
            Goal::Endurance,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Goal::Strength => "Strength",
            Goal::Hypertrophy => "Hypertrophy",
            Goal::Toning => "Toning",
            Goal::FatLoss => "Fat Loss",
            Goal::Endurance => "Endurance",
        }
    }
}

impl Goal {
    #[must_use]
    pub fn parse(raw: &str) -> Option<Goal> {
        let raw = normalize_name(raw);
        Goal::iter().find(|g| normalize_name(g.name()) == raw).copied()
    }

    /// Default sets, reps and rest of every step.
    #[must_use]
    pub fn prescription(self) -> (u32, Reps, u32) {
        match self {
            Goal::Strength => (5, Reps::Count(5), 180),
            Goal::Hypertrophy => (4, Reps::Text("8-12".to_string()), 90),
            Goal::Toning => (3, Reps::Text("12-15".to_string()), 60),
            Goal::FatLoss => (3, Reps::Text("15-20".to_string()), 30),
            Goal::Endurance => (2, Reps::Text("20-25".to_string()), 45),
        }
    }
}

/// Named routine template targeting one muscle.
#[derive(Debug, Clone, PartialEq)]
pub struct Split {
    pub name: String,
    pub target: String,
    pub gender_bias: GenderBias,
    pub goal: Goal,
}

impl Split {
    #[must_use]
    pub fn new(name: &str, target: &str, gender_bias: GenderBias, goal: Goal) -> Self {
        Self {
            name: name.to_string(),
            target: target.to_string(),
            gender_bias,
            goal,
        }
    }

    /// Whether the primary muscle of the exercise is the target of the split.
    #[must_use]
    pub fn targets(&self, exercise: &Exercise) -> bool {
        let target = normalize_name(&self.target);
        if target.is_empty() {
            return false;
        }
        Muscle::parse(&self.target) == Some(exercise.primary_muscle)
            || normalize_name(exercise.primary_muscle.name()).contains(&target)
    }
}

#[must_use]
pub fn splits() -> Vec<Split> {
    SPLITS
        .iter()
        .map(|(name, target, gender_bias, goal)| Split::new(name, target, *gender_bias, *goal))
        .collect()
}

const SPLITS: [(&str, &str, GenderBias, Goal); 9] = [
    ("Glute Focus", "Glutes", GenderBias::Female, Goal::Toning),
    ("Chest Day", "Chest", GenderBias::Male, Goal::Hypertrophy),
    ("Back Builder", "Back", GenderBias::Unisex, Goal::Hypertrophy),
    ("Leg Day", "Quadriceps", GenderBias::Unisex, Goal::Strength),
    ("Hamstring Hinge", "Hamstrings", GenderBias::Unisex, Goal::Strength),
    ("Shoulder Sculpt", "Shoulders", GenderBias::Female, Goal::Toning),
    ("Arm Pump", "Biceps", GenderBias::Male, Goal::Hypertrophy),
    ("Core Crusher", "Abs", GenderBias::Unisex, Goal::Endurance),
    ("Full Body Burn", "Full Body", GenderBias::Unisex, Goal::FatLoss),
];

/// Samples one routine per split from the catalog.
///
/// The pool of a split is widened to all exercises with a compatible gender
/// bias and then to the whole catalog if it is too small. An empty catalog
/// yields no routines.
#[must_use]
pub fn generate_routines(catalog: &Catalog, splits: &[Split], settings: &Settings) -> Vec<Routine> {
    if catalog.is_empty() {
        warn!("no routines generated from empty catalog");
        return vec![];
    }

    let mut rng = StdRng::seed_from_u64(settings.seed);
    let (min_steps, max_steps) = settings.step_range();

    splits
        .iter()
        .filter_map(|split| {
            let name = match Name::new(&split.name) {
                Ok(name) => name,
                Err(err) => {
                    warn!("skipped split: {err}");
                    return None;
                }
            };

            let mut pool = pool(catalog.exercises(), split, settings);
            pool.shuffle(&mut rng);
            let size = rng.gen_range(min_steps..=max_steps);

            let (sets, reps, rest_seconds) = split.goal.prescription();
            let steps = pool
                .into_iter()
                .take(size)
                .map(|e| RoutineStep {
                    exercise_name: e.name.to_string(),
                    sets,
                    reps: reps.clone(),
                    rest_seconds,
                })
                .collect::<Vec<_>>();
            let (duration_minutes, calories) = estimate(&steps, settings);

            Some(Routine {
                id: RoutineID::derive(&split.name),
                name,
                gender_bias: split.gender_bias,
                goal: split.goal,
                duration_minutes,
                calories,
                steps,
            })
        })
        .collect()
}

fn pool<'a>(exercises: &'a [Exercise], split: &Split, settings: &Settings) -> Vec<&'a Exercise> {
    let targeted = exercises
        .iter()
        .filter(|e| split.targets(e))
        .collect::<Vec<_>>();
    if !targeted.is_empty() && targeted.len() >= settings.min_target_pool {
        return targeted;
    }

    let compatible = exercises
        .iter()
        .filter(|e| e.gender_bias.is_compatible(split.gender_bias))
        .collect::<Vec<_>>();
    if !compatible.is_empty() && compatible.len() >= settings.min_widened_pool {
        debug!(
            "widened pool of {} from {} to {} exercises with compatible gender bias",
            split.name,
            targeted.len(),
            compatible.len()
        );
        return compatible;
    }

    debug!(
        "widened pool of {} from {} to all {} exercises",
        split.name,
        compatible.len(),
        exercises.len()
    );
    exercises.iter().collect()
}

/// Heuristic duration in minutes and energy expenditure in kcal.
#[must_use]
pub fn estimate(steps: &[RoutineStep], settings: &Settings) -> (u32, u32) {
    let num_steps = u32::try_from(steps.len()).unwrap_or(u32::MAX);
    let seconds = steps.iter().fold(
        num_steps.saturating_mul(settings.changeover_seconds),
        |total, s| {
            total.saturating_add(
                s.sets
                    .saturating_mul(settings.work_seconds_per_set.saturating_add(s.rest_seconds)),
            )
        },
    );
    let sets = steps
        .iter()
        .fold(0_u32, |total, s| total.saturating_add(s.sets));
    (seconds.div_ceil(60), sets.saturating_mul(settings.kcal_per_set))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{Difficulty, Equipment, ExerciseID, MovementPattern, Source};

    fn exercise(name: &str, primary_muscle: Muscle, gender_bias: GenderBias) -> Exercise {
        Exercise {
            id: ExerciseID::derive(name),
            name: Name::new(name).unwrap(),
            primary_muscle,
            secondary_muscles: vec![],
            equipment: vec![Equipment::Bodyweight],
            movement_pattern: MovementPattern::infer(name),
            difficulty: Difficulty::default(),
            gender_bias,
            image: None,
            source: Source::HandAuthored,
        }
    }

    fn catalog(glutes: usize, female: usize, male: usize) -> Catalog {
        (0..glutes)
            .map(|i| exercise(&format!("Glute Move {i}"), Muscle::Glutes, GenderBias::Female))
            .chain(
                (0..female)
                    .map(|i| exercise(&format!("Female Move {i}"), Muscle::Chest, GenderBias::Female)),
            )
            .chain(
                (0..male).map(|i| exercise(&format!("Male Move {i}"), Muscle::Chest, GenderBias::Male)),
            )
            .collect()
    }

    fn glute_split() -> Split {
        Split::new("Glute Focus", "Glutes", GenderBias::Female, Goal::Toning)
    }

    fn names(routine: &Routine) -> Vec<&str> {
        routine
            .steps
            .iter()
            .map(|s| s.exercise_name.as_str())
            .collect()
    }

    #[test]
    fn test_generate_routines_target_pool() {
        let catalog = catalog(10, 0, 10);
        let routines = generate_routines(&catalog, &[glute_split()], &Settings::default());

        assert_eq!(routines.len(), 1);
        assert_eq!(routines[0].id, RoutineID::derive("glute-focus"));
        assert!((6..=8).contains(&routines[0].steps.len()));
        assert!(names(&routines[0]).iter().all(|n| n.starts_with("Glute Move")));
    }

    #[test]
    fn test_generate_routines_gender_pool() {
        let catalog = catalog(2, 5, 10);
        let routines = generate_routines(&catalog, &[glute_split()], &Settings::default());

        assert!(!routines[0].steps.is_empty());
        assert!(names(&routines[0]).iter().all(|n| !n.starts_with("Male Move")));
    }

    #[test]
    fn test_generate_routines_whole_catalog() {
        let catalog = catalog(0, 1, 10);
        let routines = generate_routines(&catalog, &[glute_split()], &Settings::default());

        assert!((6..=8).contains(&routines[0].steps.len()));
        assert!(names(&routines[0]).iter().any(|n| n.starts_with("Male Move")));
    }

    #[test]
    fn test_generate_routines_unknown_target() {
        let catalog = catalog(3, 3, 3);
        let splits = [
            Split::new("Typo Day", "Glutse", GenderBias::Female, Goal::Strength),
            Split::new("Blank Day", "", GenderBias::Male, Goal::Strength),
        ];
        let routines = generate_routines(&catalog, &splits, &Settings::default());

        assert_eq!(routines.len(), 2);
        assert!(routines.iter().all(|r| !r.steps.is_empty()));
    }

    #[test]
    fn test_generate_routines_small_catalog() {
        let catalog = catalog(0, 0, 3);
        let routines = generate_routines(&catalog, &[glute_split()], &Settings::default());

        assert_eq!(routines[0].steps.len(), 3);
    }

    #[test]
    fn test_generate_routines_empty_catalog() {
        assert_eq!(
            generate_routines(&Catalog::default(), &splits(), &Settings::default()),
            vec![]
        );
    }

    #[test]
    fn test_generate_routines_reproducible() {
        let catalog = catalog(20, 20, 20);
        let settings = Settings {
            seed: 42,
            ..Settings::default()
        };

        assert_eq!(
            generate_routines(&catalog, &splits(), &settings),
            generate_routines(&catalog, &splits(), &settings)
        );
    }

    #[rstest]
    #[case(0, 6)]
    #[case(8, 0)]
    #[case(0, 0)]
    fn test_generate_routines_zero_pool_thresholds(
        #[case] min_target_pool: usize,
        #[case] min_widened_pool: usize,
    ) {
        let catalog = catalog(0, 0, 10);
        let settings = Settings {
            min_target_pool,
            min_widened_pool,
            ..Settings::default()
        };
        let routines = generate_routines(
            &catalog,
            &[Split::new("Typo Day", "Glutse", GenderBias::Female, Goal::Toning)],
            &settings,
        );

        assert!((6..=8).contains(&routines[0].steps.len()));
        assert!(names(&routines[0]).iter().all(|n| n.starts_with("Male Move")));
    }

    #[test]
    fn test_generate_routines_distinct_steps() {
        let catalog = catalog(20, 0, 0);
        let routines = generate_routines(&catalog, &[glute_split()], &Settings::default());
        let names = names(&routines[0]);

        assert_eq!(names.iter().collect::<HashSet<_>>().len(), names.len());
    }

    #[test]
    fn test_generate_routines_prescription() {
        let catalog = catalog(10, 0, 0);
        let settings = Settings {
            min_steps: 6,
            max_steps: 6,
            ..Settings::default()
        };
        let routines = generate_routines(
            &catalog,
            &[Split::new("Glute Strength", "glutes", GenderBias::Female, Goal::Strength)],
            &settings,
        );

        assert_eq!(routines[0].steps.len(), 6);
        assert!(routines[0].steps.iter().all(|s| s.sets == 5
            && s.reps == Reps::Count(5)
            && s.rest_seconds == 180));
        assert_eq!(routines[0].num_sets(), 30);
        assert_eq!(routines[0].duration_minutes, 116);
        assert_eq!(routines[0].calories, 210);
    }

    #[rstest]
    #[case(&[], (0, 0))]
    #[case(&[(3, 60), (3, 60)], (12, 42))]
    #[case(&[(1, 0)], (2, 7))]
    #[case(&[(4, 90), (4, 90), (4, 90)], (29, 84))]
    fn test_estimate(#[case] steps: &[(u32, u32)], #[case] expected: (u32, u32)) {
        let steps = steps
            .iter()
            .map(|(sets, rest_seconds)| RoutineStep {
                exercise_name: "Squat".to_string(),
                sets: *sets,
                reps: Reps::Count(10),
                rest_seconds: *rest_seconds,
            })
            .collect::<Vec<_>>();

        assert_eq!(estimate(&steps, &Settings::default()), expected);
    }

    #[test]
    fn test_estimate_saturates() {
        let steps = vec![
            RoutineStep {
                exercise_name: "Squat".to_string(),
                sets: 3,
                reps: Reps::Count(10),
                rest_seconds: 60,
            };
            2
        ];
        let settings = Settings {
            work_seconds_per_set: u32::MAX,
            changeover_seconds: u32::MAX,
            kcal_per_set: u32::MAX,
            ..Settings::default()
        };

        assert_eq!(
            estimate(&steps, &settings),
            (u32::MAX.div_ceil(60), u32::MAX)
        );
    }

    #[test]
    fn test_routine_hydrate() {
        let exercises = vec![
            exercise("Hip Thrust", Muscle::Glutes, GenderBias::Female),
            exercise("Barbell Squat (Pause)", Muscle::Quadriceps, GenderBias::Unisex),
        ];
        let routine = Routine {
            id: RoutineID::derive("Lower"),
            name: Name::new("Lower").unwrap(),
            gender_bias: GenderBias::Unisex,
            goal: Goal::Strength,
            duration_minutes: 0,
            calories: 0,
            steps: ["hip thrust", "Pause Squat", "Zorblaxian Pulverizer"]
                .iter()
                .map(|name| RoutineStep {
                    exercise_name: (*name).to_string(),
                    sets: 3,
                    reps: Reps::from("8"),
                    rest_seconds: 60,
                })
                .collect(),
        };

        assert_eq!(
            routine
                .hydrate(&exercises, &MatchHints::default())
                .into_iter()
                .map(|(step, exercise)| (
                    step.exercise_name.as_str(),
                    exercise.map(|e| e.name.as_str())
                ))
                .collect::<Vec<_>>(),
            vec![
                ("hip thrust", Some("Hip Thrust")),
                ("Pause Squat", Some("Barbell Squat (Pause)")),
                ("Zorblaxian Pulverizer", None),
            ]
        );
    }

    #[rstest]
    #[case("12", Reps::Count(12))]
    #[case(" 8 ", Reps::Count(8))]
    #[case("8-12", Reps::Text("8-12".to_string()))]
    #[case("AMRAP", Reps::Text("AMRAP".to_string()))]
    fn test_reps_from_str(#[case] input: &str, #[case] expected: Reps) {
        assert_eq!(Reps::from(input), expected);
        assert_eq!(expected.to_string(), input.trim());
    }

    #[rstest]
    #[case("strength", Some(Goal::Strength))]
    #[case("Fat Loss", Some(Goal::FatLoss))]
    #[case("fat-loss", Some(Goal::FatLoss))]
    #[case("cardio", None)]
    fn test_goal_parse(#[case] input: &str, #[case] expected: Option<Goal>) {
        assert_eq!(Goal::parse(input), expected);
    }

    #[rstest]
    #[case("Glutes", Muscle::Glutes, true)]
    #[case("glute", Muscle::Glutes, true)]
    #[case("quads", Muscle::Quadriceps, true)]
    #[case("Glutse", Muscle::Glutes, false)]
    #[case("", Muscle::Glutes, false)]
    fn test_split_targets(#[case] target: &str, #[case] muscle: Muscle, #[case] expected: bool) {
        let split = Split::new("Split", target, GenderBias::Unisex, Goal::Toning);

        assert_eq!(split.targets(&exercise("Move", muscle, GenderBias::Unisex)), expected);
    }

    #[test]
    fn test_splits() {
        let mut ids = HashSet::new();

        for split in splits() {
            assert!(ids.insert(RoutineID::derive(&split.name)), "{}", split.name);
            assert!(Muscle::parse(&split.target).is_some(), "{}", split.target);
        }
    }
}
