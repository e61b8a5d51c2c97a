#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod catalog;
mod error;
mod exercise;
mod fatigue;
mod matcher;
mod movement;
mod name;
mod profile;
mod routine;
mod settings;
mod store;

pub use catalog::{
    Catalog, CsvExercise, RawExerciseInput, TableExercise, ThirdPartyExercise, build_catalog,
    hand_authored, normalize_name, strip_variant,
};
pub use error::{ReadError, StorageError};
pub use exercise::{
    Difficulty, DifficultyError, Equipment, Exercise, ExerciseFilter, ExerciseID, GenderBias,
    MovementPattern, Muscle, Property, Source,
};
pub use fatigue::{Fatigue, FatigueLevel, RPE, RPEError};
pub use matcher::{MatchHints, find, resolve, search};
pub use movement::{BaseMovement, Capability, Variant, base_movements, expand_exercises};
pub use name::{Name, NameError};
pub use profile::{Gender, Profile, curate};
pub use routine::{
    Goal, Reps, Routine, RoutineID, RoutineStep, Split, estimate, generate_routines, splits,
};
pub use settings::{Settings, SettingsRepository};
pub use store::{CatalogStore, ExerciseSourceRepository};
