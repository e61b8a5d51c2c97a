use std::{cell::RefCell, collections::HashMap};

use log::{debug, error, warn};

use crate::{
    BaseMovement, Catalog, Exercise, ExerciseID, GenderBias, MatchHints, RawExerciseInput,
    ReadError, Routine, Settings, SettingsRepository, Split, StorageError, base_movements,
    build_catalog, curate, expand_exercises, generate_routines, hand_authored, resolve, splits,
};

pub trait ExerciseSourceRepository {
    fn read_exercise_sources(&self) -> Result<Vec<RawExerciseInput>, ReadError>;
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::Storage(StorageError::NotFound(_)) => {
                    warn!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

/// Immutable catalog snapshot with the routines generated from it.
///
/// The snapshot is rebuilt as a whole. Resolved matches are cached until the
/// next build or invalidation.
pub struct CatalogStore<R> {
    repository: R,
    settings: Settings,
    base_movements: Vec<BaseMovement>,
    splits: Vec<Split>,
    version: u64,
    catalog: Option<Catalog>,
    routines: Vec<Routine>,
    matches: RefCell<HashMap<(String, MatchHints), Option<ExerciseID>>>,
}

impl<R: ExerciseSourceRepository> CatalogStore<R> {
    pub fn new(repository: R, settings: Settings) -> Self {
        Self {
            repository,
            settings,
            base_movements: base_movements(),
            splits: splits(),
            version: 0,
            catalog: None,
            routines: vec![],
            matches: RefCell::new(HashMap::new()),
        }
    }

    /// Uses the stored settings or the defaults if they cannot be read.
    pub fn from_repository(repository: R) -> Self
    where
        R: SettingsRepository,
    {
        let settings =
            log_on_error!(repository.read_settings(), "read", "settings").unwrap_or_default();
        Self::new(repository, settings)
    }

    #[must_use]
    pub fn with_base_movements(mut self, base_movements: Vec<BaseMovement>) -> Self {
        self.base_movements = base_movements;
        self
    }

    #[must_use]
    pub fn with_splits(mut self, splits: Vec<Split>) -> Self {
        self.splits = splits;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Builds a new snapshot from the built-in tables and the repository.
    ///
    /// If the repository cannot be read, the new snapshot is empty.
    pub fn build(&mut self) -> &Catalog {
        let catalog = match log_on_error!(
            self.repository.read_exercise_sources(),
            "read",
            "exercise sources"
        ) {
            Ok(external) => {
                let mut sources = hand_authored();
                sources.extend(
                    expand_exercises(&self.base_movements)
                        .into_iter()
                        .map(RawExerciseInput::Generated),
                );
                sources.extend(external);
                build_catalog(&sources)
            }
            Err(_) => Catalog::default(),
        };

        self.routines = generate_routines(&catalog, &self.splits, &self.settings);
        self.version += 1;
        self.matches.borrow_mut().clear();
        debug!(
            "built catalog version {} with {} exercises and {} routines",
            self.version,
            catalog.len(),
            self.routines.len()
        );

        self.catalog.insert(catalog)
    }

    pub fn get(&self) -> Option<&Catalog> {
        self.catalog.as_ref()
    }

    pub fn get_or_build(&mut self) -> &Catalog {
        if self.catalog.is_none() {
            self.build();
        }
        self.catalog.get_or_insert_with(Catalog::default)
    }

    pub fn routines(&self) -> &[Routine] {
        &self.routines
    }

    pub fn curated_routines(&self, bias: GenderBias) -> Vec<&Routine> {
        curate(&self.routines, bias)
    }

    pub fn invalidate(&mut self) {
        self.catalog = None;
        self.routines.clear();
        self.matches.borrow_mut().clear();
    }

    /// Resolves a free-text exercise reference against the current snapshot.
    pub fn resolve(&self, query: &str, hints: &MatchHints) -> Option<&Exercise> {
        let catalog = self.catalog.as_ref()?;
        let key = (query.to_string(), hints.clone());

        if let Some(id) = self.matches.borrow().get(&key) {
            return id.as_ref().and_then(|id| catalog.get(id));
        }

        let id = resolve(query, catalog.exercises(), hints).map(|e| e.id.clone());
        self.matches.borrow_mut().insert(key, id.clone());
        id.and_then(|id| catalog.get(&id))
    }
}
