use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use log::debug;
use repquest_domain as domain;
use serde::{Deserialize, Serialize};

use crate::{
    settings::Settings,
    source::{self, SourceFile},
};

/// Exercise sources and settings stored in local files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRepository {
    sources: Vec<SourceFile>,
    settings: Option<PathBuf>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(default)]
struct Config {
    sources: Vec<SourceFile>,
    settings: Option<PathBuf>,
}

impl FileRepository {
    #[must_use]
    pub fn new(sources: Vec<SourceFile>) -> Self {
        Self {
            sources,
            settings: None,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings = Some(path.into());
        self
    }

    /// Reads a JSON configuration listing the source files and the settings file.
    ///
    /// Relative paths are resolved against the directory of the configuration.
    pub fn from_config(path: &Path) -> Result<Self, domain::StorageError> {
        let text = read(path)?;
        let config = serde_json::from_str::<Config>(&text)
            .with_context(|| format!("failed to parse {}", path.display()))
            .map_err(malformed)?;
        let base = path.parent().unwrap_or(Path::new(""));

        Ok(Self {
            sources: config
                .sources
                .into_iter()
                .map(|s| SourceFile {
                    path: base.join(s.path),
                    format: s.format,
                })
                .collect(),
            settings: config.settings.map(|p| base.join(p)),
        })
    }

    #[must_use]
    pub fn sources(&self) -> &[SourceFile] {
        &self.sources
    }

    pub fn write_settings(&self, settings: &domain::Settings) -> Result<(), domain::StorageError> {
        let Some(path) = &self.settings else {
            return Err(domain::StorageError::NotFound("settings".to_string()));
        };
        serde_json::to_string_pretty(&Settings::from(settings))
            .context("failed to serialize settings")
            .and_then(|text| {
                fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
            })
            .map_err(|err| domain::StorageError::Other(err.into()))
    }
}

impl domain::ExerciseSourceRepository for FileRepository {
    fn read_exercise_sources(&self) -> Result<Vec<domain::RawExerciseInput>, domain::ReadError> {
        let mut result = vec![];
        for file in &self.sources {
            let exercises = read_source(file)?;
            debug!(
                "read {} exercises from {}",
                exercises.len(),
                file.path.display()
            );
            result.extend(exercises);
        }
        Ok(result)
    }
}

impl domain::SettingsRepository for FileRepository {
    fn read_settings(&self) -> Result<domain::Settings, domain::ReadError> {
        let Some(path) = &self.settings else {
            return Ok(domain::Settings::default());
        };
        if !path.exists() {
            return Ok(domain::Settings::default());
        }
        let text = read(path)?;
        let settings = serde_json::from_str::<Settings>(&text)
            .with_context(|| format!("failed to parse {}", path.display()))
            .map_err(malformed)?;
        Ok(settings.into())
    }
}

fn read_source(file: &SourceFile) -> Result<Vec<domain::RawExerciseInput>, domain::StorageError> {
    let Some(format) = file.format() else {
        return Err(domain::StorageError::Malformed(format!(
            "unknown format of {}",
            file.path.display()
        )));
    };
    let text = read(&file.path)?;
    source::parse(format, &text)
        .with_context(|| format!("failed to parse {}", file.path.display()))
        .map_err(malformed)
}

fn read(path: &Path) -> Result<String, domain::StorageError> {
    if !path.exists() {
        return Err(domain::StorageError::NotFound(path.display().to_string()));
    }
    fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))
        .map_err(|err| domain::StorageError::Other(err.into()))
}

#[allow(clippy::needless_pass_by_value)]
fn malformed(err: anyhow::Error) -> domain::StorageError {
    domain::StorageError::Malformed(format!("{err:#}"))
}
