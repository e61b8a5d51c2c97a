use std::path::{Path, PathBuf};

use anyhow::Context;
use repquest_domain as domain;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

#[derive(Serialize, Deserialize, AsRefStr, EnumString, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SourceFormat {
    /// Third-party exercise database export.
    Json,
    /// Exported hand-authored table.
    Table,
    Csv,
}

impl SourceFormat {
    /// `*.table.json` is a table, any other `*.json` a third-party export.
    #[must_use]
    pub fn detect(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?.to_lowercase();
        if file_name.ends_with(".table.json") {
            Some(SourceFormat::Table)
        } else if file_name.ends_with(".json") {
            Some(SourceFormat::Json)
        } else if file_name.ends_with(".csv") {
            Some(SourceFormat::Csv)
        } else {
            None
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<SourceFormat>,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
        }
    }

    #[must_use]
    pub fn format(&self) -> Option<SourceFormat> {
        self.format.or_else(|| SourceFormat::detect(&self.path))
    }
}

pub fn parse(format: SourceFormat, text: &str) -> anyhow::Result<Vec<domain::RawExerciseInput>> {
    match format {
        SourceFormat::Json => {
            let exercises = serde_json::from_str::<Vec<ThirdPartyExercise>>(text)
                .context("invalid third-party exercise list")?;
            Ok(exercises
                .into_iter()
                .map(|e| domain::RawExerciseInput::ThirdParty(e.into()))
                .collect())
        }
        SourceFormat::Table => {
            let exercises = serde_json::from_str::<Vec<TableExercise>>(text)
                .context("invalid exercise table")?;
            Ok(exercises
                .into_iter()
                .map(|e| domain::RawExerciseInput::Table(e.into()))
                .collect())
        }
        SourceFormat::Csv => {
            let mut reader = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_reader(text.as_bytes());
            reader
                .deserialize::<CsvExercise>()
                .enumerate()
                .map(|(i, record)| {
                    record
                        .map(|e| domain::RawExerciseInput::Csv(e.into()))
                        .with_context(|| format!("invalid CSV record {}", i + 1))
                })
                .collect()
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct ThirdPartyExercise {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    equipment: Option<String>,
    #[serde(default)]
    primary_muscles: Vec<String>,
    #[serde(default)]
    secondary_muscles: Vec<String>,
    #[serde(default)]
    images: Vec<String>,
}

impl From<ThirdPartyExercise> for domain::ThirdPartyExercise {
    fn from(value: ThirdPartyExercise) -> Self {
        Self {
            id: value.id,
            name: value.name,
            level: value.level,
            equipment: value.equipment,
            primary_muscles: value.primary_muscles,
            secondary_muscles: value.secondary_muscles,
            images: value.images,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct TableExercise {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    primary_muscle: Option<String>,
    #[serde(default)]
    secondary_muscles: Vec<String>,
    #[serde(default)]
    equipment: Vec<String>,
    #[serde(default)]
    movement_pattern: Option<String>,
    #[serde(default)]
    difficulty: Option<serde_json::Value>,
    #[serde(default, alias = "gender")]
    target_gender_bias: Option<String>,
    #[serde(default, alias = "image")]
    image_ref: Option<String>,
}

impl From<TableExercise> for domain::TableExercise {
    fn from(value: TableExercise) -> Self {
        Self {
            id: value.id,
            name: value.name,
            primary_muscle: value.primary_muscle,
            secondary_muscles: value.secondary_muscles,
            equipment: value.equipment,
            movement_pattern: value.movement_pattern,
            difficulty: value.difficulty.as_ref().and_then(difficulty),
            gender_bias: value.target_gender_bias,
            image: value.image_ref,
        }
    }
}

/// Integral difficulty given as number or string. Anything else is left to the default.
fn difficulty(value: &serde_json::Value) -> Option<u8> {
    let difficulty = match value {
        serde_json::Value::Number(number) => number.as_u64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    };
    difficulty.and_then(|d| u8::try_from(d).ok())
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(default)]
struct CsvExercise {
    name: Option<String>,
    muscle: Option<String>,
    secondary_muscles: Option<String>,
    equipment: Option<String>,
    difficulty: Option<String>,
    gender: Option<String>,
    image: Option<String>,
}

impl From<CsvExercise> for domain::CsvExercise {
    fn from(value: CsvExercise) -> Self {
        Self {
            name: value.name,
            muscle: value.muscle,
            secondary_muscles: value.secondary_muscles,
            equipment: value.equipment,
            difficulty: value.difficulty,
            gender: value.gender,
            image: value.image,
        }
    }
}
