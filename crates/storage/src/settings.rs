use repquest_domain as domain;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub seed: u64,
    pub min_target_pool: usize,
    pub min_widened_pool: usize,
    pub min_steps: usize,
    pub max_steps: usize,
    pub work_seconds_per_set: u32,
    pub changeover_seconds: u32,
    pub kcal_per_set: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(&domain::Settings::default())
    }
}

impl From<&domain::Settings> for Settings {
    fn from(value: &domain::Settings) -> Self {
        Self {
            seed: value.seed,
            min_target_pool: value.min_target_pool,
            min_widened_pool: value.min_widened_pool,
            min_steps: value.min_steps,
            max_steps: value.max_steps,
            work_seconds_per_set: value.work_seconds_per_set,
            changeover_seconds: value.changeover_seconds,
            kcal_per_set: value.kcal_per_set,
        }
    }
}

impl From<Settings> for domain::Settings {
    fn from(value: Settings) -> Self {
        Self {
            seed: value.seed,
            min_target_pool: value.min_target_pool,
            min_widened_pool: value.min_widened_pool,
            min_steps: value.min_steps,
            max_steps: value.max_steps,
            work_seconds_per_set: value.work_seconds_per_set,
            changeover_seconds: value.changeover_seconds,
            kcal_per_set: value.kcal_per_set,
        }
    }
}
