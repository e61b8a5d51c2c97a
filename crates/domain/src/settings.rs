use crate::ReadError;

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, ReadError>;
}

/// Parameters of the catalog build and the routine generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Seed of the pseudo-random pool shuffle.
    pub seed: u64,
    /// Minimum size of the pool filtered by target muscle.
    pub min_target_pool: usize,
    /// Minimum size of the pool filtered by gender bias.
    pub min_widened_pool: usize,
    pub min_steps: usize,
    pub max_steps: usize,
    pub work_seconds_per_set: u32,
    pub changeover_seconds: u32,
    pub kcal_per_set: u32,
}

impl Settings {
    /// Step range with the bounds swapped if necessary and at least one step.
    #[must_use]
    pub fn step_range(&self) -> (usize, usize) {
        let min = self.min_steps.min(self.max_steps).max(1);
        let max = self.min_steps.max(self.max_steps).max(1);
        (min, max)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0,
            min_target_pool: 8,
            min_widened_pool: 6,
            min_steps: 6,
            max_steps: 8,
            work_seconds_per_set: 40,
            changeover_seconds: 60,
            kcal_per_set: 7,
        }
    }
}
