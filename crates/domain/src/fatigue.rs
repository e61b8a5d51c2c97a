use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RPE(u8);

impl RPE {
    pub const ZERO: RPE = RPE(0);
    pub const FIVE: RPE = RPE(50);
    pub const SIX: RPE = RPE(60);
    pub const SEVEN: RPE = RPE(70);
    pub const EIGHT: RPE = RPE(80);
    pub const NINE: RPE = RPE(90);
    pub const TEN: RPE = RPE(100);

    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(0.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0) as u8;

        if v % 5 != 0 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl TryFrom<&str> for RPE {
    type Error = RPEError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f32>() {
            Ok(parsed_value) => RPE::new(parsed_value),
            Err(_) => Err(RPEError::ParseError),
        }
    }
}

impl fmt::Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 0.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
    #[error("RPE must be a decimal")]
    ParseError,
}

/// Accumulated strain of a sequence of sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fatigue {
    pub score: f32,
    pub level: FatigueLevel,
}

impl Fatigue {
    pub const MODERATE: f32 = 6.0;
    pub const HIGH: f32 = 10.0;
    /// Number of trailing maximal sets that always count as high fatigue.
    pub const MAX_EFFORT_STREAK: usize = 3;

    #[must_use]
    pub fn from_rpe(values: &[RPE]) -> Self {
        let score = values.iter().map(|rpe| weight(*rpe)).sum::<f32>();
        let streak = values
            .iter()
            .rev()
            .take_while(|rpe| **rpe == RPE::TEN)
            .count();

        let level = if streak >= Self::MAX_EFFORT_STREAK || score >= Self::HIGH {
            FatigueLevel::High
        } else if score >= Self::MODERATE {
            FatigueLevel::Moderate
        } else {
            FatigueLevel::Fresh
        };

        Self { score, level }
    }
}

fn weight(rpe: RPE) -> f32 {
    match rpe.0 {
        95.. => 1.5,
        85..95 => 1.0,
        70..85 => 0.5,
        _ => 0.25,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FatigueLevel {
    Fresh,
    Moderate,
    High,
}
