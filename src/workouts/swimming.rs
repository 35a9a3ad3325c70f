//! Swimming workout

use super::{TrainingMetrics, M_IN_KM};
use crate::types::{SwimmingReading, WorkoutKind, WorkoutReading};

/// Swimming session
///
/// Distance comes from the stroke count, but mean speed comes from pool
/// geometry alone. The two are never derived from one another.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    reading: SwimmingReading,
}

impl Swimming {
    const CALORIES_SPEED_SHIFT: f64 = 1.1;
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(reading: SwimmingReading) -> Self {
        Self { reading }
    }

    /// Pool length (meters)
    pub fn length_pool(&self) -> f64 {
        self.reading.length_pool
    }

    /// Pool lengths swum
    pub fn count_pool(&self) -> u32 {
        self.reading.count_pool
    }
}

impl TrainingMetrics for Swimming {
    const LEN_STEP: f64 = 1.38;

    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn reading(&self) -> &WorkoutReading {
        &self.reading.base
    }

    fn mean_speed(&self) -> f64 {
        self.reading.length_pool * f64::from(self.reading.count_pool)
            / M_IN_KM
            / self.reading.base.duration
    }

    fn calories(&self) -> f64 {
        (self.mean_speed() + Self::CALORIES_SPEED_SHIFT)
            * Self::CALORIES_WEIGHT_MULTIPLIER
            * self.reading.base.weight
    }
}
