//! Running workout

use super::{TrainingMetrics, MIN_IN_HOUR, M_IN_KM};
use crate::types::{WorkoutKind, WorkoutReading};

/// Running session
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    reading: WorkoutReading,
}

impl Running {
    const CALORIES_SPEED_MULTIPLIER: f64 = 18.0;
    const CALORIES_SPEED_SHIFT: f64 = 20.0;

    pub fn new(reading: WorkoutReading) -> Self {
        Self { reading }
    }
}

impl TrainingMetrics for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn reading(&self) -> &WorkoutReading {
        &self.reading
    }

    fn calories(&self) -> f64 {
        let time_in_min = self.reading.duration * MIN_IN_HOUR;
        (Self::CALORIES_SPEED_MULTIPLIER * self.mean_speed() - Self::CALORIES_SPEED_SHIFT)
            * self.reading.weight
            / M_IN_KM
            * time_in_min
    }
}
