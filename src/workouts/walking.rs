//! Sports walking workout

use super::{floor_div, TrainingMetrics, MIN_IN_HOUR};
use crate::types::{WalkingReading, WorkoutKind, WorkoutReading};

/// Sports walking session
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    reading: WalkingReading,
}

impl SportsWalking {
    const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

    pub fn new(reading: WalkingReading) -> Self {
        Self { reading }
    }

    /// Athlete height (cm)
    pub fn height(&self) -> f64 {
        self.reading.height
    }
}

impl TrainingMetrics for SportsWalking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn reading(&self) -> &WorkoutReading {
        &self.reading.base
    }

    fn calories(&self) -> f64 {
        let base = &self.reading.base;
        let time_in_min = base.duration * MIN_IN_HOUR;
        // speed^2 is floor-divided by height, not divided
        let speed_height = floor_div(self.mean_speed().powi(2), self.reading.height);
        (Self::CALORIES_WEIGHT_MULTIPLIER * base.weight
            + speed_height * Self::CALORIES_SPEED_HEIGHT_MULTIPLIER * base.weight)
            * time_in_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_walking(height: f64) -> SportsWalking {
        SportsWalking::new(WalkingReading {
            base: WorkoutReading {
                action: 9000,
                duration: 1.0,
                weight: 75.0,
            },
            height,
        })
    }

    #[test]
    fn test_distance_and_speed() {
        let walking = make_walking(180.0);
        // 9000 * 0.65 / 1000 = 5.85
        assert!((walking.distance() - 5.85).abs() < 1e-9);
        assert!((walking.mean_speed() - 5.85).abs() < 1e-9);
    }

    #[test]
    fn test_calories_tall_athlete() {
        // 5.85^2 = 34.2225, floored by 180 => 0
        let calories = make_walking(180.0).calories();
        assert!((calories - 0.035 * 75.0 * 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_calories_floor_not_round() {
        // 34.2225 / 20 = 1.711: floored to 1, rounding would give 2
        let calories = make_walking(20.0).calories();
        let floored = (0.035 * 75.0 + 1.0 * 0.029 * 75.0) * 60.0;
        let rounded = (0.035 * 75.0 + 2.0 * 0.029 * 75.0) * 60.0;
        let true_div = (0.035 * 75.0 + (34.2225 / 20.0) * 0.029 * 75.0) * 60.0;

        assert!((calories - floored).abs() < 1e-9);
        assert!((calories - rounded).abs() > 1.0);
        assert!((calories - true_div).abs() > 1.0);
    }

    #[test]
    fn test_calories_straddles_integer_boundary() {
        // 34.2225 / 34 is just above 1, / 35 just below 1
        let above = make_walking(34.0).calories();
        let below = make_walking(35.0).calories();

        assert!((above - (0.035 * 75.0 + 0.029 * 75.0) * 60.0).abs() < 1e-9);
        assert!((below - 0.035 * 75.0 * 60.0).abs() < 1e-9);
    }
}
