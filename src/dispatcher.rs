//! Sensor package dispatch
//!
//! Maps a workout code and its positional readings to a constructed [`Workout`].
//! All checks run before anything is built:
//! 1. the code must name a known workout kind
//! 2. the number of values must match that kind
//! 3. every value must be a valid reading

use crate::error::WorkoutError;
use crate::types::{SwimmingReading, WalkingReading, WorkoutKind, WorkoutReading};
use crate::workouts::{Running, SportsWalking, Swimming, Workout};

/// Read a sensor package and build the matching workout.
///
/// # Arguments
/// * `code` - Workout code: "RUN", "WLK" or "SWM"
/// * `data` - Readings in positional order (see [`WorkoutKind::field_names`])
///
/// # Example
/// ```
/// use fitness_tracker::read_package;
///
/// let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
/// assert_eq!(workout.kind_name(), "Running");
/// ```
pub fn read_package(code: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let kind = WorkoutKind::from_code(code)
        .ok_or_else(|| WorkoutError::UnknownWorkoutCode(code.to_string()))?;

    if data.len() != kind.field_count() {
        return Err(WorkoutError::ArityMismatch {
            code: code.to_string(),
            expected: kind.field_count(),
            actual: data.len(),
        });
    }

    let base = WorkoutReading {
        action: whole_number("action", data[0])?,
        duration: positive("duration", data[1])?,
        weight: positive("weight", data[2])?,
    };

    let workout: Workout = match kind {
        WorkoutKind::Running => Running::new(base).into(),
        WorkoutKind::SportsWalking => SportsWalking::new(WalkingReading {
            base,
            height: positive("height", data[3])?,
        })
        .into(),
        WorkoutKind::Swimming => Swimming::new(SwimmingReading {
            base,
            length_pool: positive("length_pool", data[3])?,
            count_pool: whole_number("count_pool", data[4])?,
        })
        .into(),
    };

    tracing::debug!(code, kind = kind.label(), "dispatched sensor package");

    Ok(workout)
}

fn positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if !value.is_finite() {
        return Err(WorkoutError::InvalidReading {
            field,
            value,
            reason: "must be a finite number",
        });
    }
    if value <= 0.0 {
        return Err(WorkoutError::InvalidReading {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

fn whole_number(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(WorkoutError::InvalidReading {
            field,
            value,
            reason: "must be a whole number",
        });
    }
    if value < 0.0 || value > f64::from(u32::MAX) {
        return Err(WorkoutError::InvalidReading {
            field,
            value,
            reason: "out of range",
        });
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_read_swimming() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        match &workout {
            Workout::Swimming(swim) => {
                assert_eq!(swim.length_pool(), 25.0);
                assert_eq!(swim.count_pool(), 40);
            }
            other => panic!("expected swimming, got {:?}", other),
        }
        assert_eq!(workout.reading().action, 720);
        assert_eq!(workout.reading().weight, 80.0);
    }

    #[test]
    fn test_read_running() {
        let workout = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert_eq!(workout.kind(), WorkoutKind::Running);
        assert!((workout.distance() - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_read_walking() {
        let workout = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        match &workout {
            Workout::Walking(walk) => assert_eq!(walk.height(), 180.0),
            other => panic!("expected walking, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_code() {
        let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownWorkoutCode(ref c) if c == "XYZ"));
    }

    #[test]
    fn test_unknown_code_checked_before_arity() {
        let err = read_package("XYZ", &[]).unwrap_err();
        assert!(matches!(err, WorkoutError::UnknownWorkoutCode(_)));
    }

    #[test]
    fn test_too_few_values() {
        let err = read_package("RUN", &[1.0, 2.0]).unwrap_err();
        match err {
            WorkoutError::ArityMismatch {
                code,
                expected,
                actual,
            } => {
                assert_eq!(code, "RUN");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected arity mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_too_many_values() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::ArityMismatch {
                expected: 4,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn test_zero_duration_rejected() {
        let err = read_package("RUN", &[15000.0, 0.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading {
                field: "duration",
                ..
            }
        ));
    }

    #[test]
    fn test_fractional_count_rejected() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.5]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading {
                field: "count_pool",
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = read_package("WLK", &[9000.0, 1.0, 75.0, f64::NAN]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading { field: "height", .. }
        ));

        let err = read_package("RUN", &[15000.0, f64::INFINITY, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading {
                field: "duration",
                reason: "must be a finite number",
                ..
            }
        ));

        let err = read_package("RUN", &[f64::NEG_INFINITY, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading { field: "action", .. }
        ));
    }

    #[test]
    fn test_negative_action_rejected() {
        let err = read_package("RUN", &[-1.0, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading {
                field: "action",
                reason: "out of range",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_weight_rejected() {
        let err = read_package("RUN", &[15000.0, 1.0, 0.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading {
                field: "weight",
                reason: "must be greater than zero",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_pool_length_rejected() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 0.0, 40.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading {
                field: "length_pool",
                ..
            }
        ));
    }

    #[test]
    fn test_counts_above_u32_rejected() {
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 5e9]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading {
                field: "count_pool",
                reason: "out of range",
                ..
            }
        ));

        let err = read_package("RUN", &[5e9, 1.0, 75.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidReading {
                field: "action",
                reason: "out of range",
                ..
            }
        ));
    }

    #[test]
    fn test_u32_max_count_accepted() {
        let workout = read_package("RUN", &[f64::from(u32::MAX), 1.0, 75.0]).unwrap();
        assert_eq!(workout.reading().action, u32::MAX);
    }

    #[test]
    fn test_arity_checked_before_readings() {
        let err = read_package("RUN", &[f64::NAN, -1.0]).unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::ArityMismatch {
                expected: 3,
                actual: 2,
                ..
            }
        ));
    }
}
