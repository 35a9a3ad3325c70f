//! Workout models
//!
//! Each workout kind lives in its own module and implements [`TrainingMetrics`].
//! [`Workout`] is the closed set of kinds the dispatcher can build.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::Swimming;
pub use walking::SportsWalking;

use crate::types::{Summary, WorkoutKind, WorkoutReading};

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_HOUR: f64 = 60.0;

/// Metrics every workout kind provides
pub trait TrainingMetrics {
    /// Distance covered by one action (step or stroke), in meters
    const LEN_STEP: f64 = 0.65;

    fn kind(&self) -> WorkoutKind;

    fn reading(&self) -> &WorkoutReading;

    /// Distance in km
    fn distance(&self) -> f64 {
        f64::from(self.reading().action) * Self::LEN_STEP / M_IN_KM
    }

    /// Mean speed in km/h
    fn mean_speed(&self) -> f64 {
        self.distance() / self.reading().duration
    }

    /// Energy spent in kcal
    fn calories(&self) -> f64;
}

/// A workout of one of the supported kinds
#[derive(Debug, Clone, PartialEq)]
pub enum Workout {
    Running(Running),
    Walking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    /// Kind of this workout
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(w) => w.kind(),
            Workout::Walking(w) => w.kind(),
            Workout::Swimming(w) => w.kind(),
        }
    }

    /// Label used in the summary line
    pub fn kind_name(&self) -> &'static str {
        self.kind().label()
    }

    /// Readings shared by every kind (action, duration, weight)
    pub fn reading(&self) -> &WorkoutReading {
        match self {
            Workout::Running(w) => w.reading(),
            Workout::Walking(w) => w.reading(),
            Workout::Swimming(w) => w.reading(),
        }
    }

    /// Duration in hours
    pub fn duration(&self) -> f64 {
        self.reading().duration
    }

    /// Distance in km
    pub fn distance(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance(),
            Workout::Walking(w) => w.distance(),
            Workout::Swimming(w) => w.distance(),
        }
    }

    /// Mean speed in km/h
    pub fn mean_speed(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed(),
            Workout::Walking(w) => w.mean_speed(),
            Workout::Swimming(w) => w.mean_speed(),
        }
    }

    /// Energy spent in kcal
    pub fn calories(&self) -> f64 {
        match self {
            Workout::Running(w) => w.calories(),
            Workout::Walking(w) => w.calories(),
            Workout::Swimming(w) => w.calories(),
        }
    }

    /// Compute a fresh summary of this workout
    pub fn summary(&self) -> Summary {
        Summary {
            kind: self.kind_name().to_string(),
            duration: self.duration(),
            distance: self.distance(),
            speed: self.mean_speed(),
            calories: self.calories(),
        }
    }
}

impl From<Running> for Workout {
    fn from(w: Running) -> Self {
        Workout::Running(w)
    }
}

impl From<SportsWalking> for Workout {
    fn from(w: SportsWalking) -> Self {
        Workout::Walking(w)
    }
}

impl From<Swimming> for Workout {
    fn from(w: Swimming) -> Self {
        Workout::Swimming(w)
    }
}

/// Floored float division, `a // b`.
///
/// Computed from the remainder rather than `(a / b).floor()` so that results
/// next to an integer boundary match floored division exactly.
pub(crate) fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let mut div = (a - rem) / b;
    if rem != 0.0 && ((b < 0.0) != (rem < 0.0)) {
        div -= 1.0;
    }

    if div != 0.0 {
        let floor = div.floor();
        if div - floor > 0.5 {
            floor + 1.0
        } else {
            floor
        }
    } else {
        0.0_f64.copysign(a / b)
    }
}
