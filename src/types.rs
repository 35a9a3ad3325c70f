//! Core types for the fitness tracker
//!
//! This module defines the data structures that flow through each stage of the
//! pipeline: workout kinds, sensor readings, and the computed summary.

use serde::{Deserialize, Serialize};

/// Workout kind, identified on the wire by a three-letter code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// All supported kinds, in the order they are listed to users
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    /// Resolve a package code ("RUN", "WLK", "SWM")
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "RUN" => Some(WorkoutKind::Running),
            "WLK" => Some(WorkoutKind::SportsWalking),
            "SWM" => Some(WorkoutKind::Swimming),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label printed in the summary line
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Positional field names of a package for this kind
    pub fn field_names(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration", "weight"],
            WorkoutKind::SportsWalking => &["action", "duration", "weight", "height"],
            WorkoutKind::Swimming => &[
                "action",
                "duration",
                "weight",
                "length_pool",
                "count_pool",
            ],
        }
    }

    /// Number of values a package for this kind must carry
    pub fn field_count(&self) -> usize {
        self.field_names().len()
    }
}

/// Readings shared by every workout kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkoutReading {
    /// Steps (running, walking) or strokes (swimming)
    pub action: u32,
    /// Session duration (hours)
    pub duration: f64,
    /// Athlete weight (kg)
    pub weight: f64,
}

/// Readings for a sports walking session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingReading {
    pub base: WorkoutReading,
    /// Athlete height (cm)
    pub height: f64,
}

/// Readings for a swimming session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwimmingReading {
    pub base: WorkoutReading,
    /// Pool length (meters)
    pub length_pool: f64,
    /// Number of pool lengths swum
    pub count_pool: u32,
}

/// Computed metrics for one workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Workout label ("Running", "SportsWalking", "Swimming")
    #[serde(rename = "training_type")]
    pub kind: String,
    /// Duration (hours)
    pub duration: f64,
    /// Distance (km)
    pub distance: f64,
    /// Mean speed (km/h)
    pub speed: f64,
    /// Energy spent (kcal)
    pub calories: f64,
}
