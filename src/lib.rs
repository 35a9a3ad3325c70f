//! Fitness Tracker - derived workout metrics from raw sensor packages
//!
//! Sensor packages are turned into human-readable summaries through a
//! deterministic pipeline: dispatch → workout model → summary → formatting.
//!
//! ## Workout kinds
//!
//! - **Running** (`RUN`): steps, duration, weight
//! - **Sports walking** (`WLK`): steps, duration, weight, height
//! - **Swimming** (`SWM`): strokes, duration, weight, pool length, pool count

pub mod dispatcher;
pub mod error;
pub mod package;
pub mod pipeline;
pub mod summary;
pub mod types;
pub mod workouts;

pub use dispatcher::read_package;
pub use error::WorkoutError;
pub use package::{default_packages, PackageReader, SensorPackage};
pub use pipeline::{describe_package, process_package, BatchPolicy, BatchProcessor, BatchReport};
pub use summary::format_summary;
pub use types::{Summary, WorkoutKind};
pub use workouts::{TrainingMetrics, Workout};

/// Tracker version embedded in batch reports
pub const TRACKER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for batch reports
pub const PRODUCER_NAME: &str = "fitness-tracker";
