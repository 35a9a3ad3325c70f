//! Summary formatting
//!
//! Renders a [`Summary`] into the single-line, human-readable report printed
//! for each workout. Every number is fixed-point with three decimals.

use std::fmt;

use crate::types::Summary;

/// Render a summary as its report line
pub fn format_summary(summary: &Summary) -> String {
    summary.to_string()
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.kind, self.duration, self.distance, self.speed, self.calories
        )
    }
}
