//! Sensor package input records
//!
//! A sensor package is one workout as delivered by the tracker: a workout code
//! and the readings in positional order. Packages arrive either as
//! newline-delimited JSON or as a single JSON array:
//!
//! ```json
//! {"workout_type": "RUN", "data": [15000, 1, 75]}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::WorkoutError;

/// One raw sensor package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    /// Workout code ("RUN", "WLK", "SWM")
    pub workout_type: String,
    /// Readings in the positional order of the workout kind
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// The built-in demo batch: one package of each kind
pub fn default_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Parser for serialized sensor packages
pub struct PackageReader;

impl PackageReader {
    /// Parse newline-delimited JSON, one package per line. Blank lines are skipped.
    pub fn parse_ndjson(input: &str) -> Result<Vec<SensorPackage>, WorkoutError> {
        let mut packages = Vec::new();

        for (line_num, line) in input.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let package: SensorPackage = serde_json::from_str(trimmed).map_err(|e| {
                WorkoutError::ParseError(format!("line {}: {}", line_num + 1, e))
            })?;
            packages.push(package);
        }

        Ok(packages)
    }

    /// Parse a JSON array of packages
    pub fn parse_array(input: &str) -> Result<Vec<SensorPackage>, WorkoutError> {
        Ok(serde_json::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_ndjson() {
        let input = r#"{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}

{"workout_type": "RUN", "data": [15000, 1, 75]}
"#;
        let packages = PackageReader::parse_ndjson(input).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].workout_type, "SWM");
        assert_eq!(packages[0].data, vec![720.0, 1.0, 80.0, 25.0, 40.0]);
        assert_eq!(packages[1], SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]));
    }

    #[test]
    fn test_parse_ndjson_reports_line() {
        let input = "{\"workout_type\": \"RUN\", \"data\": [15000, 1, 75]}\n{not json}\n";
        let err = PackageReader::parse_ndjson(input).unwrap_err();

        match err {
            WorkoutError::ParseError(msg) => assert!(msg.starts_with("line 2:")),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_array() {
        let input = r#"[
            {"workout_type": "WLK", "data": [9000, 1, 75, 180]},
            {"workout_type": "XYZ", "data": []}
        ]"#;
        let packages = PackageReader::parse_array(input).unwrap();

        assert_eq!(packages.len(), 2);
        assert_eq!(packages[0].data.len(), 4);
        assert_eq!(packages[1].workout_type, "XYZ");
    }

    #[test]
    fn test_parse_array_rejects_missing_data() {
        let err = PackageReader::parse_array(r#"[{"workout_type": "RUN"}]"#).unwrap_err();
        assert!(matches!(err, WorkoutError::JsonError(_)));
    }

    #[test]
    fn test_default_packages() {
        let packages = default_packages();
        let codes: Vec<&str> = packages
            .iter()
            .map(|p| p.workout_type.as_str())
            .collect();
        assert_eq!(codes, vec!["SWM", "RUN", "WLK"]);
    }
}
