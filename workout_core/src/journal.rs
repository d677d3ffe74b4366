//! Workout scripts.
//!
//! A workout script is a JSON Lines file, one exercise entry per line:
//!
//! ```text
//! {"type": "cardio", "name": "Running", "distance": 3.5, "duration": 30}
//! {"type": "strength", "name": "Bench Press", "weight": 100, "reps": 10, "sets": 3, "date": "2024-01-15"}
//! {"type": "flexibility", "name": "Yoga", "duration": 20, "intensity": "high"}
//! ```
//!
//! Entries without a `date` are stamped by the supplied clock. Flexibility
//! entries without an `intensity` get the configured default.

use crate::clock::Clock;
use crate::{
    CardioExercise, Error, ExerciseRecord, FlexibilityExercise, Intensity, Result,
    StrengthExercise, Workout,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// One exercise entry; `date` and `intensity` may be left out
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ScriptEntry {
    Cardio {
        name: String,
        distance: f64,
        duration: f64,
        date: Option<NaiveDate>,
    },
    Strength {
        name: String,
        weight: f64,
        reps: i32,
        sets: i32,
        date: Option<NaiveDate>,
    },
    Flexibility {
        name: String,
        duration: f64,
        intensity: Option<String>,
        date: Option<NaiveDate>,
    },
}

impl ScriptEntry {
    pub(crate) fn into_record(
        self,
        clock: &dyn Clock,
        default_intensity: &Intensity,
    ) -> ExerciseRecord {
        match self {
            ScriptEntry::Cardio {
                name,
                distance,
                duration,
                date,
            } => CardioExercise::new(name, distance, duration, date, clock).into(),
            ScriptEntry::Strength {
                name,
                weight,
                reps,
                sets,
                date,
            } => StrengthExercise::new(name, weight, reps, sets, date, clock).into(),
            ScriptEntry::Flexibility {
                name,
                duration,
                intensity,
                date,
            } => {
                let intensity = intensity
                    .map(Intensity::from)
                    .unwrap_or_else(|| default_intensity.clone());
                FlexibilityExercise::new(name, duration, intensity, date, clock).into()
            }
        }
    }
}

/// Load a workout from a script file
pub fn load_workout(
    path: &Path,
    clock: &dyn Clock,
    default_intensity: &Intensity,
) -> Result<Workout> {
    let file = File::open(path)?;
    let workout = read_workout(BufReader::new(file), clock, default_intensity)?;
    tracing::info!(
        "Loaded {} exercises from {:?}",
        workout.count(),
        path
    );
    Ok(workout)
}

/// Read a workout from any line-oriented source.
///
/// Fails on the first bad line; no partial workout is returned.
pub fn read_workout(
    reader: impl BufRead,
    clock: &dyn Clock,
    default_intensity: &Intensity,
) -> Result<Workout> {
    let mut workout = Workout::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line_result.map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => Error::Journal {
                line: line_num,
                message: e.to_string(),
            },
            _ => Error::Io(e),
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let value: serde_json::Value =
            serde_json::from_str(&line).map_err(|e| Error::Journal {
                line: line_num,
                message: e.to_string(),
            })?;

        workout
            .add_value(value, clock, default_intensity)
            .map_err(|e| match e {
                Error::TypeMismatch(msg) => {
                    tracing::warn!("Line {} is not an exercise entry: {}", line_num, msg);
                    Error::TypeMismatch(format!("line {}: {}", line_num, msg))
                }
                other => other,
            })?;
    }

    Ok(workout)
}
