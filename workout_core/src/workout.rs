//! Workout aggregate: an ordered session of exercises and its totals.

use crate::clock::Clock;
use crate::journal::ScriptEntry;
use crate::types::fmt_real;
use crate::{Error, Exercise, ExerciseRecord, Intensity, Result};
use serde::Serialize;
use std::fmt;

/// Summary text for a workout with nothing in it
pub const EMPTY_SUMMARY: &str = "Empty workout - no exercises added.";

const SUMMARY_HEADER: &str = "=== Workout Summary ===";
const SUMMARY_RULE_WIDTH: usize = 40;

/// Aggregate statistics for a workout
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkoutTotals {
    pub count: usize,
    pub total_calories: f64,
    pub total_duration: f64,
}

/// A workout session.
///
/// Exercises are kept in insertion order; duplicates are allowed and nothing
/// is ever removed.
#[derive(Clone, Debug, Default)]
pub struct Workout {
    exercises: Vec<ExerciseRecord>,
}

impl Workout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an exercise
    pub fn add(&mut self, exercise: impl Into<ExerciseRecord>) {
        let exercise = exercise.into();
        tracing::debug!(
            "Adding {} exercise '{}' to workout",
            exercise.kind(),
            exercise.name()
        );
        self.exercises.push(exercise);
    }

    /// Append an exercise decoded from untyped JSON.
    ///
    /// A missing `date` is taken from `clock` and a missing flexibility
    /// `intensity` from `default_intensity`. Anything that does not decode as
    /// an exercise is rejected with `Error::TypeMismatch` and the workout is
    /// left untouched.
    pub fn add_value(
        &mut self,
        value: serde_json::Value,
        clock: &dyn Clock,
        default_intensity: &Intensity,
    ) -> Result<()> {
        let described = describe_value(&value);
        let entry: ScriptEntry = serde_json::from_value(value)
            .map_err(|e| Error::TypeMismatch(format!("got {}: {}", described, e)))?;
        self.add(entry.into_record(clock, default_intensity));
        Ok(())
    }

    /// Copy of the exercises in insertion order
    pub fn list(&self) -> Vec<ExerciseRecord> {
        self.exercises.clone()
    }

    /// Borrowing view of the exercises
    pub fn iter(&self) -> impl Iterator<Item = &ExerciseRecord> {
        self.exercises.iter()
    }

    pub fn count(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn total_calories(&self) -> f64 {
        self.exercises.iter().map(|e| e.calculate_calories()).sum()
    }

    /// Total minutes across all exercises
    pub fn total_duration(&self) -> f64 {
        self.exercises.iter().map(|e| e.get_duration()).sum()
    }

    pub fn totals(&self) -> WorkoutTotals {
        WorkoutTotals {
            count: self.count(),
            total_calories: self.total_calories(),
            total_duration: self.total_duration(),
        }
    }

    /// Multi-line report: one numbered line per exercise followed by totals.
    ///
    /// Duration is truncated to whole minutes in the totals line only.
    pub fn summary(&self) -> String {
        if self.exercises.is_empty() {
            return EMPTY_SUMMARY.to_string();
        }

        let mut lines = Vec::with_capacity(self.exercises.len() + 3);
        lines.push(SUMMARY_HEADER.to_string());
        for (i, exercise) in self.exercises.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, exercise));
        }
        lines.push("-".repeat(SUMMARY_RULE_WIDTH));
        lines.push(format!(
            "Total: {} calories, {} minutes",
            fmt_real(self.total_calories()),
            self.total_duration().trunc() as i64
        ));
        lines.join("\n")
    }
}

impl fmt::Display for Workout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

impl<E: Into<ExerciseRecord>> Extend<E> for Workout {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for exercise in iter {
            self.add(exercise);
        }
    }
}

/// Short description of a JSON value for error messages
fn describe_value(value: &serde_json::Value) -> String {
    use serde_json::Value;

    match value {
        Value::Null => "null".into(),
        Value::Bool(_) => "a boolean".into(),
        Value::Number(_) => "a number".into(),
        Value::String(_) => "a string".into(),
        Value::Array(_) => "an array".into(),
        Value::Object(map) => match map.get("type").and_then(Value::as_str) {
            Some(kind) => format!("an object of type '{}'", kind),
            None => "an untagged object".into(),
        },
    }
}
