//! Core domain types for the workout tracker.
//!
//! This module defines the exercise hierarchy:
//! - The `Exercise` capability every logged activity provides
//! - Cardio, strength and flexibility variants with their calorie rules
//! - `ExerciseRecord`, the tagged variant a workout stores

use crate::clock::Clock;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Calories burned per mile of cardio
const CARDIO_CALORIES_PER_MILE: f64 = 100.0;

/// Calories burned per pound lifted per rep
const STRENGTH_CALORIES_FACTOR: f64 = 0.05;

/// Flexibility calories per minute before the intensity multiplier
const FLEXIBILITY_CALORIES_PER_MINUTE: f64 = 2.5;

// ============================================================================
// Exercise capability
// ============================================================================

/// Behaviour shared by every logged activity.
///
/// Variants override the calculations that apply to them. The defaults
/// return zero, so a variant without a duration (strength) reports 0 minutes.
pub trait Exercise: fmt::Display {
    fn name(&self) -> &str;

    /// Day the exercise was performed
    fn date(&self) -> NaiveDate;

    /// Estimated calories burned
    fn calculate_calories(&self) -> f64 {
        0.0
    }

    /// Duration in minutes
    fn get_duration(&self) -> f64 {
        0.0
    }

    /// One-line human readable description
    fn render(&self) -> String {
        self.to_string()
    }
}

/// Format a real the way the tracker prints it.
///
/// Values from 1e-4 up to 1e16 keep a fractional part (`30.0`, `3.5`).
/// Outside that range the exponent is signed and at least two digits wide
/// (`1e+16`, `1e-05`).
pub(crate) fn fmt_real(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }

    let repr = format!("{:?}", value);
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => repr,
    }
}

// ============================================================================
// Intensity
// ============================================================================

/// Flexibility session intensity.
///
/// Parsing is case-insensitive. Unknown values are kept lower-cased so they
/// can still be displayed, and burn calories at the low rate.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Intensity {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl Intensity {
    /// Calorie multiplier applied to flexibility work
    pub fn multiplier(&self) -> f64 {
        match self {
            Intensity::Low => 1.0,
            Intensity::Medium => 1.5,
            Intensity::High => 2.0,
            Intensity::Other(_) => 1.0,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Intensity::Low => "low",
            Intensity::Medium => "medium",
            Intensity::High => "high",
            Intensity::Other(s) => s,
        }
    }
}

impl From<&str> for Intensity {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Intensity::Low,
            "medium" => Intensity::Medium,
            "high" => Intensity::High,
            other => Intensity::Other(other.to_string()),
        }
    }
}

impl From<String> for Intensity {
    fn from(s: String) -> Self {
        Intensity::from(s.as_str())
    }
}

impl From<Intensity> for String {
    fn from(intensity: Intensity) -> Self {
        intensity.as_str().to_string()
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Exercise variants
// ============================================================================

/// Distance-based cardio (running, cycling, swimming)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardioExercise {
    name: String,
    date: NaiveDate,
    /// Miles covered
    distance: f64,
    /// Minutes spent
    duration: f64,
}

impl CardioExercise {
    pub fn new(
        name: impl Into<String>,
        distance: f64,
        duration: f64,
        date: Option<NaiveDate>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            name: name.into(),
            date: clock.resolve(date),
            distance,
            duration,
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}

impl Exercise for CardioExercise {
    fn name(&self) -> &str {
        &self.name
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn calculate_calories(&self) -> f64 {
        self.distance * CARDIO_CALORIES_PER_MILE
    }

    fn get_duration(&self) -> f64 {
        self.duration
    }
}

impl fmt::Display for CardioExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} miles, {} min): {} calories",
            self.name,
            fmt_real(self.distance),
            fmt_real(self.duration),
            fmt_real(self.calculate_calories())
        )
    }
}

/// Weight training logged as weight x reps x sets.
///
/// Strength work carries no duration of its own; `get_duration` is 0.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrengthExercise {
    name: String,
    date: NaiveDate,
    /// Pounds lifted
    weight: f64,
    reps: i32,
    sets: i32,
}

impl StrengthExercise {
    pub fn new(
        name: impl Into<String>,
        weight: f64,
        reps: i32,
        sets: i32,
        date: Option<NaiveDate>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            name: name.into(),
            date: clock.resolve(date),
            weight,
            reps,
            sets,
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn reps(&self) -> i32 {
        self.reps
    }

    pub fn sets(&self) -> i32 {
        self.sets
    }
}

impl Exercise for StrengthExercise {
    fn name(&self) -> &str {
        &self.name
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn calculate_calories(&self) -> f64 {
        (self.weight * self.reps as f64 * self.sets as f64) * STRENGTH_CALORIES_FACTOR
    }
}

impl fmt::Display for StrengthExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} lbs, {} reps x {} sets): {} calories",
            self.name,
            fmt_real(self.weight),
            self.reps,
            self.sets,
            fmt_real(self.calculate_calories())
        )
    }
}

/// Stretching, yoga and mobility work
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlexibilityExercise {
    name: String,
    date: NaiveDate,
    /// Minutes spent
    duration: f64,
    #[serde(default)]
    intensity: Intensity,
}

impl FlexibilityExercise {
    pub fn new(
        name: impl Into<String>,
        duration: f64,
        intensity: impl Into<Intensity>,
        date: Option<NaiveDate>,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            name: name.into(),
            date: clock.resolve(date),
            duration,
            intensity: intensity.into(),
        }
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn intensity(&self) -> &Intensity {
        &self.intensity
    }
}

impl Exercise for FlexibilityExercise {
    fn name(&self) -> &str {
        &self.name
    }

    fn date(&self) -> NaiveDate {
        self.date
    }

    fn calculate_calories(&self) -> f64 {
        self.duration * FLEXIBILITY_CALORIES_PER_MINUTE * self.intensity.multiplier()
    }

    fn get_duration(&self) -> f64 {
        self.duration
    }
}

impl fmt::Display for FlexibilityExercise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} min, {} intensity): {} calories",
            self.name,
            fmt_real(self.duration),
            self.intensity,
            fmt_real(self.calculate_calories())
        )
    }
}

// ============================================================================
// Exercise record
// ============================================================================

/// Any logged exercise, tagged by variant
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ExerciseRecord {
    Cardio(CardioExercise),
    Strength(StrengthExercise),
    Flexibility(FlexibilityExercise),
}

impl ExerciseRecord {
    fn as_exercise(&self) -> &dyn Exercise {
        match self {
            ExerciseRecord::Cardio(e) => e,
            ExerciseRecord::Strength(e) => e,
            ExerciseRecord::Flexibility(e) => e,
        }
    }

    /// Variant name as used in workout scripts
    pub fn kind(&self) -> &'static str {
        match self {
            ExerciseRecord::Cardio(_) => "cardio",
            ExerciseRecord::Strength(_) => "strength",
            ExerciseRecord::Flexibility(_) => "flexibility",
        }
    }
}

impl Exercise for ExerciseRecord {
    fn name(&self) -> &str {
        self.as_exercise().name()
    }

    fn date(&self) -> NaiveDate {
        self.as_exercise().date()
    }

    fn calculate_calories(&self) -> f64 {
        self.as_exercise().calculate_calories()
    }

    fn get_duration(&self) -> f64 {
        self.as_exercise().get_duration()
    }
}

impl fmt::Display for ExerciseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_exercise(), f)
    }
}

impl From<CardioExercise> for ExerciseRecord {
    fn from(e: CardioExercise) -> Self {
        ExerciseRecord::Cardio(e)
    }
}

impl From<StrengthExercise> for ExerciseRecord {
    fn from(e: StrengthExercise) -> Self {
        ExerciseRecord::Strength(e)
    }
}

impl From<FlexibilityExercise> for ExerciseRecord {
    fn from(e: FlexibilityExercise) -> Self {
        ExerciseRecord::Flexibility(e)
    }
}
