#![forbid(unsafe_code)]

//! Core domain model for the workout tracker.
//!
//! This crate provides:
//! - Exercise types (cardio, strength, flexibility) and their calorie rules
//! - The workout aggregate and its summary
//! - A clock for default dates
//! - Workout script loading, configuration and logging

pub mod types;
pub mod error;
pub mod clock;
pub mod workout;
pub mod journal;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use clock::{Clock, FixedClock, SystemClock};
pub use workout::{Workout, WorkoutTotals, EMPTY_SUMMARY};
pub use journal::{load_workout, read_workout};
pub use config::Config;
