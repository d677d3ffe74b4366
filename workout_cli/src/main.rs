use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use workout_core::*;

#[derive(Parser)]
#[command(name = "workout")]
#[command(about = "Personal workout logging and summaries", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file location
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

/// Options shared by every exercise command
#[derive(Args)]
struct EntryArgs {
    /// Exercise name (e.g. "Running", "Bench Press")
    #[arg(long)]
    name: String,

    /// Date performed (YYYY-MM-DD, defaults to today)
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Print the entry as a workout script line instead of rendering it
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Log a cardio exercise
    Cardio {
        #[command(flatten)]
        entry: EntryArgs,

        /// Distance in miles
        #[arg(long, allow_negative_numbers = true)]
        distance: f64,

        /// Duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: f64,
    },

    /// Log a strength exercise
    Strength {
        #[command(flatten)]
        entry: EntryArgs,

        /// Weight in pounds
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Repetitions per set
        #[arg(long, allow_negative_numbers = true)]
        reps: i32,

        /// Number of sets
        #[arg(long, allow_negative_numbers = true)]
        sets: i32,
    },

    /// Log a flexibility exercise
    Flexibility {
        #[command(flatten)]
        entry: EntryArgs,

        /// Duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: f64,

        /// Intensity (low, medium, high); defaults to the configured intensity
        #[arg(long)]
        intensity: Option<String>,
    },

    /// Summarize a workout script
    Summary {
        /// Workout script (JSON Lines); defaults to the configured file
        file: Option<PathBuf>,

        /// Print totals as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the config file
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    workout_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) if path.exists() => Config::load_from(path)?,
        Some(path) => {
            tracing::warn!("Config file {:?} not found, using defaults", path);
            Config::default()
        }
        None => Config::load()?,
    };
    let config_path = cli.config.unwrap_or_else(Config::default_config_path);

    let clock = SystemClock;

    match cli.command {
        Commands::Cardio {
            entry,
            distance,
            duration,
        } => {
            let exercise =
                CardioExercise::new(entry.name, distance, duration, entry.date, &clock);
            print_entry(exercise.into(), entry.json)
        }
        Commands::Strength {
            entry,
            weight,
            reps,
            sets,
        } => {
            let exercise =
                StrengthExercise::new(entry.name, weight, reps, sets, entry.date, &clock);
            print_entry(exercise.into(), entry.json)
        }
        Commands::Flexibility {
            entry,
            duration,
            intensity,
        } => {
            let intensity = intensity
                .map(Intensity::from)
                .unwrap_or_else(|| config.defaults.intensity.clone());
            let exercise =
                FlexibilityExercise::new(entry.name, duration, intensity, entry.date, &clock);
            print_entry(exercise.into(), entry.json)
        }
        Commands::Summary { file, json } => {
            let path = file.unwrap_or_else(|| config.data.workout_file.clone());
            cmd_summary(&path, json, &config, &clock)
        }
        Commands::Config { write } => cmd_config(&config, &config_path, write),
    }
}

fn print_entry(record: ExerciseRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(&record)?);
    } else {
        println!("{}", record);
    }
    Ok(())
}

fn cmd_summary(path: &Path, json: bool, config: &Config, clock: &dyn Clock) -> Result<()> {
    let workout = load_workout(path, clock, &config.defaults.intensity)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&workout.totals())?);
    } else {
        println!("{}", workout.summary());
    }
    Ok(())
}

fn cmd_config(config: &Config, path: &Path, write: bool) -> Result<()> {
    if write {
        config.save_to(path)?;
        println!("✓ Wrote config to {}", path.display());
    } else {
        print!("{}", config.to_toml()?);
    }
    Ok(())
}
