//! fuzzifier-replay: offline driver for the Fuzzifier controller.
//!
//! Usage:
//!   fuzzifier-replay check --config config/threats_config.json
//!   fuzzifier-replay synthetic --seed 7 --frames 600 --output frames.jsonl
//!   fuzzifier-replay replay --input frames.jsonl --output controls.jsonl
//!   fuzzifier-replay tune --config config/threats_config.json --seed 3

mod logging;
mod synthetic;
mod tune;

use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fuzzifier_controller::{Controller, ControllerSettings};
use fuzzifier_core::config::FuzzyConfig;
use fuzzifier_core::enums::{AngleTerm, DistanceTerm};
use fuzzifier_core::records::GameFrame;
use fuzzifier_threat::ThreatFis;

use crate::synthetic::FieldSpec;

#[derive(Parser, Debug)]
#[command(name = "fuzzifier-replay")]
#[command(about = "Validate configs, replay recorded frames and nudge fuzzy breakpoints")]
struct Cli {
    /// Fuzzy threat configuration
    #[arg(long, global = true, default_value = "config/threats_config.json")]
    config: PathBuf,
    /// Controller settings JSON (defaults when omitted)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,
    /// Log per-tick decisions
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate the configuration and print the rule surface at the term peaks
    Check,
    /// Run recorded frames (one JSON frame per line) through the controller
    Replay {
        #[arg(long)]
        input: PathBuf,
        /// Write one JSON control tuple per line here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Generate a seeded synthetic frame file
    Synthetic {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 300)]
        frames: usize,
        #[arg(long, default_value_t = 12)]
        asteroids: usize,
        #[arg(long, default_value_t = 0)]
        mines: usize,
        #[arg(long, default_value_t = 180.0)]
        max_speed: f64,
        #[arg(long)]
        output: PathBuf,
    },
    /// Nudge one random breakpoint and write the configuration back
    Tune {
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Number of nudges to apply
        #[arg(long, default_value_t = 1)]
        steps: usize,
        /// Write here instead of overwriting the input configuration
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match &cli.command {
        Commands::Check => cmd_check(&cli.config),
        Commands::Replay { input, output } => {
            let settings = load_settings(cli.settings.as_deref())?;
            cmd_replay(&cli.config, settings, input, output.as_deref())
        }
        Commands::Synthetic {
            seed,
            frames,
            asteroids,
            mines,
            max_speed,
            output,
        } => {
            ensure!(*max_speed > 0.0, "--max-speed must be positive");
            let spec = FieldSpec {
                seed: *seed,
                frames: *frames,
                asteroids: *asteroids,
                mines: *mines,
                max_speed: *max_speed,
            };
            cmd_synthetic(&spec, output)
        }
        Commands::Tune {
            seed,
            steps,
            output,
        } => cmd_tune(&cli.config, *seed, *steps, output.as_deref()),
    }
}

fn load_settings(path: Option<&Path>) -> Result<ControllerSettings> {
    let Some(path) = path else {
        return Ok(ControllerSettings::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings {}", path.display()))?;
    ControllerSettings::from_json(&text)
        .with_context(|| format!("invalid settings {}", path.display()))
}

fn load_config(path: &Path) -> Result<FuzzyConfig> {
    FuzzyConfig::load(path).with_context(|| format!("invalid fuzzy config {}", path.display()))
}

fn cmd_check(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let fis = ThreatFis::new(config.clone());

    println!("{}: ok", config_path.display());
    print!("{:>8}", "");
    for angle in AngleTerm::ALL {
        print!("{:>10}", angle.name());
    }
    println!();
    for distance in DistanceTerm::ALL {
        print!("{:>8}", distance.name());
        let d = config.distance(distance)[1];
        for angle in AngleTerm::ALL {
            let a = config.angle(angle)[1];
            match fis.evaluate(d, a) {
                Some(score) => print!("{score:>10.3}"),
                None => print!("{:>10}", "-"),
            }
        }
        println!();
    }
    Ok(())
}

/// Parse a JSON-lines frame file, skipping blank lines.
fn read_frames(path: &Path) -> Result<Vec<GameFrame>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut frames = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.with_context(|| format!("failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: GameFrame = serde_json::from_str(&line)
            .with_context(|| format!("{}:{}: invalid frame", path.display(), number + 1))?;
        frames.push(frame);
    }
    Ok(frames)
}

/// Run frames through a fresh controller, writing one control tuple per line.
fn replay(
    controller: &mut Controller,
    frames: &[GameFrame],
    out: &mut impl Write,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();
    for frame in frames {
        let control = controller.actions(frame);
        summary.frames += 1;
        summary.shots += usize::from(control.fire);
        summary.thrusting += usize::from(control.thrust != 0.0);
        serde_json::to_writer(&mut *out, &control)?;
        writeln!(out)?;
    }
    Ok(summary)
}

#[derive(Debug, Default, PartialEq)]
struct ReplaySummary {
    frames: usize,
    shots: usize,
    thrusting: usize,
}

fn cmd_replay(
    config_path: &Path,
    settings: ControllerSettings,
    input: &Path,
    output: Option<&Path>,
) -> Result<()> {
    let config = load_config(config_path)?;
    let mut controller = Controller::new(config, settings)?;
    let frames = read_frames(input)?;

    let summary = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut writer = BufWriter::new(file);
            let summary = replay(&mut controller, &frames, &mut writer)?;
            writer.flush()?;
            summary
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            replay(&mut controller, &frames, &mut lock)?
        }
    };

    log::info!(
        "replayed {} frames: {} shots, {} ticks with thrust",
        summary.frames,
        summary.shots,
        summary.thrusting
    );
    Ok(())
}

fn cmd_synthetic(spec: &FieldSpec, output: &Path) -> Result<()> {
    let frames = synthetic::generate(spec);
    let file =
        File::create(output).with_context(|| format!("failed to create {}", output.display()))?;
    let mut writer = BufWriter::new(file);
    for frame in &frames {
        serde_json::to_writer(&mut writer, frame)?;
        writeln!(writer)?;
    }
    writer.flush()?;
    log::info!("wrote {} frames to {}", frames.len(), output.display());
    Ok(())
}

fn cmd_tune(config_path: &Path, seed: u64, steps: usize, output: Option<&Path>) -> Result<()> {
    let mut config = load_config(config_path)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    for _ in 0..steps {
        match tune::step(&mut config, &mut rng) {
            Some(step) => log::info!(
                "{}[{}]: {} -> {}",
                step.breakpoint.term,
                step.breakpoint.index,
                step.before,
                step.after
            ),
            None => log::warn!("no valid move found"),
        }
    }

    let target = output.unwrap_or(config_path);
    config
        .save(target)
        .with_context(|| format!("failed to write {}", target.display()))?;
    log::info!("saved {}", target.display());
    Ok(())
}
