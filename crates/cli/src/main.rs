#![deny(unsafe_code)]
//! CLI binary for gravity-field.
//!
//! Subcommands:
//! - `render` — sample a scenario's acceleration field, write a PNG contour plot
//! - `sample` — sample a scenario and print field statistics and probe values
//! - `list` — print available presets and palettes
//!
//! Logging goes through `env_logger`; set `RUST_LOG=debug` for details.

mod error;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use gravity_field_core::{DVec2, FieldSampler, Scenario};
use gravity_field_render::snapshot::write_png;
use gravity_field_render::{ContourMode, ContourStyle, Palette};
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "gravity-field",
    about = "Acceleration field around bodies in a co-rotating frame"
)]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

/// Where the bodies come from, plus sampling overrides.
#[derive(Args)]
struct SourceArgs {
    /// Built-in scenario name (earth-moon, sun-jupiter).
    #[arg(long, default_value = "earth-moon")]
    preset: String,

    /// JSON scenario file; takes the place of --preset.
    #[arg(long, conflicts_with = "preset")]
    scenario: Option<PathBuf>,

    /// Samples per axis (overrides the scenario).
    #[arg(short = 'n', long)]
    resolution: Option<usize>,

    /// Grid half-width as a multiple of the farthest body distance
    /// (overrides the scenario).
    #[arg(long)]
    limit: Option<f64>,
}

impl SourceArgs {
    fn load(&self) -> Result<Scenario, CliError> {
        let mut scenario = match &self.scenario {
            Some(path) => Scenario::load(path)?,
            None => Scenario::from_name(&self.preset)?,
        };
        if let Some(n) = self.resolution {
            scenario.resolution = n;
        }
        if let Some(limit) = self.limit {
            scenario.limit_factor = limit;
        }
        Ok(scenario)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Sample the field and write a PNG contour plot of its magnitude.
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Colour-scale ceiling divisor: ceiling = mean(|g|) / masking.
        #[arg(long)]
        masking: Option<f64>,

        /// Draw contour lines instead of filled bands.
        #[arg(long)]
        lines: bool,

        /// Number of contour bands (0 for a continuous scale).
        #[arg(long, default_value_t = gravity_field_render::contour::DEFAULT_LEVELS)]
        levels: usize,

        /// Palette name (viridis, plasma, ocean, monochrome).
        #[arg(short, long, default_value = "viridis")]
        palette: String,

        /// Output file path.
        #[arg(short, long, default_value = "field.png")]
        output: PathBuf,

        /// Plot label for the status line and JSON report (not drawn into
        /// the PNG).
        #[arg(long, default_value = "")]
        title: String,
    },
    /// Sample the field and print statistics, optionally probing points.
    Sample {
        #[command(flatten)]
        source: SourceArgs,

        /// Probe point "X,Y" in scenario units; repeatable.
        #[arg(long = "at", value_name = "X,Y")]
        at: Vec<String>,
    },
    /// List available presets and palettes.
    List,
}

/// Parses `"X,Y"` into a point.
fn parse_point(text: &str) -> Result<DVec2, CliError> {
    let bad = || CliError::Input(format!("invalid point {text:?}: expected X,Y"));
    let (x, y) = text.split_once(',').ok_or_else(bad)?;
    let x: f64 = x.trim().parse().map_err(|_| bad())?;
    let y: f64 = y.trim().parse().map_err(|_| bad())?;
    Ok(DVec2::new(x, y))
}

/// The `--title` text, or the scenario name when no title was given.
fn plot_label<'a>(title: &'a str, scenario: &'a Scenario) -> &'a str {
    if title.is_empty() {
        &scenario.name
    } else {
        title
    }
}

fn sample(scenario: &Scenario) -> Result<FieldSampler, CliError> {
    let started = Instant::now();
    let sampler = FieldSampler::from_scenario(scenario)?;
    log::info!(
        "sampled {n}x{n} field for '{}' in {:?}",
        scenario.name,
        started.elapsed(),
        n = scenario.resolution
    );
    Ok(sampler)
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::List => {
            let presets = Scenario::list_names();
            let palettes = Palette::list_names();
            if cli.json {
                let info = serde_json::json!({
                    "presets": presets,
                    "palettes": palettes,
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("Presets:");
                for name in presets {
                    println!("  {name}");
                }
                println!("Palettes:");
                println!("  {}", palettes.join(", "));
            }
        }
        Command::Render {
            source,
            masking,
            lines,
            levels,
            palette,
            output,
            title,
        } => {
            let mut scenario = source.load()?;
            if let Some(m) = masking {
                scenario.masking_factor = m;
            }
            scenario.validate()?;

            let palette = Palette::from_name(&palette)?;
            let style = ContourStyle {
                mode: if lines {
                    ContourMode::Lines
                } else {
                    ContourMode::Fill
                },
                masking_factor: scenario.masking_factor,
                levels,
            };

            let sampler = sample(&scenario)?;
            write_png(sampler.field(), &palette, &style, &output)?;

            if cli.json {
                let mut info = sampler.summary();
                info["title"] = plot_label(&title, &scenario).into();
                info["scenario"] = scenario.name.clone().into();
                info["masking_factor"] = scenario.masking_factor.into();
                info["output"] = output.display().to_string().into();
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} ({n}x{n}, extent {:e}) -> {}",
                    plot_label(&title, &scenario),
                    sampler.extent(),
                    output.display(),
                    n = scenario.resolution,
                );
            }
        }
        Command::Sample { source, at } => {
            let scenario = source.load()?;
            let probes = at
                .iter()
                .map(|s| parse_point(s))
                .collect::<Result<Vec<_>, _>>()?;

            let sampler = sample(&scenario)?;
            let config = sampler.config();
            let probed: Vec<(DVec2, DVec2)> = probes
                .iter()
                .map(|&p| (p, config.acceleration_at(p)))
                .collect();

            if cli.json {
                let mut info = sampler.summary();
                info["scenario"] = scenario.name.clone().into();
                info["probes"] = probed
                    .iter()
                    .map(|(p, a)| {
                        serde_json::json!({
                            "x": p.x,
                            "y": p.y,
                            "ax": a.x,
                            "ay": a.y,
                            "magnitude": a.length(),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                let summary = sampler.summary();
                println!("scenario:   {}", scenario.name);
                println!("resolution: {}", scenario.resolution);
                println!("extent:     {:e}", sampler.extent());
                println!("min |a|:    {}", summary["min_magnitude"]);
                println!("mean |a|:   {}", summary["mean_magnitude"]);
                println!("max |a|:    {}", summary["max_magnitude"]);
                println!("non-finite: {}", sampler.non_finite_count());
                for (p, a) in &probed {
                    println!(
                        "at ({:e}, {:e}): a = ({:e}, {:e}), |a| = {:e}",
                        p.x,
                        p.y,
                        a.x,
                        a.y,
                        a.length()
                    );
                }
            }
        }
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
