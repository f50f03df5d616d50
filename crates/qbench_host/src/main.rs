mod plot;
mod report;
mod scenario;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plot::PlotStyle;
use scenario::{Scenario, Settings};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Render comparison charts from recorded simulator benchmarks")]
struct Cli {
    /// Directory the benchmark .dat paths are resolved against
    #[arg(long, global = true, default_value = ".")]
    data_dir: PathBuf,
    /// Directory the charts are written to
    #[arg(long, global = true, default_value = ".")]
    out_dir: PathBuf,
    #[arg(long, global = true, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,
    #[arg(long, global = true, default_value_t = 400, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Commands {
    /// ProjectQ vs Yao, single-qubit X, Y, Z
    Xyz,
    /// ProjectQ vs Yao, controlled X, Y, Z
    Cxyz,
    /// X, Y, Z applied to qubits 2-7
    Repeatxyz,
    /// X against repeated X scaled by the repetition count
    Comparer,
    /// H, CH and repeated H
    Hgate,
    /// Toffoli gate
    Toffoli,
    /// Rotation gates and their controlled forms
    Rot,
    /// Run every scenario in order
    All,
    /// List scenarios and their output files
    List,
}

impl Commands {
    fn scenario(&self) -> Option<Scenario> {
        match self {
            Commands::Xyz => Some(Scenario::Xyz),
            Commands::Cxyz => Some(Scenario::Cxyz),
            Commands::Repeatxyz => Some(Scenario::RepeatXyz),
            Commands::Comparer => Some(Scenario::CompareRepeat),
            Commands::Hgate => Some(Scenario::HGate),
            Commands::Toffoli => Some(Scenario::Toffoli),
            Commands::Rot => Some(Scenario::Rot),
            Commands::All | Commands::List => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings {
        data_dir: cli.data_dir,
        out_dir: cli.out_dir,
        style: PlotStyle {
            width: cli.width,
            height: cli.height,
        },
    };

    match cli.command {
        Commands::List => {
            for scenario in Scenario::ALL {
                println!("{:<10} {}", scenario.name(), scenario.config().output);
            }
        }
        Commands::All => {
            for scenario in Scenario::ALL {
                run(scenario, &settings)?;
            }
        }
        command => {
            if let Some(scenario) = command.scenario() {
                run(scenario, &settings)?;
            }
        }
    }
    Ok(())
}

fn run(scenario: Scenario, settings: &Settings) -> Result<()> {
    scenario
        .run(settings)
        .with_context(|| format!("Scenario {} failed", scenario.name()))?;
    Ok(())
}
