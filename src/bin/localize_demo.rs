use anyhow::{Context, Result};
use clap::Parser;
use grid_localization::ScenarioConfig;
use std::io::Write;
use std::path::PathBuf;

/// Run the histogram localizer on one scenario and print the final belief
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scenario TOML file (defaults to the built-in reference scenario)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {} - {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let scenario = match &args.config {
        Some(path) => ScenarioConfig::load(path)
            .with_context(|| format!("Failed to load scenario {}", path.display()))?,
        None => {
            log::info!("Using built-in reference scenario");
            ScenarioConfig::default()
        }
    };

    log::info!(
        "Localizing over {} steps (prob_sensor_correct={}, prob_move={})",
        scenario.steps(),
        scenario.prob_sensor_correct,
        scenario.prob_move
    );

    let belief = scenario.run().context("Localization run failed")?;

    let (row, col) = belief.most_likely_cell();
    log::info!(
        "Most likely cell: ({}, {}) with p={:.5}",
        row,
        col,
        belief[(row, col)]
    );

    println!("{}", belief);
    Ok(())
}
