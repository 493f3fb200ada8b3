use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use twine_ground_loop::{
    io::{load_file::read_building_loads_from_path, report::write_comparison_to_path},
    models::thermal::ground_loop::ScenarioComparison,
    support::thermo::{
        fluid::Water,
        model::{Incompressible, WaterPolynomial},
    },
};
use uom::si::{
    f64::ThermodynamicTemperature, power::watt, thermodynamic_temperature::degree_celsius,
};

/// Compare load-following and effectiveness ground responses over one year.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hourly building loads in watts, one value per line.
    #[arg(long, default_value = "building_loads.csv")]
    loads: PathBuf,

    /// Where to write the comparison report.
    #[arg(long, short, default_value = "outputs/outputs.csv")]
    output: PathBuf,

    /// Initial loop temperature in degrees Celsius.
    #[arg(long, default_value_t = 25.5)]
    initial_loop_temperature: f64,

    /// Use a constant water specific heat instead of the temperature correlation.
    #[arg(long, default_value_t = false)]
    constant_cp: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let loads = read_building_loads_from_path(&args.loads)
        .with_context(|| format!("reading loads from {}", args.loads.display()))?;
    let t0 = ThermodynamicTemperature::new::<degree_celsius>(args.initial_loop_temperature);

    let comparison = if args.constant_cp {
        ScenarioComparison::run(t0, &loads, &Incompressible::<Water>::new()?)
    } else {
        ScenarioComparison::run(t0, &loads, &WaterPolynomial)
    }
    .context("simulating ground loop")?;

    write_comparison_to_path(&args.output, &comparison)
        .with_context(|| format!("writing report to {}", args.output.display()))?;

    let (lf, eff) = (
        comparison.load_following.ground_load_summary(),
        comparison.effectiveness.ground_load_summary(),
    );
    info!(
        load_following_peak_rejection_w = lf.peak_rejection.get::<watt>(),
        load_following_peak_extraction_w = lf.peak_extraction.get::<watt>(),
        effectiveness_peak_rejection_w = eff.peak_rejection.get::<watt>(),
        effectiveness_peak_extraction_w = eff.peak_extraction.get::<watt>(),
        "done"
    );

    Ok(())
}
