//! CSV report of a [`ScenarioComparison`].
//!
//! Columns follow [`HEADER`]. `_no` columns come from the load-following run
//! and `_yes` columns from the effectiveness run. Ground loads are in watts
//! and temperatures in degrees Celsius.
//!
//! Values use the shortest round-trip `f64` formatting, with exponents in
//! Rust's style (`1e-5`, not `1e-05`). Temperatures are stored in kelvin and
//! converted back for the report, so their last digits may differ from a
//! Celsius value that never left Celsius.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use csv::WriterBuilder;
use thiserror::Error;
use tracing::info;
use uom::si::{power::watt, thermodynamic_temperature::degree_celsius};

use crate::models::thermal::ground_loop::ScenarioComparison;

/// Column names of the comparison report.
pub const HEADER: [&str; 7] = [
    "Index",
    "Q_ground_no",
    "Q_ground_yes",
    "HP_EFT_no",
    "HP_EFT_yes",
    "GHE_EFT_no",
    "GHE_EFT_yes",
];

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write report")]
    Io(#[from] std::io::Error),

    #[error("failed to write report")]
    Csv(#[from] csv::Error),

    #[error("runs differ in length: {load_following} and {effectiveness} hours")]
    Length {
        load_following: usize,
        effectiveness: usize,
    },
}

/// Writes the comparison to `writer`, one row per hour.
///
/// # Errors
///
/// Returns [`ReportError::Length`] if the two runs cover different numbers
/// of hours, or an I/O error from the writer.
pub fn write_comparison<W: Write>(
    writer: W,
    comparison: &ScenarioComparison,
) -> Result<(), ReportError> {
    let (load_following, effectiveness) = (
        comparison.load_following.len(),
        comparison.effectiveness.len(),
    );
    if load_following != effectiveness {
        return Err(ReportError::Length {
            load_following,
            effectiveness,
        });
    }

    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(HEADER)?;

    for row in comparison.rows() {
        writer.write_record([
            row.index.to_string(),
            format!("{:?}", row.ground_load_load_following.get::<watt>()),
            format!("{:?}", row.ground_load_effectiveness.get::<watt>()),
            format!(
                "{:?}",
                row.heat_pump_inlet_load_following.get::<degree_celsius>()
            ),
            format!(
                "{:?}",
                row.heat_pump_inlet_effectiveness.get::<degree_celsius>()
            ),
            format!("{:?}", row.glhe_inlet_load_following.get::<degree_celsius>()),
            format!("{:?}", row.glhe_inlet_effectiveness.get::<degree_celsius>()),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the comparison to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ReportError`] if the directory or file cannot be created or
/// written.
pub fn write_comparison_to_path(
    path: impl AsRef<Path>,
    comparison: &ScenarioComparison,
) -> Result<(), ReportError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    write_comparison(BufWriter::new(File::create(path)?), comparison)?;
    info!(path = %path.display(), "wrote comparison report");
    Ok(())
}
