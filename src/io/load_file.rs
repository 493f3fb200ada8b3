//! Reader for hourly building load files.
//!
//! A load file has no header and one building-perspective load in watts per
//! line. Whitespace around a value is ignored. A line with more than one
//! field, or a blank line followed by more values, is an error; blank lines
//! after the last value are accepted. Values are converted to the loop
//! perspective on load.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use csv::{ReaderBuilder, Trim};
use thiserror::Error;
use tracing::debug;
use uom::si::{f64::Power, power::watt};

use crate::models::thermal::ground_loop::{BuildingLoads, BuildingLoadsError, HOURS_PER_YEAR};

/// Errors from reading a load file.
#[derive(Debug, Error)]
pub enum LoadFileError {
    #[error("failed to open load file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read load file")]
    Read(#[from] std::io::Error),

    #[error("malformed load file")]
    Csv(#[from] csv::Error),

    #[error("line {line}: {value:?} is not a single number")]
    Parse { line: u64, value: String },

    #[error("line {line}: load is not finite")]
    NonFinite { line: u64 },

    #[error("expected {expected} hourly loads, found {found}")]
    Count { expected: usize, found: usize },

    #[error(transparent)]
    Loads(#[from] BuildingLoadsError),
}

/// Reads building loads from any reader.
///
/// # Errors
///
/// Returns [`LoadFileError`] if a line does not hold exactly one finite
/// number, a blank line comes before the last value, or the file does not
/// hold exactly one value per hour of the year.
pub fn read_building_loads(mut reader: impl Read) -> Result<BuildingLoads, LoadFileError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;

    // The csv reader drops empty lines, so blank lines are located up front.
    let lines: Vec<&str> = contents.lines().collect();
    let last_value = lines.iter().rposition(|line| !line.trim().is_empty());
    if let Some(blank) = last_value
        .and_then(|last| lines[..last].iter().position(|line| line.trim().is_empty()))
    {
        return Err(LoadFileError::Parse {
            line: blank as u64 + 1,
            value: lines[blank].to_owned(),
        });
    }

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(contents.as_bytes());

    let mut loads = Vec::with_capacity(HOURS_PER_YEAR);
    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = index as u64 + 1;

        if record.len() > 1 {
            return Err(LoadFileError::Parse {
                line,
                value: record.iter().collect::<Vec<_>>().join(","),
            });
        }

        // Whitespace-only lines can only trail the last value here.
        let field = record.get(0).unwrap_or_default();
        if field.is_empty() {
            continue;
        }

        let value: f64 = field.parse().map_err(|_| LoadFileError::Parse {
            line,
            value: field.to_owned(),
        })?;
        if !value.is_finite() {
            return Err(LoadFileError::NonFinite { line });
        }

        loads.push(Power::new::<watt>(value));
    }

    if loads.len() != HOURS_PER_YEAR {
        return Err(LoadFileError::Count {
            expected: HOURS_PER_YEAR,
            found: loads.len(),
        });
    }

    debug!(hours = loads.len(), "read building loads");
    Ok(BuildingLoads::from_building_perspective(loads)?)
}

/// Reads building loads from the file at `path`.
///
/// # Errors
///
/// Returns [`LoadFileError::Open`] if the file cannot be opened, otherwise as
/// [`read_building_loads`].
pub fn read_building_loads_from_path(path: impl AsRef<Path>) -> Result<BuildingLoads, LoadFileError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadFileError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "opened load file");
    read_building_loads(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn year_of(value: &str) -> String {
        let mut contents = String::new();
        for _ in 0..HOURS_PER_YEAR {
            contents.push_str(value);
            contents.push('\n');
        }
        contents
    }

    #[test]
    fn negates_building_loads() {
        let mut contents = year_of("  1500.0 ");
        contents.replace_range(0..9, "-250.0   ");

        let loads = read_building_loads(contents.as_bytes()).unwrap();

        assert_eq!(loads.len(), HOURS_PER_YEAR);
        assert_relative_eq!(loads.get(0).unwrap().get::<watt>(), 250.0);
        assert_relative_eq!(loads.get(1).unwrap().get::<watt>(), -1_500.0);
    }

    #[test]
    fn ignores_trailing_blank_lines() {
        let contents = year_of("10") + "\n\n";
        assert!(read_building_loads(contents.as_bytes()).is_ok());

        let contents = year_of("10") + "   \n";
        assert!(read_building_loads(contents.as_bytes()).is_ok());
    }

    #[test]
    fn rejects_extra_fields() {
        let mut lines: Vec<String> = vec!["1000".to_owned(); HOURS_PER_YEAR];
        lines[5] = "1000,garbage".to_owned();
        let contents = lines.join("\n");

        assert!(matches!(
            read_building_loads(contents.as_bytes()),
            Err(LoadFileError::Parse { line: 6, ref value }) if value == "1000,garbage"
        ));
    }

    #[test]
    fn rejects_interior_blank_lines() {
        let mut lines: Vec<&str> = vec!["1000"; HOURS_PER_YEAR];
        lines.insert(100, "");
        let contents = lines.join("\n") + "\n";

        assert!(matches!(
            read_building_loads(contents.as_bytes()),
            Err(LoadFileError::Parse { line: 101, .. })
        ));

        let contents = format!("\n{}", year_of("1000"));
        assert!(matches!(
            read_building_loads(contents.as_bytes()),
            Err(LoadFileError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn rejects_a_short_year() {
        let contents = year_of("10");
        let short = &contents[..contents.len() - 3];

        assert!(matches!(
            read_building_loads(short.as_bytes()),
            Err(LoadFileError::Count {
                expected: HOURS_PER_YEAR,
                found,
            }) if found == HOURS_PER_YEAR - 1
        ));
    }

    #[test]
    fn reports_the_bad_line() {
        let contents = format!("1.0\n2.0\nabc\n{}", year_of("1.0"));

        assert!(matches!(
            read_building_loads(contents.as_bytes()),
            Err(LoadFileError::Parse { line: 3, ref value }) if value == "abc"
        ));
    }

    #[test]
    fn rejects_non_finite_values() {
        let contents = format!("1.0\nNaN\n{}", year_of("1.0"));

        assert!(matches!(
            read_building_loads(contents.as_bytes()),
            Err(LoadFileError::NonFinite { line: 2 })
        ));
    }

    #[test]
    fn missing_file_names_the_path() {
        let result = read_building_loads_from_path("does/not/exist.csv");
        assert!(matches!(
            result,
            Err(LoadFileError::Open { ref path, .. }) if path.ends_with("exist.csv")
        ));
    }
}
