use thiserror::Error;
use uom::{ConstZero, si::f64::Power};

use super::HOURS_PER_YEAR;

/// Converts a building-perspective load to the loop perspective.
///
/// Load files state what the building needs: positive for heat the building
/// must receive. The loop sees the opposite side of the heat pump, where a
/// positive value is heat rejected into the loop fluid, so the sign flips.
#[must_use]
pub fn to_loop_perspective(building_load: Power) -> Power {
    -building_load
}

/// Errors raised when assembling an annual load series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildingLoadsError {
    #[error("expected {expected} hourly loads, found {found}")]
    Count { expected: usize, found: usize },

    #[error("load at hour {hour} is not finite")]
    NonFinite { hour: usize },
}

/// One year of hourly heat pump loads in the loop-perspective convention.
///
/// Always holds exactly [`HOURS_PER_YEAR`] finite values. Positive entries
/// are heat the heat pump rejects into the loop; negative entries are heat it
/// absorbs from the loop.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingLoads(Vec<Power>);

impl BuildingLoads {
    /// Builds the series from building-perspective loads, as stored in load files.
    ///
    /// Each value passes through [`to_loop_perspective`].
    ///
    /// # Errors
    ///
    /// Returns [`BuildingLoadsError`] if the count is not [`HOURS_PER_YEAR`]
    /// or any value is not finite.
    pub fn from_building_perspective(
        loads: impl IntoIterator<Item = Power>,
    ) -> Result<Self, BuildingLoadsError> {
        Self::from_loop_perspective(loads.into_iter().map(to_loop_perspective))
    }

    /// Builds the series from loads already in the loop-perspective convention.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingLoadsError`] if the count is not [`HOURS_PER_YEAR`]
    /// or any value is not finite.
    pub fn from_loop_perspective(
        loads: impl IntoIterator<Item = Power>,
    ) -> Result<Self, BuildingLoadsError> {
        let loads: Vec<Power> = loads.into_iter().collect();

        if loads.len() != HOURS_PER_YEAR {
            return Err(BuildingLoadsError::Count {
                expected: HOURS_PER_YEAR,
                found: loads.len(),
            });
        }

        if let Some(hour) = loads.iter().position(|load| !load.is_finite()) {
            return Err(BuildingLoadsError::NonFinite { hour });
        }

        Ok(Self(loads))
    }

    /// A year with the same loop-perspective load every hour.
    ///
    /// # Errors
    ///
    /// Returns [`BuildingLoadsError::NonFinite`] if `load` is not finite.
    pub fn constant(load: Power) -> Result<Self, BuildingLoadsError> {
        Self::from_loop_perspective(std::iter::repeat_n(load, HOURS_PER_YEAR))
    }

    /// Returns the load for `hour`, or `None` past the end of the year.
    #[must_use]
    pub fn get(&self, hour: usize) -> Option<Power> {
        self.0.get(hour).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest load magnitude over the year, the basis for flow sizing.
    #[must_use]
    pub fn peak(&self) -> Power {
        self.0
            .iter()
            .map(|load| load.abs())
            .fold(Power::ZERO, |peak, load| if load > peak { load } else { peak })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::power::watt;

    fn watts(value: f64) -> Power {
        Power::new::<watt>(value)
    }

    #[test]
    fn building_perspective_is_negated() {
        assert_eq!(to_loop_perspective(watts(1_500.0)), watts(-1_500.0));
        assert_eq!(to_loop_perspective(watts(-250.0)), watts(250.0));

        let raw = (0..HOURS_PER_YEAR).map(|hour| watts(hour as f64));
        let loads = BuildingLoads::from_building_perspective(raw).unwrap();

        assert_eq!(loads.get(0), Some(watts(-0.0)));
        assert_eq!(loads.get(10), Some(watts(-10.0)));
        assert_eq!(loads.get(HOURS_PER_YEAR), None);
    }

    #[test]
    fn requires_a_full_year() {
        let short = BuildingLoads::from_loop_perspective(vec![watts(1.0); HOURS_PER_YEAR - 1]);
        assert_eq!(
            short,
            Err(BuildingLoadsError::Count {
                expected: HOURS_PER_YEAR,
                found: HOURS_PER_YEAR - 1,
            })
        );

        let long = BuildingLoads::from_loop_perspective(vec![watts(1.0); HOURS_PER_YEAR + 1]);
        assert!(matches!(long, Err(BuildingLoadsError::Count { .. })));
    }

    #[test]
    fn rejects_non_finite_loads() {
        let mut raw = vec![watts(1.0); HOURS_PER_YEAR];
        raw[42] = watts(f64::NAN);
        assert_eq!(
            BuildingLoads::from_loop_perspective(raw),
            Err(BuildingLoadsError::NonFinite { hour: 42 })
        );

        assert!(BuildingLoads::constant(watts(f64::INFINITY)).is_err());
    }

    #[test]
    fn peak_is_largest_magnitude() {
        let mut raw = vec![watts(100.0); HOURS_PER_YEAR];
        raw[7] = watts(-4_200.0);
        raw[8] = watts(3_900.0);
        let loads = BuildingLoads::from_loop_perspective(raw).unwrap();

        assert_relative_eq!(loads.peak().get::<watt>(), 4_200.0);
        assert_eq!(loads.len(), HOURS_PER_YEAR);
        assert!(!loads.is_empty());
    }
}
