use thiserror::Error;
use uom::si::f64::{MassRate, Power, SpecificHeatCapacity, TemperatureInterval};

use crate::support::constraint::{ConstraintError, StrictlyPositive};

/// Errors raised while sizing the loop flow rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SizingError {
    #[error("peak building load must be strictly positive")]
    PeakLoad(#[source] ConstraintError),

    #[error("loop specific heat must be strictly positive")]
    SpecificHeat(#[source] ConstraintError),

    #[error("design temperature rise must be strictly positive")]
    DesignTemperatureRise(#[source] ConstraintError),

    #[error("loop capacitance rate must be strictly positive")]
    CapacitanceRate(#[source] ConstraintError),
}

/// Sizes the loop mass flow rate so the peak load produces the design rise.
///
/// `m_dot = peak / (cp · ΔT_design)`.
///
/// # Errors
///
/// Returns [`SizingError`] if any argument is zero, negative, or `NaN`. A
/// year with no load at all cannot size a flow rate.
pub fn size_mass_rate(
    peak_load: Power,
    specific_heat: SpecificHeatCapacity,
    design_temperature_rise: TemperatureInterval,
) -> Result<MassRate, SizingError> {
    let peak_load = StrictlyPositive::new(peak_load).map_err(SizingError::PeakLoad)?;
    let specific_heat = StrictlyPositive::new(specific_heat).map_err(SizingError::SpecificHeat)?;
    let design_temperature_rise = StrictlyPositive::new(design_temperature_rise)
        .map_err(SizingError::DesignTemperatureRise)?;

    Ok(peak_load.into_inner()
        / (specific_heat.into_inner() * design_temperature_rise.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        mass_rate::kilogram_per_second, power::watt,
        specific_heat_capacity::joule_per_kilogram_kelvin,
        temperature_interval::kelvin as delta_kelvin,
    };

    fn cp() -> SpecificHeatCapacity {
        SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4_180.0)
    }

    fn rise() -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(20.0)
    }

    #[test]
    fn peak_over_cp_times_rise() {
        let m_dot = size_mass_rate(Power::new::<watt>(8_360.0), cp(), rise()).unwrap();
        assert_relative_eq!(m_dot.get::<kilogram_per_second>(), 0.1, max_relative = 1e-12);
    }

    #[test]
    fn rejects_degenerate_inputs() {
        assert_eq!(
            size_mass_rate(Power::new::<watt>(0.0), cp(), rise()),
            Err(SizingError::PeakLoad(ConstraintError::Zero))
        );
        assert_eq!(
            size_mass_rate(
                Power::new::<watt>(1_000.0),
                SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(0.0),
                rise()
            ),
            Err(SizingError::SpecificHeat(ConstraintError::Zero))
        );
        assert_eq!(
            size_mass_rate(
                Power::new::<watt>(1_000.0),
                cp(),
                TemperatureInterval::new::<delta_kelvin>(-5.0)
            ),
            Err(SizingError::DesignTemperatureRise(ConstraintError::Negative))
        );
        assert!(matches!(
            size_mass_rate(
                Power::new::<watt>(1_000.0),
                SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(f64::NAN),
                rise()
            ),
            Err(SizingError::SpecificHeat(ConstraintError::NotANumber))
        ));
    }
}
