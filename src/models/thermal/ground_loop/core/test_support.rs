use std::f64::consts::TAU;

use uom::si::{
    f64::{Power, SpecificHeatCapacity, ThermodynamicTemperature},
    power::watt,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::{BuildingLoads, HOURS_PER_YEAR};

pub(crate) fn celsius(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_celsius>(value)
}

/// Constant specific heat used by core tests.
pub(crate) fn cp() -> SpecificHeatCapacity {
    SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(4_180.0)
}

/// Loop-perspective loads, zero except at the listed `(hour, watts)` pairs.
pub(crate) fn loads_with(entries: &[(usize, f64)]) -> BuildingLoads {
    let mut loads = vec![Power::new::<watt>(0.0); HOURS_PER_YEAR];
    for &(hour, value) in entries {
        loads[hour] = Power::new::<watt>(value);
    }
    BuildingLoads::from_loop_perspective(loads).unwrap()
}

/// Loop-perspective loads that reject heat in summer and absorb it in winter.
pub(crate) fn seasonal_loads() -> BuildingLoads {
    let loads = (0..HOURS_PER_YEAR).map(|hour| {
        let phase = TAU * hour as f64 / HOURS_PER_YEAR as f64;
        Power::new::<watt>(-6_000.0 * phase.cos() + 1_000.0 * (TAU * hour as f64 / 24.0).sin())
    });
    BuildingLoads::from_loop_perspective(loads).unwrap()
}
