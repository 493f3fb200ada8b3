//! Heat pump side of the loop.
//!
//! The building load for an hour is corrected for the loop temperature the
//! heat pump actually sees, then added to (or removed from) the loop fluid.

use thiserror::Error;
use twine_core::Model;
use uom::{
    ConstZero,
    si::{
        f64::{Power, ThermodynamicTemperature},
        thermodynamic_temperature::degree_celsius,
    },
};

use crate::support::hx::{CapacitanceRate, HeatFlow, Stream};

use super::BuildingLoads;

/// Quadratic part-load correction in heat pump inlet temperature.
///
/// `factor(T) = c0 + c1·T + c2·T²` with `T` in °C. Multiplying a nominal
/// load by the factor gives the heat actually moved to or from the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartLoadCurve {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
}

impl PartLoadCurve {
    /// Curve for hours when the heat pump rejects heat into the loop.
    pub const REJECTION: Self = Self::new(1.09244, 0.000_314, 0.000_114);

    /// Curve for hours when the heat pump absorbs heat from the loop.
    pub const ABSORPTION: Self = Self::new(0.705_459, 0.005_447, -0.000_077);

    #[must_use]
    pub const fn new(c0: f64, c1: f64, c2: f64) -> Self {
        Self { c0, c1, c2 }
    }

    /// Evaluates the correction factor at the given inlet temperature.
    #[must_use]
    pub fn factor(&self, inlet: ThermodynamicTemperature) -> f64 {
        let t = inlet.get::<degree_celsius>();
        self.c0 + self.c1 * t + self.c2 * t.powi(2)
    }
}

/// Errors from a heat pump step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeatPumpError {
    #[error("hour {hour} is outside the {len}-hour load series")]
    HourOutOfRange { hour: usize, len: usize },

    #[error("loop demand at hour {hour} is not finite")]
    NonFiniteDemand { hour: usize },
}

/// Inputs to one heat pump step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPumpInput {
    pub hour: usize,
    pub heat_pump_inlet: ThermodynamicTemperature,
    pub capacitance_rate: CapacitanceRate,
}

/// Result of one heat pump step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatPumpOutput {
    /// Heat moved into the loop this hour (negative when absorbed).
    pub loop_demand: Power,
    /// The loop stream across the heat pump; its outlet is the GLHE inlet.
    pub stream: Stream,
}

/// Heat pump serving the building, coupled to the loop.
///
/// Holds the annual load series and the two part-load curves. The rejection
/// curve applies to strictly positive loads; zero and negative loads use the
/// absorption curve, so an idle hour yields zero demand.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatPump {
    loads: BuildingLoads,
    rejection: PartLoadCurve,
    absorption: PartLoadCurve,
}

impl HeatPump {
    /// Creates a heat pump with the standard part-load curves.
    #[must_use]
    pub fn new(loads: BuildingLoads) -> Self {
        Self::with_curves(loads, PartLoadCurve::REJECTION, PartLoadCurve::ABSORPTION)
    }

    #[must_use]
    pub fn with_curves(
        loads: BuildingLoads,
        rejection: PartLoadCurve,
        absorption: PartLoadCurve,
    ) -> Self {
        Self {
            loads,
            rejection,
            absorption,
        }
    }

    #[must_use]
    pub fn loads(&self) -> &BuildingLoads {
        &self.loads
    }

    /// Corrects a loop-perspective load for the heat pump inlet temperature.
    #[must_use]
    pub fn loop_demand(&self, load: Power, heat_pump_inlet: ThermodynamicTemperature) -> Power {
        let curve = if load > Power::ZERO {
            &self.rejection
        } else {
            &self.absorption
        };
        load * curve.factor(heat_pump_inlet)
    }
}

impl Model for HeatPump {
    type Input = HeatPumpInput;
    type Output = HeatPumpOutput;
    type Error = HeatPumpError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let hour = input.hour;
        let load = self.loads.get(hour).ok_or(HeatPumpError::HourOutOfRange {
            hour,
            len: self.loads.len(),
        })?;

        let loop_demand = self.loop_demand(load, input.heat_pump_inlet);
        if !loop_demand.is_finite() {
            return Err(HeatPumpError::NonFiniteDemand { hour });
        }

        let heat_flow = HeatFlow::from_signed(loop_demand)
            .map_err(|_| HeatPumpError::NonFiniteDemand { hour })?;

        Ok(HeatPumpOutput {
            loop_demand,
            stream: Stream::new_from_heat_flow(
                input.capacitance_rate,
                input.heat_pump_inlet,
                heat_flow,
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{power::watt, thermal_conductance::watt_per_kelvin};

    use crate::models::thermal::ground_loop::core::test_support::{celsius, loads_with};

    fn input(hour: usize, inlet_celsius: f64) -> HeatPumpInput {
        HeatPumpInput {
            hour,
            heat_pump_inlet: celsius(inlet_celsius),
            capacitance_rate: CapacitanceRate::new::<watt_per_kelvin>(500.0).unwrap(),
        }
    }

    #[test]
    fn curves_evaluate_in_celsius() {
        let t = celsius(25.5);
        assert_relative_eq!(
            PartLoadCurve::REJECTION.factor(t),
            1.09244 + 0.000314 * 25.5 + 0.000114 * 25.5 * 25.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            PartLoadCurve::ABSORPTION.factor(t),
            0.705459 + 0.005447 * 25.5 - 0.000077 * 25.5 * 25.5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn rejection_warms_the_loop() {
        let heat_pump = HeatPump::new(loads_with(&[(3, 2_000.0)]));

        let output = heat_pump.call(&input(3, 20.0)).unwrap();

        let factor = 1.09244 + 0.000314 * 20.0 + 0.000114 * 400.0;
        assert_relative_eq!(
            output.loop_demand.get::<watt>(),
            2_000.0 * factor,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            output.stream.outlet_temperature.get::<degree_celsius>(),
            20.0 + 2_000.0 * factor / 500.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn absorption_cools_the_loop() {
        let heat_pump = HeatPump::new(loads_with(&[(0, -1_500.0)]));

        let output = heat_pump.call(&input(0, 10.0)).unwrap();

        let factor = 0.705459 + 0.005447 * 10.0 - 0.000077 * 100.0;
        assert_relative_eq!(
            output.loop_demand.get::<watt>(),
            -1_500.0 * factor,
            max_relative = 1e-12
        );
        assert!(output.stream.outlet_temperature < output.stream.inlet_temperature);
    }

    #[test]
    fn zero_load_takes_absorption_branch() {
        let heat_pump = HeatPump::with_curves(
            loads_with(&[]),
            PartLoadCurve::new(f64::NAN, f64::NAN, f64::NAN),
            PartLoadCurve::ABSORPTION,
        );

        let output = heat_pump.call(&input(5, 25.5)).unwrap();

        assert_eq!(output.loop_demand, Power::ZERO);
        assert_eq!(output.stream.heat_flow, HeatFlow::None);
        assert_eq!(
            output.stream.outlet_temperature,
            output.stream.inlet_temperature
        );
    }

    #[test]
    fn hour_past_end_of_year_is_an_error() {
        let heat_pump = HeatPump::new(loads_with(&[]));
        let hour = heat_pump.loads().len();

        assert_eq!(
            heat_pump.call(&input(hour, 20.0)),
            Err(HeatPumpError::HourOutOfRange {
                hour,
                len: heat_pump.loads().len(),
            })
        );
    }

    #[test]
    fn non_finite_demand_is_an_error() {
        let heat_pump = HeatPump::with_curves(
            loads_with(&[(1, 1_000.0)]),
            PartLoadCurve::new(f64::INFINITY, 0.0, 0.0),
            PartLoadCurve::ABSORPTION,
        );

        assert_eq!(
            heat_pump.call(&input(1, 20.0)),
            Err(HeatPumpError::NonFiniteDemand { hour: 1 })
        );
    }
}
