use uom::si::f64::ThermodynamicTemperature;

use super::{CapacitanceRate, HeatFlow};

/// A loop fluid stream passing through one component.
///
/// Assumes the fluid's specific heat is constant through the component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stream {
    /// Capacitance rate of the stream.
    pub capacitance_rate: CapacitanceRate,
    /// Temperature entering the component.
    pub inlet_temperature: ThermodynamicTemperature,
    /// Temperature leaving the component.
    pub outlet_temperature: ThermodynamicTemperature,
    /// Heat flow into (or out of) the stream.
    pub heat_flow: HeatFlow,
}

impl Stream {
    /// Resolves the outlet temperature from a known heat flow.
    ///
    /// Uses the energy balance `Q = C·(T_out − T_in)`.
    #[must_use]
    pub fn new_from_heat_flow(
        capacitance_rate: CapacitanceRate,
        inlet_temperature: ThermodynamicTemperature,
        heat_flow: HeatFlow,
    ) -> Self {
        let outlet_temperature = match heat_flow {
            HeatFlow::In(heat_rate) => {
                inlet_temperature + capacitance_rate.temperature_change(heat_rate.into_inner())
            }
            HeatFlow::Out(heat_rate) => {
                inlet_temperature - capacitance_rate.temperature_change(heat_rate.into_inner())
            }
            HeatFlow::None => inlet_temperature,
        };

        Self {
            capacitance_rate,
            inlet_temperature,
            outlet_temperature,
            heat_flow,
        }
    }
}
