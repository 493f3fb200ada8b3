use uom::si::f64::ThermodynamicTemperature;

/// Fluid temperatures at the two nodes of the loop.
///
/// The heat pump reads `heat_pump_inlet` and produces `glhe_inlet`; the
/// ground heat exchanger reads both and produces the next `heat_pump_inlet`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopState {
    /// Temperature of the fluid entering the heat pump.
    pub heat_pump_inlet: ThermodynamicTemperature,
    /// Temperature of the fluid entering the ground heat exchanger.
    pub glhe_inlet: ThermodynamicTemperature,
}

impl LoopState {
    /// A loop at rest, with both nodes at the same temperature.
    #[must_use]
    pub fn uniform(temperature: ThermodynamicTemperature) -> Self {
        Self {
            heat_pump_inlet: temperature,
            glhe_inlet: temperature,
        }
    }
}
