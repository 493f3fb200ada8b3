//! Ground heat exchanger (GLHE) side of the loop.

use thiserror::Error;
use twine_core::Model;
use uom::si::{
    f64::{Power, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    hx::{CapacitanceRate, Effectiveness, HeatFlow, Stream},
    units::TemperatureDifference,
};

/// Parameters of the effectiveness-based ground response.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectivenessResponse {
    /// Undisturbed ground temperature.
    pub ground_temperature: ThermodynamicTemperature,
    /// Fraction of the loop-to-ground temperature difference realized.
    pub effectiveness: Effectiveness,
}

impl Default for EffectivenessResponse {
    /// 12 °C ground with an effectiveness of 0.7.
    fn default() -> Self {
        Self {
            ground_temperature: ThermodynamicTemperature::new::<degree_celsius>(12.0),
            effectiveness: Effectiveness::new(0.7).expect("0.7 lies in [0, 1]"),
        }
    }
}

/// How the ground heat exchanger responds to the loop.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GlheResponse {
    /// Ground load driven by the loop-to-ground temperature difference.
    ///
    /// `Q = ε·(T_hp_in − T_ground)·m_dot·cp`, where `T_hp_in` is the heat pump
    /// inlet temperature from the end of the previous hour, not the GLHE
    /// inlet the heat pump just produced. The response therefore lags the
    /// loop by one step and does not depend on the current hour's load.
    Effectiveness(EffectivenessResponse),

    /// Ground load equal to the heat pump's loop demand for the same hour.
    ///
    /// Assumes no storage or losses between the heat pump and the ground, so
    /// the heat pump inlet returns to its previous value every hour.
    #[default]
    LoadFollowing,
}

impl GlheResponse {
    /// Short label used in logs and reports.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Effectiveness(_) => "effectiveness",
            Self::LoadFollowing => "load-following",
        }
    }
}

/// Errors from a GLHE step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlheError {
    #[error("ground load is not finite")]
    NonFiniteGroundLoad,
}

/// Inputs to one GLHE step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlheInput {
    /// Heat pump inlet temperature at the end of the previous hour.
    pub heat_pump_inlet: ThermodynamicTemperature,
    /// GLHE inlet temperature just produced by the heat pump.
    pub glhe_inlet: ThermodynamicTemperature,
    /// Heat pump loop demand for this hour.
    pub loop_demand: Power,
    pub capacitance_rate: CapacitanceRate,
}

/// Result of one GLHE step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlheOutput {
    /// Heat passed from the loop to the ground this hour (negative when the
    /// ground supplies heat). This is the value recorded for sizing.
    pub ground_load: Power,
    /// The loop stream across the GLHE; its outlet is the next heat pump inlet.
    pub stream: Stream,
}

/// Ground heat exchanger with a response fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glhe {
    response: GlheResponse,
}

impl Glhe {
    #[must_use]
    pub fn new(response: GlheResponse) -> Self {
        Self { response }
    }

    #[must_use]
    pub fn response(&self) -> GlheResponse {
        self.response
    }

    /// Heat passed from the loop to the ground for the given inputs.
    #[must_use]
    pub fn ground_load(&self, input: &GlheInput) -> Power {
        match self.response {
            GlheResponse::Effectiveness(EffectivenessResponse {
                ground_temperature,
                effectiveness,
            }) => {
                let max_delta_t = input.heat_pump_inlet.minus(ground_temperature);
                let actual_delta_t = effectiveness.apply(max_delta_t);
                input.capacitance_rate.heat_rate(actual_delta_t)
            }
            GlheResponse::LoadFollowing => input.loop_demand,
        }
    }
}

impl Model for Glhe {
    type Input = GlheInput;
    type Output = GlheOutput;
    type Error = GlheError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let ground_load = self.ground_load(input);
        if !ground_load.is_finite() {
            return Err(GlheError::NonFiniteGroundLoad);
        }

        // Heat into the ground is heat out of the loop.
        let heat_flow = HeatFlow::from_signed(ground_load)
            .map_err(|_| GlheError::NonFiniteGroundLoad)?
            .reversed();

        Ok(GlheOutput {
            ground_load,
            stream: Stream::new_from_heat_flow(input.capacitance_rate, input.glhe_inlet, heat_flow),
        })
    }
}
