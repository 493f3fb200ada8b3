use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use super::core::{EffectivenessResponse, GlheResponse};

/// Configuration for an annual ground loop run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundLoopConfig {
    /// Temperature of both loop nodes before the first hour.
    ///
    /// Also the temperature at which the loop specific heat is evaluated.
    pub initial_loop_temperature: ThermodynamicTemperature,

    /// How the ground heat exchanger responds to the loop.
    pub response: GlheResponse,

    /// Loop temperature rise the peak load produces at the sized flow rate.
    pub design_temperature_rise: TemperatureInterval,
}

impl Default for GroundLoopConfig {
    fn default() -> Self {
        Self {
            initial_loop_temperature: ThermodynamicTemperature::new::<degree_celsius>(25.5),
            response: GlheResponse::LoadFollowing,
            design_temperature_rise: TemperatureInterval::new::<delta_kelvin>(20.0),
        }
    }
}

impl GroundLoopConfig {
    /// Load-following run starting from `initial_loop_temperature`.
    #[must_use]
    pub fn load_following(initial_loop_temperature: ThermodynamicTemperature) -> Self {
        Self {
            initial_loop_temperature,
            response: GlheResponse::LoadFollowing,
            ..Self::default()
        }
    }

    /// Effectiveness run with the default ground parameters.
    #[must_use]
    pub fn effectiveness(initial_loop_temperature: ThermodynamicTemperature) -> Self {
        Self {
            initial_loop_temperature,
            response: GlheResponse::Effectiveness(EffectivenessResponse::default()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_response(self, response: GlheResponse) -> Self {
        Self { response, ..self }
    }

    #[must_use]
    pub fn with_design_temperature_rise(self, design_temperature_rise: TemperatureInterval) -> Self {
        Self {
            design_temperature_rise,
            ..self
        }
    }
}
