//! Time marching over the annual load series.

use thiserror::Error;
use twine_core::Model;
use uom::si::f64::{MassRate, Power, SpecificHeatCapacity};

use crate::support::hx::CapacitanceRate;

use super::{
    AnnualResults, Glhe, GlheError, GlheInput, HOURS_PER_YEAR, HeatPump, HeatPumpError,
    HeatPumpInput, LoopState,
};

/// Errors from a single loop step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("heat pump step failed")]
    HeatPump(#[from] HeatPumpError),

    #[error("ground heat exchanger step failed at hour {hour}")]
    Glhe {
        hour: usize,
        #[source]
        source: GlheError,
    },
}

/// Loop state and heat rates after one hour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    pub state: LoopState,
    pub loop_demand: Power,
    pub ground_load: Power,
}

/// Advances the loop by one hour: heat pump first, then the GLHE.
///
/// The GLHE sees the previous hour's heat pump inlet together with the GLHE
/// inlet the heat pump has just produced.
pub(crate) fn step(
    heat_pump: &HeatPump,
    glhe: &Glhe,
    capacitance_rate: CapacitanceRate,
    hour: usize,
    state: LoopState,
) -> Result<StepOutcome, StepError> {
    let heat_pump_output = heat_pump.call(&HeatPumpInput {
        hour,
        heat_pump_inlet: state.heat_pump_inlet,
        capacitance_rate,
    })?;

    let state = LoopState {
        glhe_inlet: heat_pump_output.stream.outlet_temperature,
        ..state
    };

    let glhe_output = glhe
        .call(&GlheInput {
            heat_pump_inlet: state.heat_pump_inlet,
            glhe_inlet: state.glhe_inlet,
            loop_demand: heat_pump_output.loop_demand,
            capacitance_rate,
        })
        .map_err(|source| StepError::Glhe { hour, source })?;

    Ok(StepOutcome {
        state: LoopState {
            heat_pump_inlet: glhe_output.stream.outlet_temperature,
            ..state
        },
        loop_demand: heat_pump_output.loop_demand,
        ground_load: glhe_output.ground_load,
    })
}

/// Runs every hour of the year from `initial`, recording post-step values.
pub(crate) fn simulate(
    heat_pump: &HeatPump,
    glhe: &Glhe,
    specific_heat: SpecificHeatCapacity,
    mass_rate: MassRate,
    capacitance_rate: CapacitanceRate,
    initial: LoopState,
) -> Result<AnnualResults, StepError> {
    let mut results = AnnualResults {
        response: glhe.response(),
        specific_heat,
        mass_rate,
        heat_pump_inlet: Vec::with_capacity(HOURS_PER_YEAR),
        glhe_inlet: Vec::with_capacity(HOURS_PER_YEAR),
        loop_demand: Vec::with_capacity(HOURS_PER_YEAR),
        ground_loads: Vec::with_capacity(HOURS_PER_YEAR),
    };

    let mut state = initial;
    for hour in 0..HOURS_PER_YEAR {
        let outcome = step(heat_pump, glhe, capacitance_rate, hour, state)?;
        state = outcome.state;

        results.heat_pump_inlet.push(state.heat_pump_inlet);
        results.glhe_inlet.push(state.glhe_inlet);
        results.loop_demand.push(outcome.loop_demand);
        results.ground_loads.push(outcome.ground_load);
    }

    Ok(results)
}
