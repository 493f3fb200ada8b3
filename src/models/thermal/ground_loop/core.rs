//! Hourly coupled heat pump / ground heat exchanger loop.
//!
//! The loop has two temperature nodes, the heat pump inlet and the ground
//! heat exchanger (GLHE) inlet. Each hour the heat pump moves its corrected
//! building load into the loop, setting the GLHE inlet, then the GLHE
//! exchanges heat with the ground, setting the next heat pump inlet. The
//! nodes travel between components as an explicit [`LoopState`] record.

mod building_loads;
mod glhe;
mod heat_pump;
mod loop_state;
mod results;
mod simulate;
mod sizing;

#[cfg(test)]
pub(crate) mod test_support;

pub use building_loads::{BuildingLoads, BuildingLoadsError, to_loop_perspective};
pub use glhe::{EffectivenessResponse, Glhe, GlheError, GlheInput, GlheOutput, GlheResponse};
pub use heat_pump::{HeatPump, HeatPumpError, HeatPumpInput, HeatPumpOutput, PartLoadCurve};
pub use loop_state::LoopState;
pub use results::{AnnualResults, GroundLoadSummary};
pub use simulate::{StepError, StepOutcome};
pub use sizing::{SizingError, size_mass_rate};

pub(crate) use simulate::{simulate, step};

/// Days in the simulated year.
pub const DAYS_PER_YEAR: usize = 365;

/// Hours in a day.
pub const HOURS_PER_DAY: usize = 24;

/// Number of hourly steps in one annual run.
pub const HOURS_PER_YEAR: usize = DAYS_PER_YEAR * HOURS_PER_DAY;
