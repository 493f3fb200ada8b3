use uom::si::f64::{Power, ThermodynamicTemperature};

use crate::support::thermo::capability::{HasCp, StateFrom};

use super::{AnnualResults, BuildingLoads, GroundLoop, GroundLoopConfig, GroundLoopError};

/// Load-following and effectiveness runs of the same loads, side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioComparison {
    pub load_following: AnnualResults,
    pub effectiveness: AnnualResults,
}

/// One hour of a [`ScenarioComparison`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonRow {
    /// One-based hour of the year.
    pub index: usize,
    pub ground_load_load_following: Power,
    pub ground_load_effectiveness: Power,
    pub heat_pump_inlet_load_following: ThermodynamicTemperature,
    pub heat_pump_inlet_effectiveness: ThermodynamicTemperature,
    pub glhe_inlet_load_following: ThermodynamicTemperature,
    pub glhe_inlet_effectiveness: ThermodynamicTemperature,
}

impl ScenarioComparison {
    /// Runs both ground responses from the same initial loop temperature.
    ///
    /// Each run is sized independently, although both see the same loads
    /// and therefore the same flow rate.
    ///
    /// # Errors
    ///
    /// Returns [`GroundLoopError`] if either run fails.
    pub fn run<Thermo>(
        initial_loop_temperature: ThermodynamicTemperature,
        loads: &BuildingLoads,
        thermo: &Thermo,
    ) -> Result<Self, GroundLoopError>
    where
        Thermo: HasCp + StateFrom<ThermodynamicTemperature>,
    {
        let load_following = GroundLoop::new(
            GroundLoopConfig::load_following(initial_loop_temperature),
            loads.clone(),
            thermo,
        )?
        .simulate()?;

        let effectiveness = GroundLoop::new(
            GroundLoopConfig::effectiveness(initial_loop_temperature),
            loads.clone(),
            thermo,
        )?
        .simulate()?;

        Ok(Self {
            load_following,
            effectiveness,
        })
    }

    /// Hour-by-hour rows, stopping at the shorter of the two runs.
    pub fn rows(&self) -> impl Iterator<Item = ComparisonRow> + '_ {
        let hours = self.load_following.len().min(self.effectiveness.len());
        let (lf, eff) = (&self.load_following, &self.effectiveness);

        (0..hours).map(move |hour| ComparisonRow {
            index: hour + 1,
            ground_load_load_following: lf.ground_loads[hour],
            ground_load_effectiveness: eff.ground_loads[hour],
            heat_pump_inlet_load_following: lf.heat_pump_inlet[hour],
            heat_pump_inlet_effectiveness: eff.heat_pump_inlet[hour],
            glhe_inlet_load_following: lf.glhe_inlet[hour],
            glhe_inlet_effectiveness: eff.glhe_inlet[hour],
        })
    }
}
