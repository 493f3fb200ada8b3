//! Annual simulation of a ground-coupled heat pump loop.
//!
//! A heat pump serving a building is coupled through a closed water loop to
//! a ground heat exchanger (GLHE). Given a year of hourly building loads,
//! [`GroundLoop`] marches the loop one hour at a time and records the ground
//! loads and node temperatures that follow.
//!
//! # Example
//!
//! ```
//! use twine_core::Model;
//! use twine_ground_loop::{
//!     models::thermal::ground_loop::{BuildingLoads, GroundLoop, GroundLoopConfig, LoopState},
//!     support::thermo::model::WaterPolynomial,
//! };
//! use uom::si::{f64::{Power, ThermodynamicTemperature}, power::watt,
//!     thermodynamic_temperature::degree_celsius};
//!
//! let loads = BuildingLoads::constant(Power::new::<watt>(-1_000.0)).unwrap();
//! let t0 = ThermodynamicTemperature::new::<degree_celsius>(25.5);
//! let ground_loop =
//!     GroundLoop::new(GroundLoopConfig::load_following(t0), loads, &WaterPolynomial).unwrap();
//!
//! let results = ground_loop.call(&LoopState::uniform(t0)).unwrap();
//! assert_eq!(results.len(), 8760);
//! ```

mod comparison;
mod config;
mod core;
mod error;

pub use comparison::{ComparisonRow, ScenarioComparison};
pub use config::GroundLoopConfig;
pub use self::core::{
    AnnualResults, BuildingLoads, BuildingLoadsError, DAYS_PER_YEAR, EffectivenessResponse, Glhe,
    GlheError, GlheInput, GlheOutput, GlheResponse, GroundLoadSummary, HOURS_PER_DAY,
    HOURS_PER_YEAR, HeatPump, HeatPumpError, HeatPumpInput, HeatPumpOutput, LoopState,
    PartLoadCurve, SizingError, StepError, StepOutcome, size_mass_rate, to_loop_perspective,
};
pub use error::GroundLoopError;

use tracing::{debug, info};
use twine_core::Model;
use uom::si::{
    f64::{MassRate, SpecificHeatCapacity, ThermodynamicTemperature},
    mass_rate::kilogram_per_second,
    power::watt,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductance::watt_per_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    hx::CapacitanceRate,
    thermo::{
        capability::{HasCp, StateFrom},
        specific_heat_at,
    },
};

/// A heat pump, a GLHE, and the loop that joins them, sized and ready to run.
///
/// Sizing happens once, in [`GroundLoop::new`]: the loop specific heat is
/// evaluated at the initial loop temperature and the mass flow rate is chosen
/// so the peak load raises the loop by the design temperature rise.
///
/// As a [`Model`], the input is the loop state before the first hour and the
/// output is the full year of results.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundLoop {
    heat_pump: HeatPump,
    glhe: Glhe,
    initial_state: LoopState,
    specific_heat: SpecificHeatCapacity,
    mass_rate: MassRate,
    capacitance_rate: CapacitanceRate,
}

impl GroundLoop {
    /// Sizes a loop for the given loads.
    ///
    /// # Errors
    ///
    /// Returns [`GroundLoopError::SpecificHeat`] if `thermo` cannot evaluate
    /// `cp` at the initial loop temperature, or [`GroundLoopError::Sizing`]
    /// if the loads are identically zero or the sizing inputs are invalid.
    pub fn new<Thermo>(
        config: GroundLoopConfig,
        loads: BuildingLoads,
        thermo: &Thermo,
    ) -> Result<Self, GroundLoopError>
    where
        Thermo: HasCp + StateFrom<ThermodynamicTemperature>,
    {
        let specific_heat = specific_heat_at(thermo, config.initial_loop_temperature)
            .map_err(GroundLoopError::SpecificHeat)?;

        let peak_load = loads.peak();
        let mass_rate = size_mass_rate(peak_load, specific_heat, config.design_temperature_rise)?;
        let capacitance_rate =
            CapacitanceRate::from_mass_rate_and_specific_heat(mass_rate, specific_heat)
                .map_err(SizingError::CapacitanceRate)?;

        debug!(
            peak_load_w = peak_load.get::<watt>(),
            cp_j_per_kg_k = specific_heat.get::<joule_per_kilogram_kelvin>(),
            mass_rate_kg_per_s = mass_rate.get::<kilogram_per_second>(),
            capacitance_rate_w_per_k = capacitance_rate.get::<watt_per_kelvin>(),
            "sized ground loop"
        );

        Ok(Self {
            heat_pump: HeatPump::new(loads),
            glhe: Glhe::new(config.response),
            initial_state: LoopState::uniform(config.initial_loop_temperature),
            specific_heat,
            mass_rate,
            capacitance_rate,
        })
    }

    #[must_use]
    pub fn heat_pump(&self) -> &HeatPump {
        &self.heat_pump
    }

    #[must_use]
    pub fn glhe(&self) -> &Glhe {
        &self.glhe
    }

    /// Loop state before the first hour, as configured.
    #[must_use]
    pub fn initial_state(&self) -> LoopState {
        self.initial_state
    }

    #[must_use]
    pub fn specific_heat(&self) -> SpecificHeatCapacity {
        self.specific_heat
    }

    #[must_use]
    pub fn mass_rate(&self) -> MassRate {
        self.mass_rate
    }

    #[must_use]
    pub fn capacitance_rate(&self) -> CapacitanceRate {
        self.capacitance_rate
    }

    /// Advances `state` through a single hour.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] if `hour` is past the end of the year or a
    /// computed heat rate is not finite.
    pub fn step(&self, hour: usize, state: LoopState) -> Result<StepOutcome, StepError> {
        self::core::step(
            &self.heat_pump,
            &self.glhe,
            self.capacitance_rate,
            hour,
            state,
        )
    }

    /// Runs the full year from the configured initial state.
    ///
    /// # Errors
    ///
    /// Returns [`GroundLoopError::Step`] if any hour fails.
    pub fn simulate(&self) -> Result<AnnualResults, GroundLoopError> {
        self.call(&self.initial_state)
    }
}

impl Model for GroundLoop {
    type Input = LoopState;
    type Output = AnnualResults;
    type Error = GroundLoopError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let results = self::core::simulate(
            &self.heat_pump,
            &self.glhe,
            self.specific_heat,
            self.mass_rate,
            self.capacitance_rate,
            *input,
        )?;

        let summary = results.ground_load_summary();
        info!(
            response = self.glhe.response().label(),
            hours = results.len(),
            initial_heat_pump_inlet_c = input.heat_pump_inlet.get::<degree_celsius>(),
            peak_rejection_w = summary.peak_rejection.get::<watt>(),
            peak_extraction_w = summary.peak_extraction.get::<watt>(),
            "annual ground loop simulation complete"
        );

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        f64::TemperatureInterval,
        temperature_interval::kelvin as delta_kelvin,
    };

    use crate::support::{
        constraint::ConstraintError,
        thermo::{
            PropertyError,
            fluid::Water,
            model::{Incompressible, WaterPolynomial},
        },
    };
    use super::core::test_support::{celsius, loads_with, seasonal_loads};

    fn water() -> Incompressible<Water> {
        Incompressible::new().unwrap()
    }

    #[test]
    fn sizes_flow_from_peak_load() {
        let loads = loads_with(&[(10, -4_184.0), (20, 2_000.0)]);
        let ground_loop =
            GroundLoop::new(GroundLoopConfig::default(), loads, &water()).unwrap();

        assert_relative_eq!(
            ground_loop.mass_rate().get::<kilogram_per_second>(),
            4_184.0 / (4_184.0 * 20.0),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            ground_loop.capacitance_rate().get::<watt_per_kelvin>(),
            4_184.0 / 20.0,
            max_relative = 1e-12
        );
        assert_eq!(ground_loop.initial_state(), LoopState::uniform(celsius(25.5)));
    }

    #[test]
    fn specific_heat_comes_from_the_initial_temperature() {
        let loads = loads_with(&[(0, 1_000.0)]);
        let config = GroundLoopConfig::load_following(celsius(25.5));
        let ground_loop = GroundLoop::new(config, loads, &WaterPolynomial).unwrap();

        let t: f64 = 25.5;
        let expected = 4216.72 - 2.94516 * t + 7.57713e-2 * t.powi(2) - 7.83404e-4 * t.powi(3)
            + 3.19862e-6 * t.powi(4);
        assert_relative_eq!(
            ground_loop.specific_heat().get::<joule_per_kilogram_kelvin>(),
            expected,
            max_relative = 1e-9
        );
    }

    #[test]
    fn all_zero_loads_cannot_be_sized() {
        let result = GroundLoop::new(GroundLoopConfig::default(), loads_with(&[]), &water());
        assert_eq!(
            result,
            Err(GroundLoopError::Sizing(SizingError::PeakLoad(
                ConstraintError::Zero
            )))
        );
    }

    #[test]
    fn invalid_design_rise_is_a_sizing_error() {
        let config = GroundLoopConfig::default()
            .with_design_temperature_rise(TemperatureInterval::new::<delta_kelvin>(0.0));
        let result = GroundLoop::new(config, loads_with(&[(0, 1.0)]), &water());
        assert!(matches!(
            result,
            Err(GroundLoopError::Sizing(SizingError::DesignTemperatureRise(_)))
        ));
    }

    #[test]
    fn property_failure_is_reported() {
        let config = GroundLoopConfig::load_following(celsius(150.0));
        let result = GroundLoop::new(config, loads_with(&[(0, 1.0)]), &WaterPolynomial);
        assert!(matches!(
            result,
            Err(GroundLoopError::SpecificHeat(PropertyError::OutOfDomain { .. }))
        ));
    }

    #[test]
    fn load_following_holds_heat_pump_inlet() {
        let ground_loop = GroundLoop::new(
            GroundLoopConfig::load_following(celsius(25.5)),
            seasonal_loads(),
            &water(),
        )
        .unwrap();

        let results = ground_loop.simulate().unwrap();

        assert_eq!(results.len(), HOURS_PER_YEAR);
        assert_eq!(results.ground_loads, results.loop_demand);
        for &t in &results.heat_pump_inlet {
            assert_relative_eq!(t.get::<degree_celsius>(), 25.5, epsilon = 1e-9);
        }

        let c = ground_loop.capacitance_rate();
        for (hour, &glhe_inlet) in results.glhe_inlet.iter().enumerate() {
            let expected = 25.5 + results.loop_demand[hour].get::<watt>() / c.get::<watt_per_kelvin>();
            assert_relative_eq!(glhe_inlet.get::<degree_celsius>(), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn effectiveness_ground_load_lags_one_hour() {
        let ground_loop = GroundLoop::new(
            GroundLoopConfig::effectiveness(celsius(25.5)),
            seasonal_loads(),
            &water(),
        )
        .unwrap();

        let results = ground_loop.simulate().unwrap();
        let c = ground_loop.capacitance_rate().get::<watt_per_kelvin>();

        assert_relative_eq!(
            results.ground_loads[0].get::<watt>(),
            0.7 * (25.5 - 12.0) * c,
            max_relative = 1e-9
        );
        for hour in 1..HOURS_PER_YEAR {
            let previous = results.heat_pump_inlet[hour - 1].get::<degree_celsius>();
            assert_relative_eq!(
                results.ground_loads[hour].get::<watt>(),
                0.7 * (previous - 12.0) * c,
                max_relative = 1e-9,
                epsilon = 1e-6
            );
        }
    }

    #[test]
    fn runs_are_deterministic() {
        let ground_loop = GroundLoop::new(
            GroundLoopConfig::effectiveness(celsius(20.0)),
            seasonal_loads(),
            &water(),
        )
        .unwrap();

        assert_eq!(ground_loop.simulate(), ground_loop.simulate());
    }

    #[test]
    fn call_starts_from_the_given_state() {
        let loads = loads_with(&[(0, 500.0)]);
        let ground_loop = GroundLoop::new(GroundLoopConfig::default(), loads, &water()).unwrap();

        let results = ground_loop.call(&LoopState::uniform(celsius(5.0))).unwrap();

        assert_relative_eq!(
            results.heat_pump_inlet[HOURS_PER_YEAR - 1].get::<degree_celsius>(),
            5.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn single_step_matches_first_hour_of_a_run() {
        let ground_loop = GroundLoop::new(
            GroundLoopConfig::effectiveness(celsius(25.5)),
            seasonal_loads(),
            &water(),
        )
        .unwrap();

        let outcome = ground_loop.step(0, ground_loop.initial_state()).unwrap();
        let results = ground_loop.simulate().unwrap();

        assert_eq!(outcome.ground_load, results.ground_loads[0]);
        assert_eq!(outcome.state.heat_pump_inlet, results.heat_pump_inlet[0]);
        assert_eq!(outcome.state.glhe_inlet, results.glhe_inlet[0]);
    }
}
