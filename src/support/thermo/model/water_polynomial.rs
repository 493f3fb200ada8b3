//! Temperature-dependent specific heat of liquid water.
//!
//! `cp(T)` is a fourth-order polynomial fit to tabulated saturated-liquid
//! data between 0 °C and 100 °C:
//!
//! ```text
//! cp = 4216.72 − 2.94516·T + 7.57713e-2·T² − 7.83404e-4·T³ + 3.19862e-6·T⁴
//! ```
//!
//! with `T` in °C and `cp` in J/(kg·K). The fit reproduces the tables to
//! within 0.05 % over that range. Outside it the model refuses to answer.

use std::convert::Infallible;

use uom::si::{
    f64::{SpecificHeatCapacity, ThermodynamicTemperature},
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::thermo::{
    PropertyError, State,
    capability::{HasCp, StateFrom, ThermoModel},
    fluid::Water,
};

const COEFFICIENTS: [f64; 5] = [4216.72, -2.94516, 7.57713e-2, -7.83404e-4, 3.19862e-6];

const MIN_CELSIUS: f64 = 0.0;
const MAX_CELSIUS: f64 = 100.0;

/// Liquid-water model with a polynomial `cp(T)` correlation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WaterPolynomial;

impl ThermoModel for WaterPolynomial {
    type Fluid = Water;
}

impl HasCp for WaterPolynomial {
    fn cp(&self, state: &State<Water>) -> Result<SpecificHeatCapacity, PropertyError> {
        let t = state.temperature.get::<degree_celsius>();
        if !(MIN_CELSIUS..=MAX_CELSIUS).contains(&t) {
            return Err(PropertyError::OutOfDomain {
                context: format!(
                    "liquid water cp is fitted for {MIN_CELSIUS}..={MAX_CELSIUS} °C, got {t} °C"
                ),
            });
        }

        // Horner's rule, highest order first.
        let cp = COEFFICIENTS.iter().rev().fold(0.0, |acc, c| acc * t + c);
        Ok(SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(cp))
    }
}

impl StateFrom<(Water, ThermodynamicTemperature)> for WaterPolynomial {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature): (Water, ThermodynamicTemperature),
    ) -> Result<State<Water>, Self::Error> {
        Ok(State::new(temperature, fluid))
    }
}

impl StateFrom<ThermodynamicTemperature> for WaterPolynomial {
    type Error = Infallible;

    fn state_from(&self, temperature: ThermodynamicTemperature) -> Result<State<Water>, Self::Error> {
        self.state_from((Water, temperature))
    }
}
