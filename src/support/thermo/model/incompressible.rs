//! Liquid model with a constant specific heat.
//!
//! `Incompressible` is the simplest loop-fluid approximation: `cp` does not
//! vary with temperature. Over the 0–40 °C band a ground loop usually spans,
//! water's `cp` changes by well under one percent, so this model is a useful
//! reference against [`super::WaterPolynomial`].

use std::{convert::Infallible, marker::PhantomData};

use thiserror::Error;
use uom::si::f64::{SpecificHeatCapacity, ThermodynamicTemperature};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    thermo::{
        PropertyError, State,
        capability::{HasCp, StateFrom, ThermoModel},
    },
};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum IncompressibleParametersError {
    #[error("invalid cp: {cp:?}")]
    Cp { cp: SpecificHeatCapacity },
}

/// Constant parameters for the [`Incompressible`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IncompressibleParameters {
    pub cp: SpecificHeatCapacity,
}

impl IncompressibleParameters {
    #[must_use]
    pub fn new(cp: SpecificHeatCapacity) -> Self {
        Self { cp }
    }
}

/// Fluid constants required by the [`Incompressible`] model.
pub trait IncompressibleFluid {
    /// Returns the constant parameters for use with [`Incompressible`].
    fn parameters() -> IncompressibleParameters;
}

/// Liquid model with a constant specific heat.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Incompressible<Fluid> {
    cp: SpecificHeatCapacity,
    _marker: PhantomData<Fluid>,
}

impl<Fluid> ThermoModel for Incompressible<Fluid> {
    type Fluid = Fluid;
}

impl<Fluid> Incompressible<Fluid> {
    /// Creates a model using the constants defined by `Fluid`.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if `cp` is not strictly positive.
    pub fn new() -> Result<Self, IncompressibleParametersError>
    where
        Fluid: IncompressibleFluid,
    {
        Self::with_parameters(Fluid::parameters())
    }

    /// Creates a model from explicit parameters.
    ///
    /// # Errors
    ///
    /// Returns [`IncompressibleParametersError`] if `cp` is not strictly positive.
    pub fn with_parameters(
        parameters: IncompressibleParameters,
    ) -> Result<Self, IncompressibleParametersError> {
        let cp = parameters.cp;
        if StrictlyPositive::check(&cp.value).is_err() {
            return Err(IncompressibleParametersError::Cp { cp });
        }

        Ok(Self {
            cp,
            _marker: PhantomData,
        })
    }
}

impl<Fluid> HasCp for Incompressible<Fluid> {
    /// Returns the constant specific heat of the fluid.
    fn cp(&self, _state: &State<Fluid>) -> Result<SpecificHeatCapacity, PropertyError> {
        Ok(self.cp)
    }
}

impl<Fluid> StateFrom<(Fluid, ThermodynamicTemperature)> for Incompressible<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        (fluid, temperature): (Fluid, ThermodynamicTemperature),
    ) -> Result<State<Fluid>, Self::Error> {
        Ok(State::new(temperature, fluid))
    }
}

impl<Fluid: Default> StateFrom<ThermodynamicTemperature> for Incompressible<Fluid> {
    type Error = Infallible;

    fn state_from(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> Result<State<Fluid>, Self::Error> {
        self.state_from((Fluid::default(), temperature))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        specific_heat_capacity::{joule_per_kilogram_kelvin, kilojoule_per_kilogram_kelvin},
        thermodynamic_temperature::degree_celsius,
    };

    use crate::support::thermo::{fluid::Water, specific_heat_at};

    #[test]
    fn water_cp_is_constant() -> Result<(), PropertyError> {
        let thermo = Incompressible::<Water>::new().expect("water constants are valid");

        for t in [0.0, 12.0, 25.5, 60.0] {
            let cp = specific_heat_at(&thermo, ThermodynamicTemperature::new::<degree_celsius>(t))?;
            assert_relative_eq!(cp.get::<kilojoule_per_kilogram_kelvin>(), 4.184);
        }
        Ok(())
    }

    #[test]
    fn rejects_non_positive_cp() {
        let parameters = IncompressibleParameters::new(
            SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(0.0),
        );
        let result = Incompressible::<Water>::with_parameters(parameters);
        assert!(matches!(
            result,
            Err(IncompressibleParametersError::Cp { .. })
        ));
    }
}
