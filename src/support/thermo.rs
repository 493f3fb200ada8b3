//! Fluid property modeling for the loop fluid.
//!
//! The loop only needs one property, the specific heat of the circulating
//! water at the initial loop temperature. It is still queried through the
//! capability traits in [`capability`] so the simulation stays generic over
//! the property model: [`model::WaterPolynomial`] for a temperature-dependent
//! correlation, [`model::Incompressible`] for a constant value, or any
//! caller-supplied model implementing [`capability::HasCp`] and
//! [`capability::StateFrom`].

mod error;
mod state;

pub mod capability;
pub mod fluid;
pub mod model;

pub use error::PropertyError;
pub use state::State;

use capability::{HasCp, StateFrom};
use uom::si::f64::{SpecificHeatCapacity, ThermodynamicTemperature};

/// Evaluates a model's specific heat at the given temperature.
///
/// Errors from state construction are reported as
/// [`PropertyError::InvalidState`].
///
/// # Errors
///
/// Returns [`PropertyError`] if the state cannot be built or `cp` cannot be
/// evaluated there.
pub fn specific_heat_at<Thermo>(
    thermo: &Thermo,
    temperature: ThermodynamicTemperature,
) -> Result<SpecificHeatCapacity, PropertyError>
where
    Thermo: HasCp + StateFrom<ThermodynamicTemperature>,
{
    let state = thermo
        .state_from(temperature)
        .map_err(|err| PropertyError::InvalidState {
            context: err.to_string(),
        })?;
    thermo.cp(&state)
}
