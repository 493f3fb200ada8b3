use crate::support::thermo::State;

use super::ThermoModel;

/// Capability for constructing a [`State`] from a typed input.
///
/// Which inputs a model accepts is expressed at compile time: a model that
/// does not implement `StateFrom<Input>` simply cannot be asked for a state
/// from that input.
///
/// Liquid loop models implement both `StateFrom<(Fluid, ThermodynamicTemperature)>`
/// and, when `Fluid` is a marker type, the shorter
/// `StateFrom<ThermodynamicTemperature>`.
///
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<State<Self::Fluid>, Self::Error>;
}
