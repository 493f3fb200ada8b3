//! What a property model can do, expressed as traits.
//!
//! A model declares its fluid through [`ThermoModel`], builds states with
//! [`StateFrom`], and reports specific heat through [`HasCp`]. The ground
//! loop asks for nothing else, so any model implementing those two
//! capabilities can stand in for the built-in ones.

mod base;
mod properties;
mod state_from;

pub use base::ThermoModel;
pub use properties::HasCp;
pub use state_from::StateFrom;
