//! Extensions to [`uom`].
//!
//! Every physical quantity in this crate is a [`uom`] quantity. Loop
//! temperatures are absolute ([`ThermodynamicTemperature`]), but the heat
//! pump and ground exchanger work with differences between them, which
//! [`uom`] does not produce by plain subtraction. [`TemperatureDifference`]
//! fills that gap.
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
