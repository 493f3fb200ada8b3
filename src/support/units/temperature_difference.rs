use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Subtracts two absolute temperatures, yielding a [`TemperatureInterval`].
///
/// See [uom#380](https://github.com/iliekturtles/uom/issues/380) for why
/// `ThermodynamicTemperature - ThermodynamicTemperature` is not provided.
///
/// ```
/// use twine_ground_loop::support::units::TemperatureDifference;
/// use uom::si::{
///     f64::ThermodynamicTemperature,
///     temperature_interval::kelvin as delta_kelvin,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let loop_temp = ThermodynamicTemperature::new::<degree_celsius>(25.5);
/// let ground = ThermodynamicTemperature::new::<degree_celsius>(12.0);
/// let delta_t = loop_temp.minus(ground);
/// assert!((delta_t.get::<delta_kelvin>() - 13.5).abs() < 1e-9);
/// ```
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}
