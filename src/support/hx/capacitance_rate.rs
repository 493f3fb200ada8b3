use std::ops::Deref;

use uom::si::f64::{MassRate, Power, SpecificHeatCapacity, TemperatureInterval, ThermalConductance};

use crate::support::constraint::{Constrained, ConstraintResult, StrictlyPositive};

/// Capacitance rate (`m_dot * c_p`) of the circulating loop fluid.
///
/// Every temperature change in the loop is a heat rate divided by this value,
/// so it must be strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CapacitanceRate(Constrained<ThermalConductance, StrictlyPositive>);

impl CapacitanceRate {
    /// Create a [`CapacitanceRate`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is not strictly positive.
    pub fn new<U>(value: f64) -> ConstraintResult<Self>
    where
        U: uom::si::thermal_conductance::Unit + uom::Conversion<f64, T = f64>,
    {
        Self::from_quantity(ThermalConductance::new::<U>(value))
    }

    /// Create a [`CapacitanceRate`] from a thermal-conductance quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity is not strictly positive.
    pub fn from_quantity(quantity: ThermalConductance) -> ConstraintResult<Self> {
        Ok(Self(StrictlyPositive::new(quantity)?))
    }

    /// Create a [`CapacitanceRate`] from a mass rate and specific heat.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the product is not strictly positive.
    pub fn from_mass_rate_and_specific_heat(
        mass_rate: MassRate,
        specific_heat: SpecificHeatCapacity,
    ) -> ConstraintResult<Self> {
        Self::from_quantity(mass_rate * specific_heat)
    }

    /// Temperature change produced by `heat_rate` flowing into the stream.
    #[must_use]
    pub fn temperature_change(&self, heat_rate: Power) -> TemperatureInterval {
        heat_rate / **self
    }

    /// Heat rate needed to change the stream temperature by `delta_t`.
    #[must_use]
    pub fn heat_rate(&self, delta_t: TemperatureInterval) -> Power {
        **self * delta_t
    }
}

impl Deref for CapacitanceRate {
    type Target = ThermalConductance;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
