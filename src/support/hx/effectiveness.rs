use std::ops::Deref;

use uom::si::{
    f64::{Ratio, TemperatureInterval},
    ratio::ratio,
};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// The effectiveness of a heat exchanger.
///
/// The ratio of the heat actually transferred to the maximum the inlet
/// temperature difference allows. Must lie in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Effectiveness(Constrained<Ratio, UnitInterval>);

impl Effectiveness {
    /// Create an [`Effectiveness`] from a scalar value.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value lies outside the interval [0, 1].
    pub fn new(value: f64) -> ConstraintResult<Self> {
        Self::from_quantity(Ratio::new::<ratio>(value))
    }

    /// Create an [`Effectiveness`] from a ratio quantity.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the quantity lies outside the interval [0, 1].
    pub fn from_quantity(quantity: Ratio) -> ConstraintResult<Self> {
        Ok(Self(UnitInterval::new(quantity)?))
    }

    /// Scales the maximum possible temperature difference to the achieved one.
    #[must_use]
    pub fn apply(&self, max_delta_t: TemperatureInterval) -> TemperatureInterval {
        max_delta_t * self.get::<ratio>()
    }
}

impl Deref for Effectiveness {
    type Target = Ratio;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}
