use std::cmp::Ordering;

use uom::{ConstZero, si::f64::Power};

use crate::support::constraint::{Constrained, ConstraintError, StrictlyPositive};

/// Heat flow across the boundary of the loop fluid.
///
/// Directions follow the loop-perspective sign convention:
///
/// - `In`: heat enters the loop fluid (its temperature rises).
/// - `Out`: heat leaves the loop fluid (its temperature falls).
/// - `None`: no heat flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeatFlow {
    /// Heat flowing into the loop fluid.
    In(Constrained<Power, StrictlyPositive>),
    /// Heat flowing out of the loop fluid.
    Out(Constrained<Power, StrictlyPositive>),
    /// No heat flow occurs.
    None,
}

impl HeatFlow {
    /// Creates a [`HeatFlow::In`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat_rate` is not strictly positive.
    pub fn incoming(heat_rate: Power) -> Result<Self, ConstraintError> {
        Ok(Self::In(Constrained::new(heat_rate)?))
    }

    /// Creates a [`HeatFlow::Out`].
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `heat_rate` is not strictly positive.
    pub fn outgoing(heat_rate: Power) -> Result<Self, ConstraintError> {
        Ok(Self::Out(Constrained::new(heat_rate)?))
    }

    /// Classifies a signed heat rate, positive meaning into the loop.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::NotANumber`] for `NaN`.
    pub fn from_signed(heat_rate: Power) -> Result<Self, ConstraintError> {
        match heat_rate.partial_cmp(&Power::ZERO) {
            Some(Ordering::Greater) => Self::incoming(heat_rate),
            Some(Ordering::Less) => Self::outgoing(-heat_rate),
            Some(Ordering::Equal) => Ok(Self::None),
            None => Err(ConstraintError::NotANumber),
        }
    }

    /// Returns the same heat flow seen from the other side of the boundary.
    #[must_use]
    pub fn reversed(self) -> Self {
        match self {
            Self::In(heat_rate) => Self::Out(heat_rate),
            Self::Out(heat_rate) => Self::In(heat_rate),
            Self::None => Self::None,
        }
    }
}
