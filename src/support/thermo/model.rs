//! Fluid property models.

pub mod incompressible;
pub mod water_polynomial;

pub use incompressible::Incompressible;
pub use water_polynomial::WaterPolynomial;
