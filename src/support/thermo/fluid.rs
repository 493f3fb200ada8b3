//! Canonical fluid identifiers.
//!
//! A fluid type names a substance; each property model decides how that name
//! is interpreted (for example, through [`IncompressibleFluid`] constants).
//!
//! [`IncompressibleFluid`]: crate::support::thermo::model::incompressible::IncompressibleFluid

mod water;

pub use water::Water;
