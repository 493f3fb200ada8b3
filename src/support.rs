//! Supporting utilities shared by models.
//!
//! - [`constraint`]: Checked numeric wrappers such as strictly positive values.
//! - [`hx`]: Heat exchange building blocks for a single fluid stream.
//! - [`thermo`]: Fluid property capabilities and models.
//! - [`units`]: Small extensions to `uom` quantities.

pub mod constraint;
pub mod hx;
pub mod thermo;
pub mod units;
