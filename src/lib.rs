//! # Twine Ground Loop
//!
//! Annual simulation of a ground-coupled heat pump loop, built on
//! [Twine](https://github.com/isentropic-dev/twine) models.
//!
//! A year of hourly building loads drives a heat pump coupled through a water
//! loop to a ground heat exchanger. The resulting ground loads are the basis
//! for sizing the ground heat exchanger.
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`io`]: Load file reading and report writing.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Model-specific utility code starts in a model's internal `core` module and
//! moves to [`support`] once more than one model needs it.

pub mod io;
pub mod models;
pub mod support;
