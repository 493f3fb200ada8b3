//! Public Twine models.
//!
//! Models are the primary public interface of this crate. They are grouped
//! by domain; everything here currently lives under [`thermal`].
//!
//! # Model structure
//!
//! Each model lives in its own module and keeps its computation in an
//! internal `core` submodule. The [`twine_core::Model`] implementation is a
//! thin adapter over that core, and only the types the adapter needs are
//! re-exported.

pub mod thermal;
