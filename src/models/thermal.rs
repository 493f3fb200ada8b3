//! Thermal systems models.
//!
//! This module contains models for ground-coupled heat pump loops.

pub mod ground_loop;
