//! Heat exchange bookkeeping for a single fluid stream.
//!
//! Both loop components move heat into or out of the same circulating
//! stream: the heat pump rejects or absorbs its corrected building load, and
//! the ground heat exchanger absorbs or rejects the ground load. Each is an
//! energy balance `Q = C·(T_out − T_in)` over the stream's
//! [`CapacitanceRate`] `C = m_dot·cp`.
//!
//! - [`CapacitanceRate`]: strictly positive `m_dot·cp`
//! - [`Effectiveness`]: exchanger effectiveness in `[0, 1]`
//! - [`HeatFlow`]: signed heat flow with an explicit direction
//! - [`Stream`]: inlet/outlet temperatures resolved from a heat flow
//!
//! # Example
//!
//! ```
//! use twine_ground_loop::support::constraint::ConstraintResult;
//! use twine_ground_loop::support::hx::{CapacitanceRate, HeatFlow, Stream};
//! use uom::si::{
//!     f64::{Power, ThermodynamicTemperature},
//!     power::watt,
//!     thermal_conductance::watt_per_kelvin,
//!     thermodynamic_temperature::degree_celsius,
//! };
//!
//! fn main() -> ConstraintResult<()> {
//!     let stream = Stream::new_from_heat_flow(
//!         CapacitanceRate::new::<watt_per_kelvin>(500.0)?,
//!         ThermodynamicTemperature::new::<degree_celsius>(25.0),
//!         HeatFlow::from_signed(Power::new::<watt>(-1_000.0))?,
//!     );
//!
//!     let outlet = stream.outlet_temperature.get::<degree_celsius>();
//!     assert!((outlet - 23.0).abs() < 1e-9);
//!     Ok(())
//! }
//! ```

mod capacitance_rate;
mod effectiveness;
mod flow;
mod stream;

pub use capacitance_rate::CapacitanceRate;
pub use effectiveness::Effectiveness;
pub use flow::HeatFlow;
pub use stream::Stream;
