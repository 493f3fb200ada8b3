use uom::si::{f64::SpecificHeatCapacity, specific_heat_capacity::kilojoule_per_kilogram_kelvin};

use crate::support::thermo::model::incompressible::{IncompressibleFluid, IncompressibleParameters};

/// Canonical identifier for liquid water, the default loop fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl IncompressibleFluid for Water {
    fn parameters() -> IncompressibleParameters {
        IncompressibleParameters::new(SpecificHeatCapacity::new::<
            kilojoule_per_kilogram_kelvin,
        >(4.184))
    }
}
