use uom::si::f64::ThermodynamicTemperature;

/// The thermodynamic state of the loop fluid.
///
/// Loop water is treated as a liquid at a fixed pressure, so temperature is
/// the only state-defining property. The `Fluid` parameter is usually a
/// marker such as [`Water`](crate::support::thermo::fluid::Water), but it may
/// carry data (an antifreeze concentration, say) that a model needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State<Fluid> {
    pub temperature: ThermodynamicTemperature,
    pub fluid: Fluid,
}

impl<Fluid> State<Fluid> {
    /// Creates a new state with the given temperature and fluid.
    #[must_use]
    pub fn new(temperature: ThermodynamicTemperature, fluid: Fluid) -> Self {
        Self { temperature, fluid }
    }
}
