/// Base trait for every fluid property model.
///
/// Names the fluid type the model describes, which fixes the `Fluid`
/// parameter of the [`State`](crate::support::thermo::State) values it
/// accepts and produces.
pub trait ThermoModel {
    type Fluid;
}
