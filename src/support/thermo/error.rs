use thiserror::Error;

/// Errors from evaluating a fluid property.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The state lies outside the range the model was fitted for.
    ///
    /// [`WaterPolynomial`](crate::support::thermo::model::WaterPolynomial)
    /// returns this below 0 °C or above 100 °C.
    #[error("out of domain: {context}")]
    OutOfDomain { context: String },

    /// A state could not be built from the given inputs.
    #[error("invalid state: {context}")]
    InvalidState { context: String },
}
