use thiserror::Error;

use crate::support::thermo::PropertyError;

use super::core::{SizingError, StepError};

/// Errors from building or running a [`super::GroundLoop`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GroundLoopError {
    #[error("failed to evaluate loop specific heat")]
    SpecificHeat(#[source] PropertyError),

    #[error("failed to size the loop flow rate")]
    Sizing(#[from] SizingError),

    #[error(transparent)]
    Step(#[from] StepError),
}
