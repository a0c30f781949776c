// ── Core error types ──
//
// Validation is a pure function over an in-memory snapshot, so there is
// exactly one way to fail: a required attribute is empty. Nothing here is
// transient and nothing is worth retrying.

use thiserror::Error;

use crate::model::{ProvisioningField, ProvisioningNetwork};

/// Verdict returned when a provisioning configuration is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// First required field (in the mode's declared order) found empty.
    #[error("{field} is required but is empty")]
    MissingRequiredField {
        field: ProvisioningField,
        /// Mode whose requirements were being checked.
        mode: ProvisioningNetwork,
    },
}

impl ValidationError {
    pub fn field(&self) -> ProvisioningField {
        match self {
            Self::MissingRequiredField { field, .. } => *field,
        }
    }

    pub fn mode(&self) -> ProvisioningNetwork {
        match self {
            Self::MissingRequiredField { mode, .. } => *mode,
        }
    }
}
