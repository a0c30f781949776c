// ── Required-field validation ──
//
// Dispatches on the resolved mode to its static required-field table and
// reports the first empty attribute in declared order. Reporting is
// first-match: a spec missing several fields names only the earliest.

use tracing::debug;

use crate::error::ValidationError;
use crate::model::{ProvisioningField, ProvisioningNetwork, ProvisioningSpec};
use crate::resolve::{Resolution, resolve};

/// Check that every field `mode` requires is populated.
pub fn validate(
    spec: &ProvisioningSpec,
    mode: ProvisioningNetwork,
) -> Result<(), ValidationError> {
    match mode
        .required_fields()
        .iter()
        .copied()
        .find(|field| !spec.is_populated(*field))
    {
        Some(field) => Err(ValidationError::MissingRequiredField { field, mode }),
        None => Ok(()),
    }
}

/// Every required field that is empty, in declared order.
///
/// Diagnostic companion to [`validate`]; the verdict itself only ever
/// carries the first entry.
pub fn missing_fields(
    spec: &ProvisioningSpec,
    mode: ProvisioningNetwork,
) -> Vec<ProvisioningField> {
    mode.required_fields()
        .iter()
        .copied()
        .filter(|field| !spec.is_populated(*field))
        .collect()
}

/// Resolve the effective mode, then validate its required fields.
///
/// This is the entry point a controller calls before acting on a
/// provisioning configuration. On success the resolution is returned so
/// the caller can act on the mode without resolving twice.
pub fn validate_configuration(spec: &ProvisioningSpec) -> Result<Resolution, ValidationError> {
    let resolution = resolve(spec);
    debug!(mode = %resolution.mode, "final provisioning network");
    validate(spec, resolution.mode)?;
    Ok(resolution)
}
