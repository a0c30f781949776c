// ── Mode resolution ──
//
// Picks the effective provisioning network mode from the explicit
// `provisioning_network` field, falling back to the deprecated
// `provisioning_dhcp_external` flag when no mode is set. Resolution is
// total: every spec maps to exactly one mode.

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::{debug, warn};

use crate::model::{ProvisioningNetwork, ProvisioningSpec};

/// How a [`Resolution`] arrived at its mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Provenance {
    /// `provisioning_network` was set.
    Explicit,
    /// Nothing was set; the system default applied.
    Defaulted,
    /// Mode came from the deprecated `provisioning_dhcp_external` flag.
    LegacyFallback,
}

/// The effective mode together with where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub mode: ProvisioningNetwork,
    pub provenance: Provenance,
}

impl Resolution {
    /// True when the caller still relies on `provisioning_dhcp_external`.
    pub fn uses_deprecated_fallback(self) -> bool {
        self.provenance == Provenance::LegacyFallback
    }
}

/// Compute the effective provisioning network mode.
///
/// Emits a debug event for every resolution and a warning when the
/// deprecated flag decided the outcome. Neither affects the result.
pub fn resolve(spec: &ProvisioningSpec) -> Resolution {
    let resolution = match spec.provisioning_network {
        Some(mode) => Resolution {
            mode,
            provenance: Provenance::Explicit,
        },
        None if spec.provisioning_dhcp_external => {
            debug!("ProvisioningNetwork not provided, using ProvisioningDHCPExternal to set it");
            warn!(
                "ProvisioningDHCPExternal is deprecated in favor of ProvisioningNetwork \
                 and will be removed in a future release"
            );
            Resolution {
                mode: ProvisioningNetwork::Unmanaged,
                provenance: Provenance::LegacyFallback,
            }
        }
        None => {
            debug!("ProvisioningNetwork not provided, defaulting");
            Resolution {
                mode: ProvisioningNetwork::DEFAULT,
                provenance: Provenance::Defaulted,
            }
        }
    };

    debug!(
        mode = %resolution.mode,
        provenance = %resolution.provenance,
        "resolved provisioning network mode"
    );
    resolution
}
