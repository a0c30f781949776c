// ── Provisioning network modes and required fields ──
//
// A provisioning network runs in exactly one of three modes. Each mode
// owns a fixed, ordered list of attributes that must be populated; the
// order is the order in which a missing field is reported.

use serde::{Deserialize, Deserializer, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

// ── ProvisioningNetwork ─────────────────────────────────────────────

/// Operating mode of the provisioning network.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    VariantNames,
)]
pub enum ProvisioningNetwork {
    /// We own the provisioning network, DHCP included.
    Managed,
    /// An external DHCP server hands out addresses; we still use the network.
    Unmanaged,
    /// No dedicated provisioning network (virtual media and friends).
    Disabled,
}

impl ProvisioningNetwork {
    /// Mode used when nothing is configured.
    pub const DEFAULT: Self = Self::Managed;

    /// Fields that must be non-empty in this mode, in reporting order.
    pub fn required_fields(self) -> &'static [ProvisioningField] {
        match self {
            Self::Managed => MANAGED_REQUIRED,
            Self::Unmanaged => UNMANAGED_REQUIRED,
            Self::Disabled => DISABLED_REQUIRED,
        }
    }

    /// Whether `field` is required in this mode.
    pub fn requires(self, field: ProvisioningField) -> bool {
        self.required_fields().contains(&field)
    }
}

// ── Required-field tables ───────────────────────────────────────────

const MANAGED_REQUIRED: &[ProvisioningField] = &[
    ProvisioningField::Interface,
    ProvisioningField::Ip,
    ProvisioningField::NetworkCidr,
    ProvisioningField::DhcpRange,
    ProvisioningField::OsDownloadUrl,
];

const UNMANAGED_REQUIRED: &[ProvisioningField] = &[
    ProvisioningField::Interface,
    ProvisioningField::Ip,
    ProvisioningField::NetworkCidr,
    ProvisioningField::OsDownloadUrl,
];

const DISABLED_REQUIRED: &[ProvisioningField] = &[
    ProvisioningField::Ip,
    ProvisioningField::NetworkCidr,
    ProvisioningField::OsDownloadUrl,
];

// ── ProvisioningField ───────────────────────────────────────────────

/// A string-valued provisioning attribute that a mode may require.
///
/// Displays as the attribute's canonical name (e.g. `ProvisioningIP`), which
/// is what operators see in validation errors.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum ProvisioningField {
    #[strum(serialize = "ProvisioningInterface")]
    #[serde(rename = "ProvisioningInterface")]
    Interface,

    #[strum(serialize = "ProvisioningIP")]
    #[serde(rename = "ProvisioningIP")]
    Ip,

    #[strum(serialize = "ProvisioningNetworkCIDR")]
    #[serde(rename = "ProvisioningNetworkCIDR")]
    NetworkCidr,

    #[strum(serialize = "ProvisioningDHCPRange")]
    #[serde(rename = "ProvisioningDHCPRange")]
    DhcpRange,

    #[strum(serialize = "ProvisioningOSDownloadURL")]
    #[serde(rename = "ProvisioningOSDownloadURL")]
    OsDownloadUrl,
}

impl ProvisioningField {
    pub fn name(self) -> &'static str {
        self.into()
    }
}

// ── Serde helpers ───────────────────────────────────────────────────

/// Deserialize an optional mode tag, treating `""` the same as absent.
///
/// Unknown tags are rejected rather than silently mapped to a default.
pub(crate) fn deserialize_optional_network<'de, D>(
    deserializer: D,
) -> Result<Option<ProvisioningNetwork>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(tag) => tag.parse().map(Some).map_err(|_| {
            serde::de::Error::unknown_variant(tag, ProvisioningNetwork::VARIANTS)
        }),
    }
}
