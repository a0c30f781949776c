// ── Provisioning configuration snapshot ──
//
// The flat record handed in by whatever loads configuration (a custom
// resource, a TOML file, ...). The core only ever reads it.

use serde::{Deserialize, Serialize};

use super::network::{ProvisioningField, ProvisioningNetwork, deserialize_optional_network};

/// Provisioning network settings as supplied by the caller.
///
/// String attributes are "populated" when non-empty; an empty string is
/// how the upstream resource encodes an unset value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_field_names)] // names follow the upstream resource attributes
pub struct ProvisioningSpec {
    /// Explicit mode. `None` means "not provided", which defers to
    /// `provisioning_dhcp_external`.
    #[serde(
        deserialize_with = "deserialize_optional_network",
        skip_serializing_if = "Option::is_none"
    )]
    pub provisioning_network: Option<ProvisioningNetwork>,

    /// Deprecated: `true` selects `Unmanaged` when no explicit mode is set.
    pub provisioning_dhcp_external: bool,

    /// NIC on the provisioning network (e.g. "enp1s0").
    pub provisioning_interface: String,

    /// Address the provisioning services listen on.
    pub provisioning_ip: String,

    /// CIDR of the provisioning network (e.g. "172.22.0.0/24").
    pub provisioning_network_cidr: String,

    /// DHCP pool as "start,end".
    pub provisioning_dhcp_range: String,

    /// Where the deploy ramdisk fetches the OS image from.
    pub provisioning_os_download_url: String,
}

impl ProvisioningSpec {
    /// Current value of a string attribute.
    pub fn field(&self, field: ProvisioningField) -> &str {
        match field {
            ProvisioningField::Interface => &self.provisioning_interface,
            ProvisioningField::Ip => &self.provisioning_ip,
            ProvisioningField::NetworkCidr => &self.provisioning_network_cidr,
            ProvisioningField::DhcpRange => &self.provisioning_dhcp_range,
            ProvisioningField::OsDownloadUrl => &self.provisioning_os_download_url,
        }
    }

    pub fn is_populated(&self, field: ProvisioningField) -> bool {
        !self.field(field).is_empty()
    }

    /// Resolve the effective mode and check its required fields.
    ///
    /// Shorthand for [`crate::validate_configuration`].
    pub fn validate(&self) -> Result<crate::Resolution, crate::ValidationError> {
        crate::validate_configuration(self)
    }
}
