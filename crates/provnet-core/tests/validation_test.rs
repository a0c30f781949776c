#![allow(clippy::unwrap_used)]
// End-to-end checks for resolve → validate over realistic provisioning specs.

use pretty_assertions::assert_eq;
use serde_json::json;
use strum::IntoEnumIterator;

use provnet_core::{
    Provenance, ProvisioningField, ProvisioningNetwork, ProvisioningSpec, ValidationError,
    resolve, validate, validate_configuration,
};

// ── Helpers ─────────────────────────────────────────────────────────

fn managed_spec() -> ProvisioningSpec {
    ProvisioningSpec {
        provisioning_network: Some(ProvisioningNetwork::Managed),
        provisioning_dhcp_external: false,
        provisioning_interface: "enp1s0".into(),
        provisioning_ip: "172.22.0.3".into(),
        provisioning_network_cidr: "172.22.0.0/24".into(),
        provisioning_dhcp_range: "172.22.0.10,172.22.0.100".into(),
        provisioning_os_download_url: "http://172.22.0.1/images/rhcos-openstack.qcow2".into(),
    }
}

fn missing(field: ProvisioningField, mode: ProvisioningNetwork) -> ValidationError {
    ValidationError::MissingRequiredField { field, mode }
}

// ── Resolution ──────────────────────────────────────────────────────

#[test]
fn resolution_is_total() {
    let modes: Vec<_> = std::iter::once(None)
        .chain(ProvisioningNetwork::iter().map(Some))
        .collect();

    for mode in modes {
        for dhcp_external in [false, true] {
            let spec = ProvisioningSpec {
                provisioning_network: mode,
                provisioning_dhcp_external: dhcp_external,
                ..ProvisioningSpec::default()
            };
            let resolved = resolve(&spec).mode;
            assert!(ProvisioningNetwork::iter().any(|m| m == resolved));
            if let Some(explicit) = mode {
                assert_eq!(resolved, explicit);
            }
        }
    }
}

#[test]
fn legacy_flag_maps_to_unmanaged_or_managed() {
    let legacy = ProvisioningSpec {
        provisioning_dhcp_external: true,
        ..ProvisioningSpec::default()
    };
    assert_eq!(resolve(&legacy).mode, ProvisioningNetwork::Unmanaged);
    assert_eq!(resolve(&legacy).provenance, Provenance::LegacyFallback);

    let default = ProvisioningSpec::default();
    assert_eq!(resolve(&default).mode, ProvisioningNetwork::Managed);
    assert_eq!(resolve(&default).provenance, Provenance::Defaulted);
}

// ── Mode-specific requirements ──────────────────────────────────────

#[test]
fn managed_reports_interface_before_ip() {
    let spec = ProvisioningSpec {
        provisioning_interface: String::new(),
        provisioning_ip: String::new(),
        ..managed_spec()
    };

    assert_eq!(
        validate_configuration(&spec),
        Err(missing(ProvisioningField::Interface, ProvisioningNetwork::Managed))
    );
}

#[test]
fn managed_requires_dhcp_range() {
    let spec = ProvisioningSpec {
        provisioning_dhcp_range: String::new(),
        ..managed_spec()
    };

    let err = validate_configuration(&spec).unwrap_err();
    assert_eq!(err, missing(ProvisioningField::DhcpRange, ProvisioningNetwork::Managed));
    assert_eq!(err.to_string(), "ProvisioningDHCPRange is required but is empty");
}

#[test]
fn unmanaged_tolerates_empty_dhcp_range() {
    let spec = ProvisioningSpec {
        provisioning_network: Some(ProvisioningNetwork::Unmanaged),
        provisioning_dhcp_range: String::new(),
        ..managed_spec()
    };

    let resolution = validate_configuration(&spec).unwrap();
    assert_eq!(resolution.mode, ProvisioningNetwork::Unmanaged);
    assert_eq!(resolution.provenance, Provenance::Explicit);
}

#[test]
fn disabled_needs_only_ip_cidr_and_image_url() {
    let spec = ProvisioningSpec {
        provisioning_network: Some(ProvisioningNetwork::Disabled),
        provisioning_ip: "172.22.0.3".into(),
        provisioning_network_cidr: "172.22.0.0/24".into(),
        provisioning_os_download_url: "http://172.22.0.1/rhcos.qcow2".into(),
        ..ProvisioningSpec::default()
    };

    assert!(validate_configuration(&spec).is_ok());
    assert_eq!(
        validate(&spec, ProvisioningNetwork::Unmanaged),
        Err(missing(ProvisioningField::Interface, ProvisioningNetwork::Unmanaged))
    );
}

#[test]
fn fully_populated_spec_passes_each_explicit_mode() {
    for mode in ProvisioningNetwork::iter() {
        let spec = ProvisioningSpec {
            provisioning_network: Some(mode),
            ..managed_spec()
        };
        assert_eq!(validate_configuration(&spec).unwrap().mode, mode);
    }
}

// ── End to end ──────────────────────────────────────────────────────

#[test]
fn legacy_unmanaged_spec_reports_missing_interface() {
    let spec: ProvisioningSpec = serde_json::from_value(json!({
        "provisioning_network": "",
        "provisioning_dhcp_external": true,
        "provisioning_ip": "",
    }))
    .unwrap();

    let err = validate_configuration(&spec).unwrap_err();
    assert_eq!(err.mode(), ProvisioningNetwork::Unmanaged);
    assert_eq!(err.to_string(), "ProvisioningInterface is required but is empty");
}

#[test]
fn spec_validate_matches_entry_point() {
    let spec = ProvisioningSpec {
        provisioning_os_download_url: String::new(),
        ..managed_spec()
    };

    assert_eq!(spec.validate(), validate_configuration(&spec));
    assert_eq!(
        spec.validate().unwrap_err().field(),
        ProvisioningField::OsDownloadUrl
    );
}
