//! Provisioning network mode resolution and validation.
//!
//! A bare-metal provisioning network runs in one of three modes, and each
//! mode needs a different set of attributes filled in before anything can
//! be provisioned. This crate answers two questions about an in-memory
//! [`ProvisioningSpec`]:
//!
//! - **Which mode applies?** [`resolve()`] honours an explicit
//!   `provisioning_network`, otherwise falls back to the deprecated
//!   `provisioning_dhcp_external` flag, otherwise defaults to `Managed`. The
//!   returned [`Resolution`] records which of those paths was taken.
//!
//! - **Is the spec complete for that mode?** [`validate()`] walks the mode's
//!   static required-field table in order and reports the first empty one as
//!   a [`ValidationError`].
//!
//! [`validate_configuration()`] composes the two and is what a controller
//! calls before acting on the configuration. Nothing here performs I/O or
//! mutates the spec; diagnostics go through `tracing` and the caller owns
//! the subscriber.
//!
//! ```
//! use provnet_core::{ProvisioningNetwork, ProvisioningSpec, validate_configuration};
//!
//! let spec = ProvisioningSpec {
//!     provisioning_network: Some(ProvisioningNetwork::Disabled),
//!     provisioning_ip: "172.22.0.3".into(),
//!     provisioning_network_cidr: "172.22.0.0/24".into(),
//!     provisioning_os_download_url: "http://172.22.0.1/rhcos.qcow2".into(),
//!     ..ProvisioningSpec::default()
//! };
//!
//! let resolution = validate_configuration(&spec).expect("disabled mode is complete");
//! assert_eq!(resolution.mode, ProvisioningNetwork::Disabled);
//! ```

pub mod error;
pub mod model;
pub mod resolve;
pub mod validate;

// ── Primary re-exports ──────────────────────────────────────────────
pub use error::ValidationError;
pub use model::{ProvisioningField, ProvisioningNetwork, ProvisioningSpec};
pub use resolve::{Provenance, Resolution, resolve};
pub use validate::{missing_fields, validate, validate_configuration};
