// ── Domain model ──

pub mod network;
pub mod spec;

pub use network::{ProvisioningField, ProvisioningNetwork};
pub use spec::ProvisioningSpec;
