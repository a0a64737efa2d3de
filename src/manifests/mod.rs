//! Builders for the manifests published to the OLM catalog

pub mod constants;
mod csv;
mod deployment;
mod icon;
mod install_strategy;
mod permissions;

pub use csv::*;
pub use deployment::*;
pub use icon::*;
pub use install_strategy::*;
pub use permissions::*;

use serde::Serialize;

use crate::error::Result;

/// Render a manifest as a YAML document
pub fn to_yaml<T: Serialize>(manifest: &T) -> Result<String> {
    Ok(serde_yaml::to_string(manifest)?)
}
