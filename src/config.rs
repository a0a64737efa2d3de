//! Generator configuration
//!
//! Inputs are read from environment variables so the generator can run in
//! a release pipeline without arguments.

use semver::Version;
use tracing::info;

use crate::error::{Error, Result};
use crate::manifests::{CsvParams, PullPolicy};

pub const ENV_NAME: &str = "CSV_NAME";
pub const ENV_NAMESPACE: &str = "CSV_NAMESPACE";
pub const ENV_DISPLAY_NAME: &str = "CSV_DISPLAY_NAME";
pub const ENV_DESCRIPTION: &str = "CSV_DESCRIPTION";
pub const ENV_IMAGE: &str = "OPERATOR_IMAGE";
pub const ENV_PULL_POLICY: &str = "IMAGE_PULL_POLICY";
pub const ENV_VERSION: &str = "CSV_VERSION";
pub const ENV_REPLACES: &str = "CSV_REPLACES";
pub const ENV_CRD_DISPLAY_NAME: &str = "CRD_DISPLAY_NAME";

const DEFAULT_NAME: &str = "openstack-cluster-operator";
const DEFAULT_NAMESPACE: &str = "openstack";
const DEFAULT_DISPLAY_NAME: &str = "OpenStack Cluster Operator";
const DEFAULT_DESCRIPTION: &str = "Deploys and manages an OpenStack cluster on OpenShift";
const DEFAULT_CRD_DISPLAY_NAME: &str = "OpenStack Cluster";

/// Everything needed to render the CSV and its install strategy
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub name: String,
    pub namespace: String,
    pub display_name: String,
    pub description: String,
    pub image: String,
    pub pull_policy: PullPolicy,
    pub version: Version,
    pub replaces: String,
    pub crd_display_name: String,
}

impl GeneratorConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which returns a variable's value if set
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let image = lookup(ENV_IMAGE)
            .ok_or_else(|| Error::config(format!("{} must be set", ENV_IMAGE)))?;

        let version_str = lookup(ENV_VERSION)
            .ok_or_else(|| Error::config(format!("{} must be set", ENV_VERSION)))?;
        let version = Version::parse(version_str.trim()).map_err(|e| {
            Error::config(format!("Invalid {} '{}': {}", ENV_VERSION, version_str, e))
        })?;

        let pull_policy = match lookup(ENV_PULL_POLICY) {
            Some(value) => value.parse()?,
            None => PullPolicy::default(),
        };

        let config = Self {
            name: or_default(ENV_NAME, DEFAULT_NAME),
            namespace: or_default(ENV_NAMESPACE, DEFAULT_NAMESPACE),
            display_name: or_default(ENV_DISPLAY_NAME, DEFAULT_DISPLAY_NAME),
            description: or_default(ENV_DESCRIPTION, DEFAULT_DESCRIPTION),
            image,
            pull_policy,
            version,
            replaces: lookup(ENV_REPLACES).unwrap_or_default(),
            crd_display_name: or_default(ENV_CRD_DISPLAY_NAME, DEFAULT_CRD_DISPLAY_NAME),
        };

        info!(
            name = %config.name,
            namespace = %config.namespace,
            image = %config.image,
            pull_policy = %config.pull_policy,
            version = %config.version,
            replaces = %config.replaces,
            "Loaded generator configuration"
        );

        Ok(config)
    }

    /// Inputs for the CSV builder
    pub fn csv_params(&self) -> CsvParams {
        CsvParams {
            name: self.name.clone(),
            namespace: self.namespace.clone(),
            display_name: self.display_name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            replaces: self.replaces.clone(),
            version: self.version.clone(),
            crd_display_name: self.crd_display_name.clone(),
        }
    }
}
