//! ClusterServiceVersion resource (operators.coreos.com/v1alpha1)
//!
//! Only the fields the generator populates are modelled. Field names follow
//! the OLM wire format so the rendered manifest is accepted as-is by the
//! catalog tooling.

use std::collections::BTreeMap;
use std::fmt;

use k8s_openapi::api::apps::v1::DeploymentSpec;
use k8s_openapi::api::rbac::v1::PolicyRule;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::CustomResource;
use semver::Version;
use serde::{Deserialize, Serialize};

/// Install strategy name understood by OLM for Deployment-based operators
pub const DEPLOYMENT_STRATEGY: &str = "deployment";

/// ClusterServiceVersion specification
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize)]
#[kube(
    group = "operators.coreos.com",
    version = "v1alpha1",
    kind = "ClusterServiceVersion",
    plural = "clusterserviceversions",
    singular = "clusterserviceversion",
    shortname = "csv",
    namespaced,
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceVersionSpec {
    pub display_name: String,

    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,

    pub version: Version,

    /// Name of the CSV this one upgrades from
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub replaces: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub maintainers: Vec<Maintainer>,

    /// Maturity level (alpha, beta, stable)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub maturity: String,

    pub provider: AppLink,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<AppLink>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub icon: Vec<Icon>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<LabelSelector>,

    pub install_modes: Vec<InstallMode>,

    /// Strategy OLM uses to run the operator; empty until attached
    #[serde(rename = "install")]
    pub install_strategy: NamedInstallStrategy,

    #[serde(rename = "customresourcedefinitions")]
    pub custom_resource_definitions: CustomResourceDefinitions,
}

impl ClusterServiceVersion {
    /// Attach an install strategy, completing the CSV
    pub fn with_install_strategy(mut self, strategy: NamedInstallStrategy) -> Self {
        self.spec.install_strategy = strategy;
        self
    }
}

/// Operator maintainer contact
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Maintainer {
    pub name: String,
    pub email: String,
}

/// Named hyperlink (also used for the provider)
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppLink {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

/// Base64-encoded icon shown in catalog UIs
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Icon {
    #[serde(rename = "base64data")]
    pub data: String,
    #[serde(rename = "mediatype")]
    pub media_type: String,
}

/// Installation scope an operator can be deployed with
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum InstallModeType {
    OwnNamespace,
    SingleNamespace,
    MultiNamespace,
    AllNamespaces,
}

impl fmt::Display for InstallModeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            InstallModeType::OwnNamespace => "OwnNamespace",
            InstallModeType::SingleNamespace => "SingleNamespace",
            InstallModeType::MultiNamespace => "MultiNamespace",
            InstallModeType::AllNamespaces => "AllNamespaces",
        };
        f.write_str(s)
    }
}

/// Whether an install mode is supported
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct InstallMode {
    #[serde(rename = "type")]
    pub mode_type: InstallModeType,
    pub supported: bool,
}

/// Install strategy tagged with its strategy name
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct NamedInstallStrategy {
    #[serde(rename = "strategy")]
    pub strategy_name: String,
    #[serde(rename = "spec")]
    pub details: StrategyDetailsDeployment,
}

impl NamedInstallStrategy {
    /// Wrap deployment details under the `deployment` strategy
    pub fn deployment(details: StrategyDetailsDeployment) -> Self {
        Self {
            strategy_name: DEPLOYMENT_STRATEGY.to_string(),
            details,
        }
    }

    /// True if nothing has been attached yet
    pub fn is_empty(&self) -> bool {
        self.strategy_name.is_empty() && self.details.deployment_specs.is_empty()
    }
}

/// Deployments and RBAC OLM creates when installing the operator
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDetailsDeployment {
    #[serde(rename = "deployments", default)]
    pub deployment_specs: Vec<StrategyDeploymentSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<StrategyDeploymentPermissions>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cluster_permissions: Vec<StrategyDeploymentPermissions>,
}

/// Named Deployment spec
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct StrategyDeploymentSpec {
    pub name: String,
    pub spec: DeploymentSpec,
}

/// RBAC rules granted to a service account
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyDeploymentPermissions {
    pub service_account_name: String,
    pub rules: Vec<PolicyRule>,
}

/// CRDs the operator owns and requires
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CustomResourceDefinitions {
    #[serde(default)]
    pub owned: Vec<CrdDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<CrdDescription>,
}

/// Catalog-facing description of a CRD
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrdDescription {
    pub name: String,
    pub version: String,
    pub kind: String,
    pub display_name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_mode_serializes_with_olm_names() {
        let mode = InstallMode {
            mode_type: InstallModeType::AllNamespaces,
            supported: false,
        };
        let value = serde_json::to_value(mode).unwrap();

        assert_eq!(value["type"], "AllNamespaces");
        assert_eq!(value["supported"], false);
        assert_eq!(InstallModeType::OwnNamespace.to_string(), "OwnNamespace");
    }

    #[test]
    fn test_default_strategy_is_empty() {
        let strategy = NamedInstallStrategy::default();
        assert!(strategy.is_empty());

        let attached = NamedInstallStrategy::deployment(StrategyDetailsDeployment::default());
        assert!(!attached.is_empty());
        assert_eq!(attached.strategy_name, DEPLOYMENT_STRATEGY);
    }

    #[test]
    fn test_strategy_details_use_olm_field_names() {
        let details = StrategyDetailsDeployment {
            deployment_specs: vec![StrategyDeploymentSpec {
                name: "op".to_string(),
                spec: DeploymentSpec::default(),
            }],
            permissions: vec![],
            cluster_permissions: vec![StrategyDeploymentPermissions {
                service_account_name: "op".to_string(),
                rules: vec![],
            }],
        };
        let value = serde_json::to_value(&details).unwrap();

        assert!(value.get("deployments").is_some());
        assert!(value.get("permissions").is_none());
        assert_eq!(value["clusterPermissions"][0]["serviceAccountName"], "op");
    }
}
