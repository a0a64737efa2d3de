//! OpenStackCluster Custom Resource Definition

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// OpenStackCluster resource specification
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "openstackcluster.openstack.org",
    version = "v1",
    kind = "OpenStackCluster",
    plural = "openstackclusters",
    singular = "openstackcluster",
    namespaced
)]
pub struct OpenStackClusterSpec {
    /// Deploy onto bare metal hosts instead of virtual machines
    #[serde(rename = "BareMetalPlatform", default)]
    pub bare_metal_platform: bool,
}
