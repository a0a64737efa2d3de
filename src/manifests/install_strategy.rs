//! Install strategy combining the operator Deployment and its RBAC

use tracing::debug;

use super::constants::OPERATOR_NAME;
use super::deployment::{deployment_spec, PullPolicy};
use super::permissions::cluster_permissions;
use crate::olm::{StrategyDeploymentPermissions, StrategyDeploymentSpec, StrategyDetailsDeployment};

/// Build the deployment install strategy details.
///
/// Cluster permissions are bound to the same service account the pod runs as.
pub fn install_strategy(
    namespace: &str,
    image: &str,
    pull_policy: PullPolicy,
) -> StrategyDetailsDeployment {
    let spec = deployment_spec(namespace, image, pull_policy);
    let service_account = spec
        .template
        .spec
        .as_ref()
        .and_then(|pod| pod.service_account_name.clone())
        .unwrap_or_else(|| OPERATOR_NAME.to_string());

    debug!(service_account = %service_account, "Building install strategy");

    StrategyDetailsDeployment {
        deployment_specs: vec![StrategyDeploymentSpec {
            name: OPERATOR_NAME.to_string(),
            spec,
        }],
        permissions: vec![],
        cluster_permissions: vec![StrategyDeploymentPermissions {
            service_account_name: service_account,
            rules: cluster_permissions(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_deployment() {
        let strategy = install_strategy("openstack", "img", PullPolicy::IfNotPresent);

        assert_eq!(strategy.deployment_specs.len(), 1);
        assert_eq!(strategy.deployment_specs[0].name, OPERATOR_NAME);
        assert!(strategy.permissions.is_empty());
    }

    #[test]
    fn test_cluster_permissions_bound_to_pod_service_account() {
        let strategy = install_strategy("openstack", "img", PullPolicy::Always);
        let pod_sa = strategy.deployment_specs[0]
            .spec
            .template
            .spec
            .as_ref()
            .unwrap()
            .service_account_name
            .clone();

        assert_eq!(strategy.cluster_permissions.len(), 1);
        assert_eq!(
            Some(strategy.cluster_permissions[0].service_account_name.clone()),
            pod_sa
        );
        assert_eq!(strategy.cluster_permissions[0].rules, cluster_permissions());
    }
}
