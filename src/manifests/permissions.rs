//! Cluster RBAC rules for the operator service account
//!
//! This is the full set of API access the controller needs. Any new API the
//! controller talks to must be granted here.

use k8s_openapi::api::rbac::v1::PolicyRule;
use tracing::debug;

const READ: &[&str] = &["get", "list", "watch"];

/// Cluster-wide policy rules, ordered for review of the generated manifest
pub fn cluster_permissions() -> Vec<PolicyRule> {
    let rules = vec![
        rule(&["openstackcluster.openstack.org"], &["*"], &["*"]),
        rule(
            &[""],
            &[
                "pods",
                "services",
                "services/finalizers",
                "endpoints",
                "persistentvolumeclaims",
                "events",
                "configmaps",
                "secrets",
                "serviceaccounts",
            ],
            &["*"],
        ),
        rule(
            &["apps"],
            &["deployments", "deployments/finalizers", "daemonsets", "replicasets"],
            &["get", "list", "watch", "create", "delete", "update"],
        ),
        rule(
            &["batch"],
            &["jobs"],
            &["get", "list", "watch", "create", "delete"],
        ),
        rule(
            &["rbac.authorization.k8s.io"],
            &["clusterroles", "clusterrolebindings", "roles", "rolebindings"],
            &["get", "list", "watch", "create", "delete"],
        ),
        rule(
            &["apiextensions.k8s.io"],
            &["customresourcedefinitions"],
            &["get", "list", "watch", "create", "delete", "patch", "update"],
        ),
        // Broad read on every SCC, write only on `privileged`
        rule(&["security.openshift.io"], &["securitycontextconstraints"], READ),
        PolicyRule {
            resource_names: Some(vec!["privileged".to_string()]),
            ..rule(
                &["security.openshift.io"],
                &["securitycontextconstraints"],
                &["get", "patch", "update"],
            )
        },
        rule(&["monitoring.coreos.com"], &["servicemonitors"], &["get", "create"]),
        rule(&["operators.coreos.com"], &["clusterserviceversions"], READ),
    ];

    debug!(rules = rules.len(), "Built cluster permission rules");
    rules
}

fn rule(api_groups: &[&str], resources: &[&str], verbs: &[&str]) -> PolicyRule {
    PolicyRule {
        api_groups: Some(strings(api_groups)),
        resources: Some(strings(resources)),
        verbs: strings(verbs),
        ..Default::default()
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
