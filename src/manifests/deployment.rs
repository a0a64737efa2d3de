//! Deployment spec for the operator's controller pod

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use k8s_openapi::api::apps::v1::DeploymentSpec;
use k8s_openapi::api::core::v1::{
    Container, EnvVar, EnvVarSource, ObjectFieldSelector, PodSpec, PodTemplateSpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::constants::{env, OPERATOR_NAME, POD_NAME_LABEL};
use crate::error::{Error, Result};

/// Container image pull policy
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum PullPolicy {
    Always,
    #[default]
    IfNotPresent,
    Never,
}

impl PullPolicy {
    /// Kubernetes spelling of the policy
    pub fn as_str(&self) -> &'static str {
        match self {
            PullPolicy::Always => "Always",
            PullPolicy::IfNotPresent => "IfNotPresent",
            PullPolicy::Never => "Never",
        }
    }
}

impl fmt::Display for PullPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PullPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Always" => Ok(PullPolicy::Always),
            "IfNotPresent" => Ok(PullPolicy::IfNotPresent),
            "Never" => Ok(PullPolicy::Never),
            other => Err(Error::config(format!(
                "Invalid image pull policy '{}': must be one of: Always, IfNotPresent, Never",
                other
            ))),
        }
    }
}

/// Labels shared by the Deployment selector and the pod template
pub fn pod_labels() -> BTreeMap<String, String> {
    BTreeMap::from([(POD_NAME_LABEL.to_string(), OPERATOR_NAME.to_string())])
}

/// Build the operator Deployment spec.
///
/// `namespace` and `image` are used verbatim; an empty image is accepted and
/// only fails once the Deployment is scheduled.
pub fn deployment_spec(namespace: &str, image: &str, pull_policy: PullPolicy) -> DeploymentSpec {
    debug!(namespace, image, pull_policy = %pull_policy, "Building operator deployment spec");

    DeploymentSpec {
        replicas: Some(1),
        selector: LabelSelector {
            match_labels: Some(pod_labels()),
            ..Default::default()
        },
        template: PodTemplateSpec {
            metadata: Some(ObjectMeta {
                labels: Some(pod_labels()),
                ..Default::default()
            }),
            spec: Some(PodSpec {
                service_account_name: Some(OPERATOR_NAME.to_string()),
                containers: vec![Container {
                    name: OPERATOR_NAME.to_string(),
                    image: Some(image.to_string()),
                    image_pull_policy: Some(pull_policy.to_string()),
                    command: Some(vec![OPERATOR_NAME.to_string()]),
                    env: Some(operator_env(namespace, image)),
                    ..Default::default()
                }],
                ..Default::default()
            }),
        },
        ..Default::default()
    }
}

fn operator_env(namespace: &str, image: &str) -> Vec<EnvVar> {
    vec![
        env_value(env::OPERATOR_IMAGE, image),
        env_value(env::OPERATOR_NAME, OPERATOR_NAME),
        env_value(env::OPERATOR_NAMESPACE, namespace),
        EnvVar {
            name: env::POD_NAME.to_string(),
            value_from: Some(EnvVarSource {
                field_ref: Some(ObjectFieldSelector {
                    field_path: "metadata.name".to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        },
        // Empty means the operator watches every namespace it is granted
        env_value(env::WATCH_NAMESPACE, ""),
    ]
}

fn env_value(name: &str, value: &str) -> EnvVar {
    EnvVar {
        name: name.to_string(),
        value: Some(value.to_string()),
        ..Default::default()
    }
}
