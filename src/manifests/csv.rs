//! ClusterServiceVersion builder
//!
//! Assembles the catalog metadata for the operator. The install strategy is
//! left empty here; callers build it with [`super::install_strategy`] and
//! attach it with [`ClusterServiceVersion::with_install_strategy`].

use std::collections::BTreeMap;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{LabelSelector, ObjectMeta};
use kube::{CustomResourceExt, Resource};
use semver::Version;
use tracing::debug;

use super::constants::{
    annotations, catalog, labels, provider, CSV_NAMESPACE_PLACEHOLDER, OPERATOR_NAME,
    REPOSITORY_URL,
};
use super::icon::icon;
use crate::clock::{Clock, SystemClock};
use crate::crd::{OpenStackCluster, OpenStackClusterSpec};
use crate::error::Result;
use crate::olm::{
    AppLink, ClusterServiceVersion, ClusterServiceVersionSpec, CrdDescription,
    CustomResourceDefinitions, InstallMode, InstallModeType, Maintainer, NamedInstallStrategy,
};

/// Identity and display inputs for a CSV
#[derive(Clone, Debug)]
pub struct CsvParams {
    /// Base name; the CSV is named `<name>.v<version>`
    pub name: String,
    pub namespace: String,
    pub display_name: String,
    pub description: String,
    pub image: String,
    /// CSV this version upgrades from, empty for the first release.
    /// Must name a lower version; not checked here.
    pub replaces: String,
    pub version: Version,
    pub crd_display_name: String,
}

/// Name of the CSV for `name` at `version`
pub fn csv_name(name: &str, version: &Version) -> String {
    format!("{}.v{}", name, version)
}

/// Build the CSV, stamping `createdAt` from the system clock
pub fn csv_base(params: &CsvParams) -> Result<ClusterServiceVersion> {
    csv_base_with_clock(params, &SystemClock)
}

/// Build the CSV, stamping `createdAt` from `clock`
pub fn csv_base_with_clock(
    params: &CsvParams,
    clock: &impl Clock,
) -> Result<ClusterServiceVersion> {
    let name = csv_name(&params.name, &params.version);
    let created_at = clock.now().format(annotations::CREATED_AT_FORMAT).to_string();

    let csv_annotations = BTreeMap::from([
        (
            annotations::ALM_EXAMPLES.to_string(),
            alm_examples(&params.namespace)?,
        ),
        (
            annotations::CAPABILITIES.to_string(),
            catalog::CAPABILITIES.to_string(),
        ),
        (annotations::CERTIFIED.to_string(), "false".to_string()),
        (
            annotations::CATEGORIES.to_string(),
            catalog::CATEGORIES.to_string(),
        ),
        (
            annotations::CONTAINER_IMAGE.to_string(),
            params.image.clone(),
        ),
        (annotations::CREATED_AT.to_string(), created_at),
        (
            annotations::DESCRIPTION.to_string(),
            params.description.clone(),
        ),
        (annotations::REPOSITORY.to_string(), REPOSITORY_URL.to_string()),
        (annotations::SUPPORT.to_string(), "false".to_string()),
        (
            annotations::SUGGESTED_NAMESPACE.to_string(),
            params.namespace.clone(),
        ),
    ]);

    let spec = ClusterServiceVersionSpec {
        display_name: params.display_name.clone(),
        description: params.description.clone(),
        keywords: vec![catalog::KEYWORD.to_string()],
        version: params.version.clone(),
        replaces: params.replaces.clone(),
        maintainers: vec![Maintainer {
            name: provider::NAME.to_string(),
            email: provider::EMAIL.to_string(),
        }],
        maturity: catalog::MATURITY.to_string(),
        provider: AppLink {
            name: provider::NAME.to_string(),
            url: String::new(),
        },
        links: vec![AppLink {
            name: catalog::SOURCE_CODE_LINK.to_string(),
            url: REPOSITORY_URL.to_string(),
        }],
        icon: vec![icon()],
        labels: BTreeMap::from([
            (labels::ALM_OWNER.to_string(), labels::ALM_OWNER_VALUE.to_string()),
            (
                labels::OPERATED_BY.to_string(),
                labels::OPERATED_BY_LABEL_VALUE.to_string(),
            ),
        ]),
        selector: Some(LabelSelector {
            match_labels: Some(BTreeMap::from([
                (labels::ALM_OWNER.to_string(), labels::ALM_OWNER_VALUE.to_string()),
                (
                    labels::OPERATED_BY.to_string(),
                    labels::OPERATED_BY_SELECTOR_VALUE.to_string(),
                ),
            ])),
            ..Default::default()
        }),
        install_modes: install_modes(),
        install_strategy: NamedInstallStrategy::default(),
        custom_resource_definitions: CustomResourceDefinitions {
            owned: vec![owned_crd(&params.crd_display_name)],
            required: vec![],
        },
    };

    let mut csv = ClusterServiceVersion::new(&name, spec);
    csv.metadata = ObjectMeta {
        name: Some(name.clone()),
        namespace: Some(CSV_NAMESPACE_PLACEHOLDER.to_string()),
        annotations: Some(csv_annotations),
        ..Default::default()
    };

    debug!(name = %name, replaces = %params.replaces, "Built ClusterServiceVersion");
    Ok(csv)
}

/// JSON list holding one example OpenStackCluster, shown by catalog UIs
fn alm_examples(namespace: &str) -> Result<String> {
    let mut example = OpenStackCluster::new(OPERATOR_NAME, OpenStackClusterSpec::default());
    example.metadata.namespace = Some(namespace.to_string());

    Ok(serde_json::to_string(&[example])?)
}

/// Own and single namespace only
fn install_modes() -> Vec<InstallMode> {
    [
        (InstallModeType::OwnNamespace, true),
        (InstallModeType::SingleNamespace, true),
        (InstallModeType::MultiNamespace, false),
        (InstallModeType::AllNamespaces, false),
    ]
    .into_iter()
    .map(|(mode_type, supported)| InstallMode {
        mode_type,
        supported,
    })
    .collect()
}

fn owned_crd(display_name: &str) -> CrdDescription {
    CrdDescription {
        name: OpenStackCluster::crd_name().to_string(),
        version: OpenStackCluster::version(&()).to_string(),
        kind: OpenStackCluster::kind(&()).to_string(),
        display_name: format!("{} Deployment", display_name),
        description: format!("Represents the deployment of {}", display_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::NaiveDate;

    fn params() -> CsvParams {
        CsvParams {
            name: "openstack-cluster-operator".to_string(),
            namespace: "openstack".to_string(),
            display_name: "OpenStack Cluster Operator".to_string(),
            description: "Deploys OpenStack on OpenShift".to_string(),
            image: "quay.io/example/op:1.0.0".to_string(),
            replaces: String::new(),
            version: Version::new(1, 0, 0),
            crd_display_name: "OpenStack Cluster".to_string(),
        }
    }

    fn fixed_clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2020, 1, 2)
                .unwrap()
                .and_hms_opt(3, 4, 5)
                .unwrap(),
        )
    }

    fn annotation<'a>(csv: &'a ClusterServiceVersion, key: &str) -> &'a str {
        csv.metadata.annotations.as_ref().unwrap()[key].as_str()
    }

    #[test]
    fn test_csv_name_includes_version() {
        assert_eq!(
            csv_name("openstack-cluster-operator", &Version::new(1, 0, 0)),
            "openstack-cluster-operator.v1.0.0"
        );
        assert_eq!(
            csv_name("op", &Version::parse("2.1.0-rc.1+build.5").unwrap()),
            "op.v2.1.0-rc.1+build.5"
        );
    }

    #[test]
    fn test_created_at_uses_clock() {
        let csv = csv_base_with_clock(&params(), &fixed_clock()).unwrap();
        assert_eq!(annotation(&csv, "createdAt"), "2020-01-02 03:04:05");
    }

    #[test]
    fn test_metadata() {
        let csv = csv_base_with_clock(&params(), &fixed_clock()).unwrap();

        assert_eq!(
            csv.metadata.name.as_deref(),
            Some("openstack-cluster-operator.v1.0.0")
        );
        assert_eq!(csv.metadata.namespace.as_deref(), Some("placeholder"));
        assert_eq!(annotation(&csv, "containerImage"), "quay.io/example/op:1.0.0");
        assert_eq!(
            annotation(&csv, "operatorframework.io/suggested-namespace"),
            "openstack"
        );
        assert_eq!(annotation(&csv, "capabilities"), "Basic Install");
        assert_eq!(annotation(&csv, "description"), "Deploys OpenStack on OpenShift");
    }

    #[test]
    fn test_alm_examples_annotation() {
        let csv = csv_base_with_clock(&params(), &fixed_clock()).unwrap();
        let examples: serde_json::Value =
            serde_json::from_str(annotation(&csv, "alm-examples")).unwrap();

        let examples = examples.as_array().unwrap();
        assert_eq!(examples.len(), 1);
        assert_eq!(examples[0]["apiVersion"], "openstackcluster.openstack.org/v1");
        assert_eq!(examples[0]["kind"], "OpenStackCluster");
        assert_eq!(examples[0]["metadata"]["name"], "openstack-cluster-operator");
        assert_eq!(examples[0]["metadata"]["namespace"], "openstack");
        assert_eq!(examples[0]["spec"]["BareMetalPlatform"], false);
    }

    #[test]
    fn test_fixed_fields() {
        let csv = csv_base_with_clock(&params(), &fixed_clock()).unwrap();

        assert_eq!(csv.spec.maturity, "alpha");
        assert_eq!(csv.spec.keywords, vec!["OpenStack"]);
        assert_eq!(csv.spec.provider.name, "OpenStack K8s");
        assert_eq!(csv.spec.maintainers[0].email, "openstack-discuss@lists.openstack.org");
        assert_eq!(csv.spec.links[0].url, REPOSITORY_URL);
        assert_eq!(csv.spec.icon.len(), 1);
        assert_eq!(csv.spec.icon[0].media_type, "image/png");
        assert!(csv.spec.install_strategy.is_empty());
    }

    #[test]
    fn test_install_modes() {
        let csv = csv_base_with_clock(&params(), &fixed_clock()).unwrap();
        let modes: Vec<(InstallModeType, bool)> = csv
            .spec
            .install_modes
            .iter()
            .map(|m| (m.mode_type, m.supported))
            .collect();

        assert_eq!(
            modes,
            vec![
                (InstallModeType::OwnNamespace, true),
                (InstallModeType::SingleNamespace, true),
                (InstallModeType::MultiNamespace, false),
                (InstallModeType::AllNamespaces, false),
            ]
        );
    }

    #[test]
    fn test_owned_crd_description() {
        let csv = csv_base_with_clock(&params(), &fixed_clock()).unwrap();
        let crds = &csv.spec.custom_resource_definitions;

        assert_eq!(crds.owned.len(), 1);
        assert!(crds.required.is_empty());
        assert_eq!(
            crds.owned[0].name,
            "openstackclusters.openstackcluster.openstack.org"
        );
        assert_eq!(crds.owned[0].version, "v1");
        assert_eq!(crds.owned[0].kind, "OpenStackCluster");
        assert_eq!(crds.owned[0].display_name, "OpenStack Cluster Deployment");
        assert_eq!(
            crds.owned[0].description,
            "Represents the deployment of OpenStack Cluster"
        );
    }

    #[test]
    fn test_replaces_passes_through_unvalidated() {
        let mut p = params();
        p.replaces = "openstack-cluster-operator.v9.9.9".to_string();

        let csv = csv_base_with_clock(&p, &fixed_clock()).unwrap();
        assert_eq!(csv.spec.replaces, "openstack-cluster-operator.v9.9.9");
    }
}
