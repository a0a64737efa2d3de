//! Fixed identifiers baked into the published manifests

/// Operator name: Deployment, container, service account and command
pub const OPERATOR_NAME: &str = "openstack-cluster-operator";

/// Label key selecting the operator pod
pub const POD_NAME_LABEL: &str = "name";

/// Source repository, used for both the annotation and the CSV link
pub const REPOSITORY_URL: &str =
    "https://github.com/openstack-k8s-operators/openstack-cluster-operator";

/// Namespace written into the CSV metadata; catalogs overwrite it on install
pub const CSV_NAMESPACE_PLACEHOLDER: &str = "placeholder";

/// Maintainer and provider identity.
pub mod provider {
    pub const NAME: &str = "OpenStack K8s";
    pub const EMAIL: &str = "openstack-discuss@lists.openstack.org";
}

/// CSV label keys and values.
pub mod labels {
    pub const ALM_OWNER: &str = "alm-owner-openstack-cluster-operator";
    pub const OPERATED_BY: &str = "operated-by";

    pub const ALM_OWNER_VALUE: &str = "openstack-cluster-operator";
    pub const OPERATED_BY_LABEL_VALUE: &str = "openstack-cluster";
    pub const OPERATED_BY_SELECTOR_VALUE: &str = "openstack-cluster-operator";
}

/// CSV annotation keys.
pub mod annotations {
    pub const ALM_EXAMPLES: &str = "alm-examples";
    pub const CAPABILITIES: &str = "capabilities";
    pub const CERTIFIED: &str = "certified";
    pub const CATEGORIES: &str = "categories";
    pub const CONTAINER_IMAGE: &str = "containerImage";
    pub const CREATED_AT: &str = "createdAt";
    pub const DESCRIPTION: &str = "description";
    pub const REPOSITORY: &str = "repository";
    pub const SUPPORT: &str = "support";
    pub const SUGGESTED_NAMESPACE: &str = "operatorframework.io/suggested-namespace";

    /// chrono format for `createdAt`: local time, no zone
    pub const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// Container environment variable names.
pub mod env {
    pub const OPERATOR_IMAGE: &str = "OPERATOR_IMAGE";
    pub const OPERATOR_NAME: &str = "OPERATOR_NAME";
    pub const OPERATOR_NAMESPACE: &str = "OPERATOR_NAMESPACE";
    pub const POD_NAME: &str = "POD_NAME";
    pub const WATCH_NAMESPACE: &str = "WATCH_NAMESPACE";
}

/// Catalog metadata values.
pub mod catalog {
    pub const MATURITY: &str = "alpha";
    pub const KEYWORD: &str = "OpenStack";
    pub const CAPABILITIES: &str = "Basic Install";
    pub const CATEGORIES: &str = "OpenShift Optional";
    pub const SOURCE_CODE_LINK: &str = "Source Code";
}
