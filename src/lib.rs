//! OpenStack Cluster Operator CSV generator
//!
//! Builds the static manifests needed to publish the OpenStack Cluster
//! Operator to an Operator Lifecycle Manager catalog: the controller
//! Deployment spec, its cluster RBAC rules, the install strategy, and the
//! ClusterServiceVersion that ties them together.

pub mod clock;
pub mod config;
pub mod crd;
pub mod error;
pub mod manifests;
pub mod olm;

pub use error::{Error, Result};
