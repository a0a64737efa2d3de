//! Operator Lifecycle Manager API types

mod cluster_service_version;

pub use cluster_service_version::*;
