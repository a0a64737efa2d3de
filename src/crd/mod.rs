//! Custom Resource Definitions owned by the OpenStack Cluster Operator

mod openstack_cluster;

pub use openstack_cluster::*;
