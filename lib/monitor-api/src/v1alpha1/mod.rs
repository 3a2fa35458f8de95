/// API version v1alpha1 for Pulsar cluster CRDs

pub mod pulsar_cluster;

pub use pulsar_cluster::{PulsarCluster, PulsarClusterSpec, MonitorSpec, ServiceExposure, IngressConfig};

/// API group for Pulsar resources
pub const API_GROUP: &str = "pulsar.apache.org";
/// API version for Pulsar resources
pub const API_VERSION: &str = "v1alpha1";
/// Kind of the cluster resource
pub const KIND: &str = "PulsarCluster";
