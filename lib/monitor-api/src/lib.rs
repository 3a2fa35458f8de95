//! Pulsar cluster API types for Kubernetes integration
//!
//! This library defines the custom resource consumed by the monitor ingress
//! builder:
//! - PulsarCluster: a Pulsar deployment and its monitoring exposure settings
//!
//! It also owns the label convention shared by resources generated for a
//! cluster.

pub mod v1alpha1;
pub mod labels;

pub use v1alpha1::{PulsarCluster, PulsarClusterSpec, MonitorSpec, ServiceExposure, IngressConfig};
