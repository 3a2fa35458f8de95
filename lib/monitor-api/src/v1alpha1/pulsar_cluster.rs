use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// PulsarCluster describes a Pulsar deployment managed by the operator.
/// Only the monitoring settings are modelled here; they decide which
/// monitoring UIs are published through the shared ingress.
#[derive(CustomResource, Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[kube(
    group = "pulsar.apache.org",
    version = "v1alpha1",
    kind = "PulsarCluster",
    plural = "pulsarclusters",
    shortname = "pc",
    namespaced,
    derive = "Default",
    derive = "PartialEq",
    printcolumn = r#"{"name":"Dashboard","type":"string","jsonPath":".spec.monitor.dashboard.host"}"#,
    printcolumn = r#"{"name":"Grafana","type":"string","jsonPath":".spec.monitor.grafana.host"}"#,
    printcolumn = r#"{"name":"Prometheus","type":"string","jsonPath":".spec.monitor.prometheus.host"}"#,
)]
#[serde(rename_all = "camelCase")]
pub struct PulsarClusterSpec {
    /// Monitoring stack exposure
    #[serde(default)]
    pub monitor: MonitorSpec,
}

/// Monitoring sub-configuration of a cluster
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct MonitorSpec {
    /// Pulsar dashboard
    #[serde(default)]
    pub dashboard: ServiceExposure,

    /// Grafana metrics visualization UI
    #[serde(default)]
    pub grafana: ServiceExposure,

    /// Prometheus metrics collection UI
    #[serde(default)]
    pub prometheus: ServiceExposure,

    /// Settings for the shared ingress object
    #[serde(default)]
    pub ingress: IngressConfig,
}

/// External exposure of a single monitoring service
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceExposure {
    /// External hostname; empty means the service is not exposed
    #[serde(default)]
    pub host: String,

    /// Service port traffic is routed to
    #[serde(default)]
    pub port: i32,
}

impl ServiceExposure {
    /// Whether an external hostname is configured
    pub fn is_exposed(&self) -> bool {
        !self.host.is_empty()
    }
}

/// Ingress object settings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IngressConfig {
    /// Annotations copied onto the generated ingress
    #[serde(default)]
    pub annotations: BTreeMap<String, String>,
}
