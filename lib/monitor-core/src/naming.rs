//! Service naming for the monitoring components
//!
//! Each monitoring component is fronted by a Kubernetes Service whose name is
//! derived from the cluster name. The ingress builder only needs that name, so
//! the derivation sits behind [`ServiceNamer`] and can be swapped out.

use monitor_api::PulsarCluster;

/// Derives the Service name of one monitoring component for a cluster
pub trait ServiceNamer: Send + Sync {
    fn name_for(&self, cluster: &PulsarCluster) -> String;
}

impl<F> ServiceNamer for F
where
    F: Fn(&PulsarCluster) -> String + Send + Sync,
{
    fn name_for(&self, cluster: &PulsarCluster) -> String {
        self(cluster)
    }
}

/// Names the dashboard Service: `<cluster>-dashboard-service`
#[derive(Clone, Copy, Debug, Default)]
pub struct DashboardServiceNamer;

impl ServiceNamer for DashboardServiceNamer {
    fn name_for(&self, cluster: &PulsarCluster) -> String {
        service_name(cluster, "dashboard")
    }
}

/// Names the Grafana Service: `<cluster>-grafana-service`
#[derive(Clone, Copy, Debug, Default)]
pub struct GrafanaServiceNamer;

impl ServiceNamer for GrafanaServiceNamer {
    fn name_for(&self, cluster: &PulsarCluster) -> String {
        service_name(cluster, "grafana")
    }
}

/// Names the Prometheus Service: `<cluster>-prometheus-service`
#[derive(Clone, Copy, Debug, Default)]
pub struct PrometheusServiceNamer;

impl ServiceNamer for PrometheusServiceNamer {
    fn name_for(&self, cluster: &PulsarCluster) -> String {
        service_name(cluster, "prometheus")
    }
}

fn service_name(cluster: &PulsarCluster, component: &str) -> String {
    format!(
        "{}-{}-service",
        cluster.metadata.name.as_deref().unwrap_or_default(),
        component
    )
}
