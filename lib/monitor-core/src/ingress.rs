//! Translation of a PulsarCluster's monitoring settings into an Ingress
//!
//! The builder is a pure transform: it reads the cluster, never talks to the
//! API server and never fails. Applying the result is left to the caller.

use crate::naming::{DashboardServiceNamer, GrafanaServiceNamer, PrometheusServiceNamer, ServiceNamer};
use k8s_openapi::api::networking::v1::{
    HTTPIngressPath, HTTPIngressRuleValue, Ingress, IngressBackend, IngressRule,
    IngressServiceBackend, IngressSpec, ServiceBackendPort,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use monitor_api::labels::make_ingress_labels;
use monitor_api::{MonitorSpec, PulsarCluster, ServiceExposure};
use std::fmt;
use tracing::debug;

/// Suffix appended to the cluster name to form the ingress name
pub const INGRESS_NAME_SUFFIX: &str = "-ingress";

const ROOT_PATH: &str = "/";
const PATH_TYPE: &str = "ImplementationSpecific";

/// Name of the monitor ingress for a cluster
pub fn ingress_name(cluster: &PulsarCluster) -> String {
    format!(
        "{}{}",
        cluster.metadata.name.as_deref().unwrap_or_default(),
        INGRESS_NAME_SUFFIX
    )
}

/// Monitoring components that can be published through the ingress
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MonitorComponent {
    Dashboard,
    Grafana,
    Prometheus,
}

impl MonitorComponent {
    /// Rule order of the generated ingress
    pub const ALL: [MonitorComponent; 3] = [
        MonitorComponent::Dashboard,
        MonitorComponent::Grafana,
        MonitorComponent::Prometheus,
    ];

    /// Exposure settings of this component
    pub fn exposure(self, monitor: &MonitorSpec) -> &ServiceExposure {
        match self {
            MonitorComponent::Dashboard => &monitor.dashboard,
            MonitorComponent::Grafana => &monitor.grafana,
            MonitorComponent::Prometheus => &monitor.prometheus,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MonitorComponent::Dashboard => "dashboard",
            MonitorComponent::Grafana => "grafana",
            MonitorComponent::Prometheus => "prometheus",
        }
    }
}

impl fmt::Display for MonitorComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// RuleBuilder produces the monitor Ingress of a cluster.
///
/// Every component with a non-empty host gets one rule routing `/` to the
/// component's Service. Rules keep the order of [`MonitorComponent::ALL`]
/// and components without a host are skipped. Hosts and ports are passed
/// through as configured; duplicates are not rejected.
pub struct RuleBuilder {
    dashboard: Box<dyn ServiceNamer>,
    grafana: Box<dyn ServiceNamer>,
    prometheus: Box<dyn ServiceNamer>,
}

impl RuleBuilder {
    /// Create a builder using the standard Service naming convention
    pub fn new() -> Self {
        Self::with_namers(DashboardServiceNamer, GrafanaServiceNamer, PrometheusServiceNamer)
    }

    /// Create a builder with custom Service namers
    pub fn with_namers(
        dashboard: impl ServiceNamer + 'static,
        grafana: impl ServiceNamer + 'static,
        prometheus: impl ServiceNamer + 'static,
    ) -> Self {
        Self {
            dashboard: Box::new(dashboard),
            grafana: Box::new(grafana),
            prometheus: Box::new(prometheus),
        }
    }

    /// Replace the Service namer of a single component
    pub fn with_namer(mut self, component: MonitorComponent, namer: impl ServiceNamer + 'static) -> Self {
        let namer: Box<dyn ServiceNamer> = Box::new(namer);
        match component {
            MonitorComponent::Dashboard => self.dashboard = namer,
            MonitorComponent::Grafana => self.grafana = namer,
            MonitorComponent::Prometheus => self.prometheus = namer,
        }
        self
    }

    fn namer(&self, component: MonitorComponent) -> &dyn ServiceNamer {
        match component {
            MonitorComponent::Dashboard => self.dashboard.as_ref(),
            MonitorComponent::Grafana => self.grafana.as_ref(),
            MonitorComponent::Prometheus => self.prometheus.as_ref(),
        }
    }

    /// Build the monitor Ingress for a cluster
    pub fn build(&self, cluster: &PulsarCluster) -> Ingress {
        let annotations = &cluster.spec.monitor.ingress.annotations;
        let metadata = ObjectMeta {
            name: Some(ingress_name(cluster)),
            namespace: cluster.metadata.namespace.clone(),
            labels: Some(make_ingress_labels(cluster)),
            annotations: (!annotations.is_empty()).then(|| annotations.clone()),
            ..Default::default()
        };

        let rules = self.rules(cluster);
        debug!(
            "Built {} ingress rule(s) for {}",
            rules.len(),
            metadata.name.as_deref().unwrap_or_default()
        );

        Ingress {
            metadata,
            spec: Some(IngressSpec {
                rules: Some(rules),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Routing rules for every exposed component, in component order
    pub fn rules(&self, cluster: &PulsarCluster) -> Vec<IngressRule> {
        MonitorComponent::ALL
            .into_iter()
            .filter_map(|component| {
                let exposure = component.exposure(&cluster.spec.monitor);
                if !exposure.is_exposed() {
                    debug!("Skipping {} rule: no host configured", component);
                    return None;
                }
                let service = self.namer(component).name_for(cluster);
                debug!(
                    "Routing {} to {}:{} for {}",
                    exposure.host, service, exposure.port, component
                );
                Some(host_rule(&exposure.host, exposure.port, service))
            })
            .collect()
    }
}

impl Default for RuleBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Routes `/` on host to the given Service port.
fn host_rule(host: &str, port: i32, service_name: String) -> IngressRule {
    IngressRule {
        host: Some(host.to_string()),
        http: Some(HTTPIngressRuleValue {
            paths: vec![HTTPIngressPath {
                path: Some(ROOT_PATH.to_string()),
                path_type: PATH_TYPE.to_string(),
                backend: IngressBackend {
                    service: Some(IngressServiceBackend {
                        name: service_name,
                        port: Some(ServiceBackendPort {
                            number: Some(port),
                            ..Default::default()
                        }),
                    }),
                    ..Default::default()
                },
            }],
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use monitor_api::PulsarClusterSpec;
    use std::collections::BTreeMap;

    fn exposure(host: &str, port: i32) -> ServiceExposure {
        ServiceExposure {
            host: host.to_string(),
            port,
        }
    }

    fn cluster(
        dashboard: ServiceExposure,
        grafana: ServiceExposure,
        prometheus: ServiceExposure,
    ) -> PulsarCluster {
        let mut c = PulsarCluster::new("pulsar1", PulsarClusterSpec::default());
        c.metadata.namespace = Some("ns1".to_string());
        c.spec.monitor.dashboard = dashboard;
        c.spec.monitor.grafana = grafana;
        c.spec.monitor.prometheus = prometheus;
        c
    }

    fn rules(ingress: &Ingress) -> &[IngressRule] {
        ingress
            .spec
            .as_ref()
            .and_then(|s| s.rules.as_deref())
            .unwrap_or_default()
    }

    // (host, service name, port) of the single path of a rule
    fn target(rule: &IngressRule) -> (String, String, i32) {
        let paths = &rule.http.as_ref().expect("http rule").paths;
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].path.as_deref(), Some("/"));
        assert_eq!(paths[0].path_type, "ImplementationSpecific");
        let service = paths[0].backend.service.as_ref().expect("service backend");
        let port = service.port.as_ref().and_then(|p| p.number).expect("port number");
        (rule.host.clone().unwrap_or_default(), service.name.clone(), port)
    }

    #[test]
    fn test_no_hosts_no_rules() {
        let c = cluster(exposure("", 8080), exposure("", 3000), exposure("", 9090));
        let ingress = RuleBuilder::new().build(&c);
        assert!(rules(&ingress).is_empty());
        assert_eq!(ingress.spec.as_ref().and_then(|s| s.rules.as_ref()), Some(&vec![]));
    }

    #[test]
    fn test_single_host_each_slot() {
        let cases = [
            (
                cluster(exposure("dash.example.com", 8080), Default::default(), Default::default()),
                ("dash.example.com", "pulsar1-dashboard-service", 8080),
            ),
            (
                cluster(Default::default(), exposure("grafana.example.com", 3000), Default::default()),
                ("grafana.example.com", "pulsar1-grafana-service", 3000),
            ),
            (
                cluster(Default::default(), Default::default(), exposure("prom.example.com", 9090)),
                ("prom.example.com", "pulsar1-prometheus-service", 9090),
            ),
        ];

        let builder = RuleBuilder::new();
        for (c, (host, service, port)) in cases {
            let ingress = builder.build(&c);
            let rules = rules(&ingress);
            assert_eq!(rules.len(), 1);
            assert_eq!(target(&rules[0]), (host.to_string(), service.to_string(), port));
        }
    }

    #[test]
    fn test_all_hosts_in_component_order() {
        let c = cluster(
            exposure("z-dash.example.com", 1),
            exposure("a-grafana.example.com", 2),
            exposure("m-prom.example.com", 3),
        );
        let ingress = RuleBuilder::new().build(&c);
        let hosts: Vec<_> = rules(&ingress).iter().filter_map(|r| r.host.as_deref()).collect();
        assert_eq!(
            hosts,
            vec!["z-dash.example.com", "a-grafana.example.com", "m-prom.example.com"]
        );
    }

    #[test]
    fn test_skipped_middle_slot_keeps_order() {
        let c = cluster(
            exposure("dash.example.com", 8080),
            exposure("", 3000),
            exposure("prom.example.com", 9090),
        );
        let ingress = RuleBuilder::new().build(&c);

        assert_eq!(ingress.metadata.name.as_deref(), Some("pulsar1-ingress"));
        assert_eq!(ingress.metadata.namespace.as_deref(), Some("ns1"));

        let rules = rules(&ingress);
        assert_eq!(rules.len(), 2);
        assert_eq!(
            target(&rules[0]),
            ("dash.example.com".to_string(), "pulsar1-dashboard-service".to_string(), 8080)
        );
        assert_eq!(
            target(&rules[1]),
            ("prom.example.com".to_string(), "pulsar1-prometheus-service".to_string(), 9090)
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let c = cluster(
            exposure("dash.example.com", 8080),
            exposure("grafana.example.com", 3000),
            exposure("", 9090),
        );
        let builder = RuleBuilder::new();
        assert_eq!(builder.build(&c), builder.build(&c));
    }

    #[test]
    fn test_ingress_name() {
        let c = PulsarCluster::new("my-cluster", PulsarClusterSpec::default());
        assert_eq!(ingress_name(&c), "my-cluster-ingress");
        assert_eq!(
            RuleBuilder::new().build(&c).metadata.name.as_deref(),
            Some("my-cluster-ingress")
        );
    }

    #[test]
    fn test_injected_namers() {
        let builder = RuleBuilder::with_namers(
            |_: &PulsarCluster| "dash-svc".to_string(),
            |_: &PulsarCluster| "grafana-svc".to_string(),
            |_: &PulsarCluster| "prom-svc".to_string(),
        );
        let c = cluster(
            exposure("d.example.com", 1),
            exposure("g.example.com", 2),
            exposure("p.example.com", 3),
        );
        let ingress = builder.build(&c);
        let services: Vec<_> = rules(&ingress).iter().map(|r| target(r).1).collect();
        assert_eq!(services, vec!["dash-svc", "grafana-svc", "prom-svc"]);
    }

    #[test]
    fn test_with_namer_replaces_one_component() {
        let builder = RuleBuilder::new()
            .with_namer(MonitorComponent::Grafana, |_: &PulsarCluster| "custom".to_string());
        let c = cluster(
            exposure("d.example.com", 1),
            exposure("g.example.com", 2),
            Default::default(),
        );
        let ingress = builder.build(&c);
        let services: Vec<_> = rules(&ingress).iter().map(|r| target(r).1).collect();
        assert_eq!(services, vec!["pulsar1-dashboard-service", "custom"]);
    }

    #[test]
    fn test_metadata_labels_and_annotations() {
        let mut c = cluster(Default::default(), Default::default(), Default::default());
        c.spec.monitor.ingress.annotations = BTreeMap::from([(
            "nginx.ingress.kubernetes.io/rewrite-target".to_string(),
            "/".to_string(),
        )]);

        let ingress = RuleBuilder::new().build(&c);
        assert_eq!(ingress.metadata.annotations, Some(c.spec.monitor.ingress.annotations.clone()));
        assert_eq!(ingress.metadata.labels, Some(make_ingress_labels(&c)));
    }

    #[test]
    fn test_empty_annotations_omitted() {
        let c = cluster(Default::default(), Default::default(), Default::default());
        assert_eq!(RuleBuilder::new().build(&c).metadata.annotations, None);
    }

    #[test]
    fn test_ports_passed_through() {
        let c = cluster(exposure("a.example.com", 0), exposure("b.example.com", -1), Default::default());
        let ingress = RuleBuilder::new().build(&c);
        let ports: Vec<_> = rules(&ingress).iter().map(|r| target(r).2).collect();
        assert_eq!(ports, vec![0, -1]);
    }

    #[test]
    fn test_duplicate_hosts_not_deduplicated() {
        let c = cluster(
            exposure("shared.example.com", 8080),
            exposure("shared.example.com", 3000),
            Default::default(),
        );
        let ingress = RuleBuilder::new().build(&c);
        let rules = rules(&ingress);
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].host, rules[1].host);
    }

    #[test]
    fn test_component_exposure_lookup() {
        let c = cluster(exposure("d", 1), exposure("g", 2), exposure("p", 3));
        let ports: Vec<_> = MonitorComponent::ALL
            .iter()
            .map(|component| component.exposure(&c.spec.monitor).port)
            .collect();
        assert_eq!(ports, vec![1, 2, 3]);
        assert_eq!(MonitorComponent::Grafana.to_string(), "grafana");
    }
}
