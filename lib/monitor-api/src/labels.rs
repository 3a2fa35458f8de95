//! Label convention for resources generated from a PulsarCluster

use crate::PulsarCluster;
use std::collections::BTreeMap;

/// Label key naming the application
pub const LABEL_APP: &str = "app";
/// Label key naming the owning cluster
pub const LABEL_CLUSTER: &str = "cluster";
/// Label key naming the component
pub const LABEL_COMPONENT: &str = "component";
/// Label key naming the sub-component within a component
pub const LABEL_CHILD_COMPONENT: &str = "child-component";

pub const APP_NAME: &str = "pulsar";
pub const MONITOR_COMPONENT: &str = "monitor";
pub const INGRESS_CHILD_COMPONENT: &str = "ingress";

/// Labels applied to the monitor ingress of a cluster
pub fn make_ingress_labels(cluster: &PulsarCluster) -> BTreeMap<String, String> {
    BTreeMap::from_iter([
        (LABEL_APP.to_string(), APP_NAME.to_string()),
        (
            LABEL_CLUSTER.to_string(),
            cluster.metadata.name.clone().unwrap_or_default(),
        ),
        (LABEL_COMPONENT.to_string(), MONITOR_COMPONENT.to_string()),
        (
            LABEL_CHILD_COMPONENT.to_string(),
            INGRESS_CHILD_COMPONENT.to_string(),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PulsarClusterSpec;

    #[test]
    fn test_ingress_labels() {
        let cluster = PulsarCluster::new("pulsar1", PulsarClusterSpec::default());
        let labels = make_ingress_labels(&cluster);

        assert_eq!(labels.len(), 4);
        assert_eq!(labels[LABEL_APP], "pulsar");
        assert_eq!(labels[LABEL_CLUSTER], "pulsar1");
        assert_eq!(labels[LABEL_COMPONENT], "monitor");
        assert_eq!(labels[LABEL_CHILD_COMPONENT], "ingress");
    }

    #[test]
    fn test_ingress_labels_unnamed_cluster() {
        let cluster = PulsarCluster {
            metadata: Default::default(),
            spec: PulsarClusterSpec::default(),
        };
        assert_eq!(make_ingress_labels(&cluster)[LABEL_CLUSTER], "");
    }
}
