//! Core monitor ingress functionality
//!
//! This library provides:
//! - RuleBuilder: translates a PulsarCluster into the monitor Ingress
//! - Service naming collaborators for the dashboard, Grafana and Prometheus
//! - Manifest parsing and rendering

pub mod ingress;
pub mod naming;
pub mod manifest;
pub mod error;

pub use ingress::{RuleBuilder, MonitorComponent, ingress_name, INGRESS_NAME_SUFFIX};
pub use naming::{ServiceNamer, DashboardServiceNamer, GrafanaServiceNamer, PrometheusServiceNamer};
pub use manifest::{parse_cluster, render, OutputFormat};
pub use error::{CoreError, Result};
