//! Manifest parsing and rendering

use crate::{CoreError, Result};
use k8s_openapi::api::networking::v1::Ingress;
use kube::Resource;
use monitor_api::PulsarCluster;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Serialization format for rendered manifests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(CoreError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => f.write_str("yaml"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TypeHeader {
    #[serde(default)]
    api_version: String,
    #[serde(default)]
    kind: String,
}

/// Parse a PulsarCluster manifest (YAML or JSON)
pub fn parse_cluster(input: &str) -> Result<PulsarCluster> {
    let header: TypeHeader = serde_yaml::from_str(input)?;
    let api_version = PulsarCluster::api_version(&());
    let kind = PulsarCluster::kind(&());
    if header.api_version != api_version || header.kind != kind {
        return Err(CoreError::InvalidConfiguration(format!(
            "expected {}/{}, got {}/{}",
            api_version, kind, header.api_version, header.kind
        )));
    }
    Ok(serde_yaml::from_str(input)?)
}

/// Render an Ingress manifest
pub fn render(ingress: &Ingress, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Yaml => Ok(serde_yaml::to_string(ingress)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(ingress)?),
    }
}
