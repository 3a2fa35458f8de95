//! Command line configuration

use clap::Parser;
use monitor_core::OutputFormat;
use std::path::PathBuf;

/// Render the monitor Ingress of a PulsarCluster manifest
#[derive(Parser, Debug)]
#[command(name = "monitor-ingress")]
#[command(version)]
pub struct Config {
    /// PulsarCluster manifest to read (stdin when omitted)
    #[arg(short, long, value_name = "FILE", env = "MONITOR_INGRESS_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format: yaml or json
    #[arg(short, long, default_value_t = OutputFormat::Yaml, env = "MONITOR_INGRESS_OUTPUT")]
    pub output: OutputFormat,

    /// Print the PulsarCluster CRD definition instead
    #[arg(long)]
    pub crd: bool,

    /// Emit logs as JSON
    #[arg(long, env = "MONITOR_INGRESS_LOG_JSON")]
    pub log_json: bool,
}
