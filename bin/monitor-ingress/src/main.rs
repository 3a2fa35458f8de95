use anyhow::{Context, Result};
use clap::Parser;
use kube::CustomResourceExt;
use monitor_api::PulsarCluster;
use monitor_core::{parse_cluster, render, RuleBuilder};
use std::io::Read;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::Config;

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.log_json);

    if config.crd {
        let crd = serde_yaml::to_string(&PulsarCluster::crd())
            .context("Failed to serialize PulsarCluster CRD")?;
        print!("{}", crd);
        return Ok(());
    }

    let input = read_input(&config)?;
    let cluster = parse_cluster(&input).context("Failed to parse PulsarCluster manifest")?;
    info!(
        "Rendering monitor ingress for {}/{}",
        cluster.metadata.namespace.as_deref().unwrap_or("default"),
        cluster.metadata.name.as_deref().unwrap_or("unknown")
    );

    let ingress = RuleBuilder::new().build(&cluster);
    let rendered = render(&ingress, config.output).context("Failed to render ingress")?;
    print!("{}", rendered);

    Ok(())
}

// Logs go to stderr so stdout carries only the manifest.
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn read_input(config: &Config) -> Result<String> {
    match &config.input {
        Some(path) => {
            debug!("Reading manifest from {}", path.display());
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            debug!("Reading manifest from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
