//! CSV YAML Generator
//!
//! Builds the ClusterServiceVersion for the OpenStack Cluster Operator,
//! attaches its install strategy, and writes the manifest to stdout.
//!
//! Usage: OPERATOR_IMAGE=... CSV_VERSION=1.0.0 cargo run --bin csvgen > bundle/csv.yaml

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use openstack_csv_generator::config::GeneratorConfig;
use openstack_csv_generator::manifests::{csv_base, install_strategy, to_yaml};
use openstack_csv_generator::olm::NamedInstallStrategy;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GeneratorConfig::from_env()?;

    let strategy = install_strategy(&config.namespace, &config.image, config.pull_policy);
    let csv = csv_base(&config.csv_params())?
        .with_install_strategy(NamedInstallStrategy::deployment(strategy));

    info!(name = ?csv.metadata.name, "Generated ClusterServiceVersion");

    println!("---");
    print!("{}", to_yaml(&csv)?);
    Ok(())
}

/// Initialize tracing subscriber; logs go to stderr so stdout stays YAML
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr),
        )
        .init();
}
