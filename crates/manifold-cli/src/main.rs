//! Manifold - on-demand service adapter
//!
//! Usage:
//!   manifold generate-manifest <service-deployment> <plan> <request-params> <previous-manifest> <previous-plan>
//!   manifold create-binding <binding-id> <bosh-vms> <manifest> <request-params>
//!   manifold delete-binding <binding-id> <bosh-vms> <manifest> <request-params>
//!
//! Every structured argument is a JSON document. Previous manifest and plan
//! may be empty or `null` for a first deploy. Results are printed as JSON on
//! stdout; logs go to stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use manifold_core::binding::Binder;
use manifold_core::config::{AdapterConfig, DEFAULT_CONFIG_PATH, load_or_default};
use manifold_core::generator::ManifestGenerator;
use manifold_core::schema::{
    DeploymentTopology, Manifest, Plan, RequestParameters, ServiceDeployment,
};

#[derive(Parser)]
#[command(name = "manifold")]
#[command(about = "On-demand service adapter", long_about = None)]
struct Cli {
    /// Adapter configuration file (defaults are used if it does not exist)
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a deployment manifest
    GenerateManifest {
        /// Service deployment (name, releases, stemcell)
        service_deployment: String,
        /// Service plan
        plan: String,
        /// Request parameters
        request_params: String,
        /// Previously applied manifest, empty for a new deployment
        #[arg(default_value = "")]
        previous_manifest: String,
        /// Previous plan, empty for a new deployment
        #[arg(default_value = "")]
        previous_plan: String,
    },

    /// Create a binding for a deployed service instance
    CreateBinding(BindingArgs),

    /// Delete a binding
    DeleteBinding(BindingArgs),
}

#[derive(Args)]
struct BindingArgs {
    /// Binding identifier
    binding_id: String,
    /// Instance group name to VM addresses
    bosh_vms: String,
    /// Applied manifest
    manifest: String,
    /// Request parameters
    request_params: String,
}

fn main() -> Result<()> {
    // stdout carries the result, so logs go to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "manifold=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_or_default(&cli.config)?;
    tracing::debug!(config = %cli.config.display(), "loaded adapter config");

    match cli.command {
        Commands::GenerateManifest {
            service_deployment,
            plan,
            request_params,
            previous_manifest,
            previous_plan,
        } => {
            let manifest = generate_manifest(
                &config,
                &service_deployment,
                &plan,
                &request_params,
                &previous_manifest,
                &previous_plan,
            )?;
            print_json(&manifest)?;
        }
        Commands::CreateBinding(args) => {
            let (topology, manifest, request_params) = args.parse()?;
            let binding = Binder::from_config(&config).create_binding(
                &args.binding_id,
                &topology,
                &manifest,
                &request_params,
            )?;
            print_json(&binding)?;
        }
        Commands::DeleteBinding(args) => {
            let (topology, manifest, request_params) = args.parse()?;
            Binder::from_config(&config).delete_binding(
                &args.binding_id,
                &topology,
                &manifest,
                &request_params,
            )?;
        }
    }

    Ok(())
}

/// Decode the `generate-manifest` arguments and synthesize the manifest
fn generate_manifest(
    config: &AdapterConfig,
    service_deployment: &str,
    plan: &str,
    request_params: &str,
    previous_manifest: &str,
    previous_plan: &str,
) -> Result<Manifest> {
    let deployment: ServiceDeployment = parse_arg("service deployment", service_deployment)?;
    let plan: Plan = parse_arg("plan", plan)?;
    let request_params: RequestParameters = parse_arg("request parameters", request_params)?;
    let previous_manifest: Option<Manifest> =
        parse_optional_arg("previous manifest", previous_manifest)?;
    let previous_plan: Option<Plan> = parse_optional_arg("previous plan", previous_plan)?;

    let manifest = ManifestGenerator::from_config(config)?.generate_manifest(
        &deployment,
        &plan,
        &request_params,
        previous_manifest.as_ref(),
        previous_plan.as_ref(),
    )?;
    Ok(manifest)
}

impl BindingArgs {
    fn parse(&self) -> Result<(DeploymentTopology, Manifest, RequestParameters)> {
        Ok((
            parse_arg("bosh VMs", &self.bosh_vms)?,
            parse_arg("manifest", &self.manifest)?,
            parse_arg("request parameters", &self.request_params)?,
        ))
    }
}

fn parse_arg<T: serde::de::DeserializeOwned>(what: &str, raw: &str) -> Result<T> {
    serde_json::from_str(raw).with_context(|| format!("Failed to parse {} argument", what))
}

fn parse_optional_arg<T: serde::de::DeserializeOwned>(
    what: &str,
    raw: &str,
) -> Result<Option<T>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    let value: Value = parse_arg(what, raw)?;
    if value.is_null() {
        return Ok(None);
    }
    serde_json::from_value(value)
        .map(Some)
        .with_context(|| format!("Failed to parse {} argument", what))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", rendered);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_previous_manifest_is_absent() {
        let parsed: Option<Manifest> = parse_optional_arg("previous manifest", "").unwrap();
        assert!(parsed.is_none());
        let parsed: Option<Manifest> = parse_optional_arg("previous manifest", "null").unwrap();
        assert!(parsed.is_none());
    }

    #[test]
    fn previous_manifest_is_parsed() {
        let parsed: Option<Manifest> =
            parse_optional_arg("previous manifest", r#"{"name": "svc-1"}"#).unwrap();
        assert_eq!(parsed.unwrap().name, "svc-1");
    }

    #[test]
    fn malformed_argument_names_the_argument() {
        let err = parse_arg::<Plan>("plan", "{not json").unwrap_err();
        assert!(err.to_string().contains("plan"));
    }

    const DEPLOYMENT: &str = r#"{
        "deployment_name": "svc-1",
        "releases": [
            {"name": "concourse", "version": "4", "jobs": ["atc", "tsa", "postgresql", "groundcrew", "baggageclaim"]},
            {"name": "garden-runc", "version": "3", "jobs": ["garden"]}
        ],
        "stemcell": {"stemcell_os": "ubuntu-xenial", "stemcell_version": "1234"}
    }"#;

    const PLAN: &str = r#"{
        "instance_groups": [
            {"name": "web", "vm_type": "medium", "networks": ["default"], "instances": 1, "azs": ["z1"]},
            {"name": "db", "vm_type": "medium", "persistent_disk_type": "10GB", "networks": ["default"], "instances": 1, "azs": ["z1"]},
            {"name": "worker", "vm_type": "large", "networks": ["default"], "instances": 1, "azs": ["z1"]}
        ]
    }"#;

    const REQUEST_PARAMS: &str = r#"{"parameters": {"app_domain": "example.com"}}"#;

    #[test]
    fn generate_manifest_from_json_arguments() {
        let manifest = generate_manifest(
            &AdapterConfig::default(),
            DEPLOYMENT,
            PLAN,
            REQUEST_PARAMS,
            "",
            "",
        )
        .unwrap();

        let rendered: Manifest =
            serde_json::from_str(&serde_json::to_string_pretty(&manifest).unwrap()).unwrap();
        assert_eq!(rendered.name, "svc-1");
        let names: Vec<&str> = rendered
            .instance_groups
            .iter()
            .map(|group| group.name.as_str())
            .collect();
        assert_eq!(names, ["web", "db", "worker"]);
        assert_eq!(
            rendered.instance_groups[0].properties["external_url"],
            "https://svc-1.example.com"
        );
        assert_eq!(rendered.update.canaries, 4);
        assert_eq!(rendered.update.max_in_flight, 4);
    }

    #[test]
    fn generate_manifest_with_previous_manifest_is_an_update() {
        let manifest = generate_manifest(
            &AdapterConfig::default(),
            DEPLOYMENT,
            PLAN,
            REQUEST_PARAMS,
            r#"{"name": "svc-1"}"#,
            "null",
        )
        .unwrap();

        assert_eq!(manifest.update.canaries, 1);
        assert_eq!(manifest.update.max_in_flight, 1);
    }

    #[test]
    fn generate_manifest_reports_synthesis_errors() {
        let err = generate_manifest(
            &AdapterConfig::default(),
            DEPLOYMENT,
            r#"{"instance_groups": []}"#,
            REQUEST_PARAMS,
            "",
            "",
        )
        .unwrap_err();

        assert!(err.to_string().contains("web"));
    }

    #[test]
    fn cli_parses_generate_manifest() {
        let cli =
            Cli::try_parse_from(["manifold", "generate-manifest", "{}", "{}", "{}"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(matches!(cli.command, Commands::GenerateManifest { .. }));
    }
}
