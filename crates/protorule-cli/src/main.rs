/// Protorule CLI
///
/// Loads an invocation manifest, merges the plugin results it describes, and
/// prints the aggregate rule configuration as JSON for a downstream
/// build-rule emitter.

use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use protorule_core::{InvocationManifest, RuleConfiguration};

#[derive(Parser, Debug)]
#[command(name = "protorule")]
#[command(about = "Merges protoc plugin outputs into a build-rule source description")]
#[command(version)]
struct Args {
    /// Invocation manifest file (JSON)
    #[arg(value_name = "MANIFEST")]
    manifest: PathBuf,

    /// Override the manifest's execution root (usually only known at
    /// invocation time)
    #[arg(long, value_name = "PATH")]
    exec_root: Option<String>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("protorule: {:#}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let mut manifest = InvocationManifest::from_path(&args.manifest)
        .with_context(|| format!("loading manifest {}", args.manifest.display()))?;

    if let Some(exec_root) = args.exec_root {
        manifest.execution_root = exec_root;
    }

    debug!(
        target_dir = %manifest.target_dir,
        plugins = manifest.plugins.len(),
        "loaded manifest"
    );

    let config = RuleConfiguration::from_manifest(manifest);

    let json = if args.compact {
        serde_json::to_string(&config)?
    } else {
        serde_json::to_string_pretty(&config)?
    };
    println!("{}", json);

    Ok(())
}
