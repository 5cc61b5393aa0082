//! Model Registrar CLI
//!
//! Resolve block models and register them with a recording render sink.

use clap::{Parser, Subcommand};
use model_registrar::{
    extract_textures, load_asset_pack, Manifest, ModelResolver, RecordingSink, Registrar,
    RegistrarConfig,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "model-registrar")]
#[command(author, version, about = "Resolve block models and register them with a map renderer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one model through its parent chain and print it as JSON
    Resolve {
        /// Path to asset pack (ZIP/JAR or directory)
        #[arg(short, long)]
        assets: PathBuf,

        /// Model name (e.g., "stone" or "mymod:block/marble")
        #[arg(short, long)]
        model: String,

        /// Rotation around X in degrees
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        x: i32,

        /// Rotation around Y in degrees
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        y: i32,

        /// Rotation around Z in degrees
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        z: i32,
    },

    /// Register every block of a manifest and write the recorded definitions
    Register {
        /// Path to asset pack (ZIP/JAR or directory)
        #[arg(short, long)]
        assets: PathBuf,

        /// Manifest JSON listing the blocks to register
        #[arg(short, long)]
        manifest: PathBuf,

        /// Output JSON file for the recorded definitions
        #[arg(short, long)]
        output: PathBuf,

        /// Copy the manifest domains' textures into this texture pack directory
        #[arg(long)]
        extract: Option<PathBuf>,

        /// Namespace for texture paths without one
        #[arg(long, default_value = "minecraft")]
        namespace: String,
    },

    /// Show information about an asset pack
    Info {
        /// Path to asset pack (ZIP/JAR or directory)
        #[arg(short, long)]
        assets: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve {
            assets,
            model,
            x,
            y,
            z,
        } => {
            resolve_model(&assets, &model, [x, y, z])?;
        }
        Commands::Register {
            assets,
            manifest,
            output,
            extract,
            namespace,
        } => {
            register_manifest(&assets, &manifest, &output, extract.as_deref(), namespace)?;
        }
        Commands::Info { assets } => {
            show_pack_info(&assets)?;
        }
    }

    Ok(())
}

fn resolve_model(
    assets_path: &Path,
    name: &str,
    [x, y, z]: [i32; 3],
) -> Result<(), Box<dyn std::error::Error>> {
    let pack = load_asset_pack(assets_path)?;
    let resolver = ModelResolver::new(&pack);

    let model = resolver.resolve(name)?.rotate_x(x).rotate_y(y).rotate_z(z);

    println!("{}", serde_json::to_string_pretty(&model)?);
    Ok(())
}

fn register_manifest(
    assets_path: &Path,
    manifest_path: &Path,
    output_path: &Path,
    extract: Option<&Path>,
    namespace: String,
) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Loading asset pack from {}", assets_path.display());
    let pack = load_asset_pack(assets_path)?;
    let manifest = Manifest::load(manifest_path)?;
    log::info!("Registering {} blocks", manifest.blocks.len());

    let resolver = ModelResolver::new(&pack);
    let config = RegistrarConfig::default().with_default_namespace(namespace);
    let mut registrar = Registrar::with_config(&pack, RecordingSink::new(), config);

    let report = registrar.register_manifest(&resolver, &manifest);
    registrar.publish();

    if let Some(target) = extract {
        extract_textures(&pack, &manifest.domains(), target)?;
    }

    let sink = registrar.into_sink();
    fs::write(output_path, sink.to_json()?)?;

    println!(
        "Registered {} blocks ({} failed), {} textures -> {}",
        report.registered,
        report.failures.len(),
        sink.textures.len(),
        output_path.display()
    );
    for failure in &report.failures {
        println!("  {}:{}: {}", failure.domain, failure.block, failure.error);
    }

    Ok(())
}

fn show_pack_info(assets_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    println!("Loading asset pack from {:?}...", assets_path);
    let pack = load_asset_pack(assets_path)?;

    println!("\nAsset Pack Info:");
    println!("  Namespaces: {}", pack.namespaces().join(", "));
    println!("  Models: {}", pack.model_count());
    println!("  Textures: {}", pack.texture_count());

    Ok(())
}
