//! # Model Registrar
//!
//! A Rust library for resolving Minecraft block models and registering them
//! with a map renderer.
//!
//! ## Overview
//!
//! Block models are JSON documents that may inherit from a parent model. The
//! resolver flattens a model's parent chain into one texture map and one
//! element list. The registrar then maps the model's texture variables onto
//! the six cube sides, picks a fallback texture for sides left open, and
//! hands geometry and textures to a [`RenderSink`].
//!
//! ## Quick Start
//!
//! ```ignore
//! use model_registrar::{load_asset_pack, ModelResolver, Registrar, Registration, RecordingSink, ShapeKind};
//!
//! // Load an asset pack
//! let pack = load_asset_pack("path/to/mod.jar")?;
//!
//! // Resolve a model through its parents
//! let resolver = ModelResolver::new(&pack);
//! let model = resolver.resolve("mymod:marble")?.rotate_y(90);
//!
//! // Register it
//! let mut registrar = Registrar::new(&pack, RecordingSink::new());
//! registrar.register(&Registration::new("mymod", "marble", ShapeKind::Generic, model))?;
//! registrar.publish();
//! ```

pub mod assets;
pub mod error;
pub mod manifest;
pub mod model;
pub mod registrar;
pub mod types;

// Re-export main types for convenience
pub use assets::{extract_textures, AssetPack, AssetSource, ResourceLocation, TextureData};
pub use error::{RegistrarError, Result};
pub use manifest::{Manifest, ManifestEntry};
pub use model::{Element, Model, ModelResolver};
pub use registrar::{
    BlockShape, Cuboid, FaceCoverage, RecordingSink, Registrar, RegistrarConfig, Registration,
    RegistrationReport, RenderSink, ShapeKind,
};
pub use types::{Axis, Direction, Side};

/// Load an asset pack from a file path (ZIP or directory).
pub fn load_asset_pack<P: AsRef<std::path::Path>>(path: P) -> Result<AssetPack> {
    assets::loader::load_from_path(path)
}

/// Load an asset pack from ZIP bytes.
pub fn load_asset_pack_from_bytes(data: &[u8]) -> Result<AssetPack> {
    assets::loader::load_from_bytes(data)
}
