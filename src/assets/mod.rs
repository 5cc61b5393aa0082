//! Asset lookup: model documents and texture images by resource location.
//!
//! This module handles loading asset packs (ZIP files or directories laid out
//! as `assets/<namespace>/{models,textures}/...`) and exposes them through the
//! [`AssetSource`] lookup trait the resolver and registrar consume.

pub mod extract;
pub mod loader;
pub mod location;
pub mod texture;

pub use extract::extract_textures;
pub use location::{ResourceLocation, DEFAULT_NAMESPACE};
pub use texture::TextureData;

use std::collections::HashMap;

/// Lookup service for raw assets.
pub trait AssetSource {
    /// Raw JSON text of the model document at `location`.
    fn model_document(&self, location: &ResourceLocation) -> Option<&str>;

    /// Texture image at `location`.
    fn texture(&self, location: &ResourceLocation) -> Option<&TextureData>;
}

/// A loaded asset pack.
///
/// Model documents are kept as raw text and only parsed when a model is
/// resolved, so a broken document surfaces as a resolution error for the
/// block that needs it instead of vanishing at load time.
#[derive(Debug, Default, Clone)]
pub struct AssetPack {
    /// Model documents by namespace and model path.
    /// Key: namespace, Value: map of model_path to JSON text.
    pub models: HashMap<String, HashMap<String, String>>,

    /// Texture data by namespace and texture path.
    /// Key: namespace, Value: map of texture_path to data.
    pub textures: HashMap<String, HashMap<String, TextureData>>,
}

impl AssetPack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a model document.
    pub fn add_model(&mut self, namespace: &str, model_path: &str, json: impl Into<String>) {
        self.models
            .entry(namespace.to_string())
            .or_default()
            .insert(model_path.to_string(), json.into());
    }

    /// Add a texture.
    pub fn add_texture(&mut self, namespace: &str, texture_path: &str, texture: TextureData) {
        self.textures
            .entry(namespace.to_string())
            .or_default()
            .insert(texture_path.to_string(), texture);
    }

    /// Get the total number of model documents.
    pub fn model_count(&self) -> usize {
        self.models.values().map(|m| m.len()).sum()
    }

    /// Get the total number of textures.
    pub fn texture_count(&self) -> usize {
        self.textures.values().map(|m| m.len()).sum()
    }

    /// Get all namespaces in the asset pack.
    pub fn namespaces(&self) -> Vec<&str> {
        let mut namespaces: Vec<_> = self
            .models
            .keys()
            .chain(self.textures.keys())
            .map(|s| s.as_str())
            .collect();
        namespaces.sort();
        namespaces.dedup();
        namespaces
    }
}

impl AssetSource for AssetPack {
    fn model_document(&self, location: &ResourceLocation) -> Option<&str> {
        self.models
            .get(&location.namespace)
            .and_then(|ns| ns.get(&location.path))
            .map(|s| s.as_str())
    }

    fn texture(&self, location: &ResourceLocation) -> Option<&TextureData> {
        self.textures
            .get(&location.namespace)
            .and_then(|ns| ns.get(&location.path))
    }
}
