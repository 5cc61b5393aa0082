//! Namespaced resource identifiers and their on-disk conventions.

use serde::{Deserialize, Serialize};

/// Namespace assumed when an identifier does not carry one.
pub const DEFAULT_NAMESPACE: &str = "minecraft";

/// Folder bare model names live under (`stone` -> `block/stone`).
const MODEL_FOLDER: &str = "block";

/// A `namespace:path` identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ResourceLocation {
    pub namespace: String,
    pub path: String,
}

impl ResourceLocation {
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            path: path.into(),
        }
    }

    /// Parse a location, using `default_namespace` when none is given.
    ///
    /// "mymod:block/custom" -> ("mymod", "block/custom")
    /// "block/stone" -> (default_namespace, "block/stone")
    pub fn parse_with(location: &str, default_namespace: &str) -> Self {
        match location.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Self::new(default_namespace, location),
        }
    }

    /// Parse a location in the default namespace.
    pub fn parse(location: &str) -> Self {
        Self::parse_with(location, DEFAULT_NAMESPACE)
    }

    /// Parse a model name. Bare names without a folder are looked up under
    /// `block/`, so `cube_all` and `block/cube_all` name the same document.
    pub fn model(name: &str) -> Self {
        let mut location = Self::parse(name);
        if !location.path.contains('/') {
            location.path = format!("{}/{}", MODEL_FOLDER, location.path);
        }
        location
    }

    /// Whether this names a renderer builtin (`builtin/generated`, ...) rather
    /// than a document.
    pub fn is_builtin(&self) -> bool {
        self.path.starts_with("builtin/")
    }

    /// Archive path of the model document this location names.
    pub fn model_file(&self) -> String {
        format!("assets/{}/models/{}.json", self.namespace, self.path)
    }

    /// Archive path of the texture image this location names.
    pub fn texture_file(&self) -> String {
        format!("assets/{}/textures/{}.png", self.namespace, self.path)
    }

    /// Last path segment, used as the texture's short name.
    pub fn name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

impl std::fmt::Display for ResourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_resource_location() {
        assert_eq!(
            ResourceLocation::parse("minecraft:block/stone"),
            ResourceLocation::new("minecraft", "block/stone")
        );
        assert_eq!(
            ResourceLocation::parse("mymod:block/custom"),
            ResourceLocation::new("mymod", "block/custom")
        );
        assert_eq!(
            ResourceLocation::parse_with("blocks/ore", "mymod"),
            ResourceLocation::new("mymod", "blocks/ore")
        );
    }

    #[test]
    fn test_model_names() {
        assert_eq!(ResourceLocation::model("cube_all").path, "block/cube_all");
        assert_eq!(ResourceLocation::model("block/cube_all").path, "block/cube_all");
        assert_eq!(
            ResourceLocation::model("mymod:slab").model_file(),
            "assets/mymod/models/block/slab.json"
        );
        assert!(ResourceLocation::model("builtin/generated").is_builtin());
    }

    #[test]
    fn test_texture_file() {
        let location = ResourceLocation::parse("blocks/stone");
        assert_eq!(location.texture_file(), "assets/minecraft/textures/blocks/stone.png");
        assert_eq!(location.name(), "stone");
        assert_eq!(location.to_string(), "minecraft:blocks/stone");
    }
}
