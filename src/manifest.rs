//! Registration manifests.
//!
//! A manifest lists the block variants to register, one entry per variant:
//!
//! ```json
//! {
//!   "blocks": [
//!     { "domain": "mymod", "name": "marble", "meta": 1, "model": "mymod:marble_polished" },
//!     { "domain": "mymod", "name": "marble_door", "shape": "door", "model": "mymod:marble_door", "y": 90 }
//!   ]
//! }
//! ```

use crate::error::Result;
use crate::model::ModelResolver;
use crate::registrar::{Registration, ShapeKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One block variant in a manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub domain: String,
    pub name: String,
    #[serde(default)]
    pub meta: u32,
    #[serde(default)]
    pub shape: ShapeKind,
    /// Model name, resolved with [`ModelResolver::resolve`].
    pub model: String,
    /// Rotation around X in degrees, applied first.
    #[serde(default)]
    pub x: i32,
    /// Rotation around Y in degrees, applied second.
    #[serde(default)]
    pub y: i32,
    /// Rotation around Z in degrees, applied last.
    #[serde(default)]
    pub z: i32,
}

impl ManifestEntry {
    /// Resolve the entry's model, rotate it and build the registration.
    pub fn resolve(&self, resolver: &ModelResolver) -> Result<Registration> {
        let mut model = resolver.resolve(&self.model)?;
        if self.x != 0 {
            model = model.rotate_x(self.x);
        }
        if self.y != 0 {
            model = model.rotate_y(self.y);
        }
        if self.z != 0 {
            model = model.rotate_z(self.z);
        }

        Ok(Registration::new(&self.domain, &self.name, self.shape, model).with_meta(self.meta))
    }
}

/// A list of block variants to register.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub blocks: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Domains named by the manifest, sorted and deduplicated.
    pub fn domains(&self) -> Vec<&str> {
        let mut domains: Vec<_> = self.blocks.iter().map(|b| b.domain.as_str()).collect();
        domains.sort();
        domains.dedup();
        domains
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetPack;
    use crate::error::RegistrarError;
    use crate::model::Element;

    #[test]
    fn test_parse_with_defaults() {
        let manifest = Manifest::from_json(
            r#"{ "blocks": [
                { "domain": "mymod", "name": "marble", "model": "mymod:marble" },
                { "domain": "mymod", "name": "gate", "shape": "fence", "meta": 4, "model": "gate", "y": 90 }
            ] }"#,
        )
        .unwrap();

        assert_eq!(manifest.blocks.len(), 2);
        assert_eq!(manifest.blocks[0].shape, ShapeKind::Generic);
        assert_eq!(manifest.blocks[0].meta, 0);
        assert_eq!(manifest.blocks[1].shape, ShapeKind::Fence);
        assert_eq!(manifest.blocks[1].y, 90);
        assert_eq!(manifest.domains(), vec!["mymod"]);
    }

    #[test]
    fn test_unknown_shape_is_rejected() {
        let result = Manifest::from_json(
            r#"{ "blocks": [ { "domain": "d", "name": "n", "shape": "stairs", "model": "m" } ] }"#,
        );
        assert!(matches!(result, Err(RegistrarError::Json(_))));
    }

    #[test]
    fn test_entry_resolves_and_rotates() {
        let mut pack = AssetPack::new();
        pack.add_model(
            "mymod",
            "block/slab_top",
            r#"{ "textures": { "all": "blocks/stone" },
                 "elements": [ { "from": [0, 8, 0], "to": [16, 16, 16] } ] }"#,
        );
        let resolver = ModelResolver::new(&pack);
        let entry = ManifestEntry {
            domain: "mymod".to_string(),
            name: "slab".to_string(),
            meta: 9,
            shape: ShapeKind::Generic,
            model: "mymod:slab_top".to_string(),
            x: 90,
            y: 0,
            z: 0,
        };

        let registration = entry.resolve(&resolver).unwrap();
        assert_eq!(registration.meta, 9);
        assert_eq!(registration.model.texture("all"), Some("blocks/stone"));
        assert_eq!(
            registration.model.elements(),
            &[Element::new([0.0, 0.0, 8.0], [16.0, 16.0, 0.0])]
        );
    }
}
