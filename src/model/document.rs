//! Block model documents as they appear in `models/**/*.json`.

use super::Element;
use crate::assets::ResourceLocation;
use crate::error::{RegistrarError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

/// One unresolved model document.
///
/// `textures` and `elements` are optional so that "key absent" can be told
/// apart from "key present but empty": an explicit empty element list clears
/// whatever the parent defined.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModelDocument {
    /// Parent model to inherit from.
    #[serde(default)]
    pub parent: Option<String>,

    /// Texture variable definitions.
    #[serde(default)]
    pub textures: Option<BTreeMap<String, String>>,

    /// Model elements (cuboids).
    #[serde(default)]
    pub elements: Option<Vec<Element>>,
}

impl ModelDocument {
    /// Parse a document, reporting any structural problem against `location`.
    pub fn parse(location: &ResourceLocation, json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RegistrarError::MalformedDocument {
            location: location.to_string(),
            reason: e.to_string(),
        })
    }
}
