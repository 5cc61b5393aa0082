//! Flattened block models.
//!
//! A [`Model`] is what remains of a model document once its parent chain has
//! been applied: one texture map and one element list. Models are immutable;
//! rotations return new models.

pub mod document;
pub mod element;
pub mod resolver;

pub use document::ModelDocument;
pub use element::{Element, MODEL_UNITS};
pub use resolver::ModelResolver;

use crate::error::{RegistrarError, Result};
use crate::types::Axis;
use serde::Serialize;
use std::collections::BTreeMap;

/// Maximum number of `#key` indirections followed before giving up.
const MAX_TEXTURE_HOPS: usize = 10;

/// A fully resolved block model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    textures: BTreeMap<String, String>,
    elements: Vec<Element>,
}

impl Model {
    pub fn new<K, V>(textures: impl IntoIterator<Item = (K, V)>, elements: Vec<Element>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            textures: textures
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            elements,
        }
    }

    /// Apply a child document on top of this (parent) model.
    ///
    /// Textures are overlaid key by key. Elements are replaced wholesale when
    /// the document declares them at all, even as an empty list.
    pub(crate) fn overlay(mut self, document: ModelDocument) -> Model {
        if let Some(textures) = document.textures {
            self.textures.extend(textures);
        }
        if let Some(elements) = document.elements {
            self.elements = elements;
        }
        self
    }

    /// Raw value of a texture variable, without following references.
    pub fn texture(&self, key: &str) -> Option<&str> {
        self.textures.get(key).map(|s| s.as_str())
    }

    /// All texture variables in key order.
    pub fn textures(&self) -> impl Iterator<Item = (&str, &str)> {
        self.textures.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Follow a texture value to a literal path.
    ///
    /// Values starting with `#` name another variable of this model and are
    /// followed until a literal is reached. Fails if a variable is missing or
    /// the chain does not end within [`MAX_TEXTURE_HOPS`].
    pub fn resolve_reference<'a>(&'a self, value: &'a str) -> Result<&'a str> {
        let mut current = value;
        let mut hops = 0;

        while let Some(key) = current.strip_prefix('#') {
            if hops == MAX_TEXTURE_HOPS {
                return Err(RegistrarError::UnresolvedTextureReference(format!(
                    "{} (more than {} hops, possible cycle)",
                    value, MAX_TEXTURE_HOPS
                )));
            }
            current = self.texture(key).ok_or_else(|| {
                RegistrarError::UnresolvedTextureReference(format!("{} (#{} is undefined)", value, key))
            })?;
            hops += 1;
        }

        Ok(current)
    }

    /// Like [`Model::resolve_reference`], but a dead end is simply "no texture".
    pub fn lookup<'a>(&'a self, value: &'a str) -> Option<&'a str> {
        match self.resolve_reference(value) {
            Ok(path) => Some(path),
            Err(e) => {
                log::debug!("{}", e);
                None
            }
        }
    }

    /// Every texture variable mapped to its final path. Variables that do not
    /// resolve are left out.
    pub fn resolved_textures(&self) -> BTreeMap<&str, &str> {
        self.textures()
            .filter_map(|(key, value)| self.lookup(value).map(|path| (key, path)))
            .collect()
    }

    /// Rotate every element around `axis`, keeping the textures.
    pub fn rotate(&self, axis: Axis, degrees: i32) -> Model {
        Model {
            textures: self.textures.clone(),
            elements: self.elements.iter().map(|e| e.rotate(axis, degrees)).collect(),
        }
    }

    pub fn rotate_x(&self, degrees: i32) -> Model {
        self.rotate(Axis::X, degrees)
    }

    pub fn rotate_y(&self, degrees: i32) -> Model {
        self.rotate(Axis::Y, degrees)
    }

    pub fn rotate_z(&self, degrees: i32) -> Model {
        self.rotate(Axis::Z, degrees)
    }
}
