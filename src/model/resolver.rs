//! Model inheritance resolution.

use super::{Model, ModelDocument};
use crate::assets::{AssetSource, ResourceLocation};
use crate::error::{RegistrarError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// Maximum parent chain length; longer chains are rejected as malformed.
const MAX_PARENT_DEPTH: usize = 32;

/// Resolves model inheritance chains.
pub struct ModelResolver<'a> {
    source: &'a dyn AssetSource,
    cache: RefCell<HashMap<ResourceLocation, Model>>,
}

impl<'a> ModelResolver<'a> {
    pub fn new(source: &'a dyn AssetSource) -> Self {
        Self {
            source,
            cache: RefCell::new(HashMap::new()),
        }
    }

    /// Resolve a model by name (`stone`, `block/stone`, `mymod:block/ore`).
    pub fn resolve(&self, name: &str) -> Result<Model> {
        self.resolve_location(&ResourceLocation::model(name))
    }

    /// Resolve a model with all inherited properties.
    pub fn resolve_location(&self, location: &ResourceLocation) -> Result<Model> {
        let mut chain = Vec::new();
        self.resolve_internal(location, &mut chain)
    }

    /// Number of models (including ancestors) resolved so far.
    pub fn cached_count(&self) -> usize {
        self.cache.borrow().len()
    }

    fn resolve_internal(
        &self,
        location: &ResourceLocation,
        chain: &mut Vec<ResourceLocation>,
    ) -> Result<Model> {
        if let Some(cached) = self.cache.borrow().get(location) {
            return Ok(cached.clone());
        }

        if chain.contains(location) {
            return Err(RegistrarError::CyclicParentChain(render_chain(chain, location)));
        }
        if chain.len() >= MAX_PARENT_DEPTH {
            let root = chain.first().unwrap_or(location);
            return Err(RegistrarError::MalformedDocument {
                location: root.to_string(),
                reason: format!(
                    "parent chain is deeper than {} models (reached {})",
                    MAX_PARENT_DEPTH, location
                ),
            });
        }

        let json = self.source.model_document(location).ok_or_else(|| {
            RegistrarError::DocumentNotFound(format!("{} ({})", location, location.model_file()))
        })?;
        let document = ModelDocument::parse(location, json)?;

        let base = match &document.parent {
            Some(parent) => {
                let parent_location = ResourceLocation::model(parent);
                if parent_location.is_builtin() {
                    // Renderer builtins have no document; they are empty roots.
                    Model::default()
                } else {
                    chain.push(location.clone());
                    let resolved = self.resolve_internal(&parent_location, chain);
                    chain.pop();
                    resolved?
                }
            }
            None => Model::default(),
        };

        let model = base.overlay(document);
        self.cache
            .borrow_mut()
            .insert(location.clone(), model.clone());

        Ok(model)
    }
}

fn render_chain(chain: &[ResourceLocation], last: &ResourceLocation) -> String {
    chain
        .iter()
        .chain(std::iter::once(last))
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
