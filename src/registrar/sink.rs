//! The rendering host the registrar publishes into.

use super::geometry::BlockShape;
use crate::assets::ResourceLocation;
use crate::types::{Direction, Side};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Receiver of block geometry and texture assignments.
///
/// All calls are fire-and-forget except [`RenderSink::register_texture`],
/// whose handle is needed for later assignments. `meta` is only set for
/// generic cuboid blocks, which are registered per meta variant.
pub trait RenderSink {
    /// Opaque reference to a registered texture file.
    type Handle: Clone;

    /// Called before the first block of a domain is defined.
    fn open_domain(&mut self, _domain: &str) {}

    /// Define the geometry of a block.
    fn define_shape(&mut self, domain: &str, block: &str, meta: Option<u32>, shape: &BlockShape);

    /// Register a texture file, or `None` if the renderer cannot use it.
    fn register_texture(&mut self, domain: &str, texture: &ResourceLocation) -> Option<Self::Handle>;

    /// Assign a registered texture to a side of a block.
    fn assign_texture(
        &mut self,
        domain: &str,
        block: &str,
        meta: Option<u32>,
        side: Side,
        texture: &Self::Handle,
    );

    /// Commit everything defined for a domain.
    fn publish_domain(&mut self, _domain: &str) {}
}

/// A texture file registered with a [`RecordingSink`].
#[derive(Debug, Clone, Serialize)]
pub struct RecordedTexture {
    /// Short name of the texture.
    pub name: String,
    /// File the renderer should load, relative to its texture pack root.
    pub file: String,
}

/// A side assignment made on a [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordedFace {
    pub side: Side,
    pub texture: usize,
}

/// Everything recorded for one block variant.
#[derive(Debug, Clone, Serialize)]
pub struct RecordedBlock {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<u32>,
    pub shapes: Vec<BlockShape>,
    pub faces: Vec<RecordedFace>,
}

impl RecordedBlock {
    /// The texture that ends up on `direction`: the last assignment covering it.
    pub fn texture_for(&self, direction: Direction) -> Option<usize> {
        self.faces
            .iter()
            .rev()
            .find(|face| face.side.directions().contains(&direction))
            .map(|face| face.texture)
    }
}

/// Everything recorded for one domain.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RecordedDomain {
    pub blocks: Vec<RecordedBlock>,
    pub published: bool,
}

impl RecordedDomain {
    pub fn block(&self, name: &str, meta: Option<u32>) -> Option<&RecordedBlock> {
        self.blocks.iter().find(|b| b.name == name && b.meta == meta)
    }

    fn block_mut(&mut self, name: &str, meta: Option<u32>) -> &mut RecordedBlock {
        let index = match self.blocks.iter().position(|b| b.name == name && b.meta == meta) {
            Some(index) => index,
            None => {
                self.blocks.push(RecordedBlock {
                    name: name.to_string(),
                    meta,
                    shapes: Vec::new(),
                    faces: Vec::new(),
                });
                self.blocks.len() - 1
            }
        };
        &mut self.blocks[index]
    }
}

/// In-memory sink that records every call. Handles are indices into
/// [`RecordingSink::textures`].
#[derive(Debug, Default, Serialize)]
pub struct RecordingSink {
    pub domains: BTreeMap<String, RecordedDomain>,
    pub textures: Vec<RecordedTexture>,
    #[serde(skip)]
    registrations: HashMap<ResourceLocation, usize>,
    #[serde(skip)]
    rejected: HashSet<ResourceLocation>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the sink refuse to register `texture`.
    pub fn reject(mut self, texture: ResourceLocation) -> Self {
        self.rejected.insert(texture);
        self
    }

    /// How many times `texture` was registered.
    pub fn registration_count(&self, texture: &ResourceLocation) -> usize {
        self.registrations.get(texture).copied().unwrap_or(0)
    }

    pub fn domain(&self, domain: &str) -> Option<&RecordedDomain> {
        self.domains.get(domain)
    }

    pub fn block(&self, domain: &str, name: &str, meta: Option<u32>) -> Option<&RecordedBlock> {
        self.domain(domain).and_then(|d| d.block(name, meta))
    }

    /// File of the texture behind a handle.
    pub fn texture_file(&self, handle: usize) -> Option<&str> {
        self.textures.get(handle).map(|t| t.file.as_str())
    }

    /// Serialize the recording as pretty JSON.
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl RenderSink for RecordingSink {
    type Handle = usize;

    fn open_domain(&mut self, domain: &str) {
        self.domains.entry(domain.to_string()).or_default();
    }

    fn define_shape(&mut self, domain: &str, block: &str, meta: Option<u32>, shape: &BlockShape) {
        self.domains
            .entry(domain.to_string())
            .or_default()
            .block_mut(block, meta)
            .shapes
            .push(shape.clone());
    }

    fn register_texture(&mut self, _domain: &str, texture: &ResourceLocation) -> Option<usize> {
        *self.registrations.entry(texture.clone()).or_insert(0) += 1;
        if self.rejected.contains(texture) {
            return None;
        }

        self.textures.push(RecordedTexture {
            name: texture.name().to_string(),
            file: format!("{}/textures/{}.png", texture.namespace, texture.path),
        });
        Some(self.textures.len() - 1)
    }

    fn assign_texture(
        &mut self,
        domain: &str,
        block: &str,
        meta: Option<u32>,
        side: Side,
        texture: &usize,
    ) {
        self.domains
            .entry(domain.to_string())
            .or_default()
            .block_mut(block, meta)
            .faces
            .push(RecordedFace {
                side,
                texture: *texture,
            });
    }

    fn publish_domain(&mut self, domain: &str) {
        self.domains.entry(domain.to_string()).or_default().published = true;
    }
}
