//! Registration of resolved models with a rendering sink.
//!
//! The [`Registrar`] turns one flattened [`Model`] per block variant into
//! renderer calls: a geometry definition chosen by [`ShapeKind`], and a
//! texture for every cube side. Side textures come from the model's texture
//! variables via [`FaceCoverage`], which also picks a fallback for sides the
//! model leaves open.

pub mod cache;
pub mod coverage;
pub mod geometry;
pub mod sink;

pub use cache::TextureCache;
pub use coverage::FaceCoverage;
pub use geometry::{BlockShape, Cuboid};
pub use sink::{RecordingSink, RenderSink};

use crate::assets::{AssetSource, ResourceLocation, DEFAULT_NAMESPACE};
use crate::error::{RegistrarError, Result};
use crate::manifest::Manifest;
use crate::model::{Model, ModelResolver, MODEL_UNITS};
use crate::types::Side;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The kind of geometry a block variant is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// The model's own elements, as cuboids.
    #[default]
    #[serde(alias = "default")]
    Generic,
    Door,
    Fence,
    Wall,
    Pane,
    Plant,
}

impl ShapeKind {
    /// Whether sides the model leaves open get the fallback texture.
    /// Plants are drawn as crossed quads and keep only explicit textures.
    pub fn uses_fallback(self) -> bool {
        !matches!(self, ShapeKind::Plant)
    }
}

/// One block variant to register.
#[derive(Debug, Clone)]
pub struct Registration {
    pub domain: String,
    pub name: String,
    pub meta: u32,
    pub shape: ShapeKind,
    pub model: Model,
}

impl Registration {
    pub fn new(domain: impl Into<String>, name: impl Into<String>, shape: ShapeKind, model: Model) -> Self {
        Self {
            domain: domain.into(),
            name: name.into(),
            meta: 0,
            shape,
            model,
        }
    }

    pub fn with_meta(mut self, meta: u32) -> Self {
        self.meta = meta;
        self
    }
}

/// Registrar configuration.
#[derive(Debug, Clone)]
pub struct RegistrarConfig {
    /// Model units per block edge; element coordinates are divided by this.
    pub unit_scale: f32,
    /// Namespace for texture paths that do not name one.
    pub default_namespace: String,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            unit_scale: MODEL_UNITS,
            default_namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

impl RegistrarConfig {
    pub fn with_unit_scale(mut self, unit_scale: f32) -> Self {
        self.unit_scale = unit_scale;
        self
    }

    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = namespace.into();
        self
    }
}

/// Per-domain bookkeeping, kept until the next publish cycle.
#[derive(Debug, Clone, Default)]
pub struct DomainRecord {
    /// Blocks registered successfully in this domain.
    pub blocks: usize,
}

/// A registration that did not make it to the sink.
#[derive(Debug)]
pub struct RegistrationFailure {
    pub domain: String,
    pub block: String,
    pub error: RegistrarError,
}

/// Outcome of a batch of registrations.
#[derive(Debug, Default)]
pub struct RegistrationReport {
    pub registered: usize,
    pub failures: Vec<RegistrationFailure>,
}

impl RegistrationReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    fn record(&mut self, domain: &str, block: &str, result: Result<()>) {
        match result {
            Ok(()) => self.registered += 1,
            Err(error) => {
                log::warn!("Failed to register {}:{}: {}", domain, block, error);
                self.failures.push(RegistrationFailure {
                    domain: domain.to_string(),
                    block: block.to_string(),
                    error,
                });
            }
        }
    }
}

/// Dispatches block registrations to a [`RenderSink`].
///
/// Holds the caches of one publish cycle: texture handles (so every texture
/// file is registered once) and the domains seen so far. [`Registrar::reset`]
/// starts a new cycle.
pub struct Registrar<'a, S: RenderSink> {
    assets: &'a dyn AssetSource,
    sink: S,
    config: RegistrarConfig,
    textures: TextureCache<S::Handle>,
    domains: BTreeMap<String, DomainRecord>,
}

impl<'a, S: RenderSink> Registrar<'a, S> {
    /// Create a registrar with default configuration.
    pub fn new(assets: &'a dyn AssetSource, sink: S) -> Self {
        Self::with_config(assets, sink, RegistrarConfig::default())
    }

    /// Create a registrar with custom configuration.
    pub fn with_config(assets: &'a dyn AssetSource, sink: S, config: RegistrarConfig) -> Self {
        Self {
            assets,
            sink,
            config,
            textures: TextureCache::new(),
            domains: BTreeMap::new(),
        }
    }

    pub fn config(&self) -> &RegistrarConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Number of distinct textures registered this cycle.
    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    pub fn domains(&self) -> &BTreeMap<String, DomainRecord> {
        &self.domains
    }

    /// Register one block variant.
    ///
    /// Fails with [`RegistrarError::UnsupportedTexture`] if a texture the
    /// model uses is missing from the assets or refused by the sink. Every
    /// texture is resolved before the block is defined, so a failed
    /// registration leaves no geometry or side assignments in the sink.
    pub fn register(&mut self, registration: &Registration) -> Result<()> {
        let Registration {
            domain,
            name,
            meta,
            shape,
            model,
        } = registration;

        let (meta, geometry) = match shape {
            ShapeKind::Generic => (Some(*meta), BlockShape::Cuboids(self.cuboids(model))),
            ShapeKind::Door => (None, BlockShape::Door),
            ShapeKind::Fence => (None, BlockShape::Fence),
            ShapeKind::Wall => (None, BlockShape::Wall),
            ShapeKind::Pane => (None, BlockShape::Pane),
            ShapeKind::Plant => (None, BlockShape::Plant),
        };
        let faces = self.face_textures(domain, name, model, shape.uses_fallback())?;

        self.open_domain(domain);
        self.sink.define_shape(domain, name, meta, &geometry);
        for (side, handle) in &faces {
            self.sink.assign_texture(domain, name, meta, *side, handle);
        }

        if let Some(record) = self.domains.get_mut(domain.as_str()) {
            record.blocks += 1;
        }
        log::debug!("Registered {}:{} as {:?}", domain, name, shape);
        Ok(())
    }

    /// Register every variant, continuing past failures.
    pub fn register_all<'r>(
        &mut self,
        registrations: impl IntoIterator<Item = &'r Registration>,
    ) -> RegistrationReport {
        let mut report = RegistrationReport::default();
        for registration in registrations {
            let result = self.register(registration);
            report.record(&registration.domain, &registration.name, result);
        }
        report
    }

    /// Resolve and register every manifest entry, continuing past failures.
    pub fn register_manifest(&mut self, resolver: &ModelResolver, manifest: &Manifest) -> RegistrationReport {
        let mut report = RegistrationReport::default();
        for entry in &manifest.blocks {
            let result = entry
                .resolve(resolver)
                .and_then(|registration| self.register(&registration));
            report.record(&entry.domain, &entry.name, result);
        }
        report
    }

    /// Commit every domain touched this cycle. Returns the number of domains.
    pub fn publish(&mut self) -> usize {
        for (domain, record) in &self.domains {
            log::info!("Publishing {} with {} blocks", domain, record.blocks);
            self.sink.publish_domain(domain);
        }
        self.domains.len()
    }

    /// Forget all cached textures and domains.
    pub fn reset(&mut self) {
        self.textures.clear();
        self.domains.clear();
    }

    fn open_domain(&mut self, domain: &str) {
        if !self.domains.contains_key(domain) {
            self.sink.open_domain(domain);
            self.domains.insert(domain.to_string(), DomainRecord::default());
        }
    }

    fn cuboids(&self, model: &Model) -> Vec<Cuboid> {
        model
            .elements()
            .iter()
            .map(|element| Cuboid::from_element(element, self.config.unit_scale))
            .collect()
    }

    /// Side assignments for a model, in the order they go to the sink.
    fn face_textures(
        &mut self,
        domain: &str,
        name: &str,
        model: &Model,
        use_fallback: bool,
    ) -> Result<Vec<(Side, S::Handle)>> {
        let mut coverage = FaceCoverage::new();
        let mut faces = Vec::new();

        // Broad groups go first so that explicit faces overwrite them at the sink.
        let mut entries: Vec<_> = model
            .textures()
            .map(|(key, value)| (Side::from_name(key), value))
            .collect();
        entries.sort_by_key(|(side, _)| std::cmp::Reverse(side.directions().len()));

        for (side, value) in entries {
            let Some(path) = model.lookup(value) else {
                continue;
            };

            let location = ResourceLocation::parse_with(path, &self.config.default_namespace);
            let handle = self.texture_handle(domain, name, &location)?;
            coverage.record(side, handle.clone());
            faces.push((side, handle));
        }

        if use_fallback {
            faces.extend(
                coverage
                    .apply_fallback()
                    .into_iter()
                    .map(|(direction, handle)| (Side::Single(direction), handle)),
            );
        }

        Ok(faces)
    }

    fn texture_handle(&mut self, domain: &str, block: &str, location: &ResourceLocation) -> Result<S::Handle> {
        let assets = self.assets;
        let sink = &mut self.sink;

        self.textures
            .get_or_register(location, || {
                if assets.texture(location).is_none() {
                    log::debug!("Texture {} is not in the asset source", location.texture_file());
                    return None;
                }
                sink.register_texture(domain, location)
            })
            .ok_or_else(|| RegistrarError::UnsupportedTexture {
                domain: domain.to_string(),
                block: block.to_string(),
                texture: location.texture_file(),
            })
    }
}
