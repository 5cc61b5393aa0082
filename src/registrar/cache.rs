//! Texture registration cache.

use crate::assets::ResourceLocation;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Sink handles by texture location.
///
/// Each location is registered with the sink at most once per publish cycle;
/// later requests reuse the stored outcome, including a refusal (`None`).
#[derive(Debug)]
pub struct TextureCache<H> {
    handles: HashMap<ResourceLocation, Option<H>>,
}

impl<H> Default for TextureCache<H> {
    fn default() -> Self {
        Self {
            handles: HashMap::new(),
        }
    }
}

impl<H: Clone> TextureCache<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached handle for `location`, or call `register` once to
    /// obtain it. A failed registration (`None`) is remembered too.
    pub fn get_or_register<F>(&mut self, location: &ResourceLocation, register: F) -> Option<H>
    where
        F: FnOnce() -> Option<H>,
    {
        match self.handles.entry(location.clone()) {
            Entry::Occupied(entry) => {
                log::trace!("Texture {} already looked up", location);
                entry.get().clone()
            }
            Entry::Vacant(entry) => entry.insert(register()).clone(),
        }
    }

    pub fn get(&self, location: &ResourceLocation) -> Option<&H> {
        self.handles.get(location).and_then(Option::as_ref)
    }

    /// Number of locations that produced a handle.
    pub fn len(&self) -> usize {
        self.handles.values().filter(|handle| handle.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
