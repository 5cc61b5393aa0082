//! Raw texture extraction into a renderer texture pack.

use super::AssetPack;
use crate::error::Result;
use std::path::Path;

/// Copy the raw texture images of the given namespaces into `target`.
///
/// Files land at `target/<namespace>/textures/<path>.png`, byte for byte as
/// they were in the pack. Returns the number of files written. Namespaces with
/// no textures are skipped.
pub fn extract_textures(pack: &AssetPack, namespaces: &[&str], target: &Path) -> Result<usize> {
    let mut written = 0;

    for namespace in namespaces {
        let Some(textures) = pack.textures.get(*namespace) else {
            log::debug!("No textures to extract for namespace {}", namespace);
            continue;
        };

        let root = target.join(namespace).join("textures");
        for (texture_path, texture) in textures {
            let file = root.join(format!("{}.png", texture_path));
            if let Some(parent) = file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&file, &texture.bytes)?;
            written += 1;
        }
    }

    log::info!("Extracted {} textures into {}", written, target.display());
    Ok(written)
}
