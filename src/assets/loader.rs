//! Asset pack loading from ZIP files and directories.

use super::texture::load_texture_from_bytes;
use super::AssetPack;
use crate::error::{RegistrarError, Result};
use std::io::Read;
use std::path::Path;

/// Load an asset pack from a file path.
///
/// Supports both ZIP files and directories.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<AssetPack> {
    let path = path.as_ref();

    if path.is_dir() {
        load_from_directory(path)
    } else {
        let data = std::fs::read(path)?;
        load_from_bytes(&data)
    }
}

/// Load an asset pack from bytes (ZIP data).
pub fn load_from_bytes(data: &[u8]) -> Result<AssetPack> {
    let cursor = std::io::Cursor::new(data);
    let mut archive = zip::ZipArchive::new(cursor)?;

    let mut pack = AssetPack::new();

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let file_path = file.name().to_string();

        if file.is_dir() {
            continue;
        }

        let Some((namespace, asset_type, asset_path)) = parse_asset_path(&file_path) else {
            continue;
        };

        match asset_type {
            "models" if asset_path.ends_with(".json") => {
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                pack.add_model(namespace, asset_path.trim_end_matches(".json"), contents);
            }
            "textures" if asset_path.ends_with(".png") => {
                let mut data = Vec::new();
                file.read_to_end(&mut data)?;
                add_texture(&mut pack, namespace, asset_path.trim_end_matches(".png"), &data);
            }
            _ => {}
        }
    }

    log::debug!(
        "Loaded {} models and {} textures from archive",
        pack.model_count(),
        pack.texture_count()
    );
    Ok(pack)
}

/// Load an asset pack from a directory.
fn load_from_directory(path: &Path) -> Result<AssetPack> {
    let mut pack = AssetPack::new();

    let assets_path = path.join("assets");
    if !assets_path.exists() {
        return Err(RegistrarError::InvalidAssetPack(format!(
            "No assets directory found in {}",
            path.display()
        )));
    }

    for namespace_entry in std::fs::read_dir(&assets_path)? {
        let namespace_entry = namespace_entry?;
        if !namespace_entry.file_type()?.is_dir() {
            continue;
        }

        let namespace = namespace_entry.file_name().to_string_lossy().to_string();
        let namespace_path = namespace_entry.path();

        let models_path = namespace_path.join("models");
        if models_path.exists() {
            walk_files(&models_path, &models_path, "json", &mut |model_path, file| {
                let contents = std::fs::read_to_string(file)?;
                pack.add_model(&namespace, model_path, contents);
                Ok(())
            })?;
        }

        let textures_path = namespace_path.join("textures");
        if textures_path.exists() {
            walk_files(&textures_path, &textures_path, "png", &mut |texture_path, file| {
                let data = std::fs::read(file)?;
                add_texture(&mut pack, &namespace, texture_path, &data);
                Ok(())
            })?;
        }
    }

    log::debug!(
        "Loaded {} models and {} textures from {}",
        pack.model_count(),
        pack.texture_count(),
        path.display()
    );
    Ok(pack)
}

/// Decode and store a texture, skipping (with a warning) images that fail to decode.
fn add_texture(pack: &mut AssetPack, namespace: &str, texture_path: &str, data: &[u8]) {
    match load_texture_from_bytes(data) {
        Ok(texture) => {
            log::trace!(
                "Loaded texture {}:{} ({}x{})",
                namespace,
                texture_path,
                texture.width,
                texture.height
            );
            pack.add_texture(namespace, texture_path, texture);
        }
        Err(e) => {
            log::warn!(
                "Failed to load texture {}/{}: {}",
                namespace,
                texture_path,
                e
            );
        }
    }
}

/// Parse an asset path from a ZIP file.
/// Returns (namespace, asset_type, asset_path) if valid.
fn parse_asset_path(file_path: &str) -> Option<(&str, &str, &str)> {
    // Expected format: assets/{namespace}/{type}/{path}
    let parts: Vec<&str> = file_path.splitn(4, '/').collect();

    if parts.len() >= 4 && parts[0] == "assets" {
        Some((parts[1], parts[2], parts[3]))
    } else {
        None
    }
}

/// Visit every file with the given extension below `dir`, passing its
/// extension-less path relative to `base` (always `/`-separated).
fn walk_files<F>(base: &Path, dir: &Path, extension: &str, handler: &mut F) -> Result<()>
where
    F: FnMut(&str, &Path) -> Result<()>,
{
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            walk_files(base, &path, extension, handler)?;
        } else if path.extension().map(|e| e == extension).unwrap_or(false) {
            let relative = path
                .strip_prefix(base)
                .map_err(|e| RegistrarError::InvalidAssetPack(e.to_string()))?
                .with_extension("")
                .to_string_lossy()
                .replace('\\', "/");

            handler(&relative, &path)?;
        }
    }
    Ok(())
}
