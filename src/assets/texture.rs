//! Texture loading.

/// A texture image as stored in the asset pack.
///
/// The encoded bytes are kept untouched so they can be copied into a texture
/// pack verbatim; decoding only validates the image and reads its size.
#[derive(Debug, Clone)]
pub struct TextureData {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Encoded PNG bytes.
    pub bytes: Vec<u8>,
}

/// Load a texture from PNG bytes.
pub fn load_texture_from_bytes(data: &[u8]) -> Result<TextureData, image::ImageError> {
    let img = image::load_from_memory(data)?;

    Ok(TextureData {
        width: img.width(),
        height: img.height(),
        bytes: data.to_vec(),
    })
}

/// Encode a solid-colour RGBA texture as PNG bytes. Used to build fixtures.
#[cfg(test)]
pub(crate) fn solid_png(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    use image::ImageEncoder;

    let pixels: Vec<u8> = rgba
        .iter()
        .copied()
        .cycle()
        .take((width * height * 4) as usize)
        .collect();
    let mut bytes = Vec::new();
    image::codecs::png::PngEncoder::new(std::io::Cursor::new(&mut bytes))
        .write_image(&pixels, width, height, image::ExtendedColorType::Rgba8)
        .unwrap();
    bytes
}
