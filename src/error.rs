//! Error types for model resolution and registration.

use thiserror::Error;

/// Result type alias using RegistrarError.
pub type Result<T> = std::result::Result<T, RegistrarError>;

/// Main error type for resolving and registering block models.
#[derive(Error, Debug)]
pub enum RegistrarError {
    /// Failed to read or parse a ZIP archive.
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Failed to parse JSON data.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read or process an image.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid asset pack structure.
    #[error("Invalid asset pack: {0}")]
    InvalidAssetPack(String),

    /// A model document (or one of its ancestors) is not in the asset source.
    #[error("Model document not found: {0}")]
    DocumentNotFound(String),

    /// A model document exists but does not have the expected structure.
    #[error("Malformed model document {location}: {reason}")]
    MalformedDocument { location: String, reason: String },

    /// The parent chain revisits a document it already passed through.
    #[error("Cyclic parent chain: {0}")]
    CyclicParentChain(String),

    /// A `#key` texture reference leads nowhere.
    #[error("Unresolved texture reference: {0}")]
    UnresolvedTextureReference(String),

    /// A literal texture path could not be found or registered.
    #[error("Unable to register texture {texture} for {domain}:{block}")]
    UnsupportedTexture {
        domain: String,
        block: String,
        texture: String,
    },
}
