//! Bundled artwork resources.
//!
//! The catalog strings live in `assets/catalog.json` and the raster assets
//! in `assets/img_*.png`. Everything is embedded into the binary at build
//! time and resolved once at startup; a broken bundle is a load-time fault,
//! not a runtime condition.

use iced::widget::image::Handle;
use serde::Deserialize;
use thiserror::Error;

use crate::state::catalog::{Artwork, Catalog, CATALOG_SIZE};

/// Embedded catalog document: one record per artwork, in catalog order.
const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

/// Errors raised while resolving the bundled assets.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to parse artwork catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("expected {CATALOG_SIZE} artworks in the catalog, found {0}")]
    WrongCount(usize),

    #[error("artwork at position {position} has id {id}, expected {expected}")]
    IdMismatch {
        position: usize,
        id: u32,
        expected: u32,
    },

    #[error("unknown image asset `{0}`")]
    UnknownImage(String),

    #[error("failed to decode image asset `{name}`")]
    ImageDecode {
        name: String,
        #[source]
        source: image::ImageError,
    },
}

/// One entry of the embedded catalog document.
#[derive(Debug, Deserialize)]
struct ArtworkRecord {
    id: u32,
    image: String,
    title: String,
    artist: String,
    year: String,
    location: String,
    description: String,
}

/// Resolve a raster asset name to its embedded bytes.
fn image_bytes(name: &str) -> Option<&'static [u8]> {
    match name {
        "img_1" => Some(include_bytes!("../assets/img_1.png")),
        "img_2" => Some(include_bytes!("../assets/img_2.png")),
        "img_3" => Some(include_bytes!("../assets/img_3.png")),
        _ => None,
    }
}

/// Load and validate the bundled artwork catalog.
///
/// Every raster asset is decoded up front so a broken bundle fails at
/// startup instead of on first display.
pub fn load_catalog() -> Result<Catalog, AssetError> {
    let records: Vec<ArtworkRecord> = serde_json::from_str(CATALOG_JSON)?;

    let mut entries = Vec::with_capacity(records.len());
    for (position, record) in records.into_iter().enumerate() {
        let expected = position as u32 + 1;
        if record.id != expected {
            return Err(AssetError::IdMismatch {
                position,
                id: record.id,
                expected,
            });
        }

        let bytes = image_bytes(&record.image)
            .ok_or_else(|| AssetError::UnknownImage(record.image.clone()))?;
        let decoded =
            image::load_from_memory(bytes).map_err(|source| AssetError::ImageDecode {
                name: record.image.clone(),
                source,
            })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();

        entries.push(Artwork {
            id: record.id,
            image: Handle::from_rgba(width, height, rgba.into_raw()),
            title: record.title,
            artist: record.artist,
            year: record.year,
            location: record.location,
            description: record.description,
        });
    }

    let entries: [Artwork; CATALOG_SIZE] = entries
        .try_into()
        .map_err(|leftover: Vec<Artwork>| AssetError::WrongCount(leftover.len()))?;

    Ok(Catalog::new(entries))
}
