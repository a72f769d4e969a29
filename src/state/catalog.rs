//! The artwork collection.
//!
//! The collection is fixed at build time: exactly three artworks, ids 1..=3
//! in catalog order. Nothing is added or removed at runtime.

use iced::widget::image;

/// Number of artworks in the collection.
pub const CATALOG_SIZE: usize = 3;

/// One artwork in the collection.
#[derive(Debug, Clone)]
pub struct Artwork {
    /// Unique id, 1-based, defines catalog order
    pub id: u32,
    /// Decoded raster asset, ready for display
    pub image: image::Handle,
    pub title: String,
    pub artist: String,
    pub year: String,
    pub location: String,
    pub description: String,
}

/// The fixed, ordered artwork collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: [Artwork; CATALOG_SIZE],
}

impl Catalog {
    pub fn new(entries: [Artwork; CATALOG_SIZE]) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Resolve the artwork for a 1-based index.
    ///
    /// Any index without a matching entry resolves to the last artwork, so
    /// the lookup is total. The fallback is deliberate, not an error path.
    pub fn lookup(&self, index: u32) -> &Artwork {
        self.entries
            .iter()
            .find(|artwork| artwork.id == index)
            .unwrap_or(&self.entries[CATALOG_SIZE - 1])
    }
}
