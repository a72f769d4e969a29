//! View composition module
//!
//! Stateless view fragments assembled by the root application:
//! - The gallery screen: artwork, caption band, navigation row (gallery.rs)
//! - The detail overlay: scrim plus location/description panel (overlay.rs)
//!
//! Fragments receive read-only artwork snapshots and emit `Message`s; none
//! of them hold state.

pub mod gallery;
pub mod overlay;
