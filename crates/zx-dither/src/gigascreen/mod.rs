//! GigaScreen: two alternating screens whose averaged colours give a far
//! larger palette than one screen can show.
//!
//! The raster is first dithered against the GigaScreen palette. Then each
//! 8×8 block is matched to the best four-colour [`GigaScreenAttribute`] of
//! the chosen [`GigaScreenStrategy`], and [`combine`] splits it into the two
//! screens. [`reorder`] optionally swaps screens per block to reduce
//! flicker.

mod attribute;
mod combiner;
mod flicker;
mod strategy;

pub use attribute::{ColourCombo, GigaScreenAttribute};
pub use combiner::{choose_attribute, combine, GigaScreenOutput};
pub use flicker::{flicker_score, reorder, HsbOption};
pub use strategy::GigaScreenStrategy;
