//! Output types for the conversion pipeline.
//!
//! A [`Conversion`] holds one [`ResultImage`] tagged [`ResultKind::Final`]
//! and, in GigaScreen mode, the two constituent screens tagged
//! [`ResultKind::Supporting`].

mod conversion;

pub use conversion::{Conversion, ResultImage, ResultKind};
