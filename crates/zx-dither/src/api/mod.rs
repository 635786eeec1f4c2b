//! Public API for the zx-dither crate.
//!
//! This module provides the high-level API: the [`Converter`] builder, its
//! [`ConversionOptions`] and the unified [`ZxError`] type.

mod builder;
mod error;
mod options;

pub use builder::Converter;
pub use error::ZxError;
pub use options::{ConversionOptions, MAX_MONO_INDEX};
