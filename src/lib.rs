//! zx-screen - ZX Spectrum screen converter
//!
//! Reads PNG images, converts them with `zx-dither` and writes previews,
//! SCR dumps and JSON reports. This library exposes modules for integration
//! testing.

pub mod error;
pub mod models;
pub mod services;
