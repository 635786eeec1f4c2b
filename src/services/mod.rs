pub mod conversion;
pub mod png_io;

pub use conversion::{ColourCount, ConversionReport, ConversionService};
pub use png_io::{decode_png, encode_png, read_png};
