//! SCR screen dumps: 6144 bytes of bitmap followed by 768 attribute bytes.

mod decoder;
mod encoder;

pub use decoder::{decode, decode_gigascreen};
pub use encoder::{
    bitmap_offset, block_attributes, encode, row_order, BlockAttribute, BrightRule,
    ATTRIBUTE_SIZE, BITMAP_SIZE, COLUMNS, ROWS, SCREEN_HEIGHT, SCREEN_WIDTH, SCR_SIZE,
};
