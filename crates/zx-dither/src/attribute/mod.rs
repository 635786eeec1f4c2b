//! Attribute reduction.
//!
//! Every 8×8 block may show only two colours that share a BRIGHT bit.
//! [`colour_attributes`] picks each block's two dominant colours and an
//! [`AttributeStrategy`] reconciles their brightness.

mod reducer;
mod strategy;

pub use reducer::{colour_attributes, most_popular, tally, Tally};
pub use strategy::AttributeStrategy;
