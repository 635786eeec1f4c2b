//! Stable names for configuration enums.
//!
//! The names match the serde (kebab-case) spelling, so the same string
//! works in a YAML config file and on the command line.

/// A closed set of variants with stable lowercase names.
pub trait Named: Sized + Copy + 'static {
    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The variant's stable name.
    fn name(self) -> &'static str;

    /// Look a variant up by name, ignoring ASCII case.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }
}
