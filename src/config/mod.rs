pub mod scoring;
pub mod settings;

pub use scoring::{ScoringConfig, DEFAULT_CUTOFF, MAX_ITEM_COUNT};
pub use settings::{ConfigError, PaletteSettings};
