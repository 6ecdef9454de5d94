//! Reading vocabulary (digit, place, tier and sign words) loaded from TOML.
//!
//! - `Vocabulary::init_custom(toml_content)` sets a custom TOML before first use
//! - `Vocabulary::global()` returns `&'static Vocabulary` (lazy-init singleton)
//! - Default readings are embedded via `include_str!("default_vocab.toml")`

mod config;
mod table;

pub use config::{parse_vocab_toml, VocabConfigError};
pub use table::{SokuonRule, Vocabulary};

pub const DEFAULT_VOCAB_TOML: &str = include_str!("default_vocab.toml");

/// Returns the embedded default vocabulary TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_VOCAB_TOML
}
