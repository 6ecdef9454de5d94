use std::collections::HashMap;
use std::sync::OnceLock;

use serde::Deserialize;

use super::config::{parse_vocab_toml, VocabConfigError};
use super::DEFAULT_VOCAB_TOML;
use crate::reading::{Sign, Slot, Tier};

static INSTANCE: OnceLock<Vocabulary> = OnceLock::new();

/// A suffix rewrite applied before チョウ, ケイ and テン (e.g. イチ → イッ).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SokuonRule {
    pub ending: String,
    pub contracted: String,
}

/// Immutable reading tables shared by every stage of the reading pipeline.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    pub(super) digits: [String; 10],
    pub(super) point: String,
    pub(super) zero_before_point: String,
    pub(super) plus: String,
    pub(super) minus: String,
    /// Thousands, hundreds, tens.
    pub(super) places: [String; 3],
    /// マン, オク, チョウ, ケイ.
    pub(super) tiers: [String; 4],
    pub(super) irregular: HashMap<(u8, Slot), String>,
    pub(super) sokuon: Vec<SokuonRule>,
}

impl Vocabulary {
    /// Install a custom vocabulary as the global singleton.
    ///
    /// Fails with `AlreadyInitialized` once `global()` has been called or a
    /// custom vocabulary is already installed.
    pub fn init_custom(toml_content: String) -> Result<(), VocabConfigError> {
        let vocab = parse_vocab_toml(&toml_content)?;
        INSTANCE
            .set(vocab)
            .map_err(|_| VocabConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton from the embedded default.
    pub fn global() -> &'static Vocabulary {
        INSTANCE.get_or_init(|| {
            parse_vocab_toml(DEFAULT_VOCAB_TOML).expect("vocabulary TOML must be valid")
        })
    }

    /// Basic reading of an ASCII digit.
    pub fn digit(&self, c: char) -> Option<&str> {
        let d = c.to_digit(10)?;
        Some(self.digits[d as usize].as_str())
    }

    /// Reading of a character in literal mode: digits and the decimal point.
    pub fn literal(&self, c: char) -> Option<&str> {
        if c == '.' {
            return Some(&self.point);
        }
        self.digit(c)
    }

    pub fn zero(&self) -> &str {
        &self.digits[0]
    }

    pub fn point(&self) -> &str {
        &self.point
    }

    /// Replacement for a bare zero integer part in front of the decimal point.
    pub fn zero_before_point(&self) -> &str {
        &self.zero_before_point
    }

    pub fn sign_word(&self, sign: Sign) -> &str {
        match sign {
            Sign::Unsigned => "",
            Sign::Positive => &self.plus,
            Sign::Negative => &self.minus,
        }
    }

    pub fn place_word(&self, slot: Slot) -> &str {
        match slot {
            Slot::Thousands => &self.places[0],
            Slot::Hundreds => &self.places[1],
            Slot::Tens => &self.places[2],
            Slot::Units => "",
        }
    }

    pub fn tier_word(&self, tier: Tier) -> &str {
        match tier {
            Tier::Base => "",
            Tier::Man => &self.tiers[0],
            Tier::Oku => &self.tiers[1],
            Tier::Cho => &self.tiers[2],
            Tier::Kei => &self.tiers[3],
        }
    }

    /// Compound reading replacing "digit + place word", if any.
    pub fn irregular(&self, c: char, slot: Slot) -> Option<&str> {
        let d = c.to_digit(10)? as u8;
        self.irregular.get(&(d, slot)).map(String::as_str)
    }

    pub fn sokuon_rules(&self) -> &[SokuonRule] {
        &self.sokuon
    }
}
