use std::collections::{BTreeMap, HashMap};

use serde::Deserialize;

use super::table::{SokuonRule, Vocabulary};
use crate::reading::Slot;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct VocabConfig {
    digits: BTreeMap<String, String>,
    words: WordsConfig,
    places: PlacesConfig,
    tiers: TiersConfig,
    #[serde(default)]
    irregular: BTreeMap<String, BTreeMap<Slot, String>>,
    #[serde(default)]
    sokuon: Vec<SokuonRule>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct WordsConfig {
    point: String,
    zero_before_point: String,
    plus: String,
    minus: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PlacesConfig {
    tens: String,
    hundreds: String,
    thousands: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TiersConfig {
    man: String,
    oku: String,
    cho: String,
    kei: String,
}

#[derive(Debug, thiserror::Error)]
pub enum VocabConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("missing reading for digit {0:?}")]
    MissingDigit(char),
    #[error("invalid digit key: {0:?}")]
    InvalidDigitKey(String),
    #[error("empty value for {0}")]
    EmptyValue(String),
    #[error("vocabulary already initialized")]
    AlreadyInitialized,
}

/// Parse and validate a vocabulary TOML document.
pub fn parse_vocab_toml(toml_str: &str) -> Result<Vocabulary, VocabConfigError> {
    let config: VocabConfig =
        toml::from_str(toml_str).map_err(|e| VocabConfigError::Parse(e.to_string()))?;

    let digits = parse_digits(&config.digits)?;
    let irregular = parse_irregular(&config.irregular)?;

    let words = [
        ("words.point", &config.words.point),
        ("words.zero_before_point", &config.words.zero_before_point),
        ("words.plus", &config.words.plus),
        ("words.minus", &config.words.minus),
        ("places.tens", &config.places.tens),
        ("places.hundreds", &config.places.hundreds),
        ("places.thousands", &config.places.thousands),
        ("tiers.man", &config.tiers.man),
        ("tiers.oku", &config.tiers.oku),
        ("tiers.cho", &config.tiers.cho),
        ("tiers.kei", &config.tiers.kei),
    ];
    for (field, value) in words {
        if value.is_empty() {
            return Err(VocabConfigError::EmptyValue(field.to_string()));
        }
    }
    for (i, rule) in config.sokuon.iter().enumerate() {
        if rule.ending.is_empty() {
            return Err(VocabConfigError::EmptyValue(format!("sokuon[{i}].ending")));
        }
    }

    Ok(Vocabulary {
        digits,
        point: config.words.point,
        zero_before_point: config.words.zero_before_point,
        plus: config.words.plus,
        minus: config.words.minus,
        places: [
            config.places.thousands,
            config.places.hundreds,
            config.places.tens,
        ],
        tiers: [
            config.tiers.man,
            config.tiers.oku,
            config.tiers.cho,
            config.tiers.kei,
        ],
        irregular,
        sokuon: config.sokuon,
    })
}

fn digit_key(key: &str) -> Option<u8> {
    match key.as_bytes() {
        [d @ b'0'..=b'9'] => Some(d - b'0'),
        _ => None,
    }
}

fn parse_digits(raw: &BTreeMap<String, String>) -> Result<[String; 10], VocabConfigError> {
    let mut digits: [String; 10] = Default::default();
    for (key, value) in raw {
        let d = digit_key(key).ok_or_else(|| VocabConfigError::InvalidDigitKey(key.clone()))?;
        if value.is_empty() {
            return Err(VocabConfigError::EmptyValue(format!("digits.{key}")));
        }
        digits[d as usize] = value.clone();
    }
    if let Some(missing) = digits.iter().position(String::is_empty) {
        return Err(VocabConfigError::MissingDigit(char::from(b'0' + missing as u8)));
    }
    Ok(digits)
}

fn parse_irregular(
    raw: &BTreeMap<String, BTreeMap<Slot, String>>,
) -> Result<HashMap<(u8, Slot), String>, VocabConfigError> {
    let mut irregular = HashMap::new();
    for (key, slots) in raw {
        let d = match digit_key(key) {
            Some(d) if d != 0 => d,
            _ => return Err(VocabConfigError::InvalidDigitKey(key.clone())),
        };
        for (slot, value) in slots {
            if value.is_empty() {
                return Err(VocabConfigError::EmptyValue(format!(
                    "irregular.{key}.{}",
                    slot.as_str()
                )));
            }
            irregular.insert((d, *slot), value.clone());
        }
    }
    Ok(irregular)
}
