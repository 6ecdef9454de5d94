use serde::Deserialize;

use super::euphony::apply_sokuon;
use crate::vocab::Vocabulary;

/// Position of a digit inside a four-digit group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Thousands,
    Hundreds,
    Tens,
    Units,
}

impl Slot {
    /// Slot of the digit at `index` in a group of `len` digits. A short group
    /// is right-aligned, so its last digit is always `Units`.
    fn of(len: usize, index: usize) -> Slot {
        match len - index {
            4 => Slot::Thousands,
            3 => Slot::Hundreds,
            2 => Slot::Tens,
            _ => Slot::Units,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Thousands => "thousands",
            Slot::Hundreds => "hundreds",
            Slot::Tens => "tens",
            Slot::Units => "units",
        }
    }
}

/// Magnitude of a four-digit group: 10^0, 万, 億, 兆, 京.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Base,
    Man,
    Oku,
    Cho,
    Kei,
}

impl Tier {
    /// Highest magnitude first.
    const DESCENDING: [Tier; 5] = [Tier::Kei, Tier::Cho, Tier::Oku, Tier::Man, Tier::Base];

    /// Number of groups below this one.
    fn index(self) -> usize {
        match self {
            Tier::Base => 0,
            Tier::Man => 1,
            Tier::Oku => 2,
            Tier::Cho => 3,
            Tier::Kei => 4,
        }
    }

    /// 兆 and 京 trigger sokuon on the preceding group (イッチョウ, ハッケイ).
    fn contracts(self) -> bool {
        matches!(self, Tier::Cho | Tier::Kei)
    }
}

/// Read one group of 1 to 4 ASCII digits. An all-zero group reads as "".
pub(crate) fn read_group(vocab: &Vocabulary, group: &str) -> String {
    let len = group.len();
    let mut out = String::new();
    for (i, c) in group.chars().enumerate() {
        if c == '0' {
            continue;
        }
        let slot = Slot::of(len, i);
        if let Some(compound) = vocab.irregular(c, slot) {
            out.push_str(compound);
            continue;
        }
        out.push_str(vocab.digit(c).unwrap_or_default());
        out.push_str(vocab.place_word(slot));
    }
    out
}

/// Read the integer part of a structured number.
///
/// `digits` is ASCII, at most [`MAX_STRUCTURED_INTEGER_DIGITS`] long and has
/// no leading zero unless it is exactly `"0"`.
///
/// [`MAX_STRUCTURED_INTEGER_DIGITS`]: super::MAX_STRUCTURED_INTEGER_DIGITS
pub(crate) fn read_integer_part(vocab: &Vocabulary, digits: &str) -> String {
    debug_assert!(digits.len() <= super::MAX_STRUCTURED_INTEGER_DIGITS);
    if digits.is_empty() {
        return String::new();
    }
    if digits == "0" {
        return vocab.zero().to_string();
    }

    let mut out = String::new();
    for tier in Tier::DESCENDING {
        let below = tier.index() * 4;
        if digits.len() <= below {
            continue;
        }
        let end = digits.len() - below;
        let group = read_group(vocab, &digits[end.saturating_sub(4)..end]);
        if group.is_empty() {
            continue;
        }
        if tier.contracts() {
            out.push_str(&apply_sokuon(vocab, &group));
        } else {
            out.push_str(&group);
        }
        out.push_str(vocab.tier_word(tier));
    }
    out
}
