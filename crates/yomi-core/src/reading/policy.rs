use tracing::debug;

use super::numeric_str::strip_separators;
use super::split::{integer_part, split_decimal, split_sign, Sign};

/// Longest integer part read with place values. ケイ covers digits 17 to 20;
/// anything longer is read digit by digit.
pub const MAX_STRUCTURED_INTEGER_DIGITS: usize = 20;

/// How a validated numeric string is read.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ReadingPlan<'a> {
    /// Digit by digit over the raw input. Separators and the sign have no
    /// literal reading and drop out.
    Literal(&'a str),
    /// Sign word, then the unsigned text digit by digit.
    SignedLiteral { sign: Sign, digits: String },
    /// Place-value reading.
    Structured {
        sign: Sign,
        integer: String,
        decimal: Option<String>,
    },
}

/// Decide the reading mode of a string that already passed validation.
pub(crate) fn classify(input: &str) -> ReadingPlan<'_> {
    if input.matches('.').count() >= 2 {
        debug!(mode = "literal", reason = "multiple dots");
        return ReadingPlan::Literal(input);
    }

    let normalized = strip_separators(input);
    let (sign, unsigned) = split_sign(&normalized);

    let int = integer_part(unsigned);
    let leading_zero = int.len() >= 2 && int.starts_with('0');
    if leading_zero || int.len() > MAX_STRUCTURED_INTEGER_DIGITS {
        debug!(mode = "literal", leading_zero, integer_digits = int.len());
        return ReadingPlan::SignedLiteral {
            sign,
            digits: unsigned.to_string(),
        };
    }

    let (integer, decimal) = split_decimal(unsigned);
    debug!(mode = "structured", integer_digits = integer.len());
    ReadingPlan::Structured {
        sign,
        integer: integer.to_string(),
        decimal: decimal.map(str::to_string),
    }
}
