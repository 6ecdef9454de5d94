mod numeric_types;

use super::read_string;

/// Reading of an input the test knows to be valid.
pub(super) fn read(input: &str) -> String {
    read_string(input).unwrap_or_else(|e| panic!("{input:?} should be readable: {e}"))
}
