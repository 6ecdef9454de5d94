//! Japanese readings (読み仮名) of numeric strings.
//!
//! ```
//! assert_eq!(yomi_core::read_string("1_0000_0000_0000").unwrap(), "イッチョウ");
//! assert_eq!(yomi_core::read_float(-1.23), "マイナスイッテンニサン");
//! ```

pub mod reading;
pub mod trace_init;
pub mod unicode;
pub mod vocab;

pub use reading::{
    read_float, read_int, read_string, read_string_hiragana, read_string_with, read_uint,
    ReadError,
};
pub use vocab::Vocabulary;
