use super::*;
use crate::reading::{read_float, read_int, read_uint};

#[test]
fn test_read_int() {
    assert_eq!(read_int(0), "ゼロ");
    assert_eq!(read_int(1), "イチ");
    assert_eq!(read_int(-1), "マイナスイチ");
    // 9,223,372,036,854,775,807
    assert_eq!(
        read_int(i64::MAX),
        "キュウヒャクニジュウニケイサンゼンサンビャクナナジュウニチョウサンビャクロクジュウハチオクゴセンヨンヒャクナナジュウナナマンゴセンハッピャクナナ"
    );
    // -9,223,372,036,854,775,808
    assert_eq!(
        read_int(i64::MIN),
        "マイナスキュウヒャクニジュウニケイサンゼンサンビャクナナジュウニチョウサンビャクロクジュウハチオクゴセンヨンヒャクナナジュウナナマンゴセンハッピャクハチ"
    );
}

#[test]
fn test_read_uint() {
    assert_eq!(read_uint(0), "ゼロ");
    assert_eq!(read_uint(1), "イチ");
    // 18,446,744,073,709,551,615
    assert_eq!(
        read_uint(u64::MAX),
        "センハッピャクヨンジュウヨンケイロクセンナナヒャクヨンジュウヨンチョウナナヒャクサンジュウナナオクキュウヒャクゴジュウゴマンセンロッピャクジュウゴ"
    );
}

#[test]
fn test_read_float() {
    assert_eq!(read_float(0.0), "ゼロ");
    assert_eq!(read_float(0.01), "レイテンゼロイチ");
    assert_eq!(read_float(0.1), "レイテンイチ");
    assert_eq!(read_float(3.14), "サンテンイチヨン");
    assert_eq!(read_float(-1.23), "マイナスイッテンニサン");
    assert_eq!(read_float(100.5), "ヒャクテンゴ");
    assert_eq!(read_float(8.0), "ハチ");
}

#[test]
fn test_read_float_large_values_have_no_exponent() {
    assert_eq!(read_float(1e19), "センケイ");
    // 22 integer digits: past ケイ, read digit by digit.
    assert_eq!(read_float(1e21), format!("イチ{}", "ゼロ".repeat(21)));
}

#[test]
fn test_read_float_non_finite() {
    assert_eq!(read_float(f64::NAN), "");
    assert_eq!(read_float(f64::INFINITY), "");
    assert_eq!(read_float(f64::NEG_INFINITY), "");
}

#[test]
fn test_numeric_entry_points_match_read_string() {
    for n in [7_i64, 10, 600, 8_000, 1_0000_0000_0000, -42] {
        assert_eq!(read_int(n), read(&n.to_string()));
    }
    for n in [0_u64, 18, 3_300, 10_0000_0000_0000] {
        assert_eq!(read_uint(n), read(&n.to_string()));
    }
}
