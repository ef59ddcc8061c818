//! Tests for the record grammar patterns

use super::{low_precision_line, record_line, ENCKE_LINE};
use crate::app::services::mpc_parser::grammar;

#[test]
fn test_strict_matches_canonical_record() {
    let caps = grammar::strict().captures(ENCKE_LINE).unwrap();

    assert_eq!(&caps["number"], "0002");
    assert_eq!(&caps["orbit_type"], "P");
    assert!(caps.name("provisional").is_none());
    assert_eq!(&caps["year"], "2010");
    assert_eq!(&caps["month"], "08");
    assert_eq!(&caps["day"], "6.5102");
    assert_eq!(&caps["distance"], "0.336152");
    assert_eq!(&caps["eccentricity"], "0.848265");
    assert_eq!(&caps["arg_pericenter"], "186.5242");
    assert_eq!(&caps["ascending_node"], "334.5718");
    assert_eq!(&caps["inclination"], "11.7843");
    assert_eq!(&caps["epoch_year"], "2010");
    assert_eq!(&caps["epoch_month"], "01");
    assert_eq!(&caps["epoch_day"], "04");
    assert_eq!(&caps["magnitude"], "11.5");
    assert_eq!(&caps["slope"], "6.0");
    assert_eq!(caps["name"].trim(), "2P/Encke");
    assert_eq!(&caps["reference"], "MPC 59600");
}

#[test]
fn test_strict_matches_provisional_designation_and_negative_magnitude() {
    // Hale-Bopp carries a provisional designation and a negative magnitude
    let line = record_line(
        "    CJ95O010  1997 03 31.4141  0.906507  0.994945  130.5321  282.6820   89.3193  20100723  -2.0  4.0  ",
        "C/1995 O1 (Hale-Bopp)",
        "MPC 61436",
    );

    let caps = grammar::strict().captures(&line).unwrap();
    assert!(caps.name("number").is_none());
    assert_eq!(&caps["provisional"], "J95O010");
    assert_eq!(&caps["magnitude"], "-2.0");
}

#[test]
fn test_strict_matches_record_without_epoch() {
    let line = record_line(
        "0096P         2011 03 12.2559  0.123166  0.963055  14.1164   311.5987   58.3131            10.0   4.0  ",
        "96P/Machholz 1",
        "MPC 12345",
    );

    let caps = grammar::strict().captures(&line).unwrap();
    assert!(caps.name("epoch_year").is_none());
    assert_eq!(&caps["inclination"], "58.3131");
    assert_eq!(&caps["magnitude"], "10.0");
}

#[test]
fn test_strict_rejects_low_precision_record() {
    assert!(grammar::strict().captures(&low_precision_line()).is_none());
}

#[test]
fn test_variable_precision_accepts_low_precision_record() {
    let line = low_precision_line();
    let caps = grammar::variable_precision().captures(&line).unwrap();

    assert_eq!(&caps["day"], "6.109");
    assert_eq!(&caps["distance"], "0.6138");
    assert_eq!(caps["name"].trim(), "C/2010 F4 (Machholz)");
}

#[test]
fn test_both_patterns_reject_truncated_lines() {
    let truncated = "0002P         2010 08  6.5102  0.336152";

    assert!(grammar::strict().captures(truncated).is_none());
    assert!(grammar::variable_precision().captures(truncated).is_none());
}

#[test]
fn test_patterns_are_anchored() {
    // trailing bytes fall into the reference capture rather than escaping
    // the anchored match
    let line = format!("{ENCKE_LINE}\u{1}");
    let caps = grammar::strict().captures(&line).unwrap();
    assert_eq!(&caps["reference"], "MPC 59600\u{1}");

    // a leading non-record byte kills the match outright
    let prefixed = format!("x{ENCKE_LINE}");
    assert!(grammar::strict().captures(&prefixed).is_none());
}

#[test]
fn test_strict_rejects_non_record_text() {
    for line in [
        "",
        "   ",
        "# comment",
        "Soft00Cmt format listing",
        "0002P 2010", // far too few fields
    ] {
        assert!(grammar::strict().captures(line).is_none(), "line: {line:?}");
    }
}
