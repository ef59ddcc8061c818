//! Record grammar for the MPC one-line comet format
//!
//! The format is a whitespace-separated sequence of fixed-shape tokens. Both
//! patterns here are anchored over the whole line: a record either matches
//! completely or is rejected, so a capture that is present is already known
//! to have a valid shape.
//!
//! Token order: optional 4-digit comet number, orbit-type letter, optional
//! 7-character provisional designation, perihelion passage (year, month,
//! fractional day), perihelion distance, eccentricity, argument of
//! pericenter, ascending node, inclination, optional 8-digit epoch of
//! osculation, absolute magnitude, slope parameter, 56-character name column
//! and a trailing reference.

use regex::Regex;
use std::sync::OnceLock;

/// Published MPC fractional-digit counts, matched exactly.
const STRICT: &str = r"^\s*(?P<number>\d{4})?(?P<orbit_type>[A-Z])(?P<provisional>\w{7})?\s+(?P<year>\d{4})\s+(?P<month>\d{2})\s+(?P<day>\d{1,2}\.\d{3,4})\s+(?P<distance>\d{1,2}\.\d{5,6})\s+(?P<eccentricity>\d\.\d{5,6})\s+(?P<arg_pericenter>\d{1,3}\.\d{3,4})\s+(?P<ascending_node>\d{1,3}\.\d{3,4})\s+(?P<inclination>\d{1,3}\.\d{3,4})\s+(?:(?P<epoch_year>\d{4})(?P<epoch_month>\d{2})(?P<epoch_day>\d{2}))?\s+(?P<magnitude>-?\d{1,2}\.\d)\s+(?P<slope>\d{1,2}\.\d)\s+(?P<name>\S.{55})\s+(?P<reference>\S.*)$";

/// Relaxed fractional-digit counts. Real MPC distribution files carry
/// records with fewer fractional digits than the published format; this
/// pattern accepts any non-zero count for the date, distance, eccentricity
/// and angle fields and up to two for the magnitudes. Token order and
/// widths of the integer parts are unchanged.
const VARIABLE_PRECISION: &str = r"^\s*(?P<number>\d{4})?(?P<orbit_type>[A-Z])(?P<provisional>\w{7})?\s+(?P<year>\d{4})\s+(?P<month>\d{2})\s+(?P<day>\d{1,2}\.\d+)\s+(?P<distance>\d{1,2}\.\d+)\s+(?P<eccentricity>\d\.\d+)\s+(?P<arg_pericenter>\d{1,3}\.\d+)\s+(?P<ascending_node>\d{1,3}\.\d+)\s+(?P<inclination>\d{1,3}\.\d+)\s+(?:(?P<epoch_year>\d{4})(?P<epoch_month>\d{2})(?P<epoch_day>\d{2}))?\s+(?P<magnitude>-?\d{1,2}\.\d{1,2})\s+(?P<slope>\d{1,2}\.\d{1,2})\s+(?P<name>\S.{55})\s+(?P<reference>\S.*)$";

/// The strict grammar, compiled once per process
pub fn strict() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STRICT).expect("strict comet grammar compiles"))
}

/// The variable-precision grammar, compiled once per process
pub fn variable_precision() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(VARIABLE_PRECISION).expect("variable-precision comet grammar compiles")
    })
}
