//! Test fixtures for the MPC one-line comet parser
//!
//! Provides the canonical reference record plus a builder that pads the
//! fixed-width name column correctly, so individual tests stay readable.

mod grammar_tests;
mod record_tests;

/// The 2P/Encke reference record, exactly as distributed by the MPC
pub const ENCKE_LINE: &str = "0002P         2010 08  6.5102  0.336152  0.848265  186.5242  334.5718   11.7843  20100104  11.5  6.0  2P/Encke                                                 MPC 59600";

/// Assemble a record from an element prefix, a name and a reference
///
/// Pads the name to the 56-character column the format reserves for it; the
/// prefix must already end at the name-column boundary (i.e. with its own
/// trailing separator whitespace).
pub fn record_line(element_prefix: &str, name: &str, reference: &str) -> String {
    format!("{element_prefix}{name:<56} {reference}")
}

/// A real-world record with fewer fractional digits than the published
/// format (C/2010 F4 Machholz as distributed in Soft00Cmt.txt)
pub fn low_precision_line() -> String {
    record_line(
        "    CK10F040  2010 04  6.109   0.6138    1.00000   120.718   237.294    89.143             13.5  4.0  ",
        "C/2010 F4 (Machholz)",
        "MPC 69906",
    )
}

/// A record whose number and provisional-designation fields are both empty
pub fn missing_designation_line() -> String {
    record_line(
        "    C         2010 08  6.5102  0.336152  0.848265  186.5242  334.5718   11.7843  20100104  11.5  6.0  ",
        "Nameless",
        "MPC 00000",
    )
}
