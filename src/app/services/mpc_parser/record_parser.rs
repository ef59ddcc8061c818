//! Field extraction and normalization for MPC one-line comet records
//!
//! The parser matches a line against the record grammar, converts the typed
//! fields and produces a canonical [`CometElements`] value or a
//! [`RejectionReason`] describing why the line was refused. It holds no state
//! between lines and performs no I/O.

use regex::{Captures, Regex};
use thiserror::Error;

use super::{datetime, grammar};
use crate::app::models::CometElements;

/// Why a line was rejected
///
/// These are per-line conditions. The batch importer counts and logs them
/// and moves on to the next line; they never abort an import.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RejectionReason {
    /// The line does not have the shape of an MPC one-line comet record
    #[error("line does not match the MPC one-line comet-element format")]
    GrammarMismatch,

    /// Both identity fields are absent
    #[error("record carries neither a comet number nor a provisional designation")]
    MissingDesignation,

    /// The perihelion-passage fields do not form a real calendar date
    #[error("perihelion passage is not a valid calendar date: {0}")]
    InvalidDate(String),

    /// A required numeric token failed to parse
    #[error("invalid numeric value for {field}: '{value}'")]
    InvalidNumericField { field: &'static str, value: String },
}

/// Parser behavior switches
#[derive(Debug, Clone, Copy, Default)]
pub struct ParserOptions {
    /// Match with relaxed fractional-digit counts (see [`grammar`])
    pub variable_precision: bool,
}

/// Parser for single MPC one-line comet-element records
///
/// `parse` is a pure function of the input line: the same line always yields
/// the same result, and nothing is retained between calls.
#[derive(Debug)]
pub struct RecordParser {
    pattern: &'static Regex,
}

impl RecordParser {
    /// Create a parser with the given options
    pub fn new(options: ParserOptions) -> Self {
        let pattern = if options.variable_precision {
            grammar::variable_precision()
        } else {
            grammar::strict()
        };
        Self { pattern }
    }

    /// Parse one line into comet elements
    ///
    /// The whole line must match the grammar; any deviation is a
    /// [`RejectionReason::GrammarMismatch`]. A matching record is still
    /// rejected when it has no identity (neither permanent number nor
    /// provisional designation) or when its perihelion-passage fields do not
    /// form a valid UTC date.
    pub fn parse(&self, line: &str) -> Result<CometElements, RejectionReason> {
        let caps = self
            .pattern
            .captures(line)
            .ok_or(RejectionReason::GrammarMismatch)?;

        let number = caps.name("number").map(|m| m.as_str()).unwrap_or("");
        let provisional = caps.name("provisional").map(|m| m.as_str()).unwrap_or("");
        if number.is_empty() && provisional.is_empty() {
            return Err(RejectionReason::MissingDesignation);
        }

        let designation = caps["name"].trim().to_string();
        let section_key = CometElements::section_key_for(&designation);

        let year = parse_field::<i32>(&caps, "year")?;
        let month = parse_field::<u32>(&caps, "month")?;
        let day_fraction = parse_field::<f64>(&caps, "day")?;

        let passage = datetime::perihelion_passage_utc(year, month, day_fraction).ok_or_else(
            || RejectionReason::InvalidDate(format!("{year:04}-{month:02}, day {day_fraction}")),
        )?;
        let perihelion_passage_jd = datetime::julian_day(passage);

        Ok(CometElements {
            designation,
            section_key,
            perihelion_passage_jd,
            perihelion_distance_au: parse_field(&caps, "distance")?,
            eccentricity: parse_field(&caps, "eccentricity")?,
            arg_of_pericenter_deg: parse_field(&caps, "arg_pericenter")?,
            ascending_node_deg: parse_field(&caps, "ascending_node")?,
            inclination_deg: parse_field(&caps, "inclination")?,
            absolute_magnitude: parse_field(&caps, "magnitude")?,
            slope_parameter: parse_field(&caps, "slope")?,
        })
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new(ParserOptions::default())
    }
}

/// Parse a required named capture as a numeric value
///
/// The grammar already constrains every numeric capture to digit shapes;
/// a field that still fails to parse yields its own descriptive rejection.
fn parse_field<T: std::str::FromStr>(
    caps: &Captures<'_>,
    field: &'static str,
) -> Result<T, RejectionReason> {
    let value = &caps[field];
    value
        .parse()
        .map_err(|_| RejectionReason::InvalidNumericField {
            field,
            value: value.to_string(),
        })
}
