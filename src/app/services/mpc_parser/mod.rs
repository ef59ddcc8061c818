//! Parser for MPC one-line comet orbital-element records
//!
//! This module recognizes the Minor Planet Center one-line comet format and
//! converts each matching line into a [`CometElements`](crate::CometElements)
//! value. The design keeps the parser a pure function of its input line:
//!
//! - [`grammar`] - The anchored record grammar (strict and variable-precision)
//! - [`datetime`] - Fractional-day and Julian Day Number conversion
//! - [`record_parser`] - Field extraction, normalization and rejection taxonomy
//!
//! Lines that deviate from the grammar are rejected whole; there is no
//! partial recovery. Rejections are described by [`RejectionReason`] and are
//! recovered by the batch importer, never raised as crate-level errors.

pub mod datetime;
pub mod grammar;
pub mod record_parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use record_parser::{ParserOptions, RecordParser, RejectionReason};
