//! MPC Importer Library
//!
//! A Rust library for importing Minor Planet Center (MPC) one-line comet
//! orbital-element records into a solar-system configuration store.
//!
//! This library provides tools for:
//! - Parsing the MPC one-line comet-element format with an anchored grammar
//! - Converting perihelion-passage dates to Julian Day Numbers
//! - Recovering from malformed records without aborting a batch
//! - Upserting accepted records into an INI-backed solar-system store
//! - Bootstrapping a per-user writable store from an installation default

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod importer;
        pub mod mpc_parser;
        pub mod ssystem_store;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::CometElements;
pub use app::services::importer::{BatchImporter, ElementSink, ImportStats};
pub use app::services::mpc_parser::{ParserOptions, RecordParser, RejectionReason};
pub use app::services::ssystem_store::SolarSystemStore;
pub use config::Config;

/// Result type alias for the MPC importer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for import operations
///
/// Per-line parse failures are not represented here: they are recovered
/// locally by the batch importer and surfaced as counts and diagnostics in
/// [`ImportStats`]. Only stream-level failures abort an import.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Element source file cannot be opened or read
    #[error("element source unavailable: '{path}': {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Solar-system store cannot be created, loaded or written
    #[error("solar-system store unavailable: '{path}': {message}")]
    SinkUnavailable { path: String, message: String },

    /// Configuration error
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// A batch produced no accepted records
    #[error("no comet elements imported from '{path}' ({lines_rejected} lines rejected)")]
    EmptyImport { path: String, lines_rejected: usize },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a source-unavailable error for an element file
    pub fn source_unavailable(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::SourceUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a sink-unavailable error for the store
    pub fn sink_unavailable(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::SinkUnavailable {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an empty-import error
    pub fn empty_import(path: impl Into<String>, lines_rejected: usize) -> Self {
        Self::EmptyImport {
            path: path.into(),
            lines_rejected,
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
