//! Error taxonomy for the filtering pipeline
//!
//! Every error here is terminal for the run: setup errors are raised before
//! any input is consumed, and I/O errors abort the pass immediately.

use thiserror::Error;

/// Errors raised during filter setup or a filtering run
#[derive(Debug, Error)]
pub enum FilterError {
    /// A requested preset identifier matched no registry entry
    #[error("unknown preset '{0}' (see --list-presets)")]
    UnknownPreset(String),

    /// The 'in_dictionary' preset was selected without a dictionary
    #[error("the 'in_dictionary' (dict) preset requires --dictionary-file")]
    MissingDictionary,

    /// Neither presets nor a custom regex were supplied
    #[error("no filter criteria specified: use --presets or --regex")]
    NoFilterSpecified,

    /// The custom regex pattern failed to compile
    #[error("invalid regex pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Reading the input line source failed mid-run
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
