//! Error handling for the clearline library.
//!
//! Resolution has two failure tiers. An unsupported operating system is
//! reported through [`Error::UnsupportedOs`] and the caller decides whether to
//! abort. A failing or hanging size probe is never an error: it only turns the
//! `supports_size_probe` flag off.

use std::io;
use thiserror::Error;

/// Errors that can happen when using clearline.
#[derive(Error, Debug)]
pub enum Error {
    /// The host operating system family has no known redraw strategy.
    ///
    /// There is no generic fallback: the carriage-return and cursor-up
    /// strategies are mutually exclusive and depend on the platform, so
    /// guessing would corrupt the terminal output.
    #[error("Unsupported operating system: {0}")]
    UnsupportedOs(String),

    /// The progress bar template could not be parsed by indicatif.
    #[error("Invalid progress template")]
    Template {
        #[from]
        source: indicatif::style::TemplateError,
    },

    /// I/O Error.
    ///
    /// Wraps failures of the writer a progress line is drawn to.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a clearline error.
pub type Result<T> = std::result::Result<T, Error>;
