//! Shared utility functions.
//!
//! The utils module currently contains:
//!
//! - [`terminal_size`] - terminal dimensions, honouring the resolved
//!   `supports_size_probe` flag
//!
//! # Examples
//!
//! ```rust,no_run
//! use clearline::resolver::{Resolver, DEFAULT_PROBE_TIMEOUT};
//! use clearline::utils::terminal_size;
//!
//! # fn main() -> Result<(), clearline::Error> {
//! let config = Resolver::default().detect()?;
//! let size = terminal_size(&config, DEFAULT_PROBE_TIMEOUT);
//! println!("{} columns", size.cols);
//! # Ok(())
//! # }
//! ```

pub mod terminal_size;

pub use terminal_size::{parse_stty_size, terminal_size, TerminalSize};
