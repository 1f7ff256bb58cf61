//! Progress module containing the redraw primitives.
//!
//! Everything here consumes a resolved [`RedrawConfig`](crate::RedrawConfig):
//!
//! - `line` - [`LineWriter`], raw line redrawing on any writer
//! - `term` - [`RedrawTerm`], an indicatif draw target following the strategy
//! - `style` - [`ProgressBarOpts`], progress bar templates and options
//! - `display` - [`ProgressLine`], a single progress bar widget
//!
//! # Examples
//!
//! ## Redrawing a Line by Hand
//!
//! ```rust,no_run
//! use clearline::progress::LineWriter;
//!
//! # fn main() -> Result<(), clearline::Error> {
//! let config = clearline::global()?.clone();
//! let mut line = LineWriter::new(std::io::stderr(), config);
//! for pct in (0..=100).step_by(10) {
//!     line.redraw(&format!("{pct}%"))?;
//! }
//! line.finish()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Hidden Progress Bar
//!
//! ```rust
//! use clearline::environment::{Environment, OsFamily};
//! use clearline::progress::{ProgressBarOpts, ProgressLine};
//! use clearline::resolver::Resolver;
//!
//! # fn main() -> Result<(), clearline::Error> {
//! let config = Resolver::default().resolve(&Environment::new(OsFamily::Linux, "/bin/bash"))?;
//! let line = ProgressLine::new(ProgressBarOpts::hidden(), &config, 10)?;
//! assert!(line.bar().is_hidden());
//! # Ok(())
//! # }
//! ```

pub(crate) mod display;
pub(crate) mod line;
pub(crate) mod style;
pub(crate) mod term;

pub use display::ProgressLine;
pub use line::LineWriter;
pub use style::ProgressBarOpts;
pub use term::RedrawTerm;
