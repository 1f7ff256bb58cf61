//! Single progress line widget.
//!
//! [`ProgressLine`] owns one indicatif bar drawn with the resolved redraw
//! strategy, and finishes it the way its [`ProgressBarOpts`] ask.
//!
//! # Examples
//!
//! ```rust,no_run
//! use clearline::progress::{ProgressBarOpts, ProgressLine};
//!
//! # fn main() -> Result<(), clearline::Error> {
//! let config = clearline::global()?;
//! let line = ProgressLine::new(ProgressBarOpts::with_bar_style(), config, 100)?;
//! for _ in 0..100 {
//!     line.inc(1);
//! }
//! line.finish();
//! # Ok(())
//! # }
//! ```

use super::style::ProgressBarOpts;
use super::term::RedrawTerm;
use crate::error::Result;
use crate::strategy::RedrawConfig;

use indicatif::ProgressBar;
use std::borrow::Cow;

/// A progress bar occupying one terminal line.
#[derive(Debug)]
pub struct ProgressLine {
    bar: ProgressBar,
    /// Whether to clear the line once finished.
    clear: bool,
}

impl ProgressLine {
    /// Create a progress line of length `len` drawing on standard error.
    pub fn new(opts: ProgressBarOpts, config: &RedrawConfig, len: u64) -> Result<Self> {
        let bar = opts.to_progress_bar(len, config)?;
        Ok(Self {
            bar,
            clear: opts.clear,
        })
    }

    /// Create a progress line of length `len` drawing through `term`.
    pub fn with_term(opts: ProgressBarOpts, term: RedrawTerm, len: u64) -> Result<Self> {
        let bar = opts.to_progress_bar_on(len, term)?;
        Ok(Self {
            bar,
            clear: opts.clear,
        })
    }

    /// Get the underlying progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }

    pub fn set_position(&self, pos: u64) {
        self.bar.set_position(pos);
    }

    pub fn inc(&self, delta: u64) {
        self.bar.inc(delta);
    }

    pub fn set_message(&self, msg: impl Into<Cow<'static, str>>) {
        self.bar.set_message(msg);
    }

    /// Finish the line, clearing or keeping it based on configuration.
    pub fn finish(self) {
        if self.clear {
            self.bar.finish_and_clear();
        } else {
            self.bar.finish();
        }
    }
}
