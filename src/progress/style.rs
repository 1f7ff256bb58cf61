//! Progress bar styling and configuration options.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use clearline::progress::ProgressBarOpts;
//!
//! let opts = ProgressBarOpts::default();
//! ```
//!
//! ## Custom Styling
//!
//! ```rust
//! use clearline::progress::ProgressBarOpts;
//!
//! let opts = ProgressBarOpts::new(
//!     Some("[{bar:40.cyan/blue}] {pos}/{len} {msg}".to_string()),
//!     Some(ProgressBarOpts::CHARS_FINE.to_string()),
//!     true,
//!     false,
//! );
//! ```
//!
//! ## Hidden Progress Bar
//!
//! ```rust
//! use clearline::progress::ProgressBarOpts;
//!
//! let opts = ProgressBarOpts::hidden();
//! assert!(!opts.is_enabled());
//! ```

use super::term::RedrawTerm;
use crate::error::Result;
use crate::strategy::RedrawConfig;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: false,
        }
    }
}

impl ProgressBarOpts {
    /// Template representing the bar and its position.
    ///
    ///`███████████████████████████████████████ 11/12 (99%) eta 00:00:02`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";
    /// Template showing only the percentage and the message.
    ///
    /// `42% copying files`
    pub const TEMPLATE_PERCENT: &'static str = "{percent:>3}% {msg}";
    /// Use fade-in blocks as progress characters: `"█▓▒░  "`.
    pub const CHARS_FADE_IN: &'static str = "█▓▒░  ";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use plain ASCII as progress characters: `"=> "`.
    ///
    /// Safe for consoles without unicode fonts.
    pub const CHARS_ASCII: &'static str = "=> ";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a new [`ProgressBarOpts`] showing the bar and its position.
    pub fn with_bar_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
            enabled: true,
            clear: false,
        }
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_clear(&self) -> bool {
        self.clear
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    pub fn to_progress_style(&self) -> Result<ProgressStyle> {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = &self.template {
            style = style.template(template)?;
        }
        if let Some(progress_chars) = &self.progress_chars {
            style = style.progress_chars(progress_chars);
        }
        Ok(style)
    }

    /// Create a [`ProgressBar`] drawing on standard error with `config`.
    ///
    /// When standard error is not a terminal the bar still counts but draws
    /// nothing, so redirected output stays free of redraw frames.
    pub fn to_progress_bar(&self, len: u64, config: &RedrawConfig) -> Result<ProgressBar> {
        // Return a hidden Progress bar if we disabled it.
        if !self.enabled {
            return Ok(ProgressBar::hidden());
        }
        if !console::Term::stderr().is_term() {
            let style = self.to_progress_style()?;
            return Ok(
                ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::hidden())
                    .with_style(style),
            );
        }
        self.to_progress_bar_on(len, RedrawTerm::stderr(config.clone()))
    }

    /// Create a [`ProgressBar`] drawing through `term`.
    pub fn to_progress_bar_on(&self, len: u64, term: RedrawTerm) -> Result<ProgressBar> {
        if !self.enabled {
            return Ok(ProgressBar::hidden());
        }
        let style = self.to_progress_style()?;
        let target = ProgressDrawTarget::term_like(Box::new(term));
        Ok(ProgressBar::with_draw_target(Some(len), target).with_style(style))
    }
}
