//! Plain line redrawing over any writer.
//!
//! [`LineWriter`] is the smallest consumer of a [`RedrawConfig`]: every call to
//! [`LineWriter::redraw`] replaces the current progress line with new text.
//!
//! # Examples
//!
//! ```rust
//! use clearline::environment::{Environment, OsFamily};
//! use clearline::progress::LineWriter;
//! use clearline::resolver::Resolver;
//!
//! # fn main() -> Result<(), clearline::Error> {
//! let config = Resolver::default().resolve(&Environment::new(OsFamily::Linux, "/bin/bash"))?;
//! let mut line = LineWriter::new(Vec::new(), config);
//! line.redraw("10%")?;
//! line.redraw("20%")?;
//! line.finish()?;
//! assert_eq!(line.into_inner(), b"\r10%\r20%\n");
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::strategy::{RedrawConfig, RedrawMode, CARRIAGE_RETURN_PREFIX};

use std::io::Write;

/// Redraws a single line of text on a writer.
#[derive(Debug)]
pub struct LineWriter<W: Write> {
    out: W,
    config: RedrawConfig,
    /// Visible width of the last text drawn.
    last_width: usize,
    /// Whether something has been drawn yet.
    drawn: bool,
    /// Whether the cursor still sits on the progress line.
    line_open: bool,
}

impl<W: Write> LineWriter<W> {
    pub fn new(out: W, config: RedrawConfig) -> Self {
        Self {
            out,
            config,
            last_width: 0,
            drawn: false,
            line_open: false,
        }
    }

    pub fn config(&self) -> &RedrawConfig {
        &self.config
    }

    /// Replace the progress line with `text`.
    ///
    /// In ANSI mode the line is wrapped in the clear prefix and suffix. On the
    /// first draw a prefix that moves the cursor up is replaced by a carriage
    /// return, since there is no previous line of ours to move back to.
    ///
    /// In native-console mode no escape sequence is written: the text is
    /// padded with spaces to hide the tail of a longer previous line.
    pub fn redraw(&mut self, text: &str) -> Result<()> {
        let width = console::measure_text_width(text);

        match self.config.mode() {
            RedrawMode::Ansi => {
                let strategy = self.config.strategy();
                let prefix = if !self.drawn && strategy.ends_with_newline() {
                    CARRIAGE_RETURN_PREFIX
                } else {
                    strategy.prefix()
                };
                write!(self.out, "{prefix}{text}{}", strategy.suffix())?;
                self.line_open = !strategy.ends_with_newline();
            }
            RedrawMode::NativeConsole => {
                let padding = self.last_width.saturating_sub(width);
                write!(
                    self.out,
                    "{}{}{:padding$}",
                    CARRIAGE_RETURN_PREFIX, text, ""
                )?;
                self.line_open = true;
            }
        }

        self.out.flush()?;
        self.last_width = width;
        self.drawn = true;
        Ok(())
    }

    /// Move past the progress line so later output starts on a fresh line.
    pub fn finish(&mut self) -> Result<()> {
        if self.line_open {
            self.out.write_all(b"\n")?;
            self.line_open = false;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
