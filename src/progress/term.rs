//! indicatif draw target following the resolved redraw strategy.
//!
//! indicatif normally decides on its own how to clear a line. [`RedrawTerm`]
//! implements [`TermLike`] so that a bar drawn through it clears and rewrites
//! its line the way the resolved [`RedrawConfig`] says.
//!
//! In ANSI mode each draw pass is a frame: the first `clear_line` or write of
//! a frame emits the clear prefix and `flush` closes the frame with the clear
//! suffix.
//! In native-console mode every call is forwarded to [`console::Term`], which
//! uses the OS console API where needed.
//!
//! # Examples
//!
//! ```rust
//! use clearline::environment::{Environment, OsFamily};
//! use clearline::progress::RedrawTerm;
//! use clearline::resolver::Resolver;
//! use indicatif::TermLike;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Resolver::default().resolve(&Environment::new(OsFamily::Linux, "/bin/dash"))?;
//! let term = RedrawTerm::with_writer(config, std::io::sink(), 80);
//! term.clear_line()?;
//! term.write_str("50%")?;
//! term.flush()?;
//! # Ok(())
//! # }
//! ```

use crate::resolver::DEFAULT_PROBE_TIMEOUT;
use crate::strategy::{RedrawConfig, RedrawMode, CARRIAGE_RETURN_PREFIX};
use crate::utils::terminal_size;

use indicatif::TermLike;
use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

/// Where the bytes go.
enum Backend {
    Ansi(Mutex<AnsiState>),
    Native(console::Term),
}

struct AnsiState {
    out: Box<dyn Write + Send>,
    drawn: bool,
    frame_open: bool,
}

/// A [`TermLike`] drawing with a resolved redraw strategy.
pub struct RedrawTerm {
    config: RedrawConfig,
    backend: Backend,
    width: u16,
    height: u16,
}

impl fmt::Debug for RedrawTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let backend = match self.backend {
            Backend::Ansi(_) => "ansi",
            Backend::Native(_) => "native",
        };
        f.debug_struct("RedrawTerm")
            .field("config", &self.config)
            .field("backend", &backend)
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl RedrawTerm {
    /// Draw on standard error, measuring the terminal once.
    pub fn stderr(config: RedrawConfig) -> Self {
        let size = terminal_size(&config, DEFAULT_PROBE_TIMEOUT);
        let backend = match config.mode() {
            RedrawMode::Ansi => Backend::Ansi(Mutex::new(AnsiState::new(Box::new(io::stderr())))),
            RedrawMode::NativeConsole => Backend::Native(console::Term::stderr()),
        };
        Self {
            config,
            backend,
            width: size.cols,
            height: size.rows,
        }
    }

    /// Draw on an arbitrary writer with a fixed width.
    ///
    /// A writer cannot receive native console calls, so the ANSI backend is
    /// used whatever the configuration's mode.
    pub fn with_writer<W>(config: RedrawConfig, out: W, width: u16) -> Self
    where
        W: Write + Send + 'static,
    {
        Self {
            config,
            backend: Backend::Ansi(Mutex::new(AnsiState::new(Box::new(out)))),
            width,
            height: 20,
        }
    }

    pub fn config(&self) -> &RedrawConfig {
        &self.config
    }

    fn with_ansi<F>(&self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut AnsiState, &RedrawConfig) -> io::Result<()>,
    {
        match &self.backend {
            Backend::Ansi(state) => {
                let mut state = state
                    .lock()
                    .map_err(|_| io::Error::other("redraw writer lock poisoned"))?;
                f(&mut *state, &self.config)
            }
            Backend::Native(_) => Ok(()),
        }
    }

    fn move_cursor(&self, n: usize, direction: char) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        self.with_ansi(|state, _| write!(state.out, "\x1b[{n}{direction}"))
    }
}

impl AnsiState {
    fn new(out: Box<dyn Write + Send>) -> Self {
        Self {
            out,
            drawn: false,
            frame_open: false,
        }
    }

    /// Start a frame by emitting the clear prefix, unless one is open.
    ///
    /// A prefix moving the cursor up is replaced by a carriage return before
    /// the first frame, since no line of ours sits above the cursor yet.
    fn open_frame(&mut self, config: &RedrawConfig) -> io::Result<()> {
        if self.frame_open {
            return Ok(());
        }
        let strategy = config.strategy();
        let prefix = if !self.drawn && strategy.ends_with_newline() {
            CARRIAGE_RETURN_PREFIX
        } else {
            strategy.prefix()
        };
        self.frame_open = true;
        self.drawn = true;
        self.out.write_all(prefix.as_bytes())
    }
}

impl TermLike for RedrawTerm {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn move_cursor_up(&self, n: usize) -> io::Result<()> {
        match &self.backend {
            Backend::Native(term) => term.move_cursor_up(n),
            Backend::Ansi(_) => self.move_cursor(n, 'A'),
        }
    }

    fn move_cursor_down(&self, n: usize) -> io::Result<()> {
        match &self.backend {
            Backend::Native(term) => term.move_cursor_down(n),
            Backend::Ansi(_) => self.move_cursor(n, 'B'),
        }
    }

    fn move_cursor_right(&self, n: usize) -> io::Result<()> {
        match &self.backend {
            Backend::Native(term) => term.move_cursor_right(n),
            Backend::Ansi(_) => self.move_cursor(n, 'C'),
        }
    }

    fn move_cursor_left(&self, n: usize) -> io::Result<()> {
        match &self.backend {
            Backend::Native(term) => term.move_cursor_left(n),
            Backend::Ansi(_) => self.move_cursor(n, 'D'),
        }
    }

    fn write_line(&self, s: &str) -> io::Result<()> {
        match &self.backend {
            Backend::Native(term) => term.write_line(s),
            Backend::Ansi(_) => self.with_ansi(|state, config| {
                state.open_frame(config)?;
                writeln!(state.out, "{s}")
            }),
        }
    }

    fn write_str(&self, s: &str) -> io::Result<()> {
        match &self.backend {
            Backend::Native(term) => term.write_str(s),
            Backend::Ansi(_) => self.with_ansi(|state, config| {
                state.open_frame(config)?;
                state.out.write_all(s.as_bytes())
            }),
        }
    }

    fn clear_line(&self) -> io::Result<()> {
        match &self.backend {
            Backend::Native(term) => term.clear_line(),
            Backend::Ansi(_) => self.with_ansi(|state, config| {
                if state.frame_open {
                    state.out.write_all(CARRIAGE_RETURN_PREFIX.as_bytes())
                } else {
                    state.open_frame(config)
                }
            }),
        }
    }

    fn flush(&self) -> io::Result<()> {
        match &self.backend {
            Backend::Native(term) => term.flush(),
            Backend::Ansi(_) => self.with_ansi(|state, config| {
                if state.frame_open {
                    state.out.write_all(config.clear_suffix().as_bytes())?;
                    state.frame_open = false;
                }
                state.out.flush()
            }),
        }
    }
}
