//! Example redrawing a progress line with the strategy picked for this terminal.
//!
//! Run with `RUST_LOG=clearline=debug` to see how the strategy was chosen.

use clearline::progress::{LineWriter, ProgressBarOpts, ProgressLine};
use clearline::resolver::DEFAULT_PROBE_TIMEOUT;
use clearline::utils::terminal_size;
use color_eyre::Result;
use std::thread::sleep;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Unsupported platforms stop here.
    let config = clearline::global()?;
    let size = terminal_size(config, DEFAULT_PROBE_TIMEOUT);
    eprintln!(
        "mode: {:?}, strategy: {:?}, terminal: {}x{}",
        config.mode(),
        config.strategy(),
        size.cols,
        size.rows
    );

    // Raw redraws.
    let mut line = LineWriter::new(std::io::stderr(), config.clone());
    for pct in (0..=100).step_by(5) {
        line.redraw(&format!("raw redraw {pct:>3}%"))?;
        sleep(Duration::from_millis(40));
    }
    line.finish()?;

    // indicatif bar drawing through the same strategy.
    let bar = ProgressLine::new(ProgressBarOpts::with_bar_style(), config, 50)?;
    for _ in 0..50 {
        bar.inc(1);
        sleep(Duration::from_millis(40));
    }
    bar.finish();

    Ok(())
}
