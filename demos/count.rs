//! Example driving a progress bar from a few worker threads

use color_eyre::Result;
use linebar::progress::{BarStyle, ProgressBarBuilder};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let total = 2_000;
    let bar = ProgressBarBuilder::new(total)
        .description("counting sheep")
        .frequency_update(20)
        .style(BarStyle::HASH)
        .try_build(console::Term::stdout())?;

    // Try `cargo run --example count > out.log` to see the logging mode.
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                for _ in 0..total / 4 {
                    std::thread::sleep(Duration::from_millis(2));
                    bar.inc();
                }
            });
        }
    });

    bar.finish()?;
    Ok(())
}
