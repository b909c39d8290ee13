use std::io::{self, Write};

use aabo::{BenchmarkSettings, run};

use indicatif::{ProgressBar, ProgressStyle};
use rand::{SeedableRng as _, rngs::SmallRng};

/// Stderr writer that hides the progress bar while a log line is written.
#[derive(Clone)]
struct BarWriter(ProgressBar);

impl Write for BarWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.suspend(|| io::stderr().write(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.suspend(|| io::stderr().flush())
    }
}

fn main() -> anyhow::Result<()> {
    let bar = ProgressBar::no_length()
        .with_style(ProgressStyle::with_template("{msg:>16} {wide_bar} {pos}/{len}")?);

    // Logs and the progress bar go to stderr, stdout only gets the report lines.
    tracing_subscriber::fmt()
        .with_writer({
            let bar = bar.clone();
            move || BarWriter(bar.clone())
        })
        .init();

    let settings = BenchmarkSettings::default();
    let mut rng = SmallRng::seed_from_u64(settings.seed);

    let results = run(&settings, &mut rng, {
        let bar = bar.clone();
        move |progress| {
            bar.set_message(progress.stage.to_string());
            bar.set_length(progress.total as u64);
            bar.set_position(progress.finished as u64);
        }
    })?;
    bar.finish_and_clear();

    for result in results {
        println!("{result}");
    }

    Ok(())
}
