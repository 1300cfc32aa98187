mod options;
mod pretty;
mod source;
mod summarize;

use anyhow::Result;
use options::Config;
use std::io::Write;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let config = Config::from(options::options().run());
    let stdout = std::io::stdout();
    match run(&config, stdout.lock()) {
        Ok(0) => (),
        Ok(_) => std::process::exit(1),
        Err(e) => {
            // Ignore EPIPE
            if is_broken_pipe(&e) {
                return;
            }
            eprintln!("Error: {}", e);
            std::process::exit(1)
        }
    }
}

/// Summarize every source in turn.  A source which can't be read, or which
/// has too few numbers, is reported and skipped.  Returns the number of
/// sources skipped.
fn run<W: Write>(config: &Config, out: W) -> Result<usize> {
    let mut printer = pretty::Printer::new(out, config)?;
    let mut failed = 0;
    for source in &config.sources {
        match summarize::summarize(source, config) {
            Ok(summary) => printer.print(source, &summary)?,
            Err(e) => {
                eprintln!("Error: {:#}", e);
                failed += 1;
            }
        }
    }
    printer.finish()?;
    Ok(failed)
}

/// The CSV writer wraps I/O errors in its own error type
fn is_broken_pipe(e: &anyhow::Error) -> bool {
    let io_err = match e.downcast_ref::<csv::Error>() {
        Some(e) => match e.kind() {
            csv::ErrorKind::Io(e) => Some(e),
            _ => None,
        },
        None => e.downcast_ref::<std::io::Error>(),
    };
    io_err.map_or(false, |e| e.kind() == std::io::ErrorKind::BrokenPipe)
}
