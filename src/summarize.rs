use crate::options::Config;
use crate::source::Source;
use anyhow::{Context, Result};
use log::*;
use online_stats::*;
use std::fmt;
use std::io::{self, BufRead};

/// Read all of `source` and summarize it.
pub fn summarize(source: &Source, config: &Config) -> Result<Summary> {
    info!("Reading {}", source);
    let input = source.open()?;
    summarize_reader(source, input, config.level, config.policy)
}

pub fn summarize_reader(
    source: &Source,
    input: impl BufRead,
    level: f64,
    policy: Policy,
) -> Result<Summary> {
    let mut stats = Accumulator::new();
    for x in Samples::new(input, source) {
        let x = x.with_context(|| format!("failed to read {}", source))?;
        stats.ingest(x);
    }
    // The mean of a single sample is fine, but nothing else is
    if stats.count() < 2 {
        return Err(Error::NotEnoughData(stats.count())).with_context(|| source.to_string());
    }
    let summary =
        Summary::new(&stats, level, policy).ok_or(Error::NotEnoughData(stats.count()))?;
    debug!(
        "{}: n={}, half-width from {}",
        source, summary.count, summary.distribution
    );
    Ok(summary)
}

/// The numbers in a stream of whitespace-separated text.
///
/// Stops at the end of the stream or at the first word which isn't a
/// number, whichever comes first.
pub struct Samples<'a, R> {
    lines: io::Lines<R>,
    words: std::vec::IntoIter<String>,
    source: &'a Source,
    finished: bool,
}

impl<'a, R: BufRead> Samples<'a, R> {
    pub fn new(input: R, source: &'a Source) -> Samples<'a, R> {
        Samples {
            lines: input.lines(),
            words: Vec::new().into_iter(),
            source,
            finished: false,
        }
    }
}

impl<'a, R: BufRead> Iterator for Samples<'a, R> {
    type Item = io::Result<f64>;
    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            if let Some(word) = self.words.next() {
                match word.parse() {
                    Ok(x) => return Some(Ok(x)),
                    Err(_) => {
                        warn!(
                            "{}: stopped reading at \"{}\", which isn't a number",
                            self.source, word
                        );
                        self.finished = true;
                    }
                }
            } else {
                match self.lines.next() {
                    None => self.finished = true,
                    Some(Ok(line)) => {
                        self.words = line
                            .split_whitespace()
                            .map(str::to_string)
                            .collect::<Vec<_>>()
                            .into_iter();
                    }
                    Some(Err(e)) => {
                        self.finished = true;
                        return Some(Err(e));
                    }
                }
            }
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    NotEnoughData(u64),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NotEnoughData(n) => {
                write!(f, "need at least two numbers as input (got {})", n)
            }
        }
    }
}
impl std::error::Error for Error {}
