use crate::options::*;
use crate::source::Source;
use anyhow::Result;
use online_stats::Summary;
use serde::Serialize;
use std::io::Write;
use tabwriter::{Alignment, TabWriter};

enum Output<W: Write> {
    Table(TabWriter<W>),
    Csv(csv::Writer<W>),
    Json(W),
}

/// Writes one row per summarized source.
///
/// Tables are only aligned once everything has been printed, so nothing
/// appears until `finish()` is called.
pub struct Printer<W: Write> {
    out: Output<W>,
    columns: Vec<Column>,
    /// Whether rows start with the name of their source
    labelled: bool,
}

impl<W: Write> Printer<W> {
    pub fn new(out: W, config: &Config) -> Result<Printer<W>> {
        let labelled = config.sources.len() > 1;
        let mut headings = Vec::new();
        if labelled {
            headings.push("Source");
        }
        headings.extend(config.columns.iter().map(|col| col.heading()));

        let out = match config.format {
            Format::Table => {
                let mut out = TabWriter::new(out).padding(1).alignment(Alignment::Right);
                if config.headings {
                    for heading in &headings {
                        write!(out, "{}\t", heading)?;
                    }
                    writeln!(out)?;
                }
                Output::Table(out)
            }
            Format::Csv => {
                let mut out = csv::Writer::from_writer(out);
                if config.headings {
                    out.write_record(&headings)?;
                }
                Output::Csv(out)
            }
            Format::Json => Output::Json(out),
        };
        Ok(Printer {
            out,
            columns: config.columns.clone(),
            labelled,
        })
    }

    pub fn print(&mut self, source: &Source, summary: &Summary) -> Result<()> {
        match &mut self.out {
            Output::Table(out) => {
                if self.labelled {
                    write!(out, "{}\t", source)?;
                }
                for col in &self.columns {
                    match col {
                        Column::Count => write!(out, "{}\t", summary.count)?,
                        col => write!(out, "{:.4}\t", value(*col, summary))?,
                    }
                }
                writeln!(out)?;
            }
            Output::Csv(out) => {
                let mut record = Vec::new();
                if self.labelled {
                    record.push(source.to_string());
                }
                record.extend(self.columns.iter().map(|col| match col {
                    Column::Count => summary.count.to_string(),
                    col => value(*col, summary).to_string(),
                }));
                out.write_record(&record)?;
            }
            Output::Json(out) => {
                let record = Record {
                    source: source.to_string(),
                    summary,
                };
                serde_json::to_writer(&mut *out, &record)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    pub fn finish(self) -> Result<()> {
        match self.out {
            Output::Table(mut out) => out.flush()?,
            Output::Csv(mut out) => out.flush()?,
            Output::Json(mut out) => out.flush()?,
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct Record<'a> {
    source: String,
    #[serde(flatten)]
    summary: &'a Summary,
}

fn value(col: Column, s: &Summary) -> f64 {
    match col {
        Column::Count => s.count as f64,
        Column::Sum => s.sum,
        Column::Min => s.min,
        Column::Max => s.max,
        Column::Avg => s.mean,
        Column::Var => s.variance,
        Column::StdDev => s.stddev,
        Column::StdErr => s.stderr,
        Column::HWidth => s.half_width,
        Column::PctHWidth => s.percent_half_width,
    }
}
