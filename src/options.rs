use crate::source::Source;
use bpaf::Bpaf;
use log::*;
use online_stats::Policy;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Summarize streams of whitespace-separated numbers.
///
/// Prints the count, extremes, mean, spread, and a confidence interval for
/// the mean of each input.  If no files are given, or a file is "-", the
/// numbers are read from stdin.  Choosing any of the display options
/// replaces the default set of columns.
#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
pub struct Options {
    /// Confidence level for the half-width, strictly between 0 and 1
    #[bpaf(
        short,
        long,
        argument("LEVEL"),
        guard(valid_level, LEVEL_MSG),
        fallback(0.95),
        display_fallback
    )]
    pub level: f64,
    #[bpaf(external(quantile), optional)]
    pub quantile: Option<Quantile>,
    /// Output format: table, csv, or json
    #[bpaf(short, long, argument("FORMAT"), fallback(Format::Table), display_fallback)]
    pub format: Format,
    /// Don't print column headings
    #[bpaf(short('x'), long)]
    pub no_headings: bool,
    #[bpaf(external(selection))]
    pub selection: Selection,
    #[bpaf(positional("FILE"))]
    pub files: Vec<PathBuf>,
}

const LEVEL_MSG: &str = "confidence level must be between 0.0 and 1.0";

fn valid_level(level: &f64) -> bool {
    *level > 0. && *level < 1.
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Bpaf)]
pub enum Quantile {
    /// Use the t-distribution for the half-width (default below 30 samples)
    #[bpaf(short('t'), long("use-t"))]
    UseT,
    /// Use the normal distribution for the half-width (default from 30 samples)
    #[bpaf(short('z'), long("use-z"))]
    UseZ,
}

/// Which columns to show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Bpaf)]
pub struct Selection {
    /// Show the average
    #[bpaf(short('a'), long)]
    pub average: bool,
    /// Show the count
    #[bpaf(short('c'), long)]
    pub count: bool,
    /// Show the standard deviation
    #[bpaf(short('d'), long)]
    pub stddev: bool,
    /// Show the standard error
    #[bpaf(short('e'), long)]
    pub stderr: bool,
    /// Show the maximum
    #[bpaf(short('m'), long)]
    pub max: bool,
    /// Show the minimum
    #[bpaf(short('n'), long)]
    pub min: bool,
    /// Show the confidence interval half-width as a percentage of the mean
    #[bpaf(short('p'), long)]
    pub percent_half_width: bool,
    /// Show the sum
    #[bpaf(short('s'), long)]
    pub sum: bool,
    /// Show the variance
    #[bpaf(short('v'), long)]
    pub variance: bool,
    /// Show the confidence interval half-width
    #[bpaf(short('w'), long)]
    pub half_width: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Table,
    Csv,
    Json,
}

impl FromStr for Format {
    type Err = String;
    fn from_str(x: &str) -> Result<Format, String> {
        match x {
            "table" => Ok(Format::Table),
            "csv" => Ok(Format::Csv),
            "json" => Ok(Format::Json),
            _ => Err(format!("unknown format \"{}\" (expected table, csv, or json)", x)),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Format::Table => "table",
            Format::Csv => "csv",
            Format::Json => "json",
        })
    }
}

/// A summary statistic which can be displayed as a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Count,
    Sum,
    Min,
    Max,
    Avg,
    Var,
    StdDev,
    StdErr,
    HWidth,
    PctHWidth,
}

impl Column {
    pub const ALL: [Column; 10] = [
        Column::Count,
        Column::Sum,
        Column::Min,
        Column::Max,
        Column::Avg,
        Column::Var,
        Column::StdDev,
        Column::StdErr,
        Column::HWidth,
        Column::PctHWidth,
    ];

    pub fn heading(self) -> &'static str {
        match self {
            Column::Count => "Count",
            Column::Sum => "Sum",
            Column::Min => "Min",
            Column::Max => "Max",
            Column::Avg => "Avg",
            Column::Var => "Var",
            Column::StdDev => "StdDev",
            Column::StdErr => "StdErr",
            Column::HWidth => "HWidth",
            Column::PctHWidth => "%HWidth",
        }
    }

    /// The columns shown when none are asked for
    pub fn defaults() -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|col| !matches!(col, Column::Sum | Column::Var | Column::StdErr))
            .collect()
    }

    fn selected(self, selection: &Selection) -> bool {
        match self {
            Column::Count => selection.count,
            Column::Sum => selection.sum,
            Column::Min => selection.min,
            Column::Max => selection.max,
            Column::Avg => selection.average,
            Column::Var => selection.variance,
            Column::StdDev => selection.stddev,
            Column::StdErr => selection.stderr,
            Column::HWidth => selection.half_width,
            Column::PctHWidth => selection.percent_half_width,
        }
    }
}

/// Everything the command line decided, fixed before any input is read.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub level: f64,
    pub policy: Policy,
    pub format: Format,
    pub headings: bool,
    /// Never empty; always in `Column::ALL` order
    pub columns: Vec<Column>,
    pub sources: Vec<Source>,
}

impl From<Options> for Config {
    fn from(opts: Options) -> Config {
        let policy = match opts.quantile {
            None => Policy::Auto,
            Some(Quantile::UseT) => Policy::ForceT,
            Some(Quantile::UseZ) => Policy::ForceZ,
        };
        let explicit = Column::ALL
            .into_iter()
            .filter(|col| col.selected(&opts.selection))
            .collect::<Vec<_>>();
        let columns = if explicit.is_empty() {
            Column::defaults()
        } else {
            explicit
        };
        let sources = if opts.files.is_empty() {
            vec![Source::Stdin]
        } else {
            let mut saw_stdin = false;
            opts.files
                .into_iter()
                .map(Source::from)
                .filter(|source| {
                    if *source != Source::Stdin {
                        true
                    } else if saw_stdin {
                        warn!("stdin was already read; ignoring the extra \"-\"");
                        false
                    } else {
                        saw_stdin = true;
                        true
                    }
                })
                .collect()
        };
        Config {
            level: opts.level,
            policy,
            format: opts.format,
            headings: !opts.no_headings,
            columns,
            sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, String> {
        options()
            .run_inner(args)
            .map(Config::from)
            .map_err(|e| format!("{:?}", e))
    }

    #[test]
    fn check_options() {
        options().check_invariants(false)
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.level, 0.95);
        assert_eq!(config.policy, Policy::Auto);
        assert_eq!(config.format, Format::Table);
        assert!(config.headings);
        assert_eq!(
            config.columns,
            vec![
                Column::Count,
                Column::Min,
                Column::Max,
                Column::Avg,
                Column::StdDev,
                Column::HWidth,
                Column::PctHWidth,
            ]
        );
        assert_eq!(config.sources, vec![Source::Stdin]);
    }

    #[test]
    fn level() {
        assert_eq!(parse(&["-l", "0.99"]).unwrap().level, 0.99);
        assert_eq!(parse(&["--level", "0.5"]).unwrap().level, 0.5);
        assert!(parse(&["-l", "0"]).is_err());
        assert!(parse(&["-l", "1"]).is_err());
        assert!(parse(&["-l", "1.5"]).is_err());
        assert!(parse(&["-l", "-0.1"]).is_err());
        assert!(parse(&["-l", "high"]).is_err());
    }

    #[test]
    fn quantile_overrides() {
        assert_eq!(parse(&["-t"]).unwrap().policy, Policy::ForceT);
        assert_eq!(parse(&["--use-z"]).unwrap().policy, Policy::ForceZ);
        assert!(parse(&["-t", "-z"]).is_err());
    }

    #[test]
    fn selecting_columns_replaces_defaults() {
        let config = parse(&["-v", "-c", "-s"]).unwrap();
        assert_eq!(config.columns, vec![Column::Count, Column::Sum, Column::Var]);
        let config = parse(&["-e", "-x"]).unwrap();
        assert_eq!(config.columns, vec![Column::StdErr]);
        assert!(!config.headings);
    }

    #[test]
    fn format() {
        assert_eq!(parse(&["-f", "csv"]).unwrap().format, Format::Csv);
        assert_eq!(parse(&["--format", "json"]).unwrap().format, Format::Json);
        assert!(parse(&["-f", "xml"]).is_err());
    }

    #[test]
    fn sources() {
        let config = parse(&["a.txt", "-", "b.txt", "-"]).unwrap();
        assert_eq!(
            config.sources,
            vec![
                Source::File("a.txt".into()),
                Source::Stdin,
                Source::File("b.txt".into()),
            ]
        );
    }
}
