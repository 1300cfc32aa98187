use anyhow::{Context, Result};
use std::fmt;
use std::fs::File;
use std::io::{stdin, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Somewhere to read numbers from.
#[derive(Debug, PartialEq, Clone, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl From<PathBuf> for Source {
    fn from(x: PathBuf) -> Source {
        if x.as_os_str() == "-" {
            Source::Stdin
        } else {
            Source::File(x)
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("-"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl Source {
    pub fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Source::Stdin => Ok(Box::new(stdin().lock())),
            Source::File(path) => open_file(path),
        }
    }
}

fn open_file(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)
        .with_context(|| format!("could not open file '{}' for reading", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}
