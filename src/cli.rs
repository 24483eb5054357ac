//! Command-line surface for the `nss-tree` binary.
//!
//! Uses the same `clap`-derive shape as other small single-binary crates
//! (e.g. `ascii_convert`-style tools): one `Args` struct, one `ValueEnum`
//! for the output mode.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Build a nearest-smaller-suffix tree over one or more input files.
#[derive(Parser, Debug)]
#[command(name = "nss-tree", version, about, long_about = None)]
pub struct Args {
    /// Input file(s); repeat the flag to process more than one.
    #[arg(long = "file", required = true)]
    pub files: Vec<PathBuf>,

    /// Cap each input to its first N bytes.
    #[arg(long)]
    pub length: Option<usize>,

    /// DeltaLCPStack quantization parameter.
    #[arg(long, default_value_t = 4, value_parser = parse_delta)]
    pub delta: u8,

    /// Which form of output to produce.
    #[arg(long = "output", value_enum, default_value_t = OutputKind::Arrays)]
    pub output: OutputKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// Balanced-parentheses encoding of the Cartesian tree.
    Bp,
    /// PSS/NSS integer arrays.
    Arrays,
    /// Suffix-array-based reference oracle (for validation, not speed).
    Oracle,
}

const ACCEPTED_DELTAS: [u8; 8] = [0, 1, 2, 4, 8, 16, 32, 64];

fn parse_delta(s: &str) -> Result<u8, String> {
    let value: u8 = s.parse().map_err(|_| format!("'{s}' is not a valid integer"))?;
    if ACCEPTED_DELTAS.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "delta must be one of {ACCEPTED_DELTAS:?}, got {value}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn rejects_an_unaccepted_delta() {
        assert!(parse_delta("3").is_err());
        assert!(parse_delta("8").is_ok());
    }

    #[test]
    fn parses_repeated_file_flags() {
        let args = Args::parse_from([
            "nss-tree",
            "--file",
            "a.txt",
            "--file",
            "b.txt",
            "--delta",
            "8",
        ]);
        assert_eq!(args.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(args.delta, 8);
        assert_eq!(args.output, OutputKind::Arrays);
    }
}
