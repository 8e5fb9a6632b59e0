use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docextract")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract annotated documentation lines from a text file")]
#[command(
    long_about = "DocExtract scans a single input file line-by-line, applies the regex \
                  patterns configured in a JSON file, and writes the transformed matches \
                  to a newly created output file."
)]
#[command(after_help = "EXAMPLES:\n  \
    docextract notes.md extracted.txt patterns.json\n  \
    docextract src/app.py docs.txt patterns.json --verbose\n\n\
    CONFIG FORMAT (JSON):\n  \
    [ { \"pattern\": \"^## (.*)\", \"transform\": \"$1\" } ]\n\n\
    The first pattern that matches at the start of a line wins; capture groups\n  \
    are referenced in transforms as $1, $2, ... or ${name}.")]
pub struct Cli {
    /// Input text file to scan (supported extensions: txt, csv, json, xml, yaml, yml, md, py)
    pub input_file: PathBuf,

    /// Output file to create (must not already exist)
    pub output_file: PathBuf,

    /// JSON config file with pattern definitions
    pub config_file: PathBuf,

    /// Output format for status messages
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with markers
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn output_mode(&self) -> OutputMode {
        match self.output_format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_three_positional_args() {
        let cli = Cli::try_parse_from(["docextract", "in.md", "out.txt", "cfg.json"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("in.md"));
        assert_eq!(cli.output_file, PathBuf::from("out.txt"));
        assert_eq!(cli.config_file, PathBuf::from("cfg.json"));
    }

    #[test]
    fn test_rejects_wrong_arg_count() {
        assert!(Cli::try_parse_from(["docextract", "in.md"]).is_err());
        assert!(Cli::try_parse_from(["docextract", "in.md", "out.txt"]).is_err());
        assert!(Cli::try_parse_from(["docextract", "a", "b", "c", "d"]).is_err());
    }

    #[test]
    fn test_output_mode_mapping() {
        let cli = Cli::try_parse_from([
            "docextract",
            "in.md",
            "out.txt",
            "cfg.json",
            "--output-format",
            "plain",
        ])
        .unwrap();
        assert_eq!(cli.output_mode(), OutputMode::Plain);
    }

    #[test]
    fn test_quiet_zeroes_verbosity() {
        let cli =
            Cli::try_parse_from(["docextract", "in.md", "out.txt", "cfg.json", "--quiet"]).unwrap();
        assert_eq!(cli.verbosity_level(), 0);
    }
}
