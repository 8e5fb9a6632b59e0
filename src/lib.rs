pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod filter;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{PatternDefinition, PatternSet};
pub use error::{DocExtractError, Result, UserFriendlyError};
pub use extractor::{Extraction, ExtractionSummary, LineExtractor};
pub use filter::{is_supported, SUPPORTED_EXTENSIONS};
pub use ui::{OutputFormatter, OutputMode};

use std::path::Path;

/// Main library interface: the validation/extract/persist pipeline.
pub struct DocExtract {
    output_formatter: OutputFormatter,
}

impl DocExtract {
    pub fn new(output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        Self {
            output_formatter: OutputFormatter::new(output_mode, verbose, quiet),
        }
    }

    pub fn from_cli(cli_args: &Cli) -> Self {
        Self::new(
            cli_args.output_mode(),
            cli_args.verbosity_level(),
            cli_args.quiet,
        )
    }

    /// Run the full pipeline. Returns the extraction summary on success;
    /// every validation or processing failure terminates the run with no
    /// partial output written.
    pub fn run(&self, input: &Path, output: &Path, config: &Path) -> Result<ExtractionSummary> {
        // Step 1: Input file must exist
        if !input.is_file() {
            return Err(DocExtractError::InputNotFound {
                path: input.display().to_string(),
            });
        }
        self.output_formatter
            .info(&format!("Input file found: {}", input.display()));

        // Step 2: Output file must not already exist
        if output.exists() {
            return Err(DocExtractError::OutputExists {
                path: output.display().to_string(),
            });
        }
        self.output_formatter
            .info(&format!("Output path is free: {}", output.display()));

        // Step 3: Config file must exist
        if !config.is_file() {
            return Err(DocExtractError::ConfigNotFound {
                path: config.display().to_string(),
            });
        }
        self.output_formatter
            .info(&format!("Config file found: {}", config.display()));

        // Step 4: Input file must be a supported file type
        if !filter::is_supported(input) {
            return Err(DocExtractError::UnsupportedExtension {
                path: input.display().to_string(),
            });
        }

        // Step 5: Load matching patterns from config
        let patterns = PatternSet::load(config)?;
        self.output_formatter
            .info(&format!("Loaded {} pattern definition(s)", patterns.len()));

        // Step 6: Extract matching lines with transformations
        let extractor = LineExtractor::new(&patterns)?;
        let extraction = extractor.extract(input)?;

        // Step 7: Write output only when something matched
        if !extraction.lines.is_empty() {
            std::fs::write(output, extraction.lines.join("\n"))?;
        }

        self.output_formatter
            .print_extraction_summary(&extraction.summary, &output.display().to_string());

        Ok(extraction.summary)
    }

    pub fn handle_error(&self, error: &DocExtractError) {
        self.output_formatter.print_user_friendly_error(error);
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }
}
