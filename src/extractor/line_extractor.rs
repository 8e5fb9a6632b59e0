use crate::config::PatternSet;
use crate::error::{DocExtractError, Result};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;
use std::time::{Duration, Instant};

/// Counters for a single extraction run, used for the final report.
#[derive(Debug, Clone)]
pub struct ExtractionSummary {
    pub lines_scanned: usize,
    pub lines_extracted: usize,
    start_time: Instant,
}

impl ExtractionSummary {
    pub fn new() -> Self {
        Self {
            lines_scanned: 0,
            lines_extracted: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

impl Default for ExtractionSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of scanning one input file: the transformed lines in input order,
/// plus run counters.
#[derive(Debug)]
pub struct Extraction {
    pub lines: Vec<String>,
    pub summary: ExtractionSummary,
}

#[derive(Debug)]
struct CompiledRule {
    regex: Regex,
    transform: String,
}

/// The line-scanning engine.
///
/// Patterns are compiled once, in configured order. For each input line the
/// rules are tried in that order; the first rule whose regex matches at the
/// start of the line wins, its transform is applied to the whole line, and
/// the remaining rules are skipped for that line.
#[derive(Debug)]
pub struct LineExtractor {
    rules: Vec<CompiledRule>,
}

impl LineExtractor {
    /// Compile all patterns in the set. A malformed regular expression fails
    /// the whole extraction, identifying the offending pattern.
    pub fn new(patterns: &PatternSet) -> Result<Self> {
        let mut rules = Vec::with_capacity(patterns.len());

        for definition in patterns.definitions() {
            let regex = Regex::new(&definition.pattern).map_err(|e| {
                DocExtractError::PatternSyntax {
                    pattern: definition.pattern.clone(),
                    message: e.to_string(),
                }
            })?;

            rules.push(CompiledRule {
                regex,
                transform: definition.transform.clone(),
            });
        }

        Ok(Self { rules })
    }

    /// Scan the input file line-by-line and collect the transformed matches.
    pub fn extract<P: AsRef<Path>>(&self, input_path: P) -> Result<Extraction> {
        let path = input_path.as_ref();
        let path_str = path.display().to_string();

        let file = File::open(path).map_err(|e| input_error(&path_str, e))?;
        let reader = BufReader::new(file);

        let mut lines = Vec::new();
        let mut summary = ExtractionSummary::new();

        for line in reader.lines() {
            let line = line.map_err(|e| input_error(&path_str, e))?;
            summary.lines_scanned += 1;

            if let Some(transformed) = self.apply_first_match(&line) {
                lines.push(transformed);
                summary.lines_extracted += 1;
            }
        }

        Ok(Extraction { lines, summary })
    }

    /// Try each rule in order against the start of the line. On the first
    /// anchored hit, substitute over the entire line and trim the result.
    fn apply_first_match(&self, line: &str) -> Option<String> {
        for rule in &self.rules {
            if matches_at_start(&rule.regex, line) {
                let transformed = rule.regex.replace_all(line, rule.transform.as_str());
                return Some(transformed.trim().to_string());
            }
        }
        None
    }
}

/// Anchored match: the match must begin at byte 0 of the line. A pattern
/// that only matches mid-line does not count. Leftmost-match semantics make
/// the position check exact: if any match starts at 0, `find` returns it.
fn matches_at_start(regex: &Regex, line: &str) -> bool {
    regex.find(line).is_some_and(|m| m.start() == 0)
}

fn input_error(path: &str, error: std::io::Error) -> DocExtractError {
    match error.kind() {
        ErrorKind::PermissionDenied => DocExtractError::Permission {
            path: path.to_string(),
        },
        _ => DocExtractError::Access {
            path: path.to_string(),
            message: error.to_string(),
        },
    }
}
