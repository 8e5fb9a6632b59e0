use crate::error::{access_error, DocExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A single configured (regex, substitution template) pair.
///
/// The pattern is not validated as a regular expression at load time;
/// malformed patterns surface when the extractor compiles them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternDefinition {
    pub pattern: String,
    pub transform: String,
}

/// Ordered set of pattern definitions loaded from a JSON config file.
///
/// Order determines match priority: the first definition whose pattern
/// matches a line wins. Immutable once loaded.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct PatternSet {
    patterns: Vec<PatternDefinition>,
}

impl PatternSet {
    /// Load pattern definitions from a UTF-8 JSON file containing an array of
    /// objects with string `pattern` and `transform` fields.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content =
            std::fs::read_to_string(path).map_err(|e| access_error(&path_str, e))?;

        let patterns: Vec<PatternDefinition> = serde_json::from_str(&content)
            .map_err(|e| DocExtractError::MalformedConfig {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { patterns })
    }

    pub fn definitions(&self) -> &[PatternDefinition] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl From<Vec<PatternDefinition>> for PatternSet {
    fn from(patterns: Vec<PatternDefinition>) -> Self {
        Self { patterns }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"[
                {"pattern": "^## (.*)", "transform": "$1"},
                {"pattern": "^# ", "transform": ""}
            ]"#,
        );

        let set = PatternSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.definitions()[0].pattern, "^## (.*)");
        assert_eq!(set.definitions()[0].transform, "$1");
    }

    #[test]
    fn test_load_preserves_order() {
        let file = write_config(
            r#"[
                {"pattern": "b", "transform": "2"},
                {"pattern": "a", "transform": "1"},
                {"pattern": "c", "transform": "3"}
            ]"#,
        );

        let set = PatternSet::load(file.path()).unwrap();
        let patterns: Vec<_> = set.definitions().iter().map(|d| d.pattern.as_str()).collect();
        assert_eq!(patterns, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_load_empty_array() {
        let file = write_config("[]");
        let set = PatternSet::load(file.path()).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let error = PatternSet::load("/nonexistent/config.json").unwrap_err();
        assert!(matches!(error, DocExtractError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_load_malformed_json() {
        let file = write_config("{not valid json");
        let error = PatternSet::load(file.path()).unwrap_err();
        assert!(matches!(error, DocExtractError::MalformedConfig { .. }));
    }

    #[test]
    fn test_load_wrong_shape() {
        // Valid JSON, but not an array of pattern definitions
        let file = write_config(r#"{"pattern": "x", "transform": "y"}"#);
        let error = PatternSet::load(file.path()).unwrap_err();
        assert!(matches!(error, DocExtractError::MalformedConfig { .. }));
    }

    #[test]
    fn test_load_missing_field() {
        let file = write_config(r#"[{"pattern": "^x"}]"#);
        let error = PatternSet::load(file.path()).unwrap_err();
        assert!(matches!(error, DocExtractError::MalformedConfig { .. }));
    }

    #[test]
    fn test_load_does_not_validate_regex() {
        // A syntactically broken regex loads fine; it fails at first use
        let file = write_config(r#"[{"pattern": "([unclosed", "transform": "$1"}]"#);
        let set = PatternSet::load(file.path()).unwrap();
        assert_eq!(set.len(), 1);
    }
}
