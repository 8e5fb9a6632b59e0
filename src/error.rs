use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocExtractError {
    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input file does not exist: {path}")]
    InputNotFound { path: String },

    #[error("Output file already exists: {path}")]
    OutputExists { path: String },

    #[error("Config file does not exist: {path}")]
    ConfigNotFound { path: String },

    #[error("Unsupported file extension: {path}")]
    UnsupportedExtension { path: String },

    #[error("Permission denied: {path}")]
    Permission { path: String },

    #[error("Failed to access {path}: {message}")]
    Access { path: String, message: String },

    #[error("Malformed config file {path}: {message}")]
    MalformedConfig { path: String, message: String },

    #[error("Invalid regular expression '{pattern}': {message}")]
    PatternSyntax { pattern: String, message: String },
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for DocExtractError {
    fn user_message(&self) -> String {
        match self {
            DocExtractError::InputNotFound { path } => {
                format!("Input file '{}' does not exist.", path)
            }
            DocExtractError::OutputExists { path } => {
                format!("Output file '{}' already exists.", path)
            }
            DocExtractError::ConfigNotFound { path } => {
                format!("Config file '{}' does not exist.", path)
            }
            DocExtractError::UnsupportedExtension { path } => {
                format!("Unsupported file extension for '{}'.", path)
            }
            DocExtractError::Permission { path } => {
                format!("Permission denied when accessing: {}", path)
            }
            DocExtractError::Access { path, message } => {
                format!("OS error while accessing '{}': {}", path, message)
            }
            DocExtractError::MalformedConfig { path, message } => {
                format!("Config file '{}' is not valid: {}", path, message)
            }
            DocExtractError::PatternSyntax { pattern, message } => {
                format!("Invalid regular expression '{}': {}", pattern, message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            DocExtractError::InputNotFound { .. } => Some(
                "Check that the input path is correct and the file exists.".to_string(),
            ),
            DocExtractError::OutputExists { .. } => Some(
                "The tool never overwrites. Remove the existing file or choose a different output path.".to_string(),
            ),
            DocExtractError::ConfigNotFound { .. } => Some(
                "Provide the path to a JSON config file containing pattern definitions.".to_string(),
            ),
            DocExtractError::UnsupportedExtension { .. } => Some(format!(
                "Supported extensions are: {}",
                crate::filter::SUPPORTED_EXTENSIONS.join(", ")
            )),
            DocExtractError::Permission { .. } => Some(
                "Ensure you have read permission for the file.".to_string(),
            ),
            DocExtractError::MalformedConfig { .. } => Some(
                r#"The config must be a JSON array of objects with string "pattern" and "transform" fields."#.to_string(),
            ),
            DocExtractError::PatternSyntax { .. } => Some(
                "Fix the regular expression in the config file. Capture groups are referenced in transforms as $1, $2, ...".to_string(),
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DocExtractError>;

/// Maps an I/O failure on a file resource to the reported error kinds:
/// missing file, permission denial, or a generic access fault carrying the
/// cause text.
pub fn access_error(path: &str, error: std::io::Error) -> DocExtractError {
    use std::io::ErrorKind;

    match error.kind() {
        ErrorKind::NotFound => DocExtractError::ConfigNotFound {
            path: path.to_string(),
        },
        ErrorKind::PermissionDenied => DocExtractError::Permission {
            path: path.to_string(),
        },
        _ => DocExtractError::Access {
            path: path.to_string(),
            message: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_user_friendly_messages() {
        let error = DocExtractError::OutputExists {
            path: "out.txt".to_string(),
        };
        assert!(error.user_message().contains("already exists"));
        assert!(error.suggestion().is_some());
    }

    #[test]
    fn test_unsupported_extension_suggestion_lists_extensions() {
        let error = DocExtractError::UnsupportedExtension {
            path: "a.docx".to_string(),
        };
        let suggestion = error.suggestion().unwrap();
        assert!(suggestion.contains("txt"));
        assert!(suggestion.contains("py"));
    }

    #[test]
    fn test_access_error_mapping() {
        let not_found = access_error("cfg.json", IoError::new(ErrorKind::NotFound, "gone"));
        assert!(matches!(not_found, DocExtractError::ConfigNotFound { .. }));

        let denied = access_error("cfg.json", IoError::new(ErrorKind::PermissionDenied, "no"));
        assert!(matches!(denied, DocExtractError::Permission { .. }));

        let other = access_error("cfg.json", IoError::new(ErrorKind::InvalidData, "bad"));
        match other {
            DocExtractError::Access { path, message } => {
                assert_eq!(path, "cfg.json");
                assert!(message.contains("bad"));
            }
            _ => panic!("expected Access"),
        }
    }

    #[test]
    fn test_pattern_syntax_identifies_pattern() {
        let error = DocExtractError::PatternSyntax {
            pattern: "([unclosed".to_string(),
            message: "unclosed group".to_string(),
        };
        assert!(error.user_message().contains("([unclosed"));
    }
}
