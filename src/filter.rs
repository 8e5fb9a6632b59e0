use std::path::Path;

/// File extensions the extractor will accept as input, compared
/// case-insensitively and without the leading dot.
pub const SUPPORTED_EXTENSIONS: &[&str] =
    &["txt", "csv", "json", "xml", "yaml", "yml", "md", "py"];

/// Check whether the path's extension is in the supported set.
///
/// The extension is the substring after the final dot of the final path
/// segment. A path with no extension is not supported.
pub fn is_supported<P: AsRef<Path>>(path: P) -> bool {
    match path.as_ref().extension().and_then(|s| s.to_str()) {
        Some(extension) => {
            let ext_lower = extension.to_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext_lower.as_str())
        }
        None => false,
    }
}
