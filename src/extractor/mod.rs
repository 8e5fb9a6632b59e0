pub mod line_extractor;

pub use line_extractor::{Extraction, ExtractionSummary, LineExtractor};
