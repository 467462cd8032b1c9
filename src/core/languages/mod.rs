//! Language-specific parsers
//!
//! Each language gets its own module with a consistent interface for turning
//! source text into class records.

mod python;

pub use python::PythonParser;

use crate::error::Result;
use super::ClassRecord;

/// Trait that all language parsers must implement
pub trait LanguageParser {
    /// Parse source code and collect every class declaration in pre-order
    fn extract_classes(&mut self, content: &str, file_path: &std::path::Path) -> Result<Vec<ClassRecord>>;

    /// Get the file extensions this parser handles
    fn file_extensions(&self) -> &[&str];

    /// Get the language name
    fn language_name(&self) -> &str;
}
