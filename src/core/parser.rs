use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::ParsingConfig;
use crate::error::{ClassdocError, Result};
use super::discovery::discover_source_files;
use super::languages::{LanguageParser, PythonParser};

/// A method defined directly in a class body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodRecord {
    pub name: String,
}

/// A class declaration and the methods it defines, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRecord {
    pub name: String,
    pub methods: Vec<MethodRecord>,
}

impl ClassRecord {
    pub fn new(name: impl Into<String>, methods: Vec<MethodRecord>) -> Self {
        Self {
            name: name.into(),
            methods,
        }
    }

    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.iter().map(|m| m.name.as_str())
    }
}

/// Represents a parsed source file with its extracted classes
#[derive(Debug, Clone)]
pub struct ParsedFile {
    /// Path as discovered under the source root
    pub path: PathBuf,

    /// Classes in tree-walk order
    pub classes: Vec<ClassRecord>,
}

impl ParsedFile {
    /// File name with directory components stripped
    pub fn base_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Extraction results for one run, kept in discovery order
#[derive(Debug, Clone, Default)]
pub struct ClassCatalog {
    files: Vec<ParsedFile>,
}

impl ClassCatalog {
    pub fn files(&self) -> &[ParsedFile] {
        &self.files
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn class_count(&self) -> usize {
        self.files.iter().map(|f| f.classes.len()).sum()
    }
}

impl FromIterator<ParsedFile> for ClassCatalog {
    fn from_iter<I: IntoIterator<Item = ParsedFile>>(iter: I) -> Self {
        Self {
            files: iter.into_iter().collect(),
        }
    }
}

/// Code parser that delegates to the configured language parser
pub struct CodeParser {
    language_parser: Box<dyn LanguageParser>,
}

impl CodeParser {
    pub fn new(config: &ParsingConfig) -> Result<Self> {
        let language_parser: Box<dyn LanguageParser> = match config.language.as_str() {
            "python" => Box::new(PythonParser::new()?),
            other => {
                return Err(ClassdocError::Config(format!("Unsupported language: {}", other)));
            }
        };

        Ok(Self { language_parser })
    }

    /// Extension used to select source files
    pub fn file_extension(&self) -> &str {
        self.language_parser.file_extensions()[0]
    }

    /// Discover and parse every source file under `dir`.
    ///
    /// The first unreadable or unparseable file aborts the whole catalog.
    pub fn parse_directory<P: AsRef<Path>>(&mut self, dir: P) -> Result<ClassCatalog> {
        let paths = discover_source_files(&dir, self.file_extension())?;
        info!(
            "Found {} {} files in {}",
            paths.len(),
            self.language_parser.language_name(),
            dir.as_ref().display()
        );

        paths.iter().map(|path| self.parse_file(path)).collect()
    }

    /// Parse a single source file
    pub fn parse_file<P: AsRef<Path>>(&mut self, file_path: P) -> Result<ParsedFile> {
        let path = file_path.as_ref();

        let source = std::fs::read_to_string(path)
            .map_err(|e| ClassdocError::FileSystem(format!("failed to read {}: {}", path.display(), e)))?;

        let classes = self.language_parser.extract_classes(&source, path)?;
        debug!("{}: {} classes", path.display(), classes.len());

        Ok(ParsedFile {
            path: path.to_path_buf(),
            classes,
        })
    }
}
