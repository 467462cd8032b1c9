use std::path::PathBuf;

use thiserror::Error;

/// Main error type for classdoc operations
#[derive(Error, Debug)]
pub enum ClassdocError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(String),

    #[error("Syntax error in {path} at line {line}, column {column}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Parser error: {0}")]
    Parser(String),

    #[error("Generation service error: {0}")]
    Service(String),

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

pub type Result<T> = std::result::Result<T, ClassdocError>;
