//! Error types for ddl-meta

use std::path::PathBuf;
use thiserror::Error;

/// Why a single statement did not produce a `TableMeta`.
///
/// Every variant is absorbed by [`crate::parser::parse_create_table`]; callers that
/// need to tell the causes apart use [`crate::parser::try_parse_create_table`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    #[error("DDL text is empty")]
    EmptyInput,

    #[error("No statement was parsed from the DDL text")]
    NoStatementParsed,

    #[error("This is a DROP TABLE statement, not a CREATE TABLE statement")]
    WrongStatementKind,

    #[error("Unsupported SQL statement type: {statement}")]
    UnsupportedStatementKind { statement: String },

    #[error("SQL syntax error at line {line}: {message}")]
    SyntaxError { line: usize, message: String },
}

impl ParseFailure {
    /// Whether this failure is reported on the diagnostic channel.
    ///
    /// Empty input and an empty parse are silent; everything else is logged.
    pub fn emits_diagnostic(&self) -> bool {
        !matches!(self, ParseFailure::EmptyInput | ParseFailure::NoStatementParsed)
    }
}

/// Errors raised outside the statement pipeline (input files, CLI arguments)
#[derive(Error, Debug)]
pub enum DdlMetaError {
    #[error("Failed to read DDL file: {path}")]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("DDL file is neither valid UTF-8 nor GB18030: {path}")]
    InvalidEncoding { path: PathBuf },

    #[error("Unknown database type: {name}")]
    UnknownDbType { name: String },
}
