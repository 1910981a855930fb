//! Statement classification

use sqlparser::ast::{CreateTable, ObjectType, Statement};

use crate::error::ParseFailure;

/// What a parsed statement is, as far as table extraction is concerned.
///
/// Adding a statement kind means adding a variant here and handling it in every match.
#[derive(Debug, Clone, Copy)]
pub enum StatementKind<'a> {
    CreateTable(&'a CreateTable),
    DropTable,
    Unsupported(&'a Statement),
}

impl<'a> StatementKind<'a> {
    /// Short label used in logs
    pub fn label(&self) -> &'static str {
        match self {
            StatementKind::CreateTable(_) => "CreateTable",
            StatementKind::DropTable => "DropTable",
            StatementKind::Unsupported(_) => "Unsupported",
        }
    }

    /// The CREATE TABLE node, or the failure that rejects this statement
    pub fn into_create_table(self) -> Result<&'a CreateTable, ParseFailure> {
        match self {
            StatementKind::CreateTable(create_table) => Ok(create_table),
            StatementKind::DropTable => Err(ParseFailure::WrongStatementKind),
            StatementKind::Unsupported(statement) => Err(ParseFailure::UnsupportedStatementKind {
                statement: statement.to_string(),
            }),
        }
    }
}

/// Classify a parsed statement
pub fn classify_statement(statement: &Statement) -> StatementKind<'_> {
    match statement {
        Statement::CreateTable(create_table) => StatementKind::CreateTable(create_table),
        Statement::Drop {
            object_type: ObjectType::Table,
            ..
        } => StatementKind::DropTable,
        other => StatementKind::Unsupported(other),
    }
}
