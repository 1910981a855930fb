//! CREATE TABLE extraction: the single-statement entry points and the script driver

use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;
use sqlparser::ast::{CreateTable, Statement};
use sqlparser::dialect::Dialect;
use sqlparser::keywords::Keyword;
use sqlparser::parser::{Parser, ParserError};
use sqlparser::tokenizer::{Token, TokenWithSpan, Tokenizer};
use tracing::{debug, info, warn};

use super::column_parser::{extract_column, extract_partition_columns};
use super::identifier_utils::normalize_object_name;
use super::location::location_to_byte_offset;
use super::statement_parser::{classify_statement, StatementKind};
use crate::dialect::DbType;
use crate::error::ParseFailure;
use crate::model::TableMeta;

/// Minimum number of statements to benefit from parallel extraction.
/// Below this threshold, sequential processing is faster due to rayon overhead.
const PARALLEL_THRESHOLD: usize = 8;

static ERROR_LINE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Line:\s*(\d+)").unwrap());

/// Extract line number from sqlparser error message (format: "... at Line: X, Column: Y")
fn extract_line_from_error(error_msg: &str) -> Option<usize> {
    let caps = ERROR_LINE_RE.captures(error_msg)?;
    caps.get(1)?.as_str().parse().ok()
}

fn syntax_error(error: ParserError) -> ParseFailure {
    let message = error.to_string();
    ParseFailure::SyntaxError {
        line: extract_line_from_error(&message).unwrap_or(1),
        message,
    }
}

/// Emit the diagnostic for a failure, if it carries one
fn report_failure(failure: &ParseFailure, db_type: DbType) {
    if failure.emits_diagnostic() {
        warn!(
            db_type = db_type.name(),
            error = %failure,
            "Failed to parse DDL [{}]: {}",
            db_type,
            failure
        );
    }
}

/// Emit the diagnostic for a parsed statement the script driver skips
fn report_skipped(failure: &ParseFailure, kind: StatementKind<'_>, db_type: DbType) {
    warn!(
        db_type = db_type.name(),
        kind = kind.label(),
        error = %failure,
        "Failed to parse DDL [{}]: {}",
        db_type,
        failure
    );
}

/// Assemble a `TableMeta` from a CREATE TABLE node.
///
/// `source` is the text the node was parsed from; column types are read from it.
/// Table-level constraints live in `constraints`, not `columns`, so only column
/// definitions contribute to `TableMeta::columns`.
pub fn build_table_meta(create_table: &CreateTable, db_type: DbType, source: &str) -> TableMeta {
    TableMeta {
        table_name: normalize_object_name(&create_table.name),
        db_type,
        columns: create_table
            .columns
            .iter()
            .map(|col| extract_column(col, source))
            .collect(),
        partition_columns: extract_partition_columns(create_table, db_type, source),
    }
}

/// Classify one parsed statement and build its `TableMeta` if it is a CREATE TABLE
pub fn extract_table(
    statement: &Statement,
    db_type: DbType,
    source: &str,
) -> Result<TableMeta, ParseFailure> {
    let create_table = classify_statement(statement).into_create_table()?;
    Ok(build_table_meta(create_table, db_type, source))
}

/// Parse the first statement of `ddl` as a CREATE TABLE.
///
/// Statements after the first are parsed (a syntax error anywhere fails the call)
/// but otherwise ignored.
pub fn try_parse_create_table(ddl: &str, db_type: DbType) -> Result<TableMeta, ParseFailure> {
    if ddl.is_empty() {
        return Err(ParseFailure::EmptyInput);
    }

    let dialect = db_type.sql_dialect();
    let statements = parse_script(ddl, dialect.as_ref()).map_err(syntax_error)?;
    let first = statements.first().ok_or(ParseFailure::NoStatementParsed)?;

    extract_table(first, db_type, ddl)
}

/// Parse the first statement of `ddl` as a CREATE TABLE, absorbing every failure.
///
/// Returns `None` when no table could be produced. Failures other than empty input or
/// an empty parse are logged at `warn` level naming the dialect and the cause.
pub fn parse_create_table(ddl: &str, db_type: DbType) -> Option<TableMeta> {
    match try_parse_create_table(ddl, db_type) {
        Ok(table) => {
            debug!("Parsed table [{}]: {}", db_type, table.table_name);
            Some(table)
        }
        Err(failure) => {
            report_failure(&failure, db_type);
            None
        }
    }
}

/// Parse every CREATE TABLE statement in a script.
///
/// Other statements are skipped with a diagnostic. The script is parsed in one call; if that
/// call fails, the script is split on `;` and each statement is parsed on its own so one
/// malformed statement does not discard the rest. Output keeps source order.
pub fn parse_multi_create_table(script: &str, db_type: DbType) -> Vec<TableMeta> {
    if script.trim().is_empty() {
        return Vec::new();
    }

    let dialect = db_type.sql_dialect();
    let tables = match parse_script(script, dialect.as_ref()) {
        Ok(statements) => extract_tables(&statements, db_type, script),
        Err(e) => {
            debug!(
                "Script does not parse as a whole [{}], parsing statements one by one: {}",
                db_type, e
            );
            parse_statements_individually(script, dialect.as_ref(), db_type)
        }
    };

    info!("Parsed {} table(s) from {} script", tables.len(), db_type);
    tables
}

fn extract_tables(statements: &[Statement], db_type: DbType, source: &str) -> Vec<TableMeta> {
    let extract = |statement: &Statement| {
        let kind = classify_statement(statement);
        match kind.into_create_table() {
            Ok(create_table) => {
                let table = build_table_meta(create_table, db_type, source);
                debug!("Parsed table [{}]: {}", db_type, table.table_name);
                Some(table)
            }
            Err(failure) => {
                report_skipped(&failure, kind, db_type);
                None
            }
        }
    };

    if statements.len() >= PARALLEL_THRESHOLD {
        statements.par_iter().filter_map(extract).collect()
    } else {
        statements.iter().filter_map(extract).collect()
    }
}

/// Parse a script in one call.
///
/// When that fails and the script has a table-level `PARTITION BY` clause, it is parsed
/// again with those clauses removed. The first error is kept if the retry fails too.
fn parse_script(sql: &str, dialect: &dyn Dialect) -> Result<Vec<Statement>, ParserError> {
    let error = match Parser::parse_sql(dialect, sql) {
        Ok(statements) => return Ok(statements),
        Err(e) => e,
    };

    match Tokenizer::new(dialect, sql).tokenize_with_location() {
        Ok(tokens) => reparse_without_partition_clauses(&tokens, dialect).ok_or(error),
        Err(_) => Err(error),
    }
}

/// Parse a run of tokens, with the same `PARTITION BY` retry as `parse_script`
fn parse_tokens(
    tokens: Vec<TokenWithSpan>,
    dialect: &dyn Dialect,
) -> Result<Vec<Statement>, ParserError> {
    let without_partitions = strip_partition_clauses(&tokens);
    let error = match Parser::new(dialect)
        .with_tokens_with_locations(tokens)
        .parse_statements()
    {
        Ok(statements) => return Ok(statements),
        Err(e) => e,
    };

    without_partitions
        .and_then(|tokens| {
            Parser::new(dialect)
                .with_tokens_with_locations(tokens)
                .parse_statements()
                .ok()
        })
        .ok_or(error)
}

fn reparse_without_partition_clauses(
    tokens: &[TokenWithSpan],
    dialect: &dyn Dialect,
) -> Option<Vec<Statement>> {
    let stripped = strip_partition_clauses(tokens)?;
    Parser::new(dialect)
        .with_tokens_with_locations(stripped)
        .parse_statements()
        .ok()
}

/// Drop every `PARTITION BY ...` clause that follows a closed top-level parenthesis,
/// up to the end of its statement.
///
/// This is the table-level range/list/hash partitioning of MySQL and similar dialects.
/// `PARTITION BY` inside parentheses (window specifications) is left alone. Returns
/// `None` when there is nothing to drop.
fn strip_partition_clauses(tokens: &[TokenWithSpan]) -> Option<Vec<TokenWithSpan>> {
    let mut kept = Vec::with_capacity(tokens.len());
    let mut depth = 0usize;
    let mut after_paren_group = false;
    let mut skipping = false;
    let mut stripped = false;

    for (i, token) in tokens.iter().enumerate() {
        match &token.token {
            Token::SemiColon if depth == 0 => {
                skipping = false;
                after_paren_group = false;
            }
            Token::LParen => depth += 1,
            Token::RParen => {
                depth = depth.saturating_sub(1);
                after_paren_group |= depth == 0;
            }
            Token::Word(word)
                if depth == 0
                    && after_paren_group
                    && !skipping
                    && word.keyword == Keyword::PARTITION
                    && next_keyword(&tokens[i + 1..]) == Some(Keyword::BY) =>
            {
                skipping = true;
                stripped = true;
            }
            _ => {}
        }
        if !skipping {
            kept.push(token.clone());
        }
    }

    stripped.then_some(kept)
}

/// Keyword of the next non-whitespace token
fn next_keyword(tokens: &[TokenWithSpan]) -> Option<Keyword> {
    match &tokens
        .iter()
        .find(|t| !matches!(t.token, Token::Whitespace(_)))?
        .token
    {
        Token::Word(word) => Some(word.keyword),
        _ => None,
    }
}

fn parse_statements_individually(
    script: &str,
    dialect: &dyn Dialect,
    db_type: DbType,
) -> Vec<TableMeta> {
    let (tokens, tail_failure) = tokenize_complete_statements(script, dialect);

    let mut tables = Vec::new();
    for statement_tokens in split_statement_tokens(tokens) {
        match parse_tokens(statement_tokens, dialect) {
            Ok(statements) => tables.extend(extract_tables(&statements, db_type, script)),
            Err(e) => report_failure(&syntax_error(e), db_type),
        }
    }

    if let Some(failure) = tail_failure {
        report_failure(&failure, db_type);
    }
    tables
}

/// Tokenize a script, keeping every statement that ends before a tokenizer error.
///
/// On error the text is cut at the last `;` before the error location and re-tokenized.
/// The cut-off tail comes back as one failure.
fn tokenize_complete_statements(
    script: &str,
    dialect: &dyn Dialect,
) -> (Vec<TokenWithSpan>, Option<ParseFailure>) {
    let error = match Tokenizer::new(dialect, script).tokenize_with_location() {
        Ok(tokens) => return (tokens, None),
        Err(e) => e,
    };

    let mut tokens = location_to_byte_offset(script, error.location)
        .and_then(|offset| script.get(..offset))
        .and_then(|prefix| Tokenizer::new(dialect, prefix).tokenize_with_location().ok())
        .unwrap_or_default();
    let complete = tokens
        .iter()
        .rposition(|t| t.token == Token::SemiColon)
        .unwrap_or(0);
    tokens.truncate(complete);

    let failure = ParseFailure::SyntaxError {
        line: error.location.line as usize,
        message: error.to_string(),
    };
    (tokens, Some(failure))
}

/// Split a token stream on `;`, dropping statements made only of whitespace and comments.
///
/// Tokens keep their original spans, so parser errors report lines within the whole script.
fn split_statement_tokens(tokens: Vec<TokenWithSpan>) -> Vec<Vec<TokenWithSpan>> {
    fn push_statement(statements: &mut Vec<Vec<TokenWithSpan>>, current: Vec<TokenWithSpan>) {
        let has_content = current
            .iter()
            .any(|t| !matches!(t.token, Token::Whitespace(_) | Token::EOF));
        if has_content {
            statements.push(current);
        }
    }

    let mut statements = Vec::new();
    let mut current = Vec::new();
    for token in tokens {
        if token.token == Token::SemiColon {
            push_statement(&mut statements, std::mem::take(&mut current));
        } else {
            current.push(token);
        }
    }
    push_statement(&mut statements, current);
    statements
}
