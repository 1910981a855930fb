//! Column and partition-column extraction from sqlparser column definitions

use sqlparser::ast::{ColumnDef, ColumnOption, CreateTable, HiveDistributionStyle};

use super::identifier_utils::{normalize_ident, strip_literal_quoting};
use super::location::location_to_byte_offset;
use crate::dialect::DbType;
use crate::model::ColumnMeta;

/// Words that open a column option and so end the declared type
const COLUMN_OPTION_KEYWORDS: &[&str] = &[
    "ALIAS",
    "AS",
    "AUTOINCREMENT",
    "AUTO_INCREMENT",
    "CHARSET",
    "CHECK",
    "CODEC",
    "COLLATE",
    "COMMENT",
    "CONSTRAINT",
    "DEFAULT",
    "ENCODE",
    "EPHEMERAL",
    "GENERATED",
    "IDENTITY",
    "MATERIALIZED",
    "NOT",
    "NULL",
    "ON",
    "OPTIONS",
    "PRIMARY",
    "REFERENCES",
    "TTL",
    "UNIQUE",
];

/// Convert one column definition into a `ColumnMeta`.
///
/// `source` is the text the definition was parsed from; the type is taken from it
/// verbatim. Missing optional pieces (comment, primary key marker) become absent
/// fields; there is no failure path.
pub fn extract_column(col: &ColumnDef, source: &str) -> ColumnMeta {
    let mut comment = None;
    let mut is_primary_key = false;

    for option in &col.options {
        match &option.option {
            ColumnOption::Comment(text) => comment = Some(strip_literal_quoting(text)),
            // Inline PRIMARY KEY only; table-level constraints are not consulted
            ColumnOption::Unique { is_primary, .. } => is_primary_key |= *is_primary,
            _ => {}
        }
    }

    ColumnMeta {
        name: normalize_ident(&col.name),
        data_type: source_data_type(col, source).unwrap_or_else(|| col.data_type.to_string()),
        comment,
        is_primary_key,
    }
}

/// The type exactly as written after the column name.
///
/// `None` when the name carries no location (the parser builds some quoted
/// identifiers without one) or nothing follows it.
fn source_data_type(col: &ColumnDef, source: &str) -> Option<String> {
    let name_end = location_to_byte_offset(source, col.name.span.end)?;
    let declared = declared_type_text(source.get(name_end..)?);
    (!declared.is_empty()).then(|| declared.to_string())
}

/// Scan the text after a column name and return the type declaration at its start.
///
/// The type ends at a top-level `,` or `)`, or at the first word that opens a column
/// option. Brackets of every kind nest, and quoted text (`enum('a','b')`) is skipped whole.
fn declared_type_text(rest: &str) -> &str {
    let trimmed = rest.trim_start();
    let start = rest.len() - trimmed.len();
    let bytes = rest.as_bytes();

    let mut depth = 0usize;
    let mut end = start;
    let mut i = start;
    while i < bytes.len() {
        let c = bytes[i];
        match c {
            b' ' | b'\t' | b'\r' | b'\n' => i += 1,
            b'\'' | b'"' | b'`' => {
                i = skip_quoted(bytes, i);
                end = i;
            }
            b'(' | b'[' | b'<' => {
                depth += 1;
                i += 1;
                end = i;
            }
            b')' | b']' | b'>' => {
                if depth == 0 {
                    break;
                }
                depth -= 1;
                i += 1;
                end = i;
            }
            b',' | b';' if depth == 0 => break,
            b'-' if bytes.get(i + 1) == Some(&b'-') => break,
            b'/' if bytes.get(i + 1) == Some(&b'*') => break,
            _ if c == b'_' || c.is_ascii_alphanumeric() => {
                let word_end = i + rest[i..]
                    .find(|ch: char| ch != '_' && !ch.is_ascii_alphanumeric())
                    .unwrap_or(rest.len() - i);
                if depth == 0 && opens_column_option(&rest[i..word_end], &rest[word_end..]) {
                    break;
                }
                i = word_end;
                end = i;
            }
            _ => {
                i += rest[i..].chars().next().map_or(1, char::len_utf8);
                end = i;
            }
        }
    }

    &rest[start..end]
}

fn opens_column_option(word: &str, after: &str) -> bool {
    if COLUMN_OPTION_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(word))
    {
        return true;
    }
    // CHARACTER SET is an option; CHARACTER VARYING is a type
    word.eq_ignore_ascii_case("CHARACTER")
        && after
            .trim_start()
            .get(..3)
            .is_some_and(|next| next.eq_ignore_ascii_case("SET"))
}

/// Index just past the quoted run starting at `open`; a doubled quote stays inside.
fn skip_quoted(bytes: &[u8], open: usize) -> usize {
    let quote = bytes[open];
    let mut i = open + 1;
    while i < bytes.len() {
        if bytes[i] == quote {
            if bytes.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

/// Extract the columns of a native `PARTITIONED BY (...)` clause.
///
/// Returns an empty list when the dialect has no such clause, or when the
/// statement does not declare one.
pub fn extract_partition_columns(
    create_table: &CreateTable,
    db_type: DbType,
    source: &str,
) -> Vec<ColumnMeta> {
    if !db_type.supports_partition_columns() {
        return Vec::new();
    }

    match &create_table.hive_distribution {
        HiveDistributionStyle::PARTITIONED { columns } => columns
            .iter()
            .map(|col| extract_column(col, source))
            .collect(),
        _ => Vec::new(),
    }
}
