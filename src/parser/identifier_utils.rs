//! Quote stripping for identifiers and string literals.
//!
//! MySQL, Hive and ODPS quote identifiers with backticks; Oracle and PostgreSQL use
//! double quotes. Both helpers remove *every* occurrence of their quote characters,
//! not just a delimiting pair, so a name or comment that legitimately contains one
//! of those characters loses it. This is a known limitation and is kept on purpose
//! so output matches existing consumers of the metadata.
//!
//! SQL Server brackets (`[dbo].[Users]`) are not quote characters here and survive.
//!
//! # Examples
//!
//! ```ignore
//! use crate::parser::identifier_utils::*;
//!
//! assert_eq!(strip_identifier_quoting("`users`"), "users");
//! assert_eq!(strip_identifier_quoting("\"HR\".\"EMPLOYEES\""), "HR.EMPLOYEES");
//! assert_eq!(strip_literal_quoting("'主键ID'"), "主键ID");
//! ```

use sqlparser::ast::{Ident, ObjectName};

/// Removes every backtick and double quote from an identifier.
pub fn strip_identifier_quoting(raw: &str) -> String {
    raw.chars().filter(|&c| c != '`' && c != '"').collect()
}

/// Removes every single quote from a literal value.
pub fn strip_literal_quoting(raw: &str) -> String {
    raw.replace('\'', "")
}

/// Renders an identifier the way the parser quoted it, then strips the quoting.
pub fn normalize_ident(ident: &Ident) -> String {
    strip_identifier_quoting(&ident.to_string())
}

/// Renders a (possibly schema-qualified) object name, then strips the quoting.
pub fn normalize_object_name(name: &ObjectName) -> String {
    strip_identifier_quoting(&name.to_string())
}
