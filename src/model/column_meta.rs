//! Column metadata

use std::fmt;

use serde::Serialize;

/// One column of a `CREATE TABLE` statement, normalized across dialects
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnMeta {
    /// Column name with identifier quoting stripped
    pub name: String,
    /// Data type exactly as declared (e.g., "bigint(20)", "NUMBER(10,2)").
    /// Not normalized across dialects.
    #[serde(rename = "type")]
    pub data_type: String,
    /// Inline `COMMENT '...'` text with single quotes stripped
    pub comment: Option<String>,
    /// True only for an inline column-level `PRIMARY KEY`.
    /// A table-level `PRIMARY KEY (col)` constraint does not set this flag.
    pub is_primary_key: bool,
}

impl ColumnMeta {
    pub fn new(
        name: impl Into<String>,
        data_type: impl Into<String>,
        comment: Option<String>,
        is_primary_key: bool,
    ) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            comment,
            is_primary_key,
        }
    }
}

impl fmt::Display for ColumnMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pk_mark = if self.is_primary_key { " [PK]" } else { "" };
        let comment = self.comment.as_deref().unwrap_or("null");
        write!(
            f,
            "{{{}, {}{}, comment='{}'}}",
            self.name, self.data_type, pk_mark, comment
        )
    }
}
