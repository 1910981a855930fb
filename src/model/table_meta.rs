//! Table metadata

use std::fmt;

use serde::Serialize;

use super::ColumnMeta;
use crate::dialect::DbType;

/// Metadata extracted from one `CREATE TABLE` statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableMeta {
    /// Table name with backticks and double quotes stripped.
    /// Schema qualification is kept as the parser rendered it (e.g., "HR.EMPLOYEES").
    pub table_name: String,
    /// Dialect the statement was parsed under
    pub db_type: DbType,
    /// Columns in declaration order; duplicate names are kept
    pub columns: Vec<ColumnMeta>,
    /// Columns from a native `PARTITIONED BY (...)` clause, empty for other dialects
    pub partition_columns: Vec<ColumnMeta>,
}

impl TableMeta {
    pub fn new(table_name: impl Into<String>, db_type: DbType) -> Self {
        Self {
            table_name: table_name.into(),
            db_type,
            columns: Vec::new(),
            partition_columns: Vec::new(),
        }
    }

    /// Look up a column by its normalized name (first match wins)
    pub fn column(&self, name: &str) -> Option<&ColumnMeta> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of columns carrying an inline primary key marker
    pub fn primary_key_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_primary_key)
            .map(|c| c.name.as_str())
            .collect()
    }
}

fn write_column_list(f: &mut fmt::Formatter<'_>, columns: &[ColumnMeta]) -> fmt::Result {
    f.write_str("[")?;
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", column)?;
    }
    f.write_str("]")
}

impl fmt::Display for TableMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "TableMeta [{}] {}", self.db_type, self.table_name)?;
        f.write_str("  Columns: ")?;
        write_column_list(f, &self.columns)?;
        f.write_str("\n  Partitions: ")?;
        write_column_list(f, &self.partition_columns)
    }
}
