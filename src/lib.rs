//! ddl-meta: dialect-agnostic table metadata from `CREATE TABLE` statements
//!
//! This library parses DDL written for MySQL, Oracle, PostgreSQL, SQL Server, Hive,
//! ODPS/MaxCompute, ClickHouse and other dialects, and normalizes every table into the
//! same [`TableMeta`]/[`ColumnMeta`] model.
//!
//! ```
//! use ddl_meta::{parse_create_table, DbType};
//!
//! let table = parse_create_table(
//!     "CREATE TABLE `users` (`id` bigint(20) COMMENT '主键ID')",
//!     DbType::Mysql,
//! )
//! .unwrap();
//! assert_eq!(table.table_name, "users");
//! assert_eq!(table.columns[0].data_type, "bigint(20)");
//! assert_eq!(table.columns[0].comment.as_deref(), Some("主键ID"));
//! ```

pub mod dialect;
pub mod error;
pub mod model;
pub mod parser;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

pub use dialect::DbType;
pub use error::{DdlMetaError, ParseFailure};
pub use model::{ColumnMeta, TableMeta};
pub use parser::{parse_create_table, parse_multi_create_table, try_parse_create_table};

/// Options for extracting table metadata from a DDL script
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Path to the DDL script; stdin when `None`
    pub input_path: Option<PathBuf>,
    /// Dialect the script is written in
    pub db_type: DbType,
    /// Extract every CREATE TABLE statement instead of only the first statement
    pub multi: bool,
}

/// Extract table metadata from already-loaded DDL text
pub fn extract_tables_from_str(ddl: &str, options: &ExtractOptions) -> Vec<TableMeta> {
    if options.multi {
        parse_multi_create_table(ddl, options.db_type)
    } else {
        parse_create_table(ddl, options.db_type).into_iter().collect()
    }
}

/// Read a DDL script and extract its table metadata
pub fn extract_tables(options: &ExtractOptions) -> Result<Vec<TableMeta>> {
    let ddl = match &options.input_path {
        Some(path) => {
            debug!("Reading DDL file: {}", path.display());
            parser::read_ddl_file(path)?
        }
        None => {
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read DDL from stdin")?;
            parser::decode_ddl_bytes(bytes).context("DDL on stdin is neither UTF-8 nor GB18030")?
        }
    };

    Ok(extract_tables_from_str(&ddl, options))
}
