//! DDL parsing and metadata extraction

mod column_parser;
mod ddl_parser;
mod identifier_utils;
mod location;
mod source;
mod statement_parser;

pub use column_parser::{extract_column, extract_partition_columns};
pub use ddl_parser::{
    build_table_meta, extract_table, parse_create_table, parse_multi_create_table,
    try_parse_create_table,
};
pub use identifier_utils::{strip_identifier_quoting, strip_literal_quoting};
pub use source::{decode_ddl_bytes, read_ddl_file};
pub use statement_parser::{classify_statement, StatementKind};
