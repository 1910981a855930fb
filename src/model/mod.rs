//! Normalized table model

mod column_meta;
mod table_meta;

pub use column_meta::ColumnMeta;
pub use table_meta::TableMeta;
