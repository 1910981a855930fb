//! File-based extraction tests

use std::path::PathBuf;

use ddl_meta::{extract_tables, extract_tables_from_str, DbType, DdlMetaError, ExtractOptions};
use encoding_rs::GB18030;
use pretty_assertions::assert_eq;

use crate::common::{create_sql_file, file_options};

const SCHEMA_SCRIPT: &str = "\
-- order schema
CREATE TABLE `t_order` (
  `id` bigint(20) NOT NULL AUTO_INCREMENT COMMENT '主键',
  `order_no` varchar(64) DEFAULT NULL COMMENT '订单号',
  `amount` decimal(10,2) DEFAULT '0.00',
  PRIMARY KEY (`id`)
) ENGINE=InnoDB DEFAULT CHARSET=utf8mb4 COMMENT='订单主表';

DROP TABLE IF EXISTS `t_tmp`;

CREATE TABLE `t_order_item` (
  `id` bigint(20) NOT NULL COMMENT '主键',
  `order_id` bigint(20) NOT NULL COMMENT '订单ID'
);
";

#[test]
fn test_extract_multi_from_file() {
    let file = create_sql_file(SCHEMA_SCRIPT.as_bytes());

    let tables = extract_tables(&file_options(file.path(), DbType::Mysql, true)).unwrap();

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].table_name, "t_order");
    assert_eq!(tables[0].columns.len(), 3);
    assert_eq!(tables[0].columns[1].comment.as_deref(), Some("订单号"));
    assert_eq!(tables[1].table_name, "t_order_item");
    assert_eq!(tables[1].columns[1].comment.as_deref(), Some("订单ID"));
}

#[test]
fn test_extract_single_uses_first_statement_only() {
    let file = create_sql_file(SCHEMA_SCRIPT.as_bytes());

    let tables = extract_tables(&file_options(file.path(), DbType::Mysql, false)).unwrap();

    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].table_name, "t_order");
}

#[test]
fn test_extract_from_file_with_bom() {
    let mut content = vec![0xEF, 0xBB, 0xBF];
    content.extend_from_slice(b"CREATE TABLE t (id INT);");
    let file = create_sql_file(&content);

    let tables = extract_tables(&file_options(file.path(), DbType::Mysql, false)).unwrap();

    assert_eq!(tables[0].table_name, "t");
}

#[test]
fn test_extract_from_gb18030_file() {
    let (encoded, _, _) =
        GB18030.encode("CREATE TABLE user_info (name STRING COMMENT '用户名') PARTITIONED BY (dt STRING);");
    let file = create_sql_file(&encoded);

    let tables = extract_tables(&file_options(file.path(), DbType::Hive, false)).unwrap();

    assert_eq!(tables[0].columns[0].comment.as_deref(), Some("用户名"));
    assert_eq!(tables[0].partition_columns[0].name, "dt");
}

#[test]
fn test_missing_file_is_an_error() {
    let options = ExtractOptions {
        input_path: Some(PathBuf::from("/nonexistent/schema.sql")),
        db_type: DbType::Mysql,
        multi: true,
    };

    let err = extract_tables(&options).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DdlMetaError>(),
        Some(DdlMetaError::FileReadError { .. })
    ));
}

#[test]
fn test_unparseable_file_yields_no_tables() {
    let file = create_sql_file(b"DROP TABLE t;");

    let tables = extract_tables(&file_options(file.path(), DbType::Mysql, false)).unwrap();

    assert!(tables.is_empty());
}

#[test]
fn test_extract_from_str_respects_multi_flag() {
    let script = "CREATE TABLE a (id INT); CREATE TABLE b (id INT);";
    let mut options = ExtractOptions {
        input_path: None,
        db_type: DbType::Postgresql,
        multi: false,
    };
    assert_eq!(extract_tables_from_str(script, &options).len(), 1);

    options.multi = true;
    assert_eq!(extract_tables_from_str(script, &options).len(), 2);
}
