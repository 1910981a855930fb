//! Database type tags and their mapping onto sqlparser dialects

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use sqlparser::dialect::{
    BigQueryDialect, ClickHouseDialect, DatabricksDialect, Dialect, DuckDbDialect,
    GenericDialect, HiveDialect, MsSqlDialect, MySqlDialect, PostgreSqlDialect,
    RedshiftSqlDialect, SQLiteDialect, SnowflakeDialect,
};

use crate::error::DdlMetaError;

/// The SQL dialect a DDL script is written in.
///
/// The tag is supplied by the caller and echoed into every `TableMeta` it produces;
/// it is never inferred from the DDL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DbType {
    Mysql,
    Mariadb,
    Oracle,
    Postgresql,
    Sqlserver,
    Hive,
    /// Alibaba ODPS / MaxCompute
    Odps,
    Clickhouse,
    Sqlite,
    Snowflake,
    Bigquery,
    Redshift,
    Duckdb,
    Databricks,
    Generic,
}

impl DbType {
    /// Every supported tag, in declaration order
    pub const ALL: [DbType; 15] = [
        DbType::Mysql,
        DbType::Mariadb,
        DbType::Oracle,
        DbType::Postgresql,
        DbType::Sqlserver,
        DbType::Hive,
        DbType::Odps,
        DbType::Clickhouse,
        DbType::Sqlite,
        DbType::Snowflake,
        DbType::Bigquery,
        DbType::Redshift,
        DbType::Duckdb,
        DbType::Databricks,
        DbType::Generic,
    ];

    /// Lowercase tag name, e.g. `"mysql"` or `"odps"`
    pub fn name(self) -> &'static str {
        match self {
            DbType::Mysql => "mysql",
            DbType::Mariadb => "mariadb",
            DbType::Oracle => "oracle",
            DbType::Postgresql => "postgresql",
            DbType::Sqlserver => "sqlserver",
            DbType::Hive => "hive",
            DbType::Odps => "odps",
            DbType::Clickhouse => "clickhouse",
            DbType::Sqlite => "sqlite",
            DbType::Snowflake => "snowflake",
            DbType::Bigquery => "bigquery",
            DbType::Redshift => "redshift",
            DbType::Duckdb => "duckdb",
            DbType::Databricks => "databricks",
            DbType::Generic => "generic",
        }
    }

    /// The sqlparser grammar used to parse DDL for this tag.
    ///
    /// sqlparser has no Oracle grammar, so Oracle DDL goes through `GenericDialect`.
    /// ODPS DDL is Hive-shaped and goes through `HiveDialect`.
    pub fn sql_dialect(self) -> Box<dyn Dialect + Send + Sync> {
        match self {
            DbType::Mysql | DbType::Mariadb => Box::new(MySqlDialect {}),
            DbType::Postgresql => Box::new(PostgreSqlDialect {}),
            DbType::Sqlserver => Box::new(MsSqlDialect {}),
            DbType::Hive | DbType::Odps => Box::new(HiveDialect {}),
            DbType::Clickhouse => Box::new(ClickHouseDialect {}),
            DbType::Sqlite => Box::new(SQLiteDialect {}),
            DbType::Snowflake => Box::new(SnowflakeDialect {}),
            DbType::Bigquery => Box::new(BigQueryDialect {}),
            DbType::Redshift => Box::new(RedshiftSqlDialect {}),
            DbType::Duckdb => Box::new(DuckDbDialect {}),
            DbType::Databricks => Box::new(DatabricksDialect {}),
            DbType::Oracle | DbType::Generic => Box::new(GenericDialect {}),
        }
    }

    /// Whether the grammar declares partition columns natively (`PARTITIONED BY (col type, ...)`).
    ///
    /// Dialects that partition through other clauses (MySQL `PARTITION BY RANGE`,
    /// BigQuery `PARTITION BY expr`) report `false`.
    pub fn supports_partition_columns(self) -> bool {
        matches!(self, DbType::Hive | DbType::Odps | DbType::Databricks)
    }
}

impl fmt::Display for DbType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DbType {
    type Err = DdlMetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        let db_type = match lowered.as_str() {
            "postgres" | "pg" => DbType::Postgresql,
            "mssql" | "tsql" => DbType::Sqlserver,
            "maxcompute" => DbType::Odps,
            other => DbType::ALL
                .into_iter()
                .find(|t| t.name() == other)
                .ok_or_else(|| DdlMetaError::UnknownDbType {
                    name: s.to_string(),
                })?,
        };
        Ok(db_type)
    }
}
