use sqlx::mysql::MySqlPool;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

use crate::error::{GeneratorError, Result};
use crate::types::ColumnMeta;

/// Read access to the tables of one database.
#[allow(async_fn_in_trait)]
pub trait SchemaCatalog {
    async fn list_tables(&self) -> Result<Vec<String>>;

    /// Columns in declaration order; the sql type keeps its length suffix and
    /// is lower-cased where the backend reports it upper-cased.
    async fn columns_of(&self, table_name: &str) -> Result<Vec<ColumnMeta>>;
}

fn into_columns(rows: Vec<(String, String)>) -> Vec<ColumnMeta> {
    rows.into_iter()
        .map(|(column_name, column_type)| ColumnMeta {
            column_name,
            column_type,
        })
        .collect()
}

pub struct SqliteCatalog {
    pool: SqlitePool,
}

impl SqliteCatalog {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl SchemaCatalog for SqliteCatalog {
    async fn list_tables(&self) -> Result<Vec<String>> {
        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master \
             WHERE type = 'table' AND name NOT LIKE 'sqlite\\_%' ESCAPE '\\' \
             ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tables.into_iter().map(|(name,)| name).collect())
    }

    async fn columns_of(&self, table_name: &str) -> Result<Vec<ColumnMeta>> {
        let rows: Vec<(String, String)> =
            sqlx::query_as("SELECT name, type FROM pragma_table_info(?) ORDER BY cid")
                .bind(table_name)
                .fetch_all(&self.pool)
                .await?;

        // sqlite upper-cases some declared types (`int` -> `INT`); type names
        // are case-insensitive there, the mapping table is lower-case
        let rows = rows
            .into_iter()
            .map(|(name, column_type)| (name, column_type.to_lowercase()))
            .collect();

        Ok(into_columns(rows))
    }
}

pub struct MySqlCatalog {
    pool: MySqlPool,
}

impl MySqlCatalog {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

// information_schema columns can come back with a binary collation, convert
// them so they decode as String.
impl SchemaCatalog for MySqlCatalog {
    async fn list_tables(&self) -> Result<Vec<String>> {
        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT CONVERT(TABLE_NAME USING utf8mb4) FROM information_schema.TABLES \
             WHERE TABLE_SCHEMA = DATABASE() \
             ORDER BY TABLE_NAME",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(tables.into_iter().map(|(name,)| name).collect())
    }

    async fn columns_of(&self, table_name: &str) -> Result<Vec<ColumnMeta>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT CONVERT(COLUMN_NAME USING utf8mb4), CONVERT(COLUMN_TYPE USING utf8mb4) \
             FROM information_schema.COLUMNS \
             WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ? \
             ORDER BY ORDINAL_POSITION",
        )
        .bind(table_name)
        .fetch_all(&self.pool)
        .await?;

        Ok(into_columns(rows))
    }
}

/// Catalog chosen from the scheme of a database url.
pub enum DatabaseCatalog {
    Sqlite(SqliteCatalog),
    MySql(MySqlCatalog),
}

impl DatabaseCatalog {
    pub async fn connect(url: &str) -> Result<Self> {
        if url.starts_with("sqlite:") {
            debug!("connecting to sqlite database");
            let pool = SqlitePool::connect(url).await?;
            Ok(DatabaseCatalog::Sqlite(SqliteCatalog::new(pool)))
        } else if url.starts_with("mysql:") || url.starts_with("mariadb:") {
            debug!("connecting to mysql database");
            let pool = MySqlPool::connect(url).await?;
            Ok(DatabaseCatalog::MySql(MySqlCatalog::new(pool)))
        } else {
            Err(GeneratorError::UnsupportedDatabase(url.to_string()))
        }
    }
}

impl SchemaCatalog for DatabaseCatalog {
    async fn list_tables(&self) -> Result<Vec<String>> {
        match self {
            DatabaseCatalog::Sqlite(catalog) => catalog.list_tables().await,
            DatabaseCatalog::MySql(catalog) => catalog.list_tables().await,
        }
    }

    async fn columns_of(&self, table_name: &str) -> Result<Vec<ColumnMeta>> {
        match self {
            DatabaseCatalog::Sqlite(catalog) => catalog.columns_of(table_name).await,
            DatabaseCatalog::MySql(catalog) => catalog.columns_of(table_name).await,
        }
    }
}
