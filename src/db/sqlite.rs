use crate::db::models::EntityKind;
use crate::db::schema::{MIGRATIONS, SCHEMA_VERSION_DDL, statements, table_ddl};
use crate::error::FolioError;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::query::Query;
use sqlx::sqlite::{SqliteArguments, SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;
pub type SqliteQuery<'q> = Query<'q, Sqlite, SqliteArguments<'q>>;

/// A row type stored in one content table.
pub trait Record: Sized + Send + Sync + Unpin + 'static {
    /// Editable fields, as submitted on create and update.
    type Draft: Send + Sync + 'static;

    const KIND: EntityKind;

    /// Editable columns, in the order `bind_draft` binds them.
    const COLUMNS: &'static [&'static str];

    fn bind_draft<'q>(
        draft: &Self::Draft,
        query: SqliteQuery<'q>,
    ) -> Result<SqliteQuery<'q>, FolioError>;

    fn from_row(row: &SqliteRow) -> Result<Self, FolioError>;
}

/// Open (creating if missing) the SQLite database at `database_url`.
pub async fn connect(database_url: &str) -> Result<SqlitePool, FolioError> {
    let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
    Ok(pool)
}

#[derive(Clone)]
pub struct ContentStore {
    pool: SqlitePool,
}

impl ContentStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply pending schema migrations. Returns the resulting schema version.
    pub async fn init_schema(&self) -> Result<i64, FolioError> {
        sqlx::query(SCHEMA_VERSION_DDL).execute(&self.pool).await?;
        let (current,): (i64,) =
            sqlx::query_as("SELECT COALESCE(MAX(version), 0) FROM schema_version")
                .fetch_one(&self.pool)
                .await?;

        let mut version = current;
        for migration in MIGRATIONS.iter().filter(|m| m.version > current) {
            let mut tx = self.pool.begin().await?;
            for script in migration.scripts {
                for stmt in statements(script) {
                    sqlx::query(stmt).execute(&mut *tx).await?;
                }
            }
            sqlx::query("INSERT INTO schema_version (version, applied_at) VALUES (?, ?)")
                .bind(migration.version)
                .bind(timestamp_now())
                .execute(&mut *tx)
                .await?;
            tx.commit().await?;

            info!(version = migration.version, "applied schema migration");
            version = migration.version;
        }
        Ok(version)
    }

    /// Recreate one table (and its index) if it has gone missing.
    pub async fn ensure_table(&self, kind: EntityKind) -> Result<(), FolioError> {
        for stmt in statements(table_ddl(kind)) {
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// All rows, newest first.
    pub async fn list<R: Record>(&self) -> Result<Vec<R>, FolioError> {
        let sql = format!(
            "SELECT * FROM {} ORDER BY created_at DESC, id DESC",
            R::KIND.table()
        );
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        rows.iter().map(R::from_row).collect()
    }

    pub async fn get<R: Record>(&self, id: i64) -> Result<Option<R>, FolioError> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", R::KIND.table());
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(R::from_row).transpose()
    }

    /// Insert one row; the store assigns `id` and `created_at`.
    pub async fn insert<R: Record>(&self, draft: &R::Draft) -> Result<R, FolioError> {
        let placeholders = vec!["?"; R::COLUMNS.len() + 1].join(", ");
        let sql = format!(
            "INSERT INTO {} ({}, created_at) VALUES ({}) RETURNING *",
            R::KIND.table(),
            R::COLUMNS.join(", "),
            placeholders
        );
        let row = R::bind_draft(draft, sqlx::query(&sql))?
            .bind(timestamp_now())
            .fetch_one(&self.pool)
            .await?;
        R::from_row(&row)
    }

    /// Replace every editable field of row `id`. `None` if no such row.
    pub async fn update<R: Record>(
        &self,
        id: i64,
        draft: &R::Draft,
    ) -> Result<Option<R>, FolioError> {
        let assignments = R::COLUMNS
            .iter()
            .map(|col| format!("{col} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ? RETURNING *",
            R::KIND.table(),
            assignments
        );
        let row = R::bind_draft(draft, sqlx::query(&sql))?
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(R::from_row).transpose()
    }

    /// Hard delete. Returns whether a row was removed.
    pub async fn delete<R: Record>(&self, id: i64) -> Result<bool, FolioError> {
        let sql = format!("DELETE FROM {} WHERE id = ?", R::KIND.table());
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn mark_message_read(&self, id: i64) -> Result<bool, FolioError> {
        let result = sqlx::query("UPDATE contact_messages SET read = 1 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub(crate) fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn encode_list(items: &[String]) -> Result<String, FolioError> {
    Ok(serde_json::to_string(items)?)
}

pub(crate) fn decode_list(row: &SqliteRow, column: &str) -> Result<Vec<String>, FolioError> {
    let raw: String = row.try_get(column)?;
    serde_json::from_str(&raw).map_err(|e| sqlx::Error::Decode(Box::new(e)).into())
}

pub(crate) fn decode_timestamp(row: &SqliteRow, column: &str) -> Result<DateTime<Utc>, FolioError> {
    let raw: String = row.try_get(column)?;
    let parsed = DateTime::parse_from_rfc3339(&raw).map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
    Ok(parsed.with_timezone(&Utc))
}
