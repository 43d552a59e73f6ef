//! PostgreSQL connector implementation

use async_trait::async_trait;
use lawcases_core::{CaseQuery, LawCasesError, PoolConfig};
use lawcases_types::CaseRecord;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{Postgres, QueryBuilder};

use super::traits::{Connector, Page};

/// PostgreSQL database connector
///
/// Rows are returned through `to_jsonb`, so every column type the server
/// can render as JSON passes through unchanged.
pub struct PostgresConnector {
    pool: PgPool,
}

impl PostgresConnector {
    /// Create a new PostgreSQL connector
    ///
    /// The pool connects lazily, on the first query.
    pub fn new(url: &str, config: &PoolConfig) -> Result<Self, LawCasesError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections())
            .min_connections(config.min_connections())
            .acquire_timeout(config.acquire_timeout())
            .idle_timeout(config.idle_timeout())
            .connect_lazy(url)
            .map_err(|e| LawCasesError::Database(format!("Invalid PostgreSQL url: {}", e)))?;

        Ok(Self { pool })
    }

    /// `SELECT` for one page of rows
    pub(crate) fn select_statement(query: &CaseQuery) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT to_jsonb(t) FROM ");
        builder.push(quote_ident(&query.table)).push(" AS t");
        Self::push_filter(&mut builder, query);

        let direction = if query.order.descending { "DESC" } else { "ASC" };
        builder
            .push(" ORDER BY t.")
            .push(quote_ident(&query.order.column))
            .push(" ")
            .push(direction);

        builder
            .push(" LIMIT ")
            .push_bind(to_i64(query.range.limit()))
            .push(" OFFSET ")
            .push_bind(to_i64(query.range.from));
        builder
    }

    /// `SELECT count(*)` over the same filter
    pub(crate) fn count_statement(query: &CaseQuery) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new("SELECT count(*) FROM ");
        builder.push(quote_ident(&query.table)).push(" AS t");
        Self::push_filter(&mut builder, query);
        builder
    }

    fn push_filter(builder: &mut QueryBuilder<'static, Postgres>, query: &CaseQuery) {
        if let Some(filter) = &query.filter {
            builder
                .push(" WHERE t.")
                .push(quote_ident(&filter.column))
                .push(" = ")
                .push_bind(filter.value.clone());
        }
    }
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn to_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn map_sqlx_error(err: sqlx::Error) -> LawCasesError {
    match err {
        sqlx::Error::Database(db) => LawCasesError::DataAccess(db.message().to_string()),
        other => LawCasesError::Database(format!("PostgreSQL query failed: {}", other)),
    }
}

#[async_trait]
impl Connector for PostgresConnector {
    async fn fetch_page(&self, query: &CaseQuery) -> Result<Page, LawCasesError> {
        let values = Self::select_statement(query)
            .build_query_scalar::<serde_json::Value>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let total = Self::count_statement(query)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let rows: Vec<CaseRecord> = values
            .into_iter()
            .filter_map(|value| match value {
                serde_json::Value::Object(row) => Some(row),
                _ => None,
            })
            .collect();

        Ok(Page {
            rows,
            total: u64::try_from(total).ok(),
        })
    }

    async fn health_check(&self, table: &str) -> Result<(), LawCasesError> {
        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new("SELECT 1 FROM ");
        builder.push(quote_ident(table)).push(" LIMIT 1");
        builder
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn close(&self) -> Result<(), LawCasesError> {
        self.pool.close().await;
        Ok(())
    }

    fn connector_type(&self) -> &'static str {
        "postgres"
    }
}
