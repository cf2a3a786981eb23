//! Database access layer
//!
//! Owns the connection pool and executes every SQL statement in the
//! application. Each call checks a client out of the pool, runs one
//! statement, and the client returns to the pool when it drops; release
//! happens on every exit path, success or failure.

pub mod queries;

use crate::config::DatabaseConfig;
use crate::error::AppError;
use deadpool_postgres::{Config, ManagerConfig, Pool, PoolConfig, RecyclingMethod, Runtime};
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};
use tracing::{debug, info};

/// Pooled database handle shared by all request handlers.
///
/// Constructed once per process and injected through application state;
/// two server processes each own an independent instance.
pub struct Database {
    pool: Pool,
}

impl Database {
    /// Create the connection pool and verify it with a probe query.
    ///
    /// A failure here is a startup error: callers are expected to log it
    /// and exit rather than serve requests that can only fail.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, AppError> {
        let pool = Self::create_pool(config)?;

        let client = pool.get().await?;
        client.query_one("SELECT 1", &[]).await?;
        drop(client);

        info!(
            database = %config.database,
            host = %config.host,
            max_pool_size = config.max_pool_size,
            tls = config.require_tls,
            "Connection pool established"
        );

        Ok(Self { pool })
    }

    /// Create a connection pool with the given configuration
    fn create_pool(config: &DatabaseConfig) -> Result<Pool, AppError> {
        let mut cfg = Config::new();
        cfg.host = Some(config.host.clone());
        cfg.port = Some(config.port);
        cfg.user = Some(config.user.clone());
        cfg.password = Some(config.password.clone());
        cfg.dbname = Some(config.database.clone());
        cfg.pool = Some(PoolConfig::new(config.max_pool_size));
        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });

        if config.require_tls {
            let certs = rustls_native_certs::load_native_certs();
            let mut root_store = rustls::RootCertStore::empty();
            for cert in certs.certs {
                root_store.add(cert).ok();
            }

            let tls_config = rustls::ClientConfig::builder()
                .with_root_certificates(root_store)
                .with_no_client_auth();

            let tls = tokio_postgres_rustls::MakeRustlsConnect::new(tls_config);
            cfg.create_pool(Some(Runtime::Tokio1), tls)
                .map_err(|e| AppError::Config(format!("Failed to create TLS pool: {}", e)))
        } else {
            cfg.create_pool(Some(Runtime::Tokio1), NoTls)
                .map_err(|e| AppError::Config(format!("Failed to create pool: {}", e)))
        }
    }

    /// Run a read query and return all rows.
    ///
    /// Values bind through `$n` placeholders; nothing is interpolated into
    /// the SQL text.
    pub async fn query(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Vec<Row>, AppError> {
        let client = self.pool.get().await?;
        let rows = client.query(sql, params).await?;
        Ok(rows)
    }

    /// Run a query expected to return exactly one row
    pub async fn query_one(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Row, AppError> {
        let client = self.pool.get().await?;
        let row = client.query_one(sql, params).await?;
        Ok(row)
    }

    /// Run a query returning zero or one row
    pub async fn query_opt(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<Option<Row>, AppError> {
        let client = self.pool.get().await?;
        let row = client.query_opt(sql, params).await?;
        Ok(row)
    }

    /// Run a mutating statement (INSERT/UPDATE) and return the row count.
    ///
    /// Statements run outside any transaction block, so each one commits
    /// immediately and independently on success.
    pub async fn execute(
        &self,
        sql: &str,
        params: &[&(dyn ToSql + Sync)],
    ) -> Result<u64, AppError> {
        let client = self.pool.get().await?;
        let affected = client.execute(sql, params).await?;
        Ok(affected)
    }

    /// Close the pool, dropping all idle connections.
    ///
    /// Called after the HTTP server has drained; later acquires fail fast.
    pub fn close(&self) {
        self.pool.close();
        debug!("Connection pool closed");
    }

    /// Create tables, indexes, and seed rows if they don't exist
    pub async fn ensure_schema(&self) -> Result<(), AppError> {
        let client = self.pool.get().await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS villages (
                    village_id SERIAL PRIMARY KEY,
                    village_name VARCHAR(255) NOT NULL,
                    village_code VARCHAR(50) NOT NULL,
                    population INTEGER,
                    total_families INTEGER,
                    status VARCHAR(50) NOT NULL DEFAULT 'ACTIVE',
                    created_date TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS villagers (
                    villager_id SERIAL PRIMARY KEY,
                    village_id INTEGER REFERENCES villages(village_id),
                    villager_name VARCHAR(255) NOT NULL
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS resources (
                    resource_id SERIAL PRIMARY KEY,
                    village_id INTEGER NOT NULL REFERENCES villages(village_id),
                    resource_type VARCHAR(100) NOT NULL,
                    resource_name VARCHAR(255) NOT NULL,
                    total_count INTEGER,
                    coverage_percentage DOUBLE PRECISION,
                    quality_status VARCHAR(50)
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS complaints (
                    complaint_id SERIAL PRIMARY KEY,
                    villager_id INTEGER REFERENCES villagers(villager_id),
                    village_id INTEGER NOT NULL REFERENCES villages(village_id),
                    complaint_type VARCHAR(100) NOT NULL,
                    complaint_title VARCHAR(255) NOT NULL,
                    complaint_description TEXT,
                    location VARCHAR(255),
                    priority_level VARCHAR(20),
                    status VARCHAR(20) NOT NULL DEFAULT 'PENDING',
                    filed_date TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS development_projects (
                    project_id SERIAL PRIMARY KEY,
                    village_id INTEGER NOT NULL REFERENCES villages(village_id),
                    project_name VARCHAR(255) NOT NULL,
                    budget_allocated DOUBLE PRECISION,
                    budget_spent DOUBLE PRECISION,
                    completion_percentage DOUBLE PRECISION,
                    project_status VARCHAR(30)
                )",
                &[],
            )
            .await?;

        client
            .execute(
                "CREATE TABLE IF NOT EXISTS work_reviews (
                    review_id SERIAL PRIMARY KEY,
                    project_id INTEGER NOT NULL REFERENCES development_projects(project_id),
                    villager_id INTEGER REFERENCES villagers(villager_id),
                    quality_rating INTEGER,
                    review_comments TEXT,
                    review_date TIMESTAMPTZ NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
                &[],
            )
            .await?;

        // Default filer for complaints and reviews submitted anonymously
        let _ = client
            .execute(
                "INSERT INTO villagers (villager_id, villager_name)
                 VALUES (1, 'Anonymous Villager')
                 ON CONFLICT (villager_id) DO NOTHING",
                &[],
            )
            .await;

        // Indexes for the common lookup paths
        let _ = client
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_resources_village_id ON resources(village_id)",
                &[],
            )
            .await;
        let _ = client
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_complaints_village_id ON complaints(village_id)",
                &[],
            )
            .await;
        let _ = client
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_projects_village_id ON development_projects(village_id)",
                &[],
            )
            .await;
        let _ = client
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_reviews_project_id ON work_reviews(project_id)",
                &[],
            )
            .await;

        info!("Database schema initialized");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_pool_respects_max_size() {
        let config = DatabaseConfig {
            max_pool_size: 4,
            ..DatabaseConfig::default()
        };
        let pool = Database::create_pool(&config).unwrap();
        assert_eq!(pool.status().max_size, 4);
    }

    #[test]
    fn test_connect_fails_fast_when_store_unreachable() {
        // Nothing listens on port 1; the startup probe must surface the
        // failure instead of serving doomed requests
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..DatabaseConfig::default()
        };
        let result = tokio_test::block_on(Database::connect(&config));
        assert!(result.is_err());
    }
}
