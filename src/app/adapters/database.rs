//! Target database collaborator
//!
//! Deploy replaces a country's partition of `location.location`: the
//! partition is dropped, recreated and filled from the exported insert
//! statements. Every call opens its own connection and closes it before
//! returning, whether or not the work succeeded.

use crate::app::services::progress::progress_bar;
use crate::app::services::sql_export::{ExportSettings, create_partition_sql, drop_partition_sql};
use crate::config::DatabaseConfig;
use crate::{Error, Result};
use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use sqlx::postgres::{PgConnectOptions, PgConnection, PgSslMode};
use sqlx::{ConnectOptions, Connection, Executor};
use tracing::{debug, info, warn};

/// Everything needed to load one country into its partition
#[derive(Debug, Clone, PartialEq)]
pub struct DeployPlan {
    /// Country key the statements were exported for
    pub key: String,
    /// Partition list value
    pub country_code: String,
    pub partition_name: String,
    pub statements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployStats {
    pub statements_executed: usize,
}

/// Persistent store receiving exported entries
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Recreate the plan's partition and execute its statements
    async fn deploy(&self, plan: &DeployPlan) -> Result<DeployStats>;

    /// Drop a partition if it exists
    async fn drop_partition(&self, partition_name: &str) -> Result<()>;
}

/// PostgreSQL store using one short-lived connection per call
#[derive(Debug, Clone)]
pub struct PostgresStore {
    options: PgConnectOptions,
    settings: ExportSettings,
    show_progress: bool,
}

/// Connection options for the configured database
pub fn connect_options(config: &DatabaseConfig) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(&config.database)
        .ssl_mode(if config.ssl {
            PgSslMode::Require
        } else {
            PgSslMode::Prefer
        });

    match &config.password {
        Some(password) => options.password(password),
        None => options,
    }
}

impl PostgresStore {
    pub fn new(config: &DatabaseConfig, settings: ExportSettings) -> Self {
        Self {
            options: connect_options(config),
            settings,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    async fn connect(&self) -> Result<PgConnection> {
        self.options
            .connect()
            .await
            .map_err(|e| Error::database("Failed to connect to the location database", e))
    }

    async fn close(connection: PgConnection) {
        if let Err(e) = connection.close().await {
            warn!("Failed to close database connection: {}", e);
        }
    }

    /// Run one statement text on the simple query protocol
    fn execute<'a>(connection: &'a mut PgConnection, sql: &'a str) -> BoxFuture<'a, Result<()>> {
        async move {
            connection.execute(sql).await.map_err(|e| {
                let preview: String = sql.chars().take(120).collect();
                Error::database(format!("Statement failed: {}", preview), e)
            })?;
            Ok(())
        }
        .boxed()
    }

    async fn run_plan(
        &self,
        connection: &mut PgConnection,
        plan: &DeployPlan,
    ) -> Result<DeployStats> {
        let mut transaction = connection
            .begin()
            .await
            .map_err(|e| Error::database("Failed to start deploy transaction", e))?;

        let drop_sql = drop_partition_sql(&self.settings, &plan.partition_name);
        let create_sql =
            create_partition_sql(&self.settings, &plan.partition_name, &plan.country_code);
        Self::execute(&mut *transaction, &drop_sql).await?;
        Self::execute(&mut *transaction, &create_sql).await?;
        debug!("{}: recreated partition {}", plan.key, plan.partition_name);

        let progress = progress_bar(plan.statements.len() as u64, "statements", self.show_progress);
        for statement in &plan.statements {
            Self::execute(&mut *transaction, statement).await?;
            progress.inc(1);
        }
        progress.finish_and_clear();

        transaction
            .commit()
            .await
            .map_err(|e| Error::database("Failed to commit deploy transaction", e))?;

        Ok(DeployStats {
            statements_executed: plan.statements.len(),
        })
    }
}

#[async_trait]
impl RecordStore for PostgresStore {
    async fn deploy(&self, plan: &DeployPlan) -> Result<DeployStats> {
        let mut connection = self.connect().await?;
        let result = self.run_plan(&mut connection, plan).await;
        Self::close(connection).await;

        if let Ok(stats) = &result {
            info!(
                "{}: deployed {} statements into {}",
                plan.key, stats.statements_executed, plan.partition_name
            );
        }
        result
    }

    async fn drop_partition(&self, partition_name: &str) -> Result<()> {
        let sql = drop_partition_sql(&self.settings, partition_name);
        let mut connection = self.connect().await?;
        let result = Self::execute(&mut connection, &sql).await;
        Self::close(connection).await;

        if result.is_ok() {
            info!("Dropped partition {}", partition_name);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_connect_options() {
        let config = DatabaseConfig {
            host: "db.internal".to_string(),
            port: 6543,
            user: "loader".to_string(),
            password: Some("secret".to_string()),
            database: "geo".to_string(),
            ssl: true,
        };
        let options = connect_options(&config);

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "loader");
        assert_eq!(options.get_database(), Some("geo"));
    }

    #[allow(dead_code)]
    fn assert_send<T: Send>(_: &T) {}

    /// Fails to compile if the deploy future stops being `Send`
    #[allow(dead_code)]
    fn deploy_futures_are_send(
        store: &PostgresStore,
        connection: &mut PgConnection,
        plan: &DeployPlan,
    ) {
        assert_send(&store.run_plan(connection, plan));
    }

    #[tokio::test]
    async fn test_deploy_runs_on_a_spawned_task() {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..Default::default()
        };
        let store = Arc::new(PostgresStore::new(&config, ExportSettings::default()));
        let plan = DeployPlan {
            key: "AT".to_string(),
            country_code: "AT".to_string(),
            partition_name: "location_partition_austria_a".to_string(),
            statements: vec!["SELECT 1".to_string()],
        };

        let result = tokio::spawn(async move { store.deploy(&plan).await })
            .await
            .unwrap();
        assert!(matches!(result, Err(Error::Database { .. })));
    }

    #[tokio::test]
    async fn test_deploy_reports_connection_failure() {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..Default::default()
        };
        let store = PostgresStore::new(&config, ExportSettings::default());

        let result = store.drop_partition("location_partition_austria_a").await;
        assert!(matches!(result, Err(Error::Database { .. })));
    }
}
