use sea_orm::{DatabaseConnection, SqlxPostgresConnector};
use sqlx::postgres::PgPoolOptions;

use crate::domain::common::DatabaseConfig;

#[derive(Clone)]
pub struct Postgres {
    db: DatabaseConnection,
}

impl Postgres {
    /// Connect and bring the schema up to date.
    pub async fn new(config: &DatabaseConfig) -> Result<Self, anyhow::Error> {
        tracing::info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            "Connecting to Postgres"
        );

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(&config.url())
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self {
            db: SqlxPostgresConnector::from_sqlx_postgres_pool(pool),
        })
    }

    pub fn get_db(&self) -> DatabaseConnection {
        self.db.clone()
    }
}
