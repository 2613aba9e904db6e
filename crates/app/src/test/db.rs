//! Per-test PostgreSQL databases
//!
//! One PostgreSQL container is started for the whole test run. Every
//! [`TestDb`] creates its own database inside it, applies the migrations and
//! drops the database again once the handle goes away.

use once_cell::sync::Lazy;
use sqlx::{Connection, PgConnection, PgPool, query};
use testcontainers::{ContainerAsync, ImageExt, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres as PostgresImage;
use tokio::sync::{OnceCell, mpsc};
use uuid::Uuid;

const USER: &str = "matnight_test";
const PASSWORD: &str = "matnight_test_password";
const MAINTENANCE_DB: &str = "postgres";

static CONTAINER: Lazy<OnceCell<ContainerAsync<PostgresImage>>> = Lazy::new(OnceCell::new);

static DROP_QUEUE: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn start_container() -> ContainerAsync<PostgresImage> {
    PostgresImage::default()
        .with_user(USER)
        .with_password(PASSWORD)
        .with_db_name(USER)
        .with_env_var("POSTGRES_INITDB_ARGS", "--auth-host=trust")
        .start()
        .await
        .expect("Failed to start PostgreSQL container")
}

async fn server_url(database: &str) -> String {
    let container = CONTAINER.get_or_init(start_container).await;

    let port = container
        .get_host_port_ipv4(5432)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("postgresql://{USER}:{PASSWORD}@{host}:{port}/{database}")
}

/// Drop queued databases in the background; `Drop` cannot await.
async fn start_drop_queue() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(name) = receiver.recv().await {
            if let Err(error) = drop_database(&name).await {
                eprintln!("Failed to drop test database '{name}': {error}");
            }
        }
    });

    sender
}

async fn drop_database(name: &str) -> Result<(), sqlx::Error> {
    let mut conn = PgConnection::connect(&server_url(MAINTENANCE_DB).await).await?;

    query(&format!("DROP DATABASE IF EXISTS \"{name}\""))
        .execute(&mut conn)
        .await?;

    conn.close().await
}

/// An isolated, migrated database for one test.
#[derive(Debug)]
pub struct TestDb {
    pool: PgPool,
    name: String,
}

impl TestDb {
    /// Create and migrate a fresh database.
    pub async fn new() -> Self {
        DROP_QUEUE.get_or_init(start_drop_queue).await;

        let name = format!("matnight_test_{}", Uuid::now_v7().simple());

        let mut admin = PgConnection::connect(&server_url(MAINTENANCE_DB).await)
            .await
            .expect("Failed to connect to maintenance database");

        query(&format!("CREATE DATABASE \"{name}\""))
            .execute(&mut admin)
            .await
            .expect("Failed to create test database");

        admin
            .close()
            .await
            .expect("Failed to close maintenance connection");

        let pool = PgPool::connect(&server_url(&name).await)
            .await
            .expect("Failed to connect to test database");

        crate::database::migrate(&pool)
            .await
            .expect("Failed to run migrations on test database");

        Self { pool, name }
    }

    /// Connection pool for this database.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = DROP_QUEUE.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use sqlx::query_scalar;

    use super::*;

    #[tokio::test]
    async fn databases_are_migrated() {
        let db = TestDb::new().await;

        let tables: i64 = query_scalar(
            "SELECT COUNT(*) FROM information_schema.tables \
             WHERE table_schema = 'public' \
               AND table_name IN ('facilities', 'templates', 'guests', 'checkins')",
        )
        .fetch_one(db.pool())
        .await
        .expect("Failed to count tables");

        assert_eq!(tables, 4);
    }

    #[tokio::test]
    async fn databases_are_isolated() {
        let first = TestDb::new().await;
        let second = TestDb::new().await;

        query("INSERT INTO facilities (uuid, name) VALUES ($1, 'Only Here')")
            .bind(Uuid::now_v7())
            .execute(first.pool())
            .await
            .expect("Failed to insert facility");

        let visible: i64 = query_scalar("SELECT COUNT(*) FROM facilities")
            .fetch_one(second.pool())
            .await
            .expect("Failed to count facilities");

        assert_eq!(visible, 0);
    }
}
