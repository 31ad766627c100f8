use crate::config::database_conf::DatabaseConfig;
use crate::model::contact_submission::{ContactSubmission, NewContactSubmission};
use crate::repository::repository_error::{RepositoryError, RepositoryResult};
use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{error, info};

const CREATE_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS contact_submissions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    vehicle TEXT,
    service_interest TEXT,
    message TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert one submission and return its row id.
    async fn create(&self, submission: &NewContactSubmission) -> RepositoryResult<i64>;
    async fn get_by_id(&self, id: i64) -> RepositoryResult<ContactSubmission>;
    async fn count(&self) -> RepositoryResult<u64>;
}

pub struct SqliteContactRepository {
    pool: SqlitePool,
}

impl SqliteContactRepository {
    /// Open a pool using DatabaseConfig and make sure the table exists
    pub async fn new(config: &DatabaseConfig) -> RepositoryResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)
            .map_err(|e| RepositoryError::connection(format!("Invalid database URL: {}", e)))?;

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_secs))
            .connect_with(options)
            .await
            .map_err(|e| {
                error!("Failed to connect to database: {}", e);
                RepositoryError::connection(format!("Failed to connect to database: {}", e))
            })?;

        let repo = SqliteContactRepository { pool };
        repo.migrate().await?;
        Ok(repo)
    }

    /// Wrap an existing pool without running the migration.
    pub fn from_pool(pool: SqlitePool) -> Self {
        SqliteContactRepository { pool }
    }

    pub async fn migrate(&self) -> RepositoryResult<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        info!("contact_submissions table ready");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ContactRepository for SqliteContactRepository {
    #[tracing::instrument(skip(self, submission), fields(email = %submission.email))]
    async fn create(&self, submission: &NewContactSubmission) -> RepositoryResult<i64> {
        info!("Storing contact submission");
        let result = sqlx::query(
            "INSERT INTO contact_submissions (name, email, phone, vehicle, service_interest, message) \
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&submission.name)
        .bind(&submission.email)
        .bind(&submission.phone)
        .bind(&submission.vehicle)
        .bind(&submission.service)
        .bind(&submission.message)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => {
                let id = done.last_insert_rowid();
                info!(id, "Contact submission stored");
                Ok(id)
            }
            Err(e) => {
                error!("Failed to store contact submission: {}", e);
                Err(RepositoryError::database(format!("Failed to store contact submission: {}", e)))
            }
        }
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> RepositoryResult<ContactSubmission> {
        let row = sqlx::query_as::<_, ContactSubmission>(
            "SELECT id, name, email, phone, vehicle, service_interest, message, created_at \
             FROM contact_submissions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| RepositoryError::not_found(format!("Contact submission not found for ID: {}", id)))
    }

    #[tracing::instrument(skip(self))]
    async fn count(&self) -> RepositoryResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteContactRepository {
        SqliteContactRepository::new(&DatabaseConfig::from_test_env())
            .await
            .expect("in-memory repository")
    }

    fn submission() -> NewContactSubmission {
        NewContactSubmission {
            name: "Ali".to_string(),
            email: "ali@example.com".to_string(),
            phone: None,
            vehicle: Some("Nissan Patrol".to_string()),
            service: None,
            message: "Hi".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_read_back() {
        let repo = repo().await;
        let id = repo.create(&submission()).await.unwrap();

        let row = repo.get_by_id(id).await.unwrap();
        assert_eq!(row.name, "Ali");
        assert_eq!(row.phone, None);
        assert_eq!(row.vehicle.as_deref(), Some("Nissan Patrol"));
        assert_eq!(row.service, None);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_missing_row() {
        let repo = repo().await;
        let err = repo.get_by_id(42).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_insert_into_closed_pool_fails() {
        let repo = repo().await;
        repo.pool().close().await;
        let err = repo.create(&submission()).await.unwrap_err();
        assert!(matches!(err, RepositoryError::DatabaseError(_)));
    }
}
