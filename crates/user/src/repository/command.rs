use crate::abstract_trait::user::repository::UserCommandRepositoryTrait;
use async_trait::async_trait;
use shared::{config::ConnectionPool, errors::RepositoryError};
use tracing::{error, info};

#[derive(Clone)]
pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn update_email(&self, id: i32, email: &str) -> Result<(), RepositoryError> {
        info!("✏️ Updating email of user {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("UPDATE users SET email = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $1")
            .bind(id)
            .bind(email)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to update email of user {}: {:?}", id, e);
                RepositoryError::from_write(e, "email")
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn update_password(&self, id: i32, password_hash: &str) -> Result<(), RepositoryError> {
        info!("🔑 Updating password of user {}", id);

        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query(
            "UPDATE users SET password_hash = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update password of user {}: {:?}", id, e);
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
