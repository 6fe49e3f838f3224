use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    /// `AlreadyExists` when the unique constraint on email rejects the write.
    async fn update_email(&self, id: i32, email: &str) -> Result<(), RepositoryError>;
    async fn update_password(&self, id: i32, password_hash: &str) -> Result<(), RepositoryError>;
}
