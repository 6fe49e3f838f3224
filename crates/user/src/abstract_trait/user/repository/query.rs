use crate::model::User as UserModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<UserModel>, RepositoryError>;

    /// Whether a user other than `exclude_id` already owns `email`.
    async fn email_taken(&self, email: &str, exclude_id: i32) -> Result<bool, RepositoryError>;
}
