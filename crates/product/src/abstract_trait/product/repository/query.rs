use crate::model::Product as ProductModel;
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    /// All products ordered by name (byte-wise, case-sensitive), then id.
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
}
