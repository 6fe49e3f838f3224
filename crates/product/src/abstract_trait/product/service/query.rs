use crate::domain::response::ProductResponse;
use async_trait::async_trait;
use shared::{domain::Identity, errors::ServiceError};
use std::sync::Arc;

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self, identity: &Identity) -> Result<Vec<ProductResponse>, ServiceError>;
}
