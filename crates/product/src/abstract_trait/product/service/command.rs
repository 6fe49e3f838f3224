use crate::domain::{requests::ProductForm, response::ProductResponse};
use async_trait::async_trait;
use shared::{domain::Identity, errors::ServiceError};
use std::sync::Arc;

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        identity: &Identity,
        form: &ProductForm,
    ) -> Result<ProductResponse, ServiceError>;
    async fn delete_product(&self, identity: &Identity, id: i32) -> Result<(), ServiceError>;
}
