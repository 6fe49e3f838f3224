use crate::{domain::requests::NewProduct, model::Product as ProductModel};
use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Arc;

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    /// Inserts the record; the store assigns the id.
    async fn create_product(&self, req: &NewProduct) -> Result<ProductModel, RepositoryError>;

    /// Fails with `RepositoryError::NotFound` when no row has this id.
    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError>;
}
