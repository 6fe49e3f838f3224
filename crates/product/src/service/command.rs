use crate::{
    abstract_trait::product::{
        repository::DynProductCommandRepository, service::ProductCommandServiceTrait,
    },
    domain::{requests::ProductForm, response::ProductResponse},
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::Identity,
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct ProductCommandService {
    command: DynProductCommandRepository,
    metrics: Metrics,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_command_service");

        Self { command, metrics }
    }

    fn complete(&self, method: Method, start: Instant, is_success: bool, message: &str) {
        let status = if is_success {
            info!("✅ Operation completed successfully: {message}");
            Status::Success
        } else {
            error!("❌ Operation failed: {message}");
            Status::Error
        };

        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        identity: &Identity,
        form: &ProductForm,
    ) -> Result<ProductResponse, ServiceError> {
        info!("🏗️ Creating product | actor: {identity}");

        let start = Instant::now();

        let record = match form.validate_record() {
            Ok(record) => record,
            Err(errors) => {
                warn!("⚠️ Product form rejected: {} field(s) invalid", errors.len());
                self.complete(Method::Post, start, false, "validation failed");
                return Err(ServiceError::Validation(errors));
            }
        };

        let product = match self.command.create_product(&record).await {
            Ok(product) => product,
            Err(e) => {
                self.complete(
                    Method::Post,
                    start,
                    false,
                    &format!("failed to create product '{}': {e:?}", record.name()),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        self.complete(
            Method::Post,
            start,
            true,
            &format!("product '{}' created with ID {}", product.name, product.id),
        );

        Ok(ProductResponse::from(product))
    }

    async fn delete_product(&self, identity: &Identity, id: i32) -> Result<(), ServiceError> {
        info!("🗑️ Deleting product ID: {id} | actor: {identity}");

        let start = Instant::now();

        match self.command.delete_product(id).await {
            Ok(()) => {
                self.complete(
                    Method::Delete,
                    start,
                    true,
                    &format!("product {id} deleted"),
                );
                Ok(())
            }
            Err(RepositoryError::NotFound) => {
                self.complete(
                    Method::Delete,
                    start,
                    false,
                    &format!("product {id} not found"),
                );
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
            Err(e) => {
                self.complete(
                    Method::Delete,
                    start,
                    false,
                    &format!("failed to delete product {id}: {e:?}"),
                );
                Err(ServiceError::Repo(e))
            }
        }
    }
}
