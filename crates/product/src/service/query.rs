use crate::{
    abstract_trait::product::{
        repository::DynProductQueryRepository, service::ProductQueryServiceTrait,
    },
    domain::response::ProductResponse,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    domain::Identity,
    errors::ServiceError,
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{error, info};

#[derive(Clone)]
pub struct ProductQueryService {
    query: DynProductQueryRepository,
    metrics: Metrics,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository, registry: &mut Registry) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "product_query_service");

        Self { query, metrics }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self, identity: &Identity) -> Result<Vec<ProductResponse>, ServiceError> {
        info!("🔍 Listing products | actor: {identity}");

        let start = Instant::now();

        let products = match self.query.find_all().await {
            Ok(products) => products,
            Err(e) => {
                error!("❌ Failed to fetch products: {e:?}");
                self.metrics.record(
                    Method::Get,
                    Status::Error,
                    start.elapsed().as_secs_f64(),
                );
                return Err(ServiceError::Repo(e));
            }
        };

        let data: Vec<ProductResponse> = products.into_iter().map(ProductResponse::from).collect();

        info!("✅ Found {} products", data.len());
        self.metrics
            .record(Method::Get, Status::Success, start.elapsed().as_secs_f64());

        Ok(data)
    }
}
