use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
    pub registry: Arc<Mutex<Registry>>,
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new(config.bcrypt_cost)) as DynHashing;

        let mut registry = Registry::default();
        let di_container = DependenciesInject::new(pool, hashing, &mut registry);

        Self::from_parts(jwt_config, di_container, registry)
    }

    /// Assembles state from already-built services, e.g. ones backed by
    /// something other than Postgres.
    pub fn from_parts(
        jwt_config: DynJwtService,
        di_container: DependenciesInject,
        registry: Registry,
    ) -> Self {
        Self {
            jwt_config,
            di_container,
            registry: Arc::new(Mutex::new(registry)),
        }
    }
}
