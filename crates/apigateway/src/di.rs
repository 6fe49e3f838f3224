use prometheus_client::registry::Registry;
use product::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    di::DependenciesInject as ProductDependencies,
};
use shared::{abstract_trait::DynHashing, config::ConnectionPool};
use std::fmt;
use user::{
    abstract_trait::user::service::DynPreferencesService,
    di::DependenciesInject as UserDependencies,
};

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub preferences: DynPreferencesService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"ProductQueryService")
            .field("product_command", &"ProductCommandService")
            .field("preferences", &"PreferencesService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, registry: &mut Registry) -> Self {
        let ProductDependencies {
            product_query,
            product_command,
        } = ProductDependencies::new(pool.clone(), registry);

        let UserDependencies { preferences } = UserDependencies::new(pool, hashing, registry);

        Self {
            product_query,
            product_command,
            preferences,
        }
    }
}
