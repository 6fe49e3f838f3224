use crate::{
    abstract_trait::user::service::DynPreferencesService,
    repository::{UserCommandRepository, UserQueryRepository},
    service::PreferencesService,
};
use prometheus_client::registry::Registry;
use shared::{abstract_trait::DynHashing, config::ConnectionPool};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub preferences: DynPreferencesService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("preferences", &"PreferencesService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hashing: DynHashing, registry: &mut Registry) -> Self {
        let query = Arc::new(UserQueryRepository::new(pool.clone()));
        let command = Arc::new(UserCommandRepository::new(pool));

        let preferences: DynPreferencesService =
            Arc::new(PreferencesService::new(query, command, hashing, registry));

        Self { preferences }
    }
}
