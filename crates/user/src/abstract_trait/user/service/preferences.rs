use crate::domain::{
    requests::UpdatePreferencesRequest,
    response::{PreferencesResponse, ProfileResponse},
};
use async_trait::async_trait;
use shared::{domain::Identity, errors::ServiceError};
use std::sync::Arc;

pub type DynPreferencesService = Arc<dyn PreferencesServiceTrait + Send + Sync>;

#[async_trait]
pub trait PreferencesServiceTrait {
    async fn profile(&self, identity: &Identity) -> Result<ProfileResponse, ServiceError>;
    async fn update_preferences(
        &self,
        identity: &Identity,
        req: &UpdatePreferencesRequest,
    ) -> Result<PreferencesResponse, ServiceError>;
}
