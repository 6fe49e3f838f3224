use crate::{
    abstract_trait::user::{
        repository::{DynUserCommandRepository, DynUserQueryRepository},
        service::PreferencesServiceTrait,
    },
    domain::{
        requests::UpdatePreferencesRequest,
        response::{Notice, PreferencesResponse, ProfileResponse},
    },
    model::User as UserModel,
};
use async_trait::async_trait;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::DynHashing,
    domain::Identity,
    errors::{RepositoryError, ServiceError},
    utils::{Method, Metrics, Status},
};
use tokio::time::Instant;
use tracing::{error, info, warn};

pub const EMAIL_TAKEN: &str = "That email is already in use.";
pub const EMAIL_UPDATED: &str = "Email updated.";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 6 characters.";
pub const PASSWORD_UPDATED: &str = "Password updated.";

#[derive(Clone)]
pub struct PreferencesService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    metrics: Metrics,
}

impl PreferencesService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
        registry: &mut Registry,
    ) -> Self {
        let metrics = Metrics::new();
        metrics.register(registry, "preferences_service");

        Self {
            query,
            command,
            hashing,
            metrics,
        }
    }

    async fn current_user(&self, identity: &Identity) -> Result<UserModel, ServiceError> {
        match self.query.find_by_id(identity.user_id).await? {
            Some(user) => Ok(user),
            None => {
                error!("❌ User not found for {identity}");
                Err(ServiceError::Repo(RepositoryError::NotFound))
            }
        }
    }

    async fn apply_email(
        &self,
        user: &UserModel,
        req: &UpdatePreferencesRequest,
    ) -> Result<Option<Notice>, ServiceError> {
        let email = req.submitted_email().unwrap_or(user.email.as_str());

        if email == user.email {
            return Ok(None);
        }

        if self.query.email_taken(email, user.id).await? {
            warn!("⚠️ Email change rejected for user {}: address in use", user.id);
            return Ok(Some(Notice::danger(EMAIL_TAKEN)));
        }

        match self.command.update_email(user.id, email).await {
            Ok(()) => {
                info!("✅ Email updated for user {}", user.id);
                Ok(Some(Notice::success(EMAIL_UPDATED)))
            }
            Err(RepositoryError::AlreadyExists(_)) => {
                warn!("⚠️ Email change for user {} lost a race", user.id);
                Ok(Some(Notice::danger(EMAIL_TAKEN)))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn apply_password(
        &self,
        user: &UserModel,
        req: &UpdatePreferencesRequest,
    ) -> Result<Option<Notice>, ServiceError> {
        let Some(password) = req.submitted_password() else {
            return Ok(None);
        };

        if UpdatePreferencesRequest::password_too_short(password) {
            return Ok(Some(Notice::warning(PASSWORD_TOO_SHORT)));
        }

        let hash = self.hashing.hash_password(password).await?;
        self.command.update_password(user.id, &hash).await?;

        info!("✅ Password updated for user {}", user.id);

        Ok(Some(Notice::success(PASSWORD_UPDATED)))
    }

    fn record(&self, method: Method, start: Instant, is_success: bool) {
        let status = if is_success {
            Status::Success
        } else {
            Status::Error
        };

        self.metrics
            .record(method, status, start.elapsed().as_secs_f64());
    }
}

#[async_trait]
impl PreferencesServiceTrait for PreferencesService {
    async fn profile(&self, identity: &Identity) -> Result<ProfileResponse, ServiceError> {
        info!("👤 Loading profile | actor: {identity}");

        let start = Instant::now();
        let result = self.current_user(identity).await.map(ProfileResponse::from);
        self.record(Method::Get, start, result.is_ok());

        result
    }

    async fn update_preferences(
        &self,
        identity: &Identity,
        req: &UpdatePreferencesRequest,
    ) -> Result<PreferencesResponse, ServiceError> {
        info!("⚙️ Updating preferences | actor: {identity}");

        let start = Instant::now();

        let result = async {
            let user = self.current_user(identity).await?;

            let mut notices = Vec::new();
            notices.extend(self.apply_email(&user, req).await?);
            notices.extend(self.apply_password(&user, req).await?);

            Ok::<_, ServiceError>(PreferencesResponse { notices })
        }
        .await;

        if let Err(e) = &result {
            error!("❌ Failed to update preferences for {identity}: {e}");
        }
        self.record(Method::Post, start, result.is_ok());

        result
    }
}
