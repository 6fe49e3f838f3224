use crate::{middleware::jwt::auth_middleware, state::AppState};
use axum::{
    Form, Json,
    extract::Extension,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use axum_extra::extract::WithRejection;
use shared::{domain::Identity, errors::HttpError};
use std::sync::Arc;
use user::{
    abstract_trait::user::service::DynPreferencesService,
    domain::{
        requests::UpdatePreferencesRequest,
        response::{PreferencesResponse, ProfileResponse},
    },
};
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/usuario",
    tag = "User",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user", body = ProfileResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User no longer exists")
    )
)]
pub async fn get_profile(
    Extension(service): Extension<DynPreferencesService>,
    Extension(identity): Extension<Identity>,
) -> Result<impl IntoResponse, HttpError> {
    let profile = service.profile(&identity).await?;
    Ok((StatusCode::OK, Json(profile)))
}

#[utoipa::path(
    post,
    path = "/api/preferencias",
    tag = "User",
    security(("bearer_auth" = [])),
    request_body(content = UpdatePreferencesRequest, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Outcome notices", body = PreferencesResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_preferences(
    Extension(service): Extension<DynPreferencesService>,
    Extension(identity): Extension<Identity>,
    WithRejection(Form(body), _): WithRejection<Form<UpdatePreferencesRequest>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.update_preferences(&identity, &body).await?;
    Ok((StatusCode::OK, Json(response)))
}

pub fn user_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/usuario", get(get_profile))
        .route("/api/preferencias", post(update_preferences))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.preferences.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
