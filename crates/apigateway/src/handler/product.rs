use crate::{middleware::jwt::auth_middleware, state::AppState};
use axum::{
    Form, Json,
    extract::{Extension, Path},
    http::StatusCode,
    middleware,
    response::{IntoResponse, Redirect},
    routing::{delete, get, post},
};
use axum_extra::extract::WithRejection;
use product::{
    abstract_trait::product::service::{DynProductCommandService, DynProductQueryService},
    domain::{requests::ProductForm, response::ProductResponse},
};
use serde::{Deserialize, Serialize};
use shared::{domain::Identity, errors::HttpError};
use std::sync::Arc;
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/api/productos",
    tag = "Product",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All products ordered by name", body = Vec<ProductResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn get_products(
    Extension(service): Extension<DynProductQueryService>,
    Extension(identity): Extension<Identity>,
) -> Result<impl IntoResponse, HttpError> {
    let products = service.find_all(&identity).await?;
    Ok((StatusCode::OK, Json(products)))
}

#[utoipa::path(
    post,
    path = "/api/productos",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body(content = ProductForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 201, description = "Product created", body = ProductResponse),
        (status = 400, description = "Field validation errors"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_product(
    Extension(service): Extension<DynProductCommandService>,
    Extension(identity): Extension<Identity>,
    WithRejection(Form(body), _): WithRejection<Form<ProductForm>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    let product = service.create_product(&identity, &body).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    delete,
    path = "/api/producto/{id}",
    tag = "Product",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = DeleteResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No product with this id, or the id is not an integer")
    )
)]
pub async fn delete_product(
    Extension(service): Extension<DynProductCommandService>,
    Extension(identity): Extension<Identity>,
    WithRejection(Path(id), _): WithRejection<Path<i32>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_product(&identity, id).await?;

    Ok((
        StatusCode::OK,
        Json(DeleteResponse {
            success: true,
            message: "Product deleted".to_string(),
        }),
    ))
}

/// HTML form submission; same validation as the JSON route, but a
/// successful create redirects back to the catalog page.
#[utoipa::path(
    post,
    path = "/nuevo",
    tag = "Product",
    security(("bearer_auth" = [])),
    request_body(content = ProductForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Created, redirect to /productos"),
        (status = 400, description = "Field validation errors"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn submit_product_form(
    Extension(service): Extension<DynProductCommandService>,
    Extension(identity): Extension<Identity>,
    WithRejection(Form(body), _): WithRejection<Form<ProductForm>, HttpError>,
) -> Result<impl IntoResponse, HttpError> {
    service.create_product(&identity, &body).await?;
    Ok(Redirect::to("/productos"))
}

pub fn product_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/productos", get(get_products))
        .route("/api/productos", post(create_product))
        .route("/api/producto/{id}", delete(delete_product))
        .route("/nuevo", post(submit_product_form))
        .route_layer(middleware::from_fn(auth_middleware))
        .layer(Extension(app_state.di_container.product_query.clone()))
        .layer(Extension(app_state.di_container.product_command.clone()))
        .layer(Extension(app_state.jwt_config.clone()))
}
