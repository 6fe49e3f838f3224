#![allow(dead_code)]

use apigateway::{di::DependenciesInject, handler::AppRouter, state::AppState};
use async_trait::async_trait;
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use prometheus_client::registry::Registry;
use product::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::NewProduct,
    model::Product,
    service::{ProductCommandService, ProductQueryService},
};
use shared::{
    abstract_trait::{DynHashing, DynJwtService, JwtServiceTrait},
    config::{Hashing, JwtConfig},
    errors::RepositoryError,
};
use std::sync::{Arc, Mutex};
use user::{
    abstract_trait::user::repository::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
    model::User,
    service::PreferencesService,
};

pub const SECRET: &str = "router-test-secret";

#[derive(Default)]
pub struct MemoryStore {
    products: Mutex<Vec<Product>>,
    users: Mutex<Vec<User>>,
    next_id: Mutex<i32>,
    pub offline: bool,
}

impl MemoryStore {
    pub fn product_count(&self) -> usize {
        self.products.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryStore {
    async fn create_product(&self, req: &NewProduct) -> Result<Product, RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));
        }

        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;

        let product = Product {
            id: *next_id,
            name: req.name().to_string(),
            price: req.price(),
            image_path: req.image_path().to_string(),
        };
        self.products.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);

        if products.len() == before {
            Err(RepositoryError::NotFound)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryStore {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        if self.offline {
            return Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));
        }

        let mut rows = self.products.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()).then(a.id.cmp(&b.id)));
        Ok(rows)
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for MemoryStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn email_taken(&self, email: &str, exclude_id: i32) -> Result<bool, RepositoryError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == email && u.id != exclude_id))
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for MemoryStore {
    async fn update_email(&self, id: i32, email: &str) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        user.email = email.to_string();
        Ok(())
    }

    async fn update_password(&self, id: i32, password_hash: &str) -> Result<(), RepositoryError> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::default())
    }

    pub fn offline() -> Self {
        Self::with_store(MemoryStore {
            offline: true,
            ..MemoryStore::default()
        })
    }

    fn with_store(store: MemoryStore) -> Self {
        *store.users.lock().unwrap() = vec![
            User {
                id: 1,
                email: "alice@example.com".into(),
                password_hash: "unset".into(),
            },
            User {
                id: 2,
                email: "bob@example.com".into(),
                password_hash: "unset".into(),
            },
        ];
        let store = Arc::new(store);

        let mut registry = Registry::default();
        let hashing: DynHashing = Arc::new(Hashing::new(4));

        let di_container = DependenciesInject {
            product_query: Arc::new(ProductQueryService::new(store.clone(), &mut registry)),
            product_command: Arc::new(ProductCommandService::new(store.clone(), &mut registry)),
            preferences: Arc::new(PreferencesService::new(
                store.clone(),
                store.clone(),
                hashing,
                &mut registry,
            )),
        };

        let jwt: DynJwtService = Arc::new(JwtConfig::new(SECRET));
        let router = AppRouter::build(AppState::from_parts(jwt, di_container, registry));

        Self { router, store }
    }
}

pub fn token_for(user_id: i32) -> String {
    JwtConfig::new(SECRET)
        .generate_token(user_id, "access")
        .expect("token")
}

pub fn get(uri: &str, user_id: Option<i32>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(id) = user_id {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token_for(id)));
    }
    builder.body(Body::empty()).expect("request")
}

pub fn form(method: &str, uri: &str, user_id: i32, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token_for(user_id)))
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
