#![allow(dead_code)]

use async_trait::async_trait;
use product::{
    abstract_trait::product::repository::{
        ProductCommandRepositoryTrait, ProductQueryRepositoryTrait,
    },
    domain::requests::NewProduct,
    model::Product,
};
use shared::errors::RepositoryError;
use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Product table kept in memory, ordered the same way the SQL query orders.
#[derive(Default)]
pub struct InMemoryProducts {
    rows: Mutex<Vec<Product>>,
    next_id: Mutex<i32>,
    create_calls: AtomicUsize,
    unavailable: bool,
}

impl InMemoryProducts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call fails the way a dead pool does.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for InMemoryProducts {
    async fn create_product(&self, req: &NewProduct) -> Result<Product, RepositoryError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable {
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
        self.rows.lock().unwrap().push(product.clone());

        Ok(product)
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        if self.unavailable {
            return Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));
        }

        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.id != id);

        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for InMemoryProducts {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        if self.unavailable {
            return Err(RepositoryError::Sqlx(sqlx::Error::PoolTimedOut));
        }

        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()).then(a.id.cmp(&b.id)));
        Ok(rows)
    }
}
