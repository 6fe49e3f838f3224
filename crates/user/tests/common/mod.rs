#![allow(dead_code)]

use async_trait::async_trait;
use shared::errors::RepositoryError;
use std::sync::Mutex;
use user::{
    abstract_trait::user::repository::{UserCommandRepositoryTrait, UserQueryRepositoryTrait},
    model::User,
};

/// Users table kept in memory with the same email uniqueness rule.
#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub fn with_users(emails: &[&str]) -> Self {
        let rows = emails
            .iter()
            .enumerate()
            .map(|(i, email)| User {
                id: i as i32 + 1,
                email: email.to_string(),
                password_hash: "unset".to_string(),
            })
            .collect();

        Self {
            rows: Mutex::new(rows),
        }
    }

    pub fn get(&self, id: i32) -> User {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .expect("user exists")
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for InMemoryUsers {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn email_taken(&self, email: &str, exclude_id: i32) -> Result<bool, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|u| u.email == email && u.id != exclude_id))
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for InMemoryUsers {
    async fn update_email(&self, id: i32, email: &str) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|u| u.email == email && u.id != id) {
            return Err(RepositoryError::AlreadyExists("email".into()));
        }

        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        user.email = email.to_string();
        Ok(())
    }

    async fn update_password(&self, id: i32, password_hash: &str) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let user = rows
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or(RepositoryError::NotFound)?;
        user.password_hash = password_hash.to_string();
        Ok(())
    }
}
