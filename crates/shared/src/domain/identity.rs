use serde::{Deserialize, Serialize};
use std::fmt;

/// The authenticated caller of a single request.
///
/// Produced by the auth middleware from a verified access token and handed
/// to every service operation explicitly; nothing in the crates reads the
/// caller from ambient state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: i32,
}

impl Identity {
    pub fn new(user_id: i32) -> Self {
        Self { user_id }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}", self.user_id)
    }
}
