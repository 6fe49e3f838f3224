use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategory {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Notice {
    pub category: NoticeCategory,
    pub message: String,
}

impl Notice {
    pub fn success(message: &str) -> Self {
        Self {
            category: NoticeCategory::Success,
            message: message.to_string(),
        }
    }

    pub fn warning(message: &str) -> Self {
        Self {
            category: NoticeCategory::Warning,
            message: message.to_string(),
        }
    }

    pub fn danger(message: &str) -> Self {
        Self {
            category: NoticeCategory::Danger,
            message: message.to_string(),
        }
    }
}

/// Outcome of a preferences update, in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PreferencesResponse {
    pub notices: Vec<Notice>,
}
