use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Account preferences form. Blank fields leave the stored value alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdatePreferencesRequest {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    #[schema(example = "s3cret!")]
    pub password: Option<String>,
}

impl UpdatePreferencesRequest {
    /// The submitted email, trimmed, or `None` when absent or blank.
    pub fn submitted_email(&self) -> Option<&str> {
        self.email
            .as_deref()
            .map(str::trim)
            .filter(|email| !email.is_empty())
    }

    /// The submitted password, or `None` when absent or empty.
    pub fn submitted_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|password| !password.is_empty())
    }

    /// Length is counted in characters, not bytes.
    pub fn password_too_short(password: &str) -> bool {
        password.chars().count() < MIN_PASSWORD_LEN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_count_as_not_submitted() {
        let req = UpdatePreferencesRequest {
            email: Some("   ".into()),
            password: Some(String::new()),
        };

        assert_eq!(req.submitted_email(), None);
        assert_eq!(req.submitted_password(), None);
    }

    #[test]
    fn email_is_trimmed() {
        let req = UpdatePreferencesRequest {
            email: Some("  a@b.c ".into()),
            password: None,
        };

        assert_eq!(req.submitted_email(), Some("a@b.c"));
    }

    #[test]
    fn password_length_counts_characters() {
        assert!(UpdatePreferencesRequest::password_too_short("abc"));
        assert!(UpdatePreferencesRequest::password_too_short("ñññññ"));
        assert!(!UpdatePreferencesRequest::password_too_short("ñññññ1"));
    }
}
