mod preferences;

pub use self::preferences::{MIN_PASSWORD_LEN, UpdatePreferencesRequest};
