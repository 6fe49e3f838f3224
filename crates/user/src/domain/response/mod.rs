mod preferences;
mod user;

pub use self::preferences::{Notice, NoticeCategory, PreferencesResponse};
pub use self::user::ProfileResponse;
