mod preferences;

pub use self::preferences::{
    EMAIL_TAKEN, EMAIL_UPDATED, PASSWORD_TOO_SHORT, PASSWORD_UPDATED, PreferencesService,
};
