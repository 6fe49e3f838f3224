mod preferences;

pub use self::preferences::{DynPreferencesService, PreferencesServiceTrait};
