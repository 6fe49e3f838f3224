mod identity;

pub use self::identity::Identity;
