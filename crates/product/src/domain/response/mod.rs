mod product;

pub use self::product::ProductResponse;
