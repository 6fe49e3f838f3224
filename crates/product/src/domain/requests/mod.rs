mod price;
mod product;

pub use self::price::{MAX_PRICE, MIN_PRICE, PriceError, parse_price};
pub use self::product::{DEFAULT_IMAGE_PATH, IMAGE_CHOICES, NewProduct, ProductForm};
