use crate::domain::requests::price::parse_price;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::errors::FieldErrors;
use std::borrow::Cow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

pub const IMAGE_CHOICES: [&str; 4] = [
    "products/p1.svg",
    "products/p2.svg",
    "products/p3.svg",
    "products/p4.svg",
];

pub const DEFAULT_IMAGE_PATH: &str = IMAGE_CHOICES[0];

/// Raw product fields as submitted by the HTML form or the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductForm {
    #[validate(
        required(message = "Name is required."),
        custom(function = "validate_name")
    )]
    #[schema(example = "Smartphone")]
    pub name: Option<String>,

    #[validate(
        required(message = "Price is required."),
        custom(function = "validate_price")
    )]
    #[schema(example = "19.99")]
    pub price: Option<String>,

    #[validate(custom(function = "validate_image_path"))]
    #[schema(example = "products/p1.svg")]
    pub image_path: Option<String>,
}

/// A product that passed every field constraint.
///
/// Only `ProductForm::validate_record` builds one, so holding a
/// `NewProduct` means the data is safe to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    name: String,
    price: Decimal,
    image_path: String,
}

impl NewProduct {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn image_path(&self) -> &str {
        &self.image_path
    }
}

impl ProductForm {
    pub fn new(name: Option<&str>, price: Option<&str>, image_path: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_owned),
            price: price.map(str::to_owned),
            image_path: image_path.map(str::to_owned),
        }
    }

    /// Checks every field and collects all violations, then normalizes the
    /// input: trimmed name, price rounded to two places, image path
    /// defaulted when blank.
    pub fn validate_record(&self) -> Result<NewProduct, FieldErrors> {
        self.validate().map_err(FieldErrors::from)?;

        let name = self.name.as_deref().unwrap_or_default().trim().to_string();

        let price = parse_price(self.price.as_deref().unwrap_or_default()).map_err(|e| {
            let mut errors = FieldErrors::new();
            errors.add("price", e.message());
            errors
        })?;

        let image_path = match self.image_path.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => DEFAULT_IMAGE_PATH.to_string(),
        };

        Ok(NewProduct {
            name,
            price,
            image_path,
        })
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::new("required").with_message(Cow::Borrowed("Name is required.")));
    }

    Ok(())
}

fn validate_price(price: &str) -> Result<(), ValidationError> {
    parse_price(price)
        .map(|_| ())
        .map_err(|e| ValidationError::new(e.code()).with_message(Cow::Borrowed(e.message())))
}

fn validate_image_path(image_path: &str) -> Result<(), ValidationError> {
    let image_path = image_path.trim();

    if image_path.is_empty() || IMAGE_CHOICES.iter().any(|choice| *choice == image_path) {
        return Ok(());
    }

    Err(ValidationError::new("invalid_choice")
        .with_message(Cow::Borrowed("Not a valid image choice.")))
}
