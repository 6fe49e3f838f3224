use crate::model::Product as ProductModel;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    /// Always two fractional digits, serialized as a string.
    #[schema(value_type = String, example = "19.99")]
    pub price: Decimal,
    pub image_path: String,
}

impl From<ProductModel> for ProductResponse {
    fn from(value: ProductModel) -> Self {
        let mut price = value.price;
        price.rescale(2);

        ProductResponse {
            id: value.id,
            name: value.name,
            price,
            image_path: value.image_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_serializes_with_two_decimals() {
        let response = ProductResponse::from(ProductModel {
            id: 3,
            name: "Lamp".into(),
            price: Decimal::new(10, 0),
            image_path: "products/p2.svg".into(),
        });

        let json = serde_json::to_value(&response).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "name": "Lamp",
                "price": "10.00",
                "image_path": "products/p2.svg"
            })
        );
    }
}
