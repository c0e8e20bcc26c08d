use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use super::{decode_data, deserialize_whole_number};
use super::errors::DomainError;
use super::ports::Record;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Whole currency units, always greater than zero.
    #[serde(deserialize_with = "deserialize_whole_number")]
    pub price: u64,
    pub image_url: String,
}

#[derive(Debug, Deserialize)]
struct DishFields {
    name: String,
    description: String,
    #[serde(deserialize_with = "deserialize_whole_number")]
    price: u64,
    image_url: String,
}

impl Dish {
    /// Build a dish from a request `data` object that already passed validation.
    ///
    /// Any `id` inside `data` is ignored in favour of `id`.
    pub fn from_data(id: String, data: &Value) -> Result<Self, DomainError> {
        let fields: DishFields = decode_data(data)?;
        Ok(Self {
            id,
            name: fields.name,
            description: fields.description,
            price: fields.price,
            image_url: fields.image_url,
        })
    }
}

impl Record for Dish {
    const KIND: &'static str = "Dish";

    fn id(&self) -> &str {
        &self.id
    }
}
