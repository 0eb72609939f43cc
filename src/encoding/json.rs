use crate::store::Food;

use super::{EncodeResult, Encoder, ErrorBody};

/// JSON encoder backed by serde_json
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEncoder;

impl Encoder for JsonEncoder {
    fn content_type(&self) -> &'static str {
        "application/json"
    }

    fn encode_food(&self, food: &Food) -> EncodeResult<String> {
        Ok(serde_json::to_string(food)?)
    }

    fn encode_foods(&self, foods: &[Food]) -> EncodeResult<String> {
        Ok(serde_json::to_string(foods)?)
    }

    fn encode_error(&self, error: &ErrorBody) -> EncodeResult<String> {
        Ok(serde_json::to_string(error)?)
    }
}
