use crate::store::Food;

use super::{EncodeResult, Encoder, ErrorBody};

/// Plain-text encoder using each food's display form, one per line
#[derive(Debug, Clone, Copy, Default)]
pub struct TextEncoder;

impl Encoder for TextEncoder {
    fn content_type(&self) -> &'static str {
        "text/plain; charset=utf-8"
    }

    fn encode_food(&self, food: &Food) -> EncodeResult<String> {
        Ok(food.to_string())
    }

    fn encode_foods(&self, foods: &[Food]) -> EncodeResult<String> {
        Ok(foods
            .iter()
            .map(Food::to_string)
            .collect::<Vec<_>>()
            .join("\n"))
    }

    fn encode_error(&self, error: &ErrorBody) -> EncodeResult<String> {
        Ok(format!("error {}: {}", error.code, error.message))
    }
}
