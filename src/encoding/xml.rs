//! XML encoder
//!
//! Output shape:
//!
//! ```text
//! <foods><food id="1"><name>Pizza</name>...</food></foods>
//! <error code="2"><message>...</message></error>
//! ```

use crate::store::Food;

use super::{EncodeResult, Encoder, ErrorBody};

const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// XML encoder
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlEncoder;

impl XmlEncoder {
    fn push_food(output: &mut String, food: &Food) {
        output.push_str(&format!("<food id=\"{}\">", food.id));
        Self::push_element(output, "name", &food.name);
        Self::push_element(output, "description", &food.description);
        Self::push_element(output, "venue", &food.venue);
        output.push_str("</food>");
    }

    fn push_element(output: &mut String, tag: &str, text: &str) {
        output.push('<');
        output.push_str(tag);
        output.push('>');
        Self::escape(output, text);
        output.push_str("</");
        output.push_str(tag);
        output.push('>');
    }

    /// Escape markup characters in text and attribute content
    fn escape(output: &mut String, s: &str) {
        for c in s.chars() {
            match c {
                '<' => output.push_str("&lt;"),
                '>' => output.push_str("&gt;"),
                '&' => output.push_str("&amp;"),
                '"' => output.push_str("&quot;"),
                '\'' => output.push_str("&apos;"),
                c => output.push(c),
            }
        }
    }
}

impl Encoder for XmlEncoder {
    fn content_type(&self) -> &'static str {
        "application/xml; charset=utf-8"
    }

    fn encode_food(&self, food: &Food) -> EncodeResult<String> {
        let mut output = String::from(DECLARATION);
        Self::push_food(&mut output, food);
        Ok(output)
    }

    fn encode_foods(&self, foods: &[Food]) -> EncodeResult<String> {
        let mut output = String::from(DECLARATION);
        output.push_str("<foods>");
        for food in foods {
            Self::push_food(&mut output, food);
        }
        output.push_str("</foods>");
        Ok(output)
    }

    fn encode_error(&self, error: &ErrorBody) -> EncodeResult<String> {
        let mut output = String::from(DECLARATION);
        output.push_str(&format!("<error code=\"{}\">", error.code));
        Self::push_element(&mut output, "message", &error.message);
        output.push_str("</error>");
        Ok(output)
    }
}
