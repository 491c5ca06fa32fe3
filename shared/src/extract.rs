use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::{NovaCategory, NovaResult};

/// Description used when the model replied with nothing usable at all.
pub const FALLBACK_DESCRIPTION: &str = "Kunne ikke udtrække resultat.";

lazy_static! {
    // Greedy: first '{' through the last '}' in the reply.
    static ref OBJECT_PATTERN: Regex = Regex::new(r"(?s)\{.*\}").unwrap();
}

/// Best-effort interpretation of a free-form model reply.
///
/// The model is asked to answer with a bare JSON object, but compliance is
/// not guaranteed, so this never fails: anything it cannot read degrades to
/// `category: None` with the raw reply as description.
pub fn parse_model_reply(content: &str) -> NovaResult {
    let trimmed = content.trim();

    let Some(found) = OBJECT_PATTERN.find(content) else {
        let description = if trimmed.is_empty() {
            FALLBACK_DESCRIPTION.to_string()
        } else {
            trimmed.to_string()
        };
        return NovaResult { category: None, description };
    };

    match serde_json::from_str::<Value>(found.as_str()) {
        Ok(object) => NovaResult {
            category: category_of(&object),
            description: object
                .get("description")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or(trimmed)
                .to_string(),
        },
        Err(_) => NovaResult { category: None, description: trimmed.to_string() },
    }
}

// Integral floats such as `3.0` count; fractional ones do not.
fn category_of(object: &Value) -> Option<NovaCategory> {
    let value = object.get("category")?;
    let number = value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= f64::from(u8::MAX))
            .map(|f| f as u64)
    })?;
    u8::try_from(number).ok().and_then(|n| NovaCategory::try_from(n).ok())
}
