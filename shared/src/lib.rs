pub mod extract;
pub mod progress;
pub mod scale;
pub mod status;

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Body accepted by the relay's classify endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassifyRequest {
    pub text: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Tier on the NOVA food-processing scale. Travels on the wire as the bare
/// integer 1..=4.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[serde(try_from = "u8", into = "u8")]
pub enum NovaCategory {
    #[strum(to_string = "NOVA 1")]
    Unprocessed,
    #[strum(to_string = "NOVA 2")]
    CulinaryIngredient,
    #[strum(to_string = "NOVA 3")]
    Processed,
    #[strum(to_string = "NOVA 4")]
    UltraProcessed,
}

impl NovaCategory {
    pub fn number(self) -> u8 {
        match self {
            NovaCategory::Unprocessed => 1,
            NovaCategory::CulinaryIngredient => 2,
            NovaCategory::Processed => 3,
            NovaCategory::UltraProcessed => 4,
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            NovaCategory::Unprocessed => "🥦",
            NovaCategory::CulinaryIngredient => "🧂",
            NovaCategory::Processed => "🍞",
            NovaCategory::UltraProcessed => "🍟",
        }
    }
}

impl TryFrom<u8> for NovaCategory {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(NovaCategory::Unprocessed),
            2 => Ok(NovaCategory::CulinaryIngredient),
            3 => Ok(NovaCategory::Processed),
            4 => Ok(NovaCategory::UltraProcessed),
            other => Err(format!("NOVA category out of range: {}", other)),
        }
    }
}

impl From<NovaCategory> for u8 {
    fn from(category: NovaCategory) -> Self {
        category.number()
    }
}

pub const UNKNOWN_EMOJI: &str = "❓";
pub const UNKNOWN_LABEL: &str = "Ukendt";

/// Outcome of one classification. `category` is `None` when the model reply
/// could not be interpreted; `description` is never empty.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NovaResult {
    pub category: Option<NovaCategory>,
    pub description: String,
}

impl NovaResult {
    /// Single-line rendering shown to the user, e.g.
    /// `🍞 NOVA 3 — Indeholder forarbejdet hvedemel og tilsat salt.`
    pub fn headline(&self) -> String {
        match self.category {
            Some(category) => format!("{} {} — {}", category.emoji(), category, self.description),
            None => format!("{} {} — {}", UNKNOWN_EMOJI, UNKNOWN_LABEL, self.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn category_numbers_round_trip_through_u8() {
        for category in NovaCategory::iter() {
            assert_eq!(NovaCategory::try_from(category.number()), Ok(category));
        }
        assert!(NovaCategory::try_from(0).is_err());
        assert!(NovaCategory::try_from(5).is_err());
    }

    #[test]
    fn result_serializes_category_as_integer_or_null() {
        let known = NovaResult {
            category: Some(NovaCategory::UltraProcessed),
            description: "Tilsat aroma.".into(),
        };
        assert_eq!(
            serde_json::to_value(&known).unwrap(),
            serde_json::json!({ "category": 4, "description": "Tilsat aroma." })
        );

        let unknown = NovaResult { category: None, description: "?".into() };
        assert_eq!(
            serde_json::to_value(&unknown).unwrap(),
            serde_json::json!({ "category": null, "description": "?" })
        );
    }

    #[test]
    fn out_of_range_category_is_rejected_on_decode() {
        let parsed = serde_json::from_str::<NovaResult>(r#"{"category":7,"description":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn headline_uses_label_and_emoji() {
        let result = NovaResult {
            category: Some(NovaCategory::Processed),
            description: "Indeholder forarbejdet hvedemel og tilsat salt.".into(),
        };
        assert_eq!(
            result.headline(),
            "🍞 NOVA 3 — Indeholder forarbejdet hvedemel og tilsat salt."
        );

        let unknown = NovaResult { category: None, description: "Ikke nok information.".into() };
        assert_eq!(unknown.headline(), "❓ Ukendt — Ikke nok information.");
    }
}
