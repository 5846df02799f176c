use serde::{Deserialize, Serialize};

/// How choices or rows are reordered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSortingType {
    Default,
    Textasc,
    Textdesc,
    RespCountAsc,
    RespCountDesc,
    Random,
    Flip,
}

/// Display-ordering rule for a question's choices or rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionSorting {
    #[serde(rename = "type")]
    pub sort_type: QuestionSortingType,

    /// Exclude the final entry (e.g. an "Other" option) from reordering.
    pub ignore_last: bool,
}

/// Answer-cardinality constraint kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionRequiredType {
    All,
    AtLeast,
    AtMost,
    Exactly,
    Range,
}

/// Answer-cardinality constraint on a question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionRequired {
    /// Message shown when the constraint is not met.
    pub text: String,

    #[serde(rename = "type")]
    pub required_type: QuestionRequiredType,

    /// A single number or a min-max range. Opaque at this layer: the
    /// consumer owns the grammar, so `"3-5"` round-trips untouched.
    pub amount: String,
}

impl QuestionRequired {
    /// Check if the amount encodes a range rather than a single number.
    pub fn is_range(&self) -> bool {
        self.required_type == QuestionRequiredType::Range
    }
}

/// Input-format constraint kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionValidationType {
    Any,
    Integer,
    Decimal,
    DateUs,
    DateIntl,
    Regex,
    Email,
    TextLength,
}

/// Input-format constraint on a question.
///
/// `min`, `max` and `sum` are nullable on the wire; a null bound means
/// unbounded. The string bounds are never parsed or normalized here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionValidation {
    #[serde(rename = "type")]
    pub validation_type: QuestionValidationType,

    /// Message shown when the input does not validate.
    pub text: String,

    #[serde(default)]
    pub min: Option<String>,

    #[serde(default)]
    pub max: Option<String>,

    /// Target total across answer fields, for sum-constrained questions.
    #[serde(default)]
    pub sum: Option<f64>,

    /// Message shown when the sum target is not met.
    pub sum_text: String,
}

impl QuestionValidation {
    /// Check if either bound is set.
    pub fn is_bounded(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn range_amount_stays_opaque() {
        let payload = json!({"text": "Pick 3 to 5", "type": "range", "amount": "3-5"});
        let required: QuestionRequired = serde_json::from_value(payload.clone()).unwrap();
        assert!(required.is_range());
        assert_eq!(required.amount, "3-5");
        assert_eq!(serde_json::to_value(&required).unwrap(), payload);
    }

    #[test]
    fn validation_bounds_round_trip_as_strings() {
        let payload = json!({
            "type": "integer",
            "text": "Whole numbers only",
            "min": "10",
            "max": null,
            "sum": null,
            "sum_text": ""
        });
        let validation: QuestionValidation = serde_json::from_value(payload.clone()).unwrap();
        assert!(validation.is_bounded());
        assert_eq!(validation.min.as_deref(), Some("10"));
        assert_eq!(validation.max, None);
        assert_eq!(serde_json::to_value(&validation).unwrap(), payload);
    }

    #[test]
    fn sorting_types_use_wire_names() {
        let sorting: QuestionSorting =
            serde_json::from_value(json!({"type": "resp_count_desc", "ignore_last": true}))
                .unwrap();
        assert_eq!(sorting.sort_type, QuestionSortingType::RespCountDesc);
        assert!(sorting.ignore_last);
    }
}
