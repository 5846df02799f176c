use serde::{Deserialize, Serialize};

use crate::QuizOptions;

/// An option-list entry offered to the respondent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,

    /// 1-based position among sibling choices.
    pub position: u32,

    pub visible: bool,

    pub text: String,

    pub description: String,

    pub quiz_options: QuizOptions,

    /// Marks a "not applicable" sentinel choice, excluded from
    /// required-answer counting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_na: Option<bool>,

    /// Scoring multiplier. Absent means unweighted, never zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Choice {
    /// Check if this is a "not applicable" sentinel choice.
    pub fn is_not_applicable(&self) -> bool {
        self.is_na.unwrap_or(false)
    }
}

/// A row-axis entry of a matrix question, orthogonal to its choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: String,

    /// 1-based position among sibling rows.
    pub position: u32,

    pub visible: bool,

    pub text: String,
}

/// The generic choice/row aggregate used by answer payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answers {
    pub choices: Vec<Choice>,
    pub rows: Vec<Row>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn na_choice_without_weight_keeps_weight_absent() {
        let payload = json!({
            "id": "c9",
            "position": 9,
            "visible": true,
            "text": "Not applicable",
            "description": "",
            "quiz_options": {"score": 0.0},
            "is_na": true
        });
        let choice: Choice = serde_json::from_value(payload.clone()).unwrap();
        assert!(choice.is_not_applicable());
        assert_eq!(choice.weight, None);

        let encoded = serde_json::to_value(&choice).unwrap();
        assert!(encoded.get("weight").is_none());
        assert_eq!(encoded, payload);
    }

    #[test]
    fn weighted_choice_round_trips() {
        let payload = json!({
            "id": "c1",
            "position": 1,
            "visible": true,
            "text": "Strongly agree",
            "description": "top of the scale",
            "quiz_options": {"score": 2.5},
            "weight": 1.5
        });
        let choice: Choice = serde_json::from_value(payload.clone()).unwrap();
        assert!(!choice.is_not_applicable());
        assert_eq!(serde_json::to_value(&choice).unwrap(), payload);
    }
}
