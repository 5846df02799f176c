//! A graded screening quiz: choice questions with scoring metadata.

use serde_json::{Value, json};
use survey_question_types::{DecodeError, Question};

fn choice(id: &str, position: u32, text: &str, score: f64) -> Value {
    json!({
        "id": id,
        "position": position,
        "visible": true,
        "text": text,
        "description": "",
        "quiz_options": {"score": score}
    })
}

/// A scored single-choice question with an "exactly one" requirement.
pub fn capital_question() -> Value {
    json!({
        "family": "single_choice",
        "subtype": "vertical",
        "id": "quiz1",
        "position": 1,
        "visible": true,
        "href": "https://api.example.test/surveys/202/questions/quiz1",
        "headings": [{"heading": "What is the capital of Australia?"}],
        "sorting": {"type": "random", "ignore_last": false},
        "required": {"text": "Pick one answer", "type": "exactly", "amount": "1"},
        "validation": null,
        "forced_ranking": false,
        "answers": {"choices": [
            choice("c1", 1, "Sydney", 0.0),
            choice("c2", 2, "Canberra", 5.0),
            choice("c3", 3, "Melbourne", 0.0)
        ]},
        "quiz_options": {
            "feedback": {
                "correct_text": "Correct!",
                "partial_text": "",
                "incorrect_text": "It's Canberra."
            },
            "scoring_enabled": true
        }
    })
}

/// A scored multiple-choice question with a range requirement.
pub fn rivers_question() -> Value {
    json!({
        "family": "multiple_choice",
        "subtype": "vertical_two_col",
        "id": "quiz2",
        "position": 2,
        "visible": true,
        "href": "https://api.example.test/surveys/202/questions/quiz2",
        "headings": [{"heading": "Which of these are rivers?"}],
        "sorting": null,
        "required": {"text": "Pick two to three", "type": "range", "amount": "2-3"},
        "validation": null,
        "forced_ranking": false,
        "answers": {"choices": [
            choice("c1", 1, "Danube", 2.5),
            choice("c2", 2, "Everest", 0.0),
            choice("c3", 3, "Mekong", 2.5)
        ]},
        "quiz_options": {
            "feedback": {
                "correct_text": "Both right!",
                "partial_text": "One of two.",
                "incorrect_text": "Neither, sorry."
            },
            "scoring_enabled": true
        }
    })
}

/// Both quiz payloads, in position order.
pub fn screening_quiz_payloads() -> Vec<Value> {
    vec![capital_question(), rivers_question()]
}

/// Decode the whole quiz.
pub fn screening_quiz_questions() -> Result<Vec<Question>, DecodeError> {
    screening_quiz_payloads()
        .iter()
        .map(Question::from_value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn the_quiz_decodes_with_scoring_enabled() {
        let questions = screening_quiz_questions().unwrap();
        let Question::SingleChoice(capital) = &questions[0] else {
            panic!("expected a single choice question");
        };
        assert!(capital.quiz_options.as_ref().unwrap().scoring_enabled);

        let Question::MultipleChoice(rivers) = &questions[1] else {
            panic!("expected a multiple choice question");
        };
        let required = rivers.base.required.as_ref().unwrap();
        assert!(required.is_range());
        assert_eq!(required.amount, "2-3");
    }

    #[test]
    fn every_payload_round_trips() {
        for payload in screening_quiz_payloads() {
            let question = Question::from_value(&payload).unwrap();
            assert_eq!(question.to_value().unwrap(), payload);
        }
    }
}
