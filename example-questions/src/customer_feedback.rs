//! A hotel-stay feedback survey: one question per non-quiz family.

use serde_json::{Value, json};
use survey_question_types::{DecodeError, Question};

fn base(id: &str, position: u32, heading: &str) -> Value {
    json!({
        "id": id,
        "position": position,
        "visible": true,
        "href": format!("https://api.example.test/surveys/101/questions/{id}"),
        "headings": [{"heading": heading}],
        "sorting": null,
        "required": null,
        "validation": null,
        "forced_ranking": false
    })
}

fn merge(mut payload: Value, extra: Value) -> Value {
    let target = payload.as_object_mut().expect("payload object");
    for (key, value) in extra.as_object().expect("extra object") {
        target.insert(key.clone(), value.clone());
    }
    payload
}

/// A rating matrix with a five-star emoji scale.
pub fn room_rating() -> Value {
    merge(
        base("q1", 1, "Rate your room"),
        json!({
            "family": "matrix",
            "subtype": "rating",
            "display_options": {
                "display_type": "emoji",
                "display_subtype": "star",
                "custom_options": {"option_set": ["s1", "s2", "s3", "s4", "s5"]},
                "show_display_number": true,
                "left_label_id": null,
                "left_label": "Awful",
                "middle_label_id": null,
                "middle_label": "",
                "right_label_id": null,
                "right_label": "Wonderful"
            },
            "answers": {
                "rows": [
                    {"id": "r1", "position": 1, "visible": true, "text": "Cleanliness"},
                    {"id": "r2", "position": 2, "visible": true, "text": "Comfort"}
                ]
            }
        }),
    )
}

/// A slider-rendered single open-ended question.
pub fn likelihood_to_return() -> Value {
    merge(
        base("q2", 2, "How likely are you to stay with us again?"),
        json!({
            "family": "open_ended",
            "subtype": "single",
            "display_options": {
                "display_type": "slider",
                "display_subtype": "",
                "custom_options": {
                    "starting_position": 50.0,
                    "step_size": 1.5,
                    "option_set": ["adjusted_scale"]
                },
                "show_display_number": false,
                "left_label_id": null,
                "left_label": "Never again",
                "middle_label_id": null,
                "middle_label": "",
                "right_label_id": null,
                "right_label": "Definitely"
            }
        }),
    )
}

/// A demographic block in international address format.
pub fn guest_details() -> Value {
    merge(
        base("q3", 3, "Tell us about yourself"),
        json!({
            "family": "demographic",
            "subtype": "international",
            "answers": {}
        }),
    )
}

/// A date-only question with a random-assignment heading variant.
pub fn checkout_date() -> Value {
    let mut payload = merge(
        base("q4", 4, ""),
        json!({
            "family": "datetime",
            "subtype": "date_only",
            "answers": {}
        }),
    );
    payload["headings"] = json!([{
        "heading": "",
        "description": "follow-up timing experiment",
        "random_assignment": {
            "percent": 50.0,
            "position": 1,
            "variable_name": "followup_arm",
            "id": "ra1"
        }
    }]);
    payload
}

/// A closing thank-you note.
pub fn thank_you_note() -> Value {
    merge(
        base("q5", 5, "Thanks for staying with us!"),
        json!({
            "family": "presentation",
            "subtype": "descriptive_text",
            "nickname": "outro",
            "display_options": {"show_display_number": false}
        }),
    )
}

/// All payloads of the feedback survey, in position order.
pub fn customer_feedback_payloads() -> Vec<Value> {
    vec![
        room_rating(),
        likelihood_to_return(),
        guest_details(),
        checkout_date(),
        thank_you_note(),
    ]
}

/// Decode the whole feedback survey.
pub fn customer_feedback_questions() -> Result<Vec<Question>, DecodeError> {
    customer_feedback_payloads()
        .iter()
        .map(Question::from_value)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use survey_question_types::{MatrixQuestion, OpenEndedQuestion, QuestionFamily};

    #[test]
    fn the_survey_decodes() {
        let questions = customer_feedback_questions().unwrap();
        assert_eq!(questions.len(), 5);
        assert!(matches!(
            questions[0],
            Question::Matrix(MatrixQuestion::Rating(_))
        ));
        assert!(matches!(
            questions[1],
            Question::OpenEnded(OpenEndedQuestion::Single(_))
        ));
        assert_eq!(questions[2].family(), QuestionFamily::Demographic);
        assert_eq!(questions[3].subtype_name(), "date_only");
        assert_eq!(questions[4].family(), QuestionFamily::Presentation);
    }

    #[test]
    fn every_payload_round_trips() {
        for payload in customer_feedback_payloads() {
            let question = Question::from_value(&payload).unwrap();
            assert_eq!(question.to_value().unwrap(), payload);
        }
    }

    #[test]
    fn the_experiment_heading_is_a_random_assignment() {
        let questions = customer_feedback_questions().unwrap();
        let heading = &questions[3].base().headings[0];
        assert!(heading.is_random_assignment());
        assert_eq!(heading.description(), Some("follow-up timing experiment"));
    }
}
