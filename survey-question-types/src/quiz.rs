use serde::{Deserialize, Serialize};

/// Per-choice quiz score: points awarded when the choice is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizOptions {
    pub score: f64,
}

/// Feedback text shown to the respondent after quiz scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizFeedback {
    pub correct_text: String,
    pub partial_text: String,
    pub incorrect_text: String,
}

/// Question-level quiz scoring options for choice questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceQuizOptions {
    pub feedback: QuizFeedback,
    pub scoring_enabled: bool,
}
