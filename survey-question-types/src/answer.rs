//! Answer containers linking questions to the external answer model.
//!
//! The concrete answer-option shapes live in the answer model and are carried
//! here as opaque payloads. What this layer does guarantee is the mapping:
//! each question family links to exactly one container type, so a rating
//! matrix cannot be handed, say, a demographic answer block.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Answer container for single-choice and multiple-choice questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceAnswer(pub Value);

/// Answer container for demographic questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DemographicAnswer(pub Value);

/// Answer container for menu matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuMatrixAnswer(pub Value);

/// Answer container for ranking matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RankingMatrixAnswer(pub Value);

/// Answer container for single- and multi-select choice matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChoiceMatrixAnswer(pub Value);

/// Answer container for multi-field open-ended questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MultiOpenEndedAnswer(pub Value);

/// Answer container for date/time questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateTimeAnswer(pub Value);

/// Answer container for rating matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingMatrixAnswer(pub Value);
