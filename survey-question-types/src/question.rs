use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::answer::{
    ChoiceAnswer, ChoiceMatrixAnswer, DateTimeAnswer, DemographicAnswer, MenuMatrixAnswer,
    MultiOpenEndedAnswer, RankingMatrixAnswer, RatingMatrixAnswer,
};
use crate::display::{
    MultiOpenEndedDisplayOptions, MultipleChoiceDisplayOptions, PresentationDisplayOptions,
    RatingMatrixDisplayOptions, SingleChoiceDisplayOptions, SingleOpenEndedDisplayOptions,
};
use crate::error::DecodeError;
use crate::heading::Heading;
use crate::quiz::ChoiceQuizOptions;
use crate::rules::{QuestionRequired, QuestionSorting, QuestionValidation};

/// Top-level question kind. The set is closed; anything else is a decode error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionFamily {
    SingleChoice,
    MultipleChoice,
    Matrix,
    OpenEnded,
    Demographic,
    #[serde(rename = "datetime")]
    DateTime,
    Presentation,
}

impl QuestionFamily {
    /// All seven families, in wire order.
    pub const ALL: [Self; 7] = [
        Self::SingleChoice,
        Self::MultipleChoice,
        Self::Matrix,
        Self::OpenEnded,
        Self::Demographic,
        Self::DateTime,
        Self::Presentation,
    ];

    /// The wire name of this family.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleChoice => "single_choice",
            Self::MultipleChoice => "multiple_choice",
            Self::Matrix => "matrix",
            Self::OpenEnded => "open_ended",
            Self::Demographic => "demographic",
            Self::DateTime => "datetime",
            Self::Presentation => "presentation",
        }
    }

    /// The closed set of subtypes legal for this family.
    pub fn subtypes(self) -> &'static [&'static str] {
        match self {
            Self::SingleChoice => &[
                "vertical",
                "vertical_two_col",
                "vertical_three_col",
                "horiz",
                "menu",
            ],
            Self::MultipleChoice => {
                &["vertical", "vertical_two_col", "vertical_three_col", "horiz"]
            }
            Self::Matrix => &["rating", "ranking", "menu", "single", "multi"],
            Self::OpenEnded => &["multi", "numerical", "single", "essay"],
            Self::Demographic => &["international", "us"],
            Self::DateTime => &["both", "date_only", "time_only"],
            Self::Presentation => &["descriptive_text", "image"],
        }
    }

    /// Check if the given subtype is legal for this family.
    pub fn allows_subtype(self, subtype: &str) -> bool {
        self.subtypes().contains(&subtype)
    }
}

impl fmt::Display for QuestionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionFamily {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_choice" => Ok(Self::SingleChoice),
            "multiple_choice" => Ok(Self::MultipleChoice),
            "matrix" => Ok(Self::Matrix),
            "open_ended" => Ok(Self::OpenEnded),
            "demographic" => Ok(Self::Demographic),
            "datetime" => Ok(Self::DateTime),
            "presentation" => Ok(Self::Presentation),
            _ => Err(DecodeError::UnknownFamily {
                family: s.to_string(),
            }),
        }
    }
}

/// Layouts for single-choice questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleChoiceSubtype {
    Vertical,
    VerticalTwoCol,
    VerticalThreeCol,
    Horiz,
    Menu,
}

impl SingleChoiceSubtype {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::VerticalTwoCol => "vertical_two_col",
            Self::VerticalThreeCol => "vertical_three_col",
            Self::Horiz => "horiz",
            Self::Menu => "menu",
        }
    }
}

/// Layouts for multiple-choice questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultipleChoiceSubtype {
    Vertical,
    VerticalTwoCol,
    VerticalThreeCol,
    Horiz,
}

impl MultipleChoiceSubtype {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::VerticalTwoCol => "vertical_two_col",
            Self::VerticalThreeCol => "vertical_three_col",
            Self::Horiz => "horiz",
        }
    }
}

/// Address formats for demographic questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DemographicSubtype {
    International,
    Us,
}

impl DemographicSubtype {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::International => "international",
            Self::Us => "us",
        }
    }
}

/// Which parts a date/time question collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateTimeSubtype {
    Both,
    DateOnly,
    TimeOnly,
}

impl DateTimeSubtype {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::DateOnly => "date_only",
            Self::TimeOnly => "time_only",
        }
    }
}

/// Content kinds for presentation questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresentationSubtype {
    DescriptiveText,
    Image,
}

impl PresentationSubtype {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DescriptiveText => "descriptive_text",
            Self::Image => "image",
        }
    }
}

/// Fields shared by every question variant, flattened into each record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionBase {
    /// Stable identifier of the question.
    pub id: String,

    /// 1-based position among sibling questions.
    pub position: u32,

    /// Soft-delete/hide flag.
    pub visible: bool,

    /// Locator of the owning resource.
    pub href: String,

    pub headings: Vec<Heading>,

    /// Nullable on the wire; null means no sorting rule.
    #[serde(default)]
    pub sorting: Option<QuestionSorting>,

    /// Nullable on the wire; null means the question is not required.
    #[serde(default)]
    pub required: Option<QuestionRequired>,

    /// Nullable on the wire; null means no input-format constraint.
    #[serde(default)]
    pub validation: Option<QuestionValidation>,

    /// Only meaningful for ranking matrices; ignored downstream elsewhere.
    pub forced_ranking: bool,
}

/// A choose-one question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleChoiceQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    pub subtype: SingleChoiceSubtype,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_options: Option<SingleChoiceDisplayOptions>,

    pub answers: ChoiceAnswer,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_options: Option<ChoiceQuizOptions>,
}

/// A choose-any question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoiceQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    pub subtype: MultipleChoiceSubtype,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_options: Option<MultipleChoiceDisplayOptions>,

    pub answers: ChoiceAnswer,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_options: Option<ChoiceQuizOptions>,
}

/// A rating grid: rows rated on a (possibly emoji) scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingMatrixQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_options: Option<RatingMatrixDisplayOptions>,

    pub answers: RatingMatrixAnswer,
}

/// A ranking grid: rows ordered by preference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingMatrixQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    pub answers: RankingMatrixAnswer,
}

/// A grid of dropdown menus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuMatrixQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    pub answers: MenuMatrixAnswer,
}

/// A grid of choice cells, single- or multi-select per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceMatrixQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    pub answers: ChoiceMatrixAnswer,
}

/// Matrix questions, discriminated by subtype.
///
/// `single` and `multi` share one record shape; the variant keeps track of
/// which one was decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "subtype", rename_all = "snake_case")]
pub enum MatrixQuestion {
    Rating(RatingMatrixQuestion),
    Ranking(RankingMatrixQuestion),
    Menu(MenuMatrixQuestion),
    Single(ChoiceMatrixQuestion),
    Multi(ChoiceMatrixQuestion),
}

impl MatrixQuestion {
    /// The wire name of this matrix subtype.
    pub fn subtype_name(&self) -> &'static str {
        match self {
            Self::Rating(_) => "rating",
            Self::Ranking(_) => "ranking",
            Self::Menu(_) => "menu",
            Self::Single(_) => "single",
            Self::Multi(_) => "multi",
        }
    }

    /// The shared question fields.
    pub fn base(&self) -> &QuestionBase {
        match self {
            Self::Rating(question) => &question.base,
            Self::Ranking(question) => &question.base,
            Self::Menu(question) => &question.base,
            Self::Single(question) | Self::Multi(question) => &question.base,
        }
    }
}

/// A multi-field or numerical open-ended question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiOpenEndedQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_options: Option<MultiOpenEndedDisplayOptions>,

    pub answers: MultiOpenEndedAnswer,
}

/// A single-field open-ended question. Carries no answer container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleOpenEndedQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_options: Option<SingleOpenEndedDisplayOptions>,
}

/// A long-form essay question. Carries no answer container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EssayOpenEndedQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,
}

/// Open-ended questions, discriminated by subtype.
///
/// `multi` and `numerical` share one record shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "subtype", rename_all = "snake_case")]
pub enum OpenEndedQuestion {
    Multi(MultiOpenEndedQuestion),
    Numerical(MultiOpenEndedQuestion),
    Single(SingleOpenEndedQuestion),
    Essay(EssayOpenEndedQuestion),
}

impl OpenEndedQuestion {
    /// The wire name of this open-ended subtype.
    pub fn subtype_name(&self) -> &'static str {
        match self {
            Self::Multi(_) => "multi",
            Self::Numerical(_) => "numerical",
            Self::Single(_) => "single",
            Self::Essay(_) => "essay",
        }
    }

    /// The shared question fields.
    pub fn base(&self) -> &QuestionBase {
        match self {
            Self::Multi(question) | Self::Numerical(question) => &question.base,
            Self::Single(question) => &question.base,
            Self::Essay(question) => &question.base,
        }
    }
}

/// A name/address/contact block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemographicQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    pub subtype: DemographicSubtype,

    pub answers: DemographicAnswer,
}

/// A date and/or time question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateTimeQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    pub subtype: DateTimeSubtype,

    pub answers: DateTimeAnswer,
}

/// A non-interactive block of text or an image. Collects no answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationQuestion {
    #[serde(flatten)]
    pub base: QuestionBase,

    pub subtype: PresentationSubtype,

    /// Author-facing label, not shown to respondents.
    pub nickname: String,

    pub display_options: PresentationDisplayOptions,
}

/// A survey question: the closed union over the seven families.
///
/// The wire tag is the (`family`, `subtype`) pair. Encoding is plain serde;
/// decoding goes through [`Question::from_value`], which validates the pair
/// and the display-option discriminators before filling any record, so no
/// illegal combination ever produces a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "family", rename_all = "snake_case")]
pub enum Question {
    SingleChoice(SingleChoiceQuestion),
    MultipleChoice(MultipleChoiceQuestion),
    Matrix(MatrixQuestion),
    OpenEnded(OpenEndedQuestion),
    Demographic(DemographicQuestion),
    #[serde(rename = "datetime")]
    DateTime(DateTimeQuestion),
    Presentation(PresentationQuestion),
}

impl Question {
    /// Decode a question from a JSON value.
    ///
    /// Validates `family`, then `subtype` against the family's legal set,
    /// then the `display_options` discriminator pair for the narrowed
    /// variant, and only then decodes the full record. Pure: the input is
    /// not modified and no partial value survives an error.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let family: QuestionFamily = str_field(value, "family")?.parse()?;
        let subtype = str_field(value, "subtype")?;
        if !family.allows_subtype(subtype) {
            return Err(DecodeError::InvalidSubtype {
                family,
                subtype: subtype.to_string(),
            });
        }
        check_display_options(family, subtype, value)?;

        let question = match family {
            QuestionFamily::SingleChoice => {
                Self::SingleChoice(decode_record(value, "single choice question")?)
            }
            QuestionFamily::MultipleChoice => {
                Self::MultipleChoice(decode_record(value, "multiple choice question")?)
            }
            QuestionFamily::Matrix => Self::Matrix(match subtype {
                "rating" => MatrixQuestion::Rating(decode_record(value, "rating matrix question")?),
                "ranking" => {
                    MatrixQuestion::Ranking(decode_record(value, "ranking matrix question")?)
                }
                "menu" => MatrixQuestion::Menu(decode_record(value, "menu matrix question")?),
                "single" => MatrixQuestion::Single(decode_record(value, "choice matrix question")?),
                "multi" => MatrixQuestion::Multi(decode_record(value, "choice matrix question")?),
                _ => unreachable!("subtype was validated against the matrix set"),
            }),
            QuestionFamily::OpenEnded => Self::OpenEnded(match subtype {
                "multi" => {
                    OpenEndedQuestion::Multi(decode_record(value, "multi open-ended question")?)
                }
                "numerical" => {
                    OpenEndedQuestion::Numerical(decode_record(value, "numerical open-ended question")?)
                }
                "single" => {
                    OpenEndedQuestion::Single(decode_record(value, "single open-ended question")?)
                }
                "essay" => {
                    OpenEndedQuestion::Essay(decode_record(value, "essay open-ended question")?)
                }
                _ => unreachable!("subtype was validated against the open-ended set"),
            }),
            QuestionFamily::Demographic => {
                Self::Demographic(decode_record(value, "demographic question")?)
            }
            QuestionFamily::DateTime => {
                Self::DateTime(decode_record(value, "datetime question")?)
            }
            QuestionFamily::Presentation => {
                Self::Presentation(decode_record(value, "presentation question")?)
            }
        };
        Ok(question)
    }

    /// Decode a question from raw JSON text.
    pub fn from_json(raw: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(&value)
    }

    /// Encode this question to a JSON value.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Encode this question to JSON text.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// The family of this question.
    pub fn family(&self) -> QuestionFamily {
        match self {
            Self::SingleChoice(_) => QuestionFamily::SingleChoice,
            Self::MultipleChoice(_) => QuestionFamily::MultipleChoice,
            Self::Matrix(_) => QuestionFamily::Matrix,
            Self::OpenEnded(_) => QuestionFamily::OpenEnded,
            Self::Demographic(_) => QuestionFamily::Demographic,
            Self::DateTime(_) => QuestionFamily::DateTime,
            Self::Presentation(_) => QuestionFamily::Presentation,
        }
    }

    /// The wire name of this question's subtype.
    pub fn subtype_name(&self) -> &'static str {
        match self {
            Self::SingleChoice(question) => question.subtype.as_str(),
            Self::MultipleChoice(question) => question.subtype.as_str(),
            Self::Matrix(question) => question.subtype_name(),
            Self::OpenEnded(question) => question.subtype_name(),
            Self::Demographic(question) => question.subtype.as_str(),
            Self::DateTime(question) => question.subtype.as_str(),
            Self::Presentation(question) => question.subtype.as_str(),
        }
    }

    /// The shared question fields.
    pub fn base(&self) -> &QuestionBase {
        match self {
            Self::SingleChoice(question) => &question.base,
            Self::MultipleChoice(question) => &question.base,
            Self::Matrix(question) => question.base(),
            Self::OpenEnded(question) => question.base(),
            Self::Demographic(question) => &question.base,
            Self::DateTime(question) => &question.base,
            Self::Presentation(question) => &question.base,
        }
    }

    /// The stable identifier of this question.
    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// 1-based position among sibling questions.
    pub fn position(&self) -> u32 {
        self.base().position
    }

    /// Project this question into its listing-endpoint summary form.
    pub fn list_item(&self) -> QuestionListItem {
        let base = self.base();
        QuestionListItem {
            id: base.id.clone(),
            heading: base
                .headings
                .first()
                .map(|heading| heading.text().to_string())
                .unwrap_or_default(),
            position: base.position,
            href: base.href.clone(),
        }
    }
}

impl<'de> Deserialize<'de> for Question {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(&value).map_err(D::Error::custom)
    }
}

/// Compact summary form used by listing endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionListItem {
    pub id: String,

    /// First heading text; empty when the question carries none.
    pub heading: String,

    pub position: u32,

    pub href: String,
}

fn str_field<'v>(value: &'v Value, path: &'static str) -> Result<&'v str, DecodeError> {
    value
        .get(path)
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingField { path })
}

fn decode_record<T>(value: &Value, context: &'static str) -> Result<T, DecodeError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value.clone())
        .map_err(|source| DecodeError::Malformed { context, source })
}

/// Reject `display_options` payloads whose discriminator pair is not legal
/// for the narrowed variant. Absence is always legal and means the default
/// renderer. Presentation display options carry no discriminator and are
/// checked by shape during record decoding instead.
fn check_display_options(
    family: QuestionFamily,
    subtype: &str,
    value: &Value,
) -> Result<(), DecodeError> {
    let Some(display) = value.get("display_options") else {
        return Ok(());
    };
    if display.is_null() || family == QuestionFamily::Presentation {
        return Ok(());
    }

    let display_type = display
        .get("display_type")
        .and_then(Value::as_str)
        .ok_or(DecodeError::MissingField {
            path: "display_options.display_type",
        })?;
    let display_subtype = display
        .get("display_subtype")
        .and_then(Value::as_str)
        .unwrap_or("");

    let legal = match (family, subtype) {
        (QuestionFamily::SingleChoice | QuestionFamily::MultipleChoice, _) => {
            display_type == "image_choice" && display_subtype.is_empty()
        }
        (QuestionFamily::Matrix, "rating") => {
            display_type == "emoji"
                && matches!(display_subtype, "star" | "smiley" | "heart" | "thumb")
        }
        (QuestionFamily::OpenEnded, "multi" | "numerical") => {
            display_type == "slider" && display_subtype.is_empty()
        }
        (QuestionFamily::OpenEnded, "single") => {
            matches!(display_type, "slider" | "file_upload") && display_subtype.is_empty()
        }
        _ => false,
    };

    if legal {
        Ok(())
    } else {
        Err(DecodeError::InvalidDisplayOptions {
            family,
            subtype: subtype.to_string(),
            display_type: display_type.to_string(),
            display_subtype: display_subtype.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn family_wire_names_round_trip() {
        for family in QuestionFamily::ALL {
            assert_eq!(family.as_str().parse::<QuestionFamily>().unwrap(), family);
        }
        assert_eq!("datetime".parse::<QuestionFamily>().unwrap(), QuestionFamily::DateTime);
    }

    #[test]
    fn unknown_family_is_an_error() {
        let err = "slider".parse::<QuestionFamily>().unwrap_err();
        assert!(matches!(err, DecodeError::UnknownFamily { family } if family == "slider"));
    }

    #[test]
    fn subtype_table_is_closed() {
        assert!(QuestionFamily::SingleChoice.allows_subtype("menu"));
        assert!(!QuestionFamily::MultipleChoice.allows_subtype("menu"));
        assert!(QuestionFamily::Matrix.allows_subtype("ranking"));
        assert!(!QuestionFamily::SingleChoice.allows_subtype("essay"));
        assert!(!QuestionFamily::Presentation.allows_subtype("video"));
    }
}
