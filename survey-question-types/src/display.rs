//! Rendering-hint records layered on top of a question's core shape.
//!
//! Which record a question may carry depends on its family and subtype; the
//! question decoder rejects combinations outside the legal set. A question
//! without display options falls back to the default renderer.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Label block shared by the richer display option records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayOptionsBase {
    pub show_display_number: bool,

    #[serde(default)]
    pub left_label_id: Option<String>,
    pub left_label: String,

    #[serde(default)]
    pub middle_label_id: Option<String>,
    pub middle_label: String,

    #[serde(default)]
    pub right_label_id: Option<String>,
    pub right_label: String,
}

/// The single legal `display_type` for emoji-rendered rating matrices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiDisplayType {
    #[default]
    Emoji,
}

/// The single legal `display_type` for image-choice rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageChoiceDisplayType {
    #[default]
    ImageChoice,
}

/// The single legal `display_type` for slider rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderDisplayType {
    #[default]
    Slider,
}

/// The single legal `display_type` for file-upload rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileUploadDisplayType {
    #[default]
    FileUpload,
}

/// Emoji scale used by rating matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmojiSubtype {
    Star,
    Smiley,
    Heart,
    Thumb,
}

impl EmojiSubtype {
    /// The wire name of this scale.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Star => "star",
            Self::Smiley => "smiley",
            Self::Heart => "heart",
            Self::Thumb => "thumb",
        }
    }
}

/// Emoji scale tuning for rating matrices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingCustomOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Ordered emoji identifiers, lowest to highest.
    pub option_set: Vec<String>,
}

/// Display options for rating matrices: an emoji scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingMatrixDisplayOptions {
    pub display_type: EmojiDisplayType,
    pub display_subtype: EmojiSubtype,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_options: Option<RatingCustomOptions>,

    #[serde(flatten)]
    pub base: DisplayOptionsBase,
}

/// Display options for single-choice questions rendered as image choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SingleChoiceDisplayOptions {
    pub display_type: ImageChoiceDisplayType,
}

/// Display options for multiple-choice questions rendered as image choices.
///
/// `custom_options` has no observed keys for this variant and stays an open
/// value rather than guessing a shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultipleChoiceDisplayOptions {
    pub display_type: ImageChoiceDisplayType,

    /// Empty on the wire for this variant.
    #[serde(default)]
    pub display_subtype: String,

    #[serde(default)]
    pub custom_options: Value,

    #[serde(flatten)]
    pub base: DisplayOptionsBase,
}

/// Slider tuning for single open-ended questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderCustomOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starting_position: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_size: Option<f64>,

    /// Behaviour flags such as `"adjusted_scale"` or `"hide_numeric_input"`.
    pub option_set: Vec<String>,
}

/// Display options for a slider-rendered single open-ended question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderDisplayOptions {
    pub display_type: SliderDisplayType,

    /// Empty on the wire for this variant.
    #[serde(default)]
    pub display_subtype: String,

    pub custom_options: SliderCustomOptions,

    #[serde(flatten)]
    pub base: DisplayOptionsBase,
}

/// Display options for a file-upload single open-ended question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileUploadDisplayOptions {
    pub display_type: FileUploadDisplayType,
}

/// Display options a single open-ended question may carry.
///
/// Discriminated by `display_type`: a slider input or a file upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SingleOpenEndedDisplayOptions {
    Slider(SliderDisplayOptions),
    FileUpload(FileUploadDisplayOptions),
}

impl SingleOpenEndedDisplayOptions {
    /// Check if this renders as a slider.
    pub fn is_slider(&self) -> bool {
        matches!(self, Self::Slider(_))
    }

    /// Check if this renders as a file upload.
    pub fn is_file_upload(&self) -> bool {
        matches!(self, Self::FileUpload(_))
    }
}

impl<'de> Deserialize<'de> for SingleOpenEndedDisplayOptions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        match value.get("display_type").and_then(Value::as_str) {
            Some("slider") => serde_json::from_value(value)
                .map(Self::Slider)
                .map_err(D::Error::custom),
            Some("file_upload") => serde_json::from_value(value)
                .map(Self::FileUpload)
                .map_err(D::Error::custom),
            Some(other) => Err(D::Error::custom(format!(
                "display type `{other}` is not valid for a single open-ended question"
            ))),
            None => Err(D::Error::missing_field("display_type")),
        }
    }
}

/// Display options for multi-field open-ended questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiOpenEndedDisplayOptions {
    pub display_type: SliderDisplayType,
}

/// Display options for presentation questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationDisplayOptions {
    pub show_display_number: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn labels() -> Value {
        json!({
            "show_display_number": true,
            "left_label_id": null,
            "left_label": "Poor",
            "middle_label_id": null,
            "middle_label": "",
            "right_label_id": null,
            "right_label": "Excellent"
        })
    }

    #[test]
    fn rating_display_narrows_emoji_subtype() {
        let mut payload = labels();
        payload["display_type"] = json!("emoji");
        payload["display_subtype"] = json!("heart");
        payload["custom_options"] = json!({"option_set": ["h1", "h2", "h3"]});

        let options: RatingMatrixDisplayOptions =
            serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(options.display_subtype, EmojiSubtype::Heart);
        assert_eq!(options.custom_options.unwrap().option_set.len(), 3);
    }

    #[test]
    fn rating_display_rejects_unknown_scale() {
        let mut payload = labels();
        payload["display_type"] = json!("emoji");
        payload["display_subtype"] = json!("circle");
        let result: Result<RatingMatrixDisplayOptions, _> = serde_json::from_value(payload);
        assert!(result.is_err());
    }

    #[test]
    fn single_open_ended_narrows_on_display_type() {
        let mut slider = labels();
        slider["display_type"] = json!("slider");
        slider["display_subtype"] = json!("");
        slider["custom_options"] = json!({
            "starting_position": 50.0,
            "step_size": 0.5,
            "option_set": ["adjusted_scale"]
        });
        let options: SingleOpenEndedDisplayOptions =
            serde_json::from_value(slider).unwrap();
        assert!(options.is_slider());

        let upload: SingleOpenEndedDisplayOptions =
            serde_json::from_value(json!({"display_type": "file_upload"})).unwrap();
        assert!(upload.is_file_upload());

        let bad: Result<SingleOpenEndedDisplayOptions, _> =
            serde_json::from_value(json!({"display_type": "emoji"}));
        assert!(bad.is_err());
    }
}
