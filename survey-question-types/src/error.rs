use crate::QuestionFamily;

/// Error type for decoding question payloads.
///
/// Every failure is detected at the construction boundary; no partial
/// question value is ever produced. Nothing is retried or defaulted.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The `family` value is outside the closed seven-family set.
    #[error("unknown question family `{family}`")]
    UnknownFamily { family: String },

    /// The `subtype` value is not in the legal set for the given family.
    #[error("subtype `{subtype}` is not valid for family `{family}`")]
    InvalidSubtype {
        family: QuestionFamily,
        subtype: String,
    },

    /// The `display_type`/`display_subtype` pair is not legal for the
    /// enclosing question variant.
    #[error(
        "display options (`{display_type}`, `{display_subtype}`) are not valid for {family} {subtype} questions"
    )]
    InvalidDisplayOptions {
        family: QuestionFamily,
        subtype: String,
        display_type: String,
        display_subtype: String,
    },

    /// A discriminator field is missing or is not a string.
    #[error("missing or non-string field `{path}`")]
    MissingField { path: &'static str },

    /// A nested record failed to decode; the source names the offending field.
    #[error("malformed {context}: {source}")]
    Malformed {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The input is not valid JSON at all.
    #[error("invalid JSON: {0}")]
    Syntax(#[from] serde_json::Error),
}

impl DecodeError {
    /// Check if this error rejects the family/subtype pairing.
    pub fn is_invalid_subtype(&self) -> bool {
        matches!(self, Self::InvalidSubtype { .. })
    }

    /// Check if this error rejects the display-option discriminator pair.
    pub fn is_invalid_display_options(&self) -> bool {
        matches!(self, Self::InvalidDisplayOptions { .. })
    }
}
