use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// An image attached to a question heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingImage {
    pub url: String,
}

/// A plain prompt heading: free text plus an optional image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalHeading {
    /// The prompt text shown to the respondent.
    pub heading: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<HeadingImage>,
}

/// A random bucket used for A/B-style assignment at a heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomAssignment {
    /// Share of respondents routed into this bucket, 0 to 100.
    pub percent: f64,

    /// Position of this bucket among its siblings.
    pub position: u32,

    /// Variable name the assignment is recorded under.
    pub variable_name: String,

    pub id: String,
}

/// A heading that routes respondents into a random bucket instead of
/// showing prompt text. Its `heading` string is always empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomAssignmentHeading {
    /// Always the empty string; kept on the wire for shape compatibility.
    heading: String,

    /// Describes the variant for survey authors.
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<HeadingImage>,

    pub random_assignment: RandomAssignment,
}

impl RandomAssignmentHeading {
    /// Create a new random-assignment heading.
    pub fn new(description: impl Into<String>, random_assignment: RandomAssignment) -> Self {
        Self {
            heading: String::new(),
            description: description.into(),
            image: None,
            random_assignment,
        }
    }

    /// Attach an image.
    pub fn with_image(mut self, image: HeadingImage) -> Self {
        self.image = Some(image);
        self
    }

    /// The heading text, which is always empty for this shape.
    pub fn heading(&self) -> &str {
        &self.heading
    }
}

/// The prompt block shown above a question.
///
/// The wire format carries no tag; the presence of the `random_assignment`
/// key decides the shape. A random-assignment heading with non-empty heading
/// text is rejected at decode time rather than coerced.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Heading {
    RandomAssignment(RandomAssignmentHeading),
    Normal(NormalHeading),
}

impl Heading {
    /// Create a normal text heading.
    pub fn normal(text: impl Into<String>) -> Self {
        Self::Normal(NormalHeading {
            heading: text.into(),
            image: None,
        })
    }

    /// The prompt text. Empty for random-assignment headings.
    pub fn text(&self) -> &str {
        match self {
            Self::Normal(heading) => &heading.heading,
            Self::RandomAssignment(_) => "",
        }
    }

    /// The attached image, if any.
    pub fn image(&self) -> Option<&HeadingImage> {
        match self {
            Self::Normal(heading) => heading.image.as_ref(),
            Self::RandomAssignment(heading) => heading.image.as_ref(),
        }
    }

    /// The author-facing description, present only on random-assignment headings.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Normal(_) => None,
            Self::RandomAssignment(heading) => Some(&heading.description),
        }
    }

    /// Check if this heading routes respondents into a random bucket.
    pub fn is_random_assignment(&self) -> bool {
        matches!(self, Self::RandomAssignment(_))
    }
}

impl<'de> Deserialize<'de> for Heading {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        if value.get("random_assignment").is_some() {
            let heading: RandomAssignmentHeading =
                serde_json::from_value(value).map_err(D::Error::custom)?;
            if !heading.heading.is_empty() {
                return Err(D::Error::custom(
                    "a heading with a random assignment must have an empty heading string",
                ));
            }
            Ok(Self::RandomAssignment(heading))
        } else {
            serde_json::from_value(value)
                .map(Self::Normal)
                .map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normal_heading() {
        let heading: Heading =
            serde_json::from_value(json!({"heading": "How satisfied are you?"})).unwrap();
        assert!(!heading.is_random_assignment());
        assert_eq!(heading.text(), "How satisfied are you?");
        assert_eq!(heading.description(), None);
    }

    #[test]
    fn random_assignment_heading_has_empty_text() {
        let heading: Heading = serde_json::from_value(json!({
            "heading": "",
            "description": "variant A",
            "random_assignment": {
                "percent": 50.0,
                "position": 1,
                "variable_name": "bucket",
                "id": "ra1"
            }
        }))
        .unwrap();
        assert!(heading.is_random_assignment());
        assert_eq!(heading.text(), "");
        assert_eq!(heading.description(), Some("variant A"));
    }

    #[test]
    fn random_assignment_with_nonempty_text_is_rejected() {
        let result: Result<Heading, _> = serde_json::from_value(json!({
            "heading": "oops",
            "description": "variant A",
            "random_assignment": {
                "percent": 50.0,
                "position": 1,
                "variable_name": "bucket",
                "id": "ra1"
            }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn round_trip_keeps_image_absent() {
        let payload = json!({"heading": "Hello"});
        let heading: Heading = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(serde_json::to_value(&heading).unwrap(), payload);
    }
}
