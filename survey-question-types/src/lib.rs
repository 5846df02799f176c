//! Canonical data model for survey question definitions.
//!
//! A question is discriminated twice on the wire: by `family` (seven closed
//! kinds) and by a family-scoped `subtype`. This crate models that hierarchy
//! as nested sum types, together with the flat records questions aggregate:
//! - [`Heading`] - prompt text or a random-assignment bucket
//! - [`QuestionSorting`], [`QuestionRequired`], [`QuestionValidation`] -
//!   the three optional rule records on every question
//! - [`Choice`] and [`Row`] - option-list entries
//! - the display-options hierarchy - rendering hints keyed by
//!   `display_type`/`display_subtype`
//! - quiz scoring metadata
//!
//! Decoding is strict: an unknown family, a subtype outside its family's
//! legal set, or a display-option pair foreign to the narrowed variant is a
//! [`DecodeError`], never a silently defaulted value. Encoding a decoded
//! question reproduces the input payload, including string-typed numeric
//! fields which are never parsed here.
//!
//! Answer-option payloads belong to the external answer model and are
//! carried opaquely; see the [answer containers](ChoiceAnswer).

mod answer;
pub use answer::{
    ChoiceAnswer, ChoiceMatrixAnswer, DateTimeAnswer, DemographicAnswer, MenuMatrixAnswer,
    MultiOpenEndedAnswer, RankingMatrixAnswer, RatingMatrixAnswer,
};

mod choice;
pub use choice::{Answers, Choice, Row};

mod display;
pub use display::{
    DisplayOptionsBase, EmojiDisplayType, EmojiSubtype, FileUploadDisplayOptions,
    FileUploadDisplayType, ImageChoiceDisplayType, MultiOpenEndedDisplayOptions,
    MultipleChoiceDisplayOptions, PresentationDisplayOptions, RatingCustomOptions,
    RatingMatrixDisplayOptions, SingleChoiceDisplayOptions, SingleOpenEndedDisplayOptions,
    SliderCustomOptions, SliderDisplayOptions, SliderDisplayType,
};

mod error;
pub use error::DecodeError;

mod heading;
pub use heading::{Heading, HeadingImage, NormalHeading, RandomAssignment, RandomAssignmentHeading};

mod question;
pub use question::{
    ChoiceMatrixQuestion, DateTimeQuestion, DateTimeSubtype, DemographicQuestion,
    DemographicSubtype, EssayOpenEndedQuestion, MatrixQuestion, MenuMatrixQuestion,
    MultiOpenEndedQuestion, MultipleChoiceQuestion, MultipleChoiceSubtype, OpenEndedQuestion,
    PresentationQuestion, PresentationSubtype, Question, QuestionBase, QuestionFamily,
    QuestionListItem, RankingMatrixQuestion, RatingMatrixQuestion, SingleChoiceQuestion,
    SingleChoiceSubtype, SingleOpenEndedQuestion,
};

mod quiz;
pub use quiz::{ChoiceQuizOptions, QuizFeedback, QuizOptions};

mod rules;
pub use rules::{
    QuestionRequired, QuestionRequiredType, QuestionSorting, QuestionSortingType,
    QuestionValidation, QuestionValidationType,
};
