//! Sample question payloads for the survey question model.
//!
//! Each module builds the wire-format JSON for one realistic survey and
//! decodes it into typed questions. Useful as executable documentation of
//! the payload shapes each family expects.

pub mod customer_feedback;
pub mod screening_quiz;

pub use customer_feedback::{customer_feedback_payloads, customer_feedback_questions};
pub use screening_quiz::{screening_quiz_payloads, screening_quiz_questions};
