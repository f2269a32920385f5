pub mod error;
pub mod feedback;
pub mod request;
pub mod rubric;

pub use error::{CoreError, Result};
pub use feedback::{fields, GradedFeedback, LETTER_GRADE_UNAVAILABLE, UNKNOWN_TOPIC};
pub use request::GradeRequest;
pub use rubric::Rubric;
