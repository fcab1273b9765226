//! Comment body validation

use super::ValidationError;

/// Maximum length for a comment
const MAX_COMMENT_LEN: usize = 4096;

/// Validated comment text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentBody(String);

impl CommentBody {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "comment" });
        }
        if s.len() > MAX_COMMENT_LEN {
            return Err(ValidationError::TooLong {
                field: "comment",
                max: MAX_COMMENT_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
