//! Paste field validation
//!
//! Each required field gets a validated newtype so a statement is never
//! built from an empty or oversized value.

use super::ValidationError;

/// Maximum length for author labels
const MAX_USER_NAME_LEN: usize = 64;

/// Maximum length for paste descriptions
const MAX_DESCRIPTION_LEN: usize = 512;

/// Maximum length for the code body
const MAX_CODE_LEN: usize = 262_144;

/// Validated author label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "user_name" });
        }
        if s.len() > MAX_USER_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "user_name",
                max: MAX_USER_NAME_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated paste description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description(String);

impl Description {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty {
                field: "description",
            });
        }
        if s.len() > MAX_DESCRIPTION_LEN {
            return Err(ValidationError::TooLong {
                field: "description",
                max: MAX_DESCRIPTION_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated code body.
///
/// Unlike the other fields this one stays mutable after creation, so it is
/// validated both at paste creation and on every code update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBody(String);

impl CodeBody {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "code" });
        }
        if s.len() > MAX_CODE_LEN {
            return Err(ValidationError::TooLong {
                field: "code",
                max: MAX_CODE_LEN,
            });
        }
        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A fully validated paste ready for insertion
#[derive(Debug, Clone)]
pub struct NewPaste {
    pub user_name: UserName,
    pub description: Description,
    pub code: CodeBody,
}
