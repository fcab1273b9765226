//! Domain models with field validation

pub mod comment;
pub mod paste;
pub mod validation;

pub use comment::CommentBody;
pub use paste::{CodeBody, Description, NewPaste, UserName};
pub use validation::ValidationError;
