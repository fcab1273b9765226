//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Positional parameter binding, never string interpolation
//! - Transactions for multi-step writes (paste delete cascades manually)
//! - JOINs for scoped list operations

pub mod comments;
pub mod pastes;

pub use comments::{Comment, CommentRepo};
pub use pastes::{DbError, Paste, PasteRepo};
