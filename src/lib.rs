//! pastebord: HTTP persistence service for a shared pastebin
//!
//! Stores text pastes and the comments attached to them in PostgreSQL,
//! exposing list/create/update/delete operations over JSON. Deleting a
//! paste cascades to its comments at the service layer, inside one
//! transaction, because the schema does not enforce the cascade itself.

pub mod db;
pub mod http;
pub mod models;
