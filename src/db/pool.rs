//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use sqlx::PgPool;
use std::str::FromStr;

/// Default maximum connections for the pool.
/// Kept low; the service is a small single-instance backend.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// `local` selects the deployment target (local database vs hosted).
/// Both targets currently connect with `PgSslMode::Prefer`: TLS is used
/// when the server offers it, but certificates are never verified.
// TODO: switch the hosted branch to VerifyFull once the deployment has a
// trusted CA certificate.
pub async fn create_pool(database_url: &str, local: bool) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, local, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    local: bool,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    let options = PgConnectOptions::from_str(database_url)?.ssl_mode(ssl_mode(local));

    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// SSL mode for the given deployment target.
///
/// Both targets currently resolve to the same permissive mode; the toggle
/// stays in the signature for when the hosted branch diverges.
fn ssl_mode(_local: bool) -> PgSslMode {
    PgSslMode::Prefer
}
