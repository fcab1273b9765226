//! Paste repository
//!
//! Handles paste CRUD with:
//! - Listing ordered newest-first (paste_id descending)
//! - Transactional cascade delete (comments first, then the paste)

use sqlx::{FromRow, PgPool};

use crate::models::{CodeBody, NewPaste};

/// Paste record from database
#[derive(Debug, Clone, FromRow)]
pub struct Paste {
    pub paste_id: i32,
    pub user_name: String,
    pub description: String,
    pub code: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Paste repository
pub struct PasteRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PasteRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all pastes, newest first.
    pub async fn list(&self) -> Result<Vec<Paste>, DbError> {
        let pastes = sqlx::query_as(
            r#"
            SELECT paste_id, user_name, description, code
            FROM pastes
            ORDER BY paste_id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(pastes)
    }

    /// Insert a paste; the store assigns `paste_id`.
    pub async fn create(&self, paste: NewPaste) -> Result<Paste, DbError> {
        let paste: Paste = sqlx::query_as(
            r#"
            INSERT INTO pastes (user_name, description, code)
            VALUES ($1, $2, $3)
            RETURNING paste_id, user_name, description, code
            "#,
        )
        .bind(paste.user_name.as_str())
        .bind(paste.description.as_str())
        .bind(paste.code.as_str())
        .fetch_one(self.pool)
        .await?;

        Ok(paste)
    }

    /// Update the code body of a paste.
    ///
    /// Returns the number of rows affected; zero when no paste matches,
    /// which callers treat as a silent no-op.
    pub async fn update_code(&self, paste_id: i32, code: CodeBody) -> Result<u64, DbError> {
        let result = sqlx::query("UPDATE pastes SET code = $1 WHERE paste_id = $2")
            .bind(code.as_str())
            .bind(paste_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Delete a paste and every comment attached to it.
    ///
    /// The schema carries no ON DELETE CASCADE, so both deletes run here,
    /// comments first, inside one transaction: either the paste and its
    /// comments all go, or none do. Deleting a paste that does not exist
    /// succeeds with zero rows affected.
    pub async fn delete(&self, paste_id: i32) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM comments WHERE paste_id = $1")
            .bind(paste_id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM pastes WHERE paste_id = $1")
            .bind(paste_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Description, UserName};

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        crate::db::create_pool(&url, true)
            .await
            .expect("pool creation failed")
    }

    fn sample(code: &str) -> NewPaste {
        NewPaste {
            user_name: UserName::new("ada").unwrap(),
            description: Description::new("repo test paste").unwrap(),
            code: CodeBody::new(code).unwrap(),
        }
    }

    // Integration tests - run with DATABASE_URL set
    // cargo test -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_list_round_trips() {
        let pool = test_pool().await;
        let repo = PasteRepo::new(&pool);

        let created = repo.create(sample("fn main() {}")).await.unwrap();
        assert_eq!(created.user_name, "ada");
        assert_eq!(created.code, "fn main() {}");

        let listed = repo.list().await.unwrap();
        let found = listed
            .iter()
            .find(|p| p.paste_id == created.paste_id)
            .expect("created paste missing from listing");
        assert_eq!(found.description, "repo test paste");

        repo.delete(created.paste_id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_newest_first() {
        let pool = test_pool().await;
        let repo = PasteRepo::new(&pool);

        let first = repo.create(sample("one")).await.unwrap();
        let second = repo.create(sample("two")).await.unwrap();
        assert!(second.paste_id > first.paste_id);

        let listed = repo.list().await.unwrap();
        for pair in listed.windows(2) {
            assert!(pair[0].paste_id > pair[1].paste_id);
        }

        repo.delete(first.paste_id).await.unwrap();
        repo.delete(second.paste_id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_paste_is_noop() {
        let pool = test_pool().await;
        let repo = PasteRepo::new(&pool);

        let affected = repo
            .update_code(-1, CodeBody::new("ghost").unwrap())
            .await
            .unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_cascades_to_comments() {
        use crate::db::repos::CommentRepo;
        use crate::models::CommentBody;

        let pool = test_pool().await;
        let pastes = PasteRepo::new(&pool);
        let comments = CommentRepo::new(&pool);

        let paste = pastes.create(sample("to be deleted")).await.unwrap();
        comments
            .create(paste.paste_id, CommentBody::new("first").unwrap())
            .await
            .unwrap();
        comments
            .create(paste.paste_id, CommentBody::new("second").unwrap())
            .await
            .unwrap();

        let affected = pastes.delete(paste.paste_id).await.unwrap();
        assert_eq!(affected, 1);

        let remaining = comments.list_for_paste(paste.paste_id).await.unwrap();
        assert!(remaining.is_empty());

        let listed = pastes.list().await.unwrap();
        assert!(listed.iter().all(|p| p.paste_id != paste.paste_id));
    }
}
