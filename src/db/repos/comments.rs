//! Comment repository
//!
//! Comments belong to exactly one paste. Creation does not pre-check that
//! the paste exists; a dangling `paste_id` is rejected by the foreign key
//! and surfaces as a store error.

use sqlx::{FromRow, PgPool};

use super::DbError;
use crate::models::CommentBody;

/// Comment record from database
#[derive(Debug, Clone, FromRow)]
pub struct Comment {
    pub comment_id: i32,
    pub comment: String,
    pub paste_id: i32,
}

/// Comment repository
pub struct CommentRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CommentRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Attach a comment to a paste; the store assigns `comment_id`.
    pub async fn create(&self, paste_id: i32, comment: CommentBody) -> Result<Comment, DbError> {
        let comment: Comment = sqlx::query_as(
            r#"
            INSERT INTO comments (comment, paste_id)
            VALUES ($1, $2)
            RETURNING comment_id, comment, paste_id
            "#,
        )
        .bind(comment.as_str())
        .bind(paste_id)
        .fetch_one(self.pool)
        .await?;

        Ok(comment)
    }

    /// List comments for a paste.
    ///
    /// Joins against pastes so only comments whose paste exists come back;
    /// an unknown `paste_id` yields an empty list, not an error.
    pub async fn list_for_paste(&self, paste_id: i32) -> Result<Vec<Comment>, DbError> {
        let comments = sqlx::query_as(
            r#"
            SELECT c.comment_id, c.comment, c.paste_id
            FROM comments c
            JOIN pastes p ON p.paste_id = c.paste_id
            WHERE p.paste_id = $1
            ORDER BY c.comment_id ASC
            "#,
        )
        .bind(paste_id)
        .fetch_all(self.pool)
        .await?;

        Ok(comments)
    }

    /// Delete the comment matching both `paste_id` and `comment_id`.
    ///
    /// A delete that touches no row is `DbError::NotFound`; the error
    /// mapping layer turns that into a 404.
    pub async fn delete(&self, paste_id: i32, comment_id: i32) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM comments WHERE paste_id = $1 AND comment_id = $2")
            .bind(paste_id)
            .bind(comment_id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound {
                resource: "comment",
                id: comment_id.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repos::PasteRepo;
    use crate::models::{CodeBody, Description, NewPaste, UserName};

    async fn test_pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        crate::db::create_pool(&url, true)
            .await
            .expect("pool creation failed")
    }

    async fn seed_paste(pool: &PgPool) -> i32 {
        PasteRepo::new(pool)
            .create(NewPaste {
                user_name: UserName::new("ada").unwrap(),
                description: Description::new("comment test paste").unwrap(),
                code: CodeBody::new("fn main() {}").unwrap(),
            })
            .await
            .unwrap()
            .paste_id
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_list_for_paste() {
        let pool = test_pool().await;
        let repo = CommentRepo::new(&pool);
        let paste_id = seed_paste(&pool).await;

        let created = repo
            .create(paste_id, CommentBody::new("hi").unwrap())
            .await
            .unwrap();
        assert_eq!(created.paste_id, paste_id);

        let listed = repo.list_for_paste(paste_id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].comment, "hi");

        PasteRepo::new(&pool).delete(paste_id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_for_missing_paste_is_store_error() {
        let pool = test_pool().await;
        let repo = CommentRepo::new(&pool);

        let err = repo
            .create(-1, CommentBody::new("orphan").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Sqlx(_)));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_twice_is_not_found() {
        let pool = test_pool().await;
        let repo = CommentRepo::new(&pool);
        let paste_id = seed_paste(&pool).await;

        let created = repo
            .create(paste_id, CommentBody::new("once").unwrap())
            .await
            .unwrap();

        repo.delete(paste_id, created.comment_id).await.unwrap();
        let err = repo
            .delete(paste_id, created.comment_id)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DbError::NotFound {
                resource: "comment",
                ..
            }
        ));

        PasteRepo::new(&pool).delete(paste_id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_requires_both_ids_to_match() {
        let pool = test_pool().await;
        let repo = CommentRepo::new(&pool);
        let paste_id = seed_paste(&pool).await;

        let created = repo
            .create(paste_id, CommentBody::new("scoped").unwrap())
            .await
            .unwrap();

        // Wrong paste scope leaves the row in place.
        let err = repo
            .delete(paste_id + 1, created.comment_id)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        repo.delete(paste_id, created.comment_id).await.unwrap();

        PasteRepo::new(&pool).delete(paste_id).await.unwrap();
    }
}
