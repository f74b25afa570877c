use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// A user-owned list. Every query below filters by `user_id`, so zero rows
/// means either "absent" or "someone else's" and callers cannot tell which.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct List {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl List {
    pub async fn create(db: &PgPool, user_id: i64, name: &str) -> sqlx::Result<List> {
        sqlx::query_as::<_, List>(
            r#"
            INSERT INTO lists (name, user_id)
            VALUES ($1, $2)
            RETURNING id, name, user_id, created_at, updated_at
            "#,
        )
        .bind(name)
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    pub async fn find_all_by_user(db: &PgPool, user_id: i64) -> sqlx::Result<Vec<List>> {
        sqlx::query_as::<_, List>(
            r#"
            SELECT id, name, user_id, created_at, updated_at
            FROM lists
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, user_id: i64, id: i64) -> sqlx::Result<Option<List>> {
        sqlx::query_as::<_, List>(
            r#"
            SELECT id, name, user_id, created_at, updated_at
            FROM lists
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    pub async fn update(db: &PgPool, user_id: i64, id: i64, name: &str) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE lists
            SET name = $1, updated_at = now()
            WHERE id = $2 AND user_id = $3
            "#,
        )
        .bind(name)
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(db: &PgPool, user_id: i64, id: i64) -> sqlx::Result<u64> {
        let result = sqlx::query(
            r#"
            DELETE FROM lists
            WHERE id = $1 AND user_id = $2
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected())
    }
}
