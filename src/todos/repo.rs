use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;

/// A todo item inside a list. Unlike lists, todos carry no owner column of
/// their own; ownership is resolved through the parent list. Each operation
/// takes `owner: Option<i64>`: `Some(uid)` joins through `lists.user_id`,
/// `None` addresses todos by id alone (the legacy contract, kept behind
/// `AppConfig::scope_todos_to_owner` for compatibility).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i64,
    pub name: String,
    pub completed: bool,
    pub list_id: i64,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Todo {
    /// Insert a todo under `list_id`. With an owner, the insert only happens
    /// when the list belongs to that owner; `None` result means the list is
    /// absent or not theirs.
    pub async fn create(
        db: &PgPool,
        owner: Option<i64>,
        list_id: i64,
        name: &str,
    ) -> sqlx::Result<Option<Todo>> {
        match owner {
            Some(user_id) => {
                sqlx::query_as::<_, Todo>(
                    r#"
                    INSERT INTO todos (name, list_id)
                    SELECT $1, l.id
                    FROM lists l
                    WHERE l.id = $2 AND l.user_id = $3
                    RETURNING id, name, completed, list_id, created_at, updated_at
                    "#,
                )
                .bind(name)
                .bind(list_id)
                .bind(user_id)
                .fetch_optional(db)
                .await
            }
            None => {
                sqlx::query_as::<_, Todo>(
                    r#"
                    INSERT INTO todos (name, list_id)
                    VALUES ($1, $2)
                    RETURNING id, name, completed, list_id, created_at, updated_at
                    "#,
                )
                .bind(name)
                .bind(list_id)
                .fetch_optional(db)
                .await
            }
        }
    }

    pub async fn find_by_id(
        db: &PgPool,
        owner: Option<i64>,
        id: i64,
    ) -> sqlx::Result<Option<Todo>> {
        match owner {
            Some(user_id) => {
                sqlx::query_as::<_, Todo>(
                    r#"
                    SELECT t.id, t.name, t.completed, t.list_id, t.created_at, t.updated_at
                    FROM todos t
                    JOIN lists l ON l.id = t.list_id
                    WHERE t.id = $1 AND l.user_id = $2
                    "#,
                )
                .bind(id)
                .bind(user_id)
                .fetch_optional(db)
                .await
            }
            None => {
                sqlx::query_as::<_, Todo>(
                    r#"
                    SELECT id, name, completed, list_id, created_at, updated_at
                    FROM todos
                    WHERE id = $1
                    "#,
                )
                .bind(id)
                .fetch_optional(db)
                .await
            }
        }
    }

    pub async fn find_all_by_list(
        db: &PgPool,
        owner: Option<i64>,
        list_id: i64,
    ) -> sqlx::Result<Vec<Todo>> {
        match owner {
            Some(user_id) => {
                sqlx::query_as::<_, Todo>(
                    r#"
                    SELECT t.id, t.name, t.completed, t.list_id, t.created_at, t.updated_at
                    FROM todos t
                    JOIN lists l ON l.id = t.list_id
                    WHERE t.list_id = $1 AND l.user_id = $2
                    ORDER BY t.created_at ASC
                    "#,
                )
                .bind(list_id)
                .bind(user_id)
                .fetch_all(db)
                .await
            }
            None => {
                sqlx::query_as::<_, Todo>(
                    r#"
                    SELECT id, name, completed, list_id, created_at, updated_at
                    FROM todos
                    WHERE list_id = $1
                    ORDER BY created_at ASC
                    "#,
                )
                .bind(list_id)
                .fetch_all(db)
                .await
            }
        }
    }

    /// Partial update; absent fields keep their current value.
    pub async fn update(
        db: &PgPool,
        owner: Option<i64>,
        id: i64,
        name: Option<&str>,
        completed: Option<bool>,
    ) -> sqlx::Result<u64> {
        let result = match owner {
            Some(user_id) => {
                sqlx::query(
                    r#"
                    UPDATE todos t
                    SET name = COALESCE($1, t.name),
                        completed = COALESCE($2, t.completed),
                        updated_at = now()
                    FROM lists l
                    WHERE t.id = $3 AND l.id = t.list_id AND l.user_id = $4
                    "#,
                )
                .bind(name)
                .bind(completed)
                .bind(id)
                .bind(user_id)
                .execute(db)
                .await?
            }
            None => {
                sqlx::query(
                    r#"
                    UPDATE todos
                    SET name = COALESCE($1, name),
                        completed = COALESCE($2, completed),
                        updated_at = now()
                    WHERE id = $3
                    "#,
                )
                .bind(name)
                .bind(completed)
                .bind(id)
                .execute(db)
                .await?
            }
        };
        Ok(result.rows_affected())
    }

    pub async fn delete(db: &PgPool, owner: Option<i64>, id: i64) -> sqlx::Result<u64> {
        let result = match owner {
            Some(user_id) => {
                sqlx::query(
                    r#"
                    DELETE FROM todos t
                    USING lists l
                    WHERE t.id = $1 AND l.id = t.list_id AND l.user_id = $2
                    "#,
                )
                .bind(id)
                .bind(user_id)
                .execute(db)
                .await?
            }
            None => {
                sqlx::query(r#"DELETE FROM todos WHERE id = $1"#)
                    .bind(id)
                    .execute(db)
                    .await?
            }
        };
        Ok(result.rows_affected())
    }
}
