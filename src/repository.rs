use crate::models::{Board, UpdateBoardRequest};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use std::sync::Arc;

/// BoardRepository Trait
///
/// Defines the abstract contract for all persistence operations on posts.
/// Handlers interact with the data layer through this trait without knowing
/// the specific implementation (Postgres, Mock, etc.).
///
/// **Send + Sync + async_trait** are required to make the trait object
/// (`Arc<dyn BoardRepository>`) safely shareable across Axum's asynchronous
/// task boundaries.
#[async_trait]
pub trait BoardRepository: Send + Sync {
    // Full listing for the board index, newest posts first.
    async fn list_boards(&self) -> Vec<Board>;

    // Single-post retrieval; None when the id does not exist.
    async fn get_board(&self, id: i32) -> Option<Board>;

    // Inserts a constructed post and returns the stored row, now carrying
    // the database-assigned id. None on insert failure.
    async fn create_board(&self, board: Board) -> Option<Board>;

    // Partial edit. Sets `updated_at` as a side effect; `created_at` is
    // never touched. None when the id does not exist.
    async fn update_board(&self, id: i32, req: UpdateBoardRequest) -> Option<Board>;

    // Returns true if a row was actually removed.
    async fn delete_board(&self, id: i32) -> bool;
}

/// RepositoryState
///
/// The concrete type used to share the persistence layer access across the
/// application state.
pub type RepositoryState = Arc<dyn BoardRepository>;

/// PostgresBoardRepository
///
/// The concrete implementation of the `BoardRepository` trait, backed by the
/// PostgreSQL database.
pub struct PostgresBoardRepository {
    pool: PgPool,
}

impl PostgresBoardRepository {
    /// Creates a new repository instance using the initialized connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    /// list_boards
    ///
    /// Retrieves every post for the index view, most recent submission first.
    async fn list_boards(&self) -> Vec<Board> {
        sqlx::query_as::<_, Board>(
            r#"SELECT id, title, content, author, created_at, updated_at
               FROM boards
               ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("list_boards error: {:?}", e);
            vec![]
        })
    }

    /// get_board
    ///
    /// Simple retrieval of a post by its primary key.
    async fn get_board(&self, id: i32) -> Option<Board> {
        sqlx::query_as::<_, Board>(
            r#"SELECT id, title, content, author, created_at, updated_at
               FROM boards
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("get_board error: {:?}", e);
            None
        })
    }

    /// create_board
    ///
    /// Inserts a new post. The `created_at` value is the one stamped by
    /// `Board::new` at construction, not the insert time, and `updated_at`
    /// starts out NULL.
    async fn create_board(&self, board: Board) -> Option<Board> {
        sqlx::query_as::<_, Board>(
            r#"INSERT INTO boards (title, content, author, created_at)
               VALUES ($1, $2, $3, $4)
               RETURNING id, title, content, author, created_at, updated_at"#,
        )
        .bind(board.title)
        .bind(board.content)
        .bind(board.author)
        .bind(board.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| tracing::error!("create_board error: {:?}", e))
        .ok()
    }

    /// update_board
    ///
    /// Edits a post. Uses the PostgreSQL `COALESCE` function to handle the
    /// `Option<T>` fields, only overwriting a column when the corresponding
    /// field in `req` is `Some`. The `updated_at` stamp is bound from the
    /// application clock — the same clock that stamped `created_at` in
    /// `Board::new` — so an edit can never carry a timestamp preceding the
    /// creation one.
    async fn update_board(&self, id: i32, req: UpdateBoardRequest) -> Option<Board> {
        sqlx::query_as::<_, Board>(
            r#"
            UPDATE boards
            SET title = COALESCE($2, title),
                content = COALESCE($3, content),
                author = COALESCE($4, author),
                updated_at = $5
            WHERE id = $1
            RETURNING id, title, content, author, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(req.title)
        .bind(req.content)
        .bind(req.author)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("update_board error: {:?}", e);
            None
        })
    }

    /// delete_board
    ///
    /// Permanently removes a post. True only if a row was affected.
    async fn delete_board(&self, id: i32) -> bool {
        match sqlx::query("DELETE FROM boards WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
        {
            Ok(res) => res.rows_affected() > 0,
            Err(e) => {
                tracing::error!("delete_board error: {:?}", e);
                false
            }
        }
    }
}
