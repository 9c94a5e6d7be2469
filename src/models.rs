use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use ts_rs::TS;
use utoipa::ToSchema;
use validator::Validate;

// --- Core Application Schemas (Mapped to Database) ---

/// Board
///
/// Represents a single bulletin-board post stored in the `public.boards` table.
/// This is the only persisted entity in the application.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, FromRow, Default)]
#[ts(export)]
pub struct Board {
    // Primary key, assigned by the database (SERIAL).
    pub id: i32,
    pub title: String,
    pub content: String,
    pub author: String,

    // Timestamp handling for database integration and JSON serialization.
    /// Stamped once at construction and immutable afterwards.
    #[ts(type = "string")]
    pub created_at: DateTime<Utc>,
    /// Absent until the post is edited; the repository sets it on update,
    /// so it is always >= `created_at`.
    #[ts(type = "string | null")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Board {
    /// new
    ///
    /// Constructs a not-yet-persisted post. `created_at` is stamped here so the
    /// stored timestamp reflects submission time rather than insert time; `id`
    /// holds a placeholder until the database assigns the real key.
    pub fn new(title: String, content: String, author: String) -> Self {
        Self {
            id: 0,
            title,
            content,
            author,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// --- Request Payloads (Input Schemas) ---

/// CreateBoardRequest
///
/// Input payload for submitting a new post (POST /boards).
///
/// Field constraints are declared with `validator` attributes and enforced at
/// the model-binding boundary, before any repository call: all three fields
/// are required and non-empty, `title` is capped at 100 characters and
/// `author` at 50. `content` is unbounded.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Validate, Default)]
#[ts(export)]
pub struct CreateBoardRequest {
    #[validate(length(min = 1, max = 100, message = "title must be 1-100 characters"))]
    pub title: String,

    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: String,

    #[validate(length(min = 1, max = 50, message = "author must be 1-50 characters"))]
    pub author: String,
}

/// UpdateBoardRequest
///
/// Partial update payload for editing an existing post (PUT /boards/{id}).
///
/// Uses `Option<T>` for all fields with `skip_serializing_if` so only the
/// provided fields travel in the JSON payload. Fields that are present must
/// still satisfy the same constraints as on creation.
#[derive(Debug, Clone, Serialize, Deserialize, TS, ToSchema, Validate, Default)]
#[ts(export)]
pub struct UpdateBoardRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100, message = "title must be 1-100 characters"))]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, message = "content must not be empty"))]
    pub content: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 50, message = "author must be 1-50 characters"))]
    pub author: Option<String>,
}
