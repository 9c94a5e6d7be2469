use crate::{
    AppState,
    models::{self, Board, CreateBoardRequest, UpdateBoardRequest},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use validator::{Validate, ValidationErrors};

// --- Validation Rejection ---

/// validation_rejection
///
/// Maps declarative field-constraint failures to a 422 response carrying the
/// serialized `ValidationErrors` map, keyed by field name. The payload never
/// reaches the repository when this fires.
fn validation_rejection(errors: ValidationErrors) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(serde_json::json!({ "errors": errors })),
    )
        .into_response()
}

// --- Handlers ---

/// list_boards
///
/// [Default Route] Lists every post for the board index, newest first.
/// This is the action the bare `/` entry point resolves to.
#[utoipa::path(
    get,
    path = "/boards",
    responses((status = 200, description = "All posts", body = [Board]))
)]
pub async fn list_boards(State(state): State<AppState>) -> Json<Vec<models::Board>> {
    let boards = state.repo.list_boards().await;
    Json(boards)
}

/// get_board
///
/// Retrieves a single post's details by ID.
#[utoipa::path(
    get,
    path = "/boards/{id}",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 200, description = "Found", body = Board),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get_board(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<models::Board>, StatusCode> {
    match state.repo.get_board(id).await {
        Some(board) => Ok(Json(board)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

/// create_board
///
/// Handles the submission of a new post.
///
/// *Validation*: the payload is checked against the declarative constraints
/// on `CreateBoardRequest` before anything touches persistence; a failure is
/// rejected with 422 and a field-error body. On success the stored row is
/// returned with its database-assigned id, `updated_at` still unset.
#[utoipa::path(
    post,
    path = "/boards",
    request_body = CreateBoardRequest,
    responses(
        (status = 201, description = "Created", body = Board),
        (status = 422, description = "Validation Failed")
    )
)]
pub async fn create_board(
    State(state): State<AppState>,
    Json(payload): Json<CreateBoardRequest>,
) -> Result<(StatusCode, Json<models::Board>), Response> {
    if let Err(errors) = payload.validate() {
        return Err(validation_rejection(errors));
    }

    let board = Board::new(payload.title, payload.content, payload.author);
    match state.repo.create_board(board).await {
        Some(stored) => Ok((StatusCode::CREATED, Json(stored))),
        // Insert failures are already logged at the repository layer.
        None => Err(StatusCode::INTERNAL_SERVER_ERROR.into_response()),
    }
}

/// update_board
///
/// Edits an existing post. Only the fields present in the payload are
/// overwritten; the repository stamps `updated_at` on every successful edit.
#[utoipa::path(
    put,
    path = "/boards/{id}",
    params(("id" = i32, Path, description = "Post ID")),
    request_body = UpdateBoardRequest,
    responses(
        (status = 200, description = "Updated", body = Board),
        (status = 404, description = "Not Found"),
        (status = 422, description = "Validation Failed")
    )
)]
pub async fn update_board(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBoardRequest>,
) -> Result<Json<models::Board>, Response> {
    if let Err(errors) = payload.validate() {
        return Err(validation_rejection(errors));
    }

    match state.repo.update_board(id, payload).await {
        Some(board) => Ok(Json(board)),
        None => Err(StatusCode::NOT_FOUND.into_response()),
    }
}

/// delete_board
///
/// Permanently removes a post.
#[utoipa::path(
    delete,
    path = "/boards/{id}",
    params(("id" = i32, Path, description = "Post ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete_board(State(state): State<AppState>, Path(id): Path<i32>) -> StatusCode {
    if state.repo.delete_board(id).await {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
