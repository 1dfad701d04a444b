use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    model::api::{MessageDto, SaveUserDto, SaveUserResponseDto, SetGoldDto, SetLevelDto},
    service::user::UserService,
    state::AppState,
};

/// GET /user/{id} - Get a user's game-state as a signed credential
///
/// Reads the stored record and returns a signed credential string binding its
/// fields. Reading never creates a record.
///
/// # Path Parameters
/// - `id`: Messaging-platform user id (i64)
///
/// # Returns
/// - `200 OK`: JSON string containing the signed credential
/// - `404 Not Found`: No record exists for the id
/// - `500 Internal Server Error`: Database or signing error
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let user = user_service.get_user(id).await?;

    let token = state.token_issuer.issue(&user)?;

    Ok((StatusCode::OK, Json(token)))
}

/// POST /user/{id} - Save or update a user's game-state
///
/// Validates that username, level, and gold are all present (zero is a valid
/// value), then creates or fully overwrites the record and returns a signed
/// credential for the persisted state.
///
/// # Path Parameters
/// - `id`: Messaging-platform user id (i64)
///
/// # Request Body
/// - `{username, level, gold}`
///
/// # Returns
/// - `200 OK`: JSON `{message, token}`
/// - `400 Bad Request`: One or more required fields missing
/// - `500 Internal Server Error`: Database error or failed write
pub async fn save_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SaveUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = body.into_param(id)?;

    let user_service = UserService::new(&state.db);
    let user = user_service.save_user(param).await?;

    let token = state.token_issuer.issue(&user)?;

    Ok((
        StatusCode::OK,
        Json(SaveUserResponseDto {
            message: "User data saved successfully".to_string(),
            token,
        }),
    ))
}

/// GET /user/{id}/gold - Get a user's gold balance
///
/// # Path Parameters
/// - `id`: Messaging-platform user id (i64)
///
/// # Returns
/// - `200 OK`: Raw gold value
/// - `404 Not Found`: No record exists for the id
/// - `500 Internal Server Error`: Database error
pub async fn get_gold(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let gold = user_service.get_gold(id).await?;

    Ok((StatusCode::OK, Json(gold)))
}

/// POST /user/{id}/gold - Update a user's gold balance
///
/// Update-only: adjusts currency on an existing record, never creates one.
///
/// # Path Parameters
/// - `id`: Messaging-platform user id (i64)
///
/// # Request Body
/// - `{gold}`
///
/// # Returns
/// - `200 OK`: JSON `{message}`
/// - `400 Bad Request`: Gold field missing
/// - `404 Not Found`: No record exists for the id
/// - `500 Internal Server Error`: Database error or failed write
pub async fn set_gold(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SetGoldDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = body.into_param(id)?;

    let user_service = UserService::new(&state.db);
    user_service.set_gold(param).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Gold updated successfully".to_string(),
        }),
    ))
}

/// GET /user/{id}/level - Get a user's level
///
/// # Path Parameters
/// - `id`: Messaging-platform user id (i64)
///
/// # Returns
/// - `200 OK`: Raw level value
/// - `404 Not Found`: No record exists for the id
/// - `500 Internal Server Error`: Database error
pub async fn get_level(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let user_service = UserService::new(&state.db);
    let level = user_service.get_level(id).await?;

    Ok((StatusCode::OK, Json(level)))
}

/// POST /user/{id}/level - Update a user's level
///
/// Update-only: adjusts progression on an existing record, never creates one.
///
/// # Path Parameters
/// - `id`: Messaging-platform user id (i64)
///
/// # Request Body
/// - `{level}`
///
/// # Returns
/// - `200 OK`: JSON `{message}`
/// - `400 Bad Request`: Level field missing
/// - `404 Not Found`: No record exists for the id
/// - `500 Internal Server Error`: Database error or failed write
pub async fn set_level(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SetLevelDto>,
) -> Result<impl IntoResponse, AppError> {
    let param = body.into_param(id)?;

    let user_service = UserService::new(&state.db);
    user_service.set_level(param).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Level updated successfully".to_string(),
        }),
    ))
}
