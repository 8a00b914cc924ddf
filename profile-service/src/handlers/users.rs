use crate::dtos::{AddUserRequest, MessageResponse, UserResponse};
use crate::error::ProfileError;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

pub async fn add_user(
    State(state): State<AppState>,
    payload: Result<Json<AddUserRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ProfileError> {
    // An unreadable body is handled like an empty one.
    let request = payload
        .map(|Json(request)| request)
        .unwrap_or_else(|rejection| {
            tracing::debug!(reason = %rejection.body_text(), "Ignoring unreadable request body");
            AddUserRequest::default()
        });
    let user = request.into_new_user()?;

    // Duplicates are allowed: the lookup is informational and never gates the insert.
    let existing = state
        .users
        .find_by_name(&user.name)
        .await
        .map_err(ProfileError::AddFailed)?;

    let name = user.name.clone();
    let id = state
        .users
        .insert(user)
        .await
        .map_err(ProfileError::AddFailed)?;

    tracing::info!(
        user_id = %id,
        name = %name,
        existing_matches = existing.len(),
        "User added"
    );

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            msg: "User Added Successfully",
        }),
    ))
}

pub async fn fetch_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ProfileError> {
    let users = state
        .users
        .list_all()
        .await
        .map_err(ProfileError::FetchFailed)?;

    tracing::debug!(count = users.len(), "Fetched users");

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
