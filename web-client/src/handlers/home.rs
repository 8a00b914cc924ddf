use crate::models::UserSummary;
use crate::AppState;
use askama::Template;
use axum::{extract::State, http::HeaderMap};
use service_core::observability::extract_request_id;

#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub message: String,
    pub users: Vec<UserSummary>,
}

/// Render the greeting and all profiles.
///
/// The two backends are queried concurrently. A failed fetch is logged and
/// leaves its part of the page empty.
pub async fn home(State(state): State<AppState>, headers: HeaderMap) -> HomeTemplate {
    let request_id = extract_request_id(&headers);
    let request_id = request_id.as_deref();

    let (greeting, users) = tokio::join!(
        state.backends.fetch_greeting(request_id),
        state.backends.fetch_users(request_id),
    );

    let message = greeting.map(|g| g.msg).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Error fetching greeting");
        String::new()
    });

    let users = users.unwrap_or_else(|e| {
        tracing::error!(error = %e, "Error fetching profiles");
        Vec::new()
    });

    HomeTemplate { message, users }
}
