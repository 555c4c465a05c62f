use axum::Json;
use axum::extract::State;

use crate::domain::UploadRecord;
use crate::presentation::state::AppState;

use super::client_identity::ClientIdentity;

/// Uploads recorded for the calling client, newest first. Empty when
/// history is disabled.
pub async fn history_handler(
    State(state): State<AppState>,
    client: ClientIdentity,
) -> Json<Vec<UploadRecord>> {
    let records = match &state.history {
        Some(history) => history.list(&client.0).await,
        None => Vec::new(),
    };
    Json(records)
}
