//! Snapshot, upload and refresh handlers.

use axum::{
    Json,
    body::Bytes,
    extract::{Multipart, Path, State},
};
use tracing::{debug, info, instrument};

use crate::service::{IngestOutcome, RefreshReport};
use crate::stats::WrappedStats;

use super::super::{error::ApiError, state::AppState};

/// Upload response when the request carried no file.
pub const NO_SAVE_DATA: &str = "ERR_NO_SAVE_DATA";

/// Upload response when the file is not a finished save.
pub const INVALID_SAVE: &str = "ERR_INVALID_SAVE";

/// Current aggregate snapshot.
#[instrument(skip(state))]
pub async fn get_snapshot(State(state): State<AppState>) -> Result<Json<WrappedStats>, ApiError> {
    let service = state.service().clone();
    let stats = tokio::task::spawn_blocking(move || service.snapshot()).await??;
    Ok(Json(stats))
}

/// Snapshot with one submission attached.
#[instrument(skip(state))]
pub async fn get_save(
    State(state): State<AppState>,
    Path(hash): Path<String>,
) -> Result<Json<WrappedStats>, ApiError> {
    let service = state.service().clone();
    let lookup = hash.clone();
    let stats = tokio::task::spawn_blocking(move || service.snapshot_for(&lookup))
        .await??
        .ok_or_else(|| ApiError::save_not_found(&hash))?;
    Ok(Json(stats))
}

/// Accept one save upload.
///
/// The first part carrying a file name is the save. The reply is always a
/// plain-text token: the content hash, [`INVALID_SAVE`] or [`NO_SAVE_DATA`].
#[instrument(skip(state, multipart))]
pub async fn upload_save(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<String, ApiError> {
    let mut upload = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::invalid_multipart)?
    {
        if field.file_name().is_none() {
            continue;
        }
        let bytes = field
            .bytes()
            .await
            .map_err(ApiError::invalid_multipart)?;
        upload = Some(bytes);
        break;
    }

    let Some(bytes) = upload else {
        debug!("upload without a file part");
        return Ok(NO_SAVE_DATA.to_string());
    };

    let service = state.service().clone();
    let outcome = tokio::task::spawn_blocking(move || service.ingest(&bytes)).await??;
    info!(outcome = outcome.label(), hash = outcome.hash(), "upload handled");

    Ok(match outcome {
        IngestOutcome::Invalid(_) => INVALID_SAVE.to_string(),
        IngestOutcome::Duplicate(hash) | IngestOutcome::Accepted(hash) => hash,
    })
}

/// Rebuild every record from the backups. The body is the shared secret.
#[instrument(skip(state, body))]
pub async fn refresh(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RefreshReport>, ApiError> {
    let secret = state
        .refresh_secret()
        .ok_or_else(ApiError::refresh_not_configured)?;
    if !timing_safe_equal(body.trim_ascii_end(), secret.as_bytes()) {
        return Err(ApiError::unauthorized());
    }
    if !state.service().has_backup() {
        return Err(ApiError::backup_not_configured());
    }

    let service = state.service().clone();
    let report = tokio::task::spawn_blocking(move || service.refresh()).await??;
    Ok(Json(report))
}

fn timing_safe_equal(left: &[u8], right: &[u8]) -> bool {
    if left.len() != right.len() {
        return false;
    }
    let mut diff = 0u8;
    for (lhs, rhs) in left.iter().zip(right) {
        diff |= lhs ^ rhs;
    }
    diff == 0
}

#[cfg(test)]
mod tests {
    use super::timing_safe_equal;

    #[test]
    fn test_timing_safe_equal() {
        assert!(timing_safe_equal(b"hunter2", b"hunter2"));
        assert!(!timing_safe_equal(b"hunter2", b"hunter3"));
        assert!(!timing_safe_equal(b"hunter", b"hunter2"));
        assert!(timing_safe_equal(b"", b""));
    }
}
