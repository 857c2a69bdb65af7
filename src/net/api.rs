//! Typed helpers for the Drawing Mirror REST endpoints.
//!
//! Each helper builds its path relative to the client's base path and goes
//! through [`RequestClient::get`] / [`RequestClient::post`], so errors carry
//! the same method/path/status information as untyped calls.
//!
//! ERROR HANDLING
//! ==============
//! Errors propagate unchanged; pages decide whether a failed fetch shows a
//! message or an empty state.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use super::client::{ApiError, RequestClient, Transport};
use super::types::{
    AnalyzeTrigger, AnnotationStatus, ArchiveStatus, Drawing, DrawingDetail, EmbeddingMap, EmbeddingStatus, Lens,
    LensDrawings, NewReaction, Reaction, User,
};
use crate::util::query::{encode_path_segment, encode_query};

// =============================================================================
// PATHS
// =============================================================================

fn user_path(username: &str) -> String {
    format!("/users/{}", encode_path_segment(username))
}

fn for_user(path: &str, user_id: i64) -> String {
    format!("{path}?{}", encode_query([("user_id", user_id.to_string())]))
}

fn drawing_path(drawing_id: i64) -> String {
    format!("/drawings/{drawing_id}")
}

fn lens_drawings_path(lens_id: i64, user_id: i64) -> String {
    for_user(&format!("/lenses/{lens_id}/drawings"), user_id)
}

fn annotation_status_path(lens_id: i64, user_id: i64) -> String {
    for_user(&format!("/lenses/{lens_id}/annotation_status"), user_id)
}

fn reactions_path(drawing_id: i64, user_id: i64) -> String {
    let query = encode_query([("drawing_id", drawing_id.to_string()), ("user_id", user_id.to_string())]);
    format!("/reactions?{query}")
}

// =============================================================================
// USERS
// =============================================================================

/// `GET /users`: every user with their drawing counts.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_users<T: Transport>(client: &RequestClient<T>) -> Result<Vec<User>, ApiError> {
    client.get("/users").await
}

/// `GET /users/{username}`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 404 for an unknown username.
pub async fn get_user<T: Transport>(client: &RequestClient<T>, username: &str) -> Result<User, ApiError> {
    client.get(&user_path(username)).await
}

// =============================================================================
// DRAWINGS
// =============================================================================

/// `GET /drawings?user_id=`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_drawings<T: Transport>(client: &RequestClient<T>, user_id: i64) -> Result<Vec<Drawing>, ApiError> {
    client.get(&for_user("/drawings", user_id)).await
}

/// `GET /drawings/{id}`: drawing plus stored analysis.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 404 for an unknown drawing.
pub async fn get_drawing<T: Transport>(client: &RequestClient<T>, drawing_id: i64) -> Result<DrawingDetail, ApiError> {
    client.get(&drawing_path(drawing_id)).await
}

/// URL of a drawing's JPEG thumbnail, for use as an image source.
#[must_use]
pub fn thumbnail_url<T: Transport>(client: &RequestClient<T>, drawing_id: i64) -> String {
    client.url(&format!("{}/thumbnail", drawing_path(drawing_id)))
}

/// URL of a drawing's full-size image, for use as an image source.
#[must_use]
pub fn image_url<T: Transport>(client: &RequestClient<T>, drawing_id: i64) -> String {
    client.url(&format!("{}/image", drawing_path(drawing_id)))
}

// =============================================================================
// ARCHIVE
// =============================================================================

/// `POST /archive/analyze?user_id=`: start the archive analysis pipeline.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn trigger_archive_analysis<T: Transport>(
    client: &RequestClient<T>,
    user_id: i64,
) -> Result<AnalyzeTrigger, ApiError> {
    client.post(&for_user("/archive/analyze", user_id), &json!({})).await
}

/// `GET /archive/status?user_id=`: progress of the most recent analysis.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn archive_status<T: Transport>(client: &RequestClient<T>, user_id: i64) -> Result<ArchiveStatus, ApiError> {
    client.get(&for_user("/archive/status", user_id)).await
}

// =============================================================================
// LENSES
// =============================================================================

/// `GET /lenses?user_id=`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_lenses<T: Transport>(client: &RequestClient<T>, user_id: i64) -> Result<Vec<Lens>, ApiError> {
    client.get(&for_user("/lenses", user_id)).await
}

/// `GET /lenses/{id}/drawings?user_id=`: relevant drawings with annotations.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn lens_drawings<T: Transport>(
    client: &RequestClient<T>,
    lens_id: i64,
    user_id: i64,
) -> Result<LensDrawings, ApiError> {
    client.get(&lens_drawings_path(lens_id, user_id)).await
}

/// `GET /lenses/{id}/annotation_status?user_id=`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn annotation_status<T: Transport>(
    client: &RequestClient<T>,
    lens_id: i64,
    user_id: i64,
) -> Result<AnnotationStatus, ApiError> {
    client.get(&annotation_status_path(lens_id, user_id)).await
}

// =============================================================================
// REACTIONS
// =============================================================================

/// `POST /reactions`: create or replace a reaction.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 404 when the drawing does not exist.
pub async fn save_reaction<T: Transport>(client: &RequestClient<T>, reaction: &NewReaction) -> Result<Reaction, ApiError> {
    client.post("/reactions", reaction).await
}

/// `GET /reactions?drawing_id=&user_id=`.
///
/// # Errors
///
/// Propagates any [`ApiError`] from the request.
pub async fn list_reactions<T: Transport>(
    client: &RequestClient<T>,
    drawing_id: i64,
    user_id: i64,
) -> Result<Vec<Reaction>, ApiError> {
    client.get(&reactions_path(drawing_id, user_id)).await
}

// =============================================================================
// EMBEDDINGS
// =============================================================================
//
// The embeddings router exists in the backend but its app entry point does
// not mount it, so a stock server answers 404 to all three of these until
// `/api/embeddings` is mounted.

/// `POST /embeddings/generate?user_id=`: start embedding computation.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 404 when the server does not mount the
/// embeddings router.
pub async fn generate_embeddings<T: Transport>(
    client: &RequestClient<T>,
    user_id: i64,
) -> Result<EmbeddingStatus, ApiError> {
    client.post(&for_user("/embeddings/generate", user_id), &json!({})).await
}

/// `GET /embeddings/status?user_id=`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 404 when the server does not mount the
/// embeddings router.
pub async fn embedding_status<T: Transport>(
    client: &RequestClient<T>,
    user_id: i64,
) -> Result<EmbeddingStatus, ApiError> {
    client.get(&for_user("/embeddings/status", user_id)).await
}

/// `GET /embeddings/umap?user_id=`: 2-D projection of embedded drawings.
///
/// # Errors
///
/// Returns [`ApiError::Status`] with 404 when nothing has been embedded yet,
/// or when the server does not mount the embeddings router.
pub async fn embedding_map<T: Transport>(client: &RequestClient<T>, user_id: i64) -> Result<EmbeddingMap, ApiError> {
    client.get(&for_user("/embeddings/umap", user_id)).await
}
