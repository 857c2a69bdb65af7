use super::*;
use crate::config::ClientConfig;
use crate::net::client::Method;
use crate::net::mock::MockTransport;
use crate::net::types::ReactionKind;

fn client(transport: MockTransport) -> RequestClient<MockTransport> {
    RequestClient::new(transport, &ClientConfig::default())
}

const USER_JSON: &str = r#"{"id":2,"username":"doug","display_name":"Doug Cooper","dataset_path":"/data/doug","created_at":"2024-01-01","drawing_count":12}"#;

// =========================================================================
// paths
// =========================================================================

#[test]
fn user_path_escapes_username() {
    assert_eq!(user_path("doug cooper"), "/users/doug%20cooper");
}

#[test]
fn for_user_appends_query() {
    assert_eq!(for_user("/drawings", 4), "/drawings?user_id=4");
}

#[test]
fn lens_paths_carry_lens_and_user() {
    assert_eq!(lens_drawings_path(3, 1), "/lenses/3/drawings?user_id=1");
    assert_eq!(annotation_status_path(3, 1), "/lenses/3/annotation_status?user_id=1");
}

#[test]
fn reactions_path_orders_drawing_then_user() {
    assert_eq!(reactions_path(9, 1), "/reactions?drawing_id=9&user_id=1");
}

#[test]
fn image_urls_are_resolved_against_base() {
    let c = client(MockTransport::new());
    assert_eq!(thumbnail_url(&c, 5), "/api/drawings/5/thumbnail");
    assert_eq!(image_url(&c, 5), "/api/drawings/5/image");
    assert!(c.transport().sent().is_empty());
}

// =========================================================================
// requests
// =========================================================================

#[tokio::test]
async fn list_users_decodes_array() {
    let c = client(MockTransport::new().respond(200, &format!("[{USER_JSON}]")));
    let users = list_users(&c).await.unwrap();
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].username, "doug");
    assert_eq!(users[0].drawing_count, 12);
    assert_eq!(c.transport().last().url, "/api/users");
}

#[tokio::test]
async fn get_user_unknown_is_404_error() {
    let c = client(MockTransport::new().respond(404, r#"{"detail":"User 'zed' not found"}"#));
    let err = get_user(&c, "zed").await.unwrap_err();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "GET /users/zed failed: 404");
}

#[tokio::test]
async fn list_drawings_sends_user_query() {
    let c = client(MockTransport::new().respond(200, "[]"));
    let drawings = list_drawings(&c, 2).await.unwrap();
    assert!(drawings.is_empty());
    assert_eq!(c.transport().last().url, "/api/drawings?user_id=2");
}

#[tokio::test]
async fn trigger_archive_analysis_posts_empty_object() {
    let c = client(MockTransport::new().respond(200, r#"{"analysis_id":11,"status":"pending"}"#));
    let trigger = trigger_archive_analysis(&c, 2).await.unwrap();
    assert_eq!(trigger.analysis_id, 11);

    let sent = c.transport().last();
    assert_eq!(sent.method, Method::Post);
    assert_eq!(sent.url, "/api/archive/analyze?user_id=2");
    assert_eq!(sent.body.as_deref(), Some("{}"));
}

#[tokio::test]
async fn save_reaction_posts_wire_body() {
    let reply = r#"{"id":1,"user_id":2,"drawing_id":9,"target_type":"drawing_analysis","target_id":null,"reaction_type":"agree","annotation_text":null,"created_at":"2024-03-03"}"#;
    let c = client(MockTransport::new().respond(200, reply));
    let saved = save_reaction(&c, &NewReaction::on_analysis(2, 9, ReactionKind::Agree)).await.unwrap();
    assert_eq!(saved.reaction_type, ReactionKind::Agree);

    let sent = c.transport().last();
    assert_eq!(sent.url, "/api/reactions");
    let body: serde_json::Value = serde_json::from_str(sent.body.as_deref().unwrap()).unwrap();
    assert_eq!(body["drawing_id"], 9);
    assert_eq!(body["target_type"], "drawing_analysis");
}

#[tokio::test]
async fn embedding_map_without_embeddings_is_404() {
    let c = client(MockTransport::new().respond(404, r#"{"detail":"No embeddings found"}"#));
    let err = embedding_map(&c, 2).await.unwrap_err();
    assert!(err.to_string().contains("/embeddings/umap?user_id=2"));
}

#[tokio::test]
async fn annotation_status_decodes() {
    let c = client(MockTransport::new().respond(200, r#"{"lens_id":3,"total":10,"ready":4,"status":"generating"}"#));
    let status = annotation_status(&c, 3, 2).await.unwrap();
    assert_eq!(status.ready, 4);
    assert_eq!(status.status, "generating");
}

#[tokio::test]
async fn wrong_shape_is_parse_error() {
    let c = client(MockTransport::new().respond(200, r#"{"points":"nope"}"#));
    let err = embedding_map(&c, 2).await.unwrap_err();
    assert!(matches!(err, ApiError::Parse { .. }));
}

#[tokio::test]
async fn unmounted_embeddings_router_surfaces_404() {
    let c = client(MockTransport::new().respond(404, r#"{"detail":"Not Found"}"#).respond(404, r#"{"detail":"Not Found"}"#));
    let err = generate_embeddings(&c, 2).await.unwrap_err();
    assert_eq!(err.to_string(), "POST /embeddings/generate?user_id=2 failed: 404");
    let err = embedding_status(&c, 2).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}
