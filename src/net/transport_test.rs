use super::*;

#[test]
fn relative_urls_join_origin() {
    let t = ReqwestTransport::new(reqwest::Client::new(), "http://localhost:8000/");
    assert_eq!(t.absolute("/api/users"), "http://localhost:8000/api/users");
}

#[test]
fn absolute_urls_pass_through() {
    let t = ReqwestTransport::new(reqwest::Client::new(), "http://localhost:8000");
    assert_eq!(t.absolute("https://mirror.example/api/users"), "https://mirror.example/api/users");
}

// =========================================================================
// request head on the wire
// =========================================================================

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Send `request` to a one-shot local server and return the lowercased
/// request head it received.
async fn captured_head(request: HttpRequest) -> (HttpResponse, String) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            head.extend_from_slice(&buf[..n]);
            if n == 0 || head.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        socket
            .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 2\r\nconnection: close\r\n\r\n{}")
            .await
            .unwrap();
        String::from_utf8_lossy(&head).to_lowercase()
    });

    let t = ReqwestTransport::new(reqwest::Client::new(), &origin);
    let resp = t.send(request).await.unwrap();
    (resp, server.await.unwrap())
}

#[tokio::test]
async fn post_sends_json_content_type() {
    let request = HttpRequest {
        method: Method::Post,
        url: "/api/reactions".into(),
        body: Some(r#"{"drawing_id":9}"#.into()),
    };
    let (resp, head) = captured_head(request).await;
    assert!(head.starts_with("post /api/reactions http/1.1"), "{head}");
    assert!(head.contains("content-type: application/json"), "{head}");
    assert_eq!(resp.status, 200);
    assert_eq!(resp.body, "{}");
}

#[tokio::test]
async fn get_sends_no_content_type() {
    let request = HttpRequest { method: Method::Get, url: "/api/users".into(), body: None };
    let (_, head) = captured_head(request).await;
    assert!(head.starts_with("get /api/users http/1.1"), "{head}");
    assert!(!head.contains("content-type"), "{head}");
}
