// ============================================================
// Layer 1 — HTTP Front-End
// ============================================================
// A stateless wrapper around the chat pipeline:
//
//   POST /chat  {"message": "..."}  →  200 {"response": "..."}
//                missing message    →  400 {"error": "..."}
//
// The handler depends only on the MessageResponder trait, so the
// router can be built with a stub in tests. The real context is
// loaded once in the CLI layer and shared read-only via Arc —
// one request in, one response out, no mutable state anywhere.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

use crate::domain::traits::MessageResponder;

type SharedResponder = Arc<dyn MessageResponder>;

/// Build the application router around a shared responder.
pub fn router(responder: SharedResponder) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .with_state(responder)
}

/// Bind the listener and serve until the process is stopped.
/// The CLI is synchronous, so the tokio runtime lives here.
pub fn serve(responder: SharedResponder, host: &str, port: u16) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Cannot build tokio runtime")?;

    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind((host, port))
            .await
            .with_context(|| format!("Cannot bind {host}:{port}"))?;

        tracing::info!("Listening on http://{host}:{port}");
        axum::serve(listener, router(responder))
            .await
            .context("Server error")?;

        Ok(())
    })
}

/// POST /chat — validate the payload, run the pipeline, reply.
async fn chat(
    State(responder): State<SharedResponder>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let Some(message) = body.get("message").and_then(Value::as_str) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "No message provided"})),
        );
    };

    let response = responder.reply(message);
    (StatusCode::OK, Json(json!({"response": response})))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
// The router is exercised with tower's oneshot against a stub
// responder, so no trained model is needed.
#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use tower::util::ServiceExt;

    /// Echoes the message back, prefixed — enough to assert the
    /// handler plumbed the payload through.
    struct EchoResponder;

    impl MessageResponder for EchoResponder {
        fn reply(&self, message: &str) -> String {
            format!("echo: {message}")
        }
    }

    fn test_router() -> Router {
        router(Arc::new(EchoResponder))
    }

    fn chat_request(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_chat_returns_response_json() {
        let response = test_router()
            .oneshot(chat_request(r#"{"message": "hello"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["response"], "echo: hello");
    }

    #[tokio::test]
    async fn test_missing_message_is_400() {
        let response = test_router()
            .oneshot(chat_request(r#"{"note": "no message here"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No message provided");
    }

    #[tokio::test]
    async fn test_non_string_message_is_400() {
        let response = test_router()
            .oneshot(chat_request(r#"{"message": 42}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
