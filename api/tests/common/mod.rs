#![allow(dead_code)]

use std::{
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use axum::{Json, Router, extract::State, routing::post};
use axum_test::TestServer;
use dinstein_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LLMArgs, LogArgs, LogFormat, ServerArgs},
};
use serde_json::{Value, json};

/// What the fake provider answers with.
#[derive(Clone)]
pub enum ProviderReply {
    Content(&'static str),
    NoContent,
    Status(u16),
    Delay(Duration),
}

#[derive(Clone)]
pub struct FakeProvider {
    pub calls: Arc<AtomicUsize>,
    pub last_body: Arc<Mutex<Option<Value>>>,
    reply: ProviderReply,
}

impl FakeProvider {
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.last_body.lock().unwrap().clone()
    }
}

fn completion(content: Option<&str>) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

async fn chat_completions(
    State(provider): State<FakeProvider>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    use axum::{http::StatusCode, response::IntoResponse};

    provider.calls.fetch_add(1, Ordering::SeqCst);
    *provider.last_body.lock().unwrap() = Some(body);

    match provider.reply {
        ProviderReply::Content(content) => Json(completion(Some(content))).into_response(),
        ProviderReply::NoContent => Json(completion(None)).into_response(),
        ProviderReply::Status(status) => (
            StatusCode::from_u16(status).unwrap(),
            Json(json!({ "error": { "message": "boom" } })),
        )
            .into_response(),
        ProviderReply::Delay(delay) => {
            tokio::time::sleep(delay).await;
            Json(completion(Some(r#"{"suggestions":[]}"#))).into_response()
        }
    }
}

/// Serves a stand-in for the chat completions endpoint on a random port and
/// returns its base URL.
pub async fn spawn_provider(reply: ProviderReply) -> (FakeProvider, String) {
    let provider = FakeProvider {
        calls: Arc::new(AtomicUsize::new(0)),
        last_body: Arc::new(Mutex::new(None)),
        reply,
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(provider.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (provider, format!("http://{addr}/v1"))
}

pub fn args(api_key: Option<&str>, base_url: &str, timeout_ms: u64) -> Args {
    Args {
        server: ServerArgs {
            host: "127.0.0.1".to_string(),
            port: 0,
            root_path: "/api".to_string(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
        llm: LLMArgs {
            openai_api_key: api_key.map(str::to_string),
            openai_model: "gpt-4-turbo".to_string(),
            openai_base_url: base_url.to_string(),
            openai_timeout_ms: timeout_ms,
        },
        log: LogArgs {
            format: LogFormat::Text,
            filter: "info".to_string(),
        },
    }
}

pub fn test_server(args: Args) -> TestServer {
    let app_state = state(Arc::new(args)).unwrap();
    TestServer::new(router(app_state).unwrap()).unwrap()
}

pub fn austin_request() -> Value {
    json!({
        "zipCode": "78704",
        "mood": ["Comfort Food"],
        "cuisine": [],
        "dietary": ["Vegan"],
        "time": "Dinner",
        "budget": "$$ ($10–20)",
        "group": "Just me",
        "orderType": "Delivery"
    })
}
