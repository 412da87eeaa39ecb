use std::{collections::HashMap, sync::Arc};

use axum::{Json, Router, extract::Query, http::StatusCode, routing::post};
use axum_test::TestServer;
use clap::Parser;
use healthco_core::{
    domain::common::{HealthCoConfig, services::Service},
    infrastructure::llm::GeminiLLMClient,
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use crate::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};

pub const TEST_API_KEY: &str = "test-key";

pub const GEMINI_REPLY: &str =
    r#"{"candidates": [{"content": {"parts": [{"text": "Add two servings of legumes per week."}]}}]}"#;
pub const GEMINI_REPLY_TEXT: &str = "Add two servings of legumes per week.";

/// Serves a fake generateContent endpoint and returns its base URL.
pub async fn spawn_gemini_stub(status: StatusCode, body: &'static str) -> String {
    let handler = move |Query(query): Query<HashMap<String, String>>| async move {
        if query.get("key").map(String::as_str) != Some(TEST_API_KEY) {
            return (StatusCode::FORBIDDEN, "bad key".to_string());
        }
        (status, body.to_string())
    };
    let app = Router::new().route("/v1beta/models/{model_action}", post(handler));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

/// Like [`spawn_gemini_stub`], but answers with the prompt it was sent.
pub async fn spawn_gemini_echo_stub() -> String {
    let handler = |Json(request): Json<Value>| async move {
        let prompt = request["contents"][0]["parts"][0]["text"].clone();
        Json(json!({ "candidates": [{ "content": { "parts": [{ "text": prompt }] } }] }))
    };
    let app = Router::new().route("/v1beta/models/{model_action}", post(handler));

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}")
}

pub async fn test_server(gemini_base_url: &str) -> TestServer {
    let args = Args::try_parse_from([
        "healthco-api",
        "--gemini-api-key",
        TEST_API_KEY,
        "--gemini-base-url",
        gemini_base_url,
    ])
    .unwrap();

    let config = HealthCoConfig::from(args.clone());
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    let service = Service::new(GeminiLLMClient::with_http_client(config.llm, http));

    let state = AppState::new(Arc::new(args), service);
    TestServer::new(router(state).unwrap()).unwrap()
}

pub fn nutrition_request(weight_kg: f64, height_feet: f64, age: u32, deficiency: &str) -> Value {
    json!({
        "age": age,
        "gender": "Female",
        "weight_kg": weight_kg,
        "height_feet": height_feet,
        "health_issues": "None",
        "dietary_habits": {
            "fruits": 3,
            "vegetables": 3,
            "protein_sources": 2,
            "whole_grains": 2,
            "micronutrient_deficiency": deficiency
        }
    })
}

#[tokio::test]
async fn test_health_route() {
    let server = test_server("unused").await;

    let response = server.get("/health").await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!({ "status": "ok" }));
}

#[tokio::test]
async fn test_openapi_document_lists_routes() {
    let server = test_server("unused").await;

    let response = server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let paths = &response.json::<Value>()["paths"];
    assert!(paths.get("/nutrition/classification").is_some());
    assert!(paths.get("/nutrition/advice").is_some());
    assert!(paths.get("/questions").is_some());
}
