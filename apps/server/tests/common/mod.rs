#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    extract::{Path, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use ifsc_finder_bank_data::CapabilityPolicy;
use ifsc_finder_server::{api::app_router, build_state, config::Config};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Fake Razorpay endpoint that counts every request it receives.
#[derive(Clone, Default)]
pub struct MockProvider {
    pub hits: Arc<AtomicUsize>,
}

impl MockProvider {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn branch(State(mock): State<MockProvider>, Path(code): Path<String>) -> Response {
    mock.hits.fetch_add(1, Ordering::SeqCst);
    match code.as_str() {
        "HDFC0000053" => Json(json!({
            "BANK": "HDFC Bank",
            "IFSC": "HDFC0000053",
            "BRANCH": "Ahmedabad - Ashram Road",
            "ADDRESS": "Ashram Road, Ahmedabad 380009",
            "CITY": "AHMEDABAD",
            "DISTRICT": "AHMEDABAD",
            "STATE": "GUJARAT",
            "MICR": "380240002",
            "CONTACT": "+919374604660",
            "NEFT": true,
            "RTGS": true,
            "IMPS": true,
            "UPI": true
        }))
        .into_response(),
        "SBIN0001234" => Json(json!({
            "bank": "State Bank of India",
            "ifsc": "SBIN0001234",
            "branch": "Connaught Place",
            "address": "11 Sansad Marg",
            "city": "New Delhi",
            "district": "New Delhi",
            "state": "Delhi",
            "NEFT": false
        }))
        .into_response(),
        "UTIB0000001" => (StatusCode::OK, "<html>maintenance</html>").into_response(),
        _ => (StatusCode::NOT_FOUND, "Not Found").into_response(),
    }
}

pub async fn spawn_provider() -> (String, MockProvider) {
    let mock = MockProvider::default();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new()
        .route("/{code}", get(branch))
        .with_state(mock.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}/", addr), mock)
}

pub fn test_config(provider_url: String, policy: CapabilityPolicy) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        provider_url,
        provider_timeout: Some(Duration::from_secs(5)),
        capability_policy: policy,
        cors_allow: vec!["*".to_string()],
        request_timeout: Duration::from_secs(30),
        static_dir: "dist".to_string(),
    }
}

pub async fn build_test_router(policy: CapabilityPolicy) -> (Router, MockProvider) {
    let (url, mock) = spawn_provider().await;
    let config = test_config(url, policy);
    let state = build_state(&config).await.unwrap();
    (app_router(state, &config), mock)
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
