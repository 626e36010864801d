//! Command handler tests
//!
//! Runs complete modes against a mock server and checks the written output

use dsbc::cli::Args;
use dsbc::handlers::{self, Outcome};
use dsbc::{DeepSeekClient, Settings};
use httpmock::prelude::*;
use serde_json::{json, Value};

struct Captured {
    outcome: anyhow::Result<Outcome>,
    out: String,
    diag: String,
}

async fn run_with(args: Args, client: &DeepSeekClient) -> Captured {
    let settings = Settings::from_args(&args).expect("valid settings");
    let mut out = Vec::new();
    let mut diag = Vec::new();
    let outcome = handlers::run(&settings, client, &mut out, &mut diag).await;
    Captured {
        outcome,
        out: String::from_utf8(out).unwrap(),
        diag: String::from_utf8(diag).unwrap(),
    }
}

async fn mock_balance(server: &MockServer, status: u16) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/user/balance");
            then.status(status).json_body(json!({
                "total_balance": 100.0,
                "available_balance": 75.5,
                "used_balance": 24.5,
                "currency": "USD",
                "account_id": "acc_123"
            }));
        })
        .await;
}

async fn mock_models(server: &MockServer) {
    server
        .mock_async(|when, then| {
            when.method(GET).path("/models");
            then.status(200).json_body(json!({
                "data": [{
                    "id": "deepseek-chat",
                    "name": "DeepSeek Chat",
                    "context_window": 32768,
                    "pricing": {"input": "0.00014", "output": "0.00028"}
                }]
            }));
        })
        .await;
}

#[tokio::test]
async fn test_default_run_prints_balance() {
    let server = MockServer::start_async().await;
    mock_balance(&server, 200).await;
    let client = DeepSeekClient::with_base_url("sk-test-token-1234", server.base_url());

    let captured = run_with(Args::default(), &client).await;

    assert_eq!(captured.outcome.unwrap(), Outcome::Success);
    assert!(captured.out.contains("DEEPSEEK ACCOUNT BALANCE"));
    assert!(captured.out.contains("100.00 USD"));
    assert!(captured.diag.is_empty());
}

#[tokio::test]
async fn test_models_only_skips_balance() {
    let server = MockServer::start_async().await;
    mock_models(&server).await;
    let balance = server
        .mock_async(|when, then| {
            when.method(GET).path("/user/balance");
            then.status(200).json_body(json!({}));
        })
        .await;
    let client = DeepSeekClient::with_base_url("sk-test-token-1234", server.base_url());

    let captured = run_with(
        Args {
            models: true,
            ..Default::default()
        },
        &client,
    )
    .await;

    assert!(captured.outcome.is_ok());
    assert!(captured.out.contains("DEEPSEEK AVAILABLE MODELS"));
    assert!(!captured.out.contains("DEEPSEEK ACCOUNT BALANCE"));
    balance.assert_hits_async(0).await;
}

#[tokio::test]
async fn test_json_models_output_is_upstream_body() {
    let server = MockServer::start_async().await;
    let body = json!({
        "object": "list",
        "data": [
            {"id": "deepseek-chat", "object": "model", "owned_by": "deepseek"},
            {
                "id": "deepseek-reasoner",
                "pricing": {"input": "0.00014", "output": "0.00028"}
            }
        ]
    });
    let upstream = body.clone();
    server
        .mock_async(move |when, then| {
            when.method(GET).path("/models");
            then.status(200).json_body(upstream);
        })
        .await;
    let client = DeepSeekClient::with_base_url("sk-test-token-1234", server.base_url());

    let captured = run_with(
        Args {
            models: true,
            json: true,
            ..Default::default()
        },
        &client,
    )
    .await;

    assert!(captured.outcome.is_ok());
    let value: Value = serde_json::from_str(&captured.out).unwrap();
    assert_eq!(value, body);
    assert_eq!(value["object"], "list");
    assert_eq!(value["data"][0]["owned_by"], "deepseek");
    assert!(value["data"][0].get("pricing").is_none());
}

#[tokio::test]
async fn test_json_balance_output() {
    let server = MockServer::start_async().await;
    mock_balance(&server, 200).await;
    let client = DeepSeekClient::with_base_url("sk-test-token-1234", server.base_url());

    let captured = run_with(
        Args {
            json: true,
            ..Default::default()
        },
        &client,
    )
    .await;

    let value: Value = serde_json::from_str(&captured.out).unwrap();
    assert_eq!(value["total_balance"], 100.0);
    assert_eq!(value["account_id"], "acc_123");
}

#[tokio::test]
async fn test_json_balance_keeps_string_amounts_and_missing_currency() {
    let server = MockServer::start_async().await;
    let body = json!({
        "is_available": true,
        "total_balance": "110.00",
        "used_balance": "27.50"
    });
    let upstream = body.clone();
    server
        .mock_async(move |when, then| {
            when.method(GET).path("/user/balance");
            then.status(200).json_body(upstream);
        })
        .await;
    let client = DeepSeekClient::with_base_url("sk-test-token-1234", server.base_url());

    let captured = run_with(
        Args {
            json: true,
            ..Default::default()
        },
        &client,
    )
    .await;

    assert!(captured.outcome.is_ok());
    let value: Value = serde_json::from_str(&captured.out).unwrap();
    assert_eq!(value, body);
    assert_eq!(value["total_balance"], "110.00");
    assert!(value.get("currency").is_none());
}

#[tokio::test]
async fn test_health_mode_healthy() {
    let server = MockServer::start_async().await;
    mock_balance(&server, 200).await;
    let client = DeepSeekClient::with_base_url("sk-test-token-1234", server.base_url());

    let captured = run_with(
        Args {
            health: true,
            ..Default::default()
        },
        &client,
    )
    .await;

    assert_eq!(captured.outcome.unwrap(), Outcome::Success);
    assert_eq!(captured.out.trim(), "✅ API is accessible");
}

#[tokio::test]
async fn test_health_mode_unhealthy_json() {
    let server = MockServer::start_async().await;
    mock_balance(&server, 401).await;
    let client = DeepSeekClient::with_base_url("sk-test-token-1234", server.base_url());

    let captured = run_with(
        Args {
            health: true,
            json: true,
            ..Default::default()
        },
        &client,
    )
    .await;

    assert_eq!(captured.outcome.unwrap(), Outcome::Unhealthy);
    let value: Value = serde_json::from_str(&captured.out).unwrap();
    assert_eq!(value, json!({"healthy": false}));
}

#[tokio::test]
async fn test_verbose_unhealthy_warns_then_fails() {
    let server = MockServer::start_async().await;
    mock_balance(&server, 401).await;
    let client = DeepSeekClient::with_base_url("sk-test-token-1234", server.base_url());

    let captured = run_with(
        Args {
            verbose: true,
            ..Default::default()
        },
        &client,
    )
    .await;

    assert!(captured.out.contains("Using API token: sk-test-...1234"));
    assert!(captured.out.contains("API Health: ❌ Unhealthy"));
    assert!(captured.diag.contains("Warning: API may not be accessible"));

    let error = captured.outcome.unwrap_err();
    assert_eq!(format!("{}", error), "Failed to fetch balance");
}

#[tokio::test]
async fn test_usage_report_text() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/usage").query_param("start_date", "2024-03-01");
            then.status(200).json_body(json!({"total_tokens": 2048}));
        })
        .await;
    let client = DeepSeekClient::with_base_url("sk-test-token-1234", server.base_url());

    let captured = run_with(
        Args {
            usage: true,
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1),
            ..Default::default()
        },
        &client,
    )
    .await;

    assert!(captured.outcome.is_ok());
    assert!(captured.out.contains("DEEPSEEK USAGE"));
    assert!(captured.out.contains("Range: since 2024-03-01"));
    assert!(captured.out.contains("\"total_tokens\": 2048"));
}
