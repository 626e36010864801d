//! Human readable report rendering

use chrono::{DateTime, Utc};

use crate::models::{BalanceInfo, ModelInfo, UsageQuery, UsageReport};

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn format_timestamp(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => dt
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Format balance information for display
pub fn format_balance(balance: &BalanceInfo) -> String {
    let currency = &balance.currency;
    let mut output = vec![
        rule(),
        "DEEPSEEK ACCOUNT BALANCE".to_string(),
        rule(),
        format!("Total Balance:     {:.2} {}", balance.total_balance, currency),
        format!("Available Balance: {:.2} {}", balance.available_balance, currency),
        format!("Used Balance:      {:.2} {}", balance.used_balance, currency),
    ];

    if let Some(percentage) = balance.usage_percentage() {
        output.push(format!("Usage:             {:.1}%", percentage));
    }

    if let Some(account_id) = balance.account_id.as_deref().filter(|id| !id.is_empty()) {
        output.push(format!("Account ID:        {}", account_id));
    }

    if let Some(timestamp) = balance.timestamp.as_deref().filter(|ts| !ts.is_empty()) {
        output.push(format!("Last Updated:      {}", format_timestamp(timestamp)));
    }

    output.push(rule());
    output.join("\n")
}

/// Format models information for display
pub fn format_models(models: &[ModelInfo]) -> String {
    let mut output = vec![rule(), "DEEPSEEK AVAILABLE MODELS".to_string(), rule()];

    if models.is_empty() {
        output.push("No models available".to_string());
        output.push(rule());
        return output.join("\n");
    }

    for model in models {
        let context_window = model
            .context_window
            .map(|n| n.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let input = model.pricing.input.as_deref().unwrap_or("N/A");
        let price_output = model.pricing.output.as_deref().unwrap_or("N/A");

        output.push(format!("\nModel: {}", model.display_name()));
        output.push(format!("  ID: {}", model.id));
        output.push(format!("  Context Window: {}", context_window));
        output.push("  Pricing:".to_string());
        output.push(format!("    Input:  ${} per 1K tokens", input));
        output.push(format!("    Output: ${} per 1K tokens", price_output));
    }

    output.push(format!("\n{}", rule()));
    output.join("\n")
}

/// Format usage statistics for display
pub fn format_usage(report: &UsageReport, query: &UsageQuery) -> String {
    let body = serde_json::to_string_pretty(report.as_value())
        .unwrap_or_else(|_| report.as_value().to_string());

    [
        rule(),
        "DEEPSEEK USAGE".to_string(),
        rule(),
        format!("Range: {}", query.describe()),
        body,
        rule(),
    ]
    .join("\n")
}

/// One-line health verdict
pub fn format_health(healthy: bool) -> &'static str {
    if healthy {
        "✅ API is accessible"
    } else {
        "❌ API is not accessible"
    }
}
