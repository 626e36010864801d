//! Logging utilities
//!
//! Subscriber setup and helpers that keep log and error output short

use crate::config::settings::LoggingConfig;

/// Truncate a string with a note about original length
pub fn truncate_content(s: &str, max_len: usize) -> String {
    let total = s.chars().count();
    if total > max_len {
        let head: String = s.chars().take(max_len).collect();
        format!("{}... ({} chars truncated)", head, total - max_len)
    } else {
        s.to_string()
    }
}

/// Initialize logging system
///
/// Everything goes to stderr so stdout stays clean for reports and JSON.
pub fn init_logging(config: &LoggingConfig) {
    let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = if config.format == "json" {
        // JSON format logs (for scripts collecting stderr)
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_writer(std::io::stderr)
                .json()
                .with_current_span(false)
                .with_span_list(false)
                .finish(),
        )
    } else {
        // Human readable format
        Box::new(
            tracing_subscriber::fmt()
                .with_env_filter(config.level.as_str())
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    };

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: failed to set tracing subscriber: {}", e);
    }
}
