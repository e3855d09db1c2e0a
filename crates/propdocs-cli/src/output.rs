//! Table and JSON output formatting for shell commands.

use serde::Serialize;
use tabled::{Table, Tabled};

use propdocs_core::traits::{Notification, NotificationVariant};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of items in the selected format
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                println!("{}", Table::new(items));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(items).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Print a single item as key/value lines or JSON
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let value = serde_json::to_value(item).unwrap_or_default();
            match value {
                serde_json::Value::Object(map) => {
                    for (key, value) in map {
                        print_kv(&key, &display_value(&value));
                    }
                }
                other => println!("{}", display_value(&other)),
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "{}".to_string());
            println!("{json}");
        }
    }
}

fn display_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Print a toast emitted by the document manager
pub fn print_notification(notification: &Notification) {
    let marker = match notification.variant {
        NotificationVariant::Default => "✓",
        NotificationVariant::Destructive => "⚠",
    };
    match &notification.description {
        Some(description) => println!("{marker} {}: {description}", notification.title),
        None => println!("{marker} {}", notification.title),
    }
}

/// Print an informational line
pub fn print_info(msg: &str) {
    println!("{msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}
