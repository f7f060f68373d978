use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One billable row. Items have no identity beyond their position;
/// they are rendered in the order supplied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    /// May be fractional (e.g. partial days).
    pub quantity: f64,
    /// Monetary rate per unit.
    pub rate: f64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, rate: f64) -> Self {
        LineItem {
            description: description.into(),
            quantity,
            rate,
        }
    }
}

/// The root input for one render. Constructed wholesale by the caller
/// and read-only while the layout runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Path to a PNG or JPEG logo. Missing or undecodable files are
    /// skipped, never fatal.
    #[serde(default)]
    pub logo: Option<PathBuf>,
    /// Issuer address, newline-separated.
    pub from: String,
    /// Recipient address, newline-separated.
    pub to: String,
    pub id: String,
    #[serde(default = "default_title")]
    pub title: String,
    pub date: String,
    pub due_date: String,
    /// ISO 4217 code, e.g. "USD".
    pub currency: String,
    pub items: Vec<LineItem>,
    /// Absolute amounts, not percentages.
    #[serde(default)]
    pub tax: f64,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub note: String,
    #[serde(default = "default_note_header")]
    pub note_header: String,
}

fn default_title() -> String {
    "Invoice".to_string()
}

fn default_note_header() -> String {
    "Notes".to_string()
}
