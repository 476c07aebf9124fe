//! Tick label formatters and the registry they are looked up in.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::warn;

use crate::utils::date_formatter::{determine_date_format, format_timestamp_millis, SmartDateFormat};

/// Turns tick values into label text.
pub trait TickFormat: Send + Sync + fmt::Debug {
    /// Registry key, e.g. `"number"`.
    fn key(&self) -> &str;

    fn format(&self, value: f64) -> String;

    /// Formats a whole, increasing tick set. Formats whose output depends on
    /// the visible span override this.
    fn format_ticks(&self, values: &[f64]) -> Vec<String> {
        values.iter().map(|&v| self.format(v)).collect()
    }
}

/// Plain numbers with two fractional digits.
///
/// Negative values that round to zero keep their sign (`"-0.00"`), an exact
/// negative zero does not.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberFormat;

impl TickFormat for NumberFormat {
    fn key(&self) -> &str {
        "number"
    }

    fn format(&self, value: f64) -> String {
        let value = if value == 0.0 { 0.0 } else { value };
        format!("{:.2}", value)
    }
}

/// Epoch milliseconds as UTC time.
#[derive(Clone, Copy, Debug, Default)]
pub struct UtcFormat;

impl TickFormat for UtcFormat {
    fn key(&self) -> &str {
        "utc"
    }

    fn format(&self, value: f64) -> String {
        format_timestamp_millis(value, SmartDateFormat::Full)
    }

    fn format_ticks(&self, values: &[f64]) -> Vec<String> {
        let span_ms = match (values.first(), values.last()) {
            (Some(first), Some(last)) => last - first,
            _ => 0.0,
        };
        let fmt = determine_date_format(span_ms / 1000.0);
        values
            .iter()
            .map(|&v| format_timestamp_millis(v, fmt))
            .collect()
    }
}

/// Formatters keyed by name. Shared between axes behind an `Arc`.
#[derive(Debug, Default)]
pub struct FormatRegistry {
    formats: RwLock<HashMap<String, Arc<dyn TickFormat>>>,
}

impl FormatRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding `"number"` and `"utc"`.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        registry.register(Arc::new(NumberFormat));
        registry.register(Arc::new(UtcFormat));
        registry
    }

    /// Adds a formatter under its own key, returning the one it replaces.
    pub fn register(&self, format: Arc<dyn TickFormat>) -> Option<Arc<dyn TickFormat>> {
        self.formats.write().insert(format.key().to_string(), format)
    }

    pub fn get(&self, key: &str) -> Option<Arc<dyn TickFormat>> {
        self.formats.read().get(key).cloned()
    }

    /// Like [`FormatRegistry::get`], falling back to [`NumberFormat`].
    pub fn resolve(&self, key: &str) -> Arc<dyn TickFormat> {
        self.get(key).unwrap_or_else(|| {
            warn!(key, "unknown tick format, falling back to number");
            Arc::new(NumberFormat)
        })
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.formats.read().keys().cloned().collect();
        keys.sort();
        keys
    }
}
