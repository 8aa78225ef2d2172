//! Render configuration: which dialect to use and how to trace output.
//!
//! [`RenderOptions`] is what builders carry. [`RenderConfig`] is its
//! file-level form, loadable from TOML or JSON:
//!
//! ```toml
//! dialect = "mysql"
//!
//! [trace]
//! enabled = true
//! max_sql_length = 500
//! ```

use crate::dialect::{Dialect, DialectKind, default_dialect};
use crate::error::SqlResult;
use serde::Deserialize;
use std::sync::Arc;

fn default_true() -> bool {
    true
}

fn default_max_sql_length() -> Option<usize> {
    Some(200)
}

/// Tracing of rendered SQL.
///
/// Only takes effect with the `tracing` feature.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Emit an event for every terminal render.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Truncate logged SQL to this many bytes. `None` means no truncation.
    #[serde(default = "default_max_sql_length")]
    pub max_sql_length: Option<usize>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_sql_length: default_max_sql_length(),
        }
    }
}

impl TraceConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Set maximum SQL length to log.
    pub fn max_sql_length(mut self, len: usize) -> Self {
        self.max_sql_length = Some(len);
        self
    }

    /// Disable SQL truncation.
    pub fn no_truncate(mut self) -> Self {
        self.max_sql_length = None;
        self
    }
}

/// Options carried by every statement builder.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub dialect: Arc<dyn Dialect>,
    pub trace: TraceConfig,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            dialect: default_dialect(),
            trace: TraceConfig::default(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(mut self, dialect: impl Dialect + 'static) -> Self {
        self.dialect = Arc::new(dialect);
        self
    }

    /// Share an already constructed dialect.
    pub fn with_shared_dialect(mut self, dialect: Arc<dyn Dialect>) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn with_trace(mut self, trace: TraceConfig) -> Self {
        self.trace = trace;
        self
    }
}

/// File-level render configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub dialect: DialectKind,
    pub trace: TraceConfig,
}

impl RenderConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(s: &str) -> SqlResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(s: &str) -> SqlResult<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn into_options(self) -> RenderOptions {
        RenderOptions {
            dialect: self.dialect.dialect(),
            trace: self.trace,
        }
    }
}
