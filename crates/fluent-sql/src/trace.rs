//! `tracing` events for rendered statements.
//!
//! Enable via the crate feature: `fluent-sql = { features = ["tracing"] }`
//! (on by default). Events go to target `fluent_sql.render`.

use crate::config::TraceConfig;
#[cfg(feature = "tracing")]
use crate::error::SqlError;

/// Truncate `sql` to at most `max_bytes`, backing off to a char boundary.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}

#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn display_sql(sql: &str, config: &TraceConfig) -> String {
    match config.max_sql_length {
        Some(max) if sql.len() > max => format!("{}...", truncate_sql_bytes(sql, max)),
        _ => sql.to_string(),
    }
}

/// Emit a debug event for a successful render.
#[cfg(feature = "tracing")]
pub(crate) fn rendered(
    kind: &'static str,
    dialect: &str,
    sql: &str,
    arg_count: usize,
    config: &TraceConfig,
) {
    if !config.enabled {
        return;
    }
    tracing::debug!(
        target: "fluent_sql.render",
        kind,
        dialect,
        arg_count,
        sql = %display_sql(sql, config),
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn rendered(
    _kind: &'static str,
    _dialect: &str,
    _sql: &str,
    _arg_count: usize,
    _config: &TraceConfig,
) {
}

/// Emit a warn event for a failed render.
#[cfg(feature = "tracing")]
pub(crate) fn failed(kind: &'static str, dialect: &str, err: &SqlError, config: &TraceConfig) {
    if !config.enabled {
        return;
    }
    tracing::warn!(
        target: "fluent_sql.render",
        kind,
        dialect,
        error = %err,
        "render failed"
    );
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn failed(
    _kind: &'static str,
    _dialect: &str,
    _err: &crate::error::SqlError,
    _config: &TraceConfig,
) {
}
