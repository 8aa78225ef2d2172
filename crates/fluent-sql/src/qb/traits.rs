//! Trait definitions for statement builders.

use crate::args::Args;
use crate::config::RenderOptions;
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::render::Renderer;
use crate::trace;

/// Base trait for all statement builders.
///
/// Implementors provide [`render_into`](SqlBuilder::render_into); the
/// terminal methods (`render`, `build` and their `_with` variants) are
/// provided and share the tracing behavior.
pub trait SqlBuilder {
    /// Statement kind reported in trace events (`"select"`, `"insert"`, ...).
    const KIND: &'static str;

    /// Options this builder was configured with.
    fn options(&self) -> &RenderOptions;

    /// Render the statement with an existing renderer.
    ///
    /// Used for nesting: a sub-query renders into its parent's renderer so
    /// it shares the parent's dialect and argument list.
    fn render_into(&self, r: &mut Renderer<'_>) -> SqlResult<String>;

    /// Render with inline literal values under the builder's dialect.
    fn render(&self) -> SqlResult<String> {
        let options = self.options();
        self.render_with(options.dialect.as_ref())
    }

    /// Render with inline literal values under `dialect`.
    fn render_with(&self, dialect: &dyn Dialect) -> SqlResult<String> {
        let trace = &self.options().trace;
        let mut r = Renderer::literal(dialect);
        match self.render_into(&mut r) {
            Ok(sql) => {
                trace::rendered(Self::KIND, dialect.name(), &sql, 0, trace);
                Ok(sql)
            }
            Err(err) => {
                trace::failed(Self::KIND, dialect.name(), &err, trace);
                Err(err)
            }
        }
    }

    /// Render with placeholders under the builder's dialect.
    fn build(&self) -> SqlResult<BuiltQuery> {
        let options = self.options();
        self.build_with(options.dialect.as_ref())
    }

    /// Render with placeholders under `dialect`.
    fn build_with(&self, dialect: &dyn Dialect) -> SqlResult<BuiltQuery> {
        let trace = &self.options().trace;
        let mut args = Args::new();
        let result = {
            let mut r = Renderer::bind(dialect, &mut args);
            self.render_into(&mut r)
        };
        match result {
            Ok(sql) => {
                trace::rendered(Self::KIND, dialect.name(), &sql, args.len(), trace);
                Ok(BuiltQuery { sql, args })
            }
            Err(err) => {
                trace::failed(Self::KIND, dialect.name(), &err, trace);
                Err(err)
            }
        }
    }
}

/// The result of building a statement: SQL text plus its ordered arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: Args,
}

impl BuiltQuery {
    pub fn new(sql: String, args: Args) -> Self {
        Self { sql, args }
    }

    pub fn into_parts(self) -> (String, Args) {
        (self.sql, self.args)
    }

    /// Get arguments as references for tokio-postgres.
    #[cfg(feature = "postgres")]
    pub fn params_ref(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.args.as_refs()
    }
}

impl std::fmt::Display for BuiltQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.sql)
    }
}
