//! DELETE statement builder.

use crate::clause::{Limit, OrderBy};
use crate::condition::Conditions;
use crate::config::RenderOptions;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::operator::Order;
use crate::qb::traits::SqlBuilder;
use crate::render::Renderer;

/// DELETE statement builder.
///
/// A DELETE without conditions renders without a WHERE clause and so
/// targets every row.
#[derive(Clone, Debug, Default)]
pub struct DeleteQb {
    options: RenderOptions,
    table: String,
    alias: Option<String>,
    where_conditions: Conditions,
    order_by: OrderBy,
    limit: Limit,
}

impl DeleteQb {
    /// Create a new DELETE builder for a table.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    pub fn with_dialect(mut self, dialect: impl Dialect + 'static) -> Self {
        self.options = self.options.with_dialect(dialect);
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    impl_where_methods!(where_conditions);

    pub fn order_by(mut self, field: impl Into<String>, order: Order) -> Self {
        self.order_by.push(field, order);
        self
    }

    pub fn limit(mut self, limit: i64, offset: i64) -> Self {
        self.limit = Limit { limit, offset };
        self
    }
}

impl SqlBuilder for DeleteQb {
    const KIND: &'static str = "delete";

    fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn render_into(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        if self.table.trim().is_empty() {
            return Err(SqlError::MissingClause("DELETE FROM"));
        }

        let mut head = format!("DELETE FROM {}", self.table);
        if let Some(alias) = self.alias.as_deref().filter(|a| !a.is_empty()) {
            head.push(' ');
            head.push_str(alias);
        }

        let mut parts = vec![head];
        parts.extend(self.where_conditions.render_clause("WHERE", r)?);
        parts.extend(self.order_by.render());
        parts.extend(self.limit.render(r)?);
        Ok(parts.join(" "))
    }
}
