//! UPDATE statement builder.

use crate::clause::{Limit, OrderBy};
use crate::condition::{Conditions, Operand};
use crate::config::RenderOptions;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::operator::Order;
use crate::qb::select::SelectQb;
use crate::qb::traits::SqlBuilder;
use crate::qb::value_operand;
use crate::render::Renderer;

#[derive(Clone, Debug)]
enum SetItem {
    /// `column = value`
    Single { column: String, value: Operand },
    /// `(a, b) = (v1, v2)`
    Tuple {
        columns: Vec<String>,
        values: Vec<Operand>,
    },
    /// `(a, b) = (SELECT ...)`
    TupleQuery {
        columns: Vec<String>,
        query: Box<SelectQb>,
    },
}

impl SetItem {
    fn render(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        match self {
            SetItem::Single { column, value } => {
                Ok(format!("{column} = {}", value_operand(value, "UPDATE", r)?))
            }
            SetItem::Tuple { columns, values } => {
                if columns.len() != values.len() {
                    return Err(SqlError::validation(format!(
                        "SET tuple has {} columns but {} values",
                        columns.len(),
                        values.len()
                    )));
                }
                let values = values
                    .iter()
                    .map(|v| value_operand(v, "UPDATE", r))
                    .collect::<SqlResult<Vec<_>>>()?;
                Ok(format!("({}) = ({})", columns.join(", "), values.join(", ")))
            }
            SetItem::TupleQuery { columns, query } => Ok(format!(
                "({}) = ({})",
                columns.join(", "),
                query.render_into(r)?
            )),
        }
    }
}

/// UPDATE statement builder.
///
/// # Example
/// ```ignore
/// use fluent_sql::{SqlBuilder, update};
///
/// let sql = update("Customers")
///     .set("ContactName", "Alfred Schmidt")
///     .set("City", "Frankfurt")
///     .eq("CustomerID", 1)
///     .render()?;
/// assert_eq!(
///     sql,
///     "UPDATE Customers SET ContactName = 'Alfred Schmidt', City = 'Frankfurt' WHERE CustomerID = 1"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct UpdateQb {
    options: RenderOptions,
    table: String,
    alias: Option<String>,
    sets: Vec<SetItem>,
    where_conditions: Conditions,
    order_by: OrderBy,
    limit: Limit,
}

impl UpdateQb {
    /// Create a new UPDATE builder for a table.
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

    /// `UPDATE table alias`
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    // ==================== SET ====================

    /// `column = value`; the value may be a scalar, a column reference or a
    /// sub-query.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Operand>) -> Self {
        self.sets.push(SetItem::Single {
            column: column.into(),
            value: value.into(),
        });
        self
    }

    /// `(a, b, ...) = (v1, v2, ...)`
    pub fn set_tuple<C, V>(
        mut self,
        columns: impl IntoIterator<Item = C>,
        values: impl IntoIterator<Item = V>,
    ) -> Self
    where
        C: Into<String>,
        V: Into<Operand>,
    {
        self.sets.push(SetItem::Tuple {
            columns: columns.into_iter().map(Into::into).collect(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// `(a, b, ...) = (SELECT ...)`
    pub fn set_tuple_query<C: Into<String>>(
        mut self,
        columns: impl IntoIterator<Item = C>,
        query: SelectQb,
    ) -> Self {
        self.sets.push(SetItem::TupleQuery {
            columns: columns.into_iter().map(Into::into).collect(),
            query: Box::new(query),
        });
        self
    }

    // ==================== WHERE ====================

    impl_where_methods!(where_conditions);

    // ==================== ORDER BY / LIMIT ====================

    pub fn order_by(mut self, field: impl Into<String>, order: Order) -> Self {
        self.order_by.push(field, order);
        self
    }

    pub fn limit(mut self, limit: i64, offset: i64) -> Self {
        self.limit = Limit { limit, offset };
        self
    }
}

impl SqlBuilder for UpdateQb {
    const KIND: &'static str = "update";

    fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn render_into(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        if self.table.trim().is_empty() {
            return Err(SqlError::MissingClause("UPDATE"));
        }
        if self.sets.is_empty() {
            return Err(SqlError::MissingClause("SET"));
        }

        let mut head = format!("UPDATE {}", self.table);
        if let Some(alias) = self.alias.as_deref().filter(|a| !a.is_empty()) {
            head.push(' ');
            head.push_str(alias);
        }

        let sets = self
            .sets
            .iter()
            .map(|s| s.render(r))
            .collect::<SqlResult<Vec<_>>>()?;

        let mut parts = vec![head, format!("SET {}", sets.join(", "))];
        parts.extend(self.where_conditions.render_clause("WHERE", r)?);
        parts.extend(self.order_by.render());
        parts.extend(self.limit.render(r)?);
        Ok(parts.join(" "))
    }
}
