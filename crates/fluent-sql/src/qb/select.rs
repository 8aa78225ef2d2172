//! SELECT statement builder.

use crate::clause::{
    Column, Fetch, FromClause, GroupBy, Join, JoinKind, Joins, Limit, OrderBy, SelectList,
    TableRef,
};
use crate::condition::{Condition, Conditions, Field, GroupBuilder, Operand};
use crate::config::RenderOptions;
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::operator::{Op, Order};
use crate::qb::traits::SqlBuilder;
use crate::render::Renderer;

/// SELECT statement builder.
///
/// Clauses are assembled in SQL order: SELECT, FROM, JOIN, WHERE, GROUP BY,
/// HAVING, ORDER BY, LIMIT, FETCH. Unset clauses are omitted.
///
/// # Example
/// ```ignore
/// use fluent_sql::{Op, SqlBuilder, select};
///
/// let sql = select(["first_name", "salary"])
///     .from("employees")
///     .where_("salary", Op::Eq, 7000)
///     .or_where("salary", Op::Eq, 8000)
///     .render()?;
/// assert_eq!(
///     sql,
///     "SELECT first_name, salary FROM employees WHERE salary = 7000 OR salary = 8000"
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectQb {
    options: RenderOptions,
    columns: SelectList,
    from: FromClause,
    joins: Joins,
    where_conditions: Conditions,
    group_by: GroupBy,
    having_conditions: Conditions,
    order_by: OrderBy,
    limit: Limit,
    fetch: Fetch,
    alias: Option<String>,
}

impl SelectQb {
    /// Create an empty builder (`SELECT *`, no FROM).
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Options ====================

    /// Render under `dialect` instead of the default.
    pub fn with_dialect(mut self, dialect: impl Dialect + 'static) -> Self {
        self.options = self.options.with_dialect(dialect);
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    // ==================== SELECT columns ====================

    /// Append one select-list entry.
    pub fn column(mut self, column: impl Into<Column>) -> Self {
        self.columns.push(column.into());
        self
    }

    /// Append several select-list entries.
    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Column>,
    {
        for column in columns {
            self.columns.push(column.into());
        }
        self
    }

    // ==================== FROM ====================

    /// Set the FROM source: a table name or a sub-query.
    pub fn from(mut self, table: impl Into<TableRef>) -> Self {
        self.from.table = Some(table.into());
        self
    }

    /// Set the FROM source with a table alias.
    pub fn from_as(mut self, table: impl Into<TableRef>, alias: impl Into<String>) -> Self {
        self.from.table = Some(table.into());
        self.from.alias = Some(alias.into());
        self
    }

    /// `FROM (SELECT ...)`; an aliased sub-query renders as `(...) AS alias`.
    pub fn from_subquery(self, query: SelectQb) -> Self {
        self.from(TableRef::Subquery(Box::new(query)))
    }

    /// Alias this statement: it renders as `(...) AS alias`.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn alias_name(&self) -> Option<&str> {
        self.alias.as_deref().filter(|a| !a.is_empty())
    }

    // ==================== JOIN ====================

    /// Add a join of `kind` with an ON condition.
    pub fn join(mut self, kind: JoinKind, table: impl Into<String>, on: Condition) -> Self {
        self.joins.push(Join {
            kind,
            table: table.into(),
            on: Some(on),
        });
        self
    }

    /// Add INNER JOIN.
    pub fn inner_join(self, table: impl Into<String>, on: Condition) -> Self {
        self.join(JoinKind::Inner, table, on)
    }

    /// Add LEFT JOIN.
    pub fn left_join(self, table: impl Into<String>, on: Condition) -> Self {
        self.join(JoinKind::Left, table, on)
    }

    /// Add RIGHT JOIN.
    pub fn right_join(self, table: impl Into<String>, on: Condition) -> Self {
        self.join(JoinKind::Right, table, on)
    }

    /// Add FULL OUTER JOIN.
    pub fn full_join(self, table: impl Into<String>, on: Condition) -> Self {
        self.join(JoinKind::FullOuter, table, on)
    }

    /// Add CROSS JOIN (no ON).
    pub fn cross_join(mut self, table: impl Into<String>) -> Self {
        self.joins.push(Join {
            kind: JoinKind::Cross,
            table: table.into(),
            on: None,
        });
        self
    }

    // ==================== WHERE ====================

    impl_where_methods!(where_conditions);

    // ==================== GROUP BY / HAVING ====================

    pub fn group_by<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.group_by.extend(fields);
        self
    }

    /// Add a HAVING condition joined with AND.
    pub fn having(
        mut self,
        field: impl Into<Field>,
        op: Op,
        operand: impl Into<Operand>,
    ) -> Self {
        self.having_conditions
            .push(Condition::new(field, op, operand));
        self
    }

    /// Add a HAVING condition joined with OR.
    pub fn or_having(
        mut self,
        field: impl Into<Field>,
        op: Op,
        operand: impl Into<Operand>,
    ) -> Self {
        self.having_conditions
            .push(Condition::new(field, op, operand).or());
        self
    }

    /// Add a parenthesized HAVING group joined with AND.
    pub fn having_group(mut self, build: impl FnOnce(GroupBuilder) -> GroupBuilder) -> Self {
        self.having_conditions
            .push(build(GroupBuilder::new()).into_condition());
        self
    }

    /// Add a parenthesized HAVING group joined with OR.
    pub fn or_having_group(mut self, build: impl FnOnce(GroupBuilder) -> GroupBuilder) -> Self {
        self.having_conditions
            .push(build(GroupBuilder::new()).into_condition().or());
        self
    }

    // ==================== ORDER BY ====================

    pub fn order_by(mut self, field: impl Into<String>, order: Order) -> Self {
        self.order_by.push(field, order);
        self
    }

    /// Add ORDER BY field ASC.
    pub fn order_by_asc(self, field: impl Into<String>) -> Self {
        self.order_by(field, Order::Asc)
    }

    /// Add ORDER BY field DESC.
    pub fn order_by_desc(self, field: impl Into<String>) -> Self {
        self.order_by(field, Order::Desc)
    }

    // ==================== Pagination ====================

    /// `LIMIT limit OFFSET offset`, rendered when either is positive.
    pub fn limit(mut self, limit: i64, offset: i64) -> Self {
        self.limit = Limit { limit, offset };
        self
    }

    /// `OFFSET offset ROWS FETCH NEXT fetch ROWS ONLY`, rendered when either
    /// is positive.
    pub fn fetch(mut self, offset: i64, fetch: i64) -> Self {
        self.fetch = Fetch { offset, fetch };
        self
    }

    /// Pagination helper.
    ///
    /// `page` is 1-based (clamped to >= 1).
    /// `per_page` is clamped to >= 1.
    /// The offset saturates at `i64::MAX`.
    pub fn paginate(self, page: i64, per_page: i64) -> Self {
        let size = per_page.max(1);
        let offset = (page.max(1) - 1).saturating_mul(size);
        self.limit(size, offset)
    }
}

impl SqlBuilder for SelectQb {
    const KIND: &'static str = "select";

    fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn render_into(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        let mut parts = vec![self.columns.render(r)?];
        parts.extend(self.from.render(r)?);
        parts.extend(self.joins.render(r)?);
        parts.extend(self.where_conditions.render_clause("WHERE", r)?);
        parts.extend(self.group_by.render());
        parts.extend(self.having_conditions.render_clause("HAVING", r)?);
        parts.extend(self.order_by.render());
        parts.extend(self.limit.render(r)?);
        parts.extend(self.fetch.render(r)?);

        let sql = parts.join(" ");
        match self.alias_name() {
            Some(alias) => Ok(format!("({sql}) AS {alias}")),
            None => Ok(sql),
        }
    }
}
