//! Clause containers assembled by the statement builders.
//!
//! Each container renders to its full clause text (keyword included) or to
//! nothing when unset, so the statement assembler only joins non-empty parts.

use crate::case::Case;
use crate::condition::Condition;
use crate::error::SqlResult;
use crate::operator::Order;
use crate::qb::{SelectQb, SqlBuilder};
use crate::render::Renderer;
use crate::value::Value;

/// Render a nested SELECT, parenthesized unless it carries its own alias
/// (an aliased statement renders as `(...) AS alias` by itself).
fn nested(query: &SelectQb, r: &mut Renderer<'_>) -> SqlResult<String> {
    let sql = query.render_into(r)?;
    if query.alias_name().is_some() {
        Ok(sql)
    } else {
        Ok(format!("({sql})"))
    }
}

/// One entry of the select list.
#[derive(Debug, Clone)]
pub enum Column {
    /// Column name or expression, emitted verbatim.
    Expr(String),
    /// The dialect's year extraction over a column.
    Year(String),
    Case(Case),
    Subquery(Box<SelectQb>),
}

impl Column {
    pub fn year(column: impl Into<String>) -> Self {
        Column::Year(column.into())
    }

    fn render(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        match self {
            Column::Expr(e) => Ok(e.clone()),
            Column::Year(c) => r.dialect().year_function(c),
            Column::Case(case) => case.render(r),
            Column::Subquery(query) => nested(query, r),
        }
    }
}

impl From<&str> for Column {
    fn from(s: &str) -> Self {
        Column::Expr(s.to_string())
    }
}

impl From<String> for Column {
    fn from(s: String) -> Self {
        Column::Expr(s)
    }
}

impl From<&String> for Column {
    fn from(s: &String) -> Self {
        Column::Expr(s.clone())
    }
}

impl From<Case> for Column {
    fn from(case: Case) -> Self {
        Column::Case(case)
    }
}

impl From<SelectQb> for Column {
    fn from(query: SelectQb) -> Self {
        Column::Subquery(Box::new(query))
    }
}

/// `SELECT a, b, ...` (or `SELECT *` when empty).
#[derive(Debug, Clone, Default)]
pub struct SelectList {
    columns: Vec<Column>,
}

impl SelectList {
    pub fn push(&mut self, column: Column) {
        self.columns.push(column);
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn render(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        if self.columns.is_empty() {
            return Ok("SELECT *".to_string());
        }
        let columns = self
            .columns
            .iter()
            .map(|c| c.render(r))
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(format!("SELECT {}", columns.join(", ")))
    }
}

/// Source of a FROM clause.
#[derive(Debug, Clone)]
pub enum TableRef {
    Name(String),
    Subquery(Box<SelectQb>),
}

impl From<&str> for TableRef {
    fn from(s: &str) -> Self {
        TableRef::Name(s.to_string())
    }
}

impl From<String> for TableRef {
    fn from(s: String) -> Self {
        TableRef::Name(s)
    }
}

impl From<SelectQb> for TableRef {
    fn from(query: SelectQb) -> Self {
        TableRef::Subquery(Box::new(query))
    }
}

/// `FROM table [alias]`
#[derive(Debug, Clone, Default)]
pub struct FromClause {
    pub table: Option<TableRef>,
    pub alias: Option<String>,
}

impl FromClause {
    pub fn render(&self, r: &mut Renderer<'_>) -> SqlResult<Option<String>> {
        let Some(table) = &self.table else {
            return Ok(None);
        };
        let mut sql = match table {
            TableRef::Name(name) => format!("FROM {name}"),
            TableRef::Subquery(query) => format!("FROM {}", nested(query, r)?),
        };
        if let Some(alias) = self.alias.as_deref().filter(|a| !a.is_empty()) {
            sql.push(' ');
            sql.push_str(alias);
        }
        Ok(Some(sql))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    FullOuter,
    Cross,
}

impl JoinKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::FullOuter => "FULL OUTER JOIN",
            JoinKind::Cross => "CROSS JOIN",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Join {
    pub kind: JoinKind,
    pub table: String,
    /// Ignored for CROSS JOIN.
    pub on: Option<Condition>,
}

impl Join {
    fn render(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        let head = format!("{} {}", self.kind.as_str(), self.table);
        match (&self.on, self.kind) {
            (Some(on), kind) if kind != JoinKind::Cross => {
                let cond = on.render(r)?;
                if cond.is_empty() {
                    Ok(head)
                } else {
                    Ok(format!("{head} ON {cond}"))
                }
            }
            _ => Ok(head),
        }
    }
}

/// JOIN clauses in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Joins {
    items: Vec<Join>,
}

impl Joins {
    pub fn push(&mut self, join: Join) {
        self.items.push(join);
    }

    pub fn render(&self, r: &mut Renderer<'_>) -> SqlResult<Option<String>> {
        if self.items.is_empty() {
            return Ok(None);
        }
        let parts = self
            .items
            .iter()
            .map(|j| j.render(r))
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(Some(parts.join(" ")))
    }
}

/// `GROUP BY a, b`
#[derive(Debug, Clone, Default)]
pub struct GroupBy {
    fields: Vec<String>,
}

impl GroupBy {
    pub fn extend<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields.extend(fields.into_iter().map(Into::into));
    }

    pub fn render(&self) -> Option<String> {
        if self.fields.is_empty() {
            None
        } else {
            Some(format!("GROUP BY {}", self.fields.join(", ")))
        }
    }
}

/// `ORDER BY a ASC, b DESC`
#[derive(Debug, Clone, Default)]
pub struct OrderBy {
    items: Vec<(String, Order)>,
}

impl OrderBy {
    pub fn push(&mut self, field: impl Into<String>, order: Order) {
        self.items.push((field.into(), order));
    }

    pub fn render(&self) -> Option<String> {
        if self.items.is_empty() {
            return None;
        }
        let items = self
            .items
            .iter()
            .map(|(field, order)| format!("{field} {}", order.as_str()))
            .collect::<Vec<_>>();
        Some(format!("ORDER BY {}", items.join(", ")))
    }
}

/// `LIMIT l OFFSET o`; binds limit then offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limit {
    pub limit: i64,
    pub offset: i64,
}

impl Limit {
    pub fn render(&self, r: &mut Renderer<'_>) -> SqlResult<Option<String>> {
        if self.limit <= 0 && self.offset <= 0 {
            return Ok(None);
        }
        let limit = r.value(&Value::Int(self.limit))?;
        let offset = r.value(&Value::Int(self.offset))?;
        Ok(Some(format!("LIMIT {limit} OFFSET {offset}")))
    }
}

/// `OFFSET o ROWS FETCH NEXT f ROWS ONLY`; binds offset then fetch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fetch {
    pub offset: i64,
    pub fetch: i64,
}

impl Fetch {
    pub fn render(&self, r: &mut Renderer<'_>) -> SqlResult<Option<String>> {
        if self.fetch <= 0 && self.offset <= 0 {
            return Ok(None);
        }
        let offset = r.value(&Value::Int(self.offset))?;
        let fetch = r.value(&Value::Int(self.fetch))?;
        Ok(Some(format!("OFFSET {offset} ROWS FETCH NEXT {fetch} ROWS ONLY")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use crate::condition::col;
    use crate::dialect::{MySql, Postgres};
    use crate::operator::Op;

    #[test]
    fn test_select_list() {
        let mut r = Renderer::literal(&MySql);
        let mut list = SelectList::default();
        assert_eq!(list.render(&mut r).unwrap(), "SELECT *");

        list.push("first_name".into());
        list.push(Column::year("hire_date"));
        assert_eq!(
            list.render(&mut r).unwrap(),
            "SELECT first_name, YEAR(hire_date)"
        );
    }

    #[test]
    fn test_from_with_alias() {
        let mut r = Renderer::literal(&MySql);
        assert_eq!(FromClause::default().render(&mut r).unwrap(), None);

        let from = FromClause {
            table: Some("employees".into()),
            alias: Some("e".to_string()),
        };
        assert_eq!(
            from.render(&mut r).unwrap().as_deref(),
            Some("FROM employees e")
        );
    }

    #[test]
    fn test_joins() {
        let mut joins = Joins::default();
        joins.push(Join {
            kind: JoinKind::Inner,
            table: "departments d".to_string(),
            on: Some(Condition::new("d.department_id", Op::Eq, col("e.department_id"))),
        });
        joins.push(Join {
            kind: JoinKind::Cross,
            table: "regions".to_string(),
            on: Some(Condition::new("ignored", Op::Eq, 1)),
        });
        let mut r = Renderer::literal(&MySql);
        assert_eq!(
            joins.render(&mut r).unwrap().as_deref(),
            Some(
                "INNER JOIN departments d ON d.department_id = e.department_id \
                 CROSS JOIN regions"
            )
        );
    }

    #[test]
    fn test_group_and_order() {
        let mut group = GroupBy::default();
        assert_eq!(group.render(), None);
        group.extend(["department_id", "job_id"]);
        assert_eq!(group.render().as_deref(), Some("GROUP BY department_id, job_id"));

        let mut order = OrderBy::default();
        order.push("salary", Order::Desc);
        order.push("last_name", Order::Asc);
        assert_eq!(
            order.render().as_deref(),
            Some("ORDER BY salary DESC, last_name ASC")
        );
    }

    #[test]
    fn test_limit_and_fetch_literal() {
        let mut r = Renderer::literal(&MySql);
        assert_eq!(Limit::default().render(&mut r).unwrap(), None);
        assert_eq!(
            Limit { limit: 5, offset: 0 }.render(&mut r).unwrap().as_deref(),
            Some("LIMIT 5 OFFSET 0")
        );
        assert_eq!(
            Limit { limit: 0, offset: 3 }.render(&mut r).unwrap().as_deref(),
            Some("LIMIT 0 OFFSET 3")
        );
        assert_eq!(Fetch::default().render(&mut r).unwrap(), None);
        assert_eq!(
            Fetch { offset: 0, fetch: 10 }.render(&mut r).unwrap().as_deref(),
            Some("OFFSET 0 ROWS FETCH NEXT 10 ROWS ONLY")
        );
    }

    #[test]
    fn test_limit_and_fetch_bind_order() {
        let mut args = Args::new();
        let (limit, fetch) = {
            let mut r = Renderer::bind(&Postgres, &mut args);
            let limit = Limit { limit: 20, offset: 40 }.render(&mut r).unwrap();
            let fetch = Fetch { offset: 7, fetch: 3 }.render(&mut r).unwrap();
            (limit, fetch)
        };
        assert_eq!(limit.as_deref(), Some("LIMIT $1 OFFSET $2"));
        assert_eq!(
            fetch.as_deref(),
            Some("OFFSET $3 ROWS FETCH NEXT $4 ROWS ONLY")
        );
        assert_eq!(
            args.as_slice(),
            &[Value::Int(20), Value::Int(40), Value::Int(7), Value::Int(3)]
        );
    }
}
