//! INSERT statement builder.

use crate::condition::Operand;
use crate::config::RenderOptions;
use crate::dialect::Dialect;
use crate::error::{SqlError, SqlResult};
use crate::qb::select::SelectQb;
use crate::qb::traits::SqlBuilder;
use crate::qb::value_operand;
use crate::render::Renderer;

/// INSERT statement builder.
///
/// Renders `INSERT INTO t (cols) VALUES (...), (...)` from rows, or
/// `INSERT INTO t (cols) SELECT ...` from a query.
///
/// # Example
/// ```ignore
/// use fluent_sql::{Operand, SqlBuilder, insert_into};
///
/// let built = insert_into("products")
///     .columns(["name", "desc", "category_id"])
///     .row([Operand::from("Book"), "A book".into(), 12.into()])
///     .build()?;
/// assert_eq!(built.sql, "INSERT INTO products (name, desc, category_id) VALUES ($1, $2, $3)");
/// ```
#[derive(Clone, Debug, Default)]
pub struct InsertQb {
    options: RenderOptions,
    table: String,
    columns: Vec<String>,
    rows: Vec<Vec<Operand>>,
    query: Option<Box<SelectQb>>,
}

impl InsertQb {
    /// Create a new INSERT builder for a table.
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

    /// Append target columns.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns.extend(columns.into_iter().map(Into::into));
        self
    }

    /// Append one VALUES row. Entries may be values or column references.
    pub fn row<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Operand>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    /// Insert the result of a SELECT instead of VALUES rows.
    pub fn query(mut self, query: SelectQb) -> Self {
        self.query = Some(Box::new(query));
        self
    }

    fn validate(&self) -> SqlResult<()> {
        if self.table.trim().is_empty() {
            return Err(SqlError::MissingClause("INSERT INTO"));
        }
        if self.rows.is_empty() && self.query.is_none() {
            return Err(SqlError::MissingClause("VALUES"));
        }
        if self.query.is_some() && !self.rows.is_empty() {
            return Err(SqlError::validation(
                "INSERT takes either VALUES rows or a SELECT, not both",
            ));
        }
        if !self.columns.is_empty() {
            if let Some(row) = self.rows.iter().find(|row| row.len() != self.columns.len()) {
                return Err(SqlError::validation(format!(
                    "INSERT row has {} values for {} columns",
                    row.len(),
                    self.columns.len()
                )));
            }
        }
        Ok(())
    }
}

impl SqlBuilder for InsertQb {
    const KIND: &'static str = "insert";

    fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn render_into(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        self.validate()?;

        let mut sql = format!("INSERT INTO {}", self.table);
        if !self.columns.is_empty() {
            sql.push_str(&format!(" ({})", self.columns.join(", ")));
        }

        if !self.rows.is_empty() {
            let mut rows = Vec::with_capacity(self.rows.len());
            for row in &self.rows {
                let values = row
                    .iter()
                    .map(|v| value_operand(v, "INSERT", r))
                    .collect::<SqlResult<Vec<_>>>()?;
                rows.push(format!("({})", values.join(", ")));
            }
            sql.push_str(" VALUES ");
            sql.push_str(&rows.join(", "));
        }

        if let Some(query) = &self.query {
            sql.push(' ');
            sql.push_str(&query.render_into(r)?);
        }

        Ok(sql)
    }
}
