//! Statement builders.
//!
//! Every builder is a consuming (`self -> Self`) builder and implements
//! [`SqlBuilder`], which renders it either with inline literals
//! ([`render`](SqlBuilder::render)) or with dialect placeholders and an
//! ordered argument list ([`build`](SqlBuilder::build)).
//!
//! # Usage
//!
//! ```ignore
//! use fluent_sql::{Op, SqlBuilder, qb};
//!
//! // SELECT
//! let built = qb::select(["first_name", "salary"])
//!     .from("employees")
//!     .where_("department_id", Op::In, vec![8, 9])
//!     .build()?;
//! assert_eq!(
//!     built.sql,
//!     "SELECT first_name, salary FROM employees WHERE department_id IN ($1, $2)"
//! );
//!
//! // UPDATE
//! qb::update("employees").set("salary", 9000).eq("employee_id", 7).build()?;
//!
//! // DELETE
//! qb::delete_from("employees").eq("employee_id", 7).build()?;
//! ```

mod delete;
mod insert;
mod select;
mod traits;
mod update;

pub use delete::DeleteQb;
pub use insert::InsertQb;
pub use select::SelectQb;
pub use traits::{BuiltQuery, SqlBuilder};
pub use update::UpdateQb;

use crate::clause::Column;
use crate::condition::Operand;
use crate::error::{SqlError, SqlResult};
use crate::render::Renderer;

/// Create a SELECT builder with the given select list.
///
/// An empty list renders `SELECT *`.
///
/// # Example
/// ```ignore
/// let qb = fluent_sql::qb::select(["dept_id"]).from("depts");
/// ```
pub fn select<I, C>(columns: I) -> SelectQb
where
    I: IntoIterator<Item = C>,
    C: Into<Column>,
{
    SelectQb::new().columns(columns)
}

/// Create a `SELECT *` builder over a table.
pub fn select_from(table: &str) -> SelectQb {
    SelectQb::new().from(table)
}

/// Create an INSERT builder for the given table.
pub fn insert_into(table: &str) -> InsertQb {
    InsertQb::new(table)
}

/// Create an UPDATE builder for the given table.
pub fn update(table: &str) -> UpdateQb {
    UpdateQb::new(table)
}

/// Create a DELETE builder for the given table.
pub fn delete_from(table: &str) -> DeleteQb {
    DeleteQb::new(table)
}

/// Render an operand in value position (INSERT rows, UPDATE SET).
fn value_operand(
    operand: &Operand,
    statement: &'static str,
    r: &mut Renderer<'_>,
) -> SqlResult<String> {
    match operand {
        Operand::Scalar(v) => r.value(v),
        Operand::Column(c) => Ok(c.clone()),
        Operand::Subquery(query) => Ok(format!("({})", query.render_into(r)?)),
        other => Err(SqlError::validation(format!(
            "{statement} values must be scalars, column references or sub-queries, found {}",
            other.kind()
        ))),
    }
}

#[cfg(test)]
mod tests;
