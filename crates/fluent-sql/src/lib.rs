//! # fluent-sql
//!
//! A fluent SQL statement builder.
//!
//! ## Features
//!
//! - **Condition trees**: nested AND/OR groups with a fixed folding rule
//! - **Two render modes**: inline literals for display, placeholders plus an
//!   ordered argument list for execution
//! - **Pluggable dialects**: placeholder syntax and year extraction per
//!   database; bring your own by implementing [`Dialect`]
//! - **Sub-queries everywhere**: in conditions, the select list, FROM, and
//!   UPDATE SET, all sharing one argument list
//!
//! ## Query Builder (qb)
//!
//! ```ignore
//! use fluent_sql::{Op, SqlBuilder, qb};
//!
//! // SELECT
//! let built = qb::select(["employee_id", "first_name"])
//!     .from("employees")
//!     .where_("salary", Op::GrEq, 3000)
//!     .where_group(|g| g.eq("department_id", 8).or_where("department_id", Op::Eq, 9))
//!     .order_by_asc("first_name")
//!     .build()?;
//!
//! // INSERT
//! qb::insert_into("products")
//!     .columns(["name", "category_id"])
//!     .row([fluent_sql::Operand::from("Pen"), 12.into()])
//!     .build()?;
//!
//! // UPDATE
//! qb::update("employees").set("salary", 9000).eq("employee_id", 7).build()?;
//!
//! // DELETE
//! qb::delete_from("employees").eq("employee_id", 7).build()?;
//! ```

#[macro_use]
mod where_macros;

pub mod args;
pub mod case;
pub mod clause;
pub mod condition;
pub mod config;
pub mod dialect;
pub mod error;
pub mod operator;
pub mod prelude;
pub mod qb;
pub mod render;
pub mod value;

mod trace;

pub use args::Args;
pub use case::{Case, When, WhenArm};
pub use clause::{Column, JoinKind, TableRef};
pub use condition::{Condition, Conditions, Field, GroupBuilder, Operand, col};
pub use config::{RenderConfig, RenderOptions, TraceConfig};
pub use dialect::{Dialect, DialectKind, MySql, Postgres, Sqlite, default_dialect};
pub use error::{SqlError, SqlResult};
pub use operator::{Combinator, Op, OpFamily, Order};
pub use render::Renderer;
pub use value::Value;

// Re-export qb module for easy access
pub use qb::{
    BuiltQuery, DeleteQb, InsertQb, SelectQb, SqlBuilder, UpdateQb, delete_from, insert_into,
    select, select_from, update,
};
