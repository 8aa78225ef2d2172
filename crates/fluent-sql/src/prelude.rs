//! Convenient imports for typical `fluent-sql` usage.
//!
//! ```ignore
//! use fluent_sql::prelude::*;
//! ```

pub use crate::{
    BuiltQuery, Case, Condition, Field, Op, Operand, Order, SqlBuilder, SqlError, SqlResult,
    Value, col, delete_from, insert_into, select, select_from, update,
};
