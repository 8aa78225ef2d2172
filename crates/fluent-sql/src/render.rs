//! Render context shared by every clause of a statement.
//!
//! A single [`Renderer`] walks the whole statement tree, nested sub-queries
//! included. In literal mode values are inlined; in bind mode each value is
//! appended to the one [`Args`] list and replaced by a dialect placeholder,
//! so placeholder numbering is global to the top-level statement.

use crate::args::Args;
use crate::dialect::Dialect;
use crate::error::SqlResult;
use crate::value::Value;

enum Sink<'a> {
    Literal,
    Bind(&'a mut Args),
}

/// Dialect plus value sink for one render pass.
pub struct Renderer<'a> {
    dialect: &'a dyn Dialect,
    sink: Sink<'a>,
}

impl<'a> Renderer<'a> {
    /// Renderer that inlines values as SQL literals.
    pub fn literal(dialect: &'a dyn Dialect) -> Self {
        Self {
            dialect,
            sink: Sink::Literal,
        }
    }

    /// Renderer that binds values into `args`.
    pub fn bind(dialect: &'a dyn Dialect, args: &'a mut Args) -> Self {
        Self {
            dialect,
            sink: Sink::Bind(args),
        }
    }

    pub fn dialect(&self) -> &'a dyn Dialect {
        self.dialect
    }

    pub fn is_literal(&self) -> bool {
        matches!(self.sink, Sink::Literal)
    }

    /// Number of arguments bound so far (always 0 in literal mode).
    pub fn arg_count(&self) -> usize {
        match &self.sink {
            Sink::Literal => 0,
            Sink::Bind(args) => args.len(),
        }
    }

    /// Emit one value: its literal text, or a placeholder after binding it.
    pub fn value(&mut self, value: &Value) -> SqlResult<String> {
        match &mut self.sink {
            Sink::Literal => value.to_literal(),
            Sink::Bind(args) => {
                let position = args.push(value.clone());
                Ok(self.dialect.placeholder(position))
            }
        }
    }

    /// Emit a comma-separated value list, left to right.
    pub fn value_list(&mut self, values: &[Value]) -> SqlResult<String> {
        let items = values
            .iter()
            .map(|v| self.value(v))
            .collect::<SqlResult<Vec<_>>>()?;
        Ok(items.join(", "))
    }
}

impl std::fmt::Debug for Renderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Renderer")
            .field("dialect", &self.dialect.name())
            .field("literal", &self.is_literal())
            .finish()
    }
}
