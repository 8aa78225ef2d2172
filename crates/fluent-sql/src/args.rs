//! Ordered argument list threaded through parameterized rendering.

use crate::value::Value;
use serde::Serialize;

/// Bound arguments of a parameterized statement.
///
/// The list is append-only during rendering: its length always equals the
/// number of placeholders emitted so far, so the Nth placeholder in the SQL
/// text corresponds to the Nth value here.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Args {
    values: Vec<Value>,
}

impl Args {
    /// Create a new empty argument list.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append a value and return its 1-based position.
    pub fn push(&mut self, value: impl Into<Value>) -> usize {
        self.values.push(value.into());
        self.values.len()
    }

    /// Get the current argument count.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Borrow the values in placeholder order.
    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    /// Take the values, consuming the list.
    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }

    /// Get all arguments as references for tokio-postgres.
    #[cfg(feature = "postgres")]
    pub fn as_refs(&self) -> Vec<&(dyn tokio_postgres::types::ToSql + Sync)> {
        self.values
            .iter()
            .map(|v| v as &(dyn tokio_postgres::types::ToSql + Sync))
            .collect()
    }
}

impl From<Vec<Value>> for Args {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl IntoIterator for Args {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_returns_one_based_position() {
        let mut args = Args::new();
        assert!(args.is_empty());
        assert_eq!(args.push(8), 1);
        assert_eq!(args.push("Sales"), 2);
        assert_eq!(args.len(), 2);
        assert_eq!(
            args.as_slice(),
            &[Value::Int(8), Value::Text("Sales".into())]
        );
    }
}
