//! Scalar values carried by conditions and bound as arguments.

use crate::error::{SqlError, SqlResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A scalar SQL value.
///
/// In literal rendering the value is inlined ([`Value::to_literal`]); in
/// parameterized rendering it is appended to the argument list and replaced
/// by a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    TimestampTz(DateTime<Utc>),
    Uuid(Uuid),
    Json(serde_json::Value),
}

impl Value {
    /// Render the value as an inline SQL literal.
    ///
    /// Text-like values are single-quoted with embedded quotes doubled;
    /// numbers, booleans and NULL are emitted bare. NaN and infinities have
    /// no bare SQL spelling and are rejected; bind them instead.
    pub fn to_literal(&self) -> SqlResult<String> {
        let literal = match self {
            Value::Null => "NULL".to_string(),
            Value::Bool(v) => v.to_string(),
            Value::Int(v) => v.to_string(),
            Value::Float(v) if !v.is_finite() => {
                return Err(SqlError::validation(format!(
                    "float literal {v} cannot be inlined"
                )));
            }
            Value::Float(v) => v.to_string(),
            Value::Text(v) => quote(v),
            Value::Date(v) => quote(&v.format("%Y-%m-%d").to_string()),
            Value::Timestamp(v) => quote(&v.to_string()),
            Value::TimestampTz(v) => quote(&v.to_rfc3339()),
            Value::Uuid(v) => quote(&v.hyphenated().to_string()),
            Value::Json(v) => quote(&v.to_string()),
        };
        Ok(literal)
    }

    /// Short name of the value kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
            Value::TimestampTz(_) => "timestamptz",
            Value::Uuid(_) => "uuid",
            Value::Json(_) => "json",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(v: NaiveDateTime) -> Self {
        Value::Timestamp(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::TimestampTz(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "postgres")]
mod pg {
    use super::Value;
    use bytes::BytesMut;
    use std::error::Error;
    use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

    impl ToSql for Value {
        fn to_sql(
            &self,
            ty: &Type,
            out: &mut BytesMut,
        ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
            match self {
                Value::Null => Ok(IsNull::Yes),
                Value::Bool(v) => v.to_sql_checked(ty, out),
                Value::Int(v) => match *ty {
                    Type::INT2 => i16::try_from(*v)?.to_sql_checked(ty, out),
                    Type::INT4 => i32::try_from(*v)?.to_sql_checked(ty, out),
                    _ => v.to_sql_checked(ty, out),
                },
                Value::Float(v) => match *ty {
                    Type::FLOAT4 => (*v as f32).to_sql_checked(ty, out),
                    _ => v.to_sql_checked(ty, out),
                },
                Value::Text(v) => v.to_sql_checked(ty, out),
                Value::Date(v) => v.to_sql_checked(ty, out),
                Value::Timestamp(v) => v.to_sql_checked(ty, out),
                Value::TimestampTz(v) => v.to_sql_checked(ty, out),
                Value::Uuid(v) => v.to_sql_checked(ty, out),
                Value::Json(v) => v.to_sql_checked(ty, out),
            }
        }

        // Each variant checks its own Postgres type in `to_sql`.
        fn accepts(_ty: &Type) -> bool {
            true
        }

        to_sql_checked!();
    }
}
