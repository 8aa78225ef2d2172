//! Database dialects: placeholder syntax and dialect-specific functions.
//!
//! A [`Dialect`] is passed explicitly to every render call. There is no
//! process-wide "current dialect", so two renders under different dialects
//! can never observe each other.

use crate::error::{SqlError, SqlResult};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Database-specific SQL generation.
pub trait Dialect: fmt::Debug + Send + Sync {
    /// Human-readable dialect name.
    fn name(&self) -> &str;

    /// Placeholder for the argument at `position` (1-based).
    ///
    /// `position` is the length of the argument list right after the value was
    /// appended, so positional dialects emit `$1` for the first argument.
    fn placeholder(&self, position: usize) -> String;

    /// SQL expression extracting the year from `field`.
    fn year_function(&self, field: &str) -> SqlResult<String> {
        let _ = field;
        Err(SqlError::unsupported(self.name(), "year extraction"))
    }
}

/// MySQL: `?` placeholders, `YEAR(field)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MySql;

impl Dialect for MySql {
    fn name(&self) -> &str {
        "MySQL"
    }

    fn placeholder(&self, _position: usize) -> String {
        "?".to_string()
    }

    fn year_function(&self, field: &str) -> SqlResult<String> {
        Ok(format!("YEAR({field})"))
    }
}

/// PostgreSQL: `$n` placeholders, `DATE_PART('year', field)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Postgres;

impl Dialect for Postgres {
    fn name(&self) -> &str {
        "PostgreSQL"
    }

    fn placeholder(&self, position: usize) -> String {
        format!("${position}")
    }

    fn year_function(&self, field: &str) -> SqlResult<String> {
        Ok(format!("DATE_PART('year', {field})"))
    }
}

/// SQLite: `?` placeholders, `strftime('%Y', field)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn name(&self) -> &str {
        "SQLite"
    }

    fn placeholder(&self, _position: usize) -> String {
        "?".to_string()
    }

    fn year_function(&self, field: &str) -> SqlResult<String> {
        Ok(format!("strftime('%Y', {field})"))
    }
}

/// Names of the built-in dialects, as used in configuration files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialectKind {
    #[serde(alias = "mariadb")]
    Mysql,
    #[default]
    #[serde(alias = "postgresql", alias = "pg")]
    Postgres,
    Sqlite,
}

impl DialectKind {
    /// Build the dialect this kind names.
    pub fn dialect(self) -> Arc<dyn Dialect> {
        match self {
            DialectKind::Mysql => Arc::new(MySql),
            DialectKind::Postgres => Arc::new(Postgres),
            DialectKind::Sqlite => Arc::new(Sqlite),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            DialectKind::Mysql => "mysql",
            DialectKind::Postgres => "postgres",
            DialectKind::Sqlite => "sqlite",
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectKind {
    type Err = SqlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(DialectKind::Mysql),
            "postgres" | "postgresql" | "pg" => Ok(DialectKind::Postgres),
            "sqlite" => Ok(DialectKind::Sqlite),
            other => Err(SqlError::Config(format!("unknown dialect: {other}"))),
        }
    }
}

/// The dialect used when a builder is not given one.
pub fn default_dialect() -> Arc<dyn Dialect> {
    Arc::new(Postgres)
}
