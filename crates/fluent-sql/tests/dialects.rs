//! Dialect selection, custom dialects, and isolation between renders.

use fluent_sql::{
    Dialect, DialectKind, Field, MySql, Op, Postgres, RenderConfig, SqlBuilder, SqlError,
    SqlResult, Sqlite, select,
};
use std::sync::Arc;
use std::thread;

#[derive(Debug)]
struct Oracle;

impl Dialect for Oracle {
    fn name(&self) -> &str {
        "Oracle"
    }

    fn placeholder(&self, position: usize) -> String {
        format!(":{position}")
    }

    fn year_function(&self, field: &str) -> SqlResult<String> {
        Ok(format!("EXTRACT(YEAR FROM {field})"))
    }
}

#[derive(Debug)]
struct NoYear;

impl Dialect for NoYear {
    fn name(&self) -> &str {
        "NoYear"
    }

    fn placeholder(&self, _position: usize) -> String {
        "?".to_string()
    }
}

#[test]
fn same_statement_under_each_builtin() {
    let qb = select(["id", "name"])
        .from("users")
        .where_("active", Op::Eq, true)
        .where_(Field::year("created_at"), Op::GrEq, 2020);

    let mysql = qb.build_with(&MySql).unwrap().sql;
    let pg = qb.build_with(&Postgres).unwrap().sql;
    let sqlite = qb.build_with(&Sqlite).unwrap().sql;

    assert_eq!(
        mysql,
        "SELECT id, name FROM users WHERE active = ? AND YEAR(created_at) >= ?"
    );
    assert_eq!(
        pg,
        "SELECT id, name FROM users WHERE active = $1 AND DATE_PART('year', created_at) >= $2"
    );
    assert_eq!(
        sqlite,
        "SELECT id, name FROM users WHERE active = ? AND strftime('%Y', created_at) >= ?"
    );
}

#[test]
fn custom_dialect() {
    let qb = select(["id"])
        .from("users")
        .with_dialect(Oracle)
        .where_(Field::year("created_at"), Op::Eq, 2020)
        .where_("name", Op::Like, "A%");
    assert_eq!(
        qb.build().unwrap().sql,
        "SELECT id FROM users WHERE EXTRACT(YEAR FROM created_at) = :1 AND name LIKE :2"
    );
}

#[test]
fn missing_year_function_is_reported() {
    let err = select(["id"])
        .from("users")
        .where_(Field::year("created_at"), Op::Eq, 2020)
        .build_with(&NoYear)
        .unwrap_err();
    assert!(matches!(
        err,
        SqlError::UnsupportedFeature {
            feature: "year extraction",
            ..
        }
    ));
    assert_eq!(err.to_string(), "dialect NoYear does not support year extraction");
}

#[test]
fn config_selects_dialect() {
    let options = RenderConfig::from_toml_str("dialect = \"sqlite\"")
        .unwrap()
        .into_options();
    let qb = select(["*"]).from("t").with_options(options).where_("a", Op::Eq, 1);
    assert_eq!(qb.build().unwrap().sql, "SELECT * FROM t WHERE a = ?");
    assert_eq!("mysql".parse::<DialectKind>().unwrap().dialect().name(), "MySQL");
}

#[test]
fn concurrent_renders_do_not_interfere() {
    let dialects: Vec<Arc<dyn Dialect>> = vec![
        Arc::new(MySql),
        Arc::new(Postgres),
        Arc::new(Sqlite),
        Arc::new(Oracle),
    ];

    let handles: Vec<_> = dialects
        .into_iter()
        .map(|dialect| {
            thread::spawn(move || {
                let qb = select(["id"])
                    .from("users")
                    .where_("a", Op::Eq, 1)
                    .where_("b", Op::Eq, 2);
                let mut seen = Vec::new();
                for _ in 0..200 {
                    seen.push(qb.build_with(dialect.as_ref()).unwrap().sql);
                }
                (dialect.name().to_string(), seen)
            })
        })
        .collect();

    for handle in handles {
        let (name, seen) = handle.join().unwrap();
        let expected = match name.as_str() {
            "PostgreSQL" => "SELECT id FROM users WHERE a = $1 AND b = $2",
            "Oracle" => "SELECT id FROM users WHERE a = :1 AND b = :2",
            _ => "SELECT id FROM users WHERE a = ? AND b = ?",
        };
        assert!(seen.iter().all(|sql| sql == expected), "{name}");
    }
}
