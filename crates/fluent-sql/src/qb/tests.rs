//! Tests for the qb module.

use crate::condition::{Condition, Field, Operand, col};
use crate::config::{RenderOptions, TraceConfig};
use crate::dialect::{MySql, Postgres, Sqlite};
use crate::error::SqlError;
use crate::operator::{Op, Order};
use crate::qb::{SelectQb, SqlBuilder, delete_from, insert_into, select, select_from, update};
use crate::value::Value;

#[test]
fn test_select_basic() {
    let qb = select_from("users");
    assert_eq!(qb.render().unwrap(), "SELECT * FROM users");
}

#[test]
fn test_select_without_from() {
    let qb = select(["1"]);
    assert_eq!(qb.render().unwrap(), "SELECT 1");
    assert_eq!(SelectQb::new().render().unwrap(), "SELECT *");
}

#[test]
fn test_select_with_conditions() {
    let qb = select_from("users")
        .eq("status", "active")
        .gt("age", 18)
        .limit(10, 0);

    let built = qb.build().unwrap();
    assert_eq!(
        built.sql,
        "SELECT * FROM users WHERE status = $1 AND age > $2 LIMIT $3 OFFSET $4"
    );
    assert_eq!(
        built.args.as_slice(),
        &[
            Value::from("active"),
            Value::from(18),
            Value::Int(10),
            Value::Int(0)
        ]
    );
    assert_eq!(
        qb.render().unwrap(),
        "SELECT * FROM users WHERE status = 'active' AND age > 18 LIMIT 10 OFFSET 0"
    );
}

#[test]
fn test_clause_order() {
    let qb = select(["d.department_name", "COUNT(*) AS headcount"])
        .from_as("employees", "e")
        .inner_join(
            "departments d",
            Condition::new("d.department_id", Op::Eq, col("e.department_id")),
        )
        .gte("e.salary", 3000)
        .group_by(["d.department_name"])
        .having("COUNT(*)", Op::Greater, 5)
        .order_by("headcount", Order::Desc)
        .limit(10, 20);

    assert_eq!(
        qb.render().unwrap(),
        "SELECT d.department_name, COUNT(*) AS headcount FROM employees e \
         INNER JOIN departments d ON d.department_id = e.department_id \
         WHERE e.salary >= 3000 GROUP BY d.department_name HAVING COUNT(*) > 5 \
         ORDER BY headcount DESC LIMIT 10 OFFSET 20"
    );

    let built = qb.build().unwrap();
    assert!(built.sql.contains("WHERE e.salary >= $1"));
    assert!(built.sql.contains("HAVING COUNT(*) > $2"));
    assert!(built.sql.ends_with("LIMIT $3 OFFSET $4"));
    assert_eq!(built.args.len(), 4);
}

#[test]
fn test_having_or_and_groups() {
    let qb = select(["department_id", "SUM(salary)"])
        .from("employees")
        .group_by(["department_id"])
        .having("SUM(salary)", Op::Greater, 10000)
        .or_having("COUNT(*)", Op::Greater, 3)
        .having_group(|g| g.lt("MIN(salary)", 2000));

    assert_eq!(
        qb.render().unwrap(),
        "SELECT department_id, SUM(salary) FROM employees GROUP BY department_id \
         HAVING (SUM(salary) > 10000 OR COUNT(*) > 3) AND (MIN(salary) < 2000)"
    );
}

#[test]
fn test_where_group() {
    let qb = select_from("employees")
        .eq("department_id", 8)
        .where_group(|g| {
            g.lt("salary", 3000)
                .or_where("salary", Op::Greater, 9000)
        })
        .or_where_group(|g| g.eq("manager_id", 100).is_null("commission_pct"));

    assert_eq!(
        qb.render().unwrap(),
        "SELECT * FROM employees WHERE department_id = 8 AND \
         ((salary < 3000 OR salary > 9000) OR (manager_id = 100 AND commission_pct IS NULL))"
    );
}

#[test]
fn test_empty_group_is_skipped() {
    let qb = select_from("employees")
        .where_group(|g| g)
        .eq("department_id", 8);
    assert_eq!(
        qb.render().unwrap(),
        "SELECT * FROM employees WHERE department_id = 8"
    );

    let qb = select_from("employees").where_group(|g| g);
    assert_eq!(qb.render().unwrap(), "SELECT * FROM employees");
}

#[test]
fn test_optional_helpers() {
    let name: Option<&str> = None;
    let qb = select_from("employees")
        .eq_opt("first_name", name)
        .like_opt("last_name", Some("Ch%"))
        .in_opt("department_id", Some(Vec::<i32>::new()))
        .in_opt("job_id", Some(vec![3, 4]));
    assert_eq!(
        qb.render().unwrap(),
        "SELECT * FROM employees WHERE last_name LIKE 'Ch%' AND job_id IN (3, 4)"
    );
}

#[test]
fn test_none_operand_is_a_null_value() {
    let qb = select_from("t").eq("f", None::<i32>);
    assert_eq!(qb.render().unwrap(), "SELECT * FROM t WHERE f = NULL");
    assert_eq!(qb.build().unwrap().args.into_vec(), vec![Value::Null]);

    let qb = select_from("t").eq_opt("f", None::<i32>).is_null("g");
    assert_eq!(qb.render().unwrap(), "SELECT * FROM t WHERE g IS NULL");
}

#[test]
fn test_subquery_shares_argument_list() {
    let inner = select(["department_id"])
        .from("departments")
        .where_("location_id", Op::Eq, 1700);
    let qb = select(["employee_id"])
        .from("employees")
        .where_("salary", Op::Greater, 5000)
        .where_("department_id", Op::In, inner)
        .where_("job_id", Op::NotEq, 9);

    let built = qb.build().unwrap();
    assert_eq!(
        built.sql,
        "SELECT employee_id FROM employees WHERE salary > $1 AND department_id IN \
         (SELECT department_id FROM departments WHERE location_id = $2) AND job_id <> $3"
    );
    assert_eq!(
        built.args.as_slice(),
        &[Value::from(5000), Value::from(1700), Value::from(9)]
    );
}

#[test]
fn test_nested_statement_uses_outer_dialect() {
    let inner = select(["1"])
        .from("dependents")
        .with_dialect(MySql)
        .where_(Field::year("born"), Op::Eq, 2001);
    let qb = select_from("employees")
        .with_dialect(Postgres)
        .where_exists(inner);

    assert_eq!(
        qb.build().unwrap().sql,
        "SELECT * FROM employees WHERE EXISTS \
         (SELECT 1 FROM dependents WHERE DATE_PART('year', born) = $1)"
    );
    assert_eq!(
        qb.build_with(&Sqlite).unwrap().sql,
        "SELECT * FROM employees WHERE EXISTS \
         (SELECT 1 FROM dependents WHERE strftime('%Y', born) = ?)"
    );
}

#[test]
fn test_dialect_placeholders() {
    let qb = select_from("t").eq("a", 1).eq("b", 2);
    assert_eq!(qb.build_with(&MySql).unwrap().sql, "SELECT * FROM t WHERE a = ? AND b = ?");
    assert_eq!(qb.build_with(&Postgres).unwrap().sql, "SELECT * FROM t WHERE a = $1 AND b = $2");
    assert_eq!(qb.build_with(&Sqlite).unwrap().sql, "SELECT * FROM t WHERE a = ? AND b = ?");
}

#[test]
fn test_with_options() {
    let options = RenderOptions::new()
        .with_dialect(MySql)
        .with_trace(TraceConfig::disabled());
    let qb = select_from("t").with_options(options).eq("a", 1);
    assert_eq!(qb.build().unwrap().sql, "SELECT * FROM t WHERE a = ?");
}

#[test]
fn test_aliased_subqueries() {
    let totals = select(["department_id", "SUM(salary) AS total"])
        .from("employees")
        .group_by(["department_id"])
        .alias("t");
    let qb = select(["t.department_id", "t.total"]).from(totals);
    assert_eq!(
        qb.render().unwrap(),
        "SELECT t.department_id, t.total FROM (SELECT department_id, SUM(salary) AS total \
         FROM employees GROUP BY department_id) AS t"
    );

    let unaliased = select(["MAX(salary)"]).from("employees");
    let qb = select(["first_name"]).column(unaliased).from("employees");
    assert_eq!(
        qb.render().unwrap(),
        "SELECT first_name, (SELECT MAX(salary) FROM employees) FROM employees"
    );

    let qb = select(["*"]).from_as(select_from("employees"), "x");
    assert_eq!(qb.render().unwrap(), "SELECT * FROM (SELECT * FROM employees) x");

    let recent = select_from("orders").gt("id", 100).alias("o");
    let built = select(["o.id"]).from_subquery(recent).eq("o.status", "paid").build().unwrap();
    assert_eq!(
        built.sql,
        "SELECT o.id FROM (SELECT * FROM orders WHERE id > $1) AS o WHERE o.status = $2"
    );
    assert_eq!(built.args.into_vec(), vec![Value::from(100), Value::from("paid")]);
}

#[test]
fn test_fetch_clause() {
    let qb = select_from("employees").order_by_asc("employee_id").fetch(10, 5);
    assert_eq!(
        qb.render().unwrap(),
        "SELECT * FROM employees ORDER BY employee_id ASC OFFSET 10 ROWS FETCH NEXT 5 ROWS ONLY"
    );
    let built = qb.build().unwrap();
    assert_eq!(built.args.as_slice(), &[Value::Int(10), Value::Int(5)]);
}

#[test]
fn test_paginate() {
    let qb = select_from("employees").paginate(3, 20);
    assert_eq!(
        qb.render().unwrap(),
        "SELECT * FROM employees LIMIT 20 OFFSET 40"
    );
    let qb = select_from("employees").paginate(0, 0);
    assert_eq!(qb.render().unwrap(), "SELECT * FROM employees LIMIT 1 OFFSET 0");

    let qb = select_from("employees").paginate(i64::MAX, 10);
    assert_eq!(
        qb.render().unwrap(),
        format!("SELECT * FROM employees LIMIT 10 OFFSET {}", i64::MAX)
    );
}

#[test]
fn test_non_finite_float_literal_is_an_error() {
    for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let qb = select_from("t").eq("f", v);
        let err = qb.render().unwrap_err();
        assert!(matches!(err, SqlError::Validation(_)), "{v}");

        let built = qb.build().unwrap();
        assert_eq!(built.sql, "SELECT * FROM t WHERE f = $1");
        assert_eq!(built.args.len(), 1);
    }
}

#[test]
fn test_missing_left_hand_field_is_an_error() {
    let err = select_from("t").where_(Field::Empty, Op::Eq, 1).render().unwrap_err();
    assert!(matches!(err, SqlError::Validation(_)));

    let err = select_from("t")
        .where_("id", Op::Exists, select_from("u"))
        .build()
        .unwrap_err();
    assert!(matches!(err, SqlError::Validation(_)));
}

#[test]
fn test_operand_mismatch_is_an_error() {
    let err = select_from("employees")
        .where_("salary", Op::Between, 3000)
        .render()
        .unwrap_err();
    assert!(err.is_operand_mismatch());

    let err = select_from("employees")
        .where_(Field::Empty, Op::Exists, vec![1])
        .build()
        .unwrap_err();
    assert!(err.is_operand_mismatch());
}

#[test]
fn test_insert_rows_and_query() {
    let qb = insert_into("products")
        .columns(["name", "price"])
        .row([Operand::from("Pen"), 1.5.into()])
        .row([Operand::from("Ink"), col("default_price")]);
    assert_eq!(
        qb.render().unwrap(),
        "INSERT INTO products (name, price) VALUES ('Pen', 1.5), ('Ink', default_price)"
    );
    let built = qb.build().unwrap();
    assert_eq!(
        built.sql,
        "INSERT INTO products (name, price) VALUES ($1, $2), ($3, default_price)"
    );
    assert_eq!(built.args.len(), 3);

    let qb = insert_into("archive")
        .columns(["id"])
        .query(select(["id"]).from("orders").lt("created_at", "2020-01-01"));
    assert_eq!(
        qb.build().unwrap().sql,
        "INSERT INTO archive (id) SELECT id FROM orders WHERE created_at < $1"
    );
}

#[test]
fn test_insert_validation() {
    let err = insert_into("products").columns(["a"]).render().unwrap_err();
    assert!(matches!(err, SqlError::MissingClause("VALUES")));

    let err = insert_into("products")
        .columns(["a", "b"])
        .row([1])
        .render()
        .unwrap_err();
    assert!(matches!(err, SqlError::Validation(_)));

    let err = insert_into("products")
        .row([Operand::range(1, 2)])
        .render()
        .unwrap_err();
    assert!(matches!(err, SqlError::Validation(_)));
}

#[test]
fn test_update() {
    let qb = update("employees")
        .set("salary", 9000)
        .set("manager_id", col("new_manager_id"))
        .eq("employee_id", 7);
    assert_eq!(
        qb.render().unwrap(),
        "UPDATE employees SET salary = 9000, manager_id = new_manager_id WHERE employee_id = 7"
    );
    let built = qb.build().unwrap();
    assert_eq!(
        built.sql,
        "UPDATE employees SET salary = $1, manager_id = new_manager_id WHERE employee_id = $2"
    );
}

#[test]
fn test_update_tuples_and_limits() {
    let qb = update("summary")
        .alias("s")
        .set_tuple(["sum_x", "avg_x"], [Operand::from(1), 34.5.into()])
        .lt("id", 100)
        .order_by("id", Order::Asc)
        .limit(10, 0);
    assert_eq!(
        qb.build().unwrap().sql,
        "UPDATE summary s SET (sum_x, avg_x) = ($1, $2) WHERE id < $3 ORDER BY id ASC LIMIT $4 OFFSET $5"
    );

    let err = update("summary")
        .set_tuple(["a", "b"], [1])
        .render()
        .unwrap_err();
    assert!(matches!(err, SqlError::Validation(_)));
}

#[test]
fn test_update_without_set() {
    let err = update("employees").eq("employee_id", 7).render().unwrap_err();
    assert!(matches!(err, SqlError::MissingClause("SET")));
}

#[test]
fn test_delete() {
    assert_eq!(delete_from("products").render().unwrap(), "DELETE FROM products");

    let qb = delete_from("customers")
        .alias("c")
        .eq("c.city", "Frankfurt")
        .or_where("c.city", Op::Eq, "Berlin");
    assert_eq!(
        qb.build().unwrap().sql,
        "DELETE FROM customers c WHERE c.city = $1 OR c.city = $2"
    );
}

#[test]
fn test_rendering_is_repeatable() {
    let qb = select_from("t").in_list("id", [1, 2, 3]);
    let first = qb.build().unwrap();
    let second = qb.build().unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), "SELECT * FROM t WHERE id IN ($1, $2, $3)");
}
