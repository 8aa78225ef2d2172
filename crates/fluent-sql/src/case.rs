//! CASE expressions for the select list.

use crate::condition::{Condition, fold};
use crate::error::SqlResult;
use crate::render::Renderer;
use crate::value::Value;

/// What a WHEN arm tests.
#[derive(Debug, Clone)]
pub enum When {
    /// Simple CASE: compare the CASE expression with this value.
    Value(Value),
    /// Searched CASE: a condition list folded with the WHERE rules.
    Conditions(Vec<Condition>),
}

#[derive(Debug, Clone)]
pub struct WhenArm {
    pub when: When,
    pub then: String,
}

/// `CASE [expr] WHEN ... THEN ... END [alias]`
///
/// # Example
/// ```ignore
/// use fluent_sql::{Case, Condition, Op};
///
/// // CASE WHEN salary < 3000 THEN 'Low' ... END evaluation
/// Case::searched("evaluation")
///     .when_conditions(vec![Condition::new("salary", Op::Lesser, 3000)], "Low")
///     .when_conditions(vec![Condition::new("salary", Op::GrEq, 3000)], "High");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Case {
    expr: Option<String>,
    arms: Vec<WhenArm>,
    alias: Option<String>,
}

impl Case {
    /// Simple CASE over `expr`, e.g. `(2000 - YEAR(hire_date))`.
    pub fn simple(expr: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            expr: Some(expr.into()),
            arms: Vec::new(),
            alias: Some(alias.into()),
        }
    }

    /// Searched CASE without a leading expression.
    pub fn searched(alias: impl Into<String>) -> Self {
        Self {
            expr: None,
            arms: Vec::new(),
            alias: Some(alias.into()),
        }
    }

    /// Drop the alias after END.
    pub fn unaliased(mut self) -> Self {
        self.alias = None;
        self
    }

    /// Add `WHEN value THEN 'then'`.
    pub fn when(mut self, value: impl Into<Value>, then: impl Into<String>) -> Self {
        self.arms.push(WhenArm {
            when: When::Value(value.into()),
            then: then.into(),
        });
        self
    }

    /// Add `WHEN cond [AND|OR cond ...] THEN 'then'`.
    pub fn when_conditions(mut self, conditions: Vec<Condition>, then: impl Into<String>) -> Self {
        self.arms.push(WhenArm {
            when: When::Conditions(conditions),
            then: then.into(),
        });
        self
    }

    pub fn arms(&self) -> &[WhenArm] {
        &self.arms
    }

    /// Render the expression. The THEN result is always a text value.
    pub fn render(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        let mut parts = vec!["CASE".to_string()];
        if let Some(expr) = self.expr.as_deref().filter(|e| !e.is_empty()) {
            parts.push(expr.to_string());
        }
        for arm in &self.arms {
            let when = match &arm.when {
                When::Value(v) => r.value(v)?,
                When::Conditions(conditions) => fold(conditions, r)?,
            };
            let then = r.value(&Value::Text(arm.then.clone()))?;
            parts.push(format!("WHEN {when} THEN {then}"));
        }
        parts.push("END".to_string());
        if let Some(alias) = self.alias.as_deref().filter(|a| !a.is_empty()) {
            parts.push(alias.to_string());
        }
        Ok(parts.join(" "))
    }
}
