//! Condition tree for WHERE, HAVING, JOIN ... ON and CASE arms.
//!
//! A condition list is an ordered sequence of leaves and groups. Each entry
//! carries the connective ([`Combinator`]) that links it to the previous
//! sibling. Rendering walks the list left to right:
//!
//! - an OR entry is folded onto the previously rendered term;
//! - an AND entry (or the first entry, whatever its combinator) starts a new term;
//! - entries that render to nothing (empty groups) are skipped;
//! - when more than one term remains, terms built from an OR chain are
//!   parenthesized, so `a AND b OR c AND d` means `a AND (b OR c) AND d`;
//! - terms are joined with `AND`.
//!
//! Groups render their own children by the same rule and wrap the result in
//! parentheses. Values are emitted through the [`Renderer`], so arguments are
//! appended in exactly the order their placeholders appear in the text.

use crate::error::{SqlError, SqlResult};
use crate::operator::{Combinator, Op, OpFamily};
use crate::qb::{SelectQb, SqlBuilder};
use crate::render::Renderer;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::ops::RangeInclusive;
use uuid::Uuid;

/// Left-hand side of a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    /// A column or expression, emitted verbatim.
    Column(String),
    /// `NOT column`
    Not(String),
    /// The dialect's year extraction applied to the column.
    Year(String),
    /// No left-hand side, e.g. `EXISTS (...)`.
    Empty,
}

impl Field {
    pub fn not(column: impl Into<String>) -> Self {
        Field::Not(column.into())
    }

    pub fn year(column: impl Into<String>) -> Self {
        Field::Year(column.into())
    }

    /// True when there is no left-hand side to emit.
    pub fn is_empty(&self) -> bool {
        match self {
            Field::Column(c) | Field::Not(c) | Field::Year(c) => c.trim().is_empty(),
            Field::Empty => true,
        }
    }

    fn render(&self, r: &Renderer<'_>) -> SqlResult<String> {
        match self {
            Field::Column(c) => Ok(c.clone()),
            Field::Not(c) => Ok(format!("NOT {c}")),
            Field::Year(c) => r.dialect().year_function(c),
            Field::Empty => Ok(String::new()),
        }
    }
}

impl From<&str> for Field {
    fn from(s: &str) -> Self {
        Field::Column(s.to_string())
    }
}

impl From<String> for Field {
    fn from(s: String) -> Self {
        Field::Column(s)
    }
}

impl From<&String> for Field {
    fn from(s: &String) -> Self {
        Field::Column(s.clone())
    }
}

/// Right-hand side of a condition.
///
/// Which shapes are accepted depends on the operator family; a mismatch is
/// reported as [`SqlError::OperandMismatch`] at render time.
#[derive(Debug, Clone)]
pub enum Operand {
    /// Single value: inlined or bound.
    Scalar(Value),
    /// Column reference: emitted verbatim, never bound.
    Column(String),
    /// Low and high bounds for BETWEEN.
    Range(Value, Value),
    /// Values for IN.
    List(Vec<Value>),
    /// Nested SELECT, rendered in parentheses under the outer dialect.
    Subquery(Box<SelectQb>),
    /// No operand (IS NULL / IS NOT NULL).
    Absent,
}

impl Operand {
    /// Reference another column instead of binding a value.
    pub fn column(name: impl Into<String>) -> Self {
        Operand::Column(name.into())
    }

    pub fn range(low: impl Into<Value>, high: impl Into<Value>) -> Self {
        Operand::Range(low.into(), high.into())
    }

    pub fn list<V: Into<Value>>(values: impl IntoIterator<Item = V>) -> Self {
        Operand::List(values.into_iter().map(Into::into).collect())
    }

    pub fn subquery(query: SelectQb) -> Self {
        Operand::Subquery(Box::new(query))
    }

    /// Article-prefixed kind name for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "a scalar",
            Operand::Column(_) => "a column reference",
            Operand::Range(..) => "a range",
            Operand::List(_) => "a value list",
            Operand::Subquery(_) => "a sub-query",
            Operand::Absent => "no operand",
        }
    }
}

/// Shorthand for [`Operand::column`].
pub fn col(name: impl Into<String>) -> Operand {
    Operand::column(name)
}

macro_rules! impl_scalar_operand {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                fn from(v: $t) -> Self {
                    Operand::Scalar(Value::from(v))
                }
            }
        )*
    };
}

impl_scalar_operand!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    f32,
    f64,
    &str,
    String,
    &String,
    NaiveDate,
    NaiveDateTime,
    DateTime<Utc>,
    Uuid,
    serde_json::Value,
    Value,
);

/// `None` becomes a bound or inlined `NULL`, so `eq("f", None)` renders
/// `f = NULL`, which never matches. Use `is_null` to test for NULL, or
/// `eq_opt` to skip the condition when the value is absent.
impl<T: Into<Value>> From<Option<T>> for Operand {
    fn from(v: Option<T>) -> Self {
        Operand::Scalar(Value::from(v))
    }
}

impl<T: Into<Value>> From<Vec<T>> for Operand {
    fn from(values: Vec<T>) -> Self {
        Operand::list(values)
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Operand {
    fn from(values: [T; N]) -> Self {
        Operand::list(values)
    }
}

impl<T: Into<Value>> From<RangeInclusive<T>> for Operand {
    fn from(range: RangeInclusive<T>) -> Self {
        let (low, high) = range.into_inner();
        Operand::range(low, high)
    }
}

impl From<SelectQb> for Operand {
    fn from(query: SelectQb) -> Self {
        Operand::subquery(query)
    }
}

impl From<()> for Operand {
    fn from(_: ()) -> Self {
        Operand::Absent
    }
}

/// A node of the condition tree.
#[derive(Debug, Clone)]
pub enum Condition {
    Leaf {
        field: Field,
        op: Op,
        operand: Operand,
        combinator: Combinator,
    },
    Group {
        children: Vec<Condition>,
        combinator: Combinator,
    },
}

impl Condition {
    /// Leaf condition joined with AND.
    pub fn new(field: impl Into<Field>, op: Op, operand: impl Into<Operand>) -> Self {
        Condition::Leaf {
            field: field.into(),
            op,
            operand: operand.into(),
            combinator: Combinator::And,
        }
    }

    /// Group condition joined with AND.
    pub fn group(children: Vec<Condition>) -> Self {
        Condition::Group {
            children,
            combinator: Combinator::And,
        }
    }

    /// Join this condition to its previous sibling with OR.
    pub fn or(self) -> Self {
        self.with_combinator(Combinator::Or)
    }

    pub fn with_combinator(mut self, value: Combinator) -> Self {
        match &mut self {
            Condition::Leaf { combinator, .. } | Condition::Group { combinator, .. } => {
                *combinator = value;
            }
        }
        self
    }

    pub fn combinator(&self) -> Combinator {
        match self {
            Condition::Leaf { combinator, .. } | Condition::Group { combinator, .. } => {
                *combinator
            }
        }
    }

    /// Render this node. Empty groups render to an empty string.
    pub fn render(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        match self {
            Condition::Leaf {
                field, op, operand, ..
            } => render_leaf(field, *op, operand, r),
            Condition::Group { children, .. } => {
                let inner = fold(children, r)?;
                if inner.is_empty() {
                    Ok(inner)
                } else {
                    Ok(format!("({inner})"))
                }
            }
        }
    }
}

fn expected_operand(family: OpFamily) -> &'static str {
    match family {
        OpFamily::Compare => "a scalar, column reference or sub-query",
        OpFamily::List => "a value list or sub-query",
        OpFamily::Range => "a range",
        OpFamily::Null => "no operand",
        OpFamily::Exists | OpFamily::Quantified => "a sub-query",
    }
}

fn render_leaf(
    field: &Field,
    op: Op,
    operand: &Operand,
    r: &mut Renderer<'_>,
) -> SqlResult<String> {
    let family = op.family();
    match (family == OpFamily::Exists, field.is_empty()) {
        (true, false) => {
            return Err(SqlError::validation(format!(
                "operator `{op}` takes no left-hand field, found {field:?}"
            )));
        }
        (false, true) => {
            return Err(SqlError::validation(format!(
                "operator `{op}` requires a left-hand field"
            )));
        }
        _ => {}
    }
    let lhs = field.render(r)?;

    let rhs = match (family, operand) {
        (OpFamily::Null, Operand::Absent) => None,
        (OpFamily::Compare, Operand::Scalar(v)) => Some(r.value(v)?),
        (OpFamily::Compare, Operand::Column(c)) => Some(c.clone()),
        (OpFamily::List, Operand::List(values)) => {
            if values.is_empty() {
                // Empty IN matches nothing; empty NOT IN matches everything.
                return Ok(if op == Op::In { "1=0" } else { "1=1" }.to_string());
            }
            Some(format!("({})", r.value_list(values)?))
        }
        (OpFamily::Range, Operand::Range(low, high)) => {
            let low = r.value(low)?;
            let high = r.value(high)?;
            Some(format!("{low} AND {high}"))
        }
        (
            OpFamily::Compare | OpFamily::List | OpFamily::Exists | OpFamily::Quantified,
            Operand::Subquery(query),
        ) => Some(format!("({})", query.render_into(r)?)),
        (_, other) => {
            return Err(SqlError::operand_mismatch(
                op,
                expected_operand(family),
                other.kind(),
            ));
        }
    };

    let mut sql = lhs;
    if !sql.is_empty() {
        sql.push(' ');
    }
    sql.push_str(op.token());
    if let Some(rhs) = rhs {
        sql.push(' ');
        sql.push_str(&rhs);
    }
    Ok(sql)
}

struct Term {
    sql: String,
    or_chain: bool,
}

/// Render a condition list by the AND/OR folding rule.
///
/// Returns an empty string when nothing renders.
pub(crate) fn fold(conditions: &[Condition], r: &mut Renderer<'_>) -> SqlResult<String> {
    let mut terms: Vec<Term> = Vec::new();

    for condition in conditions {
        let sql = condition.render(r)?;
        if sql.is_empty() {
            continue;
        }
        match (condition.combinator(), terms.last_mut()) {
            (Combinator::Or, Some(last)) => {
                last.sql.push_str(" OR ");
                last.sql.push_str(&sql);
                last.or_chain = true;
            }
            // A leading OR has nothing to attach to and acts as AND.
            _ => terms.push(Term {
                sql,
                or_chain: false,
            }),
        }
    }

    if terms.len() == 1 {
        return Ok(terms.pop().map(|t| t.sql).unwrap_or_default());
    }

    Ok(terms
        .into_iter()
        .map(|t| {
            if t.or_chain {
                format!("({})", t.sql)
            } else {
                t.sql
            }
        })
        .collect::<Vec<_>>()
        .join(" AND "))
}

/// Ordered condition list owned by a clause (WHERE, HAVING).
#[derive(Debug, Clone, Default)]
pub struct Conditions {
    items: Vec<Condition>,
}

impl Conditions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, condition: Condition) {
        self.items.push(condition);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn as_slice(&self) -> &[Condition] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Condition> {
        self.items
    }

    /// Render the folded list without a keyword.
    pub fn render(&self, r: &mut Renderer<'_>) -> SqlResult<String> {
        fold(&self.items, r)
    }

    /// Render `KEYWORD folded-list`, or `None` when nothing renders.
    pub fn render_clause(
        &self,
        keyword: &str,
        r: &mut Renderer<'_>,
    ) -> SqlResult<Option<String>> {
        let body = self.render(r)?;
        if body.is_empty() {
            Ok(None)
        } else {
            Ok(Some(format!("{keyword} {body}")))
        }
    }
}

impl From<Vec<Condition>> for Conditions {
    fn from(items: Vec<Condition>) -> Self {
        Self { items }
    }
}

/// Builder for a parenthesized condition group.
///
/// # Example
/// ```ignore
/// use fluent_sql::{Op, select};
///
/// // WHERE department_id = 8 AND (salary < 3000 OR salary > 9000)
/// select(["*"])
///     .from("employees")
///     .where_("department_id", Op::Eq, 8)
///     .where_group(|g| g.lt("salary", 3000).or_where("salary", Op::Greater, 9000));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GroupBuilder {
    conditions: Conditions,
}

impl GroupBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    impl_where_methods!(conditions);

    /// Finish the group as an AND-joined [`Condition::Group`].
    pub fn into_condition(self) -> Condition {
        Condition::group(self.conditions.into_vec())
    }
}
