//! Comparison operators and their SQL tokens.

use std::fmt;

/// Query operator for building conditions.
///
/// Every variant maps to exactly one SQL token (see [`Op::token`]). The
/// tokens are emitted verbatim into generated SQL.
///
/// # Example
/// ```ignore
/// use fluent_sql::{Op, select};
///
/// select().from("employees").where_("salary", Op::GrEq, 3000);
/// select().from("employees").where_("department_id", Op::In, vec![8, 9]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `=`
    Eq,
    /// `<>`
    NotEq,
    /// `!=`
    Diff,
    /// `>`
    Greater,
    /// `<`
    Lesser,
    /// `>=`
    GrEq,
    /// `<=`
    LeEq,
    /// `LIKE`
    Like,
    /// `NOT LIKE`
    NotLike,
    /// `IN`
    In,
    /// `NOT IN`
    NotIn,
    /// `BETWEEN`
    Between,
    /// `NOT BETWEEN`
    NotBetween,
    /// `IS NULL`
    Null,
    /// `IS NOT NULL`
    NotNull,
    /// `EXISTS`
    Exists,
    /// `NOT EXISTS`
    NotExists,
    /// `= ANY`
    EqAny,
    /// `<> ANY`
    NotEqAny,
    /// `!= ANY`
    DiffAny,
    /// `> ANY`
    GreaterAny,
    /// `< ANY`
    LesserAny,
    /// `>= ANY`
    GrEqAny,
    /// `<= ANY`
    LeEqAny,
    /// `= ALL`
    EqAll,
    /// `<> ALL`
    NotEqAll,
    /// `!= ALL`
    DiffAll,
    /// `> ALL`
    GreaterAll,
    /// `< ALL`
    LesserAll,
    /// `>= ALL`
    GrEqAll,
    /// `<= ALL`
    LeEqAll,
}

/// Operator families, grouped by the operand shape they accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpFamily {
    /// Plain comparators and LIKE: scalar, column reference or sub-query.
    Compare,
    /// IN / NOT IN: list or sub-query.
    List,
    /// BETWEEN / NOT BETWEEN: range.
    Range,
    /// IS NULL / IS NOT NULL: no operand.
    Null,
    /// EXISTS / NOT EXISTS: sub-query.
    Exists,
    /// ANY / ALL comparators: sub-query.
    Quantified,
}

impl Op {
    /// All operators, in declaration order.
    pub const ALL: [Op; 31] = [
        Op::Eq,
        Op::NotEq,
        Op::Diff,
        Op::Greater,
        Op::Lesser,
        Op::GrEq,
        Op::LeEq,
        Op::Like,
        Op::NotLike,
        Op::In,
        Op::NotIn,
        Op::Between,
        Op::NotBetween,
        Op::Null,
        Op::NotNull,
        Op::Exists,
        Op::NotExists,
        Op::EqAny,
        Op::NotEqAny,
        Op::DiffAny,
        Op::GreaterAny,
        Op::LesserAny,
        Op::GrEqAny,
        Op::LeEqAny,
        Op::EqAll,
        Op::NotEqAll,
        Op::DiffAll,
        Op::GreaterAll,
        Op::LesserAll,
        Op::GrEqAll,
        Op::LeEqAll,
    ];

    /// The SQL token emitted for this operator.
    pub const fn token(self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::NotEq => "<>",
            Op::Diff => "!=",
            Op::Greater => ">",
            Op::Lesser => "<",
            Op::GrEq => ">=",
            Op::LeEq => "<=",
            Op::Like => "LIKE",
            Op::NotLike => "NOT LIKE",
            Op::In => "IN",
            Op::NotIn => "NOT IN",
            Op::Between => "BETWEEN",
            Op::NotBetween => "NOT BETWEEN",
            Op::Null => "IS NULL",
            Op::NotNull => "IS NOT NULL",
            Op::Exists => "EXISTS",
            Op::NotExists => "NOT EXISTS",
            Op::EqAny => "= ANY",
            Op::NotEqAny => "<> ANY",
            Op::DiffAny => "!= ANY",
            Op::GreaterAny => "> ANY",
            Op::LesserAny => "< ANY",
            Op::GrEqAny => ">= ANY",
            Op::LeEqAny => "<= ANY",
            Op::EqAll => "= ALL",
            Op::NotEqAll => "<> ALL",
            Op::DiffAll => "!= ALL",
            Op::GreaterAll => "> ALL",
            Op::LesserAll => "< ALL",
            Op::GrEqAll => ">= ALL",
            Op::LeEqAll => "<= ALL",
        }
    }

    /// The family this operator belongs to.
    pub const fn family(self) -> OpFamily {
        match self {
            Op::Eq
            | Op::NotEq
            | Op::Diff
            | Op::Greater
            | Op::Lesser
            | Op::GrEq
            | Op::LeEq
            | Op::Like
            | Op::NotLike => OpFamily::Compare,
            Op::In | Op::NotIn => OpFamily::List,
            Op::Between | Op::NotBetween => OpFamily::Range,
            Op::Null | Op::NotNull => OpFamily::Null,
            Op::Exists | Op::NotExists => OpFamily::Exists,
            Op::EqAny
            | Op::NotEqAny
            | Op::DiffAny
            | Op::GreaterAny
            | Op::LesserAny
            | Op::GrEqAny
            | Op::LeEqAny
            | Op::EqAll
            | Op::NotEqAll
            | Op::DiffAll
            | Op::GreaterAll
            | Op::LesserAll
            | Op::GrEqAll
            | Op::LeEqAll => OpFamily::Quantified,
        }
    }

    /// Whether this operator is one of the negated forms (`NOT IN`, `NOT BETWEEN`, ...).
    pub const fn is_negated(self) -> bool {
        matches!(
            self,
            Op::NotLike | Op::NotIn | Op::NotBetween | Op::NotNull | Op::NotExists
        )
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Logical connective linking a condition to the previously rendered sibling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Combinator {
    #[default]
    And,
    Or,
}

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Order {
    #[default]
    Asc,
    Desc,
}

impl Order {
    pub const fn as_str(self) -> &'static str {
        match self {
            Order::Asc => "ASC",
            Order::Desc => "DESC",
        }
    }
}
