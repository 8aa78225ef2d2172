/// Generate the condition-building methods for a consuming builder that owns
/// a [`Conditions`](crate::condition::Conditions) field.
///
/// Usage:
/// ```ignore
/// impl SelectQb {
///     impl_where_methods!(where_conditions);
/// }
/// ```
macro_rules! impl_where_methods {
    ($field:ident) => {
        /// Add a condition joined to the previous one with AND.
        pub fn where_(
            mut self,
            field: impl Into<$crate::condition::Field>,
            op: $crate::operator::Op,
            operand: impl Into<$crate::condition::Operand>,
        ) -> Self {
            self.$field
                .push($crate::condition::Condition::new(field, op, operand));
            self
        }

        /// Add a condition joined to the previous one with OR.
        pub fn or_where(
            mut self,
            field: impl Into<$crate::condition::Field>,
            op: $crate::operator::Op,
            operand: impl Into<$crate::condition::Operand>,
        ) -> Self {
            self.$field
                .push($crate::condition::Condition::new(field, op, operand).or());
            self
        }

        /// Add a parenthesized group joined with AND.
        pub fn where_group(
            mut self,
            build: impl FnOnce($crate::condition::GroupBuilder) -> $crate::condition::GroupBuilder,
        ) -> Self {
            self.$field
                .push(build($crate::condition::GroupBuilder::new()).into_condition());
            self
        }

        /// Add a parenthesized group joined with OR.
        pub fn or_where_group(
            mut self,
            build: impl FnOnce($crate::condition::GroupBuilder) -> $crate::condition::GroupBuilder,
        ) -> Self {
            self.$field
                .push(build($crate::condition::GroupBuilder::new()).into_condition().or());
            self
        }

        /// Add a prebuilt condition (leaf or group), keeping its combinator.
        pub fn where_condition(mut self, condition: $crate::condition::Condition) -> Self {
            self.$field.push(condition);
            self
        }

        /// Add WHERE: EXISTS (sub-query)
        pub fn where_exists(self, query: $crate::qb::SelectQb) -> Self {
            self.where_(
                $crate::condition::Field::Empty,
                $crate::operator::Op::Exists,
                query,
            )
        }

        /// Add WHERE: NOT EXISTS (sub-query)
        pub fn where_not_exists(self, query: $crate::qb::SelectQb) -> Self {
            self.where_(
                $crate::condition::Field::Empty,
                $crate::operator::Op::NotExists,
                query,
            )
        }

        /// Add WHERE: column = value
        pub fn eq(self, column: &str, value: impl Into<$crate::condition::Operand>) -> Self {
            self.where_(column, $crate::operator::Op::Eq, value)
        }

        /// Add WHERE: column <> value
        pub fn ne(self, column: &str, value: impl Into<$crate::condition::Operand>) -> Self {
            self.where_(column, $crate::operator::Op::NotEq, value)
        }

        /// Add WHERE: column > value
        pub fn gt(self, column: &str, value: impl Into<$crate::condition::Operand>) -> Self {
            self.where_(column, $crate::operator::Op::Greater, value)
        }

        /// Add WHERE: column >= value
        pub fn gte(self, column: &str, value: impl Into<$crate::condition::Operand>) -> Self {
            self.where_(column, $crate::operator::Op::GrEq, value)
        }

        /// Add WHERE: column < value
        pub fn lt(self, column: &str, value: impl Into<$crate::condition::Operand>) -> Self {
            self.where_(column, $crate::operator::Op::Lesser, value)
        }

        /// Add WHERE: column <= value
        pub fn lte(self, column: &str, value: impl Into<$crate::condition::Operand>) -> Self {
            self.where_(column, $crate::operator::Op::LeEq, value)
        }

        /// Add WHERE: column LIKE pattern
        pub fn like(self, column: &str, pattern: impl Into<$crate::value::Value>) -> Self {
            self.where_(
                column,
                $crate::operator::Op::Like,
                $crate::condition::Operand::Scalar(pattern.into()),
            )
        }

        /// Add WHERE: column NOT LIKE pattern
        pub fn not_like(self, column: &str, pattern: impl Into<$crate::value::Value>) -> Self {
            self.where_(
                column,
                $crate::operator::Op::NotLike,
                $crate::condition::Operand::Scalar(pattern.into()),
            )
        }

        /// Add WHERE: column IN (values...)
        pub fn in_list<V: Into<$crate::value::Value>>(
            self,
            column: &str,
            values: impl IntoIterator<Item = V>,
        ) -> Self {
            self.where_(
                column,
                $crate::operator::Op::In,
                $crate::condition::Operand::list(values),
            )
        }

        /// Add WHERE: column NOT IN (values...)
        pub fn not_in<V: Into<$crate::value::Value>>(
            self,
            column: &str,
            values: impl IntoIterator<Item = V>,
        ) -> Self {
            self.where_(
                column,
                $crate::operator::Op::NotIn,
                $crate::condition::Operand::list(values),
            )
        }

        /// Add WHERE: column BETWEEN low AND high
        pub fn between(
            self,
            column: &str,
            low: impl Into<$crate::value::Value>,
            high: impl Into<$crate::value::Value>,
        ) -> Self {
            self.where_(
                column,
                $crate::operator::Op::Between,
                $crate::condition::Operand::range(low, high),
            )
        }

        /// Add WHERE: column NOT BETWEEN low AND high
        pub fn not_between(
            self,
            column: &str,
            low: impl Into<$crate::value::Value>,
            high: impl Into<$crate::value::Value>,
        ) -> Self {
            self.where_(
                column,
                $crate::operator::Op::NotBetween,
                $crate::condition::Operand::range(low, high),
            )
        }

        /// Add WHERE: column IS NULL
        pub fn is_null(self, column: &str) -> Self {
            self.where_(
                column,
                $crate::operator::Op::Null,
                $crate::condition::Operand::Absent,
            )
        }

        /// Add WHERE: column IS NOT NULL
        pub fn is_not_null(self, column: &str) -> Self {
            self.where_(
                column,
                $crate::operator::Op::NotNull,
                $crate::condition::Operand::Absent,
            )
        }

        /// Add WHERE if value is Some: column = value
        pub fn eq_opt<T: Into<$crate::condition::Operand>>(
            self,
            column: &str,
            value: Option<T>,
        ) -> Self {
            match value {
                Some(v) => self.eq(column, v),
                None => self,
            }
        }

        /// Add WHERE if pattern is Some: column LIKE pattern
        pub fn like_opt<T: Into<$crate::value::Value>>(
            self,
            column: &str,
            pattern: Option<T>,
        ) -> Self {
            match pattern {
                Some(p) => self.like(column, p),
                None => self,
            }
        }

        /// Add WHERE if values is Some and non-empty: column IN (values...)
        pub fn in_opt<V: Into<$crate::value::Value>>(
            self,
            column: &str,
            values: Option<Vec<V>>,
        ) -> Self {
            match values {
                Some(v) if !v.is_empty() => self.in_list(column, v),
                _ => self,
            }
        }
    };
}
