//! Fluent construction of filter expressions from field paths.
//!
//! [`Field`] is the entry point: name a field, then chain one predicate
//! method. Every method consumes the builder and returns a finished
//! [`Expr`]; argument values go through [`Value`]'s `From` conversions,
//! so strings, numbers, booleans and `Option` all work directly.

use crate::ast::{BinaryOperator, Expr, StringFunction};
use crate::value::Value;

/// A named field ready to be compared or tested.
///
/// Paths accept `.` or `/` as the segment separator and are normalized
/// to `/` (OData v4 navigation syntax) at construction, so rendering is
/// a plain echo of the stored path.
///
/// ```rust
/// use oq_ast::Field;
///
/// let expr = Field::new("status").eq("Active");
/// assert_eq!(expr.to_string(), "(status eq 'Active')");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    path: String,
}

#[allow(clippy::should_implement_trait)]
impl Field {
    /// New field reference. `worker.person.name` and `worker/person/name`
    /// produce the same normalized path.
    pub fn new(path: impl Into<String>) -> Self {
        Field {
            path: path.into().replace('.', "/"),
        }
    }

    /// The normalized slash-separated path.
    pub fn path(&self) -> &str {
        &self.path
    }

    fn compare(self, op: BinaryOperator, value: impl Into<Value>) -> Expr {
        Expr::binary(self.into(), op, Expr::Literal(value.into()))
    }

    fn apply(self, name: StringFunction, value: impl Into<Value>) -> Expr {
        Expr::Function {
            name,
            args: vec![self.into(), Expr::Literal(value.into())],
        }
    }

    /// `(field eq value)`
    pub fn eq(self, value: impl Into<Value>) -> Expr {
        self.compare(BinaryOperator::Eq, value)
    }

    /// `(field ne value)`
    pub fn ne(self, value: impl Into<Value>) -> Expr {
        self.compare(BinaryOperator::Ne, value)
    }

    /// `(field gt value)`
    pub fn gt(self, value: impl Into<Value>) -> Expr {
        self.compare(BinaryOperator::Gt, value)
    }

    /// `(field ge value)`
    pub fn ge(self, value: impl Into<Value>) -> Expr {
        self.compare(BinaryOperator::Ge, value)
    }

    /// `(field lt value)`
    pub fn lt(self, value: impl Into<Value>) -> Expr {
        self.compare(BinaryOperator::Lt, value)
    }

    /// `(field le value)`
    pub fn le(self, value: impl Into<Value>) -> Expr {
        self.compare(BinaryOperator::Le, value)
    }

    /// `contains(field, value)` substring test.
    pub fn contains(self, value: impl Into<Value>) -> Expr {
        self.apply(StringFunction::Contains, value)
    }

    /// `startswith(field, value)` prefix test.
    pub fn starts_with(self, value: impl Into<Value>) -> Expr {
        self.apply(StringFunction::StartsWith, value)
    }

    /// `endswith(field, value)` suffix test.
    pub fn ends_with(self, value: impl Into<Value>) -> Expr {
        self.apply(StringFunction::EndsWith, value)
    }

    /// Membership over a candidate list, emulated as a left-associated
    /// chain of `or`-joined equality checks (OData v4 has no native `in`).
    ///
    /// An empty list produces the always-false condition `(1 eq 0)` — a
    /// predicate over zero candidates holds for nothing, and rendering it
    /// that way keeps the call total.
    pub fn is_in<I, V>(self, values: I) -> Expr
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return Expr::binary(
                Expr::Literal(Value::Int(1)),
                BinaryOperator::Eq,
                Expr::Literal(Value::Int(0)),
            );
        };
        let mut expr = self.clone().eq(first);
        for value in values {
            expr = expr.or_with(self.clone().eq(value));
        }
        expr
    }

    /// Use the bare field as a sub-expression.
    pub fn into_expr(self) -> Expr {
        self.into()
    }
}

impl From<Field> for Expr {
    fn from(field: Field) -> Self {
        Expr::Field { path: field.path }
    }
}
