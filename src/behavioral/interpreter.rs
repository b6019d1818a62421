//! Interpreter: represent a tiny grammar as a tree of expressions and
//! evaluate it against a context of variable bindings.
//!
//! The grammar has three productions: a variable, an integer constant and
//! the sum of two expressions. Each `Add` node owns both operands, so the
//! tree is released as a unit.

use crate::core::Transcript;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InterpretError {
    #[error("Variable '{0}' is not bound in the context")]
    UnboundVariable(String),

    #[error("Integer overflow evaluating '{0}'")]
    Overflow(String),
}

/// Variable bindings visible to an expression.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Context {
    bindings: HashMap<String, i64>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, replacing any previous binding.
    pub fn bind(&mut self, name: impl Into<String>, value: i64) -> &mut Self {
        self.bindings.insert(name.into(), value);
        self
    }

    pub fn lookup(&self, name: &str) -> Result<i64, InterpretError> {
        self.bindings
            .get(name)
            .copied()
            .ok_or_else(|| InterpretError::UnboundVariable(name.to_string()))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expression {
    Variable(String),
    Constant(i64),
    Add(Box<Expression>, Box<Expression>),
}

impl Expression {
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn constant(value: i64) -> Self {
        Self::Constant(value)
    }

    pub fn add(left: Expression, right: Expression) -> Self {
        Self::Add(Box::new(left), Box::new(right))
    }

    pub fn interpret(&self, context: &Context) -> Result<i64, InterpretError> {
        match self {
            Self::Variable(name) => context.lookup(name),
            Self::Constant(value) => Ok(*value),
            Self::Add(left, right) => {
                let sum = left.interpret(context)?.checked_add(right.interpret(context)?);
                sum.ok_or_else(|| InterpretError::Overflow(self.to_string()))
            }
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Variable(name) => f.write_str(name),
            Self::Constant(value) => write!(f, "{value}"),
            Self::Add(left, right) => write!(f, "{left} + {right}"),
        }
    }
}

fn report(expression: &Expression, context: &Context, out: &mut Transcript) {
    match expression.interpret(context) {
        Ok(value) => out.line(format!("Result of expression '{expression}': {value}")),
        Err(err) => out.line(format!("Could not evaluate '{expression}': {err}")),
    }
}

pub fn demo() -> Transcript {
    let mut out = Transcript::new();

    let mut context = Context::new();
    context.bind("x", 10).bind("y", 5);

    let expression = Expression::add(Expression::variable("x"), Expression::variable("y"));
    let expression1 = Expression::add(Expression::variable("x"), Expression::constant(6));

    report(&expression, &context, &mut out);
    report(&expression1, &context, &mut out);

    out
}
