// SPDX-FileCopyrightText: 2022 Severen Redwood <me@severen.dev>
// SPDX-License-Identifier: GPL-3.0-or-later

//! The runtime value model for Monkey.

use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

use crate::eval::Env;
use crate::syntax::{Block, Identifier};

/// A built-in function: a host-implemented callable reachable from Monkey source but
/// not present in any environment (see the module docs on [`crate::eval::builtins`]).
pub type BuiltinFn = fn(&[Value]) -> Value;

/// A Monkey runtime value.
///
/// This is a closed sum type: every value a Monkey program can produce or manipulate
/// is one of these variants. `ReturnValue` and `Error` are "unwind markers" — they do
/// not represent ordinary data but rather in-band signals that short-circuit
/// evaluation (see [`crate::eval::evaluator`]).
#[derive(Clone, Debug)]
pub enum Value {
  /// A 64-bit signed integer.
  Integer(i64),
  /// A Boolean.
  Boolean(bool),
  /// A string.
  Str(Rc<str>),
  /// An array of values. Arrays are immutable once constructed; built-ins that
  /// "modify" one (`push`, `rest`) allocate a new array instead.
  Array(Rc<Vec<Value>>),
  /// The absence of a value.
  Null,
  /// A value wrapped by a `return` statement, signalling that evaluation of the
  /// enclosing function (or program) should stop and unwrap to `value`.
  ReturnValue(Rc<Value>),
  /// A runtime error. Errors are first-class values: there is no exception
  /// mechanism, so every evaluator arm must check for one after each recursive call
  /// and propagate it unchanged.
  Error(Rc<str>),
  /// A user-defined function value, capturing the environment it was created in.
  Function { parameters: Rc<Vec<Identifier>>, body: Rc<Block>, env: Env },
  /// A built-in function.
  Builtin(BuiltinFn),
}

impl Value {
  /// Construct an error value by formatting its message.
  pub fn error(message: impl Into<String>) -> Value {
    Value::Error(Rc::from(message.into()))
  }

  /// This value's type tag, as used in error messages and by `inspect`.
  pub fn type_tag(&self) -> &'static str {
    match self {
      Value::Integer(_) => "INTEGER",
      Value::Boolean(_) => "BOOLEAN",
      Value::Str(_) => "STRING",
      Value::Array(_) => "ARRAY",
      Value::Null => "NULL",
      Value::ReturnValue(_) => "RETURN_VALUE",
      Value::Error(_) => "ERROR",
      Value::Function { .. } => "FUNCTION",
      Value::Builtin(_) => "BUILTIN",
    }
  }

  /// Is this value an [`Value::Error`]? Evaluator arms check this after every
  /// recursive call and propagate the error unchanged rather than continuing.
  /// `Value::ReturnValue` is the other unwind marker, but it is matched inline in
  /// [`crate::eval::evaluator::eval`] and `eval_block` rather than through this
  /// predicate.
  pub fn is_error(&self) -> bool {
    matches!(self, Value::Error(_))
  }

  /// Is this value truthy, per Monkey's truthiness table?
  ///
  /// `Null` and `Boolean(false)` are falsy; every other value, including `0` and the
  /// empty string, is truthy.
  pub fn is_truthy(&self) -> bool {
    !matches!(self, Value::Null | Value::Boolean(false))
  }

  /// Render this value the way the REPL and built-in error messages do.
  pub fn inspect(&self) -> String {
    match self {
      Value::Integer(value) => value.to_string(),
      Value::Boolean(value) => value.to_string(),
      Value::Str(value) => value.to_string(),
      Value::Array(elements) => {
        let elements = elements.iter().map(Value::inspect).collect::<Vec<_>>().join(", ");
        format!("[{elements}]")
      },
      Value::Null => "null".to_string(),
      Value::ReturnValue(value) => value.inspect(),
      Value::Error(message) => format!("ERROR: {message}"),
      Value::Function { parameters, body, .. } => {
        let parameters = parameters.iter().map(Identifier::to_string).collect::<Vec<_>>().join(", ");
        format!("fn({parameters}) {{\n{body}\n}}")
      },
      Value::Builtin(_) => "builtin function".to_string(),
    }
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.inspect())
  }
}

impl PartialEq for Value {
  /// Structural equality. Monkey's `==`/`!=` infix operator on two integers or two
  /// strings delegates to this (see the evaluator's infix dispatch); booleans and
  /// `Null` also compare structurally, which is observationally indistinguishable
  /// from comparing interned singletons by identity.
  fn eq(&self, other: &Self) -> bool {
    match (self, other) {
      (Value::Integer(a), Value::Integer(b)) => a == b,
      (Value::Boolean(a), Value::Boolean(b)) => a == b,
      (Value::Str(a), Value::Str(b)) => a == b,
      (Value::Null, Value::Null) => true,
      _ => false,
    }
  }
}
