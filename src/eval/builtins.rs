// SPDX-FileCopyrightText: 2022 Severen Redwood <me@severen.dev>
// SPDX-License-Identifier: GPL-3.0-or-later

//! The fixed set of host-implemented functions callable from Monkey.
//!
//! Built-ins are deliberately kept out of the root [`Env`](crate::eval::Env) — the
//! evaluator only consults this table after an identifier lookup in the environment
//! chain fails, so a Monkey program is free to `let len = 5;` and shadow a built-in
//! without that mutating any shared state.

use std::rc::Rc;

use crate::eval::Value;

/// Look up a built-in by name.
pub fn lookup(name: &str) -> Option<Value> {
  let f: crate::eval::object::BuiltinFn = match name {
    "len" => len,
    "first" => first,
    "last" => last,
    "rest" => rest,
    "push" => push,
    _ => return None,
  };
  Some(Value::Builtin(f))
}

fn wrong_arg_count(got: usize, want: usize) -> Value {
  Value::error(format!("wrong number of args, got {got}, want = {want}"))
}

fn wrong_arg_type(name: &str, expected: &str, got: &Value) -> Value {
  Value::error(format!("argument to `{name}` must be {expected}, got {}", got.type_tag()))
}

fn len(args: &[Value]) -> Value {
  if args.len() != 1 {
    return wrong_arg_count(args.len(), 1);
  }
  match &args[0] {
    Value::Str(s) => Value::Integer(s.len() as i64),
    Value::Array(elements) => Value::Integer(elements.len() as i64),
    other => wrong_arg_type("len", "STRING or ARRAY", other),
  }
}

fn first(args: &[Value]) -> Value {
  if args.len() != 1 {
    return wrong_arg_count(args.len(), 1);
  }
  match &args[0] {
    Value::Array(elements) => elements.first().cloned().unwrap_or(Value::Null),
    other => wrong_arg_type("first", "ARRAY", other),
  }
}

fn last(args: &[Value]) -> Value {
  if args.len() != 1 {
    return wrong_arg_count(args.len(), 1);
  }
  match &args[0] {
    Value::Array(elements) => elements.last().cloned().unwrap_or(Value::Null),
    other => wrong_arg_type("last", "ARRAY", other),
  }
}

fn rest(args: &[Value]) -> Value {
  if args.len() != 1 {
    return wrong_arg_count(args.len(), 1);
  }
  match &args[0] {
    Value::Array(elements) => {
      if elements.is_empty() {
        Value::Null
      } else {
        Value::Array(Rc::new(elements[1..].to_vec()))
      }
    },
    other => wrong_arg_type("rest", "ARRAY", other),
  }
}

fn push(args: &[Value]) -> Value {
  if args.len() != 2 {
    return wrong_arg_count(args.len(), 2);
  }
  match &args[0] {
    Value::Array(elements) => {
      let mut new_elements = elements.as_ref().clone();
      new_elements.push(args[1].clone());
      Value::Array(Rc::new(new_elements))
    },
    other => wrong_arg_type("push", "ARRAY", other),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn call(name: &str, args: &[Value]) -> Value {
    match lookup(name).unwrap() {
      Value::Builtin(f) => f(args),
      _ => unreachable!(),
    }
  }

  #[test]
  fn len_of_string_and_array() {
    assert_eq!(call("len", &[Value::Str(Rc::from("hello"))]), Value::Integer(5));
    assert_eq!(
      call("len", &[Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]))]),
      Value::Integer(3)
    );
  }

  #[test]
  fn len_rejects_wrong_arity_and_type() {
    assert!(matches!(call("len", &[]), Value::Error(_)));
    assert!(matches!(call("len", &[Value::Integer(1)]), Value::Error(_)));
  }

  #[test]
  fn first_and_last() {
    let arr = Value::Array(Rc::new(vec![Value::Integer(1), Value::Integer(2)]));
    assert_eq!(call("first", std::slice::from_ref(&arr)), Value::Integer(1));
    assert_eq!(call("last", std::slice::from_ref(&arr)), Value::Integer(2));

    let empty = Value::Array(Rc::new(vec![]));
    assert_eq!(call("first", std::slice::from_ref(&empty)), Value::Null);
    assert_eq!(call("last", &[empty]), Value::Null);
  }

  #[test]
  fn rest_drops_the_first_element_without_mutating_the_original() {
    let original = Rc::new(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
    let arr = Value::Array(Rc::clone(&original));

    let result = call("rest", std::slice::from_ref(&arr));
    match result {
      Value::Array(elements) => assert_eq!(elements.len(), 2),
      other => panic!("expected an array, got {other:?}"),
    }
    assert_eq!(original.len(), 3, "the original array must be untouched");
  }

  #[test]
  fn rest_of_empty_array_is_null() {
    assert_eq!(call("rest", &[Value::Array(Rc::new(vec![]))]), Value::Null);
  }

  #[test]
  fn push_appends_without_mutating_the_original() {
    let original = Rc::new(vec![Value::Integer(1), Value::Integer(2)]);
    let arr = Value::Array(Rc::clone(&original));

    let result = call("push", &[arr, Value::Integer(3)]);
    match result {
      Value::Array(elements) => assert_eq!(elements.as_ref(), &[Value::Integer(1), Value::Integer(2), Value::Integer(3)]),
      other => panic!("expected an array, got {other:?}"),
    }
    assert_eq!(original.len(), 2, "the original array must be untouched");
  }

  #[test]
  fn unknown_builtin_is_absent() {
    assert!(lookup("nonexistent").is_none());
  }
}
