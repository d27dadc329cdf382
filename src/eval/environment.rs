// SPDX-FileCopyrightText: 2022 Severen Redwood <me@severen.dev>
// SPDX-License-Identifier: GPL-3.0-or-later

//! A lexically-scoped, chained mapping from identifiers to values.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::eval::Value;

struct EnvInner {
  store: HashMap<String, Value>,
  outer: Option<Env>,
}

/// An environment binding identifiers to values.
///
/// Environments are reference-counted and shared: a closure captures an `Env` by
/// cloning this handle (cheap — it is just an `Rc` bump), and every clone observes
/// mutations made through any other clone. A child environment's `outer` link lets
/// lookups fall through to enclosing scopes without copying their contents; `Rc` lets
/// an environment outlive the call that created it for as long as any closure still
/// references it, which is exactly what recursive and returned closures require.
#[derive(Clone, Debug)]
pub struct Env(Rc<RefCell<EnvInner>>);

impl std::fmt::Debug for EnvInner {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EnvInner").field("bindings", &self.store.len()).field("has_outer", &self.outer.is_some()).finish()
  }
}

impl Env {
  /// Create a fresh environment with no enclosing scope.
  pub fn new_root() -> Env {
    Env(Rc::new(RefCell::new(EnvInner { store: HashMap::new(), outer: None })))
  }

  /// Create a new environment enclosed by `outer`. Used when entering a function
  /// call: the new environment's lookups fall through to the function's captured
  /// environment once its own bindings (the parameters) are exhausted.
  pub fn new_enclosed(outer: &Env) -> Env {
    Env(Rc::new(RefCell::new(EnvInner { store: HashMap::new(), outer: Some(outer.clone()) })))
  }

  /// Look up `name`, searching this environment and then, if absent, each enclosing
  /// environment in turn.
  pub fn get(&self, name: &str) -> Option<Value> {
    let inner = self.0.borrow();
    match inner.store.get(name) {
      Some(value) => Some(value.clone()),
      None => inner.outer.as_ref().and_then(|outer| outer.get(name)),
    }
  }

  /// Bind `name` to `value` in this environment (not any enclosing one).
  pub fn set(&self, name: impl Into<String>, value: Value) -> Value {
    self.0.borrow_mut().store.insert(name.into(), value.clone());
    value
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn set_and_get() {
    let env = Env::new_root();
    env.set("x", Value::Integer(5));
    assert_eq!(env.get("x"), Some(Value::Integer(5)));
    assert_eq!(env.get("y"), None);
  }

  #[test]
  fn enclosed_environment_falls_through_to_outer() {
    let outer = Env::new_root();
    outer.set("x", Value::Integer(1));

    let inner = Env::new_enclosed(&outer);
    assert_eq!(inner.get("x"), Some(Value::Integer(1)));

    inner.set("x", Value::Integer(2));
    assert_eq!(inner.get("x"), Some(Value::Integer(2)));
    assert_eq!(outer.get("x"), Some(Value::Integer(1)), "shadowing in the inner scope must not affect the outer");
  }

  #[test]
  fn clones_share_the_same_bindings() {
    let env = Env::new_root();
    let alias = env.clone();

    alias.set("x", Value::Integer(42));
    assert_eq!(env.get("x"), Some(Value::Integer(42)));
  }
}
