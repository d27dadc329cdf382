// SPDX-FileCopyrightText: 2022 Severen Redwood <me@severen.dev>
// SPDX-License-Identifier: GPL-3.0-or-later

//! The tree-walking evaluator: `eval(node, env) -> Value`.

use std::rc::Rc;

use crate::eval::{builtins, Env, Value};
use crate::syntax::{Block, Expression, Program, Statement};

/// Evaluate a complete program against `env`.
///
/// A top-level `return` unwraps to its inner value rather than escaping as a
/// [`Value::ReturnValue`] — there is nothing left for it to escape to.
pub fn eval(program: &Program, env: &Env) -> Value {
  let mut result = Value::Null;
  for statement in &program.statements {
    result = eval_statement(statement, env);
    match result {
      Value::ReturnValue(value) => return (*value).clone(),
      Value::Error(_) => return result,
      _ => {},
    }
  }
  result
}

/// Evaluate a block's statements, stopping early (without unwrapping) if one produces
/// a `ReturnValue` or `Error` — the caller decides what to do with the unwind marker.
fn eval_block(block: &Block, env: &Env) -> Value {
  let mut result = Value::Null;
  for statement in &block.statements {
    result = eval_statement(statement, env);
    if matches!(result, Value::ReturnValue(_) | Value::Error(_)) {
      return result;
    }
  }
  result
}

fn eval_statement(statement: &Statement, env: &Env) -> Value {
  match statement {
    Statement::Expression(expr) => eval_expression(expr, env),
    Statement::Block(block) => eval_block(block, env),
    Statement::Let { name, value } => {
      let value = eval_expression(value, env);
      if value.is_error() {
        return value;
      }
      env.set(name.name.clone(), value);
      Value::Null
    },
    Statement::Return { value } => {
      let value = eval_expression(value, env);
      if value.is_error() {
        return value;
      }
      Value::ReturnValue(Rc::new(value))
    },
  }
}

fn eval_expression(expr: &Expression, env: &Env) -> Value {
  match expr {
    Expression::IntegerLiteral(value) => Value::Integer(*value),
    Expression::BooleanLiteral(value) => Value::Boolean(*value),
    Expression::StringLiteral(value) => Value::Str(Rc::from(value.as_str())),
    Expression::Identifier(ident) => eval_identifier(&ident.name, env),
    Expression::ArrayLiteral(elements) => match eval_expressions(elements, env) {
      Ok(elements) => Value::Array(Rc::new(elements)),
      Err(error) => error,
    },
    Expression::Prefix { operator, right } => {
      let right = eval_expression(right, env);
      if right.is_error() {
        return right;
      }
      eval_prefix_expression(operator, &right)
    },
    Expression::Infix { left, operator, right } => {
      let left = eval_expression(left, env);
      if left.is_error() {
        return left;
      }
      let right = eval_expression(right, env);
      if right.is_error() {
        return right;
      }
      eval_infix_expression(operator, &left, &right)
    },
    Expression::If { condition, consequence, alternative } => {
      let condition = eval_expression(condition, env);
      if condition.is_error() {
        return condition;
      }
      if condition.is_truthy() {
        eval_block(consequence, env)
      } else if let Some(alternative) = alternative {
        eval_block(alternative, env)
      } else {
        Value::Null
      }
    },
    Expression::FunctionLiteral { parameters, body } => {
      Value::Function { parameters: Rc::new(parameters.clone()), body: Rc::new(body.clone()), env: env.clone() }
    },
    Expression::Call { callee, arguments } => {
      let function = eval_expression(callee, env);
      if function.is_error() {
        return function;
      }
      let arguments = match eval_expressions(arguments, env) {
        Ok(arguments) => arguments,
        Err(error) => return error,
      };
      apply_function(&function, &arguments)
    },
    Expression::Index { collection, index } => {
      let collection = eval_expression(collection, env);
      if collection.is_error() {
        return collection;
      }
      let index = eval_expression(index, env);
      if index.is_error() {
        return index;
      }
      eval_index_expression(&collection, &index)
    },
  }
}

/// Evaluate each expression in order, stopping and returning the first error.
fn eval_expressions(exprs: &[Expression], env: &Env) -> Result<Vec<Value>, Value> {
  let mut values = Vec::with_capacity(exprs.len());
  for expr in exprs {
    let value = eval_expression(expr, env);
    if value.is_error() {
      return Err(value);
    }
    values.push(value);
  }
  Ok(values)
}

fn eval_identifier(name: &str, env: &Env) -> Value {
  if let Some(value) = env.get(name) {
    return value;
  }
  if let Some(builtin) = builtins::lookup(name) {
    return builtin;
  }
  Value::error(format!("identifier not found: {name}"))
}

fn eval_prefix_expression(operator: &str, right: &Value) -> Value {
  match operator {
    "!" => Value::Boolean(!right.is_truthy()),
    "-" => match right {
      Value::Integer(value) => Value::Integer(value.wrapping_neg()),
      _ => Value::error(format!("unknown operator: -{}", right.type_tag())),
    },
    _ => Value::error(format!("unknown operator: {operator}{}", right.type_tag())),
  }
}

fn eval_infix_expression(operator: &str, left: &Value, right: &Value) -> Value {
  match (left, right) {
    (Value::Integer(left), Value::Integer(right)) => eval_integer_infix_expression(operator, *left, *right),
    (Value::Str(left), Value::Str(right)) => eval_string_infix_expression(operator, left, right),
    _ if operator == "==" => Value::Boolean(left == right),
    _ if operator == "!=" => Value::Boolean(left != right),
    _ if left.type_tag() != right.type_tag() => {
      Value::error(format!("type mismatch: {} {operator} {}", left.type_tag(), right.type_tag()))
    },
    _ => Value::error(format!("unknown operator: {} {operator} {}", left.type_tag(), right.type_tag())),
  }
}

fn eval_integer_infix_expression(operator: &str, left: i64, right: i64) -> Value {
  match operator {
    "+" => Value::Integer(left.wrapping_add(right)),
    "-" => Value::Integer(left.wrapping_sub(right)),
    "*" => Value::Integer(left.wrapping_mul(right)),
    "/" => {
      if right == 0 {
        Value::error("division by zero")
      } else {
        Value::Integer(left.wrapping_div(right))
      }
    },
    "<" => Value::Boolean(left < right),
    ">" => Value::Boolean(left > right),
    "==" => Value::Boolean(left == right),
    "!=" => Value::Boolean(left != right),
    _ => Value::error(format!("unknown operator: INTEGER {operator} INTEGER")),
  }
}

fn eval_string_infix_expression(operator: &str, left: &str, right: &str) -> Value {
  match operator {
    "+" => Value::Str(Rc::from(format!("{left}{right}"))),
    _ => Value::error(format!("unknown operator: STRING {operator} STRING")),
  }
}

fn eval_index_expression(collection: &Value, index: &Value) -> Value {
  match (collection, index) {
    (Value::Array(elements), Value::Integer(i)) => {
      if *i < 0 || *i as usize >= elements.len() {
        Value::Null
      } else {
        elements[*i as usize].clone()
      }
    },
    _ => Value::error(format!("index operator not supported: {}", collection.type_tag())),
  }
}

fn apply_function(function: &Value, arguments: &[Value]) -> Value {
  match function {
    Value::Function { parameters, body, env } => {
      if parameters.len() != arguments.len() {
        return Value::error(format!(
          "wrong number of arguments: got {}, want {}",
          arguments.len(),
          parameters.len()
        ));
      }

      let call_env = Env::new_enclosed(env);
      for (parameter, argument) in parameters.iter().zip(arguments) {
        call_env.set(parameter.name.clone(), argument.clone());
      }

      unwrap_return_value(eval_block(body, &call_env))
    },
    Value::Builtin(builtin) => builtin(arguments),
    _ => Value::error(format!("not a function: {}", function.type_tag())),
  }
}

fn unwrap_return_value(value: Value) -> Value {
  match value {
    Value::ReturnValue(value) => (*value).clone(),
    other => other,
  }
}
