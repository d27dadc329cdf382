// SPDX-FileCopyrightText: 2022 Severen Redwood <me@severen.dev>
// SPDX-License-Identifier: GPL-3.0-or-later

//! The abstract syntax tree produced by the [`parser`](super::parser).

use std::fmt::{self, Display, Formatter};

/// A complete Monkey program: an ordered sequence of statements.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct Program {
  /// The top-level statements of the program, in source order.
  pub statements: Vec<Statement>,
}

impl Display for Program {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for statement in &self.statements {
      write!(f, "{statement}")?;
    }
    Ok(())
  }
}

/// A statement: a construct evaluated for its effect on the environment or control
/// flow, rather than for the value it produces.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Statement {
  /// `let <name> = <value>;`
  Let {
    /// The bound name.
    name: Identifier,
    /// The expression whose value is bound to `name`.
    value: Expression,
  },
  /// `return <value>;`
  Return {
    /// The expression whose value is returned.
    value: Expression,
  },
  /// An expression evaluated for its value at the top level of a block.
  Expression(Expression),
  /// `{ <statements> }`
  Block(Block),
}

impl Display for Statement {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Statement::Let { name, value } => write!(f, "let {name} = {value};"),
      Statement::Return { value } => write!(f, "return {value};"),
      Statement::Expression(expr) => write!(f, "{expr}"),
      Statement::Block(block) => write!(f, "{block}"),
    }
  }
}

/// An ordered sequence of statements delimited by `{` and `}`.
#[derive(Clone, Eq, PartialEq, Default, Debug)]
pub struct Block {
  /// The statements making up this block, in source order.
  pub statements: Vec<Statement>,
}

impl Display for Block {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for statement in &self.statements {
      write!(f, "{statement}")?;
    }
    Ok(())
  }
}

/// An identifier, e.g. `foobar`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Identifier {
  /// The identifier's name.
  pub name: String,
}

impl Display for Identifier {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}

/// An expression: a construct that produces a value when evaluated.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expression {
  /// A reference to a bound name.
  Identifier(Identifier),
  /// An integer literal, e.g. `5`.
  IntegerLiteral(i64),
  /// A Boolean literal, `true` or `false`.
  BooleanLiteral(bool),
  /// A string literal, e.g. `"hello"`.
  StringLiteral(String),
  /// An array literal, e.g. `[1, 2, 3]`.
  ArrayLiteral(Vec<Expression>),
  /// A unary prefix expression, e.g. `-5` or `!true`.
  Prefix {
    /// The operator, either `"!"` or `"-"`.
    operator: String,
    /// The operand.
    right: Box<Expression>,
  },
  /// A binary infix expression, e.g. `1 + 2`.
  Infix {
    /// The left-hand operand.
    left: Box<Expression>,
    /// The operator, e.g. `"+"` or `"=="`.
    operator: String,
    /// The right-hand operand.
    right: Box<Expression>,
  },
  /// `if (<condition>) { <consequence> } else { <alternative> }`
  If {
    /// The condition governing which branch is taken.
    condition: Box<Expression>,
    /// The branch evaluated when the condition is truthy.
    consequence: Block,
    /// The branch evaluated when the condition is falsy, if present.
    alternative: Option<Block>,
  },
  /// `fn(<parameters>) { <body> }`
  FunctionLiteral {
    /// The formal parameter names.
    parameters: Vec<Identifier>,
    /// The function body.
    body: Block,
  },
  /// `<callee>(<arguments>)`
  Call {
    /// The expression evaluated to obtain the function being called.
    callee: Box<Expression>,
    /// The argument expressions, in order.
    arguments: Vec<Expression>,
  },
  /// `<collection>[<index>]`
  Index {
    /// The expression evaluated to obtain the collection being indexed.
    collection: Box<Expression>,
    /// The index expression.
    index: Box<Expression>,
  },
}

impl Display for Expression {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Expression::Identifier(ident) => write!(f, "{ident}"),
      Expression::IntegerLiteral(value) => write!(f, "{value}"),
      Expression::BooleanLiteral(value) => write!(f, "{value}"),
      Expression::StringLiteral(value) => write!(f, "{value}"),
      Expression::ArrayLiteral(elements) => {
        let elements = elements.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        write!(f, "[{elements}]")
      },
      Expression::Prefix { operator, right } => write!(f, "({operator}{right})"),
      Expression::Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
      Expression::If { condition, consequence, alternative } => {
        write!(f, "if {condition} {{ {consequence} }}")?;
        if let Some(alternative) = alternative {
          write!(f, " else {{ {alternative} }}")?;
        }
        Ok(())
      },
      Expression::FunctionLiteral { parameters, body } => {
        let parameters = parameters.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        write!(f, "fn({parameters}) {{ {body} }}")
      },
      Expression::Call { callee, arguments } => {
        let arguments = arguments.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
        write!(f, "{callee}({arguments})")
      },
      Expression::Index { collection, index } => write!(f, "({collection}[{index}])"),
    }
  }
}
