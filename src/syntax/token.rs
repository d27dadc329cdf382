// SPDX-FileCopyrightText: 2022 Severen Redwood <me@severen.dev>
// SPDX-License-Identifier: GPL-3.0-or-later

//! The lexical categories of Monkey source code.

use derive_more::Display;

use crate::syntax::Span;

/// A token produced by a [`Lexer`](super::Lexer).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Token {
  /// The lexical category of this token.
  pub kind: TokenKind,
  /// The exact source substring that produced this token.
  pub literal: String,
  /// The span of text in the source code that covers the lexeme.
  pub span: Span,
}

/// The lexical category of a [`Token`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Display, Debug)]
pub enum TokenKind {
  /// A character that does not begin any recognised token.
  #[display(fmt = "illegal token")]
  Illegal,
  /// The end of the input.
  #[display(fmt = "end of input")]
  Eof,

  /// An identifier, e.g. `foobar`.
  #[display(fmt = "identifier")]
  Ident,
  /// An integer literal, e.g. `1234`.
  #[display(fmt = "integer literal")]
  Int,
  /// A string literal, e.g. `"hello"`.
  #[display(fmt = "string literal")]
  Str,

  /// `=`
  #[display(fmt = "`=`")]
  Assign,
  /// `+`
  #[display(fmt = "`+`")]
  Plus,
  /// `-`
  #[display(fmt = "`-`")]
  Minus,
  /// `!`
  #[display(fmt = "`!`")]
  Bang,
  /// `*`
  #[display(fmt = "`*`")]
  Asterisk,
  /// `/`
  #[display(fmt = "`/`")]
  Slash,
  /// `<`
  #[display(fmt = "`<`")]
  Lt,
  /// `>`
  #[display(fmt = "`>`")]
  Gt,
  /// `==`
  #[display(fmt = "`==`")]
  Eq,
  /// `!=`
  #[display(fmt = "`!=`")]
  NotEq,

  /// `,`
  #[display(fmt = "`,`")]
  Comma,
  /// `;`
  #[display(fmt = "`;`")]
  Semicolon,
  /// `(`
  #[display(fmt = "`(`")]
  LParen,
  /// `)`
  #[display(fmt = "`)`")]
  RParen,
  /// `{`
  #[display(fmt = "`{{`")]
  LBrace,
  /// `}`
  #[display(fmt = "`}}`")]
  RBrace,
  /// `[`
  #[display(fmt = "`[`")]
  LBracket,
  /// `]`
  #[display(fmt = "`]`")]
  RBracket,

  /// The `fn` keyword.
  #[display(fmt = "`fn`")]
  Function,
  /// The `let` keyword.
  #[display(fmt = "`let`")]
  Let,
  /// The `true` keyword.
  #[display(fmt = "`true`")]
  True,
  /// The `false` keyword.
  #[display(fmt = "`false`")]
  False,
  /// The `if` keyword.
  #[display(fmt = "`if`")]
  If,
  /// The `else` keyword.
  #[display(fmt = "`else`")]
  Else,
  /// The `return` keyword.
  #[display(fmt = "`return`")]
  Return,
}

impl TokenKind {
  /// Look up the keyword token kind for an identifier, if it is one.
  pub fn keyword(ident: &str) -> Option<TokenKind> {
    use TokenKind::*;

    Some(match ident {
      "fn" => Function,
      "let" => Let,
      "true" => True,
      "false" => False,
      "if" => If,
      "else" => Else,
      "return" => Return,
      _ => return None,
    })
  }
}
