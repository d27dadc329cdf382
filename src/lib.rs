// SPDX-FileCopyrightText: 2022 Severen Redwood <me@severen.dev>
// SPDX-License-Identifier: GPL-3.0-or-later

#![doc = include_str!("../README.md")]
#![deny(non_ascii_idents)]
#![warn(
  let_underscore_drop,
  missing_docs,
  trivial_casts,
  trivial_numeric_casts,
  unreachable_pub,
  unused_import_braces,
  unused_qualifications
)]

pub mod eval;
pub mod syntax;
