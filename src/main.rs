// SPDX-FileCopyrightText: 2022 Severen Redwood <me@severen.dev>
// SPDX-License-Identifier: GPL-3.0-or-later

#![doc = include_str!("../README.md")]

use std::fs;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use directories_next::ProjectDirs;
use rustyline::{error::ReadlineError, Editor};

use monkey::eval::{eval, Env};
use monkey::syntax::parse;

const PROMPT: &str = ">> ";

const BANNER: &str = r#"
  Woops! We ran into some monkey business here!
"#;

/// Parsed command line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
  #[arg(name = "FILE", help = "A path to a Monkey program to execute")]
  file_path: Option<String>,
}

fn main() -> Result<ExitCode> {
  let args = Args::parse();

  if let Some(path) = args.file_path {
    run_file(&path)
  } else {
    repl()?;
    Ok(ExitCode::SUCCESS)
  }
}

/// Parse and evaluate an entire source file once, in a fresh root environment.
fn run_file(path: &str) -> Result<ExitCode> {
  let input = fs::read_to_string(path)?;
  let (program, errors) = parse(&input);

  if !errors.is_empty() {
    print_parse_errors(&errors);
    return Ok(ExitCode::FAILURE);
  }

  let env = Env::new_root();
  let value = eval(&program, &env);
  println!("{}", value.inspect());

  Ok(ExitCode::SUCCESS)
}

fn repl() -> Result<()> {
  println!("Welcome to the Monkey REPL!");
  println!("Press C-d to exit.");

  // The first and second parameters are respectively a reverse domain name and
  // organisation name, which are currently not used.
  let dirs = match ProjectDirs::from("", "", "monkey") {
    Some(dirs) => dirs,
    // TODO: Handle a None value more gracefully by either throwing an error or disabling
    //       history.
    None => panic!("Could not find a valid $HOME path."),
  };
  // Ensure that the data directory exists to avoid errors when trying to write the
  // history file.
  if !dirs.data_dir().exists() {
    // TODO: Handle errors more gracefully.
    fs::create_dir(dirs.data_dir())?;
  }
  let history_path = dirs.data_dir().join("history.txt");

  let mut rl = Editor::<()>::new()?;
  if rl.load_history(&history_path).is_err() {
    println!("No previous history.");
  }

  // The root environment persists across every turn of the loop, so `let`-bound
  // names accumulate for the rest of the session.
  let env = Env::new_root();

  loop {
    let line = rl.readline(PROMPT);
    match line {
      Ok(line) => {
        rl.add_history_entry(&line);

        let (program, errors) = parse(&line);
        if !errors.is_empty() {
          print_parse_errors(&errors);
          continue;
        }

        let value = eval(&program, &env);
        println!("{}", value.inspect());
      },
      Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
      Err(error) => {
        println!("Error: {:?}", error);
        break;
      },
    }
  }

  rl.save_history(&history_path)?;

  Ok(())
}

fn print_parse_errors(errors: &[monkey::syntax::Error]) {
  println!("{BANNER}");
  println!(" parser errors:");
  for error in errors {
    println!("\t{error}");
  }
}
