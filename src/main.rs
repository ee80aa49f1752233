use std::{env, fs};

use monkey_lang::Monkey;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

const PROMPT: &str = ">> ";

fn main() -> eyre::Result<()> {
    let mut monkey = Monkey::new();
    let args: Vec<String> = env::args().collect();
    if args.len() > 2 {
        eyre::bail!("usage: monkey-lang [script]")
    }
    // script mode: evaluate the whole file once
    if args.len() == 2 {
        let content = fs::read_to_string(&args[1])?;
        monkey.eval(&content);
        return Ok(());
    }

    // repl, exits on EOF or interrupt
    println!("Hello! This is the Monkey programming language!");
    println!("Feel free to type in commands");
    let mut rl = DefaultEditor::new()?;
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                rl.add_history_entry(line.as_str())?;
                monkey.eval(&line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    Ok(())
}
