pub mod ast;
pub mod builtins;
pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;

use std::rc::Rc;

use object::{Env, Environment, Object};
use parser::{Parser, ParserError};

/// Parses and evaluates `source` against `env`. Callers that want bindings
/// to survive across inputs (the REPL) hold on to the environment.
pub fn run(source: &str, env: &Env) -> Result<Rc<Object>, ParserError> {
    let program = Parser::parse(source)?;
    Ok(evaluator::eval_program(env, program))
}

// entry point for the fuzz target
pub fn parse_test_input(input: &str) -> Result<ast::Program, ParserError> {
    Parser::parse(input)
}

pub struct Monkey {
    env: Env,
}

impl Monkey {
    pub fn new() -> Self {
        Monkey {
            env: Environment::new(),
        }
    }

    pub fn eval(&mut self, source: &str) {
        match run(source, &self.env) {
            Ok(obj) => println!("{}", obj.inspect()),
            Err(err) => {
                println!("Woops! We ran into some monkey business here!");
                println!(" parser errors:");
                for msg in err.errors() {
                    println!("\t{}", msg);
                }
            }
        }
    }
}
