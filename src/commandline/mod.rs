use std::fs;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(about = "Translates assignment programs into TAC, quadruples, triples and a DAG")]
pub struct Options {
    #[command(subcommand)]
    pub operation: Operation,
    /// Log verbosity (0 = errors only, 4 = trace)
    #[arg(short, long, default_value_t = 1, global = true)]
    pub verbose: usize,
}

#[derive(Debug, Subcommand)]
pub enum Operation {
    /// Print the token stream
    Tokens {
        #[command(flatten)]
        input: Input,
    },
    /// Print the abstract syntax tree
    Ast {
        #[command(flatten)]
        input: Input,
        /// Print the full tree structure instead of the parenthesised program
        #[arg(long)]
        debug: bool,
    },
    /// Print the intermediate representations
    Ir {
        #[command(flatten)]
        input: Input,
        #[arg(long, value_enum, default_value_t = Form::All)]
        form: Form,
    },
    /// Print the DAG of the program
    Dag {
        #[command(flatten)]
        input: Input,
        /// Emit Graphviz DOT instead of node and edge listings
        #[arg(long)]
        dot: bool,
    },
    /// Run every stage and print all of their output
    Run {
        #[command(flatten)]
        input: Input,
    },
}

impl Operation {
    pub fn input(&self) -> &Input {
        match self {
            Operation::Tokens { input }
            | Operation::Ast { input, .. }
            | Operation::Ir { input, .. }
            | Operation::Dag { input, .. }
            | Operation::Run { input } => input,
        }
    }
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
pub struct Input {
    /// Read the program from a file
    file: Option<String>,
    /// Read the program from the command line
    #[arg(short = 'e', long = "source")]
    source: Option<String>,
}

impl Input {
    pub fn read(&self) -> Result<String> {
        match (&self.source, &self.file) {
            (Some(source), _) => Ok(source.clone()),
            (None, Some(file)) => {
                fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))
            }
            (None, None) => unreachable!("clap requires one input"),
        }
    }
}

/// Which IR listing to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Form {
    Tac,
    Quadruples,
    Triples,
    All,
}

impl Form {
    pub fn includes(self, other: Form) -> bool {
        self == Form::All || self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_source_is_accepted() {
        let options = Options::try_parse_from(["irviz", "ir", "-e", "a = 1;", "--form", "triples"])
            .unwrap();

        match options.operation {
            Operation::Ir { input, form } => {
                assert_eq!(input.read().unwrap(), "a = 1;");
                assert_eq!(form, Form::Triples);
            }
            other => panic!("unexpected operation {:?}", other),
        }
        assert_eq!(options.verbose, 1);
    }

    #[test]
    fn an_input_is_required() {
        assert!(Options::try_parse_from(["irviz", "dag"]).is_err());
    }

    #[test]
    fn file_and_source_conflict() {
        assert!(Options::try_parse_from(["irviz", "run", "prog.txt", "-e", "a = 1;"]).is_err());
    }

    #[test]
    fn all_includes_every_form() {
        assert!(Form::All.includes(Form::Tac));
        assert!(Form::Tac.includes(Form::Tac));
        assert!(!Form::Tac.includes(Form::Triples));
    }
}
