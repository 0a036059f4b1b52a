use anyhow::{bail, Result};
use clap::Parser;
use log::debug;

use commandline::{Form, Operation, Options};
use error::CompileError;
use dag::Roots;
use pipeline::Compilation;

mod ast;
mod commandline;
mod dag;
mod error;
mod il;
mod lexer;
mod listing;
mod parser;
mod pipeline;
mod source_map;
mod span;

fn main() -> Result<()> {
    let options = Options::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(options.verbose)
        .init()?;

    let source = options.operation.input().read()?;

    let outcome = match &options.operation {
        Operation::Tokens { .. } => pipeline::tokenize(&source).map(|tokens| {
            for token in tokens {
                debug!("{:?} spans {:?}", token.source, token.source.lookup(&source));
                println!("{}", token.kind);
            }
        }),
        Operation::Ast { debug, .. } => pipeline::parse_source(&source).map(|(_, ast)| {
            if *debug {
                println!("{:#?}", ast);
            } else {
                print!("{}", ast);
            }
        }),
        Operation::Ir { form, .. } => {
            pipeline::compile(&source).map(|compilation| print_ir(&compilation, *form))
        }
        Operation::Dag { dot, .. } => pipeline::compile(&source).map(|compilation| {
            if *dot {
                println!("{}", compilation.dag.to_dot());
            } else {
                print_dag(&compilation);
            }
        }),
        Operation::Run { .. } => pipeline::compile(&source).map(|compilation| print_all(&compilation)),
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(errors) => report(&errors, &source),
    }
}

fn report(errors: &[CompileError], source: &str) -> Result<()> {
    for err in errors {
        debug!("Error at {:?}: {}", err.span(), err);
        eprintln!("{}\n", err.render(source));
    }
    bail!("Compilation failed with {} error(s)", errors.len())
}

fn heading(title: &str) {
    println!("\n{}", title);
    println!("{}", "=".repeat(title.chars().count()));
}

fn print_ir(compilation: &Compilation, form: Form) {
    if form.includes(Form::Tac) {
        heading("Three-Address Code");
        if compilation.ir.tac.is_empty() {
            println!("(none)");
        }
        for line in compilation.ir.tac_lines() {
            println!("{}", line);
        }
    }
    if form.includes(Form::Quadruples) {
        heading("Quadruples");
        println!("{}", compilation.ir.quadruple_table());
    }
    if form.includes(Form::Triples) {
        heading("Triples");
        println!("{}", compilation.ir.triple_table());
    }
}

fn print_dag(compilation: &Compilation) {
    heading("DAG nodes");
    if compilation.dag.is_empty() {
        println!("(none)");
    }
    for line in compilation.dag.node_listing() {
        println!("{}", line);
    }
    heading("DAG edges");
    for line in compilation.dag.edge_listing() {
        println!("{}", line);
    }
    heading("Statement results");
    let roots = match &compilation.roots {
        Roots::Program(roots) => roots.clone(),
        Roots::Node(root) => vec![*root],
    };
    for (statement, root) in roots.into_iter().enumerate() {
        if let Some(node) = compilation.dag.node(root) {
            println!("statement {}: node {} ({})", statement + 1, root, node.symbol());
        }
    }
}

fn print_all(compilation: &Compilation) {
    heading("Tokens");
    for token in &compilation.tokens {
        println!("{}", token.kind);
    }

    heading("Abstract Syntax Tree");
    print!("{}", compilation.ast);

    print_ir(compilation, Form::All);
    print_dag(compilation);

    heading("DAG (Graphviz)");
    println!("{}", compilation.dag.to_dot());
}
