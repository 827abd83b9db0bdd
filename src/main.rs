use std::fs::File;
use std::io;
use std::io::prelude::*;

use argparse::{ArgumentParser, Print, Store, StoreTrue};

use lox_lexer::ast_printer;
use lox_lexer::expr::*;
use lox_lexer::scanner::*;
use lox_lexer::token::*;
use lox_lexer::util;

fn main() {
    let mut script_filename = "".to_string();
    let mut demo = false;
    {
        let mut ap = ArgumentParser::new();
        ap.set_description("Lox lexical front end");
        ap.add_option(
            &["--version"],
            Print(env!("CARGO_PKG_VERSION").to_string()),
            "Show version",
        );
        ap.refer(&mut demo)
            .add_option(&["--demo"], StoreTrue,
                        "Print a sample expression tree and exit.");
        ap.refer(&mut script_filename)
            .add_argument("script_filename", Store,
                          "Lox file to scan.  Omit to run an interactive REPL.");
        ap.parse_args_or_exit();
    }
    if demo {
        print_demo();
    }
    else if ! script_filename.is_empty() {
        if let Err(error) = run_file(&script_filename) {
            eprintln!("Unable to read {}: {}", script_filename, error);
        }
    }
    else {
        run_repl();
    }
}

fn run_repl() {
    let stdin = io::stdin();
    loop {
        print!("> ");
        if let Err(error) = io::stdout().flush() {
            eprintln!("Error flushing stdout: {:?}", error);
            break;
        }

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            // End of input.
            Ok(0) => break,
            Ok(_) => run(&input),
            Err(error) => {
                println!("Error reading stdin: {:?}", error);
                break;
            }
        }
    }
}

fn run_file(file_path: &str) -> io::Result<()> {
    let mut file = File::open(file_path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    run(&contents);

    Ok(())
}

// Diagnostics are printed as they're found; the token stream is printed after,
// even when some of the source didn't scan.
fn run(source: &str) {
    let mut scanner = Scanner::new(source);
    let tokens = scanner.scan_tokens(&mut |line: u32, message: &str| util::error(line, message));

    for token in tokens.iter() {
        println!("{}", token);
    }
}

// -123 * (45.67)
fn print_demo() {
    let expr = Expr::binary(
        Expr::unary(Token::simple(TokenType::Minus, "-", 1),
                    Expr::literal(Literal::Number(123.0))),
        Token::simple(TokenType::Star, "*", 1),
        Expr::grouping(Expr::literal(Literal::Number(45.67))));

    println!("{}", ast_printer::print(&expr));
}
