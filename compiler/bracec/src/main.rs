//! Brace CLI

use bracec::commands::{lex_file, parse_file, repl, run_file, RunOptions};
use bracec::tracing_setup::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let Some(command) = args.get(1) else {
        repl();
        return;
    };

    match command.as_str() {
        "run" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: brace run <file> [--result]");
                std::process::exit(1);
            };
            let options = match RunOptions::parse(args[3..].iter().map(String::as_str)) {
                Ok(options) => options,
                Err(unknown) => {
                    eprintln!("error: unknown option '{unknown}'");
                    eprintln!("Usage: brace run <file> [--result]");
                    std::process::exit(1);
                }
            };
            run_file(path, &options);
        }
        "lex" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: brace lex <file>");
                std::process::exit(1);
            };
            lex_file(path);
        }
        "parse" => {
            let Some(path) = args.get(2) else {
                eprintln!("Usage: brace parse <file>");
                std::process::exit(1);
            };
            parse_file(path);
        }
        "repl" => repl(),
        "help" | "--help" | "-h" => print_usage(),
        "version" | "--version" | "-V" => {
            println!("Brace {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Brace interpreter");
    println!();
    println!("Usage: brace [command] [options]");
    println!();
    println!("Commands:");
    println!("  run <file>       Run a Brace program");
    println!("  lex <file>       Tokenize and display tokens");
    println!("  parse <file>     Parse and display the syntax tree");
    println!("  repl             Interactive prompt (default)");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Run options:");
    println!("  --result, -r     Print the last expression value as an integer");
    println!();
    println!("Logging:");
    println!("  BRACE_LOG=<filter>  e.g. BRACE_LOG=brace_eval=debug (falls back to RUST_LOG)");
}
