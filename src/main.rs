use smart_calc::commands::Command;
use smart_calc::{Calculator, Options};

use clap::Parser;
use std::io::Write;

/// Smart Calculator: evaluates arithmetic expressions and remembers variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Report characters the lexer does not recognise instead of skipping them.
    #[arg(short, long)]
    strict_lexing: bool,

    /// Skip the welcome banner and prompts, for piped input.
    #[arg(short, long)]
    quiet: bool,
}

fn prompt(quiet: bool) {
    if quiet {
        return;
    }
    print!("\nEnter an expression: ");
    if let Err(e) = std::io::stdout().flush() {
        log::warn!("could not flush prompt: {}", e);
    }
}

fn main() {
    env_logger::init();

    let args = Args::parse();
    let mut calculator = Calculator::new(Options{strict_lexing: args.strict_lexing});

    if !args.quiet {
        println!("Welcome to Smart Calculator!");
    }
    prompt(args.quiet);

    for line in std::io::stdin().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("could not read input: {}", e);
                break;
            },
        };

        if let Some(command) = Command::parse(&line) {
            println!("{}", command.message());
            if command == Command::exit {
                break;
            }
        } else if !line.trim().is_empty() {
            match calculator.evaluate_line(&line) {
                Ok(evaluation) => println!("{}", evaluation),
                Err(e) => println!("Error: {}", e),
            }
        }

        prompt(args.quiet);
    }
}
