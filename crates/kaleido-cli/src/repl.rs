use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::common::{error_kind, parse_and_render, render_error};

const REPL_FILE_NAME: &str = "<repl>";

pub fn start_repl() {
    println!("{}", "Kaleido REPL. Type :help for help, :quit to exit.".bold().green());

    let mut echo_tokens = false;
    loop {
        print!("{}", "kaleido> ".cyan());
        let _ = io::stdout().flush();

        let mut line = String::new();
        let n = match io::stdin().read_line(&mut line) {
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read from stdin");
                println!("<input error>");
                break;
            }
        };
        if n == 0 {
            // EOF
            println!("\nGoodbye.");
            break;
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        if trimmed.trim().is_empty() {
            continue;
        }

        if trimmed.starts_with(':') {
            match trimmed.trim() {
                ":quit" | ":q" | ":exit" => {
                    println!("Goodbye.");
                    break;
                }
                ":help" | ":h" => {
                    println!(
                        "{}\n  {}  {}\n  {}  {}\n  {}  {}\n{}",
                        "Commands:".bold(),
                        ":help".yellow(),
                        "Show this help",
                        ":tokens".yellow(),
                        "Toggle printing of the token stream",
                        ":quit".yellow(),
                        "Exit the REPL",
                        "Type an integer expression such as 5 + 10 * 2 to see how it groups."
                    );
                    continue;
                }
                ":tokens" => {
                    echo_tokens = !echo_tokens;
                    let state = if echo_tokens { "on" } else { "off" };
                    println!("{}", format!("Token echo {}.", state).yellow());
                    continue;
                }
                _ => {
                    println!("{}", "Unknown command. Type :help.".red());
                    continue;
                }
            }
        }

        match parse_and_render(trimmed, REPL_FILE_NAME, echo_tokens) {
            Ok(text) => println!("{}", text.bright_blue()),
            Err(e) => render_error(error_kind(&e), trimmed, &e),
        }
    }
}
