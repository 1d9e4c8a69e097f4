use std::io::{self, BufRead, Write};

use anyhow::anyhow;
use dotenvy::dotenv;
use tracing::info;

mod analyzer;
mod assembler;
mod catalog;
mod config;
mod handlers;
mod history;
mod llm;
mod refine;
mod selection;
mod state;
mod utils;

use handlers::commands;
use state::Session;
use utils::logging::init_logging;

#[tokio::main]
async fn main() {
    dotenv().ok();
    let _guard = init_logging();
    info!("Starting LensCraft prompt architect");

    println!("LensCraft prompt architect. Type 'help' for commands.");
    let mut session = Session::new();

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("Failed to read input: {err}");
                break;
            }
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if !dispatch(&mut session, line).await {
            break;
        }
    }
}

/// Routes one input line to its handler. Returns false to exit the loop.
async fn dispatch(session: &mut Session, line: &str) -> bool {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    let outcome = match command {
        "quit" | "exit" => return false,
        "help" => {
            commands::help();
            Ok(())
        }
        "show" => {
            commands::show(session);
            Ok(())
        }
        "options" => {
            if rest.is_empty() {
                Err(anyhow!("usage: options <category>"))
            } else {
                commands::list_options(rest)
            }
        }
        "set" => match rest.split_once(char::is_whitespace) {
            Some((label, id)) => commands::select(session, label, id.trim()),
            None => Err(anyhow!("usage: set <category> <id>")),
        },
        "subject" => {
            commands::set_subject(session, rest);
            Ok(())
        }
        "exposure" => commands::set_exposure(session, rest),
        "aperture" => commands::set_aperture(session, rest),
        "shutter" => {
            commands::set_shutter(session, rest);
            Ok(())
        }
        "mode" => commands::set_mode(session, rest),
        "thinking" => commands::set_thinking(session, rest),
        "random" => {
            commands::randomize(session);
            Ok(())
        }
        "generate" => {
            commands::generate(session).await;
            Ok(())
        }
        "analyze" => {
            if rest.is_empty() {
                Err(anyhow!("usage: analyze <path-to-image>"))
            } else {
                commands::analyze_file(session, rest).await
            }
        }
        "history" => {
            commands::history(session);
            Ok(())
        }
        "recall" => commands::recall(session, rest),
        "clear-history" => {
            commands::clear_history(session);
            Ok(())
        }
        other => Err(anyhow!("unknown command '{other}'; type 'help'")),
    };

    if let Err(err) = outcome {
        println!("{err}");
    }
    true
}
