//! Contact Book - Main entry point
//!
//! Runs the interactive assistant session on stdin/stdout. Logs go to
//! stderr so they never mix with the conversation.

use anyhow::{Context, Result};
use contact_book::commands::session::{PROMPT, WELCOME};
use contact_book::{Config, Dispatcher, JsonFileStorage, Session};
use std::io::{self, BufRead, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Using address book at {}", config.storage_path.display());

    let storage = JsonFileStorage::new(&config.storage_path);
    let dispatcher = Dispatcher::new(storage).with_context(|| {
        format!(
            "Failed to load address book from {}",
            config.storage_path.display()
        )
    })?;
    let mut session = Session::new(dispatcher);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();

    println!("{}", WELCOME);
    loop {
        print!("{}", PROMPT);
        stdout.flush()?;

        let Some(line) = lines.next() else {
            // End of input counts as a close
            session.close()?;
            println!();
            break;
        };

        let reply = session.handle_line(&line?)?;
        println!("{}", reply.text());
        if reply.is_exit() {
            break;
        }
    }

    info!("Contact book shutdown complete");
    Ok(())
}
