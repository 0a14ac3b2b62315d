//! Oscar - Main Entry Point
//!
//! This is the console front end. The chatbot itself lives in the `oscar`
//! library.

use anyhow::Result;
use clap::Parser;
use oscar::{Oscar, Ui};
use std::path::PathBuf;

/// Oscar - your friendly todo list chatbot
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task save file
    #[arg(default_value = "data/oscar.toml")]
    file: PathBuf,
}

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never mix with the conversation
    if std::env::var("OSCAR_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("oscar=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    let args = Args::parse();
    let mut oscar = Oscar::new(&args.file)?;
    let mut ui = Ui::stdio();
    oscar.run(&mut ui)?;
    Ok(())
}
