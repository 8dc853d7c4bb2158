//! Console rendering of status lines and the manual path prompt

use std::io::Write;

use console::style;

use crate::mods::PathPrompt;
use crate::report::Reporter;

/// Reporter rendering each severity with a colored tag, matching the
/// tool's traditional `[INFO]`/`[WARNING]`/`[ERROR]`/`[SUCCESS]` output.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&self, message: &str) {
        println!("{} {message}", style("[INFO]").blue().bold());
    }

    fn warning(&self, message: &str) {
        println!("{} {message}", style("[WARNING]").yellow().bold());
    }

    fn error(&self, message: &str) {
        eprintln!("{} {message}", style("[ERROR]").red().bold());
    }

    fn success(&self, message: &str) {
        println!("{} {message}", style("[SUCCESS]").green().bold());
    }
}

/// Prompt reading one line from standard input.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl PathPrompt for StdinPrompt {
    fn prompt_path(&mut self) -> std::io::Result<String> {
        print!("Please enter the mods directory path manually: ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        std::io::stdin().read_line(&mut line)?;
        Ok(line)
    }
}
