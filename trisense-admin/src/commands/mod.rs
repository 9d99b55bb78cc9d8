//! CLI command implementations
//!
//! One module per surface. Command entry points take the already-resolved
//! confirmation decision for irreversible actions so that the interactive
//! prompt stays at the binary boundary.

pub mod batches;
pub mod competitions;
pub mod login;
pub mod mapping;
pub mod upload;

use std::io::{self, BufRead, Write};

/// Blocking y/N confirmation on stdin
///
/// Anything other than `y`/`yes` declines.
pub fn confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
