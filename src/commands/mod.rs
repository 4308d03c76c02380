//! One handler per CLI subcommand. Handlers fetch from the backend,
//! run the pure pipeline/aggregation over the fetched records, and
//! render to the terminal. No handler mutates cached state: every
//! mutation is followed by a refetch.

pub mod book;
pub mod cancel;
pub mod dashboard;
pub mod doctors;
pub mod list;
pub mod status;

use anyhow::Result;
use std::io::Write;

/// Build the runtime that drives the async HTTP client. Commands are
/// single-shot, so one runtime per invocation is enough.
pub(crate) fn runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

/// Interactive y/N prompt used before destructive actions.
pub(crate) fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
