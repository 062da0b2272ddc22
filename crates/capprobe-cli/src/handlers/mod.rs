//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Compose the run via `bootstrap`
//!   2. Drive the `ProbeRunner`
//!   3. Format output for the terminal

pub mod list;
pub mod run;
