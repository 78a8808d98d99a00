//! Command implementations
//!
//! Commands are organized into two categories following Git's architecture:
//!
//! - `plumbing`: Low-level commands for direct object and reference access
//! - `porcelain`: User-facing commands (init, log, checkout, tag)
//!
//! Each command is a method on [`Repository`](crate::areas::repository::Repository)
//! that prints to the repository's writer.

pub mod plumbing;
pub mod porcelain;
