//! Porcelain commands (user-facing Git operations)
//!
//! ## Commands
//!
//! - `init`: Initialize a new repository
//! - `log`: Show commit history as a graph
//! - `checkout`: Write a commit's tree into an empty directory
//! - `tag`: List or create tags

pub mod checkout;
pub mod init;
pub mod log;
pub mod tag;
