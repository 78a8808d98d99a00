//! Core repository components
//!
//! - `config`: The `.git/config` file
//! - `database`: Object database for storing blobs, trees, commits and tags
//! - `refs`: Reference management (HEAD, branches, tags)
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: File system operations on a directory tree

pub mod config;
pub mod database;
pub mod refs;
pub mod repository;
pub mod workspace;
