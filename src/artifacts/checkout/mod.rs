//! Tree materialization
//!
//! Expands a tree object into real files and directories under an empty
//! destination directory.

pub mod materializer;
