//! Git data structures and algorithms
//!
//! - `branch`: Reference names and revision parsing
//! - `checkout`: Writing a tree out to the file system
//! - `log`: Commit history traversal and rendering
//! - `objects`: Git object types (blob, tree, commit, tag) and their codecs

pub mod branch;
pub mod checkout;
pub mod log;
pub mod objects;
