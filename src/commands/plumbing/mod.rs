//! Plumbing commands (low-level Git operations)
//!
//! Plumbing commands provide direct access to the object store and the
//! reference namespace. Their output is meant for scripts.
//!
//! ## Commands
//!
//! - `cat-file`: Print the payload of an object
//! - `hash-object`: Compute object ID and optionally store in database
//! - `ls-tree`: List contents of a tree object
//! - `rev-parse`: Resolve a name to an object ID
//! - `show-ref`: List references with the IDs they resolve to

pub mod cat_file;
pub mod hash_object;
pub mod ls_tree;
pub mod rev_parse;
pub mod show_ref;
