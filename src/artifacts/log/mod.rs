//! Commit history traversal for `log`
//!
//! - `rev_list`: Depth-first walk over the commit graph
//! - `graphviz`: Rendering of a walk as a Graphviz digraph
//!
//! ## Algorithm
//!
//! The walk starts at a single commit and visits every ancestor exactly once,
//! each commit before its parents, first parents before later ones. A visited
//! set keeps shared ancestors of merges from being emitted twice.

pub mod graphviz;
pub mod rev_list;
