//! Object model and storage engine of a Git-compatible repository
//!
//! - [`areas`]: Object database, references, configuration and the repository
//! - [`artifacts`]: Object codecs, revision names, history walk and checkout
//! - [`commands`]: One method per command-line operation
//! - [`errors`]: Error conditions callers can tell apart

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod errors;
pub mod telemetry;
