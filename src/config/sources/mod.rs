//! Individual configuration sources, each added to a builder in turn.

pub mod environment;
pub mod global_file;
pub mod local_file;
