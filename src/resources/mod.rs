//! Plain filesystem copy primitives used by the staging tasks.

pub mod fs;
