//! Utility helpers shared by the agent and the command surface.

pub mod file_ops;

pub use file_ops::{FileError, read_file, write_file};
