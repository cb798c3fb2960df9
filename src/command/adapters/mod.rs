//! Adapters for the command layer.

pub mod memory;

pub use memory::{FIND_EXAM_COMMAND, HELLO_COMMAND, InMemoryCommandRegistry, ULS_COMMAND};
