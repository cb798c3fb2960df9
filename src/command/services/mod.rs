//! Services for the command layer.

pub mod dispatcher;

pub use dispatcher::{CommandDispatcher, DispatchError, DispatchResult};
