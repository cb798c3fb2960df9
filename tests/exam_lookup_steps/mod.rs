//! Step definitions for exam lookup behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
