//! Unit tests for the command layer.
