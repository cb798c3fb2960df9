//! Unit tests for the exam module.

mod session_render_tests;
mod vec_code_tests;
