//! HamStudy bot core: exam session search and ULS licence lookup.
//!
//! The crate turns chat commands into queries against the HamStudy public
//! API and renders the answers as embeds ready to post.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: search filters, sessions, licence records, and embeds
//! - **Ports**: the exam directory and command registry traits
//! - **Adapters**: the HTTP and in-memory directories and the built-in
//!   command registry
//! - **Services**: exam lookup orchestration and command dispatch
//!
//! # Modules
//!
//! - [`exam`]: session search, licence lookup, and rendering
//! - [`command`]: slash-command parsing, validation, and dispatch
//! - [`config`]: endpoint and client settings

pub mod command;
pub mod config;
pub mod exam;
