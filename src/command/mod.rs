//! Chat command handling.
//!
//! Commands arrive as slash-command text such as
//! `/findexam zipcode=62704 post=true`. The dispatcher parses the text,
//! validates parameters against the registered definitions, and turns the
//! exam lookup outcome into a [`domain::CommandReply`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
