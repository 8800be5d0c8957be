//! Domains module containing business logic organized by bounded contexts.
//!
//! The server exposes tools only; resources and prompts are not offered.

pub mod tools;
