//! msgkey - message key checker for Java projects
//!
//! msgkey checks that calls passing a message key to a logging or message
//! method supply as many arguments as the key's `.properties` template has
//! `{n}` placeholders, that placeholder numbering is contiguous, and that
//! every referenced key is defined.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and actions)
//! - `config`: Configuration file loading and parsing
//! - `core`: Core analysis engine
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `rules`: Detection rules built on the engine

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod mcp;
pub mod rules;
