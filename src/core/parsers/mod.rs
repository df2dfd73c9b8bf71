//! Message file parsers.
//!
//! - `properties`: `.properties` message catalogs located by glob

pub mod properties;
