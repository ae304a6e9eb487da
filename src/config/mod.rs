//! Static configuration and reference data
//!
//! The built-in package mapping and default paths live here. Everything in
//! this module is constant data; the mapping table can be replaced wholesale
//! through the `--db` flag but is never mutated.

pub mod db;
pub mod defaults;
