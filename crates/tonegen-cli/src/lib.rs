//! tonegen CLI library.
//!
//! Configuration loading and the generate command behind the `tonegen`
//! binary.

pub mod commands;
pub mod config;
