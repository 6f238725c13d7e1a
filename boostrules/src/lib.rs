// boostrules/src/lib.rs
//! # boostrules CLI Application
//!
//! This crate provides the command line front-end for `boostrules-core`:
//! argument parsing, logging, themed console messages and the run summary.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;

pub use commands::generate::{run_generate, GenerateOptions};
