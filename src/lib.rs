pub mod cli;
pub mod commands;
pub mod config;
pub mod counter;
pub mod error;
pub mod language;
pub mod logging;
pub mod output;
pub mod scanner;

pub use error::{Result, SlocScanError};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
