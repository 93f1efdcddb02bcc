//! seidel library — command-line front end for `seidel-core`.

pub mod app;
pub mod completion;
pub mod config;
pub mod errors;
pub mod input;
pub mod output;
