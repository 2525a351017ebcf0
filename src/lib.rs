//! memsh - A shell over an in-memory filesystem
//!
//! This library provides the folder/file tree, the line parser that turns
//! input into structured commands, and the built-in commands that operate
//! on the tree.

pub mod commands;
pub mod config;
pub mod fs;
pub mod parser;
pub mod shell;

pub use config::ShellConfig;
pub use fs::Filesystem;
pub use parser::{parse, ParseException, ParsedCommand};
pub use shell::{ExecOutcome, Shell};
