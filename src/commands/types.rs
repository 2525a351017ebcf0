// src/commands/types.rs
use thiserror::Error;
use crate::fs::{FsError, Filesystem};

/// Error returned by a built-in command; its text becomes the line's output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("{0}")]
    Usage(String),

    #[error("cannot find directory {0}")]
    NoSuchDirectory(String),

    #[error("cannot find file {0}")]
    NoSuchFile(String),

    #[error("no such file or directory: {0}")]
    NoSuchEntry(String),

    #[error("cannot remove root directory")]
    RemoveRoot,
}

impl CommandError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

/// 命令执行结果
pub type CommandResult = Result<String, CommandError>;

/// 命令执行上下文
pub struct CommandContext<'a> {
    pub args: &'a [String],
    /// Path given with `<`, if any
    pub input: Option<&'a str>,
    pub fs: &'a mut Filesystem,
}

/// 命令 trait
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult;
}
