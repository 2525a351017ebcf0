// src/commands/cd/mod.rs
//! cd - Change the current folder
//!
//! - `cd` goes to the root
//! - `cd ..` goes to the parent (stays put at the root)
//! - `cd DIR` goes to DIR, which must be a folder

use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::FsError;

pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let CommandContext { args, fs, .. } = ctx;
        let target = match args {
            [] => fs.root(),
            [dir] if dir == ".." => fs.parent(fs.cwd()).ok_or(FsError::DanglingNode)?,
            [dir] => match fs.find_path(dir) {
                Some(id) if fs.is_folder(id) => id,
                _ => return Err(CommandError::NoSuchDirectory(dir.clone())),
            },
            _ => return Err(CommandError::usage("too many arguments")),
        };
        fs.set_cwd(target)?;
        Ok(String::new())
    }
}
