// src/commands/rm/mod.rs
use crate::commands::utils::{for_each_operand, FailurePolicy};
use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::FsError;

pub struct RmCommand;

impl Command for RmCommand {
    fn name(&self) -> &'static str {
        "rm"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let CommandContext { args, fs, .. } = ctx;
        if args.is_empty() {
            return Err(CommandError::usage("missing operand"));
        }

        // Folders go with everything below them.
        for_each_operand(args, FailurePolicy::FailFast, |path| {
            let id = fs
                .find_path(path)
                .ok_or_else(|| CommandError::NoSuchEntry(path.to_string()))?;
            if fs.is_root(id) {
                return Err(CommandError::RemoveRoot);
            }
            let parent = fs.parent(id).ok_or(FsError::DanglingNode)?;
            fs.remove(parent, id)?;
            Ok(())
        })?;
        Ok(String::new())
    }
}
