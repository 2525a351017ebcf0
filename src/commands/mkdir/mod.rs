// src/commands/mkdir/mod.rs
use crate::commands::utils::{for_each_operand, FailurePolicy};
use crate::commands::{Command, CommandContext, CommandError, CommandResult};

pub struct MkdirCommand;

impl Command for MkdirCommand {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let CommandContext { args, fs, .. } = ctx;
        if args.is_empty() {
            return Err(CommandError::usage("no directory specified"));
        }

        // Parents are always created; existing folders are not an error.
        for_each_operand(args, FailurePolicy::FailFast, |dir| Ok(fs.create_folder(dir)?))?;
        Ok(String::new())
    }
}
