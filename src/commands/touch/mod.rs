// src/commands/touch/mod.rs
use crate::commands::utils::{for_each_operand, FailurePolicy};
use crate::commands::{Command, CommandContext, CommandError, CommandResult};

pub struct TouchCommand;

impl Command for TouchCommand {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let CommandContext { args, fs, .. } = ctx;
        if args.is_empty() {
            return Err(CommandError::usage("missing file operand"));
        }

        // Existing files are left untouched.
        for_each_operand(args, FailurePolicy::FailFast, |file| Ok(fs.create_file(file)?))?;
        Ok(String::new())
    }
}
