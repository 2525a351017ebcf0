// src/commands/cat/mod.rs
use crate::commands::utils::{append_input, for_each_operand, read_content, FailurePolicy};
use crate::commands::{Command, CommandContext, CommandResult};

pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let CommandContext { args, input, fs } = ctx;

        // Operands that cannot be read are skipped; a bad `<` target is not.
        let fs = &*fs;
        let mut output = for_each_operand(args, FailurePolicy::BestEffort, |file| read_content(fs, file))?
            .concat();
        append_input(fs, &mut output, input)?;
        Ok(output)
    }
}
