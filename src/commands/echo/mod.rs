// src/commands/echo/mod.rs
use crate::commands::utils::append_input;
use crate::commands::{Command, CommandContext, CommandResult};

pub struct EchoCommand;

impl Command for EchoCommand {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        let mut output = ctx.args.join(" ");
        append_input(ctx.fs, &mut output, ctx.input)?;
        Ok(output)
    }
}
