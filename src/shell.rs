//! Shell Session
//!
//! Main entry point for the shell.
//! Ties together the parser, the built-in commands and the filesystem.

use crate::commands::{create_builtin_registry, CommandContext, CommandRegistry};
use crate::config::ShellConfig;
use crate::fs::{Filesystem, FsError};
use crate::parser::{parse, ParsedCommand};

/// Result of executing one line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecOutcome {
    /// Set only by the `exit` command.
    pub exit: bool,
    /// Text to show; empty when nothing should be printed.
    pub output: String,
}

impl ExecOutcome {
    fn printed(output: impl Into<String>) -> Self {
        Self {
            exit: false,
            output: output.into(),
        }
    }
}

/// A shell session over one in-memory filesystem.
pub struct Shell {
    fs: Filesystem,
    registry: CommandRegistry,
    prompt_suffix: String,
}

impl Shell {
    /// Create a session on an empty filesystem.
    pub fn new() -> Self {
        Self {
            fs: Filesystem::new(),
            registry: create_builtin_registry(),
            prompt_suffix: ShellConfig::default().prompt_suffix,
        }
    }

    /// Create a session and seed it from `config`.
    pub fn with_config(config: &ShellConfig) -> Result<Self, FsError> {
        let mut shell = Self::new();
        shell.prompt_suffix = config.prompt_suffix.clone();

        for folder in &config.folders {
            shell.fs.create_folder(folder)?;
        }
        for seed in &config.files {
            let id = shell.fs.create_file(&seed.path)?;
            if let Some(file) = shell.fs.file_mut(id) {
                file.write(&seed.contents);
            }
        }
        if let Some(cwd) = &config.cwd {
            let folder = shell.fs.create_folder(cwd)?;
            shell.fs.set_cwd(folder)?;
        }
        Ok(shell)
    }

    pub fn fs(&self) -> &Filesystem {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut Filesystem {
        &mut self.fs
    }

    /// Current path followed by the prompt suffix.
    pub fn prompt(&self) -> String {
        format!("{}{}", self.fs.current_directory_path(), self.prompt_suffix)
    }

    /// Execute one line.
    pub fn execute(&mut self, line: &str) -> ExecOutcome {
        let cmd = match parse(line) {
            Ok(cmd) => cmd,
            Err(e) => return ExecOutcome::printed(e.to_string()),
        };

        let Some(name) = cmd.name.as_deref() else {
            let output = if line.trim().is_empty() { "" } else { "No command given." };
            return ExecOutcome::printed(output);
        };
        if name == "exit" {
            return ExecOutcome {
                exit: true,
                output: String::new(),
            };
        }

        let Some(command) = self.registry.get(name) else {
            return ExecOutcome::printed(format!("Unknown command: {}", name));
        };
        log::debug!("dispatching {} {:?}", name, cmd.arguments);

        let result = command.execute(CommandContext {
            args: &cmd.arguments,
            input: cmd.input.as_deref(),
            fs: &mut self.fs,
        });
        let output = match result {
            Ok(text) => redirect(&mut self.fs, &cmd, text),
            Err(e) => {
                log::debug!("{} failed: {}", name, e);
                e.to_string()
            }
        };
        ExecOutcome::printed(output)
    }

    /// Execute `script` line by line, stopping after `exit`. Non-empty
    /// outputs are joined with newlines.
    pub fn run_script(&mut self, script: &str) -> ExecOutcome {
        let mut outputs = Vec::new();
        let mut exit = false;
        for line in script.lines() {
            let outcome = self.execute(line);
            if !outcome.output.is_empty() {
                outputs.push(outcome.output);
            }
            if outcome.exit {
                exit = true;
                break;
            }
        }
        ExecOutcome {
            exit,
            output: outputs.join("\n"),
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

/// Send `text` to the `>`/`>>` target of `cmd`, if any. Returns what is left
/// to print: nothing on success, the error otherwise.
fn redirect(fs: &mut Filesystem, cmd: &ParsedCommand, text: String) -> String {
    let (target, append) = match (&cmd.output, &cmd.output_append) {
        (Some(path), _) => (path, false),
        (None, Some(path)) => (path, true),
        (None, None) => return text,
    };
    match fs.create_file(target) {
        Ok(id) => {
            if let Some(file) = fs.file_mut(id) {
                if append {
                    file.append(&text);
                } else {
                    file.write(&text);
                }
            }
            String::new()
        }
        Err(e) => e.to_string(),
    }
}
