// src/commands/utils/mod.rs
use crate::commands::ls::list;
use crate::commands::{CommandError, CommandResult};
use crate::fs::{Filesystem, NodeKind};

/// What a multi-operand command does when one operand fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing operand and report it.
    FailFast,
    /// Skip failing operands and keep the results of the others.
    BestEffort,
}

/// Run `f` over every operand under `policy`, collecting the results.
pub fn for_each_operand<T, F>(
    operands: &[String],
    policy: FailurePolicy,
    mut f: F,
) -> Result<Vec<T>, CommandError>
where
    F: FnMut(&str) -> Result<T, CommandError>,
{
    let mut results = Vec::with_capacity(operands.len());
    for operand in operands {
        match f(operand) {
            Ok(value) => results.push(value),
            Err(e) if policy == FailurePolicy::BestEffort => {
                log::debug!("skipping operand {}: {}", operand, e);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(results)
}

/// Readable content of `path`: a file's contents, or a folder's long
/// listing.
pub fn read_content(fs: &Filesystem, path: &str) -> CommandResult {
    let kind = fs
        .find_path(path)
        .and_then(|id| fs.get(id))
        .map(|node| node.kind());
    match kind {
        Some(NodeKind::File(file)) => Ok(file.contents().to_string()),
        Some(NodeKind::Folder(_)) => list(fs, &["-l", path]),
        None => Err(CommandError::NoSuchFile(path.to_string())),
    }
}

/// Append the content of the `<` target, on its own line when `output`
/// already holds something.
pub fn append_input(fs: &Filesystem, output: &mut String, input: Option<&str>) -> Result<(), CommandError> {
    if let Some(path) = input {
        let content = read_content(fs, path)?;
        if !output.is_empty() {
            output.push('\n');
        }
        output.push_str(&content);
    }
    Ok(())
}
