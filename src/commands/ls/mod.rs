// src/commands/ls/mod.rs
use crate::commands::{Command, CommandContext, CommandError, CommandResult};
use crate::fs::{Entry, Filesystem, FsError, NodeId};

pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }

    fn execute(&self, ctx: CommandContext<'_>) -> CommandResult {
        list(ctx.fs, ctx.args)
    }
}

/// `d` or `f`, name, size; tab separated.
fn format_entry(fs: &Filesystem, entry: &Entry, name: Option<&str>) -> String {
    let type_letter = if fs.entry_is_folder(entry) { 'd' } else { 'f' };
    format!(
        "{}\t{}\t{}",
        type_letter,
        name.unwrap_or_else(|| fs.entry_name(entry)),
        fs.entry_size(entry)
    )
}

fn list_folder(fs: &Filesystem, folder: NodeId, long: bool) -> String {
    let entries = fs.entries(folder);
    if long {
        entries
            .iter()
            .map(|e| format_entry(fs, e, None))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        entries
            .iter()
            .map(|e| fs.entry_name(e))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// Render an `ls` invocation.
///
/// Without paths the current folder is listed. Otherwise files come first,
/// then each folder under a `<path>:` header, blank-line separated. `..`
/// names the parent of the current folder and is shown as `../`.
pub fn list<S: AsRef<str>>(fs: &Filesystem, args: &[S]) -> CommandResult {
    let mut long = false;
    let mut files: Vec<(&str, NodeId)> = Vec::new();
    let mut folders: Vec<(&str, NodeId)> = Vec::new();

    for arg in args {
        match arg.as_ref() {
            "-l" => long = true,
            ".." => {
                let parent = fs.parent(fs.cwd()).ok_or(FsError::DanglingNode)?;
                folders.push(("../", parent));
            }
            path => match fs.find_path(path) {
                Some(id) if fs.is_folder(id) => folders.push((path, id)),
                Some(id) => files.push((path, id)),
                None => return Err(CommandError::NoSuchEntry(path.to_string())),
            },
        }
    }

    if files.is_empty() && folders.is_empty() {
        return Ok(list_folder(fs, fs.cwd(), long));
    }

    let mut result = if long {
        files
            .iter()
            .map(|(name, id)| format_entry(fs, &Entry::Child(*id), Some(*name)))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        files.iter().map(|(name, _)| *name).collect::<Vec<_>>().join("\t")
    };

    for (name, folder) in folders {
        if !result.is_empty() {
            result.push_str("\n\n");
        }
        result.push_str(name);
        result.push_str(":\n");
        result.push_str(&list_folder(fs, folder, long));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(fs: &mut Filesystem, args: &[&str]) -> CommandResult {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        LsCommand.execute(CommandContext { args: &args, input: None, fs })
    }

    /// /File-1 ("abc"), /Folder-A/{File-A1, File-A2}
    fn setup() -> Filesystem {
        let mut fs = Filesystem::new();
        let f1 = fs.create_file("File-1").unwrap();
        fs.file_mut(f1).unwrap().write("abc");
        fs.create_file("Folder-A/File-A1").unwrap();
        fs.create_file("Folder-A/File-A2").unwrap();
        fs
    }

    #[test]
    fn test_ls_current_folder() {
        let mut fs = setup();
        assert_eq!(run(&mut fs, &[]).unwrap(), "..\tFile-1\tFolder-A");
    }

    #[test]
    fn test_ls_long() {
        let mut fs = setup();
        assert_eq!(
            run(&mut fs, &["-l"]).unwrap(),
            "d\t..\t1\nf\tFile-1\t3\nd\tFolder-A\t3"
        );
    }

    #[test]
    fn test_ls_folder_argument() {
        let mut fs = setup();
        assert_eq!(
            run(&mut fs, &["Folder-A"]).unwrap(),
            "Folder-A:\n..\tFile-A1\tFile-A2"
        );
    }

    #[test]
    fn test_ls_files_then_folders() {
        let mut fs = setup();
        assert_eq!(
            run(&mut fs, &["Folder-A", "File-1", "/Folder-A/File-A1"]).unwrap(),
            "File-1\t/Folder-A/File-A1\n\nFolder-A:\n..\tFile-A1\tFile-A2"
        );
        assert_eq!(
            run(&mut fs, &["-l", "File-1"]).unwrap(),
            "f\tFile-1\t3"
        );
    }

    #[test]
    fn test_ls_parent() {
        let mut fs = setup();
        let folder_a = fs.find_path("/Folder-A").unwrap();
        fs.set_cwd(folder_a).unwrap();
        assert_eq!(run(&mut fs, &[]).unwrap(), "..\tFile-A1\tFile-A2");
        assert_eq!(run(&mut fs, &[".."]).unwrap(), "../:\n..\tFile-1\tFolder-A");
    }

    #[test]
    fn test_ls_missing() {
        let mut fs = setup();
        let err = run(&mut fs, &["nope"]).unwrap_err();
        assert_eq!(err.to_string(), "no such file or directory: nope");
    }
}
