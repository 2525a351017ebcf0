//! Path Resolver
//!
//! Translates `/`-separated paths into tree nodes. Relative paths are taken
//! from the filesystem's current folder. Empty segments are skipped, `.`
//! stays put and `..` climbs one level (the root is its own parent).

use super::tree::{is_valid_name, Filesystem};
use super::types::*;

fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|segment| !segment.is_empty())
}

impl Filesystem {
    /// `path` itself when absolute, otherwise `path` below the current folder.
    pub fn absolute_path(&self, path: &str) -> String {
        if path.starts_with('/') {
            return path.to_string();
        }
        let cwd = self.current_directory_path();
        if cwd == "/" {
            format!("/{}", path)
        } else {
            format!("{}/{}", cwd, path)
        }
    }

    /// Resolve `path` to a node. Every segment before the last must name a
    /// folder; the last one may be either kind.
    pub fn find_path(&self, path: &str) -> Option<NodeId> {
        if path == "/" {
            return Some(self.root());
        }
        let abs = self.absolute_path(path);
        let segments: Vec<&str> = segments(&abs).collect();

        let mut curr = self.root();
        for (i, segment) in segments.iter().enumerate() {
            let last = i + 1 == segments.len();
            curr = match *segment {
                "." => curr,
                ".." => self.parent(curr)?,
                name if last => self.lookup(curr, name)?,
                name => self.lookup_folder(curr, name)?,
            };
        }
        Some(curr)
    }

    /// Make sure every folder along `path` exists and return the last one.
    ///
    /// Fails when a segment already exists as a file. Running it again on an
    /// existing folder returns that same folder.
    pub fn create_folder(&mut self, path: &str) -> Result<NodeId, FsError> {
        let abs = self.absolute_path(path);
        let mut curr = self.root();
        for segment in segments(&abs) {
            curr = match segment {
                "." => curr,
                ".." => self.parent(curr).ok_or(FsError::DanglingNode)?,
                name => match self.lookup(curr, name) {
                    Some(id) if self.is_folder(id) => id,
                    Some(_) => {
                        return Err(FsError::FileInTheWay { segment: name.to_string() })
                    }
                    None => self.create_folder_in(curr, name)?,
                },
            };
        }
        Ok(curr)
    }

    /// Return the file at `path`, creating it and any missing folders if it
    /// does not exist yet. An existing file keeps its contents.
    pub fn create_file(&mut self, path: &str) -> Result<NodeId, FsError> {
        if let Some(id) = self.find_path(path) {
            if self.is_file(id) {
                return Ok(id);
            }
            return Err(FsError::FolderInTheWay { path: path.to_string() });
        }

        let name = self.filename(path);
        if !is_valid_name(&name) {
            return Err(FsError::InvalidPath { path: path.to_string() });
        }
        // `..` after a missing folder only resolves once the folder exists.
        let folder = self.create_folder(&self.base_foldername(path))?;
        match self.lookup(folder, &name) {
            Some(id) if self.is_file(id) => Ok(id),
            Some(_) => Err(FsError::FolderInTheWay { path: path.to_string() }),
            None => {
                log::trace!("creating file {} in {}", name, self.path_of(folder));
                self.create_file_in(folder, &name)
            }
        }
    }

    /// Last segment of the absolute form of `path`.
    pub fn filename(&self, path: &str) -> String {
        let abs = self.absolute_path(path);
        abs.rsplit('/').next().unwrap_or_default().to_string()
    }

    /// Absolute form of `path` without its last segment; `/` when nothing is
    /// left.
    pub fn base_foldername(&self, path: &str) -> String {
        if path == "/" {
            return path.to_string();
        }
        let abs = self.absolute_path(path);
        match abs.rfind('/') {
            Some(0) | None => "/".to_string(),
            Some(pos) => abs[..pos].to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::tree::tests::sample_fs;

    fn fs_in(cwd: &str) -> Filesystem {
        let mut fs = sample_fs();
        let folder = fs.find_path(cwd).unwrap();
        fs.set_cwd(folder).unwrap();
        fs
    }

    fn name_of(fs: &Filesystem, id: NodeId) -> &str {
        fs.get(id).unwrap().name()
    }

    #[test]
    fn test_filename_base_and_absolute() {
        // (cwd, path, filename, base, absolute)
        let cases = [
            ("/", "/", "", "/", "/"),
            ("/", "/a", "a", "/", "/a"),
            ("/", "/a/b/c", "c", "/a/b", "/a/b/c"),
            ("/", "a", "a", "/", "/a"),
            ("/", "a/b/c", "c", "/a/b", "/a/b/c"),
            ("/", "File-1", "File-1", "/", "/File-1"),
            ("/Folder-A", "/", "", "/", "/"),
            ("/Folder-A", "/a", "a", "/", "/a"),
            ("/Folder-A", "/a/b/c", "c", "/a/b", "/a/b/c"),
            ("/Folder-A", "a", "a", "/Folder-A", "/Folder-A/a"),
            ("/Folder-A", "a/b/c", "c", "/Folder-A/a/b", "/Folder-A/a/b/c"),
        ];
        for (cwd, path, file, base, abs) in cases {
            let fs = fs_in(cwd);
            assert_eq!(fs.filename(path), file, "filename of {} in {}", path, cwd);
            assert_eq!(fs.base_foldername(path), base, "base of {} in {}", path, cwd);
            assert_eq!(fs.absolute_path(path), abs, "absolute of {} in {}", path, cwd);
        }
    }

    #[test]
    fn test_base_and_filename_rebuild_absolute_path() {
        let fs = fs_in("/Folder-A");
        for path in ["/a", "a", "a/b/c", "/x/y", "File-A1"] {
            let base = fs.base_foldername(path);
            let rebuilt = if base == "/" {
                format!("/{}", fs.filename(path))
            } else {
                format!("{}/{}", base, fs.filename(path))
            };
            assert_eq!(rebuilt, fs.absolute_path(path));
        }
    }

    #[test]
    fn test_find_path() {
        // (cwd, path, expected name)
        let cases = [
            ("/", "/", Some("/")),
            ("/", "/File-1", Some("File-1")),
            ("/", "File-1", Some("File-1")),
            ("/", "xxxx", None),
            ("/", "/Folder-A/File-A1", Some("File-A1")),
            ("/Folder-A", "/File-1", Some("File-1")),
            ("/Folder-A", "/Folder-A", Some("Folder-A")),
            ("/Folder-A", "File-A2", Some("File-A2")),
            ("/Folder-A", "/xxxx/File-A1", None),
            ("/Folder-A", "/", Some("/")),
        ];
        for (cwd, path, expected) in cases {
            let fs = fs_in(cwd);
            let found = fs.find_path(path).map(|id| name_of(&fs, id).to_string());
            assert_eq!(found.as_deref(), expected, "find {} in {}", path, cwd);
        }
    }

    #[test]
    fn test_find_path_requires_intermediate_folders() {
        let fs = sample_fs();
        assert!(fs.find_path("/File-1/x").is_none());
        assert!(fs.find_path("File-1/x").is_none());
    }

    #[test]
    fn test_find_path_dot_segments() {
        let fs = fs_in("/Folder-A");
        let root = fs.root();
        assert_eq!(fs.find_path(".."), Some(root));
        assert_eq!(fs.find_path("../File-1"), fs.find_path("/File-1"));
        assert_eq!(fs.find_path("./File-A1"), fs.find_path("/Folder-A/File-A1"));
        assert_eq!(fs.find_path("/.."), Some(root));
        assert_eq!(fs.find_path("/Folder-A/"), fs.find_path("/Folder-A"));
    }

    #[test]
    fn test_absolute_normalization_is_idempotent() {
        let fs = fs_in("/Folder-A");
        for path in ["File-A1", "/File-1", "nope", "..", "/", "File-A2"] {
            let abs = fs.absolute_path(path);
            assert_eq!(fs.find_path(&abs), fs.find_path(path), "path {}", path);
        }
    }

    #[test]
    fn test_create_folder() {
        // (cwd, path, should fail)
        let cases = [
            ("/", "a", false),
            ("/", "a/b/c", false),
            ("/", "/a/b/c", false),
            ("/Folder-A", "a", false),
            ("/Folder-A", "a/b/c", false),
            ("/Folder-A", "/a/b/c", false),
            ("/Folder-A", "/Folder-A/a/b/c", false),
            ("/Folder-A", "/File-1/a/b/c", true),
            ("/", "nope/../Folder-A", false),
            ("/Folder-A", "../x/./y", false),
            ("/", "nope/../File-1/a", true),
        ];
        for (cwd, path, fails) in cases {
            let mut fs = fs_in(cwd);
            let result = fs.create_folder(path);
            assert_eq!(result.is_err(), fails, "create {} in {}", path, cwd);
            if !fails {
                let id = result.unwrap();
                assert!(fs.is_folder(id));
                assert_eq!(fs.find_path(path), Some(id));
                let abs = fs.absolute_path(path);
                assert_eq!(fs.find_path(&abs), Some(id));
            }
        }
    }

    #[test]
    fn test_create_folder_conflict_message() {
        let mut fs = sample_fs();
        let err = fs.create_folder("/File-1/a").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::Conflict);
        assert_eq!(err.to_string(), "File-1 is a file already");
    }

    #[test]
    fn test_create_folder_is_idempotent() {
        let mut fs = sample_fs();
        let first = fs.create_folder("x/y").unwrap();
        let count = fs.len();
        let second = fs.create_folder("x/y").unwrap();
        assert_eq!(first, second);
        assert_eq!(fs.len(), count);
        let x = fs.find_path("/x").unwrap();
        assert_eq!(fs.entries(x).len(), 2);
    }

    #[test]
    fn test_create_folder_root() {
        let mut fs = sample_fs();
        assert_eq!(fs.create_folder("/").unwrap(), fs.root());
    }

    #[test]
    fn test_create_file() {
        // (cwd, path, final path or None when it should fail)
        let cases = [
            ("/", "a", Some("/a")),
            ("/", "/", None),
            ("/", "/a", Some("/a")),
            ("/", "/x/y/z", Some("/x/y/z")),
            ("/", "/Folder-A/a", Some("/Folder-A/a")),
            ("/", "Folder-A", None),
            ("/Folder-A", "/Folder-A", None),
            ("/Folder-A", "a/b", Some("/Folder-A/a/b")),
            ("/Folder-A", "../b", Some("/b")),
            ("/", "nope/../File-1", Some("/File-1")),
            ("/", "nope/../Folder-A", None),
            ("/Folder-A", "nope/../../Folder-A", None),
        ];
        for (cwd, path, target) in cases {
            let mut fs = fs_in(cwd);
            let result = fs.create_file(path);
            match target {
                Some(target) => {
                    let id = result.unwrap();
                    assert_eq!(fs.find_path(target), Some(id));
                    assert!(fs.is_file(id));
                }
                None => assert!(result.is_err(), "create {} in {}", path, cwd),
            }
        }
    }

    #[test]
    fn test_create_file_on_folder_is_conflict() {
        let mut fs = sample_fs();
        let err = fs.create_file("Folder-A").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::Conflict);
        assert_eq!(err.to_string(), "Folder-A is an existing folder");
    }

    #[test]
    fn test_create_file_keeps_existing_contents() {
        let mut fs = sample_fs();
        let first = fs.create_file("/File-1").unwrap();
        fs.file_mut(first).unwrap().write("keep me");
        let second = fs.create_file("File-1").unwrap();
        assert_eq!(first, second);
        assert_eq!(fs.file(second).unwrap().contents(), "keep me");
    }

    #[test]
    fn test_create_file_through_missing_folder_and_up() {
        let mut fs = sample_fs();
        let folder_a = fs.find_path("/Folder-A").unwrap();
        let err = fs.create_file("nope/../Folder-A").unwrap_err();
        assert_eq!(err.kind(), FsErrorKind::Conflict);
        assert_eq!(fs.find_path("/Folder-A"), Some(folder_a));
        assert!(fs.is_folder(folder_a));
        assert!(fs.find_path("/Folder-A/File-A2").is_some());

        let f1 = fs.find_path("/File-1").unwrap();
        fs.file_mut(f1).unwrap().write("data");
        assert_eq!(fs.create_file("other/../File-1").unwrap(), f1);
        assert_eq!(fs.file(f1).unwrap().contents(), "data");
    }

    #[test]
    fn test_create_file_builds_intermediate_folders() {
        let mut fs = Filesystem::new();
        fs.create_file("a/b/c").unwrap();
        let c = fs.find_path("/a/b/c").unwrap();
        assert!(fs.is_file(c));
        assert_eq!(name_of(&fs, c), "c");
        let b = fs.find_path("/a/b").unwrap();
        assert!(fs.is_folder(b));
    }

    #[test]
    fn test_create_file_through_file_fails() {
        let mut fs = sample_fs();
        let err = fs.create_file("/File-1/x").unwrap_err();
        assert_eq!(err, FsError::FileInTheWay { segment: "File-1".to_string() });
    }

    #[test]
    fn test_create_file_invalid_names() {
        let mut fs = sample_fs();
        for path in ["newdir/", "x/.."] {
            let err = fs.create_file(path).unwrap_err();
            assert_eq!(err.kind(), FsErrorKind::InvalidPath, "path {}", path);
        }
    }
}
