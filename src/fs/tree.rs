//! In-Memory Filesystem Tree
//!
//! Arena-backed folder/file tree. Every node sits in a slot of the arena and
//! refers to its parent by [`NodeId`]; the root's parent is the root itself.
//! Folders own their children through their child map, so removing a node
//! from its folder is the only thing that frees it.

use super::types::*;

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// In-memory hierarchical filesystem with a current-folder cursor.
#[derive(Debug, Clone)]
pub struct Filesystem {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
    cwd: NodeId,
}

impl Filesystem {
    /// Create a filesystem holding only the root folder `/`.
    pub fn new() -> Self {
        let root = NodeId { index: 0, generation: 0 };
        let node = Node {
            name: "/".to_string(),
            parent: root,
            kind: NodeKind::Folder(Folder::default()),
        };
        Self {
            slots: vec![Slot { generation: 0, node: Some(node) }],
            free: Vec::new(),
            root,
            cwd: root,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Folder the relative paths are resolved against.
    pub fn cwd(&self) -> NodeId {
        self.cwd
    }

    /// Move the cursor. Only live folders are accepted.
    pub fn set_cwd(&mut self, id: NodeId) -> Result<(), FsError> {
        let node = self.node(id)?;
        if !node.is_folder() {
            return Err(FsError::NotAFolder { name: node.name.clone() });
        }
        self.cwd = id;
        Ok(())
    }

    /// The live node behind `id`; `None` once it has been removed.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
    }

    pub fn folder(&self, id: NodeId) -> Option<&Folder> {
        self.get(id).and_then(Node::as_folder)
    }

    pub fn file(&self, id: NodeId) -> Option<&File> {
        self.get(id).and_then(Node::as_file)
    }

    pub fn file_mut(&mut self, id: NodeId) -> Option<&mut File> {
        match self.get_mut(id) {
            Some(Node { kind: NodeKind::File(file), .. }) => Some(file),
            _ => None,
        }
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).map(Node::parent)
    }

    pub fn is_root(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(|node| node.parent == id)
    }

    pub fn is_folder(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_folder)
    }

    pub fn is_file(&self, id: NodeId) -> bool {
        self.get(id).is_some_and(Node::is_file)
    }

    /// Number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ------------------------------------------------------------------------
    // Folder-scoped primitives
    // ------------------------------------------------------------------------

    /// Create an empty folder named `name` inside `folder`, replacing any
    /// sibling of the same name.
    pub fn create_folder_in(&mut self, folder: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.create_in(folder, name, NodeKind::Folder(Folder::default()))
    }

    /// Create an empty file named `name` inside `folder`, replacing any
    /// sibling of the same name.
    pub fn create_file_in(&mut self, folder: NodeId, name: &str) -> Result<NodeId, FsError> {
        self.create_in(folder, name, NodeKind::File(File::default()))
    }

    fn create_in(&mut self, folder: NodeId, name: &str, kind: NodeKind) -> Result<NodeId, FsError> {
        if !is_valid_name(name) {
            return Err(FsError::InvalidPath { path: name.to_string() });
        }
        self.expect_folder(folder)?;
        let id = self.alloc(Node {
            name: name.to_string(),
            parent: folder,
            kind,
        });
        self.add(folder, id)?;
        Ok(id)
    }

    /// Attach `child` to `folder`.
    ///
    /// A sibling with the same name is evicted (last write wins). A child
    /// attached elsewhere is detached from its old folder first.
    pub fn add(&mut self, folder: NodeId, child: NodeId) -> Result<(), FsError> {
        self.expect_folder(folder)?;
        let name = self.node(child)?.name.clone();
        if child == self.root || self.is_ancestor_or_self(child, folder) {
            return Err(FsError::WouldCycle { name });
        }

        self.detach(child);
        if let Some(old) = self.lookup(folder, &name) {
            if old != child {
                self.folder_mut(folder)?.children.shift_remove(&name);
                self.release(old);
            }
        }
        self.folder_mut(folder)?.children.insert(name, child);
        self.node_mut(child)?.parent = folder;
        Ok(())
    }

    /// Remove a direct child of `folder` and free its whole subtree.
    pub fn remove(&mut self, folder: NodeId, child: NodeId) -> Result<(), FsError> {
        let name = self.node(child)?.name.clone();
        if self.lookup(folder, &name) != Some(child) {
            return Err(FsError::NotAChild {
                name,
                folder: self.path_of(folder),
            });
        }
        self.folder_mut(folder)?.children.shift_remove(&name);
        self.release(child);
        Ok(())
    }

    pub fn lookup(&self, folder: NodeId, name: &str) -> Option<NodeId> {
        self.folder(folder)?.get(name)
    }

    pub fn lookup_folder(&self, folder: NodeId, name: &str) -> Option<NodeId> {
        self.lookup(folder, name).filter(|&id| self.is_folder(id))
    }

    pub fn lookup_file(&self, folder: NodeId, name: &str) -> Option<NodeId> {
        self.lookup(folder, name).filter(|&id| self.is_file(id))
    }

    /// Listing of `folder`: the synthetic `..` entry, then the children in
    /// insertion order. Empty for anything that is not a live folder.
    pub fn entries(&self, folder: NodeId) -> Vec<Entry> {
        let Some(f) = self.folder(folder) else {
            return Vec::new();
        };
        let mut entries = Vec::with_capacity(f.len() + 1);
        entries.push(Entry::Up { parent: folder });
        entries.extend(f.children().map(Entry::Child));
        entries
    }

    pub fn entry_name<'a>(&'a self, entry: &Entry) -> &'a str {
        match entry {
            Entry::Up { .. } => "..",
            Entry::Child(id) => self.get(*id).map_or("", Node::name),
        }
    }

    pub fn entry_is_folder(&self, entry: &Entry) -> bool {
        match entry {
            Entry::Up { .. } => true,
            Entry::Child(id) => self.is_folder(*id),
        }
    }

    /// Size reported by `ls -l`: entry count for folders, character count
    /// for files. The synthetic `..` is an empty folder and lists only its
    /// own `..`.
    pub fn entry_size(&self, entry: &Entry) -> usize {
        match entry {
            Entry::Up { .. } => 1,
            Entry::Child(id) => match self.get(*id).map(Node::kind) {
                Some(NodeKind::Folder(folder)) => folder.len() + 1,
                Some(NodeKind::File(file)) => file.len(),
                None => 0,
            },
        }
    }

    /// Absolute path of the cursor.
    pub fn current_directory_path(&self) -> String {
        self.path_of(self.cwd)
    }

    /// Absolute path of any node; `/` for the root.
    pub fn path_of(&self, id: NodeId) -> String {
        let mut segments = Vec::new();
        let mut curr = id;
        while let Some(node) = self.get(curr) {
            if node.parent == curr {
                break;
            }
            segments.push(node.name.as_str());
            curr = node.parent;
        }
        if segments.is_empty() {
            return "/".to_string();
        }
        segments.reverse();
        format!("/{}", segments.join("/"))
    }

    // ------------------------------------------------------------------------
    // Arena plumbing
    // ------------------------------------------------------------------------

    fn node(&self, id: NodeId) -> Result<&Node, FsError> {
        self.get(id).ok_or(FsError::DanglingNode)
    }

    fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut Node, FsError> {
        self.get_mut(id).ok_or(FsError::DanglingNode)
    }

    fn folder_mut(&mut self, id: NodeId) -> Result<&mut Folder, FsError> {
        let node = self.node_mut(id)?;
        match &mut node.kind {
            NodeKind::Folder(folder) => Ok(folder),
            NodeKind::File(_) => Err(FsError::NotAFolder { name: node.name.clone() }),
        }
    }

    fn expect_folder(&self, id: NodeId) -> Result<(), FsError> {
        let node = self.node(id)?;
        if node.is_folder() {
            Ok(())
        } else {
            Err(FsError::NotAFolder { name: node.name.clone() })
        }
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop() {
            if let Some(slot) = self.slots.get_mut(index) {
                slot.node = Some(node);
                return NodeId { index, generation: slot.generation };
            }
        }
        self.slots.push(Slot { generation: 0, node: Some(node) });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, mut id: NodeId) -> bool {
        loop {
            if id == ancestor {
                return true;
            }
            match self.get(id) {
                Some(node) if node.parent != id => id = node.parent,
                _ => return false,
            }
        }
    }

    /// Unlink `id` from the folder currently holding it, if any.
    fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else { return };
        let (parent, name) = (node.parent, node.name.clone());
        if parent != id && self.lookup(parent, &name) == Some(id) {
            if let Ok(folder) = self.folder_mut(parent) {
                folder.children.shift_remove(&name);
            }
        }
    }

    /// Free `id` and everything below it. The node must already be unlinked
    /// from its folder; its parent field still names that folder.
    fn release(&mut self, id: NodeId) {
        if self.is_ancestor_or_self(id, self.cwd) {
            if let Some(parent) = self.parent(id) {
                log::warn!(
                    "current folder {} removed, moving to {}",
                    self.path_of(self.cwd),
                    self.path_of(parent)
                );
                self.cwd = parent;
            }
        }

        let mut stack = vec![id];
        while let Some(curr) = stack.pop() {
            let Some(slot) = self.slots.get_mut(curr.index) else { continue };
            if slot.generation != curr.generation {
                continue;
            }
            let Some(node) = slot.node.take() else { continue };
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(curr.index);
            if let NodeKind::Folder(folder) = node.kind {
                stack.extend(folder.children.into_values());
            }
        }
    }
}

impl Default for Filesystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Names must be a single non-empty segment other than `.` and `..`.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains('/')
}

// ============================================================================
// Tests
// ============================================================================
