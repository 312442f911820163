//! The session filesystem: path resolution, navigation and the file operations.

use folio_types::error::{FolioError, VfsError};

use crate::arena::{BaseArena, Overlay};
use crate::clock::{Clock, SystemClock};
use crate::format::{self, Subtype};
use crate::glob::Glob;
use crate::node::{Node, NodeKind, TreeNode};
use crate::path;

type Result<T> = std::result::Result<T, VfsError>;

/// Flags accepted by [`VirtualFs::ls`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LsOptions {
    /// Prepend the synthetic `.` and `..` entries.
    pub all: bool,
    /// Render a long-format line per entry.
    pub long: bool,
    /// Human-readable sizes in long format.
    pub human: bool,
}

/// One row of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LsEntry {
    pub name: String,
    pub kind: NodeKind,
    pub size: u64,
    pub modified: Option<u64>,
    /// `perms links owner group size date name`, present with `long`.
    pub long: Option<String>,
}

/// Filters for [`VirtualFs::find`].
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub name: Option<Glob>,
    pub kind: Option<NodeKind>,
}

/// Result of [`VirtualFs::touch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchOutcome {
    Created,
    Updated,
}

/// Metadata reported by [`VirtualFs::stat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatInfo {
    pub path: String,
    pub name: String,
    pub kind: NodeKind,
    pub size: u64,
    pub created: Option<u64>,
    pub modified: Option<u64>,
    pub subtype: Subtype,
}

/// Rendered tree below a folder, without the header line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeReport {
    pub lines: Vec<String>,
    pub folders: usize,
    pub files: usize,
}

/// In-memory filesystem owned by one terminal session.
pub struct VirtualFs {
    base: BaseArena,
    overlay: Overlay,
    cwd: String,
    dir_history: Vec<String>,
    owner: String,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for VirtualFs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualFs")
            .field("cwd", &self.cwd)
            .field("base_nodes", &self.base.len())
            .field("overlay_nodes", &self.overlay.len())
            .finish_non_exhaustive()
    }
}

impl VirtualFs {
    /// Build a filesystem over `root`. The root record must be a folder.
    pub fn new(root: TreeNode) -> Result<Self> {
        let base = BaseArena::build(root)?;
        log::debug!("VFS base tree loaded with {} nodes", base.len());
        Ok(Self {
            base,
            overlay: Overlay::default(),
            cwd: "/".to_string(),
            dir_history: vec!["/".to_string()],
            owner: "guest".to_string(),
            clock: Box::new(SystemClock),
        })
    }

    /// A filesystem with nothing but the root folder.
    pub fn empty() -> Self {
        Self {
            base: BaseArena::root_only(),
            overlay: Overlay::default(),
            cwd: "/".to_string(),
            dir_history: vec!["/".to_string()],
            owner: "guest".to_string(),
            clock: Box::new(SystemClock),
        }
    }

    /// Build a filesystem from a JSON-encoded [`TreeNode`].
    pub fn from_json(json: &str) -> folio_types::error::Result<Self> {
        let root: TreeNode = serde_json::from_str(json)?;
        Self::new(root).map_err(FolioError::from)
    }

    /// Replace the time source used for new and touched nodes.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Set the owner and group shown in long listings.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = owner.into();
        self
    }

    // -----------------------------------------------------------------------
    // Lookup
    // -----------------------------------------------------------------------

    fn lookup(&self, path: &str) -> Option<&Node> {
        match self.overlay.lookup(path) {
            Some(id) => Some(self.overlay.get(id)),
            None => self.base.lookup(path).map(|id| self.base.get(id)),
        }
    }

    /// Children of `dir` in stored order: base children first (shadowed by
    /// their overlay copies), then overlay-only nodes in creation order.
    fn children(&self, dir: &str) -> Vec<(String, &Node)> {
        let mut out = Vec::new();
        if let Some(id) = self.base.lookup(dir) {
            for &child in &self.base.get(id).children {
                let node = self.base.get(child);
                let child_path = path::join(dir, &node.name);
                let node = self
                    .overlay
                    .lookup(&child_path)
                    .map_or(node, |oid| self.overlay.get(oid));
                out.push((child_path, node));
            }
        }
        for (child_path, id) in self.overlay.children_of(dir) {
            if self.base.lookup(child_path).is_none() {
                out.push((child_path.to_string(), self.overlay.get(id)));
            }
        }
        out
    }

    /// Children of `dir` sorted folders first, then by name.
    fn sorted_children(&self, dir: &str) -> Vec<(String, &Node)> {
        let mut children = self.children(dir);
        children.sort_by(|(_, a), (_, b)| {
            b.is_dir()
                .cmp(&a.is_dir())
                .then_with(|| a.name.cmp(&b.name))
        });
        children
    }

    fn require(&self, path: &str) -> Result<&Node> {
        self.lookup(path)
            .ok_or_else(|| VfsError::NotFound(path.to_string()))
    }

    fn require_dir(&self, path: &str) -> Result<&Node> {
        let node = self.require(path)?;
        if node.is_dir() {
            Ok(node)
        } else {
            Err(VfsError::NotADirectory(path.to_string()))
        }
    }

    pub fn exists(&self, input: &str) -> bool {
        self.lookup(&self.resolve_path(input)).is_some()
    }

    pub fn is_dir(&self, input: &str) -> bool {
        self.lookup(&self.resolve_path(input))
            .is_some_and(Node::is_dir)
    }

    /// The node at `input`, if any.
    pub fn node(&self, input: &str) -> Option<&Node> {
        self.lookup(&self.resolve_path(input))
    }

    /// Number of nodes created or copied since construction.
    pub fn overlay_len(&self) -> usize {
        self.overlay.len()
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// Resolve `input` against the working directory.
    pub fn resolve_path(&self, input: &str) -> String {
        path::resolve(&self.cwd, input)
    }

    pub fn pwd(&self) -> &str {
        &self.cwd
    }

    /// Change directory and return the new working directory.
    ///
    /// `-` steps back through the directory history; it stays put once only
    /// the initial entry is left.
    pub fn cd(&mut self, input: &str) -> Result<String> {
        if input == "-" {
            if self.dir_history.len() > 1 {
                self.dir_history.pop();
            }
            if let Some(last) = self.dir_history.last() {
                self.cwd.clone_from(last);
            }
            return Ok(self.cwd.clone());
        }

        let target = if input.is_empty() {
            "/".to_string()
        } else {
            self.resolve_path(input)
        };
        self.require_dir(&target)?;
        self.cwd.clone_from(&target);
        self.dir_history.push(target);
        Ok(self.cwd.clone())
    }

    // -----------------------------------------------------------------------
    // Reading
    // -----------------------------------------------------------------------

    /// List a folder, or a single entry for a file. `None` lists the cwd.
    pub fn ls(&self, input: Option<&str>, opts: LsOptions) -> Result<Vec<LsEntry>> {
        let target = input.map_or_else(|| self.cwd.clone(), |i| self.resolve_path(i));
        let node = self.require(&target)?;

        if !node.is_dir() {
            return Ok(vec![self.ls_entry(path::file_name(&target), node, opts)]);
        }

        let mut entries = Vec::new();
        if opts.all {
            entries.push(self.ls_entry(".", node, opts));
            if let Some(parent) = self.lookup(path::parent(&target)) {
                entries.push(self.ls_entry("..", parent, opts));
            }
        }
        for (_, child) in self.sorted_children(&target) {
            entries.push(self.ls_entry(&child.name, child, opts));
        }
        Ok(entries)
    }

    fn ls_entry(&self, name: &str, node: &Node, opts: LsOptions) -> LsEntry {
        let long = opts.long.then(|| {
            let size = if opts.human {
                format::human_size(node.size())
            } else {
                node.size().to_string()
            };
            format!(
                "{} {:>2} {owner} {owner} {size:>6} {} {name}",
                format::permissions(node.kind),
                format::link_count(node.kind),
                format::ls_date(node.modified.or(node.created).unwrap_or_default()),
                owner = self.owner,
            )
        });
        LsEntry {
            name: name.to_string(),
            kind: node.kind,
            size: node.size(),
            modified: node.modified,
            long,
        }
    }

    /// File content; empty when the file carries none.
    pub fn cat(&self, input: &str) -> Result<String> {
        let target = self.resolve_path(input);
        let node = self.require(&target)?;
        if node.is_dir() {
            return Err(VfsError::IsADirectory(target));
        }
        Ok(node.content().unwrap_or_default().to_string())
    }

    pub fn stat(&self, input: &str) -> Result<StatInfo> {
        let target = self.resolve_path(input);
        let node = self.require(&target)?;
        Ok(StatInfo {
            name: path::file_name(&target).to_string(),
            kind: node.kind,
            size: node.size(),
            created: node.created,
            modified: node.modified,
            subtype: Subtype::classify(&node.name, node.kind),
            path: target,
        })
    }

    // -----------------------------------------------------------------------
    // Writing
    // -----------------------------------------------------------------------

    /// Create a folder and return its absolute path.
    ///
    /// With `parents`, every missing ancestor is created too.
    pub fn mkdir(&mut self, input: &str, parents: bool) -> Result<String> {
        let target = self.resolve_path(input);
        if self.lookup(&target).is_some() {
            return Err(VfsError::AlreadyExists(target));
        }

        let parent = path::parent(&target).to_string();
        match self.lookup(&parent) {
            Some(node) if node.is_dir() => {},
            Some(_) => return Err(VfsError::NotADirectory(parent)),
            None if parents => self.create_ancestors(&parent)?,
            None => return Err(VfsError::NotFound(parent)),
        }

        let now = self.clock.now();
        let node = Node::new_folder(path::file_name(&target), now);
        self.overlay.insert(target.clone(), node);
        log::debug!("mkdir {target}");
        Ok(target)
    }

    fn create_ancestors(&mut self, dir: &str) -> Result<()> {
        let mut current = String::from("/");
        for segment in dir.split('/').filter(|s| !s.is_empty()) {
            current = path::join(&current, segment);
            match self.lookup(&current) {
                Some(node) if node.is_dir() => {},
                Some(_) => return Err(VfsError::NotADirectory(current)),
                None => {
                    let now = self.clock.now();
                    self.overlay
                        .insert(current.clone(), Node::new_folder(segment, now));
                },
            }
        }
        Ok(())
    }

    /// Create an empty file, or refresh the modification time of an
    /// existing node.
    pub fn touch(&mut self, input: &str) -> Result<TouchOutcome> {
        let target = self.resolve_path(input);
        let now = self.clock.now();

        if let Some(id) = self.overlay.lookup(&target) {
            self.overlay.get_mut(id).modified = Some(now);
            return Ok(TouchOutcome::Updated);
        }
        if let Some(id) = self.base.lookup(&target) {
            let mut copy = self.base.get(id).detached();
            copy.modified = Some(now);
            self.overlay.insert(target, copy);
            return Ok(TouchOutcome::Updated);
        }

        let parent = path::parent(&target).to_string();
        self.require_dir(&parent)?;
        let node = Node::new_file(path::file_name(&target), now);
        self.overlay.insert(target.clone(), node);
        log::debug!("touch {target}");
        Ok(TouchOutcome::Created)
    }

    // -----------------------------------------------------------------------
    // Traversal
    // -----------------------------------------------------------------------

    /// Absolute paths of the nodes below `start` that pass `opts`,
    /// depth-first with each parent before its children.
    pub fn find(&self, start: &str, opts: &FindOptions) -> Result<Vec<String>> {
        let root = self.resolve_path(start);
        let node = self.require(&root)?;
        let mut out = Vec::new();
        if node.is_dir() {
            self.find_recursive(&root, opts, &mut out);
        }
        Ok(out)
    }

    fn find_recursive(&self, dir: &str, opts: &FindOptions, out: &mut Vec<String>) {
        for (child_path, node) in self.children(dir) {
            let kind_ok = opts.kind.is_none_or(|k| k == node.kind);
            let name_ok = opts.name.as_ref().is_none_or(|g| g.is_match(&node.name));
            if kind_ok && name_ok {
                out.push(child_path.clone());
            }
            if node.is_dir() {
                self.find_recursive(&child_path, opts, out);
            }
        }
    }

    /// Render the tree below the folder at `start`, at most `max_depth`
    /// levels deep.
    pub fn tree(&self, start: &str, max_depth: usize) -> Result<TreeReport> {
        let root = self.resolve_path(start);
        self.require_dir(&root)?;
        let mut report = TreeReport::default();
        self.tree_recursive(&root, "", 1, max_depth, &mut report);
        Ok(report)
    }

    fn tree_recursive(
        &self,
        dir: &str,
        prefix: &str,
        depth: usize,
        max_depth: usize,
        report: &mut TreeReport,
    ) {
        if depth > max_depth {
            return;
        }
        let entries = self.sorted_children(dir);
        let count = entries.len();
        for (i, (child_path, node)) in entries.into_iter().enumerate() {
            let is_last = i + 1 == count;
            let connector = if is_last { "└── " } else { "├── " };
            let suffix = if node.is_dir() { "/" } else { "" };
            report
                .lines
                .push(format!("{prefix}{connector}{}{suffix}", node.name));

            if node.is_dir() {
                report.folders += 1;
                let child_prefix = if is_last {
                    format!("{prefix}    ")
                } else {
                    format!("{prefix}│   ")
                };
                self.tree_recursive(&child_path, &child_prefix, depth + 1, max_depth, report);
            } else {
                report.files += 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[derive(Clone)]
    struct ManualClock(Rc<Cell<u64>>);

    impl Clock for ManualClock {
        fn now(&self) -> u64 {
            self.0.get()
        }
    }

    fn sample() -> TreeNode {
        TreeNode::folder(
            "",
            vec![
                TreeNode::file("readme.md", "# folio").with_times(100, 100),
                TreeNode::folder(
                    "projects",
                    vec![
                        TreeNode::file("app.js", "console.log(1)"),
                        TreeNode::file("app.jsx", "<App />"),
                        TreeNode::folder("web", vec![TreeNode::file("index.js", "")]),
                    ],
                ),
                TreeNode::folder("blog", Vec::new()),
                TreeNode::file("Zeta.txt", "z"),
            ],
        )
    }

    fn fixture() -> (VirtualFs, Rc<Cell<u64>>) {
        let time = Rc::new(Cell::new(1_000));
        let vfs = VirtualFs::new(sample())
            .unwrap()
            .with_clock(ManualClock(Rc::clone(&time)));
        (vfs, time)
    }

    fn names(entries: &[LsEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn cd_and_pwd() {
        let (mut vfs, _) = fixture();
        assert_eq!(vfs.cd("projects").unwrap(), "/projects");
        assert_eq!(vfs.cd("web").unwrap(), "/projects/web");
        assert_eq!(vfs.cd("../..").unwrap(), "/");
        assert_eq!(vfs.cd("~/blog").unwrap(), "/blog");
        assert_eq!(vfs.cd("").unwrap(), "/");
        assert_eq!(vfs.pwd(), "/");
    }

    #[test]
    fn cd_errors() {
        let (mut vfs, _) = fixture();
        assert_eq!(vfs.cd("nope"), Err(VfsError::NotFound("/nope".into())));
        assert_eq!(
            vfs.cd("readme.md"),
            Err(VfsError::NotADirectory("/readme.md".into()))
        );
        assert_eq!(vfs.pwd(), "/");
    }

    #[test]
    fn cd_dash_walks_history() {
        let (mut vfs, _) = fixture();
        vfs.cd("/projects").unwrap();
        vfs.cd("/projects/web").unwrap();
        assert_eq!(vfs.cd("-").unwrap(), "/projects");
        assert_eq!(vfs.cd("-").unwrap(), "/");
        assert_eq!(vfs.cd("-").unwrap(), "/");
    }

    #[test]
    fn ls_folders_first_then_name() {
        let (vfs, _) = fixture();
        let entries = vfs.ls(None, LsOptions::default()).unwrap();
        assert_eq!(names(&entries), vec!["blog", "projects", "Zeta.txt", "readme.md"]);
    }

    #[test]
    fn ls_all_adds_dot_entries() {
        let (vfs, _) = fixture();
        let opts = LsOptions {
            all: true,
            ..LsOptions::default()
        };
        let entries = vfs.ls(Some("/blog"), opts).unwrap();
        assert_eq!(names(&entries), vec![".", ".."]);
    }

    #[test]
    fn ls_file_is_single_entry() {
        let (vfs, _) = fixture();
        let entries = vfs.ls(Some("readme.md"), LsOptions::default()).unwrap();
        assert_eq!(names(&entries), vec!["readme.md"]);
        assert_eq!(entries[0].size, 7);
    }

    #[test]
    fn ls_long_format() {
        let (vfs, _) = fixture();
        let opts = LsOptions {
            long: true,
            ..LsOptions::default()
        };
        let entries = vfs.ls(Some("/readme.md"), opts).unwrap();
        let line = entries[0].long.as_deref().unwrap();
        assert!(line.starts_with("-rw-r--r--  1 guest guest"), "{line}");
        assert!(line.ends_with("Jan  1 00:01 readme.md"), "{line}");

        let human = LsOptions {
            long: true,
            human: true,
            ..LsOptions::default()
        };
        let entries = vfs.ls(Some("/"), human).unwrap();
        let line = entries[0].long.as_deref().unwrap();
        assert!(line.starts_with("drwxr-xr-x  2 guest guest"), "{line}");
        assert!(line.contains("4K"), "{line}");
    }

    #[test]
    fn ls_missing_is_not_found() {
        let (vfs, _) = fixture();
        assert_eq!(
            vfs.ls(Some("/missing"), LsOptions::default()),
            Err(VfsError::NotFound("/missing".into()))
        );
    }

    #[test]
    fn cat_reads_content() {
        let (vfs, _) = fixture();
        assert_eq!(vfs.cat("/readme.md").unwrap(), "# folio");
        assert_eq!(
            vfs.cat("/projects"),
            Err(VfsError::IsADirectory("/projects".into()))
        );
        assert_eq!(vfs.cat("/nope"), Err(VfsError::NotFound("/nope".into())));
    }

    #[test]
    fn mkdir_single_and_errors() {
        let (mut vfs, _) = fixture();
        assert_eq!(vfs.mkdir("notes", false).unwrap(), "/notes");
        assert!(vfs.is_dir("/notes"));
        assert_eq!(
            vfs.mkdir("notes", false),
            Err(VfsError::AlreadyExists("/notes".into()))
        );
        assert_eq!(
            vfs.mkdir("/a/b", false),
            Err(VfsError::NotFound("/a".into()))
        );
        assert_eq!(
            vfs.mkdir("/readme.md/x", false),
            Err(VfsError::NotADirectory("/readme.md".into()))
        );
        assert_eq!(vfs.mkdir("/", false), Err(VfsError::AlreadyExists("/".into())));
    }

    #[test]
    fn mkdir_parents_creates_every_segment() {
        let (mut vfs, _) = fixture();
        vfs.mkdir("/x/y/z", true).unwrap();
        for dir in ["/x", "/x/y", "/x/y/z"] {
            assert!(vfs.is_dir(dir), "{dir} missing");
        }
        assert_eq!(vfs.overlay_len(), 3);
        assert_eq!(
            vfs.mkdir("/readme.md/a/b", true),
            Err(VfsError::NotADirectory("/readme.md".into()))
        );
    }

    #[test]
    fn touch_creates_then_updates() {
        let (mut vfs, time) = fixture();
        assert_eq!(vfs.touch("f.txt").unwrap(), TouchOutcome::Created);
        let created = vfs.stat("f.txt").unwrap();
        assert_eq!(created.created, Some(1_000));
        assert_eq!(created.size, 0);

        time.set(2_000);
        assert_eq!(vfs.touch("f.txt").unwrap(), TouchOutcome::Updated);
        let updated = vfs.stat("f.txt").unwrap();
        assert_eq!(updated.created, Some(1_000));
        assert_eq!(updated.modified, Some(2_000));
        assert_eq!(vfs.cat("f.txt").unwrap(), "");
    }

    #[test]
    fn touch_base_node_copies_into_overlay() {
        let (mut vfs, _) = fixture();
        assert_eq!(vfs.touch("/readme.md").unwrap(), TouchOutcome::Updated);
        let info = vfs.stat("/readme.md").unwrap();
        assert_eq!(info.created, Some(100));
        assert_eq!(info.modified, Some(1_000));
        assert_eq!(vfs.cat("/readme.md").unwrap(), "# folio");
        assert_eq!(vfs.overlay_len(), 1);
    }

    #[test]
    fn touch_base_folder_keeps_children() {
        let (mut vfs, _) = fixture();
        vfs.touch("/projects").unwrap();
        let entries = vfs.ls(Some("/projects"), LsOptions::default()).unwrap();
        assert_eq!(names(&entries), vec!["web", "app.js", "app.jsx"]);
    }

    #[test]
    fn touch_requires_parent_folder() {
        let (mut vfs, _) = fixture();
        assert_eq!(
            vfs.touch("/missing/f"),
            Err(VfsError::NotFound("/missing".into()))
        );
        assert_eq!(
            vfs.touch("/readme.md/f"),
            Err(VfsError::NotADirectory("/readme.md".into()))
        );
    }

    #[test]
    fn stat_subtypes() {
        let (vfs, _) = fixture();
        assert_eq!(vfs.stat("/projects").unwrap().subtype, Subtype::Directory);
        assert_eq!(vfs.stat("/projects/app.js").unwrap().subtype, Subtype::Code);
        assert_eq!(vfs.stat("/readme.md").unwrap().subtype, Subtype::Document);
        assert_eq!(vfs.stat("/").unwrap().name, "");
    }

    #[test]
    fn find_by_glob_and_kind() {
        let (vfs, _) = fixture();
        let js = FindOptions {
            name: Some(Glob::new("*.js").unwrap()),
            kind: None,
        };
        assert_eq!(
            vfs.find("/", &js).unwrap(),
            vec!["/projects/app.js", "/projects/web/index.js"]
        );

        let dirs = FindOptions {
            name: None,
            kind: Some(NodeKind::Folder),
        };
        assert_eq!(
            vfs.find("/", &dirs).unwrap(),
            vec!["/projects", "/projects/web", "/blog"]
        );
    }

    #[test]
    fn find_excludes_start_and_sees_overlay() {
        let (mut vfs, _) = fixture();
        vfs.touch("/projects/new.js").unwrap();
        vfs.cd("/projects").unwrap();
        let all = vfs.find(".", &FindOptions::default()).unwrap();
        assert_eq!(
            all,
            vec![
                "/projects/app.js",
                "/projects/app.jsx",
                "/projects/web",
                "/projects/web/index.js",
                "/projects/new.js",
            ]
        );
        assert!(vfs.find("/readme.md", &FindOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn tree_renders_connectors() {
        let (vfs, _) = fixture();
        let report = vfs.tree("/projects", 3).unwrap();
        assert_eq!(
            report.lines,
            vec!["├── web/", "│   └── index.js", "├── app.js", "└── app.jsx"]
        );
        assert_eq!(report.folders, 1);
        assert_eq!(report.files, 3);
    }

    #[test]
    fn tree_respects_depth() {
        let (vfs, _) = fixture();
        let report = vfs.tree("/", 1).unwrap();
        assert_eq!(report.lines.len(), 4);
        assert_eq!(report.folders, 2);
        assert_eq!(report.files, 2);
        assert_eq!(
            vfs.tree("/readme.md", 3),
            Err(VfsError::NotADirectory("/readme.md".into()))
        );
    }

    #[test]
    fn from_json_builds_tree() {
        let vfs = VirtualFs::from_json(
            r#"{"name":"","kind":"folder","children":[{"name":"a.txt","kind":"file","content":"x"}]}"#,
        )
        .unwrap();
        assert_eq!(vfs.cat("/a.txt").unwrap(), "x");
        assert!(VirtualFs::from_json("{").is_err());
    }

    #[test]
    fn empty_has_only_root() {
        let vfs = VirtualFs::empty();
        assert!(vfs.is_dir("/"));
        assert!(vfs.ls(None, LsOptions::default()).unwrap().is_empty());
    }
}
