//! Folder hierarchy derived from tag containment
//!
//! A note whose tag names another note is contained by that note. Starting
//! from a root (table of contents) note, containment edges are followed
//! depth-first to give every reachable note a folder path. The root itself
//! never appears in a path, and notes not reachable from it stay at the top
//! level.
//!
//! Containment data may hold cycles and notes reachable along several
//! paths. The walk carries an explicit visited set: each note keeps the path
//! from its first visit, taking containees in note declaration order.

use crate::note::{note_file_name, sanitize_segment, Tiddler};
use std::collections::{BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};

/// The inputs the resolver needs from a note
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNote {
    pub title: String,
    pub tags: Vec<String>,
}

impl HierarchyNote {
    pub fn new(title: impl Into<String>, tags: &[&str]) -> Self {
        Self {
            title: title.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl From<&Tiddler> for HierarchyNote {
    fn from(tiddler: &Tiddler) -> Self {
        Self {
            title: tiddler.title.clone(),
            tags: tiddler.tag_list(),
        }
    }
}

/// Where one note lands in the output tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub title: String,

    /// Folder segments below the output root; empty at the top level
    pub folder_path: Vec<String>,

    /// The note contains others, so it sits inside a folder of its own name
    pub is_folder_note: bool,
}

impl ResolvedPath {
    fn flat(title: &str) -> Self {
        Self {
            title: title.to_string(),
            folder_path: Vec::new(),
            is_folder_note: false,
        }
    }

    /// Path of the note's file relative to the output root, `/`-separated
    pub fn file_path(&self) -> String {
        let mut segments = self.folder_path.clone();
        if self.is_folder_note {
            segments.push(sanitize_segment(&self.title));
        }
        segments.push(note_file_name(&self.title));
        segments.join("/")
    }
}

/// Notes as an arena indexed by declaration position, with containment
/// edges in both directions
#[derive(Debug, Default)]
pub struct ContainmentGraph {
    titles: Vec<String>,
    ids: HashMap<String, usize>,
    /// `containers[i]`: notes that contain note `i`
    containers: Vec<Vec<usize>>,
    /// `containees[i]`: notes that note `i` contains, in declaration order
    containees: Vec<Vec<usize>>,
}

impl ContainmentGraph {
    pub fn build(notes: &[HierarchyNote]) -> Self {
        let mut ids = HashMap::with_capacity(notes.len());
        for (id, note) in notes.iter().enumerate() {
            if ids.contains_key(&note.title) {
                warn!(title = %note.title, "duplicate title; only the first note can contain others");
                continue;
            }
            ids.insert(note.title.clone(), id);
        }

        let mut containers = vec![Vec::new(); notes.len()];
        let mut containees = vec![Vec::new(); notes.len()];
        for (id, note) in notes.iter().enumerate() {
            for tag in &note.tags {
                let Some(&container) = ids.get(tag) else {
                    continue;
                };
                if container == id || containers[id].contains(&container) {
                    continue;
                }
                containers[id].push(container);
                containees[container].push(id);
            }
        }

        Self {
            titles: notes.iter().map(|n| n.title.clone()).collect(),
            ids,
            containers,
            containees,
        }
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Arena id of the first note titled `title`
    pub fn id(&self, title: &str) -> Option<usize> {
        self.ids.get(title).copied()
    }

    pub fn title(&self, id: usize) -> &str {
        &self.titles[id]
    }

    /// Titles of the notes containing `title`
    pub fn containers_of(&self, title: &str) -> Vec<&str> {
        self.id(title)
            .map(|id| self.containers[id].iter().map(|&c| self.title(c)).collect())
            .unwrap_or_default()
    }

    /// Titles of the notes `title` contains
    pub fn containees_of(&self, title: &str) -> Vec<&str> {
        self.id(title)
            .map(|id| self.containees[id].iter().map(|&c| self.title(c)).collect())
            .unwrap_or_default()
    }

    /// Assign folder paths below `node`, whose children live under `path`
    fn descend(
        &self,
        node: usize,
        path: &[String],
        visited: &mut HashSet<usize>,
        resolved: &mut [ResolvedPath],
    ) {
        let mut placed_any = false;
        for &child in &self.containees[node] {
            if !visited.insert(child) {
                debug!(
                    title = %self.title(child),
                    container = %self.title(node),
                    "note already placed; keeping its first path"
                );
                continue;
            }
            placed_any = true;
            resolved[child].folder_path = path.to_vec();

            let mut child_path = path.to_vec();
            child_path.push(sanitize_segment(self.title(child)));
            self.descend(child, &child_path, visited, resolved);
        }
        // the root's children sit at the top level, so the root is never a folder
        if placed_any && !path.is_empty() {
            resolved[node].is_folder_note = true;
        }
    }
}

/// Resolve every note's place in the output tree.
///
/// Results are in the order of `notes`. Without a root, or with a root that
/// names no note, every note is flat.
pub fn resolve(notes: &[HierarchyNote], root: Option<&str>) -> Vec<ResolvedPath> {
    let mut resolved: Vec<ResolvedPath> = notes.iter().map(|n| ResolvedPath::flat(&n.title)).collect();

    let Some(root_title) = root else {
        return resolved;
    };
    let graph = ContainmentGraph::build(notes);
    let Some(root_id) = graph.id(root_title) else {
        warn!(root = %root_title, "root note not found; leaving all notes at the top level");
        return resolved;
    };

    let mut visited = HashSet::from([root_id]);
    graph.descend(root_id, &[], &mut visited, &mut resolved);
    debug!(
        placed = visited.len() - 1,
        total = graph.len(),
        "resolved hierarchy"
    );
    resolved
}

/// Every folder prefix across `paths`, sorted and de-duplicated, `/`-joined
pub fn directory_listing<'a>(paths: impl IntoIterator<Item = &'a [String]>) -> Vec<String> {
    let mut dirs = BTreeSet::new();
    for path in paths {
        for depth in 1..=path.len() {
            dirs.insert(path[..depth].join("/"));
        }
    }
    dirs.into_iter().collect()
}
