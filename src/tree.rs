//! Tree rendering for the accepted-path set.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

enum Node {
    Leaf,
    Directory(BTreeMap<String, Node>),
}

/// Renders a visual tree from a set of `/`-separated relative paths.
///
/// Siblings at each level are sorted case-insensitively, so the output is a
/// deterministic function of the path set regardless of insertion order. An
/// empty set renders a fixed placeholder. The rendered block ends with a
/// `---` separator line so it can be prepended to the concatenated contents.
pub fn render_tree(paths: &[String], root_name: &str) -> String {
    if paths.is_empty() {
        return format!("Repository Structure ({root_name}):\n(No files included)\n---\n");
    }

    let mut root = BTreeMap::new();
    for path in paths {
        insert_path(&mut root, path);
    }

    let mut lines = vec![format!("Repository Structure ({root_name}):")];
    render_level(&root, "", &mut lines);
    lines.join("\n") + "\n---\n"
}

fn insert_path(root: &mut BTreeMap<String, Node>, path: &str) {
    let mut level = root;
    let mut segments = path.split('/').filter(|s| !s.is_empty()).peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            match level.entry(segment.to_string()) {
                Entry::Vacant(slot) => {
                    slot.insert(Node::Leaf);
                }
                Entry::Occupied(existing) => {
                    // Same name as a directory seen elsewhere; only possible
                    // with a synthetic path set. Keep the directory.
                    if matches!(existing.get(), Node::Directory(_)) {
                        eprintln!("Warning: path conflict detected for '{segment}' in tree generation");
                    }
                }
            }
        } else {
            let node = level
                .entry(segment.to_string())
                .or_insert_with(|| Node::Directory(BTreeMap::new()));
            if matches!(node, Node::Leaf) {
                eprintln!("Warning: path conflict detected for '{segment}' in tree generation");
                *node = Node::Directory(BTreeMap::new());
            }
            let Node::Directory(children) = node else {
                unreachable!("leaf nodes are coerced to directories above")
            };
            level = children;
        }
    }
}

fn render_level(level: &BTreeMap<String, Node>, prefix: &str, lines: &mut Vec<String>) {
    let mut entries: Vec<(&String, &Node)> = level.iter().collect();
    entries.sort_by_key(|(name, _)| name.to_lowercase());

    let count = entries.len();
    for (i, (name, node)) in entries.into_iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { "└── " } else { "├── " };
        lines.push(format!("{prefix}{connector}{name}"));
        if let Node::Directory(children) = node {
            let extension = if is_last { "    " } else { "│   " };
            render_level(children, &format!("{prefix}{extension}"), lines);
        }
    }
}
