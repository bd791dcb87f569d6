//! TreeWalker - enumerates descendant directories without recursion

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use super::config::{TraversalOrder, WalkerConfig};
use super::utils::read_sorted_entries;

/// Walks a directory tree and returns every descendant directory in the
/// configured order. The root itself is never part of the output.
///
/// Children are always visited in lexicographic order of their names, so two
/// walks over an unchanged tree produce identical lists.
pub struct TreeWalker {
    config: WalkerConfig,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &WalkerConfig {
        &self.config
    }

    pub fn traverse(&self, root: &Path) -> Vec<PathBuf> {
        let mut visited = HashSet::new();
        if let Ok(real) = root.canonicalize() {
            visited.insert(real);
        }

        match self.config.order {
            TraversalOrder::DepthFirst => self.depth_first(root, &mut visited),
            TraversalOrder::BreadthFirst => self.breadth_first(root, &mut visited),
        }
    }

    /// Pre-order walk driven by an explicit stack.
    fn depth_first(&self, root: &Path, visited: &mut HashSet<PathBuf>) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        let mut stack: Vec<(PathBuf, usize)> = self
            .child_dirs(root, 1)
            .into_iter()
            .rev()
            .map(|p| (p, 1))
            .collect();

        while let Some((path, depth)) = stack.pop() {
            if !first_visit(&path, visited) {
                continue;
            }
            // Reversed so the lexicographically first child is popped next
            let children = self.child_dirs(&path, depth + 1);
            stack.extend(children.into_iter().rev().map(|c| (c, depth + 1)));
            dirs.push(path);
        }

        dirs
    }

    /// Level-order walk driven by a FIFO queue.
    fn breadth_first(&self, root: &Path, visited: &mut HashSet<PathBuf>) -> Vec<PathBuf> {
        let mut dirs = Vec::new();
        let mut queue: VecDeque<(PathBuf, usize)> = VecDeque::new();
        queue.push_back((root.to_path_buf(), 0));

        while let Some((path, depth)) = queue.pop_front() {
            for child in self.child_dirs(&path, depth + 1) {
                if !first_visit(&child, visited) {
                    continue;
                }
                dirs.push(child.clone());
                queue.push_back((child, depth + 1));
            }
        }

        dirs
    }

    /// List the traversable subdirectories of `path`, sorted by name.
    /// `depth` is the depth the children would have.
    fn child_dirs(&self, path: &Path, depth: usize) -> Vec<PathBuf> {
        if self.config.max_depth.is_some_and(|max| depth > max) {
            return Vec::new();
        }

        let Some(entries) = read_sorted_entries(path, &self.config.ignore_patterns) else {
            return Vec::new();
        };

        entries
            .into_iter()
            .map(|entry| entry.path())
            .filter(|p| self.is_traversable(p))
            .collect()
    }

    fn is_traversable(&self, path: &Path) -> bool {
        if path.is_symlink() && !self.config.follow_symlinks {
            return false;
        }
        // Follows symlinks; broken links are not directories
        path.is_dir()
    }
}

/// Record the canonical path of `path`, returning false if it was seen before
/// or can no longer be resolved.
fn first_visit(path: &Path, visited: &mut HashSet<PathBuf>) -> bool {
    match path.canonicalize() {
        Ok(real) => {
            if visited.insert(real) {
                true
            } else {
                log::debug!("not revisiting {}", path.display());
                false
            }
        }
        Err(err) => {
            log::debug!("skipping {}: {}", path.display(), err);
            false
        }
    }
}

/// Enumerate the directories below `root` in the given order with default
/// settings.
pub fn traverse(root: &Path, order: TraversalOrder) -> Vec<PathBuf> {
    TreeWalker::new(WalkerConfig::with_order(order)).traverse(root)
}
