//! Read-only tree walkers and removal sweeps.
//!
//! Analyses that only observe the tree implement [`Walker`] and are driven
//! by [`Node::walk`]. Sweeps that delete nodes (`remove_params`,
//! `remove_empty_sections`) are tree operations instead: mutation during
//! visitation is an ownership concern the tree handles itself.

use std::collections::{BTreeMap, BTreeSet};

use crate::tree::{path_join, Location, Node, Walker};

/// Ordered map from fullpath to the field node found there.
pub type ParamMap<'t> = BTreeMap<String, &'t Node>;

/// Records the first node seen at each fullpath and reports duplicates.
///
/// On the second occurrence of a path, two errors are emitted (one against
/// the original node and one against the duplicate); on later occurrences
/// only the newly seen node is reported.
///
/// # Examples
///
/// ```
/// use hit::parse;
/// use hit::walkers::DupParamWalker;
///
/// let root = parse("in.i", "[x]\n  p = 1\n[]\n[x]\n  p = 2\n[]\n").unwrap();
/// let mut walker = DupParamWalker::new();
/// root.walk(&mut walker);
/// assert_eq!(walker.errors().len(), 2);
/// ```
#[derive(Default)]
pub struct DupParamWalker {
    seen: BTreeMap<String, Location>,
    duplicated: BTreeSet<String>,
    errors: Vec<String>,
}

impl DupParamWalker {
    /// Create a walker with no recorded paths.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The duplicate errors accumulated so far, in visitation order.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Whether any duplicates were found.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

impl<'t> Walker<'t> for DupParamWalker {
    fn visit(&mut self, fullpath: &str, node: &'t Node) {
        let prefix = match node {
            Node::Field(_) => "parameter",
            Node::Section(_) => "section",
            Node::Comment(_) | Node::Blank(_) => return,
        };

        if let Some(original) = self.seen.get(fullpath) {
            if self.duplicated.insert(fullpath.to_string()) {
                self.errors.push(format!(
                    "{}:{}: {prefix} '{fullpath}' supplied multiple times",
                    original.file, original.line
                ));
            }
            self.errors.push(format!(
                "{}:{}: {prefix} '{fullpath}' supplied multiple times",
                node.filename(),
                node.line()
            ));
        } else {
            self.seen
                .insert(fullpath.to_string(), node.location().clone());
        }
    }
}

/// Collects a fullpath → field map over the walked tree.
///
/// If duplicates exist, the last field seen at a path wins.
#[derive(Default)]
pub struct GatherParamWalker<'t> {
    params: ParamMap<'t>,
}

impl<'t> GatherParamWalker<'t> {
    /// Create a walker with an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The gathered parameter map.
    #[must_use]
    pub fn params(&self) -> &ParamMap<'t> {
        &self.params
    }

    /// Consume the walker, returning the gathered map.
    #[must_use]
    pub fn into_params(self) -> ParamMap<'t> {
        self.params
    }
}

impl<'t> Walker<'t> for GatherParamWalker<'t> {
    fn visit(&mut self, fullpath: &str, node: &'t Node) {
        if node.as_field().is_some() {
            self.params.insert(fullpath.to_string(), node);
        }
    }
}

/// Delete every field whose fullpath is in the reference set.
///
/// Removal is keyed by path alone; the value stored at the path does not
/// matter.
pub fn remove_params(root: &mut Node, paths: &BTreeSet<String>) {
    if let Node::Section(sec) = root {
        remove_params_inner(sec.children_mut(), "", paths);
    }
}

fn remove_params_inner(children: &mut Vec<Node>, prefix: &str, paths: &BTreeSet<String>) {
    children.retain(|child| match child {
        Node::Field(_) => !paths.contains(&path_join(&[prefix, child.name()])),
        _ => true,
    });
    for child in children.iter_mut() {
        let child_path = path_join(&[prefix, child.name()]);
        if let Node::Section(sec) = child {
            remove_params_inner(sec.children_mut(), &child_path, paths);
        }
    }
}

/// Delete, post-order, every section left with no field or comment
/// descendant.
///
/// Comment-only sections survive; sections holding only blanks or nothing
/// (including chains of such sections) are dropped.
pub fn remove_empty_sections(root: &mut Node) {
    if let Node::Section(sec) = root {
        prune_sections(sec.children_mut());
    }
}

fn prune_sections(children: &mut Vec<Node>) {
    for child in children.iter_mut() {
        if let Node::Section(sec) = child {
            prune_sections(sec.children_mut());
        }
    }
    children.retain(|child| match child {
        Node::Section(sec) => sec
            .children()
            .iter()
            .any(|c| matches!(c, Node::Field(_) | Node::Comment(_) | Node::Section(_))),
        _ => true,
    });
}

/// Run [`DupParamWalker`] over a tree and return its errors.
///
/// This is the validation pass behind `hit validate`.
#[must_use]
pub fn duplicate_errors(root: &Node) -> Vec<String> {
    let mut walker = DupParamWalker::new();
    root.walk(&mut walker);
    walker.errors
}

/// Gather the leaf parameter map of a tree keyed by fullpath.
#[must_use]
pub fn gather_params(root: &Node) -> ParamMap<'_> {
    let mut walker = GatherParamWalker::new();
    root.walk(&mut walker);
    walker.into_params()
}
