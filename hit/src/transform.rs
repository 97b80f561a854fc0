//! Structural tree transforms: `explode` and `merge`.

use crate::error::{Error, Result};
use crate::tree::{path_join, path_norm, Location, Node, Section};

/// Normalize a tree so that no node's name contains the path separator.
///
/// Any field or section named `a/b/c` is replaced by nested sections
/// `a` → `b` holding the node renamed to `c`. Intermediate sections that
/// already exist are reused rather than duplicated. Exploding twice is a
/// no-op, and the set of leaf (path, value) pairs is unchanged.
///
/// # Examples
///
/// ```
/// use hit::{explode, parse};
///
/// let mut root = parse("in.i", "foo/bar = 42\n").unwrap();
/// explode(&mut root);
/// assert_eq!(root.render(), "[foo]\n  bar = 42\n[]\n");
/// ```
pub fn explode(root: &mut Node) {
    if let Node::Section(sec) = root {
        explode_children(&mut sec.children);
    }
}

fn explode_children(children: &mut Vec<Node>) {
    let old = std::mem::take(children);
    for mut child in old {
        if let Node::Section(sec) = &mut child {
            explode_children(&mut sec.children);
        }

        let name = path_norm(child.name());
        if !name.contains('/') {
            children.push(child);
            continue;
        }

        let mut segments: Vec<&str> = name.split('/').collect();
        let leaf_name = segments.pop().unwrap_or_default().to_string();
        let location = child.location().clone();

        match &mut child {
            Node::Section(s) => s.name.clone_from(&leaf_name),
            Node::Field(f) => f.name.clone_from(&leaf_name),
            Node::Comment(_) | Node::Blank(_) => {}
        }

        let mut cursor: &mut Vec<Node> = children;
        for seg in &segments {
            cursor = section_children(cursor, seg, &location);
        }

        // a section landing on an existing section folds its children in
        if let Node::Section(sec) = &mut child {
            if let Some(idx) = position_of_section(cursor, &leaf_name) {
                if let Node::Section(existing) = &mut cursor[idx] {
                    existing.children.append(&mut sec.children);
                    continue;
                }
            }
        }
        cursor.push(child);
    }
}

fn position_of_section(children: &[Node], name: &str) -> Option<usize> {
    children
        .iter()
        .position(|c| matches!(c, Node::Section(s) if s.name() == name))
}

/// Find or create the section named `name` and return its child list.
fn section_children<'a>(
    children: &'a mut Vec<Node>,
    name: &str,
    location: &Location,
) -> &'a mut Vec<Node> {
    let idx = match position_of_section(children, name) {
        Some(i) => i,
        None => {
            children.push(Node::Section(Section::with_location(
                name,
                location.clone(),
            )));
            children.len() - 1
        }
    };
    match &mut children[idx] {
        Node::Section(sec) => &mut sec.children,
        _ => unreachable!("index was selected to point at a section"),
    }
}

/// Merge the tree under `from` into the tree under `into`.
///
/// For every field in `from`, the corresponding path in `into` receives the
/// field's value, kind, and source location, overwriting any existing value;
/// sections are union-merged recursively. Children exclusive to `from` are
/// moved into `into` in insertion order (`from` is consumed). In general
/// only already-exploded trees should be merged.
///
/// # Errors
///
/// Returns [`Error::MergeConflict`] when one side holds a section and the
/// other a field at the same path, and when either argument is not a
/// section root.
///
/// # Examples
///
/// ```
/// use hit::{merge, parse};
///
/// let mut base = parse("a.i", "a = 1\n").unwrap();
/// let overlay = parse("b.i", "a = 2\nb = 3\n").unwrap();
/// merge(overlay, &mut base).unwrap();
/// assert_eq!(base.param::<i64>("a").unwrap(), 2);
/// assert_eq!(base.param::<i64>("b").unwrap(), 3);
/// ```
pub fn merge(from: Node, into: &mut Node) -> Result<()> {
    match (from, into) {
        (Node::Section(src), Node::Section(dst)) => merge_sections(src, dst, ""),
        (from, _) => Err(Error::MergeConflict {
            path: path_norm(from.name()),
        }),
    }
}

fn merge_sections(src: Section, dst: &mut Section, prefix: &str) -> Result<()> {
    for child in src.children {
        let name = path_norm(child.name());
        match child {
            Node::Field(field) => {
                let path = path_join(&[prefix, &name]);
                match position_of_named(&dst.children, &name) {
                    Some(idx) => match &mut dst.children[idx] {
                        Node::Field(existing) => {
                            existing.set_val(field.raw, field.kind);
                            existing.location = field.location;
                        }
                        _ => return Err(Error::MergeConflict { path }),
                    },
                    None => dst.children.push(Node::Field(field)),
                }
            }
            Node::Section(section) => {
                let path = path_join(&[prefix, &name]);
                match position_of_named(&dst.children, &name) {
                    Some(idx) => match &mut dst.children[idx] {
                        Node::Section(existing) => merge_sections(section, existing, &path)?,
                        _ => return Err(Error::MergeConflict { path }),
                    },
                    None => dst.children.push(Node::Section(section)),
                }
            }
            // loose trivia only moves with an exclusive subtree
            Node::Comment(_) | Node::Blank(_) => {}
        }
    }
    Ok(())
}

fn position_of_named(children: &[Node], name: &str) -> Option<usize> {
    children
        .iter()
        .position(|c| !c.name().is_empty() && path_norm(c.name()) == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_explode_field() {
        let mut root = parse("t", "foo/bar = 42\n").unwrap();
        explode(&mut root);
        assert_eq!(root.render(), "[foo]\n  bar = 42\n[]\n");
        assert_eq!(root.param::<i64>("foo/bar").unwrap(), 42);
    }

    #[test]
    fn test_explode_deep_path() {
        let mut root = parse("t", "a/b/c/d = 1\n").unwrap();
        explode(&mut root);
        assert_eq!(root.param::<i64>("a/b/c/d").unwrap(), 1);
        // no name contains a separator any more
        assert!(root.find("a").unwrap().name() == "a");
        assert!(root.find("a/b/c").is_some());
    }

    #[test]
    fn test_explode_reuses_sections() {
        let mut root = parse("t", "a/x = 1\na/y = 2\n").unwrap();
        explode(&mut root);
        // both fields end up in one [a] section
        assert_eq!(root.render(), "[a]\n  x = 1\n  y = 2\n[]\n");
    }

    #[test]
    fn test_explode_slash_named_section() {
        let mut root = parse("t", "[a/b]\n  x = 1\n[]\n").unwrap();
        explode(&mut root);
        assert_eq!(root.param::<i64>("a/b/x").unwrap(), 1);
        assert_eq!(root.render(), "[a]\n  [b]\n    x = 1\n  []\n[]\n");
    }

    #[test]
    fn test_explode_folds_into_existing_nested_section() {
        let mut root = parse("t", "[a]\n  [b]\n    x = 1\n  []\n[]\n[a/b]\n  y = 2\n[]\n").unwrap();
        explode(&mut root);
        assert_eq!(root.param::<i64>("a/b/x").unwrap(), 1);
        assert_eq!(root.param::<i64>("a/b/y").unwrap(), 2);
    }

    #[test]
    fn test_explode_idempotent() {
        let mut once = parse("t", "a/b = 1\nc = 2\n[d]\n  e/f = 3\n[]\n").unwrap();
        explode(&mut once);
        let mut twice = once.clone();
        explode(&mut twice);
        assert_eq!(once.render(), twice.render());
    }

    #[test]
    fn test_merge_overlay_wins() {
        let mut base = parse("a.i", "a = 1\n").unwrap();
        let overlay = parse("b.i", "a = 2\nb = 3\n").unwrap();
        merge(overlay, &mut base).unwrap();
        assert_eq!(base.param::<i64>("a").unwrap(), 2);
        assert_eq!(base.param::<i64>("b").unwrap(), 3);
        // overwritten field is attributed to the overlay input
        assert_eq!(base.find("a").unwrap().filename(), "b.i");
    }

    #[test]
    fn test_merge_recurses_sections() {
        let mut base = parse("a.i", "[s]\n  x = 1\n  y = 2\n[]\n").unwrap();
        let overlay = parse("b.i", "[s]\n  y = 20\n  z = 30\n[]\n").unwrap();
        merge(overlay, &mut base).unwrap();
        assert_eq!(base.param::<i64>("s/x").unwrap(), 1);
        assert_eq!(base.param::<i64>("s/y").unwrap(), 20);
        assert_eq!(base.param::<i64>("s/z").unwrap(), 30);
    }

    #[test]
    fn test_merge_moves_exclusive_sections() {
        let mut base = parse("a.i", "a = 1\n").unwrap();
        let overlay = parse("b.i", "[only]\n  # kept comment\n  p = 2\n[]\n").unwrap();
        merge(overlay, &mut base).unwrap();
        assert_eq!(base.param::<i64>("only/p").unwrap(), 2);
        assert!(base.render().contains("# kept comment"));
    }

    #[test]
    fn test_merge_conflict_is_error() {
        let mut base = parse("a.i", "[x]\n  p = 1\n[]\n").unwrap();
        let overlay = parse("b.i", "x = 2\n").unwrap();
        let err = merge(overlay, &mut base).unwrap_err();
        assert!(format!("{err}").contains("'x'"));
    }

    #[test]
    fn test_merge_idempotent_on_values() {
        let mut base = parse("a.i", "a = 1\n[s]\n  x = 2\n[]\n").unwrap();
        let overlay = parse("b.i", "a = 9\n[s]\n  y = 8\n[]\n").unwrap();
        merge(overlay.clone(), &mut base).unwrap();
        let after_once = base.render();
        merge(overlay, &mut base).unwrap();
        assert_eq!(base.render(), after_once);
    }
}
